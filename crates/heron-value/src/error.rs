//! Deep copy errors

use thiserror::Error;

/// Errors raised by a [`DeepCopier`](crate::deep_copy::DeepCopier) under a
/// non-default [`CloneConfig`](crate::deep_copy::CloneConfig)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CloneError {
    /// An atomic heap value was found under `AtomicPolicy::Reject`
    #[error("Cannot clone {0}")]
    NotCloneable(&'static str),

    /// Container nesting went past `max_depth`
    #[error("Maximum clone depth of {limit} exceeded")]
    DepthExceeded {
        /// The configured limit
        limit: usize,
    },
}

/// Result type for deep copy operations
pub type CloneResult<T> = std::result::Result<T, CloneError>;
