//! # Heron Value
//!
//! Shared, mutable value graphs and a cycle-safe deep copy over them.
//!
//! ## Design Principles
//!
//! - **Identity, not equality**: heap values are compared by allocation when
//!   tracking what has been copied
//! - **Closed classification**: every value is a mapping, a sequence, or atomic
//! - **Thread-safe**: containers are `Send + Sync`; copying never mutates its input

#![warn(clippy::all)]
#![warn(missing_docs)]

pub mod array;
pub mod atom;
pub mod deep_copy;
pub mod equal;
pub mod error;
pub mod gc;
pub mod json;
pub mod object;
pub mod value;

pub use array::JsArray;
pub use atom::{JsDate, JsFunction, JsRegExp};
pub use deep_copy::{AtomicPolicy, CloneCache, CloneConfig, CloneStats, DeepCopier, deep_copy};
pub use equal::structurally_equal;
pub use error::{CloneError, CloneResult};
pub use gc::GcRef;
pub use object::JsObject;
pub use value::{Value, ValueKind};
