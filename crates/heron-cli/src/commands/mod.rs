//! CLI command implementations.

pub mod clone;
pub mod date;
pub mod pad;
pub mod query;

pub use clone::CloneCommand;
pub use date::DateCommand;
pub use pad::PadCommand;
pub use query::QueryCommand;
