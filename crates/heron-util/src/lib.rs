//! # Heron Util
//!
//! Small standalone helpers:
//!
//! - [`query`]: look up a parameter in a URL query string
//! - [`date_format`]: `yyyy-MM-dd hh:mm:ss` style date formatting
//! - [`pad`]: zero padding for numbers

#![warn(clippy::all)]
#![warn(missing_docs)]

pub mod date_format;
pub mod error;
pub mod pad;
pub mod query;

pub use date_format::{format_date, format_now};
pub use error::{UtilError, UtilResult};
pub use pad::{pad2, pad_zero};
pub use query::{get_query_string, get_query_string_decoded, query_param};
