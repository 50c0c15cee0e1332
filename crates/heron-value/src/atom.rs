//! Heap values that are never traversed
//!
//! Functions, dates and regular expressions live on the heap like mappings
//! and sequences, but deep copy treats them as atomic: the handle is shared
//! with the copy instead of being cloned.

use chrono::{DateTime, Utc};
use regex::{Regex, RegexBuilder};
use std::sync::Arc;

use crate::value::Value;

/// Native callable
pub type NativeFn = Arc<dyn Fn(&[Value]) -> Value + Send + Sync>;

/// Function value
pub struct JsFunction {
    /// Function name (empty for anonymous functions)
    pub name: String,
    func: NativeFn,
}

impl JsFunction {
    /// Wrap a native callable
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// Invoke the function
    pub fn call(&self, args: &[Value]) -> Value {
        (self.func)(args)
    }
}

impl std::fmt::Debug for JsFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsFunction")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Date value (a UTC instant)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsDate {
    /// The instant this date represents
    pub time: DateTime<Utc>,
}

impl JsDate {
    /// Wrap an instant
    pub fn new(time: DateTime<Utc>) -> Self {
        Self { time }
    }

    /// The current instant
    pub fn now() -> Self {
        Self { time: Utc::now() }
    }

    /// Milliseconds since the Unix epoch
    pub fn timestamp_millis(&self) -> i64 {
        self.time.timestamp_millis()
    }
}

/// Regular expression value
#[derive(Debug)]
pub struct JsRegExp {
    /// The regex pattern
    pub pattern: String,
    /// The regex flags
    pub flags: String,
    /// The compiled regex (if compilation succeeded)
    pub native_regex: Option<Regex>,
}

impl JsRegExp {
    /// Create a regex from a pattern and flag string.
    ///
    /// `i`, `m` and `s` map onto the matching builder options; other flags
    /// are recorded but ignored. A pattern the engine rejects leaves
    /// `native_regex` empty.
    pub fn new(pattern: impl Into<String>, flags: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let flags = flags.into();
        let native_regex = RegexBuilder::new(&pattern)
            .case_insensitive(flags.contains('i'))
            .multi_line(flags.contains('m'))
            .dot_matches_new_line(flags.contains('s'))
            .build()
            .ok();
        Self {
            pattern,
            flags,
            native_regex,
        }
    }

    /// Whether the regex matches somewhere in `haystack`
    pub fn is_match(&self, haystack: &str) -> bool {
        self.native_regex
            .as_ref()
            .is_some_and(|re| re.is_match(haystack))
    }
}
