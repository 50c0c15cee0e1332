//! Pattern-based date formatting
//!
//! Patterns use runs of letters as placeholders:
//!
//! ```text
//! y+   year      yyyy -> 2024, yy -> 24
//! M+   month     M -> 3, MM -> 03
//! d+   day
//! h+   hour (0-23)
//! m+   minute
//! s+   second
//! q+   quarter (1-4)
//! S    milliseconds, unpadded
//! ```
//!
//! Only the first run of each placeholder is replaced, in the order above.
//! A one-letter run gives the bare number; a longer run gives the number
//! zero-padded to two digits. Everything else is copied through.

use std::sync::OnceLock;

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};
use regex::Regex;

#[derive(Clone, Copy)]
enum Field {
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Quarter,
    Millis,
}

impl Field {
    fn get<Tz: TimeZone>(self, date: &DateTime<Tz>) -> u32 {
        match self {
            Self::Month => date.month(),
            Self::Day => date.day(),
            Self::Hour => date.hour(),
            Self::Minute => date.minute(),
            Self::Second => date.second(),
            Self::Quarter => date.month0() / 3 + 1,
            Self::Millis => date.timestamp_subsec_millis(),
        }
    }
}

struct Placeholders {
    year: Regex,
    fields: Vec<(Regex, Field)>,
}

fn placeholders() -> &'static Placeholders {
    static PLACEHOLDERS: OnceLock<Placeholders> = OnceLock::new();

    PLACEHOLDERS.get_or_init(|| Placeholders {
        year: Regex::new("y+").expect("valid regex"),
        fields: vec![
            (Regex::new("M+").expect("valid regex"), Field::Month),
            (Regex::new("d+").expect("valid regex"), Field::Day),
            (Regex::new("h+").expect("valid regex"), Field::Hour),
            (Regex::new("m+").expect("valid regex"), Field::Minute),
            (Regex::new("s+").expect("valid regex"), Field::Second),
            (Regex::new("q+").expect("valid regex"), Field::Quarter),
            (Regex::new("S").expect("valid regex"), Field::Millis),
        ],
    })
}

/// Format `date` according to `pattern`.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use heron_util::format_date;
///
/// let date = Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 0).unwrap();
/// assert_eq!(format_date(&date, "yyyy-MM-dd hh:mm:ss"), "2024-03-07 09:05:00");
/// assert_eq!(format_date(&date, "yy/M/d"), "24/3/7");
/// ```
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>, pattern: &str) -> String {
    let placeholders = placeholders();
    let mut out = pattern.to_string();

    if let Some(run) = placeholders.year.find(&out).map(|m| m.range()) {
        let year = date.year().to_string();
        let keep = if run.len() >= 4 {
            year.len()
        } else {
            run.len().min(year.len())
        };
        let digits = year[year.len() - keep..].to_string();
        out.replace_range(run, &digits);
    }

    for (re, field) in &placeholders.fields {
        let Some(run) = re.find(&out).map(|m| m.range()) else {
            continue;
        };
        let value = field.get(date);
        let text = if run.len() == 1 {
            value.to_string()
        } else {
            format!("{value:02}")
        };
        out.replace_range(run, &text);
    }

    out
}

/// Format the current local time according to `pattern`
pub fn format_now(pattern: &str) -> String {
    format_date(&Local::now(), pattern)
}
