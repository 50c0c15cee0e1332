//! Zero padding

/// Left-pad `n` with zeros to `width` characters. The minus sign of a
/// negative number counts toward the width and stays in front.
///
/// ```
/// use heron_util::pad_zero;
///
/// assert_eq!(pad_zero(7, 3), "007");
/// assert_eq!(pad_zero(-7, 3), "-07");
/// assert_eq!(pad_zero(12345, 3), "12345");
/// ```
pub fn pad_zero(n: i64, width: usize) -> String {
    format!("{n:0width$}")
}

/// Two-digit padding, as used for clock fields
pub fn pad2(n: i64) -> String {
    pad_zero(n, 2)
}
