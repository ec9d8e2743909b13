//! `mm:ss` durations.

/// Parses a strict `m:ss` / `mm:ss` duration into elapsed seconds.
///
/// Minutes take one or two digits, seconds exactly two in `00..=59`.
/// Surrounding whitespace is ignored. Anything else yields `None`
/// ("timing unknown"), never zero.
///
/// # Examples
///
/// ```
/// use combat_score::catalog::parse_mmss;
///
/// assert_eq!(parse_mmss("3:00"), Some(180));
/// assert_eq!(parse_mmss(" 01:30 "), Some(90));
/// assert_eq!(parse_mmss("1:75"), None);
/// assert_eq!(parse_mmss(""), None);
/// ```
pub fn parse_mmss(text: &str) -> Option<u32> {
    let (minutes, seconds) = text.trim().split_once(':')?;

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if minutes.is_empty() || minutes.len() > 2 || !all_digits(minutes) {
        return None;
    }
    if seconds.len() != 2 || !all_digits(seconds) {
        return None;
    }

    let minutes: u32 = minutes.parse().ok()?;
    let seconds: u32 = seconds.parse().ok()?;
    if seconds > 59 {
        return None;
    }
    Some(minutes * 60 + seconds)
}

/// Formats elapsed seconds as `m:ss`.
pub fn format_mmss(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(parse_mmss("0:00"), Some(0));
        assert_eq!(parse_mmss("2:30"), Some(150));
        assert_eq!(parse_mmss("12:05"), Some(725));
        assert_eq!(parse_mmss("99:59"), Some(5999));
    }

    #[test]
    fn test_parse_rejects_loose_forms() {
        for bad in ["", "  ", "3", "3:0", "3:000", "123:00", ":30", "3:60", "a:10", "-1:10", "3:+5", "1:2:3"] {
            assert_eq!(parse_mmss(bad), None, "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_format_roundtrips_display() {
        assert_eq!(format_mmss(90), "1:30");
        assert_eq!(format_mmss(5), "0:05");
        assert_eq!(parse_mmss(&format_mmss(725)), Some(725));
    }
}
