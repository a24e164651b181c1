//! Formatting and parsing of media times

use crate::{Error, Result};

/// Formats milliseconds as `hh:mm:ss`, or `mm:ss` below one hour.
/// Negative values (libVLC's "unknown") format as `--:--`.
pub fn format_time(ms: i64) -> String {
    if ms < 0 {
        return "--:--".to_string();
    }
    let total_secs = ms / 1000;
    let hours = total_secs / 3600;
    let mins = (total_secs % 3600) / 60;
    let secs = total_secs % 60;
    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{:02}:{:02}", mins, secs)
    }
}

/// Parses `ss`, `mm:ss` or `hh:mm:ss` (seconds may carry a fraction) into
/// milliseconds.
pub fn parse_time(text: &str) -> Result<i64> {
    let invalid = || Error::InvalidTime(text.to_string());
    let parts: Vec<&str> = text.trim().split(':').collect();
    if parts.is_empty() || parts.len() > 3 {
        return Err(invalid());
    }

    let (secs_part, whole_parts) = parts.split_last().ok_or_else(invalid)?;
    let secs: f64 = secs_part.parse().map_err(|_| invalid())?;
    if !secs.is_finite() || secs < 0.0 || (!whole_parts.is_empty() && secs >= 60.0) {
        return Err(invalid());
    }

    let secs_ms = (secs * 1000.0).round();
    if secs_ms >= i64::MAX as f64 {
        return Err(invalid());
    }

    let mut total_ms = secs_ms as i64;
    let mut unit_ms: i64 = 60_000;
    for part in whole_parts.iter().rev() {
        let value: i64 = part.parse().map_err(|_| invalid())?;
        if value < 0 {
            return Err(invalid());
        }
        total_ms = value
            .checked_mul(unit_ms)
            .and_then(|ms| total_ms.checked_add(ms))
            .ok_or_else(invalid)?;
        unit_ms *= 60;
    }
    Ok(total_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(61_500), "01:01");
        assert_eq!(format_time(3_723_000), "01:02:03");
        assert_eq!(format_time(-1), "--:--");
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("90").unwrap(), 90_000);
        assert_eq!(parse_time("1.25").unwrap(), 1_250);
        assert_eq!(parse_time("01:30").unwrap(), 90_000);
        assert_eq!(parse_time("1:02:03").unwrap(), 3_723_000);
    }

    #[test]
    fn test_parse_time_rejects_garbage() {
        assert!(parse_time("").is_err());
        assert!(parse_time("a:b").is_err());
        assert!(parse_time("1:75").is_err());
        assert!(parse_time("1:2:3:4").is_err());
        assert!(parse_time("-5").is_err());
    }

    #[test]
    fn test_parse_time_rejects_overflow() {
        assert!(matches!(
            parse_time("999999999999999:00"),
            Err(Error::InvalidTime(_))
        ));
        assert!(parse_time("9999999999999:00:00").is_err());
        assert!(parse_time("1e300").is_err());
        assert_eq!(parse_time("2562047:47:16").unwrap(), 9_223_372_036_000);
    }
}
