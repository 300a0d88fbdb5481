//! Output line formatting helpers

use chrono::Utc;
use rand::Rng;

/// Terminal colors assigned to emitters at random
const COLORS: [&str; 6] = ["31", "32", "33", "34", "35", "36"];

/// Pick a display color for a new emitter
pub(crate) fn pick_color() -> &'static str {
    COLORS[rand::thread_rng().gen_range(0..COLORS.len())]
}

/// Current UTC wall-clock time with millisecond precision
pub(crate) fn timestamp() -> String {
    Utc::now().format("%H:%M:%S%.3f").to_string()
}

/// Render a nanosecond duration with the largest fitting unit.
///
/// Thresholds are strict, so a value exactly at a unit boundary falls
/// through to the smaller unit, and division truncates rather than
/// rounds.
pub fn humanize_nanos(n: u64) -> String {
    if n > 1_000_000_000 {
        format!("{}s", n / 1_000_000_000)
    } else if n > 1_000_000 {
        format!("{}ms", n / 1_000_000)
    } else if n > 1_000 {
        format!("{}us", n / 1_000)
    } else {
        format!("{}ns", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_units() {
        assert_eq!(humanize_nanos(0), "0ns");
        assert_eq!(humanize_nanos(999), "999ns");
        assert_eq!(humanize_nanos(2_500), "2us");
        assert_eq!(humanize_nanos(3_000_000), "3ms");
        assert_eq!(humanize_nanos(4_000_000_000), "4s");
    }

    #[test]
    fn test_humanize_strict_boundaries() {
        // Values exactly at a threshold use the smaller unit
        assert_eq!(humanize_nanos(1_000), "1000ns");
        assert_eq!(humanize_nanos(1_000_000), "1000us");
        assert_eq!(humanize_nanos(1_000_000_000), "1000ms");
        assert_eq!(humanize_nanos(1_001), "1us");
        assert_eq!(humanize_nanos(1_000_001), "1ms");
        assert_eq!(humanize_nanos(1_000_000_001), "1s");
    }

    #[test]
    fn test_humanize_truncates() {
        assert_eq!(humanize_nanos(1_999), "1us");
        assert_eq!(humanize_nanos(2_999_999), "2ms");
        assert_eq!(humanize_nanos(1_999_999_999), "1s");
    }

    #[test]
    fn test_timestamp_shape() {
        let ts = timestamp();
        assert_eq!(ts.len(), 12);
        assert_eq!(&ts[2..3], ":");
        assert_eq!(&ts[5..6], ":");
        assert_eq!(&ts[8..9], ".");
    }

    #[test]
    fn test_color_from_palette() {
        let color = pick_color();
        assert!(COLORS.contains(&color));
    }
}
