//! Duration phrase recognition ("~2h", "30 min", "45 minutes")

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)~?\b(\d+)\s*(hours|hour|hrs|hr|h|minutes|minute|mins|min|m)\b").unwrap()
});

/// A recognized duration phrase, normalized to minutes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationMatch {
    pub minutes: u32,
    pub span: Range<usize>,
}

/// Find the first duration phrase in the text. No match yields `None`,
/// never an error.
pub fn recognize(text: &str) -> Option<DurationMatch> {
    let caps = DURATION_RE.captures(text)?;
    let whole = caps.get(0)?;
    let value: u32 = caps[1].parse().ok()?;

    let minutes = if caps[2].to_lowercase().starts_with('h') {
        value.saturating_mul(60)
    } else {
        value
    };

    Some(DurationMatch {
        minutes,
        span: whole.range(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tilde_hours() {
        let m = recognize("Finish slides, ~2h, high importance").unwrap();
        assert_eq!(m.minutes, 120);
        assert_eq!(&"Finish slides, ~2h, high importance"[m.span], "~2h");
    }

    #[test]
    fn test_spelled_out_hours() {
        let m = recognize("should take about 4 hours").unwrap();
        assert_eq!(m.minutes, 240);
    }

    #[test]
    fn test_minutes() {
        assert_eq!(recognize("Refactor logging, 30min").unwrap().minutes, 30);
        assert_eq!(recognize("Quick email, 10 min").unwrap().minutes, 10);
        assert_eq!(recognize("standup, 15 minutes").unwrap().minutes, 15);
    }

    #[test]
    fn test_tilde_minutes() {
        let m = recognize("Submit taxes ASAP, ~30m").unwrap();
        assert_eq!(m.minutes, 30);
        assert_eq!(&"Submit taxes ASAP, ~30m"[m.span], "~30m");
    }

    #[test]
    fn test_first_match_wins() {
        let m = recognize("prep 1h, then review 30min").unwrap();
        assert_eq!(m.minutes, 60);
    }

    #[test]
    fn test_no_match() {
        assert!(recognize("Buy milk").is_none());
        assert!(recognize("run 5km").is_none());
    }
}
