//! Task records produced by extraction and scoring

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Structured fields extracted from one free-text task description.
///
/// Immutable once produced: the extractor builds it in a single pass and
/// nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDraft {
    /// Original input text, kept verbatim
    pub raw: String,

    /// Description with date/duration/importance phrases stripped.
    /// Never empty: falls back to the trimmed input when stripping
    /// would leave nothing.
    pub title: String,

    /// Inferred deadline, when a date phrase was recognized
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,

    /// Estimated effort in minutes, when a duration phrase was recognized
    #[serde(default)]
    pub duration_minutes: Option<u32>,

    /// True when an importance keyword was recognized
    #[serde(default)]
    pub important: bool,
}

impl TaskDraft {
    /// Check whether the deadline has already passed
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.deadline.map(|d| d < now).unwrap_or(false)
    }
}

/// Coarse priority bucket derived from the numeric score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriorityLabel {
    Low,
    Medium,
    High,
}

impl PriorityLabel {
    /// Parse a label from text
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" | "med" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Get the text label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for PriorityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A draft plus its computed priority
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTask {
    /// The extracted fields this score was computed from
    pub draft: TaskDraft,

    /// Priority score in 0..=100
    pub priority_score: u8,

    /// Bucket derived from `priority_score`
    pub priority_label: PriorityLabel,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn draft(title: &str) -> TaskDraft {
        TaskDraft {
            raw: title.to_string(),
            title: title.to_string(),
            deadline: None,
            duration_minutes: None,
            important: false,
        }
    }

    #[test]
    fn test_priority_label_parse() {
        assert_eq!(PriorityLabel::parse("high"), Some(PriorityLabel::High));
        assert_eq!(PriorityLabel::parse(" Medium "), Some(PriorityLabel::Medium));
        assert_eq!(PriorityLabel::parse("med"), Some(PriorityLabel::Medium));
        assert_eq!(PriorityLabel::parse("low"), Some(PriorityLabel::Low));
        assert_eq!(PriorityLabel::parse("urgent"), None);
    }

    #[test]
    fn test_priority_label_ordering() {
        assert!(PriorityLabel::High > PriorityLabel::Medium);
        assert!(PriorityLabel::Medium > PriorityLabel::Low);
    }

    #[test]
    fn test_is_overdue() {
        let now = Utc.with_ymd_and_hms(2025, 6, 2, 12, 0, 0).unwrap();

        let mut task = draft("Test");
        assert!(!task.is_overdue(now));

        task.deadline = Some(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap());
        assert!(task.is_overdue(now));

        task.deadline = Some(Utc.with_ymd_and_hms(2025, 6, 3, 12, 0, 0).unwrap());
        assert!(!task.is_overdue(now));
    }
}
