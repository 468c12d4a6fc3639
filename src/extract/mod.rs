//! Free-text field extraction
//!
//! Turns one raw task description into a [`TaskDraft`]:
//! - deadline phrases resolved against a reference time ([`dates`])
//! - duration phrases normalized to minutes ([`duration`])
//! - importance keywords ([`importance`])
//! - the residual text, cleaned up, becomes the title
//!
//! Each field degrades independently: an unrecognized phrase leaves that
//! field absent and never fails the extraction. The only fatal case is
//! empty input.

pub mod dates;
pub mod duration;
pub mod error;
pub mod importance;

pub use dates::{DateMatch, DateParser, PhraseDateParser};
pub use error::{ExtractError, Result};

use chrono::{DateTime, Utc};
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

use crate::task::TaskDraft;

const MAX_TITLE_LEN: usize = 80;

// Filler words that dangle once the phrase after them is stripped
// ("report by next friday", "takes about 2 hours")
const CONNECTIVES: [&str; 9] = [
    "by", "on", "at", "before", "until", "due", "for", "about", "around",
];

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static PUNCT_GAP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+([,;:.!?])").unwrap());
static COMMA_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",(?:\s*,)+").unwrap());

/// Extract structured fields from a task description using the built-in
/// date phrase parser.
pub fn extract(text: &str, now: DateTime<Utc>) -> Result<TaskDraft> {
    extract_with(&PhraseDateParser, text, now)
}

/// Extract structured fields, resolving date phrases with the given parser.
pub fn extract_with(dates: &dyn DateParser, text: &str, now: DateTime<Utc>) -> Result<TaskDraft> {
    if text.trim().is_empty() {
        return Err(ExtractError::EmptyInput);
    }

    let date = dates.parse(text, now);
    let dur = duration::recognize(text);
    let imp = importance::recognize(text);

    if let Some(m) = &date {
        tracing::debug!("deadline phrase {:?} -> {}", &text[m.span.clone()], m.when);
    }
    if let Some(m) = &dur {
        tracing::debug!("duration phrase {:?} -> {} min", &text[m.span.clone()], m.minutes);
    }
    if let Some(span) = &imp {
        tracing::debug!("importance keyword {:?}", &text[span.clone()]);
    }

    let mut spans: Vec<Range<usize>> = Vec::new();
    if let Some(m) = &date {
        spans.push(m.span.clone());
    }
    if let Some(m) = &dur {
        spans.push(m.span.clone());
    }
    if let Some(span) = &imp {
        spans.push(span.clone());
    }

    Ok(TaskDraft {
        raw: text.to_string(),
        title: derive_title(text, spans),
        deadline: date.map(|m| m.when),
        duration_minutes: dur.map(|m| m.minutes),
        important: imp.is_some(),
    })
}

/// Remove the matched phrase ranges from the text and tidy what is left.
/// Falls back to the trimmed input when stripping leaves nothing.
fn derive_title(text: &str, mut spans: Vec<Range<usize>>) -> String {
    for span in &mut spans {
        span.start = extend_over_connective(text, span.start);
    }
    let spans = merge_spans(spans);

    let mut kept: Vec<&str> = Vec::new();
    let mut pos = 0;
    for span in &spans {
        kept.push(text[pos..span.start].trim());
        pos = span.end;
    }
    kept.push(text[pos..].trim());

    let joined = kept.join(" ");
    let cleaned = WHITESPACE_RE.replace_all(&joined, " ");
    let cleaned = PUNCT_GAP_RE.replace_all(&cleaned, "$1");
    let cleaned = COMMA_RUN_RE.replace_all(&cleaned, ",");
    let cleaned = cleaned
        .trim_matches(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | ':' | '.' | '-' | '~'))
        .to_string();

    if cleaned.is_empty() {
        truncate_title(text.trim())
    } else {
        truncate_title(&cleaned)
    }
}

/// Widen a span start to swallow an immediately preceding connective word
fn extend_over_connective(text: &str, start: usize) -> usize {
    let head = text[..start].trim_end();
    let word_start = head
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_alphabetic())
        .last()
        .map(|(i, _)| i);

    if let Some(i) = word_start {
        let word = &head[i..];
        if CONNECTIVES.iter().any(|c| word.eq_ignore_ascii_case(c)) {
            return i;
        }
    }
    start
}

/// Sort and merge overlapping ranges ("in 2 hours" matches as both a
/// deadline and a duration phrase)
fn merge_spans(mut spans: Vec<Range<usize>>) -> Vec<Range<usize>> {
    spans.sort_by_key(|s| (s.start, s.end));
    let mut merged: Vec<Range<usize>> = Vec::new();
    for span in spans {
        match merged.last_mut() {
            Some(last) if span.start <= last.end => last.end = last.end.max(span.end),
            _ => merged.push(span),
        }
    }
    merged
}

fn truncate_title(s: &str) -> String {
    if s.chars().count() <= MAX_TITLE_LEN {
        return s.to_string();
    }
    let cut: String = s.chars().take(MAX_TITLE_LEN - 3).collect();
    format!("{}...", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    // Monday
    fn monday_morning() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract("", monday_morning()), Err(ExtractError::EmptyInput));
        assert_eq!(extract("   ", monday_morning()), Err(ExtractError::EmptyInput));
    }

    #[test]
    fn test_sparse_input_still_extracts() {
        let draft = extract("Buy milk", monday_morning()).unwrap();
        assert_eq!(draft.title, "Buy milk");
        assert_eq!(draft.deadline, None);
        assert_eq!(draft.duration_minutes, None);
        assert!(!draft.important);
    }

    #[test]
    fn test_full_phrase_extraction() {
        let text = "Finish quarterly report by next Friday, should take about 4 hours, this is urgent";
        let draft = extract(text, monday_morning()).unwrap();

        assert_eq!(draft.duration_minutes, Some(240));
        assert!(draft.important);
        assert_eq!(
            draft.deadline.unwrap().date_naive(),
            NaiveDate::from_ymd_opt(2025, 6, 6).unwrap()
        );
        assert_eq!(draft.raw, text);
        assert!(draft.title.starts_with("Finish quarterly report"));
        assert!(!draft.title.contains("Friday"));
        assert!(!draft.title.contains("4 hours"));
        assert!(!draft.title.contains("urgent"));
    }

    #[test]
    fn test_title_strips_connectives_and_punctuation() {
        let draft = extract("Submit taxes ASAP, ~30m", monday_morning()).unwrap();
        assert_eq!(draft.title, "Submit taxes");
        assert_eq!(draft.duration_minutes, Some(30));
        assert!(draft.important);
        assert_eq!(draft.deadline, None);
    }

    #[test]
    fn test_title_falls_back_to_raw_text() {
        // The whole input is one date phrase; stripping would leave nothing
        let draft = extract("tomorrow", monday_morning()).unwrap();
        assert_eq!(draft.title, "tomorrow");
        assert!(draft.deadline.is_some());
    }

    #[test]
    fn test_overlapping_date_and_duration_phrases() {
        let draft = extract("Ping the team in 2 hours", monday_morning()).unwrap();
        assert_eq!(draft.title, "Ping the team");
        assert_eq!(draft.duration_minutes, Some(120));
        assert!(draft.deadline.is_some());
    }

    #[test]
    fn test_deterministic() {
        let now = monday_morning();
        let text = "Prep demo next tue, ~1h, important";
        assert_eq!(extract(text, now).unwrap(), extract(text, now).unwrap());
    }

    #[test]
    fn test_long_title_is_truncated() {
        let text = "a".repeat(200);
        let draft = extract(&text, monday_morning()).unwrap();
        assert_eq!(draft.title.chars().count(), MAX_TITLE_LEN);
        assert!(draft.title.ends_with("..."));
    }

    #[test]
    fn test_custom_date_parser() {
        struct NoDates;
        impl DateParser for NoDates {
            fn parse(&self, _text: &str, _now: DateTime<Utc>) -> Option<DateMatch> {
                None
            }
        }

        let draft = extract_with(&NoDates, "Call John tomorrow", monday_morning()).unwrap();
        assert_eq!(draft.deadline, None);
        assert_eq!(draft.title, "Call John tomorrow");
    }
}
