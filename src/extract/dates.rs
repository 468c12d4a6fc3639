//! Deadline phrase recognition
//!
//! Best-effort natural-language date lookup: relative words ("tomorrow"),
//! offsets ("in 3 days"), weekday names ("next tue"), ISO dates and
//! month-name dates. Resolution is anchored to an explicit reference time so
//! extraction stays deterministic. Anything the parser cannot confidently
//! resolve yields no match rather than an error.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc, Weekday};
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// A recognized date phrase: the resolved timestamp plus the byte range of
/// the phrase in the input (needed for title stripping).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateMatch {
    pub when: DateTime<Utc>,
    pub span: Range<usize>,
}

/// Seam for the date-understanding capability. The built-in
/// [`PhraseDateParser`] covers common phrasing; callers can substitute any
/// other resolver that honors the reference time.
pub trait DateParser {
    fn parse(&self, text: &str, now: DateTime<Utc>) -> Option<DateMatch>;
}

static RELATIVE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(today|tonight|tomorrow)\b").unwrap());

static OFFSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bin\s+(\d+)\s*(minutes|minute|min|hours|hour|hr|h|days|day|weeks|week)\b")
        .unwrap()
});

static WEEKDAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:next\s+)?(monday|mon|tuesday|tues|tue|wednesday|wed|thursday|thurs|thur|thu|friday|fri|saturday|sat|sunday|sun)\b",
    )
    .unwrap()
});

static NEXT_PERIOD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bnext\s+(week|month)\b").unwrap());

static ISO_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{4})-(\d{2})-(\d{2})\b").unwrap());

static MONTH_DAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(january|jan|february|feb|march|mar|april|apr|may|june|jun|july|jul|august|aug|september|sept|sep|october|oct|november|nov|december|dec)\s+(\d{1,2})(?:st|nd|rd|th)?\b",
    )
    .unwrap()
});

/// Built-in regex + chrono phrase resolver
pub struct PhraseDateParser;

impl DateParser for PhraseDateParser {
    fn parse(&self, text: &str, now: DateTime<Utc>) -> Option<DateMatch> {
        let candidates = [
            relative_word(text, now),
            offset_phrase(text, now),
            weekday_phrase(text, now),
            next_period(text, now),
            iso_date(text),
            month_day(text, now),
        ];

        // First phrase in the text wins; on equal starts prefer the longer one
        let mut best: Option<DateMatch> = None;
        for candidate in candidates.into_iter().flatten() {
            let replace = match &best {
                None => true,
                Some(b) => {
                    candidate.span.start < b.span.start
                        || (candidate.span.start == b.span.start
                            && candidate.span.end > b.span.end)
                }
            };
            if replace {
                best = Some(candidate);
            }
        }
        best
    }
}

/// Day-granular phrases resolve to the end of the target day
fn end_of_day(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_hms_opt(23, 59, 0).map(|dt| dt.and_utc())
}

fn relative_word(text: &str, now: DateTime<Utc>) -> Option<DateMatch> {
    let m = RELATIVE_RE.find(text)?;
    let today = now.date_naive();
    let date = match m.as_str().to_lowercase().as_str() {
        "tomorrow" => today + Duration::days(1),
        _ => today,
    };
    end_of_day(date).map(|when| DateMatch {
        when,
        span: m.range(),
    })
}

fn offset_phrase(text: &str, now: DateTime<Utc>) -> Option<DateMatch> {
    let caps = OFFSET_RE.captures(text)?;
    let whole = caps.get(0)?;
    let n: i64 = caps[1].parse().ok()?;
    let unit = caps[2].to_lowercase();

    let when = if unit.starts_with('m') {
        Some(now + Duration::minutes(n))
    } else if unit.starts_with('h') {
        Some(now + Duration::hours(n))
    } else if unit.starts_with('d') {
        end_of_day(now.date_naive() + Duration::days(n))
    } else {
        end_of_day(now.date_naive() + Duration::days(7 * n))
    };

    when.map(|when| DateMatch {
        when,
        span: whole.range(),
    })
}

fn weekday_phrase(text: &str, now: DateTime<Utc>) -> Option<DateMatch> {
    let caps = WEEKDAY_RE.captures(text)?;
    let whole = caps.get(0)?;
    let target = match &caps[1].to_lowercase()[..3] {
        "mon" => Weekday::Mon,
        "tue" => Weekday::Tue,
        "wed" => Weekday::Wed,
        "thu" => Weekday::Thu,
        "fri" => Weekday::Fri,
        "sat" => Weekday::Sat,
        _ => Weekday::Sun,
    };

    // Future-most reading: a weekday naming today means one week out
    let today = now.date_naive();
    let mut ahead = (target.num_days_from_monday() as i64
        - today.weekday().num_days_from_monday() as i64)
        .rem_euclid(7);
    if ahead == 0 {
        ahead = 7;
    }

    end_of_day(today + Duration::days(ahead)).map(|when| DateMatch {
        when,
        span: whole.range(),
    })
}

fn next_period(text: &str, now: DateTime<Utc>) -> Option<DateMatch> {
    let caps = NEXT_PERIOD_RE.captures(text)?;
    let whole = caps.get(0)?;
    let today = now.date_naive();

    let date = if caps[1].eq_ignore_ascii_case("week") {
        Some(today + Duration::days(7))
    } else {
        today.checked_add_months(Months::new(1))
    };

    date.and_then(end_of_day).map(|when| DateMatch {
        when,
        span: whole.range(),
    })
}

fn iso_date(text: &str) -> Option<DateMatch> {
    let caps = ISO_DATE_RE.captures(text)?;
    let whole = caps.get(0)?;
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(end_of_day)
        .map(|when| DateMatch {
            when,
            span: whole.range(),
        })
}

fn month_day(text: &str, now: DateTime<Utc>) -> Option<DateMatch> {
    let caps = MONTH_DAY_RE.captures(text)?;
    let whole = caps.get(0)?;
    let month = match &caps[1].to_lowercase()[..3] {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        _ => 12,
    };
    let day: u32 = caps[2].parse().ok()?;

    // No year in the phrase: take the future-most occurrence
    let today = now.date_naive();
    let mut date = NaiveDate::from_ymd_opt(today.year(), month, day)?;
    if date < today {
        date = NaiveDate::from_ymd_opt(today.year() + 1, month, day)?;
    }

    end_of_day(date).map(|when| DateMatch {
        when,
        span: whole.range(),
    })
}
