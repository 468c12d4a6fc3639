//! Priority scoring heuristic
//!
//! A weighted sum over the extracted fields, clamped to 0..=100:
//! - urgency (0-50): how close the deadline is
//! - duration (0-20): shorter tasks score higher (quick wins)
//! - importance (0-30): flat bonus for an explicit importance keyword
//!
//! All weights, thresholds and curve bounds live in [`Heuristic`] so the
//! whole scoring surface can be tuned or replaced without touching
//! extraction.

use chrono::{DateTime, Duration, Utc};
use std::cmp::Ordering;

use crate::task::{PriorityLabel, ScoredTask, TaskDraft};

/// The tunable scoring surface
#[derive(Debug, Clone, PartialEq)]
pub struct Heuristic {
    /// Points for a deadline that is overdue or imminent
    pub urgency_max: f64,
    /// Deadlines within this many hours get full urgency
    pub urgency_full_hours: i64,
    /// Deadlines this many days out (or more) get zero urgency
    pub urgency_horizon_days: i64,

    /// Points for the quickest tasks
    pub duration_max: f64,
    /// Points when no duration was recognized
    pub duration_default: f64,
    /// Durations up to this many minutes get full points
    pub duration_quick_minutes: u32,
    /// Durations at or beyond this many minutes get zero points
    pub duration_long_minutes: u32,

    /// Flat bonus for an importance keyword
    pub importance_points: f64,

    /// Score at or above this is labeled high
    pub high_threshold: u8,
    /// Score at or above this (and below high) is labeled medium
    pub medium_threshold: u8,
}

pub const DEFAULT_HEURISTIC: Heuristic = Heuristic {
    urgency_max: 50.0,
    urgency_full_hours: 24,
    urgency_horizon_days: 14,
    duration_max: 20.0,
    duration_default: 10.0,
    duration_quick_minutes: 30,
    duration_long_minutes: 480,
    importance_points: 30.0,
    high_threshold: 70,
    medium_threshold: 40,
};

impl Default for Heuristic {
    fn default() -> Self {
        DEFAULT_HEURISTIC
    }
}

impl Heuristic {
    /// Score a draft against this heuristic at the given reference time
    pub fn score(&self, draft: &TaskDraft, now: DateTime<Utc>) -> ScoredTask {
        let total = self.urgency(draft.deadline, now)
            + self.duration(draft.duration_minutes)
            + self.importance(draft.important);
        let priority_score = total.round().clamp(0.0, 100.0) as u8;

        ScoredTask {
            draft: draft.clone(),
            priority_score,
            priority_label: self.label(priority_score),
        }
    }

    /// Urgency component: full points when overdue or due within
    /// `urgency_full_hours`, decaying linearly to zero at the horizon
    fn urgency(&self, deadline: Option<DateTime<Utc>>, now: DateTime<Utc>) -> f64 {
        let Some(deadline) = deadline else {
            return 0.0;
        };

        let remaining = deadline - now;
        let full = Duration::hours(self.urgency_full_hours);
        let horizon = Duration::days(self.urgency_horizon_days);

        if remaining <= full {
            return self.urgency_max;
        }
        if remaining >= horizon {
            return 0.0;
        }

        let span = (horizon - full).num_seconds() as f64;
        self.urgency_max * (horizon - remaining).num_seconds() as f64 / span
    }

    /// Duration component: reward quick wins, neutral when unknown
    fn duration(&self, minutes: Option<u32>) -> f64 {
        let Some(minutes) = minutes else {
            return self.duration_default;
        };

        if minutes <= self.duration_quick_minutes {
            return self.duration_max;
        }
        if minutes >= self.duration_long_minutes {
            return 0.0;
        }

        let span = (self.duration_long_minutes - self.duration_quick_minutes) as f64;
        self.duration_max * (self.duration_long_minutes - minutes) as f64 / span
    }

    fn importance(&self, important: bool) -> f64 {
        if important {
            self.importance_points
        } else {
            0.0
        }
    }

    /// Bucket a score into a coarse label
    pub fn label(&self, score: u8) -> PriorityLabel {
        if score >= self.high_threshold {
            PriorityLabel::High
        } else if score >= self.medium_threshold {
            PriorityLabel::Medium
        } else {
            PriorityLabel::Low
        }
    }
}

/// Score a draft with the default heuristic
pub fn score(draft: &TaskDraft, now: DateTime<Utc>) -> ScoredTask {
    DEFAULT_HEURISTIC.score(draft, now)
}

/// Score a batch of drafts and order them for display: descending score,
/// ties broken by earlier deadline (deadline-less tasks last), then by
/// input order.
pub fn rank(drafts: &[TaskDraft], now: DateTime<Utc>) -> Vec<ScoredTask> {
    let mut scored: Vec<ScoredTask> = drafts
        .iter()
        .map(|d| DEFAULT_HEURISTIC.score(d, now))
        .collect();

    // Stable sort keeps input order for full ties
    scored.sort_by(|a, b| {
        b.priority_score
            .cmp(&a.priority_score)
            .then_with(|| cmp_deadlines(a.draft.deadline, b.draft.deadline))
    });
    scored
}

fn cmp_deadlines(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
