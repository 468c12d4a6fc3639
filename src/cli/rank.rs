//! `taskrank rank` command implementation

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Args;
use std::io::Read;
use std::path::PathBuf;

use crate::extract::{self, ExtractError};
use crate::score;
use crate::task::{PriorityLabel, ScoredTask};

const TABLE_COL_SCORE: usize = 5;
const TABLE_COL_LABEL: usize = 6;
const TABLE_COL_DUE: usize = 16;
const TABLE_COL_EST: usize = 5;

#[derive(Args)]
pub struct RankArgs {
    /// File with one task per line (stdin when omitted)
    file: Option<PathBuf>,

    /// Only show tasks at or above this label (low, medium, high)
    #[arg(short, long)]
    label: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Reference time as RFC 3339 (defaults to the current time)
    #[arg(long)]
    now: Option<DateTime<Utc>>,
}

pub fn run(args: RankArgs) -> Result<()> {
    let input = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read tasks from {:?}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read tasks from stdin")?;
            buf
        }
    };
    let now = args.now.unwrap_or_else(Utc::now);

    let mut drafts = Vec::new();
    for line in input.lines() {
        match extract::extract(line, now) {
            Ok(draft) => drafts.push(draft),
            Err(ExtractError::EmptyInput) => {
                tracing::debug!("skipping blank line");
            }
        }
    }

    let mut ranked = score::rank(&drafts, now);

    if let Some(label) = &args.label {
        let min = PriorityLabel::parse(label)
            .ok_or_else(|| anyhow::anyhow!("Invalid label: {}", label))?;
        ranked.retain(|t| t.priority_label >= min);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    if ranked.is_empty() {
        println!("No tasks found");
        return Ok(());
    }

    print_table_header();
    for (i, task) in ranked.iter().enumerate() {
        print_table_row(i + 1, task);
    }

    Ok(())
}

fn print_table_header() {
    println!(
        "{:<4} {:>width_score$} {:<width_label$} {:<width_due$} {:>width_est$}  TITLE",
        "#",
        "SCORE",
        "LABEL",
        "DUE",
        "EST",
        width_score = TABLE_COL_SCORE,
        width_label = TABLE_COL_LABEL,
        width_due = TABLE_COL_DUE,
        width_est = TABLE_COL_EST
    );
    println!(
        "{}",
        "-".repeat(4 + TABLE_COL_SCORE + TABLE_COL_LABEL + TABLE_COL_DUE + TABLE_COL_EST + 12)
    );
}

fn print_table_row(position: usize, task: &ScoredTask) {
    let due = task
        .draft
        .deadline
        .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string());
    let est = task
        .draft
        .duration_minutes
        .map(format_minutes)
        .unwrap_or_else(|| "-".to_string());

    println!(
        "{:<4} {:>width_score$} {:<width_label$} {:<width_due$} {:>width_est$}  {}",
        position,
        task.priority_score,
        task.priority_label.label(),
        due,
        est,
        task.draft.title,
        width_score = TABLE_COL_SCORE,
        width_label = TABLE_COL_LABEL,
        width_due = TABLE_COL_DUE,
        width_est = TABLE_COL_EST
    );
}

fn format_minutes(minutes: u32) -> String {
    if minutes >= 60 && minutes % 60 == 0 {
        format!("{}h", minutes / 60)
    } else {
        format!("{}m", minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(30), "30m");
        assert_eq!(format_minutes(60), "1h");
        assert_eq!(format_minutes(240), "4h");
        assert_eq!(format_minutes(90), "90m");
    }
}
