//! `taskrank parse` command implementation

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;

use crate::extract;
use crate::score;

#[derive(Args)]
pub struct ParseArgs {
    /// Task description to parse
    text: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Reference time as RFC 3339 (defaults to the current time)
    #[arg(long)]
    now: Option<DateTime<Utc>>,
}

pub fn run(args: ParseArgs) -> Result<()> {
    let now = args.now.unwrap_or_else(Utc::now);

    let draft = extract::extract(&args.text, now)?;
    let task = score::score(&draft, now);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&task)?);
        return Ok(());
    }

    println!("{}", task.draft.title);
    println!("  Score: {} ({})", task.priority_score, task.priority_label);

    if let Some(due) = &task.draft.deadline {
        println!(
            "  Due: {}{}",
            due.format("%Y-%m-%d %H:%M"),
            if task.draft.is_overdue(now) {
                " ⚠️ OVERDUE"
            } else {
                ""
            }
        );
    }

    if let Some(minutes) = task.draft.duration_minutes {
        println!("  Estimate: {} min", minutes);
    }

    println!("  Important: {}", if task.draft.important { "yes" } else { "no" });

    Ok(())
}
