//! Taskrank library - turn free-text task descriptions into scored, ranked tasks
//!
//! The pipeline is a pure function of the input text plus a reference time:
//! text -> [`extract`] -> [`task::TaskDraft`] -> [`score`] -> [`task::ScoredTask`].

pub mod cli;
pub mod extract;
pub mod score;
pub mod task;
