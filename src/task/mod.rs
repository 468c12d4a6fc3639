//! Task data model
//!
//! The pipeline produces two records:
//! - `TaskDraft`: fields extracted from free text (deadline, estimate, importance)
//! - `ScoredTask`: a draft plus its computed priority score and label

pub mod model;

pub use model::{PriorityLabel, ScoredTask, TaskDraft};
