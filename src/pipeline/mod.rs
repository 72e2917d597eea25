//! Pipeline stages for one tracker run.
//!
//! - `diff`: partition fetched sequences against the seen-set
//! - `digest`: render the markdown digest and derive the post title
//! - `run`: drive the full fetch → diff → format → publish → persist run

pub mod diff;
pub mod digest;
pub mod run;

pub use diff::{DiffOutcome, partition};
pub use run::{RunOptions, run_tracker};
