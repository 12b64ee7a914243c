//! Pipeline entry points for checker operations.
//!
//! - `run_pipeline`: Fetch, parse, persist and notify once
//! - `run_preview`: Parse a local file without side effects

pub mod preview;
pub mod run;
pub mod stage;

pub use preview::{Preview, run_preview};
pub use run::{PipelineOptions, RunReport, run_pipeline};
pub use stage::{RunOutcome, Stage};
