//! # News pipeline
//!
//! [`NewsPipeline`] runs one fetch → format → publish pass and never fails past its boundary;
//! [`Scheduler`] fires it after an initial delay and then at a fixed interval, one run at a time.

mod pipeline;
mod scheduler;

pub use pipeline::{NewsPipeline, PipelineOutcome};
pub use scheduler::Scheduler;

// Integration tests live in tests/pipeline_test.rs and tests/scheduler_test.rs
