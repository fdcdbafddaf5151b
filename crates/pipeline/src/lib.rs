//! Feed-to-issue transformation pipeline.
//!
//! Turns syndication feed entries into issue-tracker tickets: entries are
//! age-filtered, matched against existing issue titles, optionally filtered
//! by title/content patterns, rendered to Markdown (with optional
//! truncation), then emitted either one issue per entry or folded into a
//! single aggregate issue.

mod aggregate;
mod config;
mod duration;
mod error;
mod filter;
mod pipeline;
mod render;

pub use aggregate::{Aggregator, CandidateIssue};
pub use config::PipelineConfig;
pub use duration::parse_duration_ms;
pub use error::PipelineError;
pub use filter::{age_cutoff, filter_by_age};
pub use pipeline::IssuePipeline;

pub type Result<T> = std::result::Result<T, PipelineError>;
