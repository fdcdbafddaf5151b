use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Issue tracker error: {0}")]
    Tracker(#[from] tracker::TrackerError),
}
