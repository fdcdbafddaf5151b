use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("GitHub error: {0}")]
    Github(#[from] github::GithubError),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
