mod client;
mod error;
mod issues;
pub mod models;

pub use client::GithubClient;
pub use error::GithubError;
pub use models::{CreateIssueRequest, Issue, RepoRef};

pub type Result<T> = std::result::Result<T, GithubError>;
