mod error;
mod impls;
mod models;
mod traits;

pub use error::{Result, TrackerError};
pub use impls::GithubTracker;
pub use models::{CreatedIssue, NewIssue};
pub use traits::IssueTracker;
