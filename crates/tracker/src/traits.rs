use std::collections::HashSet;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{CreatedIssue, NewIssue};

/// Issue tracker interface.
///
/// The pipeline only needs two operations from a tracker: the titles of the
/// issues that already exist (queried once per run, used for duplicate
/// checks) and issue creation. Implementations convert their native types to
/// the unified models defined in this crate.
///
/// # Thread Safety
///
/// All implementations must be Send + Sync for use in async contexts.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Titles of all issues currently known to the tracker
    async fn list_existing_titles(&self) -> Result<HashSet<String>>;

    /// Create a new issue, returning the tracker-assigned identifiers
    async fn create_issue(&self, issue: &NewIssue) -> Result<CreatedIssue>;
}
