use std::collections::HashSet;

use async_trait::async_trait;
use github::{CreateIssueRequest, GithubClient, Issue, RepoRef};

use crate::error::Result;
use crate::models::{CreatedIssue, NewIssue};
use crate::traits::IssueTracker;

/// GitHub-backed issue tracker
pub struct GithubTracker {
    client: GithubClient,
    repo: RepoRef,
    /// Labels used to scope the existing-issue listing
    labels: Vec<String>,
}

impl GithubTracker {
    pub fn new(client: GithubClient, repo: RepoRef, labels: Vec<String>) -> Self {
        Self {
            client,
            repo,
            labels,
        }
    }
}

/// Convert a GitHub Issue to the unified CreatedIssue
impl From<Issue> for CreatedIssue {
    fn from(issue: Issue) -> Self {
        Self {
            id: issue.id,
            number: issue.number,
        }
    }
}

#[async_trait]
impl IssueTracker for GithubTracker {
    async fn list_existing_titles(&self) -> Result<HashSet<String>> {
        let issues = self.client.list_issues(&self.repo, &self.labels).await?;
        tracing::debug!(
            "{} existing issues in {}",
            issues.len(),
            self.repo.as_slug()
        );
        Ok(issues.into_iter().map(|issue| issue.title).collect())
    }

    async fn create_issue(&self, issue: &NewIssue) -> Result<CreatedIssue> {
        let request = CreateIssueRequest {
            title: issue.title.clone(),
            body: issue.body.clone(),
            labels: (!issue.labels.is_empty()).then(|| issue.labels.clone()),
        };
        let created = self.client.create_issue(&self.repo, &request).await?;
        Ok(created.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_to_created_issue() {
        let issue = Issue {
            id: 12345,
            number: 7,
            title: "News: something happened".into(),
            state: "open".into(),
            html_url: None,
        };
        let created: CreatedIssue = issue.into();
        assert_eq!(created.id, 12345);
        assert_eq!(created.number, 7);
    }
}
