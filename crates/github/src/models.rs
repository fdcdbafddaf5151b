use serde::{Deserialize, Serialize};

use crate::error::GithubError;

/// Reference to a repository as `owner/name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    /// Parse an `owner/repo` slug (the `GITHUB_REPOSITORY` format)
    pub fn parse(raw: &str) -> crate::Result<Self> {
        let trimmed = raw.trim();
        let (owner, name) = trimmed
            .split_once('/')
            .ok_or_else(|| GithubError::InvalidRepo(format!("'{}', expected owner/repo", raw)))?;
        let owner = owner.trim();
        let name = name.trim();
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(GithubError::InvalidRepo(format!(
                "'{}', expected owner/repo",
                raw
            )));
        }
        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    pub fn as_slug(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// An issue as returned by the GitHub API (only the fields this crate reads)
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub id: u64,
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub html_url: Option<String>,
}

/// Payload for creating an issue
#[derive(Debug, Clone, Serialize)]
pub struct CreateIssueRequest {
    pub title: String,
    pub body: String,
    /// Omitted from the payload entirely when no labels are configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}
