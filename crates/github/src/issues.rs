use reqwest::Method;

use crate::client::GithubClient;
use crate::models::{CreateIssueRequest, Issue, RepoRef};

const PER_PAGE: usize = 100;

impl GithubClient {
    /// List issues of a repository in every state, optionally filtered by labels
    /// GET /repos/{owner}/{repo}/issues
    ///
    /// Pages are followed until a short page; the result is the full listing.
    pub async fn list_issues(&self, repo: &RepoRef, labels: &[String]) -> crate::Result<Vec<Issue>> {
        let url = self.url(&format!("/repos/{}/{}/issues", repo.owner, repo.name));
        let per_page = PER_PAGE.to_string();
        let labels = labels.join(",");

        let mut issues = Vec::new();
        let mut page = 1usize;

        loop {
            let page_number = page.to_string();
            let mut request = self.request(Method::GET, &url).query(&[
                ("state", "all"),
                ("per_page", per_page.as_str()),
                ("page", page_number.as_str()),
            ]);
            if !labels.is_empty() {
                request = request.query(&[("labels", labels.as_str())]);
            }

            let response = request.send().await?;
            let response = self.check_status(response).await?;
            let batch: Vec<Issue> = response.json().await?;

            let fetched = batch.len();
            issues.extend(batch);

            if fetched < PER_PAGE {
                break;
            }
            page += 1;
        }

        tracing::debug!("{} issues listed for {}", issues.len(), repo.as_slug());
        Ok(issues)
    }

    /// Create a new issue
    /// POST /repos/{owner}/{repo}/issues
    pub async fn create_issue(
        &self,
        repo: &RepoRef,
        request: &CreateIssueRequest,
    ) -> crate::Result<Issue> {
        let url = self.url(&format!("/repos/{}/{}/issues", repo.owner, repo.name));

        let response = self
            .request(Method::POST, &url)
            .json(request)
            .send()
            .await?;
        let response = self.check_status(response).await?;

        Ok(response.json().await?)
    }
}
