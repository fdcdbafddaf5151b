use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use feed::FeedEntry;
use tracker::{IssueTracker, NewIssue};

use crate::aggregate::{Aggregator, CandidateIssue};
use crate::config::PipelineConfig;
use crate::filter::{age_cutoff, filter_by_age};
use crate::render;

/// Feed-to-issue transformation pipeline.
///
/// Entries are processed strictly in feed order, one at a time: aggregate
/// mode folds left to right, and each duplicate check runs against the same
/// accumulating title set, so titles produced earlier in the run suppress
/// later duplicates.
pub struct IssuePipeline {
    tracker: Arc<dyn IssueTracker>,
    config: PipelineConfig,
}

impl IssuePipeline {
    pub fn new(tracker: Arc<dyn IssueTracker>, config: PipelineConfig) -> Self {
        Self { tracker, config }
    }

    /// Run the pipeline over the given feed entries.
    ///
    /// Returns the comma-joined identifiers of successfully created issues
    /// (empty when none were created). Listing failures abort the run;
    /// individual creation failures are logged and skipped.
    pub async fn run(&self, entries: Vec<FeedEntry>) -> crate::Result<String> {
        let cutoff = age_cutoff(Utc::now(), self.config.max_age_ms);
        let entries = filter_by_age(entries, cutoff);
        if entries.is_empty() {
            tracing::info!("No feed entries within the age cutoff");
            return Ok(String::new());
        }

        let mut existing_titles = self.tracker.list_existing_titles().await?;
        tracing::debug!("{} existing issue titles", existing_titles.len());

        let mut aggregator = Aggregator::new(self.config.aggregate, &self.config.title_prefix);
        for entry in entries {
            self.process_entry(entry, &mut existing_titles, &mut aggregator);
        }
        tracing::debug!("{} candidate issues", aggregator.len());

        let candidates = self.create_issues(aggregator.into_candidates()).await;

        let identifiers: Vec<String> = candidates
            .iter()
            .filter_map(|candidate| candidate.id)
            .map(|id| id.to_string())
            .collect();
        Ok(identifiers.join(","))
    }

    /// Apply title, duplicate and content checks to one entry, then render
    /// its body and fold it into the candidate list.
    ///
    /// The title-pattern and duplicate checks run before anything is
    /// rendered; rendering is the expensive step and must not run for
    /// entries that are discarded anyway.
    fn process_entry(
        &self,
        entry: FeedEntry,
        existing_titles: &mut HashSet<String>,
        aggregator: &mut Aggregator,
    ) {
        let title = format!(
            "{}{}",
            self.config.title_prefix,
            entry.title.as_deref().unwrap_or_default()
        );

        if let Some(pattern) = &self.config.title_pattern {
            if !pattern.is_match(&title) {
                tracing::debug!(
                    "Feed entry skipped because it does not match the title pattern ({})",
                    title
                );
                return;
            }
        }

        if existing_titles.contains(&title) {
            tracing::warn!("Issue {} already exists", title);
            return;
        }

        let source = entry.content.or(entry.description).unwrap_or_default();

        if let Some(pattern) = &self.config.content_pattern {
            if !pattern.is_match(&source) {
                tracing::debug!(
                    "Feed entry skipped because it does not match the content pattern ({})",
                    title
                );
                return;
            }
        }

        let markdown =
            render::truncate_markdown(render::render_markdown(&source), self.config.character_limit);
        let body = render::compose_body(&markdown, entry.link.as_deref());

        existing_titles.insert(title.clone());
        aggregator.push(title, body, &self.config.labels, Utc::now());
    }

    /// Create each candidate against the tracker, tolerating per-issue
    /// failures. In dry-run mode the intended creation is logged instead.
    async fn create_issues(&self, mut candidates: Vec<CandidateIssue>) -> Vec<CandidateIssue> {
        for candidate in &mut candidates {
            if self.config.dry_run {
                tracing::info!(
                    "Would create issue '{}' with content '{}'",
                    candidate.title,
                    candidate.body
                );
                continue;
            }

            let request = NewIssue {
                title: candidate.title.clone(),
                body: candidate.body.clone(),
                labels: candidate.labels.clone(),
            };
            match self.tracker.create_issue(&request).await {
                Ok(created) => {
                    tracing::debug!("Created issue #{} ({})", created.number, candidate.title);
                    candidate.id = Some(created.id);
                }
                Err(e) => {
                    tracing::warn!("Failed to create issue {}: {}", candidate.title, e);
                }
            }
        }
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use regex::Regex;
    use std::sync::Mutex;
    use tracker::{CreatedIssue, TrackerError};

    #[derive(Default)]
    struct MockTracker {
        existing: HashSet<String>,
        /// 1-based creation attempt that should fail
        fail_on_attempt: Option<usize>,
        list_calls: Mutex<usize>,
        attempts: Mutex<usize>,
        created: Mutex<Vec<NewIssue>>,
    }

    impl MockTracker {
        fn with_existing(titles: &[&str]) -> Self {
            Self {
                existing: titles.iter().map(|t| t.to_string()).collect(),
                ..Self::default()
            }
        }

        fn list_calls(&self) -> usize {
            *self.list_calls.lock().unwrap()
        }

        fn created(&self) -> Vec<NewIssue> {
            self.created.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl IssueTracker for MockTracker {
        async fn list_existing_titles(&self) -> tracker::Result<HashSet<String>> {
            *self.list_calls.lock().unwrap() += 1;
            Ok(self.existing.clone())
        }

        async fn create_issue(&self, issue: &NewIssue) -> tracker::Result<CreatedIssue> {
            let mut attempts = self.attempts.lock().unwrap();
            *attempts += 1;
            let attempt = *attempts;

            if self.fail_on_attempt == Some(attempt) {
                return Err(TrackerError::Github(github::GithubError::Api {
                    status_code: 500,
                    message: "server error".into(),
                }));
            }

            self.created.lock().unwrap().push(issue.clone());
            Ok(CreatedIssue {
                id: attempt as u64 * 100,
                number: attempt as u64,
            })
        }
    }

    fn entry(title: &str, content: &str) -> FeedEntry {
        FeedEntry {
            title: Some(title.into()),
            content: Some(content.into()),
            ..FeedEntry::default()
        }
    }

    fn pipeline(tracker: Arc<MockTracker>, config: PipelineConfig) -> IssuePipeline {
        IssuePipeline::new(tracker, config)
    }

    #[tokio::test]
    async fn test_empty_feed_skips_listing_and_creation() {
        let tracker = Arc::new(MockTracker::default());
        let output = pipeline(tracker.clone(), PipelineConfig::default())
            .run(Vec::new())
            .await
            .unwrap();

        assert_eq!(output, "");
        assert_eq!(tracker.list_calls(), 0);
        assert!(tracker.created().is_empty());
    }

    #[tokio::test]
    async fn test_one_issue_per_surviving_entry() {
        let tracker = Arc::new(MockTracker::default());
        let output = pipeline(tracker.clone(), PipelineConfig::default())
            .run(vec![entry("A", "a"), entry("B", "b")])
            .await
            .unwrap();

        assert_eq!(output, "100,200");
        let created = tracker.created();
        assert_eq!(created.len(), 2);
        assert_eq!(created[0].title, "A");
        assert_eq!(created[0].body, "a\n");
        assert_eq!(created[1].title, "B");
    }

    #[tokio::test]
    async fn test_untitled_entry_with_plain_content() {
        let tracker = Arc::new(MockTracker::default());
        let entries = vec![FeedEntry {
            content: Some("TBD".into()),
            ..FeedEntry::default()
        }];
        let output = pipeline(tracker.clone(), PipelineConfig::default())
            .run(entries)
            .await
            .unwrap();

        assert_eq!(output, "100");
        let created = tracker.created();
        assert_eq!(created[0].title, "");
        assert_eq!(created[0].body, "TBD\n");
    }

    #[tokio::test]
    async fn test_existing_titles_are_skipped() {
        let tracker = Arc::new(MockTracker::with_existing(&["News: A"]));
        let config = PipelineConfig {
            title_prefix: "News: ".into(),
            ..PipelineConfig::default()
        };
        let output = pipeline(tracker.clone(), config)
            .run(vec![entry("A", "a"), entry("B", "b")])
            .await
            .unwrap();

        assert_eq!(output, "100");
        let created = tracker.created();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].title, "News: B");
    }

    #[tokio::test]
    async fn test_second_run_is_idempotent() {
        let tracker = Arc::new(MockTracker::default());
        let entries = vec![entry("A", "a"), entry("B", "b")];
        pipeline(tracker.clone(), PipelineConfig::default())
            .run(entries.clone())
            .await
            .unwrap();

        // Simulate run 2 against a tracker that now lists run 1's titles
        let titles: Vec<String> = tracker.created().iter().map(|i| i.title.clone()).collect();
        let rerun_tracker = Arc::new(MockTracker::with_existing(
            &titles.iter().map(String::as_str).collect::<Vec<_>>(),
        ));
        let output = pipeline(rerun_tracker.clone(), PipelineConfig::default())
            .run(entries)
            .await
            .unwrap();

        assert_eq!(output, "");
        assert!(rerun_tracker.created().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_titles_within_one_run() {
        let tracker = Arc::new(MockTracker::default());
        let output = pipeline(tracker.clone(), PipelineConfig::default())
            .run(vec![entry("A", "first"), entry("A", "second")])
            .await
            .unwrap();

        assert_eq!(output, "100");
        assert_eq!(tracker.created().len(), 1);
    }

    #[tokio::test]
    async fn test_title_pattern_filters_entries() {
        let tracker = Arc::new(MockTracker::default());
        let config = PipelineConfig {
            title_pattern: Some(Regex::new(r"^Release").unwrap()),
            ..PipelineConfig::default()
        };
        let output = pipeline(tracker.clone(), config)
            .run(vec![entry("Release 1.0", "r"), entry("Weekly digest", "w")])
            .await
            .unwrap();

        assert_eq!(output, "100");
        assert_eq!(tracker.created()[0].title, "Release 1.0");
    }

    #[tokio::test]
    async fn test_content_pattern_matches_raw_body_source() {
        let tracker = Arc::new(MockTracker::default());
        let config = PipelineConfig {
            content_pattern: Some(Regex::new("security").unwrap()),
            ..PipelineConfig::default()
        };
        let entries = vec![
            entry("A", "a security fix"),
            entry("B", "routine update"),
            // description is the fallback body source
            FeedEntry {
                title: Some("C".into()),
                description: Some("security advisory".into()),
                ..FeedEntry::default()
            },
        ];
        let output = pipeline(tracker.clone(), config).run(entries).await.unwrap();

        assert_eq!(output, "100,200");
        let created = tracker.created();
        assert_eq!(created[0].title, "A");
        assert_eq!(created[1].title, "C");
    }

    #[tokio::test]
    async fn test_aggregate_mode_creates_a_single_issue() {
        let tracker = Arc::new(MockTracker::default());
        let config = PipelineConfig {
            aggregate: true,
            title_prefix: "News ".into(),
            ..PipelineConfig::default()
        };
        let output = pipeline(tracker.clone(), config)
            .run(vec![entry("A", "a"), entry("B", "b")])
            .await
            .unwrap();

        assert_eq!(output, "100");
        let created = tracker.created();
        assert_eq!(created.len(), 1);
        // Both rendered bodies, in feed order, separated by a blank line
        assert_eq!(created[0].body, "a\n\n\nb\n");
        // Title was rewritten with the latest fold time
        assert!(created[0].title.starts_with("News "));
        assert_ne!(created[0].title, "News A");
    }

    #[tokio::test]
    async fn test_creation_failure_does_not_abort_the_batch() {
        let tracker = Arc::new(MockTracker {
            fail_on_attempt: Some(2),
            ..MockTracker::default()
        });
        let output = pipeline(tracker.clone(), PipelineConfig::default())
            .run(vec![entry("A", "a"), entry("B", "b"), entry("C", "c")])
            .await
            .unwrap();

        // Entries 1 and 3 still get identifiers, in creation order
        assert_eq!(output, "100,300");
        let created = tracker.created();
        assert_eq!(created.len(), 2);
        assert_eq!(created[0].title, "A");
        assert_eq!(created[1].title, "C");
    }

    #[tokio::test]
    async fn test_dry_run_never_calls_the_tracker() {
        let tracker = Arc::new(MockTracker::default());
        let config = PipelineConfig {
            dry_run: true,
            ..PipelineConfig::default()
        };
        let output = pipeline(tracker.clone(), config)
            .run(vec![entry("A", "a")])
            .await
            .unwrap();

        assert_eq!(output, "");
        assert!(tracker.created().is_empty());
    }

    #[tokio::test]
    async fn test_character_limit_truncates_created_body() {
        let tracker = Arc::new(MockTracker::default());
        let config = PipelineConfig {
            character_limit: Some(5),
            ..PipelineConfig::default()
        };
        pipeline(tracker.clone(), config)
            .run(vec![entry("A", "0123456789")])
            .await
            .unwrap();

        let body = tracker.created()[0].body.clone();
        assert!(body.starts_with("01234…"));
        assert!(body.contains("Would you like to know more?"));
    }

    #[tokio::test]
    async fn test_labels_attached_to_created_issues() {
        let tracker = Arc::new(MockTracker::default());
        let config = PipelineConfig {
            labels: vec!["news".into(), "rss".into()],
            ..PipelineConfig::default()
        };
        pipeline(tracker.clone(), config)
            .run(vec![entry("A", "a")])
            .await
            .unwrap();

        assert_eq!(tracker.created()[0].labels, vec!["news", "rss"]);
    }
}
