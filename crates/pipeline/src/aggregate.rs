use chrono::{DateTime, Utc};

/// An in-memory, not-yet-submitted issue payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateIssue {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
    /// Tracker-assigned identifier, set once after successful creation
    pub id: Option<u64>,
}

/// Fold state turning surviving entries into candidate issues.
///
/// In per-entry mode every push appends its own candidate. In aggregate mode
/// the first push creates the sole candidate; every later push appends its
/// body (separated by a blank line) and rewrites the title to the prefix
/// plus the latest fold time, so the title always reflects the most recent
/// entry folded in.
#[derive(Debug)]
pub struct Aggregator {
    aggregate: bool,
    title_prefix: String,
    candidates: Vec<CandidateIssue>,
}

impl Aggregator {
    pub fn new(aggregate: bool, title_prefix: impl Into<String>) -> Self {
        Self {
            aggregate,
            title_prefix: title_prefix.into(),
            candidates: Vec::new(),
        }
    }

    /// Fold one surviving entry into the candidate list.
    pub fn push(&mut self, title: String, body: String, labels: &[String], now: DateTime<Utc>) {
        if !self.aggregate || self.candidates.is_empty() {
            self.candidates.push(CandidateIssue {
                title,
                body,
                labels: labels.to_vec(),
                id: None,
            });
            return;
        }

        let aggregate_issue = &mut self.candidates[0];
        aggregate_issue.title = format!("{}{}", self.title_prefix, now.format("%H:%M:%S %Z"));
        aggregate_issue.body.push_str("\n\n");
        aggregate_issue.body.push_str(&body);
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn into_candidates(self) -> Vec<CandidateIssue> {
        self.candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 5, hour, minute, 0).unwrap()
    }

    #[test]
    fn test_per_entry_mode_yields_one_candidate_per_push() {
        let mut aggregator = Aggregator::new(false, "News ");
        aggregator.push("News A".into(), "a\n".into(), &[], at(9, 0));
        aggregator.push("News B".into(), "b\n".into(), &[], at(9, 5));

        let candidates = aggregator.into_candidates();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].title, "News A");
        assert_eq!(candidates[1].title, "News B");
        assert_eq!(candidates[0].body, "a\n");
        assert!(candidates.iter().all(|candidate| candidate.id.is_none()));
    }

    #[test]
    fn test_aggregate_mode_folds_into_single_candidate() {
        let mut aggregator = Aggregator::new(true, "News ");
        aggregator.push("News A".into(), "a\n".into(), &[], at(9, 0));
        aggregator.push("News B".into(), "b\n".into(), &[], at(9, 5));
        aggregator.push("News C".into(), "c\n".into(), &[], at(9, 10));

        let candidates = aggregator.into_candidates();
        assert_eq!(candidates.len(), 1);

        let issue = &candidates[0];
        assert_eq!(issue.body, "a\n\n\nb\n\n\nc\n");
        // Title carries the prefix and the time of the last fold
        assert!(issue.title.starts_with("News "));
        assert!(issue.title.contains("09:10:00"));
    }

    #[test]
    fn test_aggregate_mode_first_push_keeps_entry_title() {
        let mut aggregator = Aggregator::new(true, "News ");
        aggregator.push("News A".into(), "a\n".into(), &[], at(9, 0));

        let candidates = aggregator.into_candidates();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].title, "News A");
    }

    #[test]
    fn test_labels_are_carried() {
        let labels = vec!["news".to_string(), "rss".to_string()];
        let mut aggregator = Aggregator::new(false, "");
        aggregator.push("A".into(), "a\n".into(), &labels, at(9, 0));

        assert_eq!(aggregator.into_candidates()[0].labels, labels);
    }

    #[test]
    fn test_empty_aggregator_yields_nothing() {
        let aggregator = Aggregator::new(true, "News ");
        assert!(aggregator.is_empty());
        assert!(aggregator.into_candidates().is_empty());
    }
}
