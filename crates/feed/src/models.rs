use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry from a syndication feed.
///
/// Every field is optional: real-world feeds routinely omit publish dates,
/// links or bodies. `content` holds the full HTML body (`content:encoded` in
/// RSS, `content` in Atom); `description` is the short HTML summary used as a
/// fallback when `content` is absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub title: Option<String>,
    pub link: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub content: Option<String>,
    pub description: Option<String>,
}
