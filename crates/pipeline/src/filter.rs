use chrono::{DateTime, Duration, Utc};
use feed::FeedEntry;

/// Compute the age cutoff for a run.
///
/// A max age of zero (no recognized duration token, or a non-positive
/// configured value) disables the cutoff entirely: the filter passes
/// everything through.
pub fn age_cutoff(now: DateTime<Utc>, max_age_ms: u64) -> Option<DateTime<Utc>> {
    if max_age_ms == 0 {
        return None;
    }
    let max_age = Duration::milliseconds(i64::try_from(max_age_ms).unwrap_or(i64::MAX));
    // A max age too large to subtract behaves the same as no cutoff
    now.checked_sub_signed(max_age)
}

/// Drop entries published strictly before the cutoff, preserving order.
///
/// Entries without a publish time are never filtered by age (assumed
/// recent).
pub fn filter_by_age(entries: Vec<FeedEntry>, cutoff: Option<DateTime<Utc>>) -> Vec<FeedEntry> {
    let Some(cutoff) = cutoff else {
        return entries;
    };

    entries
        .into_iter()
        .filter(|entry| match entry.published_at {
            None => true,
            Some(published) => published >= cutoff,
        })
        .collect()
}
