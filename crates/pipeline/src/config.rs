use regex::Regex;

/// Resolved run configuration, constructed once and read-only afterwards.
///
/// Pattern fields hold compiled regexes: compiling user-supplied patterns is
/// the caller's job and must fail fast at configuration time, never
/// per-entry.
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    /// Prefix prepended to every issue title, including its trailing space
    /// (empty when no prefix is configured)
    pub title_prefix: String,
    /// Log intended creations instead of calling the tracker
    pub dry_run: bool,
    /// Fold all surviving entries into a single issue
    pub aggregate: bool,
    /// Truncate rendered bodies beyond this many characters
    pub character_limit: Option<usize>,
    /// Include only entries whose candidate title matches
    pub title_pattern: Option<Regex>,
    /// Include only entries whose raw body source matches
    pub content_pattern: Option<Regex>,
    /// Entries published more than this many milliseconds ago are dropped;
    /// zero disables the age cutoff
    pub max_age_ms: u64,
    /// Labels attached to created issues
    pub labels: Vec<String>,
}
