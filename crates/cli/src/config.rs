use std::env;

use pipeline::{parse_duration_ms, PipelineConfig};
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required input: {0}")]
    MissingInput(&'static str),

    #[error("Invalid {input} regex: {source}")]
    InvalidPattern {
        input: &'static str,
        source: regex::Error,
    },

    #[error("Invalid character-limit: {0}")]
    InvalidCharacterLimit(String),
}

/// Resolved run configuration, read from the environment once at startup.
///
/// Inputs follow the GitHub Actions convention: an input named `max-age`
/// arrives as the `INPUT_MAX_AGE` environment variable. The repository and
/// API base come from the standard runner variables.
#[derive(Debug)]
pub struct Config {
    pub feed: String,
    pub token: String,
    pub repository: String,
    pub api_url: Option<String>,
    pub pipeline: PipelineConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let feed = input("feed").ok_or(ConfigError::MissingInput("feed"))?;
        let token = input("github-token").ok_or(ConfigError::MissingInput("github-token"))?;
        let repository = env::var("GITHUB_REPOSITORY")
            .ok()
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingInput("GITHUB_REPOSITORY"))?;
        let api_url = env::var("GITHUB_API_URL").ok().filter(|value| !value.is_empty());

        let pipeline = PipelineConfig {
            title_prefix: normalize_prefix(input("prefix").unwrap_or_default()),
            dry_run: parse_bool(input("dry-run")),
            aggregate: parse_bool(input("aggregate")),
            character_limit: parse_character_limit(input("character-limit"))?,
            title_pattern: compile_pattern("title-pattern", input("title-pattern"))?,
            content_pattern: compile_pattern("content-pattern", input("content-pattern"))?,
            max_age_ms: parse_duration_ms(&input("max-age").unwrap_or_default()),
            labels: split_labels(&input("labels").unwrap_or_default()),
        };

        Ok(Self {
            feed,
            token,
            repository,
            api_url,
            pipeline,
        })
    }
}

/// Read a GitHub Actions input: `INPUT_<NAME>`, uppercased, dashes replaced
/// with underscores. Empty values count as absent.
fn input(name: &str) -> Option<String> {
    let key = format!("INPUT_{}", name.to_uppercase().replace('-', "_"));
    env::var(key).ok().filter(|value| !value.is_empty())
}

/// A non-empty prefix gets one trailing space; titles are `prefix + title`.
fn normalize_prefix(prefix: String) -> String {
    if prefix.is_empty() {
        prefix
    } else {
        format!("{} ", prefix)
    }
}

fn parse_bool(value: Option<String>) -> bool {
    value.as_deref() == Some("true")
}

/// A limit of zero means no truncation, same as leaving the input unset.
fn parse_character_limit(value: Option<String>) -> Result<Option<usize>, ConfigError> {
    let Some(raw) = value else {
        return Ok(None);
    };
    let limit: usize = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidCharacterLimit(raw.clone()))?;
    Ok((limit > 0).then_some(limit))
}

/// Compile a user-supplied pattern, failing fast on invalid regexes rather
/// than failing per-entry later.
fn compile_pattern(
    input_name: &'static str,
    value: Option<String>,
) -> Result<Option<Regex>, ConfigError> {
    value
        .map(|raw| {
            Regex::new(&raw).map_err(|source| ConfigError::InvalidPattern {
                input: input_name,
                source,
            })
        })
        .transpose()
}

fn split_labels(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}
