use regex::Regex;
use std::sync::LazyLock;

// One pattern per unit; only the first occurrence of each is honored.
static SECONDS_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s*s").unwrap());
static MINUTES_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s*m").unwrap());
static HOURS_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s*h").unwrap());
static DAYS_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s*d").unwrap());

const SECOND_MS: u64 = 1_000;
const MINUTE_MS: u64 = 60 * SECOND_MS;
const HOUR_MS: u64 = 60 * MINUTE_MS;
const DAY_MS: u64 = 24 * HOUR_MS;

/// Parse a human-readable age string ("48h", "2d 12h", "90m") into
/// milliseconds.
///
/// The text is scanned for numeric tokens tagged with `s`, `m`, `h` or `d`;
/// tokens may appear in any order and anything unrecognized contributes
/// zero. Only the first occurrence of each unit counts. Text with no unit
/// token at all yields 0, which callers treat as "no age cutoff".
pub fn parse_duration_ms(text: &str) -> u64 {
    let mut ms: u64 = 0;

    for (pattern, unit_ms) in [
        (&SECONDS_PATTERN, SECOND_MS),
        (&MINUTES_PATTERN, MINUTE_MS),
        (&HOURS_PATTERN, HOUR_MS),
        (&DAYS_PATTERN, DAY_MS),
    ] {
        ms = ms.saturating_add(first_value(pattern, text).saturating_mul(unit_ms));
    }

    ms
}

fn first_value(pattern: &Regex, text: &str) -> u64 {
    pattern
        .captures(text)
        .and_then(|captures| captures.get(1))
        .and_then(|value| value.as_str().parse().ok())
        .unwrap_or(0)
}
