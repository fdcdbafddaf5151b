/// Continuation marker appended where a body was cut.
const TRUNCATION_MARKER: &str = "…";

/// Footer pointing readers at the full article after truncation.
const READ_MORE_FOOTER: &str =
    "\n\n---\n## Would you like to know more?\nRead the full article on the following website:";

/// Convert entry HTML to Markdown, trimming surrounding whitespace.
pub(crate) fn render_markdown(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }
    html2md::parse_html(html).trim().to_string()
}

/// Enforce the character limit on rendered Markdown.
///
/// When the Markdown exceeds the limit it is cut to exactly `limit`
/// characters and the continuation marker plus read-more footer are
/// appended. Truncation makes no attempt to keep the Markdown well formed.
pub(crate) fn truncate_markdown(markdown: String, limit: Option<usize>) -> String {
    let Some(limit) = limit else {
        return markdown;
    };
    if markdown.chars().count() <= limit {
        return markdown;
    }

    let mut truncated: String = markdown.chars().take(limit).collect();
    truncated.push_str(TRUNCATION_MARKER);
    truncated.push_str(READ_MORE_FOOTER);
    truncated
}

/// Final issue body: the Markdown (possibly empty) and a newline, then a
/// blank line and the entry's link when one exists.
pub(crate) fn compose_body(markdown: &str, link: Option<&str>) -> String {
    match link {
        Some(link) => format!("{}\n\n{}", markdown, link),
        None => format!("{}\n", markdown),
    }
}
