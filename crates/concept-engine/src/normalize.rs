//! Markdown to plain-text normalization
//!
//! A pipeline of ordered regex rewrite passes, not a markdown parser.
//! Each pass is best-effort: malformed markup is left as literal text and
//! never causes a failure.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Fenced code blocks, fences and language tag included. Non-greedy so
    /// a fence pair never spans past the first closing fence.
    static ref FENCED_CODE: Regex = Regex::new(r"(?s)```.*?```").unwrap();

    /// Inline code spans.
    static ref INLINE_CODE: Regex = Regex::new(r"`[^`]*`").unwrap();

    /// Markdown links and images. The whole construct is dropped, label
    /// included, so concepts inside link labels are not counted.
    static ref LINK_OR_IMAGE: Regex = Regex::new(r"!?\[[^\]]*\]\([^)]*\)").unwrap();

    /// Anything that looks like an HTML tag: shortest `<...>` span.
    static ref HTML_TAG: Regex = Regex::new(r"<[^>]+>").unwrap();

    /// Heading markers at the start of a line.
    static ref HEADING_MARKER: Regex = Regex::new(r"(?m)^#+\s*").unwrap();

    /// Paired `*`/`_` emphasis markers (1-3 chars), enclosed text kept.
    static ref EMPHASIS: Regex = Regex::new(r"[*_]{1,3}([^*_]*)[*_]{1,3}").unwrap();
}

/// Convert raw markdown source into prose-only plain text.
///
/// Pass order matters: front matter and code are removed before the
/// lighter-weight markers so later passes cannot resurrect removed text.
/// Deterministic and idempotent on already-plain text.
pub fn normalize(raw: &str) -> String {
    let body = strip_front_matter(raw);

    let text = FENCED_CODE.replace_all(body, "");
    let text = INLINE_CODE.replace_all(&text, "");
    let text = LINK_OR_IMAGE.replace_all(&text, "");
    let text = HTML_TAG.replace_all(&text, "");
    let text = HEADING_MARKER.replace_all(&text, "");
    let text = EMPHASIS.replace_all(&text, "$1");

    text.trim().to_string()
}

/// Strip a leading front-matter block delimited by `---` lines.
///
/// The opening `---` must be the very first line. Returns the input
/// unchanged when the block is absent or unclosed.
fn strip_front_matter(raw: &str) -> &str {
    let after_open = match raw.strip_prefix("---") {
        Some(rest) => rest,
        None => return raw,
    };
    let after_open = match after_open
        .strip_prefix("\r\n")
        .or_else(|| after_open.strip_prefix('\n'))
    {
        Some(rest) => rest,
        None => return raw,
    };

    let mut offset = 0;
    for line in after_open.split_inclusive('\n') {
        offset += line.len();
        if line.trim_end() == "---" {
            return &after_open[offset..];
        }
    }

    raw
}
