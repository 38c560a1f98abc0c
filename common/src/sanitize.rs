//! Markup stripping for untrusted strings.
//!
//! Values coming from the URL or typed by the user are reduced to plain text:
//! script and style elements disappear together with their content, comments
//! and every tag are removed, and the remaining text is kept as is. The output
//! is not entity-escaped; Yew escapes text nodes when rendering.

use std::sync::LazyLock;

use regex::Regex;

/// Longest seeded value accepted from the URL, in characters.
pub const MAX_SEED_LENGTH: usize = 100;

static ACTIVE_ELEMENTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?(</script\s*>|$)|<style\b[^>]*>.*?(</style\s*>|$)")
        .expect("active element pattern compiles")
});

static COMMENTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?(-->|$)").expect("comment pattern compiles"));

static TAGS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<[!/?]?[A-Za-z][^>]*(>|$)").expect("tag pattern compiles")
});

/// Removes every tag and attribute from `input`, keeping the text content.
///
/// Passes repeat until the text stops changing, so markup nested inside a tag
/// (`<<b>script>`) cannot reassemble into a new tag.
pub fn strip_markup(input: &str) -> String {
    let mut current = input.to_string();
    while current.contains('<') {
        let without_active = ACTIVE_ELEMENTS.replace_all(&current, "");
        let without_comments = COMMENTS.replace_all(&without_active, "");
        let stripped = TAGS.replace_all(&without_comments, "").into_owned();
        if stripped == current {
            break;
        }
        current = stripped;
    }
    current
}

/// Sanitizes a URL-seeded value.
///
/// Values longer than [`MAX_SEED_LENGTH`] after stripping are replaced by an
/// empty string rather than truncated.
pub fn sanitize_seed(raw: &str) -> String {
    let sanitized = strip_markup(raw);
    if sanitized.chars().count() > MAX_SEED_LENGTH {
        return String::new();
    }
    sanitized
}
