//! Cleanup applied to queries before they are embedded.

use std::sync::LazyLock;

use regex::Regex;

static AD_SNIPPET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(adsbygoogle=window\.adsbygoogle\|\|\[\]\)\.push\(\{\}\);")
        .expect("valid ad snippet pattern")
});
static TABLE_OF_CONTENTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Table of Contents").expect("valid marker pattern"));
static NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n+").expect("valid newline pattern"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));
static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid punctuation pattern"));

/// Strips scraped boilerplate, punctuation and redundant whitespace and
/// lowercases the result.
///
/// Punctuation removal can leave doubled spaces behind (`"a - b"`), so
/// whitespace is collapsed once more at the end. This keeps the function
/// idempotent.
pub fn normalize(text: &str) -> String {
    let text = AD_SNIPPET.replace_all(text, "");
    let text = TABLE_OF_CONTENTS.replace_all(&text, "");
    let text = NEWLINES.replace_all(&text, " ");
    let text = WHITESPACE.replace_all(&text, " ");
    let text = PUNCTUATION.replace_all(&text, "");
    let text = text.to_lowercase();

    WHITESPACE.replace_all(&text, " ").trim().to_string()
}
