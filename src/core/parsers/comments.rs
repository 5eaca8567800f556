use regex::Regex;
use std::sync::LazyLock;

// A `//` comment that is the only content of its line. The line break is kept
// so that the surrounding lines stay where they were.
static LINE_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*//[^\n]*").unwrap());

// A `/* ... */` comment opened after nothing but indentation. May span lines.
static BLOCK_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*/\*(?s:.*?)\*/").unwrap());

/// Remove comments that start a line from JavaScript/JSX source text.
///
/// Only comments preceded by whitespace alone are removed:
///
/// ```text
/// removed:      `    // <LocalizeText id="a" />`
/// kept:         `const lt = 'np'; // <LocalizeText id="a" />`
/// ```
///
/// A comment sharing its line with code is left untouched, since telling a
/// trailing comment apart from string content that merely looks like one is
/// not possible without a tokenizer.
///
/// # Examples
///
/// ```
/// use localize_text::core::parsers::comments::strip_comments;
///
/// let source = "a\n  // b\n/* c\n d */e";
/// assert_eq!(strip_comments(source), "a\n\ne");
/// ```
pub fn strip_comments(source: &str) -> String {
    let without_lines = LINE_COMMENT_REGEX.replace_all(source, "");
    BLOCK_COMMENT_REGEX
        .replace_all(&without_lines, "")
        .into_owned()
}
