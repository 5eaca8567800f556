use regex::{Captures, Regex};
use std::{collections::HashMap, sync::LazyLock};

/// Placeholder name to replacement text.
pub type ReplacementValues = HashMap<String, String>;

// `{{ name }}`; the inner text is validated separately.
static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{\{([^}]+)\}\}").unwrap());

/// Substitute `{{ name }}` placeholders in `template`.
///
/// Each name is looked up in `values`, then in `defaults` when the value is
/// absent or empty. Anything still unresolved becomes an empty string, as
/// does a token whose name contains whitespace. Substituted text is not
/// scanned again.
///
/// # Examples
///
/// ```
/// use localize_text::runtime::tokens::{ReplacementValues, replace_tokens};
///
/// let values = ReplacementValues::from([("user".to_string(), "Sam".to_string())]);
/// assert_eq!(replace_tokens("Hi {{ user }}!", &values, None), "Hi Sam!");
/// assert_eq!(replace_tokens("Hi {{ user }}!", &ReplacementValues::new(), None), "Hi !");
/// ```
pub fn replace_tokens(
    template: &str,
    values: &ReplacementValues,
    defaults: Option<&ReplacementValues>,
) -> String {
    TOKEN_REGEX
        .replace_all(template, |caps: &Captures| {
            let name = caps[1].trim();
            if name.is_empty() || name.contains(char::is_whitespace) {
                return String::new();
            }
            lookup(values, name)
                .or_else(|| defaults.and_then(|d| lookup(d, name)))
                .unwrap_or_default()
                .to_string()
        })
        .into_owned()
}

fn lookup<'a>(values: &'a ReplacementValues, name: &str) -> Option<&'a str> {
    values
        .get(name)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}
