use regex::Regex;
use std::sync::LazyLock;

/// Build the matcher for `name='value'` or `name="value"`.
///
/// The value stops at the first unescaped quote of the kind that opened it,
/// and must stay on one line. Escape sequences are kept verbatim.
fn attribute_regex(name: &str) -> Regex {
    Regex::new(&format!(
        r#"\s{}=(?:'((?:[^'\\\n]|\\.)*)'|"((?:[^"\\\n]|\\.)*)")"#,
        regex::escape(name)
    ))
    .unwrap()
}

static ID_REGEX: LazyLock<Regex> = LazyLock::new(|| attribute_regex("id"));
static DESCRIPTION_REGEX: LazyLock<Regex> = LazyLock::new(|| attribute_regex("description"));
static DEFAULT_MESSAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| attribute_regex("defaultMessage"));

/// Attributes read from a single marker.
///
/// `None` means the attribute is not present on the marker; an empty
/// attribute (`description=""`) is `Some(String::new())`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerAttributes {
    pub id: Option<String>,
    pub description: Option<String>,
    pub default_message: Option<String>,
}

/// Parse the `id`, `description` and `defaultMessage` attributes of a marker.
///
/// # Examples
///
/// ```
/// use localize_text::core::parsers::attributes::parse_attributes;
///
/// let attrs = parse_attributes(r#"<LocalizeText id="a.b" defaultMessage="Hello {{ name }}" />"#);
/// assert_eq!(attrs.id.as_deref(), Some("a.b"));
/// assert_eq!(attrs.description, None);
/// assert_eq!(attrs.default_message.as_deref(), Some("Hello {{ name }}"));
/// ```
pub fn parse_attributes(marker: &str) -> MarkerAttributes {
    MarkerAttributes {
        id: quoted_value(&ID_REGEX, marker),
        description: quoted_value(&DESCRIPTION_REGEX, marker),
        default_message: quoted_value(&DEFAULT_MESSAGE_REGEX, marker),
    }
}

fn quoted_value(regex: &Regex, marker: &str) -> Option<String> {
    let captures = regex.captures(marker)?;
    captures
        .get(1)
        .or_else(|| captures.get(2))
        .map(|m| m.as_str().to_string())
}
