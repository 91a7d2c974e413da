// src/domain/slug/services.rs

/// Converts a title into a lowercase, hyphen-delimited slug.
///
/// The rules are applied in order: lowercase, drop every character outside
/// `a-z`, `0-9`, space and `-`, turn each run of spaces into `-`, then
/// collapse runs of `-`. Dropped characters are removed before any collapsing
/// happens, so they never split a run. Leading and trailing spaces are kept
/// as hyphens; callers that want trimmed edges must trim the result.
///
/// ```
/// use title_slug::domain::slug::create_slug;
///
/// assert_eq!(create_slug("C++ is Great!!!"), "c-is-great");
/// assert_eq!(create_slug("  Leading and Trailing  "), "-leading-and-trailing-");
/// ```
pub fn create_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut previous_was_hyphen = false;

    for ch in title.chars().flat_map(char::to_lowercase) {
        match ch {
            'a'..='z' | '0'..='9' => {
                slug.push(ch);
                previous_was_hyphen = false;
            }
            ' ' | '-' => {
                if !previous_was_hyphen {
                    slug.push('-');
                    previous_was_hyphen = true;
                }
            }
            _ => {}
        }
    }

    slug
}

/// Returns `true` when `value` is already in the shape `create_slug` produces.
pub fn is_slug(value: &str) -> bool {
    value
        .bytes()
        .all(|b| matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'-'))
        && !value.contains("--")
}
