use regex::Regex;
use std::sync::LazyLock;

/// Anything that is not an ASCII letter, digit or space.
#[expect(clippy::unwrap_used, reason = "static regex pattern is compile-time validated")]
static DISALLOWED_QUERY_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9A-Za-z ]").unwrap());

/// Strip a free-text query down to ASCII letters, digits and spaces.
///
/// Case is preserved. The result is stable under repeated application.
#[must_use]
pub fn sanitize_query(input: &str) -> String {
    DISALLOWED_QUERY_CHARS.replace_all(input, "").into_owned()
}
