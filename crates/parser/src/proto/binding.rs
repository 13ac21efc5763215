//! `google.api.http` option parsing

use regex::Regex;
use rest_adapter_generator_common::{HttpBinding, HttpVerb};
use std::sync::LazyLock;

/// Marker that must appear in an options block for it to carry a binding
pub const HTTP_OPTION_MARKER: &str = "google.api.http";

static VERB_PATTERNS: LazyLock<Vec<(HttpVerb, Regex)>> = LazyLock::new(|| {
    HttpVerb::ALL
        .iter()
        .map(|&verb| {
            let pattern = format!(
                r#"\b(?i:{})\s*:\s*(?:"([^"]+)"|'([^']+)')"#,
                verb.keyword()
            );
            (verb, Regex::new(&pattern).expect("verb pattern is valid"))
        })
        .collect()
});

static BODY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bbody\s*:\s*(?:"([^"]+)"|'([^']+)')"#).expect("body pattern is valid")
});

/// Parse the HTTP binding out of a method's options block.
///
/// Verbs are tried in [`HttpVerb::ALL`] order and the first match wins, so a
/// block that names both `get` and `post` binds to GET. The body selector is
/// looked up independently of the verb.
pub fn parse_http_binding(options: &str) -> Option<HttpBinding> {
    if !options.contains(HTTP_OPTION_MARKER) {
        return None;
    }

    let (verb, path) = VERB_PATTERNS
        .iter()
        .find_map(|(verb, re)| quoted_capture(re, options).map(|path| (*verb, path)))?;

    let mut binding = HttpBinding::new(verb, path);
    binding.body_selector = quoted_capture(&BODY_PATTERN, options).map(str::to_string);

    Some(binding)
}

/// First match of a pattern with alternative double/single quoted groups
fn quoted_capture<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    let caps = re.captures(text)?;
    caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str())
}
