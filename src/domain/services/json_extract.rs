use std::sync::OnceLock;

use regex::Regex;

fn json_fence() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)```json\s*(.*?)\s*```").ok())
        .as_ref()
}

fn any_fence() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)```\s*(.*?)\s*```").ok())
        .as_ref()
}

/// Body of the first fence matched by `re`. A pattern that failed to
/// compile matches nothing.
fn fenced_body<'a>(re: Option<&Regex>, text: &'a str) -> Option<&'a str> {
    re?.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .filter(|body| !body.is_empty())
}

/// Returns the part of a model reply most likely to be a JSON document.
///
/// First match wins: a ```` ```json ```` fence (label matched case
/// insensitively), then any fence, then the span from the first `{` to the
/// last `}`. Anything else comes back unchanged. The result is not parsed
/// here; callers still have to handle invalid JSON.
pub fn extract_json(text: &str) -> &str {
    if let Some(body) = fenced_body(json_fence(), text) {
        return body;
    }

    if let Some(body) = fenced_body(any_fence(), text) {
        return body;
    }

    if let (Some(first), Some(last)) = (text.find('{'), text.rfind('}')) {
        if first < last {
            return &text[first..=last];
        }
    }

    text
}
