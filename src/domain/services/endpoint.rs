const CHAT_COMPLETIONS_SUFFIX: &str = "/chat/completions";
const VERSION_SUFFIX: &str = "/v1";

/// Turns a user-supplied base URL into a full chat-completions URL.
///
/// Trims whitespace and one trailing `/`, then appends whatever part of
/// `/v1/chat/completions` is missing. Malformed URLs pass through untouched
/// and fail later, at request time.
pub fn normalize_endpoint(raw_url: &str) -> String {
    let trimmed = raw_url.trim();
    let url = trimmed.strip_suffix('/').unwrap_or(trimmed);

    if url.ends_with(CHAT_COMPLETIONS_SUFFIX) {
        url.to_string()
    } else if url.ends_with(VERSION_SUFFIX) {
        format!("{url}{CHAT_COMPLETIONS_SUFFIX}")
    } else {
        format!("{url}{VERSION_SUFFIX}{CHAT_COMPLETIONS_SUFFIX}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_url_is_unchanged() {
        let url = "https://api.siliconflow.cn/v1/chat/completions";
        assert_eq!(normalize_endpoint(url), url);
    }

    #[test]
    fn full_url_with_trailing_slash_is_trimmed() {
        assert_eq!(
            normalize_endpoint("  https://x.com/v1/chat/completions/ "),
            "https://x.com/v1/chat/completions"
        );
    }

    #[test]
    fn version_suffix_gets_chat_completions() {
        assert_eq!(
            normalize_endpoint("https://x.com/v1"),
            "https://x.com/v1/chat/completions"
        );
    }

    #[test]
    fn bare_host_gets_full_path() {
        assert_eq!(
            normalize_endpoint("https://x.com/"),
            "https://x.com/v1/chat/completions"
        );
        assert_eq!(
            normalize_endpoint("http://localhost:1234"),
            "http://localhost:1234/v1/chat/completions"
        );
    }

    #[test]
    fn only_one_trailing_slash_is_stripped() {
        assert_eq!(
            normalize_endpoint("https://x.com//"),
            "https://x.com//v1/chat/completions"
        );
    }

    #[test]
    fn malformed_input_passes_through() {
        assert_eq!(normalize_endpoint("not a url"), "not a url/v1/chat/completions");
        assert_eq!(normalize_endpoint(""), "/v1/chat/completions");
    }
}
