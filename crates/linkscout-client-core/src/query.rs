/// Delay between page load and the startup auto-fetch, giving the stream
/// subscription time to register server-side before results start flowing.
/// Heuristic, not a handshake: there is no ready acknowledgment from the
/// stream.
pub const STARTUP_FETCH_DELAY_MS: u64 = 500;

/// A fetch to run automatically after page load, extracted from the
/// location's query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoFetch {
    pub url: String,
    pub selector: Option<String>,
}

/// First-occurrence extraction of `url=` and `selector=` from the raw
/// query string. Captures run to the next `&` and are passed through
/// without percent-decoding. Returns `None` when no non-empty `url`
/// capture exists, in which case the caller seeds the navigation stack
/// instead of fetching.
pub fn parse_search(search: &str) -> Option<AutoFetch> {
    let url = capture(search, "url=")?;
    Some(AutoFetch {
        url,
        selector: capture(search, "selector="),
    })
}

fn capture(search: &str, key: &str) -> Option<String> {
    let mut rest = search;
    while let Some(position) = rest.find(key) {
        let after = &rest[position + key.len()..];
        let value: &str = after.split('&').next().unwrap_or_default();
        if !value.is_empty() {
            return Some(value.to_string());
        }
        rest = after;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_url_and_selector() {
        let auto = parse_search("?url=example.com&selector=.item").expect("auto fetch");
        assert_eq!(auto.url, "example.com");
        assert_eq!(auto.selector.as_deref(), Some(".item"));
    }

    #[test]
    fn selector_is_optional() {
        let auto = parse_search("?url=example.com").expect("auto fetch");
        assert_eq!(auto.url, "example.com");
        assert_eq!(auto.selector, None);
    }

    #[test]
    fn missing_url_means_no_auto_fetch() {
        assert_eq!(parse_search(""), None);
        assert_eq!(parse_search("?selector=.item"), None);
    }

    #[test]
    fn captures_are_not_percent_decoded() {
        let auto = parse_search("?url=example.com%2Fpage").expect("auto fetch");
        assert_eq!(auto.url, "example.com%2Fpage");
    }

    #[test]
    fn empty_capture_falls_through_to_a_later_occurrence() {
        let auto = parse_search("?url=&url=example.com").expect("auto fetch");
        assert_eq!(auto.url, "example.com");
    }

    #[test]
    fn first_non_empty_occurrence_wins() {
        let auto = parse_search("?url=first.com&url=second.com").expect("auto fetch");
        assert_eq!(auto.url, "first.com");
    }
}
