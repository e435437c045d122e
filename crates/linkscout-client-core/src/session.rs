use std::fmt;

/// Path the page submits fetch requests to and subscribes to results on.
pub const LINKS_ENDPOINT: &str = "/links";

/// Per-page-load identifier correlating the event-stream subscription with
/// the fetch requests this page submits.
///
/// Hyphen-delimited lowercase hex in the `8-4-4-4-12` shape. Not a real
/// UUID and not cryptographically secure; it only has to disambiguate
/// concurrent browser sessions against the same server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientToken(String);

impl ClientToken {
    /// Builds a token from a 16-bit entropy source. The wasm shell feeds
    /// this from the platform random source; tests feed fixed sequences.
    pub fn generate(mut entropy: impl FnMut() -> u16) -> Self {
        let mut quad = move || format!("{:04x}", entropy());
        let token = format!(
            "{}{}-{}-{}-{}-{}{}{}",
            quad(),
            quad(),
            quad(),
            quad(),
            quad(),
            quad(),
            quad(),
            quad()
        );
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Context object created once at page boot and passed explicitly to the
/// stream client and the form controller. Exactly one exists per page load.
#[derive(Debug, Clone)]
pub struct PageSession {
    token: ClientToken,
}

impl PageSession {
    pub fn new(token: ClientToken) -> Self {
        Self { token }
    }

    pub fn token(&self) -> &ClientToken {
        &self.token
    }

    /// Address of this session's server-push subscription.
    pub fn stream_url(&self) -> String {
        format!("{LINKS_ENDPOINT}?id={}", self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(values: &[u16]) -> impl FnMut() -> u16 + '_ {
        let mut index = 0;
        move || {
            let value = values[index % values.len()];
            index += 1;
            value
        }
    }

    #[test]
    fn token_has_guid_shape() {
        let token = ClientToken::generate(sequence(&[0xab12]));
        let text = token.as_str();
        assert_eq!(text.len(), 36);
        let groups: Vec<&str> = text.split('-').collect();
        assert_eq!(
            groups.iter().map(|group| group.len()).collect::<Vec<_>>(),
            vec![8, 4, 4, 4, 12]
        );
        assert!(
            text.chars()
                .all(|ch| ch == '-' || ch.is_ascii_hexdigit() && !ch.is_ascii_uppercase())
        );
    }

    #[test]
    fn token_keeps_leading_zeros() {
        let token = ClientToken::generate(sequence(&[0x000f]));
        assert_eq!(token.as_str(), "000f000f-000f-000f-000f-000f000f000f");
    }

    #[test]
    fn distinct_entropy_yields_distinct_tokens() {
        let first = ClientToken::generate(sequence(&[0x1111]));
        let second = ClientToken::generate(sequence(&[0x2222]));
        assert_ne!(first, second);
    }

    #[test]
    fn stream_url_carries_the_session_token() {
        let session = PageSession::new(ClientToken::generate(sequence(&[0x00aa])));
        assert_eq!(
            session.stream_url(),
            "/links?id=00aa00aa-00aa-00aa-00aa-00aa00aa00aa"
        );
    }
}
