// The edge (CloudFront + AWS WAF bot control) labels requests from targeted
// bots before they reach us. We never classify traffic ourselves.

use std::convert::Infallible;

use axum::http::{HeaderMap, request::Parts};

pub const BOT_DETECTED_HEADER: &str = "x-amzn-waf-targeted-bot-detected";
const BOT_DETECTED_VALUE: &str = "true";

/// Returns true only when the edge flagged the request with exactly `true`.
/// Missing, repeated-but-different or non UTF-8 values all count as human.
pub fn is_automated(headers: &HeaderMap) -> bool {
    headers
        .get(BOT_DETECTED_HEADER)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == BOT_DETECTED_VALUE)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Traffic {
    Trusted,
    Automated,
}

impl Traffic {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        if is_automated(headers) {
            Traffic::Automated
        } else {
            Traffic::Trusted
        }
    }

    pub fn is_automated(self) -> bool {
        self == Traffic::Automated
    }
}

// Classified again on every request, nothing is remembered per client.
impl<S> axum::extract::FromRequestParts<S> for Traffic
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let traffic = Traffic::from_headers(&parts.headers);

        if traffic.is_automated() {
            tracing::debug!(uri = %parts.uri, "Request flagged as bot traffic by the edge");
        }

        Ok(traffic)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &'static [u8]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            BOT_DETECTED_HEADER,
            HeaderValue::from_bytes(value).unwrap(),
        );
        headers
    }

    #[test]
    fn test_missing_header_is_trusted() {
        assert!(!is_automated(&HeaderMap::new()));
        assert_eq!(Traffic::from_headers(&HeaderMap::new()), Traffic::Trusted);
    }

    #[test]
    fn test_exact_true_is_automated() {
        let headers = headers_with(b"true");
        assert!(is_automated(&headers));
        assert_eq!(Traffic::from_headers(&headers), Traffic::Automated);
    }

    #[test]
    fn test_other_values_are_trusted() {
        for value in [
            &b"false"[..],
            b"TRUE",
            b"True",
            b"1",
            b"yes",
            b"",
            b" true",
            b"true ",
        ] {
            assert!(
                !is_automated(&headers_with(value)),
                "{:?} should not be treated as bot traffic",
                String::from_utf8_lossy(value)
            );
        }
    }

    #[test]
    fn test_non_utf8_value_is_trusted() {
        assert!(!is_automated(&headers_with(b"tr\xffue")));
    }

    #[test]
    fn test_header_name_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::HeaderName::from_bytes(b"X-Amzn-Waf-Targeted-Bot-Detected").unwrap(),
            HeaderValue::from_static("true"),
        );
        assert!(is_automated(&headers));
    }

    #[tokio::test]
    async fn test_extractor_never_rejects() {
        use axum::extract::FromRequestParts;

        let (mut parts, _) = axum::http::Request::builder()
            .uri("/bot-demo-2")
            .header(BOT_DETECTED_HEADER, "true")
            .body(())
            .unwrap()
            .into_parts();

        let traffic = Traffic::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(traffic, Traffic::Automated);
    }
}
