use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::FetchError;

/// Characters left untouched when encoding a query value, as `encodeURIComponent` does
pub const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Thin GET-and-decode wrapper shared by the upstream clients
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }

    /// Makes an HTTP GET request and deserializes the JSON response.
    ///
    /// Every failure is logged here, so callers only decide what to show.
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        url: &str,
        accept: Option<&str>,
    ) -> Result<T, FetchError> {
        tracing::debug!(message = "making upstream request", url = %url);

        let result = self.fetch(url, accept).await;
        if let Err(e) = &result {
            tracing::warn!(message = "upstream request failed", url = %url, error = %e);
        }
        result
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        url: &str,
        accept: Option<&str>,
    ) -> Result<T, FetchError> {
        let mut request = self.client.get(url);
        if let Some(accept) = accept {
            request = request.header(ACCEPT, accept);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::BadStatus {
                status,
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| FetchError::Parse {
            url: url.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client() -> HttpClient {
        HttpClient::new("weather-mcp/1.0").unwrap()
    }

    #[tokio::test]
    async fn sends_fixed_headers_and_decodes_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/thing"))
            .and(header("user-agent", "weather-mcp/1.0"))
            .and(header("accept", "application/geo+json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let url = format!("{}/thing", server.uri());
        let value: Value = client()
            .fetch_json(&url, Some("application/geo+json"))
            .await
            .unwrap();
        assert_eq!(value, json!({"ok": true}));
    }

    #[tokio::test]
    async fn error_status_is_bad_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let url = format!("{}/thing", server.uri());
        let err = client().fetch_json::<Value>(&url, None).await.unwrap_err();
        match err {
            FetchError::BadStatus { status, url: failed } => {
                assert_eq!(status, reqwest::StatusCode::SERVICE_UNAVAILABLE);
                assert_eq!(failed, url);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let url = format!("{}/thing", server.uri());
        let err = client().fetch_json::<Value>(&url, None).await.unwrap_err();
        assert!(matches!(err, FetchError::Parse { .. }));
    }

    #[tokio::test]
    async fn unreachable_host_is_network_error() {
        let err = client()
            .fetch_json::<Value>("http://127.0.0.1:1/nothing", None)
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
    }
}
