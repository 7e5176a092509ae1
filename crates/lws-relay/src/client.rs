//! HTTP client for the form relay

use lws_core::prelude::*;
use lws_core::ContactPayload;
use reqwest::header::ACCEPT;
use url::Url;

use crate::config::RelayConfig;
use crate::response::RelayResponse;
use crate::LocalFormRelay;

/// Posts contact payloads to the configured relay endpoint.
///
/// One request per call: no retries, no explicit timeout (the transport
/// default applies).
#[derive(Debug, Clone)]
pub struct RelayClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl RelayClient {
    /// Build a client for the endpoint in `config`.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigInvalid` if the endpoint is not an absolute
    /// http(s) URL.
    pub fn new(config: &RelayConfig) -> Result<Self> {
        let endpoint = config.endpoint_url()?;
        Ok(Self {
            client: reqwest::Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn post(&self, payload: &ContactPayload) -> Result<RelayResponse> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        debug!("Relay answered {} ({} bytes)", status, body.len());
        RelayResponse::parse(&body)
    }
}

impl LocalFormRelay for RelayClient {
    async fn submit(&self, payload: &ContactPayload) -> Result<RelayResponse> {
        info!("Submitting contact form to {}", self.endpoint);
        self.post(payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn payload(access_key: Option<&str>) -> ContactPayload {
        ContactPayload {
            access_key: access_key.map(str::to_string),
            name: "Asha Rao".into(),
            email: "asha@example.com".into(),
            subject: "Quote".into(),
            message: "Hello".into(),
        }
    }

    fn client_for(server: &MockServer) -> RelayClient {
        RelayClient::new(&RelayConfig {
            endpoint: format!("{}/submit", server.uri()),
            access_key: String::new(),
        })
        .unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_endpoint() {
        let config = RelayConfig {
            endpoint: "not a url".into(),
            access_key: String::new(),
        };
        assert!(matches!(
            RelayClient::new(&config),
            Err(Error::ConfigInvalid { .. })
        ));
    }

    #[tokio::test]
    async fn test_submit_posts_json_with_headers() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/submit"))
            .and(header("content-type", "application/json"))
            .and(header("accept", "application/json"))
            .and(body_json(serde_json::json!({
                "access_key": "key-1",
                "name": "Asha Rao",
                "email": "asha@example.com",
                "subject": "Quote",
                "message": "Hello"
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"success": true, "message": "Email sent"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let resp = client_for(&server)
            .submit(&payload(Some("key-1")))
            .await
            .unwrap();
        assert!(resp.success);
    }

    #[tokio::test]
    async fn test_submit_without_key_omits_field() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(body_json(serde_json::json!({
                "name": "Asha Rao",
                "email": "asha@example.com",
                "subject": "Quote",
                "message": "Hello"
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": true})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let resp = client_for(&server).submit(&payload(None)).await.unwrap();
        assert!(resp.success);
    }

    #[tokio::test]
    async fn test_rejection_with_error_status_is_still_parsed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(
                serde_json::json!({"success": false, "message": "Invalid access key"}),
            ))
            .expect(1)
            .mount(&server)
            .await;

        let resp = client_for(&server).submit(&payload(None)).await.unwrap();
        assert!(!resp.success);
        assert_eq!(resp.reason().as_deref(), Some("Invalid access key"));
    }

    #[tokio::test]
    async fn test_non_json_body_is_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .submit(&payload(None))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_relay_is_transport_error() {
        // Nothing listens on port 1
        let client = RelayClient::new(&RelayConfig {
            endpoint: "http://127.0.0.1:1/submit".into(),
            access_key: String::new(),
        })
        .unwrap();

        let err = client.submit(&payload(None)).await.unwrap_err();
        assert!(matches!(err, Error::Transport { .. }));
    }
}
