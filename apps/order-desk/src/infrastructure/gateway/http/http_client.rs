//! HTTP client wrapper for the order service.
//!
//! Each call is a single request: order submission must never be repeated
//! behind the operator's back, so there is no retry layer here.

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde_json::Value;

use super::config::GatewayConfig;
use super::error::HttpGatewayError;

/// A response whose body parsed as JSON.
#[derive(Debug, Clone)]
pub struct JsonResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// Parsed body.
    pub body: Value,
}

/// HTTP client for the order service.
#[derive(Debug, Clone)]
pub struct OrderServiceClient {
    client: Client,
    config: GatewayConfig,
}

impl OrderServiceClient {
    /// Create a new HTTP client from config.
    pub fn new(config: &GatewayConfig) -> Result<Self, HttpGatewayError> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| HttpGatewayError::Network(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Service root.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Make a GET request.
    pub async fn get(&self, path: &str) -> Result<JsonResponse, HttpGatewayError> {
        self.send(self.client.get(self.config.url(path))).await
    }

    /// Make a POST request with a JSON body.
    pub async fn post<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<JsonResponse, HttpGatewayError> {
        self.send(self.client.post(self.config.url(path)).json(body))
            .await
    }

    async fn send(&self, request: RequestBuilder) -> Result<JsonResponse, HttpGatewayError> {
        let response = request
            .send()
            .await
            .map_err(|e| HttpGatewayError::from_reqwest(&e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| HttpGatewayError::from_reqwest(&e))?;

        let body = serde_json::from_str(&text).map_err(|e| {
            tracing::debug!(
                status = status.as_u16(),
                body_len = text.len(),
                "Response body is not JSON"
            );
            HttpGatewayError::JsonParse(e.to_string())
        })?;

        Ok(JsonResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_base_url_is_refused() {
        let err = OrderServiceClient::new(&GatewayConfig::new("not a url")).unwrap_err();
        assert!(matches!(err, HttpGatewayError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn client_keeps_base_url() {
        let client = OrderServiceClient::new(&GatewayConfig::new("http://127.0.0.1:8000/")).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:8000");
    }
}
