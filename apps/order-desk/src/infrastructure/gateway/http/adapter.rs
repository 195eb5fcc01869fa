//! HTTP order gateway implementing OrderGatewayPort.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::application::ports::{
    AssetBalance, BALANCE_PATH, GatewayError, HEALTH_PATH, HealthStatus, LOGS_PATH, ORDER_PATH,
    OrderGatewayPort, SubmissionOutcome,
};
use crate::domain::order_entry::OrderRequest;

use super::api_types::{BalanceResponse, ErrorResponse, LogsResponse, OrderSubmissionResponse};
use super::config::GatewayConfig;
use super::error::HttpGatewayError;
use super::http_client::{JsonResponse, OrderServiceClient};

/// Order gateway over the service's REST API.
#[derive(Debug, Clone)]
pub struct HttpOrderGateway {
    client: OrderServiceClient,
}

impl HttpOrderGateway {
    /// Create a new HTTP order gateway.
    pub fn new(config: &GatewayConfig) -> Result<Self, HttpGatewayError> {
        let client = OrderServiceClient::new(config)?;
        tracing::debug!(base_url = %client.base_url(), "Order gateway configured");
        Ok(Self { client })
    }

    /// Service root.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// GET `path` and decode a success body as `T`.
    async fn read<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpGatewayError> {
        let JsonResponse { status, body } = self.client.get(path).await?;

        if !status.is_success() {
            let detail = serde_json::from_value::<ErrorResponse>(body)
                .ok()
                .and_then(|e| e.detail_text());
            return Err(HttpGatewayError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        serde_json::from_value(body).map_err(|e| HttpGatewayError::JsonParse(e.to_string()))
    }
}

#[async_trait]
impl OrderGatewayPort for HttpOrderGateway {
    async fn submit_order(&self, request: &OrderRequest) -> SubmissionOutcome {
        let response = match self.client.post(ORDER_PATH, request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(
                    symbol = %request.symbol(),
                    error = %e,
                    "Order request did not complete"
                );
                return SubmissionOutcome::TransportFailed(e.into());
            }
        };

        let http_status = response.status.as_u16();

        if response.status.is_success() {
            let parsed = match serde_json::from_value::<OrderSubmissionResponse>(
                response.body.clone(),
            ) {
                Ok(parsed) => parsed,
                Err(e) => {
                    tracing::warn!(error = %e, "Unexpected order response shape");
                    OrderSubmissionResponse::default()
                }
            };

            if parsed.success == Some(false) {
                tracing::warn!(http_status, "Order service reported success=false");
            }

            let accepted = parsed
                .order
                .unwrap_or_default()
                .into_accepted(http_status, response.body);

            tracing::debug!(
                http_status,
                order_id = ?accepted.order_id,
                status = ?accepted.status,
                "Order response received"
            );

            return SubmissionOutcome::Accepted(accepted);
        }

        let rejection = serde_json::from_value::<ErrorResponse>(response.body.clone())
            .unwrap_or_default()
            .into_rejection(http_status, response.body);

        tracing::debug!(
            http_status,
            detail = rejection.detail.as_deref().unwrap_or("-"),
            "Order refused by service"
        );

        SubmissionOutcome::Rejected(rejection)
    }

    async fn fetch_balances(&self) -> Result<Vec<AssetBalance>, GatewayError> {
        let response: BalanceResponse = self.read(BALANCE_PATH).await?;
        tracing::info!(assets = response.balances.len(), "Balances fetched");
        Ok(response.balances.into_iter().map(AssetBalance::from).collect())
    }

    async fn health(&self) -> Result<HealthStatus, GatewayError> {
        Ok(self.read(HEALTH_PATH).await?)
    }

    async fn server_logs(&self, lines: u32) -> Result<Vec<String>, GatewayError> {
        let response: LogsResponse = self.read(&format!("{LOGS_PATH}?lines={lines}")).await?;
        Ok(response.logs)
    }
}
