//! Scripted in-process gateway for testing.
//!
//! Plays back queued submission outcomes and records every request it sees.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use serde_json::json;
use tokio::sync::Notify;

use crate::application::ports::{
    AcceptedOrder, AssetBalance, GatewayError, HealthStatus, OrderGatewayPort, Rejection,
    SubmissionOutcome, TransportFailure,
};
use crate::domain::order_entry::OrderRequest;
use crate::domain::shared::ExchangeOrderId;

/// Gateway that answers from a script.
#[derive(Debug, Default)]
pub struct ScriptedGateway {
    outcomes: Mutex<VecDeque<SubmissionOutcome>>,
    requests: Mutex<Vec<OrderRequest>>,
    balances: Mutex<Vec<AssetBalance>>,
    hold: Mutex<Option<Arc<Notify>>>,
}

impl ScriptedGateway {
    /// Create a gateway with an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the outcome for the next submission.
    #[must_use]
    pub fn then(self, outcome: SubmissionOutcome) -> Self {
        self.push(outcome);
        self
    }

    /// Queue an outcome on a shared gateway.
    pub fn push(&self, outcome: SubmissionOutcome) {
        self.outcomes.lock().push_back(outcome);
    }

    /// Balances returned by `fetch_balances`.
    #[must_use]
    pub fn with_balances(self, balances: Vec<AssetBalance>) -> Self {
        *self.balances.lock() = balances;
        self
    }

    /// Park each submission until `release` is notified.
    #[must_use]
    pub fn hold_until(self, release: Arc<Notify>) -> Self {
        *self.hold.lock() = Some(release);
        self
    }

    /// Requests received so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<OrderRequest> {
        self.requests.lock().clone()
    }

    /// Number of submissions received.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.requests.lock().len()
    }

    // =========================================================================
    // Outcome builders
    // =========================================================================

    /// An acceptance shaped like the order service's response body.
    #[must_use]
    pub fn accepted(
        order_id: &str,
        status: &str,
        executed_qty: Option<Decimal>,
        avg_price: Option<Decimal>,
    ) -> SubmissionOutcome {
        let body = json!({
            "success": true,
            "order": {
                "orderId": order_id,
                "status": status,
                "executedQty": executed_qty.map(|q| q.to_string()),
                "avgPrice": avg_price.map(|p| p.to_string()),
            }
        });

        SubmissionOutcome::Accepted(AcceptedOrder {
            http_status: 200,
            order_id: Some(ExchangeOrderId::new(order_id)),
            symbol: None,
            side: None,
            order_type: None,
            executed_qty,
            orig_qty: None,
            avg_price,
            status: Some(status.to_string()),
            body,
        })
    }

    /// A rejection with an optional `detail`.
    #[must_use]
    pub fn rejected(http_status: u16, detail: Option<&str>) -> SubmissionOutcome {
        let body = detail.map_or_else(|| json!({}), |d| json!({ "detail": d }));
        SubmissionOutcome::Rejected(Rejection {
            http_status,
            detail: detail.map(str::to_string),
            body,
        })
    }

    /// A call that never completed.
    #[must_use]
    pub fn transport_failure(message: &str) -> SubmissionOutcome {
        SubmissionOutcome::TransportFailed(TransportFailure::new(message))
    }
}

#[async_trait]
impl OrderGatewayPort for ScriptedGateway {
    async fn submit_order(&self, request: &OrderRequest) -> SubmissionOutcome {
        self.requests.lock().push(request.clone());

        let hold = self.hold.lock().clone();
        if let Some(release) = hold {
            release.notified().await;
        }

        self.outcomes
            .lock()
            .pop_front()
            .unwrap_or_else(|| Self::transport_failure("no scripted outcome"))
    }

    async fn fetch_balances(&self) -> Result<Vec<AssetBalance>, GatewayError> {
        Ok(self.balances.lock().clone())
    }

    async fn health(&self) -> Result<HealthStatus, GatewayError> {
        Ok(HealthStatus {
            message: "scripted gateway".to_string(),
            status: "running".to_string(),
        })
    }

    async fn server_logs(&self, _lines: u32) -> Result<Vec<String>, GatewayError> {
        Ok(Vec::new())
    }
}
