//! Dashboard Coordinator Use Case
//!
//! Drives one order attempt at a time through validation, submission and
//! status mapping, and fans the result into the event log and the execution
//! history.
//!
//! # Attempt lifecycle
//!
//! ```text
//! Idle ──submit──▶ Validating ──ok──▶ Submitting ──▶ Succeeded | Rejected | TransportFailed
//!   ▲                  │                                          │
//!   └──── invalid ─────┘◀─────────────────────────────────────────┘
//! ```
//!
//! Streams are written in a fixed order per attempt: request log, terminal
//! log, then (for remote verdicts only) the history record. An attempt
//! whose future is dropped while the service has not answered still gets a
//! terminal `error` entry.

use std::sync::Arc;
use std::time::Instant;

use parking_lot::Mutex;
use serde::Serialize;
use serde_json::{Map, Value, json};
use thiserror::Error;
use tokio::sync::broadcast;

use crate::application::dto::Notification;
use crate::application::ports::{
    AcceptedOrder, ORDER_PATH, OrderGatewayPort, Rejection, SubmissionOutcome, TransportFailure,
};
use crate::application::services::{
    EventLogger, ExecutionHistoryStore, HistoryError, HistoryView,
};
use crate::domain::execution::{ExecutionOrder, LogKind, OrderLog, map_status};
use crate::domain::order_entry::{OrderForm, OrderRequest, OrderRequestBuilder, ValidationError};
use crate::domain::shared::{ExchangeOrderId, Timestamp};
use crate::observability;

/// Where the coordinator is in the current attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPhase {
    /// Ready for a new attempt; the form is editable.
    #[default]
    Idle,
    /// Checking the form.
    Validating,
    /// Waiting on the order service.
    Submitting,
}

/// Why a submit or form edit was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Another attempt is still running.
    #[error("an order is already being submitted")]
    InFlight,

    /// The form failed validation; nothing was sent.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The service answered but its history record could not be stored.
    #[error("execution record not stored: {0}")]
    Unrecorded(#[from] HistoryError),
}

/// Terminal log message for an attempt abandoned before the service answered.
pub const CANCELLED_MESSAGE: &str = "submission cancelled";

impl SubmitError {
    /// Operator-facing message.
    #[must_use]
    pub fn notification(&self) -> Notification {
        Notification::invalid_input(self.to_string())
    }
}

/// Terminal state of an attempt that reached the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// Accepted; the record carries the mapped status.
    Succeeded(ExecutionOrder),
    /// Refused by the service; the record is `Failed`.
    Rejected {
        /// History record written for the attempt.
        record: ExecutionOrder,
        /// Reason given by the service.
        detail: Option<String>,
    },
    /// No usable answer; nothing was added to the history.
    TransportFailed {
        /// What went wrong.
        message: String,
    },
}

impl AttemptOutcome {
    /// The history record, if one was written.
    #[must_use]
    pub const fn record(&self) -> Option<&ExecutionOrder> {
        match self {
            Self::Succeeded(record) | Self::Rejected { record, .. } => Some(record),
            Self::TransportFailed { .. } => None,
        }
    }

    /// True when the order was accepted.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }
}

/// Everything one attempt produced.
#[derive(Debug, Clone)]
pub struct AttemptReport {
    /// The request that was sent.
    pub request: OrderRequest,
    /// How it ended.
    pub outcome: AttemptOutcome,
    /// Message for the operator.
    pub notification: Notification,
    /// The `request` entry.
    pub request_log: OrderLog,
    /// The `response` or `error` entry.
    pub terminal_log: OrderLog,
}

#[derive(Debug, Default)]
struct Session {
    form: OrderForm,
    phase: SubmissionPhase,
}

/// Returns the session to `Idle` however the attempt ends.
///
/// A request log still waiting for its terminal entry when the guard drops
/// is closed with a `{error: "submission cancelled"}` entry.
struct AttemptGuard<'a> {
    session: &'a Mutex<Session>,
    logger: &'a EventLogger,
    awaiting_terminal: bool,
}

impl AttemptGuard<'_> {
    fn advance(&self, phase: SubmissionPhase) {
        self.session.lock().phase = phase;
    }

    fn request_logged(&mut self) {
        self.awaiting_terminal = true;
    }

    fn terminal_logged(&mut self) {
        self.awaiting_terminal = false;
    }
}

impl Drop for AttemptGuard<'_> {
    fn drop(&mut self) {
        if self.awaiting_terminal {
            tracing::warn!("Order submission abandoned before the service answered");
            self.logger.record(LogKind::Error, json!({ "error": CANCELLED_MESSAGE }));
        }
        self.session.lock().phase = SubmissionPhase::Idle;
    }
}

/// Owns the session form, the submission phase and both record streams.
pub struct DashboardCoordinator<G>
where
    G: OrderGatewayPort,
{
    gateway: Arc<G>,
    builder: OrderRequestBuilder,
    session: Mutex<Session>,
    logger: EventLogger,
    history: ExecutionHistoryStore,
}

impl<G> DashboardCoordinator<G>
where
    G: OrderGatewayPort,
{
    /// Create a coordinator with a default form and empty streams.
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            builder: OrderRequestBuilder::new(),
            session: Mutex::new(Session::default()),
            logger: EventLogger::new(),
            history: ExecutionHistoryStore::new(),
        }
    }

    /// Start from `form` instead of the default form.
    #[must_use]
    pub fn with_form(self, form: OrderForm) -> Self {
        self.session.lock().form = form;
        self
    }

    // =========================================================================
    // Session state
    // =========================================================================

    /// Current form contents.
    #[must_use]
    pub fn form(&self) -> OrderForm {
        self.session.lock().form.clone()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> SubmissionPhase {
        self.session.lock().phase
    }

    /// Change the form. Refused while an attempt is running.
    pub fn edit_form(&self, edit: impl FnOnce(&mut OrderForm)) -> Result<(), SubmitError> {
        let mut session = self.session.lock();
        if session.phase != SubmissionPhase::Idle {
            return Err(SubmitError::InFlight);
        }
        edit(&mut session.form);
        Ok(())
    }

    // =========================================================================
    // Streams
    // =========================================================================

    /// Execution history, newest first.
    #[must_use]
    pub fn history(&self) -> Vec<ExecutionOrder> {
        self.history.snapshot()
    }

    /// Execution history in display form.
    #[must_use]
    pub fn history_view(&self) -> HistoryView {
        self.history.view()
    }

    /// Event log, newest first.
    #[must_use]
    pub fn logs(&self) -> Vec<OrderLog> {
        self.logger.snapshot()
    }

    /// Receive each history record as it is appended.
    #[must_use]
    pub fn subscribe_history(&self) -> broadcast::Receiver<ExecutionOrder> {
        self.history.subscribe()
    }

    /// Receive each event-log entry as it is appended.
    #[must_use]
    pub fn subscribe_logs(&self) -> broadcast::Receiver<OrderLog> {
        self.logger.subscribe()
    }

    // =========================================================================
    // Submission
    // =========================================================================

    /// Submit the current form.
    pub async fn submit(&self) -> Result<AttemptReport, SubmitError> {
        let (guard, form) = self.begin(None)?;
        self.run(guard, form).await
    }

    /// Replace the form with `form` and submit it.
    pub async fn submit_form(&self, form: OrderForm) -> Result<AttemptReport, SubmitError> {
        let (guard, form) = self.begin(Some(form))?;
        self.run(guard, form).await
    }

    fn begin(
        &self,
        form: Option<OrderForm>,
    ) -> Result<(AttemptGuard<'_>, OrderForm), SubmitError> {
        let mut session = self.session.lock();
        if session.phase != SubmissionPhase::Idle {
            tracing::warn!(phase = ?session.phase, "Submit refused: attempt in flight");
            return Err(SubmitError::InFlight);
        }
        if let Some(form) = form {
            session.form = form;
        }
        session.phase = SubmissionPhase::Validating;
        let form = session.form.clone();
        drop(session);

        Ok((
            AttemptGuard {
                session: &self.session,
                logger: &self.logger,
                awaiting_terminal: false,
            },
            form,
        ))
    }

    async fn run(
        &self,
        mut guard: AttemptGuard<'_>,
        form: OrderForm,
    ) -> Result<AttemptReport, SubmitError> {
        let request = match self.builder.build(&form) {
            Ok(request) => request,
            Err(e) => {
                tracing::info!(field = e.field(), error = %e, "Order form rejected");
                observability::record_validation_failure(e.field());
                return Err(e.into());
            }
        };

        guard.advance(SubmissionPhase::Submitting);

        let request_log = self.logger.record(
            LogKind::Request,
            json!({ "method": "POST", "endpoint": ORDER_PATH, "body": &request }),
        );
        guard.request_logged();

        tracing::info!(
            symbol = %request.symbol(),
            side = %request.side(),
            order_type = %request.order_type(),
            quantity = %request.quantity(),
            "Submitting order"
        );

        let started = Instant::now();
        let outcome = self.gateway.submit_order(&request).await;
        observability::record_attempt(
            outcome.label(),
            request.order_type().as_str(),
            started.elapsed().as_secs_f64(),
        );

        let settled = match outcome {
            SubmissionOutcome::Accepted(accepted) => self.on_accepted(&request, accepted),
            SubmissionOutcome::Rejected(rejection) => self.on_rejected(&request, rejection),
            SubmissionOutcome::TransportFailed(failure) => {
                Ok(self.on_transport_failure(failure))
            }
        };
        guard.terminal_logged();

        observability::update_stream_sizes(self.history.len(), self.logger.len());
        let (outcome, terminal_log, notification) = settled?;
        drop(guard);

        Ok(AttemptReport {
            request,
            outcome,
            notification,
            request_log,
            terminal_log,
        })
    }

    fn on_accepted(
        &self,
        request: &OrderRequest,
        accepted: AcceptedOrder,
    ) -> Result<(AttemptOutcome, OrderLog, Notification), HistoryError> {
        let terminal_log = self.logger.record(
            LogKind::Response,
            with_status(accepted.http_status, &accepted.body),
        );

        let at = Timestamp::now();
        let record = ExecutionOrder {
            id: self.history.next_id(at),
            order_id: accepted.order_id.clone().unwrap_or_else(ExchangeOrderId::unknown),
            symbol: accepted
                .symbol
                .clone()
                .unwrap_or_else(|| request.symbol().clone()),
            side: accepted.side.unwrap_or(request.side()),
            order_type: accepted.order_type.unwrap_or(request.order_type()),
            quantity: accepted
                .reported_quantity()
                .unwrap_or_else(|| request.quantity()),
            price: accepted.avg_price,
            status: map_status(accepted.status.as_deref()),
            timestamp: at,
        };
        self.store(&record)?;

        tracing::info!(
            order_id = %record.order_id,
            exchange_status = accepted.status.as_deref().unwrap_or("-"),
            status = %record.status,
            "Order accepted"
        );

        self.session.lock().form.clear_amounts();

        let notification = Notification::order_placed(&record);
        Ok((AttemptOutcome::Succeeded(record), terminal_log, notification))
    }

    fn on_rejected(
        &self,
        request: &OrderRequest,
        rejection: Rejection,
    ) -> Result<(AttemptOutcome, OrderLog, Notification), HistoryError> {
        let terminal_log = self.logger.record(
            LogKind::Error,
            with_status(rejection.http_status, &rejection.body),
        );

        let at = Timestamp::now();
        let record = ExecutionOrder::rejected(self.history.next_id(at), request, at);
        self.store(&record)?;

        tracing::warn!(
            http_status = rejection.http_status,
            detail = rejection.detail.as_deref().unwrap_or("-"),
            "Order rejected"
        );

        let notification = Notification::order_rejected(rejection.detail.as_deref());
        Ok((
            AttemptOutcome::Rejected {
                record,
                detail: rejection.detail,
            },
            terminal_log,
            notification,
        ))
    }

    fn on_transport_failure(
        &self,
        failure: TransportFailure,
    ) -> (AttemptOutcome, OrderLog, Notification) {
        let terminal_log = self
            .logger
            .record(LogKind::Error, json!({ "error": &failure.message }));

        tracing::error!(error = %failure.message, "Order request failed");

        let notification = Notification::request_failed(&failure.message);
        (
            AttemptOutcome::TransportFailed {
                message: failure.message,
            },
            terminal_log,
            notification,
        )
    }

    fn store(&self, record: &ExecutionOrder) -> Result<(), HistoryError> {
        self.history.record(record.clone()).inspect_err(|e| {
            tracing::error!(error = %e, "Execution record dropped");
        })?;
        observability::record_execution(record.status.as_str());
        Ok(())
    }
}

/// `{status, ...body}`; body keys win, a non-object body lands under `body`.
fn with_status(http_status: u16, body: &Value) -> Value {
    let mut payload = Map::new();
    payload.insert("status".to_string(), Value::from(http_status));
    match body {
        Value::Object(fields) => {
            payload.extend(fields.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        Value::Null => {}
        other => {
            payload.insert("body".to_string(), other.clone());
        }
    }
    Value::Object(payload)
}
