//! Submission Flow Integration Tests
//!
//! Drives the dashboard coordinator against a scripted gateway and checks
//! that the execution history and the event log stay consistent with every
//! attempt.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use rust_decimal_macros::dec;
use serde_json::json;
use tokio::sync::Notify;

use order_desk::application::use_cases::{
    AttemptOutcome, CANCELLED_MESSAGE, DashboardCoordinator, SubmissionPhase, SubmitError,
};
use order_desk::domain::execution::{LogKind, UiStatus};
use order_desk::domain::order_entry::{OrderForm, OrderSide, OrderType, ValidationError};
use order_desk::infrastructure::gateway::ScriptedGateway;

// =============================================================================
// Helpers
// =============================================================================

fn market_buy(quantity: &str) -> OrderForm {
    OrderForm::new("BTCUSDT", OrderSide::Buy, OrderType::Market).with_quantity(quantity)
}

fn coordinator(gateway: ScriptedGateway) -> DashboardCoordinator<ScriptedGateway> {
    DashboardCoordinator::new(Arc::new(gateway))
}

// =============================================================================
// Scenarios
// =============================================================================

#[tokio::test]
async fn market_buy_is_filled() {
    let desk = coordinator(ScriptedGateway::new().then(ScriptedGateway::accepted(
        "4023918",
        "FILLED",
        Some(dec!(0.5)),
        Some(dec!(65000.00)),
    )));

    let report = desk.submit_form(market_buy("0.5")).await.unwrap();

    assert_eq!(
        serde_json::to_value(&report.request).unwrap(),
        json!({
            "symbol": "BTCUSDT",
            "side": "BUY",
            "order_type": "MARKET",
            "quantity": 0.5,
            "price": null,
            "stop_price": null,
        })
    );

    let history = desk.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].status, UiStatus::Filled);
    assert_eq!(history[0].quantity, dec!(0.5));
    assert_eq!(history[0].price, Some(dec!(65000)));
    assert_eq!(history[0].order_id.as_str(), "4023918");

    assert_eq!(report.notification.title, "Order #4023918 placed — Filled");
}

#[tokio::test]
async fn limit_without_price_never_leaves_the_desk() {
    let gateway = Arc::new(ScriptedGateway::new());
    let desk = DashboardCoordinator::new(Arc::clone(&gateway));

    let err = desk
        .submit_form(
            OrderForm::new("BTCUSDT", OrderSide::Buy, OrderType::Limit)
                .with_quantity("0.5")
                .with_price("   "),
        )
        .await
        .unwrap_err();

    assert_eq!(err, SubmitError::Invalid(ValidationError::PriceRequired));
    assert_eq!(err.notification().title, "price required");
    assert_eq!(gateway.calls(), 0);
    assert!(desk.history().is_empty());
    assert!(desk.logs().is_empty());
    assert_eq!(desk.phase(), SubmissionPhase::Idle);
}

#[tokio::test]
async fn stop_without_any_price_reports_price_first() {
    let desk = coordinator(ScriptedGateway::new());

    let err = desk
        .submit_form(OrderForm::new("BTCUSDT", OrderSide::Sell, OrderType::Stop).with_quantity("1"))
        .await
        .unwrap_err();

    assert_eq!(err, SubmitError::Invalid(ValidationError::PriceRequired));
}

#[tokio::test]
async fn rejection_is_recorded_as_failed() {
    let desk = coordinator(
        ScriptedGateway::new().then(ScriptedGateway::rejected(400, Some("insufficient balance"))),
    );

    let report = desk.submit_form(market_buy("0.5")).await.unwrap();

    let history = desk.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].status, UiStatus::Failed);
    assert!(history[0].order_id.is_unknown());
    assert_eq!(history[0].quantity, dec!(0.5));
    assert_eq!(history[0].price, None);

    let logs = desk.logs();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].kind, LogKind::Error);
    assert_eq!(logs[0].payload["status"], 400);
    assert_eq!(logs[0].payload["detail"], "insufficient balance");

    assert_eq!(report.notification.title, "Order failed — insufficient balance");
    assert!(matches!(
        report.outcome,
        AttemptOutcome::Rejected { detail: Some(ref d), .. } if d == "insufficient balance"
    ));
}

#[tokio::test]
async fn transport_failure_leaves_history_untouched() {
    let desk = coordinator(
        ScriptedGateway::new().then(ScriptedGateway::transport_failure("connection refused")),
    );

    let report = desk.submit_form(market_buy("0.5")).await.unwrap();

    assert!(desk.history().is_empty());

    let logs = desk.logs();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs.iter().filter(|l| l.kind == LogKind::Error).count(), 1);
    assert_eq!(logs[0].payload, json!({ "error": "connection refused" }));

    assert_eq!(report.outcome.record(), None);
    assert_eq!(report.notification.title, "Request failed — connection refused");
    assert_eq!(desk.phase(), SubmissionPhase::Idle);
}

// =============================================================================
// Stream invariants
// =============================================================================

#[tokio::test]
async fn every_remote_verdict_adds_one_history_entry() {
    let gateway = ScriptedGateway::new()
        .then(ScriptedGateway::accepted("1", "NEW", None, None))
        .then(ScriptedGateway::rejected(400, None))
        .then(ScriptedGateway::accepted("3", "PARTIALLY_FILLED", Some(dec!(0.1)), None))
        .then(ScriptedGateway::transport_failure("timeout"))
        .then(ScriptedGateway::accepted("5", "FILLED", Some(dec!(0.4)), Some(dec!(64000))));
    let desk = coordinator(gateway);

    for quantity in ["0.1", "0.2", "0.3", "0.4", "0.5"] {
        desk.submit_form(market_buy(quantity)).await.unwrap();
    }

    let history = desk.history();
    assert_eq!(history.len(), 4);

    // Newest first.
    assert_eq!(history[0].order_id.as_str(), "5");
    assert_eq!(history[1].order_id.as_str(), "3");
    assert!(history[2].order_id.is_unknown());
    assert_eq!(history[3].order_id.as_str(), "1");

    assert_eq!(history[0].status, UiStatus::Filled);
    assert_eq!(history[1].status, UiStatus::Filled);
    assert_eq!(history[2].status, UiStatus::Failed);
    assert_eq!(history[3].status, UiStatus::Pending);

    let ids: HashSet<_> = history.iter().map(|o| o.id.clone()).collect();
    assert_eq!(ids.len(), history.len());
}

#[tokio::test]
async fn each_attempt_logs_request_then_terminal() {
    let desk = coordinator(
        ScriptedGateway::new()
            .then(ScriptedGateway::accepted("1", "NEW", None, None))
            .then(ScriptedGateway::transport_failure("reset")),
    );

    let first = desk.submit_form(market_buy("1")).await.unwrap();
    let second = desk.submit_form(market_buy("2")).await.unwrap();

    let kinds: Vec<LogKind> = desk.logs().iter().map(|l| l.kind).collect();
    assert_eq!(
        kinds,
        vec![LogKind::Error, LogKind::Request, LogKind::Response, LogKind::Request]
    );

    for report in [&first, &second] {
        assert_eq!(report.request_log.kind, LogKind::Request);
        assert!(report.terminal_log.kind.is_terminal());
        assert!(report.request_log.timestamp <= report.terminal_log.timestamp);
        assert_eq!(report.request_log.payload["method"], "POST");
        assert_eq!(report.request_log.payload["endpoint"], "/order");
    }
}

#[tokio::test]
async fn subscribers_see_appends_in_write_order() {
    let desk = coordinator(ScriptedGateway::new().then(ScriptedGateway::accepted(
        "11",
        "FILLED",
        Some(dec!(1)),
        None,
    )));
    let mut logs = desk.subscribe_logs();
    let mut history = desk.subscribe_history();

    desk.submit_form(market_buy("1")).await.unwrap();

    assert_eq!(logs.recv().await.unwrap().kind, LogKind::Request);
    assert_eq!(logs.recv().await.unwrap().kind, LogKind::Response);
    assert_eq!(history.recv().await.unwrap().order_id.as_str(), "11");
}

// =============================================================================
// In-flight guard
// =============================================================================

#[tokio::test]
async fn second_submit_is_refused_while_first_is_pending() {
    let release = Arc::new(Notify::new());
    let gateway = Arc::new(
        ScriptedGateway::new()
            .hold_until(Arc::clone(&release))
            .then(ScriptedGateway::accepted("1", "NEW", None, None)),
    );
    let desk = Arc::new(DashboardCoordinator::new(Arc::clone(&gateway)));

    let first = {
        let desk = Arc::clone(&desk);
        tokio::spawn(async move { desk.submit_form(market_buy("1")).await })
    };

    while gateway.calls() == 0 {
        tokio::task::yield_now().await;
    }
    assert_eq!(desk.phase(), SubmissionPhase::Submitting);

    let second = desk.submit_form(market_buy("2")).await;
    assert_eq!(second.unwrap_err(), SubmitError::InFlight);
    assert_eq!(
        desk.edit_form(|form| form.quantity = "3".to_string()),
        Err(SubmitError::InFlight)
    );

    release.notify_one();
    let report = first.await.unwrap().unwrap();

    assert!(report.outcome.is_success());
    assert_eq!(gateway.calls(), 1);
    assert_eq!(desk.history().len(), 1);
    assert_eq!(desk.phase(), SubmissionPhase::Idle);
}

#[tokio::test]
async fn submit_abandoned_by_a_timeout_still_gets_a_terminal_log() {
    let release = Arc::new(Notify::new());
    let gateway = Arc::new(
        ScriptedGateway::new()
            .hold_until(Arc::clone(&release))
            .then(ScriptedGateway::accepted("1", "FILLED", Some(dec!(1)), None)),
    );
    let desk = DashboardCoordinator::new(Arc::clone(&gateway));

    let attempt =
        tokio::time::timeout(Duration::from_millis(50), desk.submit_form(market_buy("1"))).await;

    assert!(attempt.is_err());
    assert_eq!(gateway.calls(), 1);
    assert_eq!(desk.phase(), SubmissionPhase::Idle);
    assert!(desk.history().is_empty());

    let logs = desk.logs();
    let kinds: Vec<LogKind> = logs.iter().map(|l| l.kind).collect();
    assert_eq!(kinds, vec![LogKind::Error, LogKind::Request]);
    assert_eq!(logs[0].payload, json!({ "error": CANCELLED_MESSAGE }));
}

#[tokio::test]
async fn form_amounts_survive_a_rejection() {
    let desk = coordinator(ScriptedGateway::new().then(ScriptedGateway::rejected(400, None)));

    desk.submit_form(
        OrderForm::new("ETHUSDT", OrderSide::Sell, OrderType::Limit)
            .with_quantity("2")
            .with_price("3100"),
    )
    .await
    .unwrap();

    let form = desk.form();
    assert_eq!(form.quantity, "2");
    assert_eq!(form.price, "3100");
}
