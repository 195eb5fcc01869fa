//! E2E Tests: coordinator → HTTP gateway → fake order service.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;
use std::time::Duration;

use rust_decimal_macros::dec;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use order_desk::application::use_cases::{AttemptOutcome, DashboardCoordinator};
use order_desk::domain::execution::{LogKind, UiStatus};
use order_desk::domain::order_entry::{OrderForm, OrderSide, OrderType};
use order_desk::infrastructure::gateway::{GatewayConfig, HttpOrderGateway};
use order_desk::presentation;

async fn desk(server: &MockServer) -> DashboardCoordinator<HttpOrderGateway> {
    let config = GatewayConfig::new(server.uri()).with_timeout(Duration::from_secs(5));
    DashboardCoordinator::new(Arc::new(HttpOrderGateway::new(&config).unwrap()))
}

#[tokio::test]
async fn filled_market_order_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/order"))
        .and(body_json(json!({
            "symbol": "BTCUSDT",
            "side": "BUY",
            "order_type": "MARKET",
            "quantity": 0.5,
            "price": null,
            "stop_price": null,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "order": {
                "orderId": 4_023_918,
                "symbol": "BTCUSDT",
                "status": "FILLED",
                "side": "BUY",
                "type": "MARKET",
                "origQty": "0.500",
                "executedQty": "0.500",
                "avgPrice": "65000.00",
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let desk = desk(&server).await;
    let report = desk
        .submit_form(
            OrderForm::new("btcusdt", OrderSide::Buy, OrderType::Market).with_quantity("0.5"),
        )
        .await
        .unwrap();

    let AttemptOutcome::Succeeded(order) = &report.outcome else {
        panic!("expected success, got {:?}", report.outcome);
    };
    assert_eq!(order.status, UiStatus::Filled);
    assert_eq!(order.quantity, dec!(0.5));
    assert_eq!(order.price, Some(dec!(65000)));

    assert_eq!(report.terminal_log.kind, LogKind::Response);
    assert_eq!(report.terminal_log.payload["status"], 200);
    assert_eq!(report.terminal_log.payload["order"]["status"], "FILLED");

    let history = presentation::render_history(&desk.history_view());
    assert!(history.contains("$65,000.00"));
    assert!(history.contains("0.500"));
}

#[tokio::test]
async fn rejected_limit_order_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/order"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"detail": "insufficient balance"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let desk = desk(&server).await;
    let report = desk
        .submit_form(
            OrderForm::new("ETHUSDT", OrderSide::Sell, OrderType::Limit)
                .with_quantity("2")
                .with_price("3100"),
        )
        .await
        .unwrap();

    assert_eq!(report.notification.title, "Order failed — insufficient balance");

    let history = desk.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].status, UiStatus::Failed);
    assert!(history[0].order_id.is_unknown());

    let logs = desk.logs();
    assert_eq!(logs[0].kind, LogKind::Error);
    assert_eq!(
        logs[0].payload,
        json!({"status": 400, "detail": "insufficient balance"})
    );
}

#[tokio::test]
async fn unreachable_service_only_touches_the_event_log() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let config = GatewayConfig::new(uri).with_timeout(Duration::from_secs(2));
    let desk = DashboardCoordinator::new(Arc::new(HttpOrderGateway::new(&config).unwrap()));

    let report = desk
        .submit_form(
            OrderForm::new("BTCUSDT", OrderSide::Buy, OrderType::Market).with_quantity("1"),
        )
        .await
        .unwrap();

    assert!(matches!(report.outcome, AttemptOutcome::TransportFailed { .. }));
    assert!(desk.history().is_empty());
    assert_eq!(desk.logs().len(), 2);
    assert!(report.terminal_log.payload["error"].is_string());
}
