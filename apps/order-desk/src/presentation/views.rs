//! Text views of requests, responses and the two session streams.

use std::fmt::Write as _;

use crate::application::dto::Notification;
use crate::application::ports::{AssetBalance, HealthStatus};
use crate::application::services::{EMPTY_HISTORY_MESSAGE, HistoryView};
use crate::domain::execution::{ExecutionOrder, OrderLog};
use crate::domain::order_entry::OrderRequest;

use super::format::{DIVIDER, format_price, format_quantity, format_time};

/// Shown by the event terminal before the first attempt.
const WAITING_MESSAGE: &str = "> Waiting for orders...";

/// Shown when every balance is zero.
const NO_BALANCES_MESSAGE: &str = "No non-zero balances found.";

fn titled(title: &str) -> String {
    format!("{DIVIDER}\n  {title}\n{DIVIDER}\n")
}

// =============================================================================
// Order Entry
// =============================================================================

/// Summary of the request about to be sent.
#[must_use]
pub fn render_request_summary(request: &OrderRequest) -> String {
    let mut out = titled("Order Request Summary");
    let _ = writeln!(out, "  Symbol     : {}", request.symbol());
    let _ = writeln!(out, "  Side       : {}", request.side());
    let _ = writeln!(out, "  Type       : {}", request.order_type());
    let _ = writeln!(out, "  Quantity   : {}", request.quantity().normalize());
    if let Some(price) = request.price() {
        let _ = writeln!(out, "  Price      : {}", price.normalize());
    }
    if let Some(stop_price) = request.stop_price() {
        let _ = writeln!(out, "  Stop Price : {}", stop_price.normalize());
    }
    out.push_str(DIVIDER);
    out
}

/// The accepted order as recorded in the history.
#[must_use]
pub fn render_order_response(order: &ExecutionOrder) -> String {
    let mut out = titled("Order Response");
    let _ = writeln!(out, "  Order ID      : {}", order.order_id);
    let _ = writeln!(out, "  Symbol        : {}", order.symbol);
    let _ = writeln!(out, "  Status        : {}", order.status);
    let _ = writeln!(out, "  Side          : {}", order.side);
    let _ = writeln!(out, "  Type          : {}", order.order_type);
    let _ = writeln!(out, "  Quantity      : {}", order.quantity.normalize());
    let _ = writeln!(
        out,
        "  Avg Price     : {}",
        order
            .price
            .map_or_else(|| "N/A".to_string(), |p| p.normalize().to_string())
    );
    out.push_str(DIVIDER);
    out
}

/// One-line (or two-line) operator message.
#[must_use]
pub fn render_notification(notification: &Notification) -> String {
    let marker = if notification.is_error() { "✗" } else { "✓" };
    format!("{marker} {notification}")
}

// =============================================================================
// Session Streams
// =============================================================================

/// Execution history table, newest first.
#[must_use]
pub fn render_history(view: &HistoryView) -> String {
    let orders = match view {
        HistoryView::Empty => {
            return format!("{}  {EMPTY_HISTORY_MESSAGE}", titled("Execution History"));
        }
        HistoryView::Orders(orders) => orders,
    };

    let mut out = titled(&format!("Execution History ({} order(s))", orders.len()));
    let _ = writeln!(
        out,
        "  {:<12} {:<10} {:<4} {:<6} {:>10} {:>14}  {:<7} {}",
        "Order ID", "Symbol", "Side", "Type", "Qty", "Price", "Status", "Time"
    );
    for order in orders {
        let _ = writeln!(
            out,
            "  {:<12} {:<10} {:<4} {:<6} {:>10} {:>14}  {:<7} {}",
            order.order_id.as_str(),
            order.symbol.as_str(),
            order.side.as_str(),
            order.order_type.as_str(),
            format_quantity(order.quantity),
            format_price(order.price),
            order.status.as_str(),
            format_time(&order.timestamp),
        );
    }
    out.truncate(out.trim_end().len());
    out
}

/// Event terminal: one header line per entry with its payload indented below.
#[must_use]
pub fn render_event_terminal(logs: &[OrderLog]) -> String {
    let mut out = titled(&format!("Live Terminal ({} events)", logs.len()));
    if logs.is_empty() {
        out.push_str("  ");
        out.push_str(WAITING_MESSAGE);
        return out;
    }

    for log in logs {
        let _ = writeln!(
            out,
            "  [{}] {}",
            format_time(&log.timestamp),
            log.kind.as_str().to_ascii_uppercase()
        );
        let payload =
            serde_json::to_string_pretty(&log.payload).unwrap_or_else(|_| log.payload.to_string());
        for line in payload.lines() {
            let _ = writeln!(out, "      {line}");
        }
    }
    out.truncate(out.trim_end().len());
    out
}

// =============================================================================
// Account
// =============================================================================

/// Non-zero balances, one asset per line.
#[must_use]
pub fn render_balances(balances: &[AssetBalance]) -> String {
    let mut out = titled("Account Balance");
    let non_zero: Vec<&AssetBalance> = balances.iter().filter(|b| !b.is_zero()).collect();

    if non_zero.is_empty() {
        out.push_str("  ");
        out.push_str(NO_BALANCES_MESSAGE);
        out.push('\n');
    } else {
        for b in non_zero {
            let _ = writeln!(
                out,
                "  {:<8}: {:>18}  (available: {})",
                b.asset,
                b.balance.normalize(),
                b.available_balance.normalize()
            );
        }
    }
    out.push_str(DIVIDER);
    out
}

/// Service health line.
#[must_use]
pub fn render_health(base_url: &str, health: &HealthStatus) -> String {
    format!("{base_url}: {} ({})", health.status, health.message)
}

/// Server log tail, oldest first.
#[must_use]
pub fn render_server_logs(lines: &[String]) -> String {
    if lines.is_empty() {
        return "(no server log lines)".to_string();
    }
    lines.join("\n")
}
