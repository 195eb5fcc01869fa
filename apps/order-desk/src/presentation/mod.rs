//! Terminal Presentation
//!
//! Plain-text renderings of the desk's state for the CLI. Every function
//! returns a `String`; printing is left to the binary.

mod format;
mod views;

pub use format::{DIVIDER, format_price, format_quantity, format_time};
pub use views::{
    render_balances, render_event_terminal, render_health, render_history, render_notification,
    render_order_response, render_request_summary, render_server_logs,
};
