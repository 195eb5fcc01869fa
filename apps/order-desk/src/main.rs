//! Order Desk Binary
//!
//! Places one order per invocation and prints the request summary, the
//! outcome, the execution history and the event terminal.
//!
//! # Usage
//!
//! ```bash
//! order-desk order --symbol BTCUSDT --side BUY --type MARKET --quantity 0.5
//! order-desk order --symbol ETHUSDT --side SELL --type STOP --quantity 2 --price 3100 --stop-price 3050
//! order-desk balance
//! order-desk health
//! order-desk logs --lines 50
//! order-desk shell
//! ```
//!
//! `shell` keeps one session open: each `order ...` line is another attempt
//! against the same history and event terminal.
//!
//! # Environment Variables
//!
//! - `ORDER_DESK_API_URL`: order service root (default: http://localhost:8000)
//! - `ORDER_DESK_HTTP_TIMEOUT_SECS`: request timeout (default: 30)
//! - `ORDER_DESK_METRICS_PORT`: Prometheus listener port (default: disabled)
//! - `ORDER_DESK_LOG_FILE`: mirror logs into this file
//! - `RUST_LOG`: log level (default: order_desk=info)

use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

use order_desk::application::ports::OrderGatewayPort;
use order_desk::application::use_cases::{AttemptOutcome, DashboardCoordinator, SubmitError};
use order_desk::domain::order_entry::{OrderForm, OrderSide, OrderType};
use order_desk::infrastructure::config::DeskConfig;
use order_desk::infrastructure::gateway::HttpOrderGateway;
use order_desk::infrastructure::telemetry::{self, TelemetryConfig};
use order_desk::observability::{MetricsConfig, init_metrics};
use order_desk::presentation;

#[derive(Parser, Debug)]
#[command(name = "order-desk")]
#[command(version)]
#[command(about = "Place orders on an exchange-backed order service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Order service root; overrides ORDER_DESK_API_URL
    #[arg(long, global = true)]
    api_url: Option<String>,
}

#[derive(Args, Debug)]
struct OrderArgs {
    /// Trading pair, e.g. BTCUSDT
    #[arg(long, default_value = "BTCUSDT")]
    symbol: String,
    /// BUY or SELL
    #[arg(long, default_value = "BUY")]
    side: OrderSide,
    /// MARKET, LIMIT or STOP
    #[arg(long = "type", short = 't', default_value = "MARKET")]
    order_type: OrderType,
    /// Order quantity, e.g. 0.001
    #[arg(long)]
    quantity: String,
    /// Limit price; required for LIMIT and STOP
    #[arg(long)]
    price: Option<String>,
    /// Stop trigger price; required for STOP
    #[arg(long)]
    stop_price: Option<String>,
}

impl OrderArgs {
    fn into_form(self) -> OrderForm {
        OrderForm::new(self.symbol, self.side, self.order_type)
            .with_quantity(self.quantity)
            .with_price(self.price.unwrap_or_default())
            .with_stop_price(self.stop_price.unwrap_or_default())
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Place one order
    Order(OrderArgs),
    /// Show non-zero account balances
    Balance,
    /// Check that the order service is up
    Health,
    /// Show the tail of the order service's log
    Logs {
        /// Number of lines
        #[arg(long, default_value = "100")]
        lines: u32,
    },
    /// Place several orders in one session
    Shell,
}

/// One line typed into the shell.
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug)]
enum ShellCommand {
    /// Place an order
    Order(OrderArgs),
    /// Show the execution history
    History,
    /// Show the event terminal
    Events,
    /// Leave the shell
    #[command(alias = "quit")]
    Exit,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = DeskConfig::from_env().context("loading configuration")?;
    if let Some(api_url) = cli.api_url.as_deref() {
        config = config.with_api_url(api_url).context("--api-url")?;
    }

    let _telemetry = telemetry::init_with_config(&TelemetryConfig::new(config.log_file.clone()))
        .context("initializing logging")?;

    if let Some(port) = config.metrics_port {
        init_metrics(&MetricsConfig::with_port(port)).context("starting metrics exporter")?;
        tracing::info!(port, "Metrics exporter listening");
    }

    let gateway =
        Arc::new(HttpOrderGateway::new(&config.gateway).context("creating order gateway")?);

    match cli.command {
        Command::Order(args) => place_order(gateway, args.into_form()).await,
        Command::Shell => {
            run_shell(gateway).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Balance => {
            let balances = gateway.fetch_balances().await.context("fetching balances")?;
            println!("{}", presentation::render_balances(&balances));
            Ok(ExitCode::SUCCESS)
        }
        Command::Health => {
            let health = gateway.health().await.context("checking service health")?;
            println!("{}", presentation::render_health(gateway.base_url(), &health));
            Ok(ExitCode::SUCCESS)
        }
        Command::Logs { lines } => {
            let logs = gateway
                .server_logs(lines)
                .await
                .context("fetching server logs")?;
            println!("{}", presentation::render_server_logs(&logs));
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn place_order(gateway: Arc<HttpOrderGateway>, form: OrderForm) -> anyhow::Result<ExitCode> {
    let coordinator = DashboardCoordinator::new(gateway);

    Ok(if submit_and_print(&coordinator, form).await? {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Run one attempt and print it with both streams. Returns true on success.
async fn submit_and_print<G: OrderGatewayPort>(
    coordinator: &DashboardCoordinator<G>,
    form: OrderForm,
) -> anyhow::Result<bool> {
    let report = match coordinator.submit_form(form).await {
        Ok(report) => report,
        Err(e @ SubmitError::Invalid(_)) => {
            eprintln!("{}", presentation::render_notification(&e.notification()));
            return Ok(false);
        }
        Err(e @ (SubmitError::InFlight | SubmitError::Unrecorded(_))) => return Err(e.into()),
    };

    println!("{}\n", presentation::render_request_summary(&report.request));

    let notification = presentation::render_notification(&report.notification);
    if let AttemptOutcome::Succeeded(order) = &report.outcome {
        println!("{notification}\n");
        println!("{}\n", presentation::render_order_response(order));
    } else {
        eprintln!("{notification}\n");
    }

    println!("{}\n", presentation::render_history(&coordinator.history_view()));
    println!("{}", presentation::render_event_terminal(&coordinator.logs()));

    Ok(report.outcome.is_success())
}

async fn run_shell(gateway: Arc<HttpOrderGateway>) -> anyhow::Result<()> {
    let coordinator = DashboardCoordinator::new(gateway);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Order desk shell. Type 'help' for commands, 'exit' to quit.\n");

    loop {
        print!("desk> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let command = match ShellLine::try_parse_from(line.split_whitespace()) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                // Also covers `help`
                let _ = e.print();
                continue;
            }
        };

        match command {
            ShellCommand::Order(args) => {
                if let Err(e) = submit_and_print(&coordinator, args.into_form()).await {
                    eprintln!("{e:#}");
                }
            }
            ShellCommand::History => {
                println!("{}", presentation::render_history(&coordinator.history_view()));
            }
            ShellCommand::Events => {
                println!("{}", presentation::render_event_terminal(&coordinator.logs()));
            }
            ShellCommand::Exit => break,
        }
        println!();
    }

    tracing::info!(
        history_records = coordinator.history().len(),
        log_entries = coordinator.logs().len(),
        "Shell session closed"
    );
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definitions_are_consistent() {
        Cli::command().debug_assert();
        ShellLine::command().debug_assert();
    }

    #[test]
    fn shell_order_line_builds_a_form() {
        let line = "order --symbol ethusdt --side SELL --type LIMIT --quantity 2 --price 3100";
        let ShellCommand::Order(args) = ShellLine::try_parse_from(line.split_whitespace())
            .unwrap()
            .command
        else {
            panic!("expected an order line");
        };

        let form = args.into_form();
        assert_eq!(form.symbol, "ethusdt");
        assert_eq!(form.side, OrderSide::Sell);
        assert_eq!(form.order_type, OrderType::Limit);
        assert_eq!(form.quantity, "2");
        assert_eq!(form.price, "3100");
        assert!(form.stop_price.is_empty());
    }

    #[test]
    fn shell_accepts_quit_and_stream_views() {
        for (line, expected) in [
            ("quit", "exit"),
            ("exit", "exit"),
            ("history", "history"),
            ("events", "events"),
        ] {
            let command = ShellLine::try_parse_from([line]).unwrap().command;
            let name = match command {
                ShellCommand::Exit => "exit",
                ShellCommand::History => "history",
                ShellCommand::Events => "events",
                ShellCommand::Order(_) => "order",
            };
            assert_eq!(name, expected);
        }
    }

    #[test]
    fn shell_rejects_unknown_side() {
        assert!(ShellLine::try_parse_from(["order", "--side", "HOLD", "--quantity", "1"]).is_err());
    }
}
