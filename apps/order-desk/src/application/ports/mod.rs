//! Application Ports (Driver and Driven)
//!
//! Ports define interfaces for interacting with external systems.
//! - **Driven Ports** (Secondary/Outbound): How our application uses external systems

mod order_gateway_port;

#[cfg(test)]
pub use order_gateway_port::MockOrderGatewayPort;
pub use order_gateway_port::{
    AcceptedOrder, AssetBalance, BALANCE_PATH, GatewayError, HEALTH_PATH, HealthStatus, LOGS_PATH,
    ORDER_PATH, OrderGatewayPort, Rejection, SubmissionOutcome, TransportFailure,
};
