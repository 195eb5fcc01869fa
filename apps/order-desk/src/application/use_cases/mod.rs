//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod dashboard_coordinator;

pub use dashboard_coordinator::{
    AttemptOutcome, AttemptReport, CANCELLED_MESSAGE, DashboardCoordinator, SubmissionPhase,
    SubmitError,
};
