//! Execution domain services.

mod status_mapper;

pub use status_mapper::map_status;
