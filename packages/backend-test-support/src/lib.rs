//! Backend test support utilities
//!
//! Test logging initialization and Problem Details assertions shared by the
//! backend's unit and integration tests.

pub mod logging;
pub mod problem_details;
