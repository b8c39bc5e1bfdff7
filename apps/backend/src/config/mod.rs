//! Startup configuration read from the environment.

pub mod db;
pub mod server;
