pub mod cors;
pub mod request_trace;
pub mod structured_logger;

pub use cors::cors_middleware;
pub use request_trace::{RequestTrace, TraceId, TRACE_ID_HEADER};
pub use structured_logger::StructuredLogger;
