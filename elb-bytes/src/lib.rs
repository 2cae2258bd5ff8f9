//! Per-client byte volumes from load-balancer access logs.

pub mod analytics;
pub mod invariants;
pub mod models;
pub mod parser;
pub mod report;

pub use analytics::aggregate;
pub use parser::{ParseError, ParseStats, parse_log, parse_log_with_stats};
pub use report::{Report, format_bytes};
