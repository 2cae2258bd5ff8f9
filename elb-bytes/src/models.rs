use crate::invariants::Endpoint;

/// One access-log line that matched the grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub method: String,
    pub timestamp: String,
    pub client: Endpoint,
    pub target: Endpoint,
    pub received_bytes: u64,
    pub sent_bytes: u64,
}

/// Records of a single file, in line order.
pub type Dataset = Vec<LogRecord>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSummary {
    pub client: Endpoint,
    pub received_bytes: u128,
    pub sent_bytes: u128,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlobalSummary {
    pub received_bytes: u128,
    pub sent_bytes: u128,
}
