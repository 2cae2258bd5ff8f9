use std::collections::BTreeMap;

use tracing::debug;

use crate::{
    invariants::Endpoint,
    models::{ClientSummary, GlobalSummary, LogRecord},
};

#[derive(Debug, Clone, Copy, Default)]
struct Totals {
    received_bytes: u128,
    sent_bytes: u128,
}

impl Totals {
    fn add(&mut self, record: &LogRecord) {
        self.received_bytes += u128::from(record.received_bytes);
        self.sent_bytes += u128::from(record.sent_bytes);
    }
}

/// Per-client and overall byte totals, accumulated one record at a time.
#[derive(Debug, Default)]
pub struct Analytics {
    clients: BTreeMap<Endpoint, Totals>,
    global: Totals,
}

impl Analytics {
    pub fn record(&mut self, record: &LogRecord) {
        self.clients
            .entry(record.client.clone())
            .or_default()
            .add(record);
        self.global.add(record);
    }

    /// Summaries ordered by client string.
    pub fn client_summaries(&self) -> Vec<ClientSummary> {
        self.clients
            .iter()
            .map(|(client, totals)| ClientSummary {
                client: client.clone(),
                received_bytes: totals.received_bytes,
                sent_bytes: totals.sent_bytes,
            })
            .collect()
    }

    pub fn global_summary(&self) -> GlobalSummary {
        GlobalSummary {
            received_bytes: self.global.received_bytes,
            sent_bytes: self.global.sent_bytes,
        }
    }
}

pub fn aggregate(dataset: &[LogRecord]) -> (Vec<ClientSummary>, GlobalSummary) {
    let mut analytics = Analytics::default();
    for record in dataset {
        analytics.record(record);
    }
    debug!(
        records = dataset.len(),
        clients = analytics.clients.len(),
        "aggregated byte totals"
    );
    (analytics.client_summaries(), analytics.global_summary())
}
