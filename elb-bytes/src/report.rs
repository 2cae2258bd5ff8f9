use std::fmt::{self, Display, Formatter};

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Columns},
};

use crate::{
    analytics::aggregate,
    models::{ClientSummary, GlobalSummary, LogRecord},
};

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
const CEILING_UNIT: &str = "PB";

/// Renders a byte count with two decimals in binary units, e.g. `1.50 KB`.
///
/// Anything at or past 1024 TB is shown in PB, however large.
pub fn format_bytes(bytes: u128) -> String {
    let mut value = bytes as f64;
    for unit in UNITS {
        if value < 1024.0 {
            return format!("{value:.2} {unit}");
        }
        value /= 1024.0;
    }
    format!("{value:.2} {CEILING_UNIT}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    clients: Vec<ClientSummary>,
    global: GlobalSummary,
}

impl Report {
    pub fn new(clients: Vec<ClientSummary>, global: GlobalSummary) -> Self {
        Self { clients, global }
    }

    pub fn from_dataset(dataset: &[LogRecord]) -> Self {
        let (clients, global) = aggregate(dataset);
        Self::new(clients, global)
    }

    pub fn clients(&self) -> &[ClientSummary] {
        &self.clients
    }

    pub fn global(&self) -> GlobalSummary {
        self.global
    }
}

#[derive(Tabled)]
struct ClientRow {
    client: String,
    received_bytes: String,
    sent_bytes: String,
}

impl From<&ClientSummary> for ClientRow {
    fn from(summary: &ClientSummary) -> Self {
        Self {
            client: summary.client.to_string(),
            received_bytes: format_bytes(summary.received_bytes),
            sent_bytes: format_bytes(summary.sent_bytes),
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut table = Table::new(self.clients.iter().map(ClientRow::from));
        table
            .with(Style::blank())
            .with(Modify::new(Columns::new(1..)).with(Alignment::right()));
        writeln!(f, "{table}")?;

        writeln!(f)?;
        writeln!(f, "Summary:")?;
        writeln!(
            f,
            "Total Received Bytes: {}",
            format_bytes(self.global.received_bytes)
        )?;
        writeln!(f, "Total Sent Bytes: {}", format_bytes(self.global.sent_bytes))
    }
}
