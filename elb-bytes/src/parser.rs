use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
    sync::LazyLock,
};

use num_format::{Locale, ToFormattedString};
use regex::{Captures, Regex};
use thiserror::Error;
use tracing::{debug, info, trace};

use crate::models::{Dataset, LogRecord};

/// Tokens between the target endpoint and `received_bytes`.
const IGNORED_TIMING_FIELDS: usize = 4;

// method timestamp elb client:port target:port t1 t2 t3 t4 received sent [...]
// Unanchored: only a matching prefix of the fields is required.
static GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    let skipped = r"\S+\s+".repeat(IGNORED_TIMING_FIELDS);
    Regex::new(&format!(
        concat!(
            r"(?P<method>\S+)\s+",
            r"(?P<timestamp>\S+)\s+",
            r"\S+\s+",
            r"(?P<client>[0-9.]+:[0-9]+)\s+",
            r"(?P<target>[0-9.]+:[0-9]+)\s+",
            "{skipped}",
            r"(?P<received_bytes>[0-9]+)\s+",
            r"(?P<sent_bytes>[0-9]+)",
        ),
        skipped = skipped
    ))
    .expect("access log grammar is a valid regex")
});

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("cannot read access log {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub lines: usize,
    pub records: usize,
    pub skipped: usize,
}

pub fn parse_log(path: impl AsRef<Path>) -> Result<Dataset, ParseError> {
    parse_log_with_stats(path).map(|(dataset, _)| dataset)
}

/// Reads the whole file, keeping every line that matches the grammar.
///
/// Invalid UTF-8 is dropped byte-wise rather than failing the read, and lines
/// that do not match are counted in [`ParseStats::skipped`] without raising.
pub fn parse_log_with_stats(
    path: impl AsRef<Path>,
) -> Result<(Dataset, ParseStats), ParseError> {
    let path = path.as_ref();
    let file_access = |source| ParseError::FileAccess {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = BufReader::new(File::open(path).map_err(file_access)?);

    let mut dataset = Dataset::new();
    let mut stats = ParseStats::default();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).map_err(file_access)? == 0 {
            break;
        }
        for line in split_line_endings(&buf) {
            stats.lines += 1;
            match parse_log_line(&decode_lossy(line)) {
                Some(record) => {
                    stats.records += 1;
                    dataset.push(record);
                }
                None => {
                    stats.skipped += 1;
                    trace!(line = stats.lines, "no access log match");
                }
            }
        }
    }

    info!(
        path = %path.display(),
        lines = %stats.lines.to_formatted_string(&Locale::en),
        records = %stats.records.to_formatted_string(&Locale::en),
        skipped = %stats.skipped.to_formatted_string(&Locale::en),
        "parsed access log"
    );
    Ok((dataset, stats))
}

// `\n`, `\r\n` and a lone `\r` all end a line.
fn split_line_endings(chunk: &[u8]) -> impl Iterator<Item = &[u8]> {
    let chunk = chunk.strip_suffix(b"\n").unwrap_or(chunk);
    let chunk = chunk.strip_suffix(b"\r").unwrap_or(chunk);
    chunk.split(|&b| b == b'\r')
}

fn decode_lossy(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

pub fn parse_log_line(line: &str) -> Option<LogRecord> {
    let caps = GRAMMAR.captures(line)?;
    let received_bytes = parse_count(&caps, "received_bytes")?;
    let sent_bytes = parse_count(&caps, "sent_bytes")?;
    Some(LogRecord {
        method: caps["method"].to_string(),
        timestamp: caps["timestamp"].to_string(),
        client: caps["client"].parse().ok()?,
        target: caps["target"].parse().ok()?,
        received_bytes,
        sent_bytes,
    })
}

fn parse_count(caps: &Captures<'_>, field: &str) -> Option<u64> {
    let digits = &caps[field];
    match digits.parse() {
        Ok(n) => Some(n),
        Err(e) => {
            debug!(field, digits, "byte count out of range: {e}");
            None
        }
    }
}
