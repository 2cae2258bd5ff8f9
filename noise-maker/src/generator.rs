use chrono::Utc;
use rand::{Rng, seq::IndexedRandom};
use std::fmt::{self, Display, Formatter};

const TYPES: [(&str, u8); 4] = [("https", 6), ("http", 3), ("h2", 2), ("ws", 1)];
const REQUESTS: [(&str, u8); 5] = [
    ("GET https://example.com:443/ HTTP/1.1", 10),
    ("GET https://example.com:443/api HTTP/1.1", 50),
    ("POST https://example.com:443/login HTTP/1.1", 10),
    ("PUT https://example.com:443/api HTTP/1.1", 5),
    ("DELETE https://example.com:443/api HTTP/1.1", 1),
];
const STATUS: [(u16, u8); 6] = [
    (200, 50),
    (201, 10),
    (400, 10),
    (401, 20),
    (404, 50),
    (502, 5),
];
const TARGETS: [&str; 3] = ["10.0.2.10:8080", "10.0.2.11:8080", "10.0.2.12:8080"];
const LOAD_BALANCER: &str = "app/noise-maker/50dc6c495c0c9188";
const USER_AGENT: &str = "curl/8.5.0";

/// Distinct client endpoints to draw requests from.
#[derive(Debug, Clone)]
pub struct ClientPool(Vec<String>);

impl ClientPool {
    /// Builds `size` endpoints, each on its own address so none collide.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, size: u16) -> Self {
        let clients = (0..size.max(1))
            .map(|i| {
                let port: u16 = rng.random_range(1024..=65535);
                format!("192.168.{}.{}:{port}", i / 256, i % 256)
            })
            .collect();
        Self(clients)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        &self.0[rng.random_range(0..self.0.len())]
    }
}

/// One access log line. `target` is `None` when the request never reached a
/// backend, which is written as `-` and makes the line unparseable.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessLine {
    pub kind: &'static str,
    pub timestamp: String,
    pub client: String,
    pub target: Option<&'static str>,
    pub timings: [f64; 3],
    pub status: u16,
    pub received_bytes: u64,
    pub sent_bytes: u64,
    pub request: &'static str,
}

impl Display for AccessLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let [request_time, target_time, response_time] = self.timings;
        write!(
            f,
            "{} {} {LOAD_BALANCER} {} {} {request_time:.3} {target_time:.3} {response_time:.3} {} {} {} \"{}\" \"{USER_AGENT}\"",
            self.kind,
            self.timestamp,
            self.client,
            self.target.unwrap_or("-"),
            self.status,
            self.received_bytes,
            self.sent_bytes,
            self.request,
        )
    }
}

pub fn generate_access_line<R: Rng + ?Sized>(rng: &mut R, clients: &ClientPool) -> AccessLine {
    let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string();
    let kind = TYPES.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let request = REQUESTS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let status = STATUS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let target = *TARGETS.choose(rng).unwrap();
    let timings = [
        rng.random_range(0.0..0.01),
        rng.random_range(0.0..2.0),
        rng.random_range(0.0..0.01),
    ];

    AccessLine {
        kind,
        timestamp,
        client: clients.pick(rng).to_string(),
        target: Some(target),
        timings,
        status,
        received_bytes: rng.random_range(100..4096),
        sent_bytes: rng.random_range(100..1_000_000),
        request,
    }
}

/// A line the load balancer could not route: no target endpoint.
pub fn generate_noise_line<R: Rng + ?Sized>(rng: &mut R, clients: &ClientPool) -> AccessLine {
    AccessLine {
        target: None,
        status: 502,
        ..generate_access_line(rng, clients)
    }
}
