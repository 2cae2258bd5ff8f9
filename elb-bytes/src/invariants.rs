use std::str::FromStr;

use derive_more::{AsRef, Debug, Display};

/// An `ip:port` endpoint as written in the access log.
///
/// Equality is plain string equality, so two endpoints on the same address
/// but different ports are distinct.
#[derive(Debug, Display, AsRef, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Endpoint(String);

impl Endpoint {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for Endpoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (addr, port) = s
            .split_once(':')
            .ok_or_else(|| format!("endpoint `{s}` has no port"))?;
        let is_addr = !addr.is_empty() && addr.bytes().all(|b| b.is_ascii_digit() || b == b'.');
        let is_port = !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit());
        if is_addr && is_port {
            Ok(Self(s.into()))
        } else {
            Err(format!("endpoint `{s}` is not an ip:port pair"))
        }
    }
}
