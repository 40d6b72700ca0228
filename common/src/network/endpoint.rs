//! # Endpoint Model
//!
//! An [`Endpoint`] is one IPv4 address together with every port the speed
//! test reported for it. Addresses and ports are kept as the strings read
//! from the input; they are only parsed where an ordering needs numbers.

use std::collections::HashSet;
use std::net::Ipv4Addr;

use crate::error::{Error, Result};

/// Suffix appended to the first three octets to form a network key.
const NETWORK_SUFFIX: &str = ".0/24";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub address: String,
    /// Ports in input order. Repeated rows repeat the port.
    pub ports: Vec<String>,
}

impl Endpoint {
    pub fn new(address: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ports: vec![port.into()],
        }
    }

    pub fn push_port(&mut self, port: impl Into<String>) {
        self.ports.push(port.into());
    }

    /// Drops repeated ports, keeping the first occurrence of each.
    pub fn dedup_ports(&mut self) {
        let mut seen: HashSet<String> = HashSet::with_capacity(self.ports.len());
        self.ports.retain(|port| seen.insert(port.clone()));
    }

    /// Parses the address as a dotted-quad IPv4 address.
    pub fn ipv4(&self) -> Result<Ipv4Addr> {
        self.address
            .parse::<Ipv4Addr>()
            .map_err(|_| Error::InvalidAddress {
                address: self.address.clone(),
            })
    }

    /// The `/24` network key this endpoint belongs to.
    pub fn network_key(&self) -> Result<String> {
        network_key(&self.address)
    }

    /// Ports in ascending numeric order.
    ///
    /// Equal ports keep their relative order, so duplicates stay adjacent.
    pub fn sorted_ports(&self) -> Result<Vec<&str>> {
        let mut keyed: Vec<(u16, &str)> = self
            .ports
            .iter()
            .map(|port| {
                port.parse::<u16>()
                    .map(|value| (value, port.as_str()))
                    .map_err(|_| Error::InvalidPort {
                        address: self.address.clone(),
                        port: port.clone(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        keyed.sort_by_key(|(value, _)| *value);
        Ok(keyed.into_iter().map(|(_, port)| port).collect())
    }
}

/// Builds the `a.b.c.0/24` key from the first three octets of `address`.
///
/// Only the segment count is checked; the octets are taken verbatim.
pub fn network_key(address: &str) -> Result<String> {
    let octets: Vec<&str> = address.split('.').take(3).collect();
    if octets.len() < 3 {
        return Err(Error::InvalidAddress {
            address: address.to_string(),
        });
    }

    Ok(format!("{}{NETWORK_SUFFIX}", octets.join(".")))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
