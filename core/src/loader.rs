//! # Endpoint Loader
//!
//! Reads the speed-test CSV and merges rows that share an address into a
//! single [`Endpoint`]. Endpoints come out in the order their address was
//! first seen.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use poolmap_common::error::{Error, Result};
use poolmap_common::network::endpoint::Endpoint;
use serde::Deserialize;
use tracing::debug;

/// Column holding the combined `address:port` value.
pub const ENDPOINT_FIELD: &str = "IP:Port";

/// One data row. Columns other than `IP:Port` are ignored.
#[derive(Debug, Deserialize)]
struct ResultRow {
    #[serde(rename = "IP:Port")]
    ip_port: String,
}

/// Loads endpoints from the CSV file at `path`.
pub fn load(path: &Path) -> Result<Vec<Endpoint>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::NotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    })?;

    load_from_reader(file)
}

/// Loads endpoints from any CSV source with an `IP:Port` header.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<Endpoint>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if !headers.iter().any(|field| field == ENDPOINT_FIELD) {
        return Err(Error::MissingField {
            field: ENDPOINT_FIELD.to_string(),
        });
    }

    let mut endpoints: Vec<Endpoint> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut rows: usize = 0;

    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |pos| pos.line());
        let row: ResultRow = record.deserialize(Some(&headers))?;
        let (address, port) = split_endpoint(&row.ip_port, line)?;

        match index.get(address) {
            Some(&idx) => endpoints[idx].push_port(port),
            None => {
                index.insert(address.to_string(), endpoints.len());
                endpoints.push(Endpoint::new(address, port));
            }
        }
        rows += 1;
    }

    debug!("Loaded {rows} rows into {} endpoints", endpoints.len());
    Ok(endpoints)
}

/// Splits `address:port` on the first colon.
fn split_endpoint(value: &str, line: u64) -> Result<(&str, &str)> {
    let Some((address, port)) = value.split_once(':') else {
        return Err(Error::format(
            line,
            format!("missing ':' separator in '{value}'"),
        ));
    };

    if address.is_empty() {
        return Err(Error::format(line, format!("empty address in '{value}'")));
    }
    if port.is_empty() {
        return Err(Error::format(line, format!("empty port in '{value}'")));
    }

    Ok((address, port))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
