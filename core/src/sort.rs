//! Orders endpoints by the numeric value of their IPv4 address.

use poolmap_common::error::Result;
use poolmap_common::network::endpoint::Endpoint;

/// Stable ascending sort on the 32-bit address value.
///
/// Fails on the first address that is not a dotted-quad IPv4 address.
pub fn sort_by_address(endpoints: Vec<Endpoint>) -> Result<Vec<Endpoint>> {
    let mut keyed: Vec<(u32, Endpoint)> = endpoints
        .into_iter()
        .map(|endpoint| endpoint.ipv4().map(|ip| (u32::from(ip), endpoint)))
        .collect::<Result<Vec<_>>>()?;

    keyed.sort_by_key(|(key, _)| *key);

    Ok(keyed.into_iter().map(|(_, endpoint)| endpoint).collect())
}
