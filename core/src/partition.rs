//! Groups endpoints into `/24` pools.

use poolmap_common::error::Result;
use poolmap_common::network::endpoint::Endpoint;
use poolmap_common::network::pool::PoolMap;
use tracing::debug;

/// Assigns every endpoint to the pool of its first three octets.
///
/// Pools and the endpoints inside them keep the order of `endpoints`, so
/// feeding address-sorted input yields pools in ascending network order.
pub fn partition(endpoints: Vec<Endpoint>) -> Result<PoolMap> {
    let mut pools = PoolMap::new();

    for endpoint in endpoints {
        let network = endpoint.network_key()?;
        pools.insert(network, endpoint);
    }

    debug!(
        "Partitioned {} endpoints into {} pools",
        pools.endpoint_count(),
        pools.len()
    );
    Ok(pools)
}
