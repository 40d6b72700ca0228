//! # Network Models
//!
//! * [`endpoint::Endpoint`]: One IPv4 address and every port reported for it.
//! * [`pool::Pool`]: Endpoints sharing the same `/24` network.
//! * [`pool::PoolMap`]: Pools in first-seen order, keyed by network key.

pub mod endpoint;
pub mod pool;
