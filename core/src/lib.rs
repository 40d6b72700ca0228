//! # Poolmap Core
//!
//! The report pipeline, one module per stage:
//!
//! 1. **[`loader`]**: reads `IP:Port` rows into endpoints.
//! 2. **[`sort`]**: orders endpoints by numeric IPv4 value.
//! 3. **[`partition`]**: groups endpoints into `/24` pools.
//! 4. **[`render`]**: turns pools into the Markdown report.
//!
//! [`pipeline`] chains the stages and is what the CLI calls.

pub mod loader;
pub mod partition;
pub mod pipeline;
pub mod render;
pub mod sort;
