//! # Report Pipeline
//!
//! Chains load, sort, partition and render. Every stage error is wrapped
//! with the name of the stage so the final diagnostic says where the run
//! stopped. Nothing is written until the whole document has been rendered.

use std::path::PathBuf;

use anyhow::Context;
use poolmap_common::config::Config;
use poolmap_common::network::endpoint::Endpoint;
use tracing::{debug, warn};

use crate::{loader, partition, render, sort};

/// A rendered report and the totals it reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub document: String,
    pub pools: usize,
    pub endpoints: usize,
}

/// Outcome of a full run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub pools: usize,
    pub endpoints: usize,
    pub output: PathBuf,
}

/// Runs every stage except the final write.
pub fn prepare(cfg: &Config) -> anyhow::Result<Report> {
    let mut endpoints: Vec<Endpoint> = loader::load(&cfg.input)
        .with_context(|| format!("loading endpoints from {}", cfg.input.display()))?;

    if endpoints.is_empty() {
        warn!("No endpoints found in {}", cfg.input.display());
    }

    if cfg.dedup_ports {
        endpoints.iter_mut().for_each(Endpoint::dedup_ports);
    }

    let endpoints = sort::sort_by_address(endpoints).context("sorting endpoints")?;
    let pools = partition::partition(endpoints).context("partitioning endpoints into pools")?;
    let document = render::render(&pools, &cfg.template).context("rendering report")?;

    debug!("Rendered report of {} bytes", document.len());

    Ok(Report {
        document,
        pools: pools.len(),
        endpoints: pools.endpoint_count(),
    })
}

/// Renders the report and overwrites the configured output file.
pub fn run(cfg: &Config) -> anyhow::Result<Summary> {
    let report = prepare(cfg)?;

    render::write_report(&cfg.output, &report.document)
        .with_context(|| format!("writing report to {}", cfg.output.display()))?;

    Ok(Summary {
        pools: report.pools,
        endpoints: report.endpoints,
        output: cfg.output.clone(),
    })
}
