//! # Markdown Renderer
//!
//! Produces the report document: the template header, the pool and endpoint
//! totals, then one section with a two-column table per pool.

use std::fs;
use std::path::Path;

use poolmap_common::config::ReportTemplate;
use poolmap_common::error::Result;
use poolmap_common::network::endpoint::Endpoint;
use poolmap_common::network::pool::{Pool, PoolMap};

const RULE: &str = "---\n";

/// Renders `pools` in map order.
pub fn render(pools: &PoolMap, template: &ReportTemplate) -> Result<String> {
    let mut report: String = template.header.clone();

    report.push_str(&format!("### 🗂️ Number of IP Pools: {}\n", pools.len()));
    report.push_str(&format!(
        "### 🔢 Total Number of Endpoints: {}\n\n",
        pools.endpoint_count()
    ));
    report.push_str(RULE);

    for pool in pools {
        render_pool(&mut report, pool, template)?;
    }

    Ok(report)
}

fn render_pool(report: &mut String, pool: &Pool, template: &ReportTemplate) -> Result<()> {
    report.push_str(&format!(
        "### Pool: `{}` Available: {}\n",
        pool.network,
        pool.len()
    ));
    report.push_str(&template.table_header);

    for endpoint in &pool.endpoints {
        report.push_str(&table_row(endpoint)?);
    }

    report.push_str(RULE);
    Ok(())
}

/// `| address | p1, p2 |` with ports in ascending numeric order.
pub fn table_row(endpoint: &Endpoint) -> Result<String> {
    let ports: String = endpoint.sorted_ports()?.join(", ");
    Ok(format!("| {} | {} |\n", endpoint.address, ports))
}

/// Replaces the contents of `path` with `document`.
pub fn write_report(path: &Path, document: &str) -> Result<()> {
    fs::write(path, document)?;
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
