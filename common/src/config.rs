use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "result.csv";
pub const DEFAULT_OUTPUT: &str = "README.md";

const REPORT_HEADER: &str = "# warp-endpoint-checker\n\n\
A repository containing a list of endpoints, grouped by IP pools, available for connecting to the **Cloudflare WARP** service.\n\n\
> 🙏 Special thanks to [peanut996](https://github.com/peanut996/CloudflareWarpSpeedTest) for providing the testing tool.\n\n\
---\n\n\
## 📊 Table of Available IP Addresses by Pool\n\n";

const TABLE_HEADER: &str = "| IP Address | Ports |\n|------------|-------|\n";

#[derive(Debug, Clone)]
pub struct Config {
    /// CSV file holding an `IP:Port` column.
    pub input: PathBuf,
    /// Markdown file that is overwritten with the report.
    pub output: PathBuf,
    /// Collapses repeated ports of the same endpoint.
    ///
    /// Off by default, so every reported row shows up in the table.
    pub dedup_ports: bool,
    pub template: ReportTemplate,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            dedup_ports: false,
            template: ReportTemplate::default(),
        }
    }
}

/// Fixed text blocks of the Markdown report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTemplate {
    /// Title, description and attribution, emitted before the summary.
    pub header: String,
    /// Column header emitted before each pool's rows.
    pub table_header: String,
}

impl Default for ReportTemplate {
    fn default() -> Self {
        Self {
            header: REPORT_HEADER.to_string(),
            table_header: TABLE_HEADER.to_string(),
        }
    }
}
