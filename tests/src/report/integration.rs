#![cfg(test)]
use poolmap_common::config::Config;
use poolmap_common::error::Error;
use poolmap_core::pipeline;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn workspace(csv: &str) -> (TempDir, Config) {
    let dir: TempDir = tempfile::tempdir().unwrap();
    let cfg: Config = Config {
        input: dir.path().join("result.csv"),
        output: dir.path().join("README.md"),
        ..Config::default()
    };
    fs::write(&cfg.input, csv).unwrap();
    (dir, cfg)
}

fn pool_sections(report: &str) -> Vec<&str> {
    report
        .lines()
        .filter(|line| line.starts_with("### Pool:"))
        .collect()
}

fn table_rows(report: &str) -> Vec<&str> {
    report
        .lines()
        .filter(|line| line.starts_with("| ") && !line.starts_with("| IP Address"))
        .collect()
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn merged_ports_render_numerically() {
    let (_dir, cfg) = workspace("IP:Port\n1.2.3.4:443\n1.2.3.4:2408\n1.2.3.5:443\n");

    let summary = pipeline::run(&cfg).unwrap();
    assert_eq!(summary.pools, 1);
    assert_eq!(summary.endpoints, 2);

    let report = read(&cfg.output);
    assert_eq!(
        pool_sections(&report),
        vec!["### Pool: `1.2.3.0/24` Available: 2"]
    );
    assert_eq!(
        table_rows(&report),
        vec!["| 1.2.3.4 | 443, 2408 |", "| 1.2.3.5 | 443 |"]
    );
}

#[test]
fn pools_follow_numeric_address_order() {
    let csv = "IP:Port\n\
               100.0.0.1:500\n\
               20.0.0.1:500\n\
               10.0.0.1:500\n\
               9.1.1.1:500\n";
    let (_dir, cfg) = workspace(csv);

    pipeline::run(&cfg).unwrap();

    let report = read(&cfg.output);
    assert_eq!(
        pool_sections(&report),
        vec![
            "### Pool: `9.1.1.0/24` Available: 1",
            "### Pool: `10.0.0.0/24` Available: 1",
            "### Pool: `20.0.0.0/24` Available: 1",
            "### Pool: `100.0.0.0/24` Available: 1",
        ]
    );
}

#[test]
fn endpoints_within_pool_are_sorted() {
    let csv = "IP:Port\n\
               162.159.192.20:2408\n\
               162.159.192.3:500\n\
               162.159.192.100:1701\n";
    let (_dir, cfg) = workspace(csv);

    pipeline::run(&cfg).unwrap();

    let report = read(&cfg.output);
    assert_eq!(
        table_rows(&report),
        vec![
            "| 162.159.192.3 | 500 |",
            "| 162.159.192.20 | 2408 |",
            "| 162.159.192.100 | 1701 |",
        ]
    );
}

#[test]
fn totals_match_distinct_addresses() {
    let csv = "IP:Port\n\
               162.159.192.1:2408\n\
               162.159.192.1:500\n\
               162.159.193.7:4500\n\
               188.114.96.2:854\n\
               188.114.96.2:854\n\
               188.114.97.9:2408\n";
    let (_dir, cfg) = workspace(csv);

    let summary = pipeline::run(&cfg).unwrap();
    assert_eq!(summary.endpoints, 4);
    assert_eq!(summary.pools, 4);

    let report = read(&cfg.output);
    assert!(report.contains("### 🗂️ Number of IP Pools: 4\n"));
    assert!(report.contains("### 🔢 Total Number of Endpoints: 4\n"));
    assert_eq!(table_rows(&report).len(), 4);

    // Duplicate rows are not collapsed by default
    assert!(report.contains("| 188.114.96.2 | 854, 854 |"));
}

#[test]
fn header_only_input() {
    let (_dir, cfg) = workspace("IP:Port\n");

    let summary = pipeline::run(&cfg).unwrap();
    assert_eq!(summary.pools, 0);
    assert_eq!(summary.endpoints, 0);

    let report = read(&cfg.output);
    assert!(report.contains("### 🗂️ Number of IP Pools: 0\n"));
    assert!(report.contains("### 🔢 Total Number of Endpoints: 0\n"));
    assert!(pool_sections(&report).is_empty());
    assert!(report.ends_with("---\n"));
}

#[test]
fn rerun_is_byte_identical() {
    let csv = "IP:Port\n\
               8.6.112.5:2408\n\
               8.6.112.5:443\n\
               8.34.146.1:500\n";
    let (_dir, cfg) = workspace(csv);

    pipeline::run(&cfg).unwrap();
    let first: Vec<u8> = fs::read(&cfg.output).unwrap();

    pipeline::run(&cfg).unwrap();
    let second: Vec<u8> = fs::read(&cfg.output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn previous_report_is_replaced() {
    let (_dir, cfg) = workspace("IP:Port\n1.1.1.1:443\n");
    fs::write(&cfg.output, "# old report\n".repeat(100)).unwrap();

    pipeline::run(&cfg).unwrap();

    let report = read(&cfg.output);
    assert!(!report.contains("# old report"));
    assert!(report.starts_with("# warp-endpoint-checker\n\n"));
}

#[test]
fn missing_input_fails_without_output() {
    let dir: TempDir = tempfile::tempdir().unwrap();
    let cfg: Config = Config {
        input: dir.path().join("result.csv"),
        output: dir.path().join("README.md"),
        ..Config::default()
    };

    let err = pipeline::run(&cfg).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::NotFound { .. })
    ));
    assert!(!cfg.output.exists());
}

#[test]
fn malformed_rows_fail_without_output() {
    let cases = [
        ("Address\n1.2.3.4:443\n", "missing header"),
        ("IP:Port\n1.2.3.4-443\n", "missing colon"),
        ("IP:Port\n1.2.3:443\n", "short address"),
        ("IP:Port\n1.2.3.4:https\n", "non-numeric port"),
    ];

    for (csv, case) in cases {
        let (_dir, cfg) = workspace(csv);

        let err = pipeline::run(&cfg).unwrap_err();
        let root = err.downcast_ref::<Error>();
        assert!(
            matches!(
                root,
                Some(Error::MissingField { .. })
                    | Some(Error::Format { .. })
                    | Some(Error::InvalidAddress { .. })
                    | Some(Error::InvalidPort { .. })
            ),
            "unexpected error for {case}: {err:?}"
        );
        assert!(!cfg.output.exists(), "output written for {case}");
    }
}

#[test]
fn unwritable_output_reports_write_stage() {
    let (dir, mut cfg) = workspace("IP:Port\n1.1.1.1:443\n");
    cfg.output = dir.path().join("no-such-dir").join("README.md");

    let err = pipeline::run(&cfg).unwrap_err();
    assert!(err.to_string().starts_with("writing report to"));
    assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Io(_))));
}
