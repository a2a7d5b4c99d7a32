use anyhow::{Context, Result};
use geofence::{Coordinate, GeoFence, Verdict};
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::process::Command;

/// Fence facts recorded at the top of an audit report.
#[derive(Debug, Serialize)]
pub struct FenceSummary {
    pub is_active: bool,
    pub vertices: usize,
}

impl From<&GeoFence> for FenceSummary {
    fn from(fence: &GeoFence) -> Self {
        Self {
            is_active: fence.is_active,
            vertices: fence.coordinates.len(),
        }
    }
}

#[derive(Debug, Default, PartialEq, Serialize)]
pub struct Totals {
    pub rows: usize,
    pub accepted: usize,
    pub outside_fence: usize,
    pub invalid: usize,
}

impl Totals {
    fn record(&mut self, verdict: &Verdict) {
        self.rows += 1;
        match verdict {
            Verdict::Accepted { .. } => self.accepted += 1,
            Verdict::OutsideFence { .. } => self.outside_fence += 1,
            Verdict::InvalidCoordinate => self.invalid += 1,
        }
    }
}

/// One evaluated CSV row; `row` is zero-based, header excluded.
#[derive(Debug, Serialize)]
pub struct RowVerdict {
    pub row: usize,
    pub surveyor_id: Option<String>,
    pub coordinate: Coordinate,
    pub verdict: Verdict,
}

#[derive(Debug, Serialize)]
pub struct AuditReport {
    pub code_rev: String,
    pub fence: FenceSummary,
    pub totals: Totals,
    pub rows: Vec<RowVerdict>,
}

impl AuditReport {
    pub fn new(fence: &GeoFence) -> Self {
        Self {
            code_rev: current_git_rev(),
            fence: FenceSummary::from(fence),
            totals: Totals::default(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: RowVerdict) {
        self.totals.record(&row.verdict);
        self.rows.push(row);
    }
}

/// Write `report` as pretty JSON, creating parent directories as needed.
pub fn write_report<P: AsRef<Path>>(out: P, report: &AuditReport) -> Result<()> {
    let out = out.as_ref();
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report dir {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(report)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

/// Value for `AuditReport::code_rev`, so an audit can be traced to the build
/// that judged it. Sources in order: `GIT_COMMIT` baked in at build time,
/// `GIT_COMMIT` at run time, `git rev-parse HEAD`, else "unknown".
pub fn current_git_rev() -> String {
    if let Some(baked) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return baked.to_string();
    }
    if let Ok(runtime) = std::env::var("GIT_COMMIT") {
        if !runtime.is_empty() {
            return runtime;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    fn row(i: usize, verdict: Verdict) -> RowVerdict {
        RowVerdict {
            row: i,
            surveyor_id: Some(format!("S{i}")),
            coordinate: Coordinate::new(0.5, 0.5),
            verdict,
        }
    }

    #[test]
    fn totals_follow_pushed_rows() {
        let mut report = AuditReport::new(&GeoFence::inactive());
        report.push(row(0, Verdict::Accepted { distance_km: None }));
        report.push(row(1, Verdict::OutsideFence { distance_km: Some(3.0) }));
        report.push(row(2, Verdict::InvalidCoordinate));
        report.push(row(3, Verdict::Accepted { distance_km: Some(0.1) }));
        assert_eq!(
            report.totals,
            Totals {
                rows: 4,
                accepted: 2,
                outside_fence: 1,
                invalid: 1
            }
        );
    }

    #[test]
    fn write_report_creates_nested_file() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("audit").join("march.json");
        let mut report = AuditReport::new(&GeoFence::new(true, Vec::new()));
        report.push(row(0, Verdict::InvalidCoordinate));
        write_report(&out, &report).unwrap();

        let parsed: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["fence"]["is_active"], true);
        assert_eq!(parsed["fence"]["vertices"], 0);
        assert_eq!(parsed["totals"]["invalid"], 1);
        assert_eq!(parsed["rows"][0]["surveyor_id"], "S0");
        assert_eq!(parsed["rows"][0]["verdict"]["status"], "invalid_coordinate");
        assert!(parsed["code_rev"].is_string());
    }
}
