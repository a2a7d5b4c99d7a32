//! Bulk audit of exported attendance fixes against one fence.

use anyhow::{Context, Result};
use geofence::{evaluate_fix, Coordinate, GeoFence};
use polars::prelude::*;
use std::path::Path;

use crate::report::{AuditReport, RowVerdict};

pub const LATITUDE_COL: &str = "latitude";
pub const LONGITUDE_COL: &str = "longitude";
pub const SURVEYOR_COL: &str = "surveyor_id";

/// Read `input` (CSV with a header row) and evaluate every fix.
///
/// The schema is inferred from the head of the file; cells further down that
/// fail to parse are read as nulls instead of aborting the audit.
pub fn audit_csv<P: AsRef<Path>>(input: P, fence: &GeoFence) -> Result<AuditReport> {
    let input = input.as_ref();
    let df = LazyCsvReader::new(input)
        .with_infer_schema_length(Some(100))
        .with_ignore_errors(true)
        .finish()
        .and_then(|lf| lf.collect())
        .with_context(|| format!("reading fixes from {}", input.display()))?;
    tracing::debug!(rows = df.height(), cols = df.width(), "fixes_loaded");
    audit_frame(&df, fence)
}

/// Evaluate the fixes held in `df`. Nulls and unparseable cells become NaN
/// and therefore `InvalidCoordinate`.
pub fn audit_frame(df: &DataFrame, fence: &GeoFence) -> Result<AuditReport> {
    let lat = float_column(df, LATITUDE_COL)?;
    let lon = float_column(df, LONGITUDE_COL)?;
    let ids = match df.column(SURVEYOR_COL) {
        Ok(series) => Some(series.cast(&DataType::String)?),
        Err(_) => None,
    };
    let ids = ids.as_ref().map(|s| s.str()).transpose()?;

    let mut report = AuditReport::new(fence);
    for (row, (lat, lon)) in (&lat).into_iter().zip(&lon).enumerate() {
        let coordinate = Coordinate::new(lat.unwrap_or(f64::NAN), lon.unwrap_or(f64::NAN));
        let verdict = evaluate_fix(coordinate, Some(fence));
        let surveyor_id = ids.and_then(|ca| ca.get(row)).map(str::to_string);
        tracing::debug!(row, surveyor_id = ?surveyor_id, verdict = ?verdict, "fix");
        report.push(RowVerdict {
            row,
            surveyor_id,
            coordinate,
            verdict,
        });
    }
    Ok(report)
}

fn float_column(df: &DataFrame, name: &str) -> Result<Float64Chunked> {
    let series = df
        .column(name)
        .with_context(|| format!("missing column `{name}`"))?
        .cast(&DataType::Float64)
        .with_context(|| format!("column `{name}` is not numeric"))?;
    Ok(series.f64()?.clone())
}
