use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use geofence::{calculate_distance, evaluate_fix, is_valid_coordinate, Coordinate, GeoFence};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod batch;
mod report;

#[derive(Parser)]
#[command(name = "geofence")]
#[command(about = "Check surveyor GPS fixes against location geo-fences")]
struct Cmd {
    /// Emit debug-level logs (per-row verdicts in batch mode)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Report whether a coordinate lies within latitude/longitude ranges
    Validate {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },
    /// Great-circle distance in kilometres between two `lat,lon` pairs
    Distance {
        #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
        from: Coordinate,
        #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
        to: Coordinate,
    },
    /// Evaluate one fix against a fence file and print the verdict
    Check {
        #[arg(long)]
        fence: PathBuf,
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },
    /// Audit a CSV of fixes (latitude, longitude[, surveyor_id]) and write a JSON report
    Batch {
        #[arg(long)]
        fence: PathBuf,
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Validate { lat, lon } => validate(Coordinate::new(lat, lon)),
        Action::Distance { from, to } => distance(from, to),
        Action::Check { fence, lat, lon } => check(&fence, Coordinate::new(lat, lon)),
        Action::Batch { fence, input, out } => run_batch(&fence, &input, &out),
    }
}

fn validate(coordinate: Coordinate) -> Result<()> {
    let valid = is_valid_coordinate(coordinate);
    tracing::info!(lat = coordinate.latitude, lon = coordinate.longitude, valid, "validate");
    let obj = serde_json::json!({ "coordinate": coordinate, "valid": valid });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn distance(from: Coordinate, to: Coordinate) -> Result<()> {
    let km = calculate_distance(from, to);
    tracing::info!(from = ?from, to = ?to, km, "distance");
    println!("{km:.6}");
    Ok(())
}

fn check(fence_path: &Path, fix: Coordinate) -> Result<()> {
    let fence = load_fence(fence_path)?;
    let verdict = evaluate_fix(fix, Some(&fence));
    tracing::info!(
        fence = %fence_path.display(),
        active = fence.is_active,
        accepted = verdict.is_accepted(),
        "check"
    );
    println!("{}", serde_json::to_string_pretty(&verdict)?);
    Ok(())
}

fn run_batch(fence_path: &Path, input: &Path, out: &Path) -> Result<()> {
    let fence = load_fence(fence_path)?;
    tracing::info!(
        fence = %fence_path.display(),
        input = %input.display(),
        out = %out.display(),
        "batch"
    );
    let audit = batch::audit_csv(input, &fence)?;
    report::write_report(out, &audit)?;
    tracing::info!(
        rows = audit.totals.rows,
        accepted = audit.totals.accepted,
        outside_fence = audit.totals.outside_fence,
        invalid = audit.totals.invalid,
        "batch_done"
    );
    Ok(())
}

/// Read one fence in its stored JSON form (`isActive`, `coordinates`).
fn load_fence(path: &Path) -> Result<GeoFence> {
    let raw = std::fs::read(path).with_context(|| format!("reading fence {}", path.display()))?;
    let fence: GeoFence = serde_json::from_slice(&raw)
        .with_context(|| format!("parsing fence {}", path.display()))?;
    if fence.is_active && fence.coordinates.len() < 3 {
        tracing::warn!(
            fence = %path.display(),
            vertices = fence.coordinates.len(),
            "active fence encloses no area; every fix will be outside"
        );
    }
    Ok(fence)
}

/// Parse `lat,lon` and reject out-of-range values.
fn parse_coordinate(s: &str) -> Result<Coordinate, String> {
    let (lat, lon) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `lat,lon`, got `{s}`"))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|e| format!("bad latitude `{lat}`: {e}"))?;
    let lon: f64 = lon
        .trim()
        .parse()
        .map_err(|e| format!("bad longitude `{lon}`: {e}"))?;
    Coordinate::try_new(lat, lon).map_err(|e| e.to_string())
}
