//! Attendance fix verdicts.
//!
//! Order of checks: range validation first, then the fence (if any). The
//! reported distance is measured to the fence centroid and is informational
//! only; containment alone decides acceptance.

use serde::Serialize;

use crate::fence::is_within_geo_fence;
use crate::types::{is_valid_coordinate, Coordinate, GeoFence};

/// Outcome of checking one reported GPS fix.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Verdict {
    /// Latitude or longitude out of range (or NaN).
    InvalidCoordinate,
    Accepted { distance_km: Option<f64> },
    OutsideFence { distance_km: Option<f64> },
}

impl Verdict {
    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted { .. })
    }

    pub fn distance_km(&self) -> Option<f64> {
        match *self {
            Verdict::Accepted { distance_km } | Verdict::OutsideFence { distance_km } => {
                distance_km
            }
            Verdict::InvalidCoordinate => None,
        }
    }
}

/// Evaluate `fix` against the fence configured for the surveyor's location.
///
/// `None` means no fence is configured; the fix is accepted once it is valid.
pub fn evaluate_fix(fix: Coordinate, fence: Option<&GeoFence>) -> Verdict {
    if !is_valid_coordinate(fix) {
        return Verdict::InvalidCoordinate;
    }
    let Some(fence) = fence else {
        return Verdict::Accepted { distance_km: None };
    };
    let distance_km = fence.centroid().map(|c| fix.distance_to(c));
    if is_within_geo_fence(fix, fence) {
        Verdict::Accepted { distance_km }
    } else {
        Verdict::OutsideFence { distance_km }
    }
}
