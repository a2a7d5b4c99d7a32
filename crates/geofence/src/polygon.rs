//! Point-in-polygon containment over GPS vertex rings.
//!
//! Convention
//! - Stored fences are ray cast with `x = latitude`, `y = longitude`. The axis
//!   choice is arbitrary but must stay fixed so existing fence data evaluates
//!   the same way.
//! - Even-odd rule. Points exactly on an edge or vertex get whatever the
//!   crossing test yields; no boundary policy is promised.

use nalgebra::Vector2;

use crate::types::Coordinate;

/// Does the ray from `p` towards +x cross the edge `vi`–`vj`?
#[inline]
fn crosses(p: Vector2<f64>, vi: Vector2<f64>, vj: Vector2<f64>) -> bool {
    (vi.y > p.y) != (vj.y > p.y) && p.x < (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x
}

/// Even-odd containment of `point` in `polygon`.
///
/// Each vertex is paired with its predecessor, the first with the last.
/// Fewer than three vertices always yields `false`.
pub fn is_point_in_polygon(point: Coordinate, polygon: &[Coordinate]) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    let p = point.as_xy();
    let mut inside = false;
    let mut prev = polygon[polygon.len() - 1].as_xy();
    for vertex in polygon {
        let cur = vertex.as_xy();
        if crosses(p, cur, prev) {
            inside = !inside;
        }
        prev = cur;
    }
    inside
}

/// Arithmetic mean of the vertices; `None` for an empty ring.
pub fn polygon_centroid(polygon: &[Coordinate]) -> Option<Coordinate> {
    if polygon.is_empty() {
        return None;
    }
    let sum = polygon
        .iter()
        .fold(Vector2::zeros(), |acc: Vector2<f64>, c| acc + c.as_xy());
    let mean = sum / polygon.len() as f64;
    Some(Coordinate::new(mean.x, mean.y))
}
