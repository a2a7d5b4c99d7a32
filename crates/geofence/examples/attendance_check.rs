//! Walk a surveyor's fixes across a site fence and print each verdict.
//!
//! Usage:
//!   cargo run -p geofence --example attendance_check
//!   cargo run -p geofence --example attendance_check -- inactive

use geofence::prelude::*;

fn main() {
    let active = std::env::args().nth(1).as_deref() != Some("inactive");
    let site = GeoFence::new(
        active,
        vec![
            Coordinate::new(12.9716, 77.5946),
            Coordinate::new(12.9716, 77.5966),
            Coordinate::new(12.9736, 77.5966),
            Coordinate::new(12.9736, 77.5946),
        ],
    );
    let fixes = [
        Coordinate::new(12.9726, 77.5956),
        Coordinate::new(12.9740, 77.5956),
        Coordinate::new(12.9800, 77.6100),
        Coordinate::new(120.0, 77.5956),
    ];
    println!("fence active: {active}");
    for fix in fixes {
        let verdict = evaluate_fix(fix, Some(&site));
        match verdict.distance_km() {
            Some(d) => println!(
                "({:.4}, {:.4}) -> {:?} [{:.3} km from centre]",
                fix.latitude, fix.longitude, verdict, d
            ),
            None => println!("({:.4}, {:.4}) -> {:?}", fix.latitude, fix.longitude, verdict),
        }
    }
}
