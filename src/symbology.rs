use crate::constants::{RADIUS_EXPONENT, RADIUS_FLOOR, RADIUS_MAGNITUDE_OFFSET, RADIUS_SCALE};

/// Depth buckets, deepest first: (lower bound exclusive, color).
const DEPTH_BUCKETS: [(f64, &str); 5] = [
    (90.0, "#800026"),
    (70.0, "#BD0026"),
    (50.0, "#E31A1C"),
    (30.0, "#FC4E2A"),
    (10.0, "#FD8D3C"),
];

/// Color for depths at or below the shallowest threshold.
pub const SHALLOW_COLOR: &str = "#FEB24C";

/// Every color `depth_color` can return, from deepest to shallowest.
pub const DEPTH_PALETTE: [&str; 6] = [
    DEPTH_BUCKETS[0].1,
    DEPTH_BUCKETS[1].1,
    DEPTH_BUCKETS[2].1,
    DEPTH_BUCKETS[3].1,
    DEPTH_BUCKETS[4].1,
    SHALLOW_COLOR,
];

/// Maps an earthquake depth to its marker color.
///
/// The highest threshold that the depth strictly exceeds wins. Anything
/// at or below 10, including negative depths and NaN, gets the shallow color.
pub fn depth_color(depth: f64) -> &'static str {
    DEPTH_BUCKETS
        .iter()
        .find(|(threshold, _)| depth > *threshold)
        .map(|(_, color)| *color)
        .unwrap_or(SHALLOW_COLOR)
}

/// Circle radius in meters for a magnitude.
///
/// `max((mag - 3)^1.8, 0.1) * 50000`. The base is clamped at zero first:
/// a negative base raised to 1.8 has no real value, so every magnitude at
/// or below 3 (and NaN) lands on the floor radius of 5000.
pub fn magnitude_radius(magnitude: f64) -> f64 {
    let base = (magnitude - RADIUS_MAGNITUDE_OFFSET).max(0.0);
    base.powf(RADIUS_EXPONENT).max(RADIUS_FLOOR) * RADIUS_SCALE
}
