//! Radial dial geometry
//!
//! Pure angle math shared by the two snapping scales: the 6-way cube
//! orientation snap and the N-way segment/needle snap. Angles are in
//! degrees. Segment 0 sits at the top of the dial (-90 degrees) and
//! indices proceed clockwise.

/// Minimum segments a dial can carry
pub const MIN_SEGMENTS: usize = 1;
/// Maximum segments a dial can carry
pub const MAX_SEGMENTS: usize = 12;

/// Clamp a requested segment count into the supported range.
/// Out-of-range counts are clamped, never rejected.
pub fn clamp_count(count: usize) -> usize {
    count.clamp(MIN_SEGMENTS, MAX_SEGMENTS)
}

/// Center angle of segment `index` on a dial of `count` segments
pub fn angle_for_index(index: usize, count: usize) -> f32 {
    let count = clamp_count(count);
    -90.0 + (360.0 / count as f32) * index as f32
}

/// Convert a dial angle to a `(top, left)` position in percent of the
/// dial box, at `radius` percent from the center
pub fn position_for_angle(angle_deg: f32, radius: f32) -> (f32, f32) {
    let rad = angle_deg.to_radians();
    (50.0 + rad.sin() * radius, 50.0 + rad.cos() * radius)
}

/// Shortest angular distance between two angles, always in `[0, 180]`.
/// Handles wrap-around: distance(350, 10) is 20, not 340.
pub fn circular_distance(a: f32, b: f32) -> f32 {
    ((a - b + 540.0).rem_euclid(360.0) - 180.0).abs()
}

/// Index of the segment whose center angle is closest to `angle`.
/// Ties resolve to the lowest index. A non-finite angle resolves to 0.
pub fn nearest_index(angle: f32, count: usize) -> usize {
    let count = clamp_count(count);
    if !angle.is_finite() {
        return 0;
    }
    let mut best = 0;
    let mut best_dist = f32::INFINITY;
    for i in 0..count {
        let dist = circular_distance(angle, angle_for_index(i, count));
        if dist < best_dist {
            best = i;
            best_dist = dist;
        }
    }
    best
}
