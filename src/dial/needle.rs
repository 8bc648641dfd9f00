//! Needle positioning
//!
//! A dial always carries a primary needle whose angle is snapped to the
//! center of one of the dial's segments - needle angles are never
//! free-floating. The optional secondary needle mirrors the primary at
//! +180 degrees and is rendered only when explicitly enabled.

use serde::{Deserialize, Serialize};

use super::layout::{angle_for_index, nearest_index};

/// Shortest needle, in percent of dial radius
pub const MIN_LENGTH: f32 = 30.0;
/// Longest needle, in percent of dial radius
pub const MAX_LENGTH: f32 = 95.0;

/// Default primary needle length
pub const DEFAULT_PRIMARY_LENGTH: f32 = 80.0;
/// Default secondary needle length
pub const DEFAULT_SECONDARY_LENGTH: f32 = 55.0;

/// Clamp a needle length into the design range
pub fn clamp_length(length: f32) -> f32 {
    if !length.is_finite() {
        return DEFAULT_PRIMARY_LENGTH;
    }
    length.clamp(MIN_LENGTH, MAX_LENGTH)
}

/// Needle configuration for one face's dial
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeedleConfig {
    /// Angle of the primary needle in degrees. Invariant: always equals
    /// the center angle of an existing segment.
    pub primary_angle: f32,
    /// Primary needle length in percent of dial radius
    pub primary_length: f32,
    /// Whether the mirrored secondary needle is shown
    pub secondary_enabled: bool,
    /// Secondary needle length in percent of dial radius
    pub secondary_length: f32,
}

impl Default for NeedleConfig {
    fn default() -> Self {
        Self {
            // Segment 1 of any count sits at the top of the dial
            primary_angle: angle_for_index(0, 1),
            primary_length: DEFAULT_PRIMARY_LENGTH,
            secondary_enabled: false,
            secondary_length: DEFAULT_SECONDARY_LENGTH,
        }
    }
}

impl NeedleConfig {
    /// Point the primary needle at the center of segment `index` on a
    /// dial of `count` segments
    pub fn point_at(&mut self, index: usize, count: usize) {
        self.primary_angle = angle_for_index(index.min(count.saturating_sub(1)), count);
    }

    /// Re-snap the needle after the segment count changed, keeping it
    /// on the nearest surviving segment center. Also repairs lengths
    /// that drifted out of range (e.g. from a hand-edited draft).
    pub fn resnap(&mut self, count: usize) {
        let index = nearest_index(self.primary_angle, count);
        self.primary_angle = angle_for_index(index, count);
        self.primary_length = clamp_length(self.primary_length);
        self.secondary_length = clamp_length(self.secondary_length);
    }

    /// Angle of the mirrored secondary needle
    pub fn secondary_angle(&self) -> f32 {
        self.primary_angle + 180.0
    }

    /// Set the primary needle length, clamped to the design range
    pub fn set_primary_length(&mut self, length: f32) {
        self.primary_length = clamp_length(length);
    }

    /// Set the secondary needle length, clamped to the design range
    pub fn set_secondary_length(&mut self, length: f32) {
        self.secondary_length = clamp_length(length);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dial::layout::circular_distance;

    #[test]
    fn test_point_at_segment_center() {
        let mut needle = NeedleConfig::default();
        needle.point_at(2, 8);
        assert!((needle.primary_angle - angle_for_index(2, 8)).abs() < 0.001);
        // Out-of-range index clamps to the last segment
        needle.point_at(20, 4);
        assert!((needle.primary_angle - angle_for_index(3, 4)).abs() < 0.001);
    }

    #[test]
    fn test_resnap_lands_on_a_center() {
        // Point at segment 5 of 12, then shrink the dial to 4 segments:
        // the needle must land exactly on one of the 4 surviving centers.
        let mut needle = NeedleConfig::default();
        needle.point_at(4, 12);
        needle.resnap(4);
        let on_center = (0..4).any(|i| (needle.primary_angle - angle_for_index(i, 4)).abs() < 0.001);
        assert!(on_center, "angle {} is not a segment center", needle.primary_angle);
    }

    #[test]
    fn test_resnap_repairs_lengths() {
        let mut needle = NeedleConfig {
            primary_angle: -90.0,
            primary_length: 500.0,
            secondary_enabled: true,
            secondary_length: f32::NAN,
        };
        needle.resnap(6);
        assert!((needle.primary_length - MAX_LENGTH).abs() < 0.001);
        assert!((needle.secondary_length - DEFAULT_PRIMARY_LENGTH).abs() < 0.001);
    }

    #[test]
    fn test_secondary_is_mirrored() {
        let mut needle = NeedleConfig::default();
        needle.point_at(1, 6);
        let dist = circular_distance(needle.primary_angle, needle.secondary_angle());
        assert!((dist - 180.0).abs() < 0.001);
    }

    #[test]
    fn test_length_clamping() {
        assert!((clamp_length(10.0) - MIN_LENGTH).abs() < 0.001);
        assert!((clamp_length(99.9) - MAX_LENGTH).abs() < 0.001);
        assert!((clamp_length(60.0) - 60.0).abs() < 0.001);
    }
}
