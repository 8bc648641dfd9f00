//! Cube orientation - continuous drag state and canonical presets
//!
//! The drag produces a continuous (pitch, yaw) orientation; the
//! discrete "active face" is never stored, it is always derived as the
//! nearest canonical preset. That keeps the two layers from ever
//! desyncing. Drag updates are computed relative to the orientation at
//! drag start, not accumulated per move event, so fractional rounding
//! can't drift.

use crate::dial::circular_distance;

/// Pitch is clamped so the cube can't gimbal past vertical
pub const PITCH_LIMIT: f32 = 88.0;

/// Pointer-delta to degrees factor
pub const DRAG_SENSITIVITY: f32 = 0.4;

/// A continuous cube orientation in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    pub pitch: f32,
    pub yaw: f32,
}

impl Orientation {
    pub const fn new(pitch: f32, yaw: f32) -> Self {
        Self { pitch, yaw }
    }
}

/// The six canonical orientations, one per face. Order defines cyclic
/// adjacency for prev/next navigation: top, front, right, back, left,
/// bottom. Preset yaws are stored verbatim (the snap comparison is
/// wrap-aware, so -270 and 90 are the same direction).
pub const PRESETS: [Orientation; 6] = [
    Orientation::new(-90.0, 0.0),
    Orientation::new(0.0, 0.0),
    Orientation::new(0.0, -90.0),
    Orientation::new(0.0, -180.0),
    Orientation::new(0.0, -270.0),
    Orientation::new(90.0, 0.0),
];

/// Preset the widget starts on (front)
pub const DEFAULT_PRESET: usize = 1;

/// Normalize a yaw into `(-180, 180]`. Non-finite input resolves to 0.
pub fn normalize_yaw(yaw: f32) -> f32 {
    if !yaw.is_finite() {
        return 0.0;
    }
    let wrapped = yaw.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Index of the preset nearest to an orientation, by squared pitch
/// distance plus squared wrap-aware yaw distance. Ties resolve to the
/// lowest index; a non-finite orientation resolves to the front face.
pub fn nearest_preset(orientation: Orientation) -> usize {
    if !orientation.pitch.is_finite() || !orientation.yaw.is_finite() {
        return DEFAULT_PRESET;
    }
    let mut best = 0;
    let mut best_score = f32::INFINITY;
    for (i, preset) in PRESETS.iter().enumerate() {
        let dp = orientation.pitch - preset.pitch;
        let dy = circular_distance(orientation.yaw, preset.yaw);
        let score = dp * dp + dy * dy;
        if score < best_score {
            best = i;
            best_score = score;
        }
    }
    best
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DragPhase {
    Idle,
    Dragging { origin: Orientation },
}

/// Owns the continuous orientation and the one-drag-at-a-time state
/// machine. Exactly one drag may be active; a second `begin_drag` while
/// dragging is ignored.
pub struct OrientationController {
    orientation: Orientation,
    phase: DragPhase,
}

impl Default for OrientationController {
    fn default() -> Self {
        Self::new()
    }
}

impl OrientationController {
    pub fn new() -> Self {
        Self {
            orientation: PRESETS[DEFAULT_PRESET],
            phase: DragPhase::Idle,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The discrete active face, derived from the continuous state
    pub fn active_face(&self) -> usize {
        nearest_preset(self.orientation)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Capture the pointer: records the current orientation as the
    /// drag origin for all following move deltas
    pub fn begin_drag(&mut self) {
        if self.phase == DragPhase::Idle {
            self.phase = DragPhase::Dragging {
                origin: self.orientation,
            };
        }
    }

    /// Apply a pointer delta relative to the drag origin. Ignored when
    /// no drag is active. Dragging right turns the cube toward the
    /// right face (yaw decreases), dragging down tilts toward the top.
    pub fn update_drag(&mut self, dx: f32, dy: f32) {
        if let DragPhase::Dragging { origin } = self.phase {
            self.orientation.pitch =
                (origin.pitch - dy * DRAG_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
            self.orientation.yaw = normalize_yaw(origin.yaw - dx * DRAG_SENSITIVITY);
        }
    }

    /// Release the pointer: hard-snap to the nearest preset and return
    /// its index. Idempotent when the orientation is already canonical.
    pub fn end_drag(&mut self) -> usize {
        self.phase = DragPhase::Idle;
        let index = nearest_preset(self.orientation);
        self.orientation = PRESETS[index];
        index
    }

    /// Step to the previous/next face in cyclic preset order. Ignores
    /// any in-flight drag. Returns the new active face index.
    pub fn navigate(&mut self, direction: i32) -> usize {
        self.phase = DragPhase::Idle;
        let index = (self.active_face() as i32 + direction).rem_euclid(6) as usize;
        self.orientation = PRESETS[index];
        index
    }

    /// Jump straight to a face's preset (used when seeding from a draft
    /// or host-driven face selection)
    pub fn snap_to(&mut self, index: usize) {
        self.phase = DragPhase::Idle;
        self.orientation = PRESETS[index.min(PRESETS.len() - 1)];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_orientation_eq(a: Orientation, b: Orientation) {
        assert!((a.pitch - b.pitch).abs() < 0.001, "pitch {} vs {}", a.pitch, b.pitch);
        assert!((a.yaw - b.yaw).abs() < 0.001, "yaw {} vs {}", a.yaw, b.yaw);
    }

    #[test]
    fn test_normalize_yaw_range() {
        assert!((normalize_yaw(190.0) - -170.0).abs() < 0.001);
        assert!((normalize_yaw(-190.0) - 170.0).abs() < 0.001);
        // 180 stays 180, -180 maps onto 180: the range is (-180, 180]
        assert!((normalize_yaw(180.0) - 180.0).abs() < 0.001);
        assert!((normalize_yaw(-180.0) - 180.0).abs() < 0.001);
        assert!(normalize_yaw(720.0).abs() < 0.001);
        assert!(normalize_yaw(f32::NAN).abs() < 0.001);
    }

    #[test]
    fn test_starts_on_front() {
        let ctl = OrientationController::new();
        assert_eq!(ctl.active_face(), 1);
    }

    #[test]
    fn test_drag_is_origin_relative() {
        let mut ctl = OrientationController::new();
        ctl.begin_drag();
        ctl.update_drag(100.0, 0.0);
        assert!((ctl.orientation().yaw - -40.0).abs() < 0.001);
        // Deltas are from the origin: a smaller delta moves back
        ctl.update_drag(50.0, 0.0);
        assert!((ctl.orientation().yaw - -20.0).abs() < 0.001);
        // Pitch moves opposite to dy and clamps
        ctl.update_drag(0.0, 1000.0);
        assert!((ctl.orientation().pitch - -PITCH_LIMIT).abs() < 0.001);
    }

    #[test]
    fn test_release_snaps_at_midpoint() {
        // From the front face, yaw -40 has not crossed the 45-degree
        // midpoint toward the right face: release stays on front.
        let mut ctl = OrientationController::new();
        ctl.begin_drag();
        ctl.update_drag(100.0, 0.0);
        assert_eq!(ctl.end_drag(), 1);
        assert_orientation_eq(ctl.orientation(), PRESETS[1]);

        // Continuing the gesture past the midpoint (total dx 200 ->
        // yaw -80) snaps to the right face.
        ctl.begin_drag();
        ctl.update_drag(100.0, 0.0);
        ctl.update_drag(200.0, 0.0);
        assert_eq!(ctl.end_drag(), 2);
        assert_orientation_eq(ctl.orientation(), PRESETS[2]);
    }

    #[test]
    fn test_rightward_drag_heads_toward_right_face() {
        // A long rightward drag must walk front -> right, never front
        // -> left: at yaw -80 the right preset (-90) wins over the
        // left preset (-270, i.e. 90 the other way around).
        let mut ctl = OrientationController::new();
        ctl.begin_drag();
        ctl.update_drag(200.0, 0.0);
        assert!((ctl.orientation().yaw - -80.0).abs() < 0.001);
        assert_eq!(nearest_preset(ctl.orientation()), 2);
        assert_eq!(ctl.end_drag(), 2);
    }

    #[test]
    fn test_snap_is_idempotent() {
        for i in 0..PRESETS.len() {
            let mut ctl = OrientationController::new();
            ctl.snap_to(i);
            ctl.begin_drag();
            ctl.update_drag(0.0, 0.0);
            assert_eq!(ctl.end_drag(), i);
            assert_orientation_eq(ctl.orientation(), PRESETS[i]);
        }
    }

    #[test]
    fn test_cyclic_navigation_round_trip() {
        for start in 0..6 {
            let mut ctl = OrientationController::new();
            ctl.snap_to(start);
            for _ in 0..6 {
                ctl.navigate(1);
            }
            assert_eq!(ctl.active_face(), start);
            assert_orientation_eq(ctl.orientation(), PRESETS[start]);

            for _ in 0..6 {
                ctl.navigate(-1);
            }
            assert_eq!(ctl.active_face(), start);
        }
    }

    #[test]
    fn test_navigate_wraps_both_ways() {
        let mut ctl = OrientationController::new();
        ctl.snap_to(0);
        assert_eq!(ctl.navigate(-1), 5);
        assert_eq!(ctl.navigate(1), 0);
    }

    #[test]
    fn test_navigate_ignores_active_drag() {
        let mut ctl = OrientationController::new();
        ctl.begin_drag();
        ctl.update_drag(30.0, 10.0);
        assert_eq!(ctl.navigate(1), 2);
        assert!(!ctl.is_dragging());
        assert_orientation_eq(ctl.orientation(), PRESETS[2]);
    }

    #[test]
    fn test_second_begin_drag_keeps_origin() {
        let mut ctl = OrientationController::new();
        ctl.begin_drag();
        ctl.update_drag(100.0, 0.0);
        // A stray second press must not re-anchor the gesture
        ctl.begin_drag();
        ctl.update_drag(100.0, 0.0);
        assert!((ctl.orientation().yaw - -40.0).abs() < 0.001);
    }

    #[test]
    fn test_pitch_dominates_yaw_in_snap() {
        // At yaw 40 with level pitch the top preset loses on pitch
        // even though its yaw matches.
        let o = Orientation::new(0.0, 40.0);
        assert_eq!(nearest_preset(o), 1);
        let high = Orientation::new(-80.0, 40.0);
        assert_eq!(nearest_preset(high), 0);
    }

    #[test]
    fn test_nan_orientation_snaps_to_front() {
        assert_eq!(nearest_preset(Orientation::new(f32::NAN, 0.0)), DEFAULT_PRESET);
        let mut ctl = OrientationController::new();
        ctl.begin_drag();
        ctl.update_drag(f32::NAN, 0.0);
        assert_eq!(ctl.end_drag(), DEFAULT_PRESET);
    }
}
