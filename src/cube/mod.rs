//! Cube module - data model and interaction state
//!
//! `CubeState` composes the face registry, the orientation controller
//! and the detail view-mode record, and owns the transition rules that
//! cross component boundaries (navigation closes the flip, a flipped
//! face blocks dragging, count changes re-validate the selection).

mod detail;
mod face;
mod orientation;
mod registry;

pub use detail::DetailState;
pub use face::{Face, Media, MediaKind, Segment, SegmentPatch, FACE_COUNT};
pub use orientation::{Orientation, OrientationController};
pub use registry::{FaceChange, FaceRegistry};

/// The whole widget state: six faces, one orientation, one view-mode
/// record
pub struct CubeState {
    pub registry: FaceRegistry,
    pub orientation: OrientationController,
    pub detail: DetailState,
}

impl Default for CubeState {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeState {
    pub fn new() -> Self {
        Self {
            registry: FaceRegistry::with_defaults(),
            orientation: OrientationController::new(),
            detail: DetailState::new(),
        }
    }

    /// Seed from host-supplied face content (see `FaceRegistry::from_content`)
    pub fn from_content(content: &[Face]) -> Self {
        Self {
            registry: FaceRegistry::from_content(content),
            orientation: OrientationController::new(),
            detail: DetailState::new(),
        }
    }

    /// The derived active face index (0-based)
    pub fn active_face_index(&self) -> usize {
        self.orientation.active_face()
    }

    pub fn active_face(&self) -> &Face {
        self.registry.face_by_index(self.active_face_index())
    }

    /// The face currently flipped open, if any
    pub fn flipped_face(&self) -> Option<&Face> {
        self.detail
            .flipped_face()
            .map(|i| self.registry.face_by_index(i))
    }

    // --- pointer gestures -------------------------------------------------

    /// Start a drag gesture. Blocked while a face is flipped open: the
    /// detail view owns the pointer in that mode.
    pub fn begin_drag(&mut self) {
        if self.detail.is_flipped() {
            return;
        }
        self.orientation.begin_drag();
    }

    pub fn update_drag(&mut self, dx: f32, dy: f32) {
        self.orientation.update_drag(dx, dy);
    }

    /// End the drag and snap to the nearest face
    pub fn end_drag(&mut self) -> usize {
        self.orientation.end_drag()
    }

    /// Pointer left the widget while dragging: treated exactly like a
    /// release so the controller can't get stuck in Dragging.
    pub fn pointer_leave(&mut self) {
        if self.orientation.is_dragging() {
            self.orientation.end_drag();
        }
    }

    // --- navigation and view modes ----------------------------------------

    /// Step to the previous/next face. Only one interaction mode is
    /// active per face change: any open flip is closed first.
    pub fn navigate(&mut self, direction: i32) -> usize {
        self.detail.close_detail();
        self.orientation.navigate(direction)
    }

    pub fn open_detail(&mut self, face_index: usize) {
        let clamped = face_index.min(FACE_COUNT - 1);
        self.detail
            .open_detail(clamped, self.registry.face_by_index(clamped));
    }

    pub fn close_detail(&mut self) {
        self.detail.close_detail();
    }

    pub fn select_segment(&mut self, segment_id: u32) {
        if let Some(index) = self.detail.flipped_face() {
            let face = self.registry.face_by_index(index);
            self.detail.select_segment(segment_id, face);
        }
    }

    pub fn open_full_screen(&mut self, face_index: usize) {
        self.detail.open_full_screen(face_index);
    }

    pub fn close_full_screen(&mut self) {
        self.detail.close_full_screen();
    }

    // --- edits that cross into view state ---------------------------------

    /// Change a face's segment count and re-validate any selection that
    /// pointed at a segment the change removed
    pub fn set_segment_count(&mut self, face_id: u8, count: usize) -> usize {
        let applied = self.registry.set_segment_count(face_id, count);
        self.revalidate_selection(face_id);
        applied
    }

    /// Reset a face to factory defaults
    pub fn reset_face(&mut self, face_id: u8) {
        self.registry.reset_face(face_id);
        self.revalidate_selection(face_id);
    }

    fn revalidate_selection(&mut self, face_id: u8) {
        let face = self.registry.face(face_id);
        let index = face.id as usize - 1;
        if self.detail.flipped_face() == Some(index) {
            let face = self.registry.face_by_index(index);
            self.detail.clamp_selection(face);
        }
    }
}
