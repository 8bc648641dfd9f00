//! Face detail view modes
//!
//! Flip (show a face's segment list in place of its front), full-screen
//! viewing, and segment selection live in one record with explicit
//! transition rules, so impossible combinations can't arise:
//! - at most one face is flipped at a time
//! - selection exists only while a face is flipped
//! - full-screen is orthogonal: flip and navigation leave it alone
//! - navigation closes the flip (handled in `CubeState`)

use super::face::{Face, FACE_COUNT};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailState {
    flipped_face: Option<usize>,
    full_screen_face: Option<usize>,
    selected_segment: Option<u32>,
}

impl DetailState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flipped_face(&self) -> Option<usize> {
        self.flipped_face
    }

    pub fn full_screen_face(&self) -> Option<usize> {
        self.full_screen_face
    }

    pub fn selected_segment(&self) -> Option<u32> {
        self.selected_segment
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped_face.is_some()
    }

    /// Flip a face open and select its first segment
    pub fn open_detail(&mut self, face_index: usize, face: &Face) {
        self.flipped_face = Some(face_index.min(FACE_COUNT - 1));
        self.selected_segment = face.first_segment_id();
    }

    /// Close the flip and drop the selection
    pub fn close_detail(&mut self) {
        self.flipped_face = None;
        self.selected_segment = None;
    }

    /// Select a segment on the open face. Ignored when no face is
    /// flipped; an id the face doesn't have falls back to the first
    /// segment instead of failing.
    pub fn select_segment(&mut self, segment_id: u32, face: &Face) {
        if self.flipped_face.is_none() {
            return;
        }
        self.selected_segment = if face.segment(segment_id).is_some() {
            Some(segment_id)
        } else {
            face.first_segment_id()
        };
    }

    /// Re-validate the selection after the face's segments changed
    /// (count change or reset): a stale id falls back to the first
    /// segment.
    pub fn clamp_selection(&mut self, face: &Face) {
        if let Some(id) = self.selected_segment {
            if face.segment(id).is_none() {
                self.selected_segment = face.first_segment_id();
            }
        }
    }

    pub fn open_full_screen(&mut self, face_index: usize) {
        self.full_screen_face = Some(face_index.min(FACE_COUNT - 1));
    }

    pub fn close_full_screen(&mut self) {
        self.full_screen_face = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_selects_first_segment() {
        let face = Face::with_defaults(1);
        let mut detail = DetailState::new();
        detail.open_detail(0, &face);
        assert_eq!(detail.flipped_face(), Some(0));
        assert_eq!(detail.selected_segment(), Some(1));

        detail.close_detail();
        assert_eq!(detail.flipped_face(), None);
        assert_eq!(detail.selected_segment(), None);
    }

    #[test]
    fn test_unknown_selection_falls_back_to_first() {
        let face = Face::with_defaults(1);
        let mut detail = DetailState::new();
        detail.open_detail(0, &face);
        detail.select_segment(4, &face);
        assert_eq!(detail.selected_segment(), Some(4));
        detail.select_segment(99, &face);
        assert_eq!(detail.selected_segment(), Some(1));
    }

    #[test]
    fn test_select_without_flip_is_ignored() {
        let face = Face::with_defaults(1);
        let mut detail = DetailState::new();
        detail.select_segment(3, &face);
        assert_eq!(detail.selected_segment(), None);
    }

    #[test]
    fn test_stale_selection_clamps_after_count_change() {
        let mut face = Face::with_defaults(1);
        let mut detail = DetailState::new();
        detail.open_detail(0, &face);
        detail.select_segment(6, &face);

        face.set_segment_count(3);
        detail.clamp_selection(&face);
        assert_eq!(detail.selected_segment(), Some(1));
    }

    #[test]
    fn test_full_screen_is_orthogonal() {
        let face = Face::with_defaults(1);
        let mut detail = DetailState::new();
        detail.open_full_screen(2);
        detail.open_detail(0, &face);
        assert_eq!(detail.full_screen_face(), Some(2));
        // Flip closing leaves full-screen alone; only the explicit
        // close action clears it
        detail.close_detail();
        assert_eq!(detail.full_screen_face(), Some(2));
        detail.close_full_screen();
        assert_eq!(detail.full_screen_face(), None);
    }

    #[test]
    fn test_face_index_clamps() {
        let face = Face::with_defaults(1);
        let mut detail = DetailState::new();
        detail.open_detail(99, &face);
        assert_eq!(detail.flipped_face(), Some(5));
    }
}
