//! Face registry - per-face edit state
//!
//! Each face is addressed by its stable id (1..=6) and owns its own
//! edit state, so switching faces is a lookup, not a copy/reset dance.
//! Every mutation emits a change notification carrying the full
//! updated face; the caller drains these and hands them to whatever
//! persistence it uses (fire-and-forget from the registry's view).

use super::face::{Face, Media, SegmentPatch, FACE_COUNT};

/// Change notification carrying the complete updated face
#[derive(Debug, Clone)]
pub struct FaceChange {
    pub face_id: u8,
    pub face: Face,
}

pub struct FaceRegistry {
    faces: [Face; FACE_COUNT],
    events: Vec<FaceChange>,
}

impl FaceRegistry {
    /// Six factory-default faces
    pub fn with_defaults() -> Self {
        Self {
            faces: std::array::from_fn(|i| Face::with_defaults(i as u8 + 1)),
            events: Vec::new(),
        }
    }

    /// Build from initial content supplied by the host. Fewer than six
    /// faces are repeated cyclically to fill the cube; an empty list
    /// falls back to defaults. Every face is normalized on the way in.
    pub fn from_content(content: &[Face]) -> Self {
        if content.is_empty() {
            return Self::with_defaults();
        }
        let faces = std::array::from_fn(|i| {
            let mut face = content[i % content.len()].clone();
            face.id = i as u8 + 1;
            face.normalize();
            face
        });
        Self {
            faces,
            events: Vec::new(),
        }
    }

    /// Valid index for a face id, resolving out-of-range ids to the
    /// first face instead of failing
    fn index_of(face_id: u8) -> usize {
        if (1..=FACE_COUNT as u8).contains(&face_id) {
            face_id as usize - 1
        } else {
            0
        }
    }

    pub fn face(&self, face_id: u8) -> &Face {
        &self.faces[Self::index_of(face_id)]
    }

    /// Face by 0-based index (out of range resolves to the first face)
    pub fn face_by_index(&self, index: usize) -> &Face {
        &self.faces[index.min(FACE_COUNT - 1)]
    }

    pub fn faces(&self) -> &[Face; FACE_COUNT] {
        &self.faces
    }

    fn emit(&mut self, index: usize) {
        self.events.push(FaceChange {
            face_id: self.faces[index].id,
            face: self.faces[index].clone(),
        });
    }

    /// Drain pending change notifications
    pub fn take_events(&mut self) -> Vec<FaceChange> {
        std::mem::take(&mut self.events)
    }

    /// Change a face's segment count (clamped to `[1, 12]`, needle
    /// re-snapped). Returns the count actually applied.
    pub fn set_segment_count(&mut self, face_id: u8, count: usize) -> usize {
        let index = Self::index_of(face_id);
        let applied = self.faces[index].set_segment_count(count);
        self.emit(index);
        applied
    }

    /// Merge a partial update into one segment. An unknown segment id
    /// is a no-op (no event either).
    pub fn update_segment(&mut self, face_id: u8, segment_id: u32, patch: &SegmentPatch) {
        let index = Self::index_of(face_id);
        if let Some(segment) = self.faces[index].segment_mut(segment_id) {
            patch.apply(segment);
            self.emit(index);
        }
    }

    /// Append a fully-formed media record to a segment
    pub fn attach_media(&mut self, face_id: u8, segment_id: u32, media: Media) {
        let index = Self::index_of(face_id);
        if let Some(segment) = self.faces[index].segment_mut(segment_id) {
            segment.media.push(media);
            self.emit(index);
        }
    }

    /// Remove a media record by position within its segment
    pub fn remove_media(&mut self, face_id: u8, segment_id: u32, media_index: usize) {
        let index = Self::index_of(face_id);
        if let Some(segment) = self.faces[index].segment_mut(segment_id) {
            if media_index < segment.media.len() {
                segment.media.remove(media_index);
                self.emit(index);
            }
        }
    }

    pub fn set_face_title(&mut self, face_id: u8, title: String) {
        let index = Self::index_of(face_id);
        self.faces[index].title = title;
        self.emit(index);
    }

    pub fn set_face_notes(&mut self, face_id: u8, notes: String) {
        let index = Self::index_of(face_id);
        self.faces[index].notes = notes;
        self.emit(index);
    }

    /// Point the face's needle at a segment's center
    pub fn point_needle_at(&mut self, face_id: u8, segment_id: u32) {
        let index = Self::index_of(face_id);
        let face = &mut self.faces[index];
        if let Some(pos) = face.segments.iter().position(|s| s.id == segment_id) {
            face.needle.point_at(pos, face.segment_count());
            self.emit(index);
        }
    }

    pub fn set_secondary_enabled(&mut self, face_id: u8, enabled: bool) {
        let index = Self::index_of(face_id);
        self.faces[index].needle.secondary_enabled = enabled;
        self.emit(index);
    }

    pub fn set_primary_length(&mut self, face_id: u8, length: f32) {
        let index = Self::index_of(face_id);
        self.faces[index].needle.set_primary_length(length);
        self.emit(index);
    }

    pub fn set_secondary_length(&mut self, face_id: u8, length: f32) {
        let index = Self::index_of(face_id);
        self.faces[index].needle.set_secondary_length(length);
        self.emit(index);
    }

    /// Replace a face wholesale with factory defaults
    pub fn reset_face(&mut self, face_id: u8) {
        let index = Self::index_of(face_id);
        self.faces[index] = Face::with_defaults(index as u8 + 1);
        self.emit(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::face::{MediaKind, Segment};
    use crate::dial::angle_for_index;

    #[test]
    fn test_cyclic_fill_from_partial_content() {
        let mut a = Face::with_defaults(1);
        a.title = "A".to_string();
        let mut b = Face::with_defaults(2);
        b.title = "B".to_string();

        let reg = FaceRegistry::from_content(&[a, b]);
        let titles: Vec<&str> = reg.faces().iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, ["A", "B", "A", "B", "A", "B"]);
        // Ids are rewritten to match slots
        for (i, face) in reg.faces().iter().enumerate() {
            assert_eq!(face.id, i as u8 + 1);
        }
    }

    #[test]
    fn test_empty_content_falls_back_to_defaults() {
        let reg = FaceRegistry::from_content(&[]);
        assert_eq!(reg.face(1).segment_count(), 6);
    }

    #[test]
    fn test_unknown_segment_update_is_noop() {
        let mut reg = FaceRegistry::with_defaults();
        let patch = SegmentPatch {
            title: Some("x".to_string()),
            ..Default::default()
        };
        reg.update_segment(1, 99, &patch);
        assert!(reg.take_events().is_empty());
        assert!(reg.face(1).segments.iter().all(|s| s.title.is_empty()));
    }

    #[test]
    fn test_out_of_range_face_id_resolves_to_first() {
        let reg = FaceRegistry::with_defaults();
        assert_eq!(reg.face(0).id, 1);
        assert_eq!(reg.face(7).id, 1);
        assert_eq!(reg.face_by_index(99).id, 6);
    }

    #[test]
    fn test_events_carry_full_face() {
        let mut reg = FaceRegistry::with_defaults();
        let patch = SegmentPatch {
            notes: Some("note".to_string()),
            ..Default::default()
        };
        reg.update_segment(2, 1, &patch);
        let events = reg.take_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].face_id, 2);
        assert_eq!(events[0].face.segment(1).unwrap().notes, "note");
        // Drained
        assert!(reg.take_events().is_empty());
    }

    #[test]
    fn test_needle_snap_invariant_after_count_changes() {
        let mut reg = FaceRegistry::with_defaults();
        reg.point_needle_at(1, 4);
        for count in [12usize, 3, 7, 1, 12, 0, 50] {
            reg.set_segment_count(1, count);
            let face = reg.face(1);
            let n = face.segment_count();
            let on_center = (0..n)
                .any(|i| (face.needle.primary_angle - angle_for_index(i, n)).abs() < 0.001);
            assert!(on_center, "count {} left needle at {}", count, face.needle.primary_angle);
        }
    }

    #[test]
    fn test_reset_face_restores_defaults() {
        let mut reg = FaceRegistry::with_defaults();
        reg.set_face_title(3, "custom".to_string());
        reg.set_segment_count(3, 12);
        reg.attach_media(
            3,
            1,
            Media {
                kind: MediaKind::Photo,
                url: "u".to_string(),
                filename: None,
            },
        );
        reg.reset_face(3);
        assert_eq!(*reg.face(3), Face::with_defaults(3));
    }

    #[test]
    fn test_normalizes_hostile_content() {
        let face = Face {
            id: 42,
            title: "t".to_string(),
            notes: String::new(),
            segments: (0..30).map(|_| Segment::new(7)).collect(),
            needle: crate::dial::NeedleConfig {
                primary_angle: f32::NAN,
                primary_length: -5.0,
                secondary_enabled: false,
                secondary_length: 1000.0,
            },
        };
        let reg = FaceRegistry::from_content(&[face]);
        let f = reg.face(1);
        assert_eq!(f.segment_count(), 12);
        assert_eq!(f.first_segment_id(), Some(1));
        assert!(f.needle.primary_angle.is_finite());
        assert!(f.needle.primary_length >= 30.0 && f.needle.primary_length <= 95.0);
    }
}
