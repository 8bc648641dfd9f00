//! Face data model
//!
//! A cube has exactly six faces. Each face owns its segments (no
//! cross-face sharing) and its needle configuration. Text fields use
//! empty strings for "absent" so a draft round-trips without nested
//! options; emptiness is what the status derivation checks anyway.

use serde::{Deserialize, Serialize};

use crate::dial::{self, NeedleConfig};

/// A cube always has exactly this many faces
pub const FACE_COUNT: usize = 6;

/// Segment count for a factory-default face
pub const DEFAULT_SEGMENT_COUNT: usize = 6;

/// Kind of media attached to a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    Photo,
    Video,
    File,
}

/// One media attachment. Immutable once attached: edits replace the
/// whole record, they never patch it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Media {
    pub kind: MediaKind,
    pub url: String,
    pub filename: Option<String>,
}

/// One addressable content slot on a face's dial.
/// Segment ids are 1-based and contiguous within their face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub notes: String,
    pub media: Vec<Media>,
}

impl Segment {
    /// Create a content-empty segment with the given 1-based id
    pub fn new(id: u32) -> Self {
        Self {
            id,
            title: String::new(),
            description: String::new(),
            notes: String::new(),
            media: Vec::new(),
        }
    }
}

/// Partial update for a segment. `None` fields are left untouched;
/// text fields clear by patching in an empty string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub media: Option<Vec<Media>>,
}

impl SegmentPatch {
    pub fn apply(&self, segment: &mut Segment) {
        if let Some(title) = &self.title {
            segment.title = title.clone();
        }
        if let Some(description) = &self.description {
            segment.description = description.clone();
        }
        if let Some(notes) = &self.notes {
            segment.notes = notes.clone();
        }
        if let Some(media) = &self.media {
            segment.media = media.clone();
        }
    }
}

/// One face of the cube: title, notes, owned segments, needle config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Face {
    /// Face id, 1..=6
    pub id: u8,
    pub title: String,
    pub notes: String,
    pub segments: Vec<Segment>,
    pub needle: NeedleConfig,
}

impl Face {
    /// Factory defaults: content-empty segments, needle at segment 1
    pub fn with_defaults(id: u8) -> Self {
        let segments = (1..=DEFAULT_SEGMENT_COUNT as u32).map(Segment::new).collect();
        let mut needle = NeedleConfig::default();
        needle.point_at(0, DEFAULT_SEGMENT_COUNT);
        Self {
            id,
            title: format!("Face {}", id),
            notes: String::new(),
            segments,
            needle,
        }
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn segment(&self, id: u32) -> Option<&Segment> {
        self.segments.iter().find(|s| s.id == id)
    }

    pub fn segment_mut(&mut self, id: u32) -> Option<&mut Segment> {
        self.segments.iter_mut().find(|s| s.id == id)
    }

    /// Id of the first segment. A normalized face always has at least
    /// one segment, so this is `None` only for un-normalized input.
    pub fn first_segment_id(&self) -> Option<u32> {
        self.segments.first().map(|s| s.id)
    }

    /// Change the segment count, clamped to `[1, 12]`. Surviving
    /// segments keep their content; new segments start empty. The
    /// needle re-snaps to the nearest surviving center. Returns the
    /// count actually applied.
    pub fn set_segment_count(&mut self, count: usize) -> usize {
        let count = dial::clamp_count(count);
        self.segments.truncate(count);
        while self.segments.len() < count {
            let id = self.segments.len() as u32 + 1;
            self.segments.push(Segment::new(id));
        }
        self.needle.resnap(count);
        count
    }

    /// Repair a face loaded from external input: clamp the segment
    /// count, rewrite ids to be 1-based and contiguous, and snap the
    /// needle back onto a segment center.
    pub fn normalize(&mut self) {
        let count = dial::clamp_count(self.segments.len());
        self.segments.truncate(count);
        while self.segments.len() < count {
            self.segments.push(Segment::new(0));
        }
        for (i, segment) in self.segments.iter_mut().enumerate() {
            segment.id = i as u32 + 1;
        }
        if !self.needle.primary_angle.is_finite() {
            self.needle.primary_angle = dial::angle_for_index(0, count);
        }
        self.needle.resnap(count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dial::angle_for_index;

    #[test]
    fn test_default_face() {
        let face = Face::with_defaults(3);
        assert_eq!(face.id, 3);
        assert_eq!(face.segment_count(), DEFAULT_SEGMENT_COUNT);
        assert_eq!(face.first_segment_id(), Some(1));
        // Needle points at segment 1, which is the top of the dial
        assert!((face.needle.primary_angle - -90.0).abs() < 0.001);
    }

    #[test]
    fn test_set_segment_count_preserves_survivors() {
        let mut face = Face::with_defaults(1);
        face.segment_mut(2).unwrap().title = "kept".to_string();
        face.segment_mut(5).unwrap().title = "dropped".to_string();

        assert_eq!(face.set_segment_count(3), 3);
        assert_eq!(face.segment(2).unwrap().title, "kept");
        assert!(face.segment(5).is_none());

        // Growing back adds empty segments
        assert_eq!(face.set_segment_count(8), 8);
        assert_eq!(face.segment(5).unwrap().title, "");
    }

    #[test]
    fn test_set_segment_count_clamps() {
        let mut face = Face::with_defaults(1);
        assert_eq!(face.set_segment_count(0), 1);
        assert_eq!(face.segment_count(), 1);
        assert_eq!(face.set_segment_count(50), 12);
        assert_eq!(face.segment_count(), 12);
    }

    #[test]
    fn test_count_change_resnaps_needle() {
        let mut face = Face::with_defaults(1);
        face.set_segment_count(12);
        face.needle.point_at(7, 12);
        face.set_segment_count(5);
        let count = face.segment_count();
        let on_center =
            (0..count).any(|i| (face.needle.primary_angle - angle_for_index(i, count)).abs() < 0.001);
        assert!(on_center);
    }

    #[test]
    fn test_patch_merges() {
        let mut seg = Segment::new(1);
        seg.title = "old".to_string();
        seg.notes = "keep me".to_string();

        let patch = SegmentPatch {
            title: Some("new".to_string()),
            description: Some("added".to_string()),
            ..Default::default()
        };
        patch.apply(&mut seg);
        assert_eq!(seg.title, "new");
        assert_eq!(seg.description, "added");
        assert_eq!(seg.notes, "keep me");
    }

    #[test]
    fn test_normalize_repairs_ids_and_needle() {
        let mut face = Face::with_defaults(1);
        face.segments[0].id = 99;
        face.needle.primary_angle = f32::NAN;
        face.normalize();
        assert_eq!(face.segments[0].id, 1);
        assert!(face.needle.primary_angle.is_finite());
    }
}
