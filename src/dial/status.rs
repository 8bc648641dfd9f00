//! Segment completion status
//!
//! Derived from segment content on every query - never cached, so it
//! can't go stale when content changes.

use crate::cube::Segment;

/// Three-state completion indicator for one segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentStatus {
    /// No content at all (or content that doesn't count toward completion)
    Empty,
    /// Exactly one of media / notes / description is present
    InProgress,
    /// Media plus at least one of notes / description
    Complete,
}

/// Compute the completion status of a segment from its current content
pub fn compute_status(segment: &Segment) -> SegmentStatus {
    let has_media = !segment.media.is_empty();
    let has_notes = !segment.notes.is_empty();
    let has_description = !segment.description.is_empty();

    if has_media && (has_notes || has_description) {
        SegmentStatus::Complete
    } else if (has_media as u8 + has_notes as u8 + has_description as u8) == 1 {
        SegmentStatus::InProgress
    } else {
        SegmentStatus::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::{Media, MediaKind, Segment};

    fn photo() -> Media {
        Media {
            kind: MediaKind::Photo,
            url: "https://example.com/p.jpg".to_string(),
            filename: None,
        }
    }

    #[test]
    fn test_status_transitions() {
        let mut seg = Segment::new(1);
        assert_eq!(compute_status(&seg), SegmentStatus::Empty);

        // Add one photo: in progress
        seg.media.push(photo());
        assert_eq!(compute_status(&seg), SegmentStatus::InProgress);

        // Also add notes: complete
        seg.notes = "remember this".to_string();
        assert_eq!(compute_status(&seg), SegmentStatus::Complete);

        // Remove notes: back to in progress
        seg.notes.clear();
        assert_eq!(compute_status(&seg), SegmentStatus::InProgress);
    }

    #[test]
    fn test_text_only_segment() {
        let mut seg = Segment::new(1);
        seg.description = "just a description".to_string();
        assert_eq!(compute_status(&seg), SegmentStatus::InProgress);

        // Notes and description without media is neither complete nor
        // exactly-one, so it resolves to empty
        seg.notes = "and notes".to_string();
        assert_eq!(compute_status(&seg), SegmentStatus::Empty);
    }

    #[test]
    fn test_media_with_description_is_complete() {
        let mut seg = Segment::new(1);
        seg.media.push(photo());
        seg.description = "what this is".to_string();
        assert_eq!(compute_status(&seg), SegmentStatus::Complete);
    }
}
