//! Draft persistence
//!
//! The cube's six faces are saved as a RON draft so a creator's work
//! survives restarts. Writing always brotli-compresses; reading
//! auto-detects compressed vs plain RON so hand-written drafts load
//! too. Loading is fail-open: a missing or malformed draft (or any
//! single bad face inside one) falls back to factory defaults for the
//! affected faces, with a log line and no error surfaced to the caller.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cube::{Face, FACE_COUNT};

/// Validation limits to prevent resource exhaustion from hostile drafts
pub mod limits {
    /// Maximum length for titles and notes
    pub const MAX_TEXT_LEN: usize = 4096;
    /// Maximum length for a media URL
    pub const MAX_URL_LEN: usize = 2048;
    /// Maximum media attachments per segment
    pub const MAX_MEDIA: usize = 64;
    /// Maximum segments accepted per face before clamping even starts
    pub const MAX_RAW_SEGMENTS: usize = 256;
}

/// Error type for draft loading/saving
#[derive(Debug)]
pub enum DraftError {
    Io(std::io::Error),
    Parse(ron::error::SpannedError),
    Serialize(ron::Error),
    Validation(String),
}

impl From<std::io::Error> for DraftError {
    fn from(e: std::io::Error) -> Self {
        DraftError::Io(e)
    }
}

impl From<ron::error::SpannedError> for DraftError {
    fn from(e: ron::error::SpannedError) -> Self {
        DraftError::Parse(e)
    }
}

impl From<ron::Error> for DraftError {
    fn from(e: ron::Error) -> Self {
        DraftError::Serialize(e)
    }
}

impl std::fmt::Display for DraftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DraftError::Io(e) => write!(f, "IO error: {}", e),
            DraftError::Parse(e) => write!(f, "Parse error: {}", e),
            DraftError::Serialize(e) => write!(f, "Serialize error: {}", e),
            DraftError::Validation(e) => write!(f, "Validation error: {}", e),
        }
    }
}

/// On-disk draft payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Draft {
    pub faces: Vec<Face>,
}

/// Validate one face from a draft. Clamping (counts, needle) happens in
/// `Face::normalize`; validation only rejects data that looks hostile
/// rather than merely stale.
fn validate_face(face: &Face) -> Result<(), String> {
    if face.title.len() > limits::MAX_TEXT_LEN || face.notes.len() > limits::MAX_TEXT_LEN {
        return Err(format!("face {}: text too long", face.id));
    }
    if face.segments.len() > limits::MAX_RAW_SEGMENTS {
        return Err(format!("face {}: {} segments", face.id, face.segments.len()));
    }
    for segment in &face.segments {
        if segment.title.len() > limits::MAX_TEXT_LEN
            || segment.description.len() > limits::MAX_TEXT_LEN
            || segment.notes.len() > limits::MAX_TEXT_LEN
        {
            return Err(format!("face {} segment {}: text too long", face.id, segment.id));
        }
        if segment.media.len() > limits::MAX_MEDIA {
            return Err(format!(
                "face {} segment {}: {} media entries",
                face.id,
                segment.id,
                segment.media.len()
            ));
        }
        for media in &segment.media {
            if media.url.len() > limits::MAX_URL_LEN {
                return Err(format!("face {} segment {}: url too long", face.id, segment.id));
            }
        }
    }
    Ok(())
}

/// Loads and saves the cube draft at a fixed path
pub struct DraftStore {
    path: PathBuf,
}

impl DraftStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the draft, silently falling back to factory defaults when
    /// it is missing or malformed. Individually bad faces default while
    /// the rest of the draft is kept.
    pub fn load(&self) -> [Face; FACE_COUNT] {
        let mut faces: [Face; FACE_COUNT] =
            std::array::from_fn(|i| Face::with_defaults(i as u8 + 1));

        let draft = match self.read_draft() {
            Ok(draft) => draft,
            Err(DraftError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                return faces;
            }
            Err(e) => {
                eprintln!("Draft {} unreadable ({}), using defaults", self.path.display(), e);
                return faces;
            }
        };

        for mut face in draft.faces {
            if !(1..=FACE_COUNT as u8).contains(&face.id) {
                eprintln!("Draft face id {} out of range, skipped", face.id);
                continue;
            }
            if let Err(e) = validate_face(&face) {
                eprintln!("Draft face rejected ({}), using defaults for it", e);
                continue;
            }
            face.normalize();
            let slot = face.id as usize - 1;
            faces[slot] = face;
        }
        faces
    }

    fn read_draft(&self) -> Result<Draft, DraftError> {
        let bytes = std::fs::read(&self.path)?;

        // RON drafts start with '(' or whitespace; brotli is binary
        let is_plain_ron = bytes
            .first()
            .map(|&b| b == b'(' || b.is_ascii_whitespace())
            .unwrap_or(false);

        let contents = if is_plain_ron {
            String::from_utf8(bytes).map_err(|e| {
                DraftError::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!("invalid UTF-8: {}", e),
                ))
            })?
        } else {
            let mut decompressed = Vec::new();
            brotli::BrotliDecompress(&mut Cursor::new(&bytes), &mut decompressed).map_err(|e| {
                DraftError::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!("brotli decompression failed: {}", e),
                ))
            })?;
            String::from_utf8(decompressed).map_err(|e| {
                DraftError::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!("invalid UTF-8 after decompression: {}", e),
                ))
            })?
        };

        Ok(ron::from_str(&contents)?)
    }

    /// Save all six faces as a compressed RON draft
    pub fn save(&self, faces: &[Face; FACE_COUNT]) -> Result<(), DraftError> {
        let draft = Draft {
            faces: faces.to_vec(),
        };
        let config = ron::ser::PrettyConfig::new().indentor("  ".to_string());
        let ron_string = ron::ser::to_string_pretty(&draft, config)?;

        let mut compressed = Vec::new();
        brotli::BrotliCompress(
            &mut Cursor::new(ron_string.as_bytes()),
            &mut compressed,
            &brotli::enc::BrotliEncoderParams {
                quality: 6,
                lgwin: 22,
                ..Default::default()
            },
        )
        .map_err(|e| {
            DraftError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("brotli compression failed: {}", e),
            ))
        })?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, &compressed)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> DraftStore {
        DraftStore::new(dir.path().join("cube_draft.ron"))
    }

    #[test]
    fn test_missing_draft_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let faces = store_in(&dir).load();
        assert_eq!(faces[0], Face::with_defaults(1));
        assert_eq!(faces.len(), FACE_COUNT);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut faces: [Face; FACE_COUNT] =
            std::array::from_fn(|i| Face::with_defaults(i as u8 + 1));
        faces[2].title = "Recipes".to_string();
        faces[2].set_segment_count(9);
        faces[2].segments[4].notes = "simmer gently".to_string();

        store.save(&faces).unwrap();
        let loaded = store.load();
        assert_eq!(loaded[2].title, "Recipes");
        assert_eq!(loaded[2].segment_count(), 9);
        assert_eq!(loaded[2].segments[4].notes, "simmer gently");
        assert_eq!(loaded[0], faces[0]);
    }

    #[test]
    fn test_garbage_draft_falls_back_silently() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), b"\x00\x01\x02 definitely not a draft").unwrap();
        let faces = store.load();
        assert_eq!(faces[0], Face::with_defaults(1));
    }

    #[test]
    fn test_plain_ron_draft_is_accepted() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut face = Face::with_defaults(4);
        face.title = "Plain".to_string();
        let draft = Draft { faces: vec![face] };
        let text = ron::ser::to_string_pretty(&draft, ron::ser::PrettyConfig::new()).unwrap();
        std::fs::write(store.path(), text).unwrap();

        let faces = store.load();
        assert_eq!(faces[3].title, "Plain");
        // Faces absent from the draft stay default
        assert_eq!(faces[0], Face::with_defaults(1));
    }

    #[test]
    fn test_bad_face_defaults_while_rest_loads() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut good = Face::with_defaults(1);
        good.title = "Good".to_string();
        let mut bad = Face::with_defaults(2);
        bad.segments[0].notes = "x".repeat(limits::MAX_TEXT_LEN + 1);

        let draft = Draft {
            faces: vec![good, bad],
        };
        let text = ron::ser::to_string_pretty(&draft, ron::ser::PrettyConfig::new()).unwrap();
        std::fs::write(store.path(), text).unwrap();

        let faces = store.load();
        assert_eq!(faces[0].title, "Good");
        assert_eq!(faces[1], Face::with_defaults(2));
    }

    #[test]
    fn test_loaded_faces_are_normalized() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut face = Face::with_defaults(5);
        face.needle.primary_angle = 37.0; // not a segment center
        face.needle.primary_length = 500.0;
        let draft = Draft { faces: vec![face] };
        let text = ron::ser::to_string_pretty(&draft, ron::ser::PrettyConfig::new()).unwrap();
        std::fs::write(store.path(), text).unwrap();

        let faces = store.load();
        let needle = &faces[4].needle;
        let count = faces[4].segment_count();
        let on_center = (0..count)
            .any(|i| (needle.primary_angle - crate::dial::angle_for_index(i, count)).abs() < 0.001);
        assert!(on_center);
        assert!(needle.primary_length <= 95.0);
    }
}
