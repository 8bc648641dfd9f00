//! Application state and tool management
//!
//! Two tools, one tab each: the viewer (rotate the cube, flip faces,
//! read content) and the editor (author segment content and needles).
//! Both stay alive while the other tab is active.

use std::path::PathBuf;

use crate::cube::CubeState;
use crate::draft::DraftStore;
use crate::editor::EditorPanelState;
use crate::viewer::ViewerState;

/// The available tools (fixed set, one tab each)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    View = 0,
    Edit = 1,
}

impl Tool {
    pub const ALL: [Tool; 2] = [Tool::View, Tool::Edit];

    /// Get the display label for this tool
    pub fn label(&self) -> &'static str {
        match self {
            Tool::View => "View",
            Tool::Edit => "Edit",
        }
    }

    pub fn from_index(i: usize) -> Option<Tool> {
        Tool::ALL.get(i).copied()
    }
}

/// Main application state containing all tool states
pub struct AppState {
    /// Currently active tool
    pub active_tool: Tool,

    /// Single source of truth for faces, orientation and detail modes.
    /// Both tools read and mutate this, so edits show up in the viewer
    /// immediately.
    pub cube: CubeState,

    /// Viewer gesture state
    pub viewer: ViewerState,

    /// Edit panel state
    pub editor: EditorPanelState,

    /// Draft persistence
    pub draft: DraftStore,
}

impl AppState {
    pub fn new(draft_path: PathBuf) -> Self {
        let draft = DraftStore::new(draft_path);
        let faces = draft.load();
        Self {
            active_tool: Tool::View,
            cube: CubeState::from_content(&faces),
            viewer: ViewerState::default(),
            editor: EditorPanelState::new(),
            draft,
        }
    }
}
