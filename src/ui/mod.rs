//! Immediate-mode UI toolkit
//!
//! Small rectangle-based layout plus the handful of widgets the viewer
//! and edit panel need. Rebuilt every frame, no retained widget tree;
//! macroquad does the drawing.

mod input;
mod rect;
mod text_input;
pub mod theme;
mod widgets;

pub use input::*;
pub use rect::*;
pub use text_input::*;
pub use widgets::*;
