//! UI Theme - shared colors and styling constants
//!
//! Centralized color definitions for a consistent look across the
//! viewer and the edit panel.

use macroquad::prelude::Color;

// =============================================================================
// Base UI Colors
// =============================================================================

/// Dark background color
pub const BG_COLOR: Color = Color::new(0.11, 0.11, 0.13, 1.0);

/// Header/toolbar background
pub const HEADER_COLOR: Color = Color::new(0.15, 0.15, 0.18, 1.0);

/// Panel background (edit side)
pub const PANEL_COLOR: Color = Color::new(0.13, 0.13, 0.15, 1.0);

/// Primary text color
pub const TEXT_COLOR: Color = Color::new(0.8, 0.8, 0.85, 1.0);

/// Dimmed/secondary text
pub const TEXT_DIM: Color = Color::new(0.4, 0.4, 0.45, 1.0);

/// Accent color for active/selected items
pub const ACCENT_COLOR: Color = Color::new(0.0, 0.75, 0.9, 1.0);

// =============================================================================
// Font Sizes
// =============================================================================

/// Header/title text size
pub const FONT_SIZE_HEADER: f32 = 16.0;

/// Standard content text size
pub const FONT_SIZE_CONTENT: f32 = 13.0;

/// Small/detail text size
pub const FONT_SIZE_SMALL: f32 = 11.0;

// =============================================================================
// Dial Colors
// =============================================================================

/// Dial disc background
pub const DIAL_BG: Color = Color::new(0.157, 0.165, 0.188, 1.0);

/// Dial border / segment divider lines
pub const DIAL_BORDER: Color = Color::new(0.314, 0.314, 0.353, 1.0);

/// Highlighted segment wedge
pub const SEGMENT_HIGHLIGHT: Color = Color::new(0.275, 0.353, 0.471, 1.0);

/// Primary needle
pub const NEEDLE_PRIMARY: Color = Color::new(0.9, 0.35, 0.3, 1.0);

/// Secondary (mirrored) needle
pub const NEEDLE_SECONDARY: Color = Color::new(0.9, 0.6, 0.3, 1.0);

/// Dial center hub
pub const DIAL_HUB: Color = Color::new(0.118, 0.125, 0.149, 1.0);

// =============================================================================
// Status Indicator Colors
// =============================================================================

/// Segment with no content
pub const STATUS_EMPTY: Color = Color::new(0.35, 0.35, 0.4, 1.0);

/// Segment with partial content
pub const STATUS_IN_PROGRESS: Color = Color::new(0.9, 0.7, 0.2, 1.0);

/// Segment with media plus text
pub const STATUS_COMPLETE: Color = Color::new(0.3, 0.8, 0.4, 1.0);
