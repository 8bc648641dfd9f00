//! Cube viewer - dial rendering and pointer gestures
//!
//! Immediate-mode drawing of the active face's dial, the flipped
//! detail view and the full-screen overlay. Input is reported back as
//! a `CubeAction` that the main loop applies to `CubeState`; this
//! module never mutates the cube itself.

use macroquad::prelude::*;

use crate::cube::CubeState;
use crate::cube::Face;
use crate::dial::{self, SegmentStatus};
use crate::ui::{self, theme, Rect, UiContext};

/// One-per-frame interaction result from the viewer
#[derive(Debug, Clone, PartialEq)]
pub enum CubeAction {
    None,
    BeginDrag,
    Drag { dx: f32, dy: f32 },
    EndDrag,
    Navigate(i32),
    OpenDetail(usize),
    CloseDetail,
    SelectSegment(u32),
    OpenFullScreen(usize),
    CloseFullScreen,
}

/// Viewer-local pointer state. The anchor is the press position of an
/// in-flight cube drag; deltas are computed from it so the gesture is
/// origin-relative all the way down.
#[derive(Default)]
pub struct ViewerState {
    drag_anchor: Option<(f32, f32)>,
}

impl ViewerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Drop the anchor without producing an action (pointer left the
    /// window mid-gesture)
    pub fn cancel_drag(&mut self) {
        self.drag_anchor = None;
    }
}

const HEADER_HEIGHT: f32 = 34.0;

/// Draw the viewer into `rect` and return at most one action
pub fn draw_viewer(
    ctx: &mut UiContext,
    state: &mut ViewerState,
    cube: &CubeState,
    rect: Rect,
) -> CubeAction {
    let mut action = CubeAction::None;

    draw_rectangle(rect.x, rect.y, rect.w, rect.h, theme::BG_COLOR);
    let (header, content) = rect.take_top(HEADER_HEIGHT);

    // An in-flight drag owns the pointer until release
    if let Some((ax, ay)) = state.drag_anchor {
        if ctx.mouse.left_down {
            action = CubeAction::Drag {
                dx: ctx.mouse.x - ax,
                dy: ctx.mouse.y - ay,
            };
        } else {
            state.drag_anchor = None;
            action = CubeAction::EndDrag;
        }
    }

    if let Some(header_action) = draw_header(ctx, cube, header) {
        if action == CubeAction::None {
            action = header_action;
        }
    }

    // Full-screen overlay replaces everything below the header
    if let Some(index) = cube.detail.full_screen_face() {
        let face = cube.registry.face_by_index(index);
        if draw_full_screen(ctx, face, content) && action == CubeAction::None {
            action = CubeAction::CloseFullScreen;
        }
        return action;
    }

    if cube.detail.is_flipped() {
        if let Some(face) = cube.flipped_face() {
            let select = draw_detail(ctx, face, cube.detail.selected_segment(), content);
            if let Some(id) = select {
                if action == CubeAction::None {
                    action = CubeAction::SelectSegment(id);
                }
            }
        }
    } else {
        let dial_rect = content.pad(12.0).centered_square();
        draw_dial(cube.active_face(), dial_rect, None);

        // Press on the dial starts a cube drag
        if action == CubeAction::None
            && ctx.mouse.left_pressed
            && ctx.mouse.inside(&dial_rect)
            && state.drag_anchor.is_none()
        {
            state.drag_anchor = Some((ctx.mouse.x, ctx.mouse.y));
            action = CubeAction::BeginDrag;
        }
    }

    action
}

fn draw_header(ctx: &mut UiContext, cube: &CubeState, rect: Rect) -> Option<CubeAction> {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, theme::HEADER_COLOR);

    let pad = 4.0;
    let btn = rect.h - pad * 2.0;
    let mut x = rect.x + pad;
    let mut action = None;

    if ui::button(ctx, Rect::new(x, rect.y + pad, btn, btn), "<") {
        action = Some(CubeAction::Navigate(-1));
    }
    x += btn + pad;
    if ui::button(ctx, Rect::new(x, rect.y + pad, btn, btn), ">") {
        action = Some(CubeAction::Navigate(1));
    }
    x += btn + pad * 2.0;

    let face = cube.active_face();
    let orientation = cube.orientation.orientation();
    let title = format!(
        "{}  ({}/6)   pitch {:.0}  yaw {:.0}",
        face.title,
        cube.active_face_index() + 1,
        orientation.pitch,
        orientation.yaw,
    );
    ui::label(
        Rect::new(x, rect.y, rect.w * 0.5, rect.h),
        &title,
        theme::TEXT_COLOR,
    );

    // Right-aligned mode buttons
    let wide = 76.0;
    let mut rx = rect.right() - pad - wide;
    if cube.detail.full_screen_face().is_some() {
        if ui::button(ctx, Rect::new(rx, rect.y + pad, wide, btn), "Close") {
            action = Some(CubeAction::CloseFullScreen);
        }
    } else if ui::button(ctx, Rect::new(rx, rect.y + pad, wide, btn), "Expand") {
        action = Some(CubeAction::OpenFullScreen(cube.active_face_index()));
    }
    rx -= wide + pad;
    if cube.detail.is_flipped() {
        if ui::button(ctx, Rect::new(rx, rect.y + pad, wide, btn), "Back") {
            action = Some(CubeAction::CloseDetail);
        }
    } else if ui::button(ctx, Rect::new(rx, rect.y + pad, wide, btn), "Details") {
        action = Some(CubeAction::OpenDetail(cube.active_face_index()));
    }

    action
}

/// Point on the dial at `angle` degrees and `radius_pct` percent of the
/// dial radius. Shares the angle convention of `dial::position_for_angle`:
/// -90 is straight up, angles grow clockwise.
fn dial_point(center: (f32, f32), radius: f32, angle_deg: f32, radius_pct: f32) -> (f32, f32) {
    let (top, left) = dial::position_for_angle(angle_deg, radius_pct);
    (
        center.0 + (left - 50.0) / 100.0 * radius * 2.0,
        center.1 + (top - 50.0) / 100.0 * radius * 2.0,
    )
}

/// Draw one face's dial: disc, segment wedges, status dots, needles.
/// `highlight` fills the wedge of that segment id.
pub fn draw_dial(face: &Face, rect: Rect, highlight: Option<u32>) {
    let center = rect.center();
    let radius = rect.w * 0.5;
    let count = face.segment_count();
    let step = 360.0 / count as f32;

    draw_circle(center.0, center.1, radius, theme::DIAL_BG);
    draw_circle_lines(center.0, center.1, radius, 2.0, theme::DIAL_BORDER);

    // Highlighted wedge first so dividers draw on top
    if let Some(id) = highlight {
        if let Some(pos) = face.segments.iter().position(|s| s.id == id) {
            let mid = dial::angle_for_index(pos, count);
            draw_wedge(center, radius, mid - step * 0.5, mid + step * 0.5, theme::SEGMENT_HIGHLIGHT);
        }
    }

    for (i, segment) in face.segments.iter().enumerate() {
        let mid = dial::angle_for_index(i, count);

        // Divider lines on wedge boundaries (skip for a 1-segment dial)
        if count > 1 {
            let boundary = mid - step * 0.5;
            let (bx, by) = dial_point(center, radius, boundary, 50.0);
            draw_line(center.0, center.1, bx, by, 1.0, theme::DIAL_BORDER);
        }

        // Segment number label
        let (lx, ly) = dial_point(center, radius, mid, 31.0);
        let text = segment.id.to_string();
        let dims = measure_text(&text, None, theme::FONT_SIZE_CONTENT as u16, 1.0);
        draw_text(
            &text,
            lx - dims.width * 0.5,
            ly + dims.height * 0.5,
            theme::FONT_SIZE_CONTENT,
            theme::TEXT_COLOR,
        );

        // Completion dot near the rim
        let (dx, dy) = dial_point(center, radius, mid, 42.0);
        draw_circle(dx, dy, 4.0, status_color(dial::compute_status(segment)));
    }

    // Needles point at segment centers by construction
    let needle = &face.needle;
    let (px, py) = dial_point(center, radius, needle.primary_angle, needle.primary_length * 0.5);
    draw_line(center.0, center.1, px, py, 3.0, theme::NEEDLE_PRIMARY);
    draw_circle(px, py, 4.0, theme::NEEDLE_PRIMARY);

    if needle.secondary_enabled {
        let (sx, sy) = dial_point(
            center,
            radius,
            needle.secondary_angle(),
            needle.secondary_length * 0.5,
        );
        draw_line(center.0, center.1, sx, sy, 2.0, theme::NEEDLE_SECONDARY);
        draw_circle(sx, sy, 3.0, theme::NEEDLE_SECONDARY);
    }

    draw_circle(center.0, center.1, radius * 0.08, theme::DIAL_HUB);
    draw_circle_lines(center.0, center.1, radius * 0.08, 1.5, theme::DIAL_BORDER);
}

/// Filled pie wedge between two dial angles, triangle-fan approximation
fn draw_wedge(center: (f32, f32), radius: f32, start_deg: f32, end_deg: f32, color: Color) {
    let steps = 16;
    let step = (end_deg - start_deg) / steps as f32;
    for i in 0..steps {
        let a1 = start_deg + i as f32 * step;
        let a2 = a1 + step;
        let (x1, y1) = dial_point(center, radius, a1, 50.0);
        let (x2, y2) = dial_point(center, radius, a2, 50.0);
        draw_triangle(
            Vec2::new(center.0, center.1),
            Vec2::new(x1, y1),
            Vec2::new(x2, y2),
            color,
        );
    }
}

pub fn status_color(status: SegmentStatus) -> Color {
    match status {
        SegmentStatus::Empty => theme::STATUS_EMPTY,
        SegmentStatus::InProgress => theme::STATUS_IN_PROGRESS,
        SegmentStatus::Complete => theme::STATUS_COMPLETE,
    }
}

/// Flipped detail view: segment list on the left, selected segment's
/// content on the right. Returns a segment id when a row is clicked.
fn draw_detail(
    ctx: &mut UiContext,
    face: &Face,
    selected: Option<u32>,
    rect: Rect,
) -> Option<u32> {
    let (list, content) = rect.pad(8.0).split_h(0.4);
    let mut clicked = None;

    let row_h = 26.0;
    for (i, segment) in face.segments.iter().enumerate() {
        let row = Rect::new(list.x, list.y + i as f32 * row_h, list.w - 8.0, row_h - 2.0);
        if row.bottom() > list.bottom() {
            break;
        }
        let is_selected = selected == Some(segment.id);
        let bg = if is_selected {
            theme::SEGMENT_HIGHLIGHT
        } else if ctx.mouse.inside(&row) {
            Color::from_rgba(50, 50, 60, 255)
        } else {
            theme::PANEL_COLOR
        };
        draw_rectangle(row.x, row.y, row.w, row.h, bg);
        draw_circle(
            row.x + 12.0,
            row.y + row.h * 0.5,
            4.0,
            status_color(dial::compute_status(segment)),
        );
        let title = if segment.title.is_empty() {
            format!("Segment {}", segment.id)
        } else {
            segment.title.clone()
        };
        ui::label(Rect::new(row.x + 24.0, row.y, row.w - 24.0, row.h), &title, theme::TEXT_COLOR);

        if ctx.mouse.clicked(&row) {
            clicked = Some(segment.id);
        }
    }

    if let Some(segment) = selected.and_then(|id| face.segment(id)) {
        let mut y = content.y + 4.0;
        let line = |text: &str, y: f32, color: Color| {
            draw_text(text, content.x + 8.0, y + 12.0, theme::FONT_SIZE_CONTENT, color);
        };
        let title = if segment.title.is_empty() {
            format!("Segment {}", segment.id)
        } else {
            segment.title.clone()
        };
        draw_text(&title, content.x + 8.0, y + 14.0, theme::FONT_SIZE_HEADER, theme::TEXT_COLOR);
        y += 26.0;
        if !segment.description.is_empty() {
            line(&segment.description, y, theme::TEXT_COLOR);
            y += 18.0;
        }
        if !segment.notes.is_empty() {
            line(&segment.notes, y, theme::TEXT_DIM);
            y += 18.0;
        }
        for media in &segment.media {
            let name = media.filename.as_deref().unwrap_or(&media.url);
            line(&format!("[{:?}] {}", media.kind, name), y, theme::TEXT_DIM);
            y += 16.0;
            if y > content.bottom() - 16.0 {
                break;
            }
        }
    }

    clicked
}

/// Full-screen face view. Returns true when the close area is clicked.
fn draw_full_screen(ctx: &mut UiContext, face: &Face, rect: Rect) -> bool {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, theme::BG_COLOR);
    let dial_rect = rect.pad(24.0).centered_square();
    draw_dial(face, dial_rect, None);
    draw_text(
        &face.title,
        rect.x + 16.0,
        rect.y + 24.0,
        theme::FONT_SIZE_HEADER,
        theme::TEXT_COLOR,
    );
    if !face.notes.is_empty() {
        draw_text(
            &face.notes,
            rect.x + 16.0,
            rect.y + 44.0,
            theme::FONT_SIZE_CONTENT,
            theme::TEXT_DIM,
        );
    }

    let close = Rect::new(rect.right() - 84.0, rect.y + 8.0, 76.0, 24.0);
    ui::button(ctx, close, "Close")
}
