//! DIALCUBE: a six-face content cube with radial dials
//!
//! Each face carries a dial of 1-12 segments with needle indicators
//! and per-segment media and notes. Drag to rotate between faces,
//! flip a face for its detail view, or expand it full screen. Edits
//! autosave to a local draft.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod cube;
mod dial;
mod draft;
mod editor;
mod ui;
mod viewer;

use std::path::PathBuf;

use macroquad::prelude::*;

use app::{AppState, Tool};
use cube::CubeState;
use editor::{draw_editor, EditorAction};
use ui::{theme, MouseState, Rect, UiContext};
use viewer::{draw_dial, draw_viewer, CubeAction};

const TAB_BAR_HEIGHT: f32 = 30.0;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("DIALCUBE v{}", VERSION),
        window_width: 1100,
        window_height: 720,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let mut app = AppState::new(PathBuf::from("userdata/draft.cube"));
    let mut ui_ctx = UiContext::new();

    println!("=== DIALCUBE ===");

    loop {
        let now = get_time();
        let (mx, my) = mouse_position();
        let (_, wheel_y) = mouse_wheel();
        let mouse = MouseState {
            x: mx,
            y: my,
            left_down: is_mouse_button_down(MouseButton::Left),
            left_pressed: is_mouse_button_pressed(MouseButton::Left),
            left_released: is_mouse_button_released(MouseButton::Left),
            scroll: wheel_y,
        };
        ui_ctx.begin_frame(mouse);

        clear_background(theme::BG_COLOR);
        let screen = Rect::new(0.0, 0.0, screen_width(), screen_height());
        let (tab_bar, content) = screen.take_top(TAB_BAR_HEIGHT);

        // Pointer left the window mid-drag: release the gesture so the
        // orientation controller snaps instead of sticking
        let outside = mx < 0.0 || my < 0.0 || mx > screen.w || my > screen.h;
        if outside && app.viewer.is_dragging() {
            app.viewer.cancel_drag();
            app.cube.pointer_leave();
        }

        draw_tab_bar(&mut ui_ctx, &mut app, tab_bar);
        handle_keyboard(&mut app.cube);

        match app.active_tool {
            Tool::View => {
                let action = draw_viewer(&mut ui_ctx, &mut app.viewer, &app.cube, content);
                apply_cube_action(&mut app.cube, action);
            }
            Tool::Edit => {
                let (preview, panel) = content.split_h(0.45);
                let face = app.cube.active_face().clone();
                draw_rectangle(preview.x, preview.y, preview.w, preview.h, theme::BG_COLOR);
                draw_dial(
                    &face,
                    preview.pad(20.0).centered_square(),
                    Some(app.editor.selected_segment),
                );
                let action = draw_editor(&mut ui_ctx, &mut app.editor, &face, panel, now);
                apply_editor_action(&mut app, action, now);
            }
        }

        autosave(&mut app);

        next_frame().await;
    }
}

fn draw_tab_bar(ctx: &mut UiContext, app: &mut AppState, rect: Rect) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, theme::HEADER_COLOR);
    let tab_w = 90.0;
    for (i, tool) in Tool::ALL.iter().enumerate() {
        let tab = Rect::new(rect.x + 6.0 + i as f32 * (tab_w + 4.0), rect.y + 3.0, tab_w, rect.h - 6.0);
        if ui::toggle(ctx, tab, tool.label(), app.active_tool == *tool) {
            if let Some(tool) = Tool::from_index(i) {
                app.active_tool = tool;
            }
        }
    }
    let face_text = format!("face {}", app.cube.active_face_index() + 1);
    draw_text(
        &face_text,
        rect.right() - 70.0,
        rect.y + 20.0,
        theme::FONT_SIZE_SMALL,
        theme::TEXT_DIM,
    );
}

fn handle_keyboard(cube: &mut CubeState) {
    if is_key_pressed(KeyCode::Left) {
        cube.navigate(-1);
    }
    if is_key_pressed(KeyCode::Right) {
        cube.navigate(1);
    }
    if is_key_pressed(KeyCode::Escape) {
        if cube.detail.full_screen_face().is_some() {
            cube.close_full_screen();
        } else {
            cube.close_detail();
        }
    }
}

fn apply_cube_action(cube: &mut CubeState, action: CubeAction) {
    match action {
        CubeAction::None => {}
        CubeAction::BeginDrag => cube.begin_drag(),
        CubeAction::Drag { dx, dy } => cube.update_drag(dx, dy),
        CubeAction::EndDrag => {
            cube.end_drag();
        }
        CubeAction::Navigate(direction) => {
            cube.navigate(direction);
        }
        CubeAction::OpenDetail(face_index) => cube.open_detail(face_index),
        CubeAction::CloseDetail => cube.close_detail(),
        CubeAction::SelectSegment(segment_id) => cube.select_segment(segment_id),
        CubeAction::OpenFullScreen(face_index) => cube.open_full_screen(face_index),
        CubeAction::CloseFullScreen => cube.close_full_screen(),
    }
}

fn apply_editor_action(app: &mut AppState, action: EditorAction, now: f64) {
    match action {
        EditorAction::None => {}
        EditorAction::SetSegmentCount { face_id, count } => {
            app.cube.set_segment_count(face_id, count);
        }
        EditorAction::UpdateSegment { face_id, segment_id, patch } => {
            app.cube.registry.update_segment(face_id, segment_id, &patch);
        }
        EditorAction::SetFaceTitle { face_id, title } => {
            app.cube.registry.set_face_title(face_id, title);
        }
        EditorAction::SetFaceNotes { face_id, notes } => {
            app.cube.registry.set_face_notes(face_id, notes);
        }
        EditorAction::PointNeedle { face_id, segment_id } => {
            app.cube.registry.point_needle_at(face_id, segment_id);
        }
        EditorAction::ToggleSecondary { face_id } => {
            let enabled = app.cube.registry.face(face_id).needle.secondary_enabled;
            app.cube.registry.set_secondary_enabled(face_id, !enabled);
        }
        EditorAction::SetPrimaryLength { face_id, length } => {
            app.cube.registry.set_primary_length(face_id, length);
        }
        EditorAction::SetSecondaryLength { face_id, length } => {
            app.cube.registry.set_secondary_length(face_id, length);
        }
        EditorAction::AttachMedia { face_id, segment_id, media } => {
            app.cube.registry.attach_media(face_id, segment_id, media);
            app.editor.set_status("Media attached", 2.0, now);
        }
        EditorAction::RemoveMedia { face_id, segment_id, media_index } => {
            app.cube.registry.remove_media(face_id, segment_id, media_index);
        }
        EditorAction::ResetFace { face_id } => {
            app.cube.reset_face(face_id);
            app.editor.invalidate();
            app.editor.set_status("Face reset to defaults", 2.0, now);
        }
    }
}

/// Persist the draft whenever faces changed this frame. Fire and
/// forget: a failed save logs and the session keeps going.
fn autosave(app: &mut AppState) {
    let changes = app.cube.registry.take_events();
    if changes.is_empty() {
        return;
    }
    if let Err(e) = app.draft.save(app.cube.registry.faces()) {
        eprintln!("Draft autosave failed: {}", e);
    }
}
