//! Creator edit panel
//!
//! Draws the per-face editing controls (segment count, content fields,
//! needle configuration, media attachments) and reports edits back as
//! `EditorAction`s for the main loop to apply. Text inputs mirror the
//! registry content and re-sync whenever the bound face or segment
//! changes, so the panel never shows stale values after a face switch.

use macroquad::prelude::*;

use crate::cube::{Face, Media, MediaKind, SegmentPatch};
use crate::dial;
use crate::ui::{self, draw_text_input, theme, Rect, TextInputState, UiContext};

/// One edit operation produced by the panel this frame
#[derive(Debug, Clone, PartialEq)]
pub enum EditorAction {
    None,
    SetSegmentCount { face_id: u8, count: usize },
    UpdateSegment { face_id: u8, segment_id: u32, patch: SegmentPatch },
    SetFaceTitle { face_id: u8, title: String },
    SetFaceNotes { face_id: u8, notes: String },
    PointNeedle { face_id: u8, segment_id: u32 },
    ToggleSecondary { face_id: u8 },
    SetPrimaryLength { face_id: u8, length: f32 },
    SetSecondaryLength { face_id: u8, length: f32 },
    AttachMedia { face_id: u8, segment_id: u32, media: Media },
    RemoveMedia { face_id: u8, segment_id: u32, media_index: usize },
    ResetFace { face_id: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditField {
    FaceTitle,
    FaceNotes,
    SegmentTitle,
    SegmentDescription,
    SegmentNotes,
    MediaUrl,
}

/// Retained state of the edit panel
pub struct EditorPanelState {
    /// Segment being edited on the shown face (1-based id)
    pub selected_segment: u32,
    focused: Option<EditField>,
    face_title: TextInputState,
    face_notes: TextInputState,
    segment_title: TextInputState,
    segment_description: TextInputState,
    segment_notes: TextInputState,
    media_url: TextInputState,
    media_kind: MediaKind,
    /// (face id, segment id) the inputs currently mirror
    synced: Option<(u8, u32)>,
    status: Option<(String, f64)>,
}

impl Default for EditorPanelState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorPanelState {
    pub fn new() -> Self {
        Self {
            selected_segment: 1,
            focused: None,
            face_title: TextInputState::default(),
            face_notes: TextInputState::default(),
            segment_title: TextInputState::default(),
            segment_description: TextInputState::default(),
            segment_notes: TextInputState::default(),
            media_url: TextInputState::default(),
            media_kind: MediaKind::Photo,
            synced: None,
            status: None,
        }
    }

    /// Show a transient status message for `secs` seconds
    pub fn set_status(&mut self, message: &str, secs: f64, now: f64) {
        self.status = Some((message.to_string(), now + secs));
    }

    /// Force the inputs to reload from the registry on the next draw
    /// (after reset-to-defaults or external content changes)
    pub fn invalidate(&mut self) {
        self.synced = None;
    }

    fn sync(&mut self, face: &Face) {
        if face.segment(self.selected_segment).is_none() {
            self.selected_segment = face.first_segment_id().unwrap_or(1);
        }
        let key = (face.id, self.selected_segment);
        if self.synced == Some(key) {
            return;
        }
        self.face_title.set_text(&face.title);
        self.face_notes.set_text(&face.notes);
        if let Some(segment) = face.segment(self.selected_segment) {
            self.segment_title.set_text(&segment.title);
            self.segment_description.set_text(&segment.description);
            self.segment_notes.set_text(&segment.notes);
        }
        self.media_url.set_text("");
        self.synced = Some(key);
    }
}

fn cycle_media_kind(kind: MediaKind) -> MediaKind {
    match kind {
        MediaKind::Photo => MediaKind::Video,
        MediaKind::Video => MediaKind::File,
        MediaKind::File => MediaKind::Photo,
    }
}

fn media_kind_label(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Photo => "Photo",
        MediaKind::Video => "Video",
        MediaKind::File => "File",
    }
}

const ROW_H: f32 = 24.0;
const GAP: f32 = 6.0;

/// Draw the edit panel for `face` into `rect` and return at most one
/// action. `now` is the frame clock for the status line.
pub fn draw_editor(
    ctx: &mut UiContext,
    state: &mut EditorPanelState,
    face: &Face,
    rect: Rect,
    now: f64,
) -> EditorAction {
    state.sync(face);

    draw_rectangle(rect.x, rect.y, rect.w, rect.h, theme::PANEL_COLOR);
    let inner = rect.pad(10.0);
    let mut y = inner.y;
    let mut action = EditorAction::None;
    let face_id = face.id;

    // Any click records whether it landed on a text input, to resolve
    // focus at the end of the frame
    let mut clicked_field: Option<EditField> = None;

    let field_row = |ctx: &mut UiContext,
                     state_input: &mut TextInputState,
                     field: EditField,
                     label_text: &str,
                     y: &mut f32,
                     focused: Option<EditField>,
                     clicked_field: &mut Option<EditField>|
     -> bool {
        ui::label(
            Rect::new(inner.x, *y, 90.0, ROW_H),
            label_text,
            theme::TEXT_DIM,
        );
        let input_rect = Rect::new(inner.x + 94.0, *y, inner.w - 94.0, ROW_H);
        if ctx.mouse.clicked(&input_rect) {
            *clicked_field = Some(field);
        }
        let changed = draw_text_input(
            input_rect,
            state_input,
            focused == Some(field),
            theme::FONT_SIZE_CONTENT,
        );
        *y += ROW_H + GAP;
        changed
    };

    // --- face fields ------------------------------------------------------
    draw_text(&format!("Face {}", face_id), inner.x, y + 14.0, theme::FONT_SIZE_HEADER, theme::TEXT_COLOR);
    y += ROW_H;

    if field_row(ctx, &mut state.face_title, EditField::FaceTitle, "Title", &mut y, state.focused, &mut clicked_field) {
        action = EditorAction::SetFaceTitle {
            face_id,
            title: state.face_title.text.clone(),
        };
    }
    if field_row(ctx, &mut state.face_notes, EditField::FaceNotes, "Notes", &mut y, state.focused, &mut clicked_field) {
        action = EditorAction::SetFaceNotes {
            face_id,
            notes: state.face_notes.text.clone(),
        };
    }

    // --- segment count ----------------------------------------------------
    ui::label(Rect::new(inner.x, y, 90.0, ROW_H), "Segments", theme::TEXT_DIM);
    let count = face.segment_count();
    let delta = ui::stepper(
        ctx,
        Rect::new(inner.x + 94.0, y, 110.0, ROW_H),
        &count.to_string(),
    );
    if delta != 0 && action == EditorAction::None {
        let target = (count as i32 + delta).clamp(1, dial::MAX_SEGMENTS as i32) as usize;
        action = EditorAction::SetSegmentCount {
            face_id,
            count: target,
        };
    }
    y += ROW_H + GAP;

    // --- segment picker ---------------------------------------------------
    let pick = 22.0;
    for (i, segment) in face.segments.iter().enumerate() {
        let px = inner.x + (i % 12) as f32 * (pick + 2.0);
        let rect = Rect::new(px, y, pick, pick);
        let is_selected = segment.id == state.selected_segment;
        if ui::toggle(ctx, rect, &segment.id.to_string(), is_selected) && !is_selected {
            state.selected_segment = segment.id;
            state.invalidate();
        }
    }
    y += pick + GAP * 2.0;

    // --- segment fields ---------------------------------------------------
    let segment_id = state.selected_segment;
    if field_row(ctx, &mut state.segment_title, EditField::SegmentTitle, "Seg title", &mut y, state.focused, &mut clicked_field)
        && action == EditorAction::None
    {
        action = EditorAction::UpdateSegment {
            face_id,
            segment_id,
            patch: SegmentPatch {
                title: Some(state.segment_title.text.clone()),
                ..Default::default()
            },
        };
    }
    if field_row(ctx, &mut state.segment_description, EditField::SegmentDescription, "Description", &mut y, state.focused, &mut clicked_field)
        && action == EditorAction::None
    {
        action = EditorAction::UpdateSegment {
            face_id,
            segment_id,
            patch: SegmentPatch {
                description: Some(state.segment_description.text.clone()),
                ..Default::default()
            },
        };
    }
    if field_row(ctx, &mut state.segment_notes, EditField::SegmentNotes, "Seg notes", &mut y, state.focused, &mut clicked_field)
        && action == EditorAction::None
    {
        action = EditorAction::UpdateSegment {
            face_id,
            segment_id,
            patch: SegmentPatch {
                notes: Some(state.segment_notes.text.clone()),
                ..Default::default()
            },
        };
    }

    // --- media ------------------------------------------------------------
    if let Some(segment) = face.segment(segment_id) {
        for (i, media) in segment.media.iter().enumerate() {
            let name = media.filename.as_deref().unwrap_or(&media.url);
            ui::label(
                Rect::new(inner.x, y, inner.w - 30.0, ROW_H),
                &format!("{} {}", media_kind_label(media.kind), name),
                theme::TEXT_DIM,
            );
            if ui::button(ctx, Rect::new(inner.right() - 24.0, y, 24.0, ROW_H), "x")
                && action == EditorAction::None
            {
                action = EditorAction::RemoveMedia {
                    face_id,
                    segment_id,
                    media_index: i,
                };
            }
            y += ROW_H;
        }
    }

    if ui::button(ctx, Rect::new(inner.x, y, 60.0, ROW_H), media_kind_label(state.media_kind)) {
        state.media_kind = cycle_media_kind(state.media_kind);
    }
    {
        let input_rect = Rect::new(inner.x + 64.0, y, inner.w - 64.0 - 64.0, ROW_H);
        if ctx.mouse.clicked(&input_rect) {
            clicked_field = Some(EditField::MediaUrl);
        }
        draw_text_input(
            input_rect,
            &mut state.media_url,
            state.focused == Some(EditField::MediaUrl),
            theme::FONT_SIZE_CONTENT,
        );
        if ui::button(ctx, Rect::new(inner.right() - 60.0, y, 60.0, ROW_H), "Attach")
            && !state.media_url.text.trim().is_empty()
            && action == EditorAction::None
        {
            let url = state.media_url.text.trim().to_string();
            let filename = url.rsplit('/').next().filter(|s| !s.is_empty()).map(String::from);
            action = EditorAction::AttachMedia {
                face_id,
                segment_id,
                media: Media {
                    kind: state.media_kind,
                    url,
                    filename,
                },
            };
            state.media_url.set_text("");
        }
    }
    y += ROW_H + GAP * 2.0;

    // --- needle -----------------------------------------------------------
    ui::label(Rect::new(inner.x, y, 90.0, ROW_H), "Needle", theme::TEXT_DIM);
    if ui::button(ctx, Rect::new(inner.x + 94.0, y, 110.0, ROW_H), "Point here")
        && action == EditorAction::None
    {
        action = EditorAction::PointNeedle { face_id, segment_id };
    }
    if ui::toggle(
        ctx,
        Rect::new(inner.x + 210.0, y, 90.0, ROW_H),
        "Mirror",
        face.needle.secondary_enabled,
    ) && action == EditorAction::None
    {
        action = EditorAction::ToggleSecondary { face_id };
    }
    y += ROW_H + GAP;

    ui::label(Rect::new(inner.x, y, 90.0, ROW_H), "Length", theme::TEXT_DIM);
    if let Some(value) = ui::slider(
        ctx,
        Rect::new(inner.x + 94.0, y, inner.w - 94.0, ROW_H),
        face.needle.primary_length,
        dial::MIN_LENGTH,
        dial::MAX_LENGTH,
    ) {
        if action == EditorAction::None {
            action = EditorAction::SetPrimaryLength { face_id, length: value };
        }
    }
    y += ROW_H + GAP;

    if face.needle.secondary_enabled {
        ui::label(Rect::new(inner.x, y, 90.0, ROW_H), "Mirror len", theme::TEXT_DIM);
        if let Some(value) = ui::slider(
            ctx,
            Rect::new(inner.x + 94.0, y, inner.w - 94.0, ROW_H),
            face.needle.secondary_length,
            dial::MIN_LENGTH,
            dial::MAX_LENGTH,
        ) {
            if action == EditorAction::None {
                action = EditorAction::SetSecondaryLength { face_id, length: value };
            }
        }
        y += ROW_H + GAP;
    }

    // --- reset ------------------------------------------------------------
    if ui::button(ctx, Rect::new(inner.x, y + GAP, 110.0, ROW_H), "Reset face")
        && action == EditorAction::None
    {
        action = EditorAction::ResetFace { face_id };
    }

    // Focus follows clicks: into a field, or away from all of them
    if ctx.mouse.left_pressed {
        if clicked_field.is_some() {
            state.focused = clicked_field;
        } else {
            state.focused = None;
        }
    }

    // Status line
    if state.status.as_ref().is_some_and(|(_, until)| now >= *until) {
        state.status = None;
    }
    if let Some((message, _)) = &state.status {
        draw_text(
            message,
            inner.x,
            rect.bottom() - 10.0,
            theme::FONT_SIZE_SMALL,
            theme::ACCENT_COLOR,
        );
    }

    action
}
