//! Basic UI widgets

use macroquad::prelude::*;

use super::{theme, Rect, UiContext};

/// Draw a text button, returns true if clicked
pub fn button(ctx: &mut UiContext, rect: Rect, label: &str) -> bool {
    let id = ctx.next_id();
    let hovered = ctx.mouse.inside(&rect);
    let clicked = ctx.mouse.clicked(&rect);

    if hovered {
        ctx.set_hot(id);
    }

    let bg = if hovered {
        Color::from_rgba(55, 55, 65, 255)
    } else {
        Color::from_rgba(45, 45, 52, 255)
    };
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, bg);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, theme::DIAL_BORDER);

    let font_size = theme::FONT_SIZE_CONTENT;
    let dims = measure_text(label, None, font_size as u16, 1.0);
    draw_text(
        label,
        (rect.x + (rect.w - dims.width) * 0.5).round(),
        (rect.y + (rect.h + dims.height) * 0.5).round(),
        font_size,
        theme::TEXT_COLOR,
    );

    clicked
}

/// Draw a toggle button showing an on/off state, returns true if clicked
pub fn toggle(ctx: &mut UiContext, rect: Rect, label: &str, on: bool) -> bool {
    let id = ctx.next_id();
    let hovered = ctx.mouse.inside(&rect);
    let clicked = ctx.mouse.clicked(&rect);

    if hovered {
        ctx.set_hot(id);
    }

    let bg = if on {
        theme::ACCENT_COLOR
    } else if hovered {
        Color::from_rgba(55, 55, 65, 255)
    } else {
        Color::from_rgba(45, 45, 52, 255)
    };
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, bg);

    let font_size = theme::FONT_SIZE_CONTENT;
    let dims = measure_text(label, None, font_size as u16, 1.0);
    let text_color = if on { WHITE } else { theme::TEXT_COLOR };
    draw_text(
        label,
        (rect.x + (rect.w - dims.width) * 0.5).round(),
        (rect.y + (rect.h + dims.height) * 0.5).round(),
        font_size,
        text_color,
    );

    clicked
}

/// Draw a label, vertically centered in the rect
pub fn label(rect: Rect, text: &str, color: Color) {
    let font_size = theme::FONT_SIZE_CONTENT;
    let dims = measure_text(text, None, font_size as u16, 1.0);
    draw_text(
        text,
        rect.x.round(),
        (rect.y + (rect.h + dims.height) * 0.5).round(),
        font_size,
        color,
    );
}

/// A `- value +` stepper. Returns -1, 0 or +1 for this frame.
pub fn stepper(ctx: &mut UiContext, rect: Rect, value: &str) -> i32 {
    let btn_w = rect.h;
    let minus = Rect::new(rect.x, rect.y, btn_w, rect.h);
    let plus = Rect::new(rect.right() - btn_w, rect.y, btn_w, rect.h);
    let middle = Rect::new(rect.x + btn_w, rect.y, rect.w - btn_w * 2.0, rect.h);

    let mut delta = 0;
    if button(ctx, minus, "-") {
        delta -= 1;
    }
    if button(ctx, plus, "+") {
        delta += 1;
    }

    let font_size = theme::FONT_SIZE_CONTENT;
    let dims = measure_text(value, None, font_size as u16, 1.0);
    draw_text(
        value,
        (middle.x + (middle.w - dims.width) * 0.5).round(),
        (middle.y + (middle.h + dims.height) * 0.5).round(),
        font_size,
        theme::TEXT_COLOR,
    );

    delta
}

/// Horizontal slider for a value in `[min, max]`. Returns the new value
/// while the handle is being dragged, `None` otherwise.
pub fn slider(ctx: &mut UiContext, rect: Rect, value: f32, min: f32, max: f32) -> Option<f32> {
    let id = ctx.next_id();
    let hovered = ctx.mouse.inside(&rect);

    if hovered {
        ctx.set_hot(id);
        if ctx.mouse.left_pressed {
            ctx.start_drag(id);
        }
    }

    // Track
    let track_y = rect.y + rect.h * 0.5;
    draw_line(rect.x, track_y, rect.right(), track_y, 2.0, theme::DIAL_BORDER);

    // Handle
    let t = ((value - min) / (max - min)).clamp(0.0, 1.0);
    let handle_x = rect.x + t * rect.w;
    let handle_color = if ctx.is_dragging(id) {
        theme::ACCENT_COLOR
    } else {
        theme::TEXT_COLOR
    };
    draw_circle(handle_x, track_y, rect.h * 0.3, handle_color);

    if ctx.is_dragging(id) {
        let t = ((ctx.mouse.x - rect.x) / rect.w).clamp(0.0, 1.0);
        Some(min + t * (max - min))
    } else {
        None
    }
}
