//! Single-line text input with cursor and keyboard handling

use macroquad::prelude::*;

use super::Rect;

/// State for a text input field
#[derive(Debug, Clone, Default)]
pub struct TextInputState {
    /// The text content
    pub text: String,
    /// Cursor position (byte index)
    pub cursor: usize,
    /// Blink timer for cursor
    pub blink_timer: f32,
}

impl TextInputState {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self {
            text,
            cursor,
            blink_timer: 0.0,
        }
    }

    /// Replace the content (used when the bound segment/face changes)
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.text.len();
    }

    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.text[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.text.len())
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary();
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.next_boundary();
        }
    }

    pub fn insert_char(&mut self, ch: char) {
        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.prev_boundary();
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.next_boundary();
            self.text.drain(self.cursor..next);
        }
    }

    /// Handle keyboard input for the focused field, returns true if the
    /// text changed
    pub fn handle_input(&mut self) -> bool {
        let old_len_hash = (self.text.len(), self.cursor);
        let mut changed = false;
        self.blink_timer += get_frame_time();

        if is_key_pressed(KeyCode::Left) {
            self.move_left();
        }
        if is_key_pressed(KeyCode::Right) {
            self.move_right();
        }
        if is_key_pressed(KeyCode::Home) {
            self.cursor = 0;
        }
        if is_key_pressed(KeyCode::End) {
            self.cursor = self.text.len();
        }
        if is_key_pressed(KeyCode::Backspace) {
            self.backspace();
            changed = true;
        }
        if is_key_pressed(KeyCode::Delete) {
            self.delete();
            changed = true;
        }

        while let Some(ch) = get_char_pressed() {
            // Filter control characters
            if ch >= ' ' && ch != '\u{7f}' {
                self.insert_char(ch);
                changed = true;
            }
        }

        if old_len_hash != (self.text.len(), self.cursor) {
            self.blink_timer = 0.0;
        }
        changed
    }
}

const INPUT_BG: Color = Color::new(0.12, 0.12, 0.14, 1.0);
const INPUT_BORDER: Color = Color::new(0.0, 0.75, 0.9, 1.0);
const INPUT_BORDER_IDLE: Color = Color::new(0.3, 0.3, 0.35, 1.0);
const INPUT_TEXT: Color = Color::new(0.8, 0.8, 0.85, 1.0);
const INPUT_CURSOR: Color = Color::new(0.9, 0.9, 0.95, 1.0);

/// Draw a text input field; handles keyboard input only when focused.
/// Returns true if the text changed this frame.
pub fn draw_text_input(rect: Rect, state: &mut TextInputState, focused: bool, font_size: f32) -> bool {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, INPUT_BG);
    let border = if focused { INPUT_BORDER } else { INPUT_BORDER_IDLE };
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, border);

    let padding = 6.0;
    let text_x = rect.x + padding;
    let text_y = rect.y + (rect.h + font_size * 0.7) / 2.0;

    let changed = if focused { state.handle_input() } else { false };

    draw_text(&state.text, text_x, text_y, font_size, INPUT_TEXT);

    if focused && (state.blink_timer % 1.0) < 0.5 {
        let cursor_offset =
            measure_text(&state.text[..state.cursor], None, font_size as u16, 1.0).width;
        let cursor_x = text_x + cursor_offset;
        draw_line(cursor_x, rect.y + 5.0, cursor_x, rect.bottom() - 5.0, 1.5, INPUT_CURSOR);
    }

    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_over_utf8() {
        let mut state = TextInputState::new("aé");
        assert_eq!(state.cursor, 3);
        state.move_left();
        assert_eq!(state.cursor, 1);
        state.move_left();
        assert_eq!(state.cursor, 0);
        state.move_left();
        assert_eq!(state.cursor, 0);
        state.move_right();
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut state = TextInputState::new("abc");
        state.backspace();
        assert_eq!(state.text, "ab");
        state.cursor = 0;
        state.delete();
        assert_eq!(state.text, "b");
        state.backspace();
        assert_eq!(state.text, "b");
    }

    #[test]
    fn test_insert_mid_string() {
        let mut state = TextInputState::new("ac");
        state.cursor = 1;
        state.insert_char('b');
        assert_eq!(state.text, "abc");
        assert_eq!(state.cursor, 2);
    }
}
