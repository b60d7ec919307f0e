//! Text input widget
//!
//! A single-line text field with a cursor. The cursor counts characters,
//! not bytes, so non-ASCII descriptions edit correctly.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Width the label column is padded to in forms
const LABEL_WIDTH: usize = 12;

/// A simple text input widget
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position in characters
    pub cursor: usize,
    pub focused: bool,
    pub placeholder: String,
    pub label: String,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content, moving the cursor to the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.set_value(content);
        self
    }

    /// Replace the content, moving the cursor to the end
    pub fn set_value(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.char_count();
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_offset(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// The field as one line: padded label, then the value with a block
    /// cursor when focused
    pub fn line(&self) -> Line<'static> {
        let label_style = if self.focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };

        let mut spans = Vec::new();
        if !self.label.is_empty() {
            spans.push(Span::styled(
                format!("{:>width$}: ", self.label, width = LABEL_WIDTH),
                label_style,
            ));
        }

        if !self.focused {
            if self.content.is_empty() {
                spans.push(Span::styled(
                    self.placeholder.clone(),
                    Style::default().fg(Color::DarkGray),
                ));
            } else {
                spans.push(Span::styled(
                    self.content.clone(),
                    Style::default().fg(Color::Yellow),
                ));
            }
            return Line::from(spans);
        }

        let before: String = self.content.chars().take(self.cursor).collect();
        let mut rest = self.content.chars().skip(self.cursor);
        let cursor_char = rest.next().unwrap_or(' ');
        let after: String = rest.collect();

        let value_style = Style::default().fg(Color::White);
        spans.push(Span::styled(before, value_style));
        spans.push(Span::styled(
            cursor_char.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        spans.push(Span::styled(after, value_style));

        Line::from(spans)
    }

    /// Route an editing key to the field; returns false for keys it ignores
    pub fn handle_key(&mut self, key: crossterm::event::KeyEvent) -> bool {
        use crossterm::event::KeyCode;

        match key.code {
            KeyCode::Char(c) => self.insert(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_start(),
            KeyCode::End => self.move_end(),
            _ => return false,
        }
        true
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_line(area.x, area.y, &self.line(), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        input.insert('a');
        input.insert('b');
        input.move_left();
        input.insert('x');
        assert_eq!(input.value(), "axb");
        assert_eq!(input.cursor, 2);

        input.backspace();
        assert_eq!(input.value(), "ab");
        assert_eq!(input.cursor, 1);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new().content("café");
        assert_eq!(input.cursor, 4);
        input.backspace();
        assert_eq!(input.value(), "caf");

        input.insert('é');
        input.move_start();
        input.delete();
        assert_eq!(input.value(), "afé");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = TextInput::new().content("ab");
        input.move_right();
        assert_eq!(input.cursor, 2);
        input.move_start();
        input.move_left();
        assert_eq!(input.cursor, 0);
        input.delete();
        input.delete();
        input.delete();
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_handle_key() {
        let mut input = TextInput::new();
        assert!(input.handle_key(KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE)));
        assert!(!input.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
        assert_eq!(input.value(), "5");
    }

    #[test]
    fn test_line_shows_placeholder_when_unfocused() {
        let input = TextInput::new().label("Amount").placeholder("0.00");
        let text: String = input.line().spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "      Amount: 0.00");
    }
}
