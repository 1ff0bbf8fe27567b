//! Single-line form input widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// What the field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Free-form text.
    Text,
    /// Email address (free-form, validated on submit).
    Email,
    /// ISO date; accepts digits and dashes, capped at `YYYY-MM-DD` length.
    Date,
}

const ISO_DATE_LEN: usize = 10;

/// One field of the user form.
#[derive(Debug, Clone)]
pub struct TextInput {
    label: String,
    value: String,
    cursor: usize,
    focused: bool,
    kind: InputKind,
    placeholder: String,
}

impl TextInput {
    /// Creates an input with a label and kind.
    #[must_use]
    pub fn new(label: impl Into<String>, kind: InputKind) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
            cursor: 0,
            focused: false,
            kind,
            placeholder: String::new(),
        }
    }

    /// Sets placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Sets focus state.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Returns focus state.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the value and moves the cursor to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    /// Clears the value.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn accepts(&self, c: char) -> bool {
        match self.kind {
            InputKind::Text | InputKind::Email => !c.is_control(),
            InputKind::Date => {
                (c.is_ascii_digit() || c == '-') && self.value.chars().count() < ISO_DATE_LEN
            }
        }
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(offset, _)| offset)
    }

    /// Inserts a character at the cursor, if the field accepts it.
    pub fn input_char(&mut self, c: char) {
        if !self.accepts(c) {
            return;
        }
        let offset = self.byte_offset(self.cursor);
        self.value.insert(offset, c);
        self.cursor += 1;
    }

    /// Deletes the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let offset = self.byte_offset(self.cursor);
            self.value.remove(offset);
        }
    }

    /// Deletes the character at the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let offset = self.byte_offset(self.cursor);
            self.value.remove(offset);
        }
    }

    /// Moves the cursor left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor right.
    pub fn move_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    /// Moves the cursor to the start.
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Moves the cursor to the end.
    pub fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };

        let (text, text_style) = if self.value.is_empty() {
            (
                self.placeholder.as_str(),
                Style::default().fg(Color::DarkGray),
            )
        } else {
            (self.value.as_str(), Style::default().fg(Color::White))
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.label.as_str());
        let inner = block.inner(area);

        block.render(area, buf);
        Paragraph::new(text).style(text_style).render(inner, buf);

        if self.focused && inner.width > 0 {
            #[allow(clippy::cast_possible_truncation)]
            let cursor_x = inner.x + self.cursor as u16;
            if cursor_x < inner.x + inner.width {
                buf[(cursor_x, inner.y)]
                    .set_style(Style::default().bg(Color::White).fg(Color::Black));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input_editing() {
        let mut input = TextInput::new("Name", InputKind::Text);
        input.input_char('a');
        input.input_char('b');
        assert_eq!(input.value(), "ab");

        input.backspace();
        assert_eq!(input.value(), "a");

        input.clear();
        assert!(input.value().is_empty());
    }

    #[test]
    fn test_date_input_rejects_letters() {
        let mut input = TextInput::new("Date of Birth", InputKind::Date);
        input.input_char('1');
        input.input_char('9');
        input.input_char('x');
        input.input_char('-');
        assert_eq!(input.value(), "19-");
    }

    #[test]
    fn test_date_input_caps_length() {
        let mut input = TextInput::new("Date of Birth", InputKind::Date);
        input.set_value("1990-12-10");
        input.input_char('1');
        assert_eq!(input.value(), "1990-12-10");
    }

    #[test]
    fn test_cursor_insertion_mid_value() {
        let mut input = TextInput::new("Name", InputKind::Text);
        input.set_value("ac");
        input.move_left();
        input.input_char('b');
        assert_eq!(input.value(), "abc");
    }
}
