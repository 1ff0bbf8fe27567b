//! User entry form.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::text_input::{InputKind, TextInput};
use crate::domain::entities::UserDraft;

/// Whether submit creates a new record or updates the edited one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Submit creates a new user.
    Create,
    /// Submit updates the user being edited.
    Edit,
}

/// Result of a key event handled by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// Nothing to do.
    None,
    /// Submit the current draft.
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FocusField {
    Name,
    Email,
    BirthDate,
}

impl FocusField {
    const fn next(self) -> Option<Self> {
        match self {
            Self::Name => Some(Self::Email),
            Self::Email => Some(Self::BirthDate),
            Self::BirthDate => None,
        }
    }

    const fn prev(self) -> Option<Self> {
        match self {
            Self::Name => None,
            Self::Email => Some(Self::Name),
            Self::BirthDate => Some(Self::Email),
        }
    }
}

/// The three-field user form.
pub struct UserForm {
    name: TextInput,
    email: TextInput,
    birth_date: TextInput,
    focus: FocusField,
    focused: bool,
    mode: FormMode,
}

impl UserForm {
    /// Creates an empty form in create mode with the name field focused.
    #[must_use]
    pub fn new() -> Self {
        let mut form = Self {
            name: TextInput::new("Name", InputKind::Text).placeholder("Name..."),
            email: TextInput::new("Email", InputKind::Email).placeholder("email address..."),
            birth_date: TextInput::new("Date of Birth", InputKind::Date)
                .placeholder("YYYY-MM-DD"),
            focus: FocusField::Name,
            focused: true,
            mode: FormMode::Create,
        };
        form.sync_focus();
        form
    }

    /// Returns the current mode.
    #[must_use]
    pub const fn mode(&self) -> FormMode {
        self.mode
    }

    /// Sets whether the form pane is active.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        self.sync_focus();
    }

    /// Collects the drafted field values.
    #[must_use]
    pub fn draft(&self) -> UserDraft {
        UserDraft::new(
            self.name.value(),
            self.email.value(),
            self.birth_date.value(),
        )
    }

    /// Seeds the fields from a draft and switches to edit mode.
    pub fn load_draft(&mut self, draft: &UserDraft) {
        self.name.set_value(draft.name.clone());
        self.email.set_value(draft.email.clone());
        self.birth_date.set_value(draft.date_of_birth.clone());
        self.mode = FormMode::Edit;
        self.focus = FocusField::Name;
        self.sync_focus();
    }

    /// Empties the fields and returns to create mode.
    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.birth_date.clear();
        self.mode = FormMode::Create;
        self.focus = FocusField::Name;
        self.sync_focus();
    }

    /// Focuses the first field.
    pub fn focus_first(&mut self) {
        self.focus = FocusField::Name;
        self.sync_focus();
    }

    /// Focuses the last field.
    pub fn focus_last(&mut self) {
        self.focus = FocusField::BirthDate;
        self.sync_focus();
    }

    /// Moves focus to the next field. Returns false when focus was already
    /// on the last field, so the caller can step out of the form.
    pub fn advance_focus(&mut self) -> bool {
        match self.focus.next() {
            Some(next) => {
                self.focus = next;
                self.sync_focus();
                true
            }
            None => false,
        }
    }

    /// Moves focus to the previous field. Returns false when focus was
    /// already on the first field.
    pub fn retreat_focus(&mut self) -> bool {
        match self.focus.prev() {
            Some(prev) => {
                self.focus = prev;
                self.sync_focus();
                true
            }
            None => false,
        }
    }

    /// Handles a key event routed to the form pane.
    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        let input = self.focused_input_mut();
        match key.code {
            KeyCode::Enter => return FormAction::Submit,
            KeyCode::Char(c) => input.input_char(c),
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => input.move_left(),
            KeyCode::Right => input.move_right(),
            KeyCode::Home => input.move_start(),
            KeyCode::End => input.move_end(),
            _ => {}
        }
        FormAction::None
    }

    fn focused_input_mut(&mut self) -> &mut TextInput {
        match self.focus {
            FocusField::Name => &mut self.name,
            FocusField::Email => &mut self.email,
            FocusField::BirthDate => &mut self.birth_date,
        }
    }

    fn sync_focus(&mut self) {
        self.name
            .set_focused(self.focused && self.focus == FocusField::Name);
        self.email
            .set_focused(self.focused && self.focus == FocusField::Email);
        self.birth_date
            .set_focused(self.focused && self.focus == FocusField::BirthDate);
    }

    fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => " Add New User ",
            FormMode::Edit => " Edit User ",
        }
    }

    fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Enter: Add User",
            FormMode::Edit => "Enter: Update User",
        }
    }
}

impl Default for UserForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &UserForm {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.title());
        let inner = block.inner(area);
        block.render(area, buf);

        let [name_area, email_area, birth_area, _, hint_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        (&self.name).render(name_area, buf);
        (&self.email).render(email_area, buf);
        (&self.birth_date).render(birth_area, buf);

        let mut hints = vec![
            Span::styled(self.submit_label(), Style::default().fg(Color::DarkGray)),
            Span::raw(" | "),
            Span::styled("Tab: Next Field", Style::default().fg(Color::DarkGray)),
        ];
        if self.mode == FormMode::Edit {
            hints.push(Span::raw(" | "));
            hints.push(Span::styled(
                "Esc: Cancel Edit",
                Style::default().fg(Color::Yellow),
            ));
        }
        Paragraph::new(Line::from(hints)).render(hint_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(form: &mut UserForm, text: &str) {
        for c in text.chars() {
            form.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_typing_routes_to_focused_field() {
        let mut form = UserForm::new();
        type_text(&mut form, "Ada");
        assert!(form.advance_focus());
        type_text(&mut form, "ada@example.com");
        assert!(form.advance_focus());
        type_text(&mut form, "1990-12-10");

        let draft = form.draft();
        assert_eq!(draft.name, "Ada");
        assert_eq!(draft.email, "ada@example.com");
        assert_eq!(draft.date_of_birth, "1990-12-10");
    }

    #[test]
    fn test_focus_traversal_bounds() {
        let mut form = UserForm::new();
        assert!(!form.retreat_focus());
        assert!(form.advance_focus());
        assert!(form.advance_focus());
        assert!(!form.advance_focus());
    }

    #[test]
    fn test_enter_submits() {
        let mut form = UserForm::new();
        assert_eq!(form.handle_key(key(KeyCode::Enter)), FormAction::Submit);
    }

    #[test]
    fn test_load_draft_switches_to_edit_mode() {
        let mut form = UserForm::new();
        form.load_draft(&UserDraft::new("Ada", "ada@example.com", "1990-12-10"));

        assert_eq!(form.mode(), FormMode::Edit);
        assert_eq!(form.draft().name, "Ada");
    }

    #[test]
    fn test_reset_returns_to_create_mode() {
        let mut form = UserForm::new();
        form.load_draft(&UserDraft::new("Ada", "ada@example.com", "1990-12-10"));
        form.reset();

        assert_eq!(form.mode(), FormMode::Create);
        assert_eq!(form.draft(), UserDraft::default());
    }
}
