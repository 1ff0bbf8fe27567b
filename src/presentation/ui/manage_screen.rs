//! User management screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::domain::entities::{UserDraft, UserId, UserRecord};
use crate::domain::notification::Notification;
use crate::presentation::widgets::{
    FormAction, FormMode, NotificationPopup, UserForm, UserTable, UserTableState,
};

/// Which pane receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Form,
    Table,
}

/// What the application should do in response to a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenAction {
    /// Nothing to do.
    None,
    /// Exit the application.
    Quit,
    /// Submit the drafted fields (create or update per form mode).
    Submit(UserDraft),
    /// Start editing the given record.
    EditUser(UserId),
    /// Delete the given record.
    DeleteUser(UserId),
    /// Abandon edit mode.
    CancelEdit,
    /// Clear the active notification.
    DismissNotification,
}

/// Form, table, and focus state of the single screen.
pub struct ManageScreen {
    form: UserForm,
    table: UserTableState,
    focus: Focus,
}

impl ManageScreen {
    /// Creates the screen with the form focused.
    #[must_use]
    pub fn new() -> Self {
        let mut screen = Self {
            form: UserForm::new(),
            table: UserTableState::default(),
            focus: Focus::Form,
        };
        screen.apply_focus();
        screen
    }

    /// Seeds the form from a record draft and enters edit mode.
    pub fn start_edit(&mut self, draft: &UserDraft) {
        self.form.load_draft(draft);
        self.focus = Focus::Form;
        self.apply_focus();
    }

    /// Empties the form and returns it to create mode.
    pub fn reset_form(&mut self) {
        self.form.reset();
    }

    /// Handles a key event against the current list state.
    ///
    /// Esc is modal: it dismisses an active notification first, then
    /// abandons edit mode, and only then quits.
    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        users: &[UserRecord],
        has_notification: bool,
    ) -> ScreenAction {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return ScreenAction::Quit;
        }

        if key.code == KeyCode::Esc {
            if has_notification {
                return ScreenAction::DismissNotification;
            }
            if self.form.mode() == FormMode::Edit {
                return ScreenAction::CancelEdit;
            }
            return ScreenAction::Quit;
        }

        match key.code {
            KeyCode::Tab => {
                self.focus_next();
                ScreenAction::None
            }
            KeyCode::BackTab => {
                self.focus_prev();
                ScreenAction::None
            }
            _ => match self.focus {
                Focus::Form => match self.form.handle_key(key) {
                    FormAction::Submit => ScreenAction::Submit(self.form.draft()),
                    FormAction::None => ScreenAction::None,
                },
                Focus::Table => self.handle_table_key(key, users),
            },
        }
    }

    fn handle_table_key(&mut self, key: KeyEvent, users: &[UserRecord]) -> ScreenAction {
        match key.code {
            KeyCode::Char('q') => ScreenAction::Quit,
            KeyCode::Char('e') | KeyCode::Enter => self
                .selected_id(users)
                .map_or(ScreenAction::None, ScreenAction::EditUser),
            KeyCode::Char('d') | KeyCode::Delete => self
                .selected_id(users)
                .map_or(ScreenAction::None, ScreenAction::DeleteUser),
            _ => {
                self.table.handle_key(key, users.len());
                ScreenAction::None
            }
        }
    }

    fn selected_id(&self, users: &[UserRecord]) -> Option<UserId> {
        self.table
            .selected(users.len())
            .map(|index| users[index].id())
    }

    fn focus_next(&mut self) {
        match self.focus {
            Focus::Form => {
                if !self.form.advance_focus() {
                    self.focus = Focus::Table;
                }
            }
            Focus::Table => {
                self.focus = Focus::Form;
                self.form.focus_first();
            }
        }
        self.apply_focus();
    }

    fn focus_prev(&mut self) {
        match self.focus {
            Focus::Form => {
                if !self.form.retreat_focus() {
                    self.focus = Focus::Table;
                }
            }
            Focus::Table => {
                self.focus = Focus::Form;
                self.form.focus_last();
            }
        }
        self.apply_focus();
    }

    fn apply_focus(&mut self) {
        self.form.set_focused(self.focus == Focus::Form);
        self.table.set_focused(self.focus == Focus::Table);
    }

    fn footer_line(&self) -> Line<'static> {
        let hint = |text: &'static str| Span::styled(text, Style::default().fg(Color::DarkGray));
        let sep = || Span::raw(" | ");

        let spans = match self.focus {
            Focus::Form => vec![
                hint("Tab: Move Focus"),
                sep(),
                hint("Enter: Submit"),
                sep(),
                hint("Esc: Quit"),
            ],
            Focus::Table => vec![
                hint("Up/Down: Select"),
                sep(),
                hint("e: Edit"),
                sep(),
                hint("d: Delete"),
                sep(),
                hint("Tab: Move Focus"),
                sep(),
                hint("q: Quit"),
            ],
        };
        Line::from(spans)
    }

    /// Draws the screen.
    pub fn render(
        &mut self,
        frame: &mut Frame<'_>,
        users: &[UserRecord],
        notification: Option<&Notification>,
    ) {
        let [content, footer] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());
        let [form_area, table_area] =
            Layout::horizontal([Constraint::Length(42), Constraint::Fill(1)]).areas(content);

        frame.render_widget(&self.form, form_area);
        frame.render_stateful_widget(UserTable::new(users), table_area, &mut self.table);
        frame.render_widget(Paragraph::new(self.footer_line()), footer);

        if let Some(notification) = notification {
            frame.render_widget(NotificationPopup::new(notification), frame.area());
        }
    }
}

impl Default for ManageScreen {
    fn default() -> Self {
        Self::new()
    }
}
