//! Registered users table.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Row, StatefulWidget, Table, TableState, Widget, Wrap},
};

use crate::domain::entities::UserRecord;

/// Selection and focus state of the table pane, kept across frames.
#[derive(Debug, Default)]
pub struct UserTableState {
    selected: usize,
    focused: bool,
}

impl UserTableState {
    /// Sets whether the table pane is active.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Returns whether the table pane is active.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Returns the selected row index, or `None` for an empty table.
    #[must_use]
    pub fn selected(&self, row_count: usize) -> Option<usize> {
        if row_count == 0 {
            None
        } else {
            Some(self.selected.min(row_count - 1))
        }
    }

    /// Handles navigation keys.
    pub fn handle_key(&mut self, key: KeyEvent, row_count: usize) {
        match key.code {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => {
                if self.selected + 1 < row_count {
                    self.selected += 1;
                }
            }
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = row_count.saturating_sub(1),
            _ => {}
        }
        self.selected = self.selected.min(row_count.saturating_sub(1));
    }
}

/// Renders the user list for one frame.
pub struct UserTable<'a> {
    users: &'a [UserRecord],
}

impl<'a> UserTable<'a> {
    /// Creates the table over the current list.
    #[must_use]
    pub const fn new(users: &'a [UserRecord]) -> Self {
        Self { users }
    }
}

impl StatefulWidget for UserTable<'_> {
    type State = UserTableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let border_style = if state.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Registered Users ");
        let inner = block.inner(area);
        block.render(area, buf);

        if self.users.is_empty() {
            Paragraph::new("No users found. Add a user to see them listed here.")
                .style(Style::default().fg(Color::DarkGray))
                .wrap(Wrap { trim: true })
                .render(inner, buf);
            return;
        }

        let header = Row::new(["Name", "Email", "Date of Birth"]).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

        let rows = self.users.iter().map(|user| {
            Row::new([
                user.name().to_string(),
                user.email().to_string(),
                user.date_of_birth().to_string(),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Fill(1),
                Constraint::Fill(1),
                Constraint::Length(13),
            ],
        )
        .header(header)
        .row_highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

        let mut table_state =
            TableState::default().with_selected(state.selected(self.users.len()));
        StatefulWidget::render(table, inner, buf, &mut table_state);
    }
}
