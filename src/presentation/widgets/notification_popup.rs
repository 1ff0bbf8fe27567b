//! Transient notification banner.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::{Notification, NotificationLevel};

/// Dismissible banner shown in the top-right corner.
pub struct NotificationPopup<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationPopup<'a> {
    /// Creates the popup for the active notification.
    #[must_use]
    pub const fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }

    const fn title(&self) -> &'static str {
        match self.notification.level {
            NotificationLevel::Success => " Success ",
            NotificationLevel::Error => " Error ",
        }
    }

    const fn color(&self) -> Color {
        match self.notification.level {
            NotificationLevel::Success => Color::Green,
            NotificationLevel::Error => Color::Red,
        }
    }
}

impl Widget for NotificationPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let message = &self.notification.message;

        let max_width = 50.min(area.width.saturating_sub(2));
        let width = u16::try_from(message.width())
            .unwrap_or(u16::MAX)
            .saturating_add(4)
            .min(max_width)
            .max(12);

        let inner_width = width.saturating_sub(2).max(1);
        let content_width = u16::try_from(message.width()).unwrap_or(0);
        let lines = content_width.div_ceil(inner_width);
        let height = lines.saturating_add(2).clamp(3, 8);

        let x = area.width.saturating_sub(width).saturating_sub(1);
        let popup_area = Rect::new(x, 1, width, height);

        let intersection = area.intersection(popup_area);
        if intersection.area() == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.title())
            .style(Style::default().fg(self.color()));

        let para = Paragraph::new(message.as_str())
            .block(block)
            .wrap(Wrap { trim: true })
            .style(Style::default().add_modifier(Modifier::BOLD));

        Clear.render(intersection, buf);
        para.render(intersection, buf);
    }
}
