//! Transient toast drawn in the bottom-right corner.
//!
//! Expiry is handled by `App::expire_notification`; this component only draws.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::core::state::{Notification, NotificationLevel};
use crate::tui::component::Component;

const MAX_WIDTH: u16 = 50;

pub struct Toast<'a> {
    pub notification: &'a Notification,
}

impl Toast<'_> {
    fn accent(&self) -> Color {
        match self.notification.level {
            NotificationLevel::Info => Color::Green,
            NotificationLevel::Error => Color::Red,
        }
    }

    /// Bottom-right rect sized to the message, clamped to `area`.
    fn placement(&self, area: Rect) -> Rect {
        let text_width = self.notification.message.width() as u16;
        let width = (text_width + 4).min(MAX_WIDTH).min(area.width);
        let inner = width.saturating_sub(4).max(1) as usize;
        let lines = textwrap::wrap(&self.notification.message, inner).len().max(1) as u16;
        let height = (lines + 2).min(area.height);
        Rect::new(
            area.x + area.width.saturating_sub(width + 1),
            area.y + area.height.saturating_sub(height),
            width,
            height,
        )
    }
}

impl Component for Toast<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rect = self.placement(area);
        frame.render_widget(Clear, rect);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.accent()))
            .padding(Padding::horizontal(1));
        let paragraph = Paragraph::new(self.notification.message.as_str())
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(self.accent()))
            .block(block);
        frame.render_widget(paragraph, rect);
    }
}
