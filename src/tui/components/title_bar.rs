//! # TitleBar Component
//!
//! Top status bar: application name, server, and what is in flight.
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.service.name(), status_text(&app));
//! title_bar.render(frame, area);
//! ```

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar<'a> {
    /// Where the collection lives (e.g. "http://localhost:8000")
    pub server: &'a str,
    /// Status message (e.g. "Loading...", "Processing...")
    pub status_message: &'a str,
}

impl<'a> TitleBar<'a> {
    pub fn new(server: &'a str, status_message: &'a str) -> Self {
        Self {
            server,
            status_message,
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled("Marquee", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!(" ({})", self.server)),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status_message)));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
