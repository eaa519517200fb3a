//! # ConfirmDialog Component
//!
//! Blocking yes/no overlay shown before destructive requests.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ConfirmDialogState` lives in `TuiState` while the question is open
//! - `ConfirmDialog` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph, Wrap};

use crate::api::{Movie, MovieId};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::centered_rect;
use crate::tui::event::TuiEvent;

/// What gets deleted if the user says yes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmTarget {
    Movie(MovieId),
    All,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmEvent {
    Confirmed(ConfirmTarget),
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub target: ConfirmTarget,
    pub prompt: String,
}

impl ConfirmDialogState {
    pub fn delete_movie(movie: &Movie) -> Self {
        Self {
            target: ConfirmTarget::Movie(movie.id),
            prompt: format!("Are you sure you want to delete \"{}\"?", movie.title),
        }
    }

    pub fn delete_all(count: usize) -> Self {
        Self {
            target: ConfirmTarget::All,
            prompt: format!("Are you sure you want to delete all {count} movies?"),
        }
    }
}

impl EventHandler for ConfirmDialogState {
    type Event = ConfirmEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Submit | TuiEvent::InputChar('y' | 'Y') => {
                Some(ConfirmEvent::Confirmed(self.target))
            }
            TuiEvent::Escape | TuiEvent::InputChar('n' | 'N') => Some(ConfirmEvent::Cancelled),
            _ => None,
        }
    }
}

pub struct ConfirmDialog<'a> {
    pub state: &'a ConfirmDialogState,
}

impl Component for ConfirmDialog<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        render_modal(
            frame,
            area,
            " Confirm ",
            &self.state.prompt,
            " y/Enter Delete  n/Esc Cancel ",
            Color::Red,
        );
    }
}

/// Draw a small centered box over whatever is underneath.
/// Shared by the confirm dialog and the form's validation alert.
pub fn render_modal(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    hint: &str,
    accent: Color,
) {
    let width_pct = if area.width < 60 { 90 } else { 60 };
    // Borders + blank line + message + blank line
    let overlay_width = (u32::from(area.width) * u32::from(width_pct) / 100) as u16;
    let inner_width = overlay_width.saturating_sub(4).max(1) as usize;
    let message_lines = textwrap::wrap(message, inner_width).len().max(1) as u16;
    let overlay = centered_rect(width_pct, message_lines + 4, area);

    frame.render_widget(Clear, overlay);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent))
        .title(Span::styled(
            title.to_string(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(hint.to_string()).centered())
        .padding(Padding::new(1, 1, 1, 1));

    let paragraph = Paragraph::new(message.to_string())
        .wrap(Wrap { trim: true })
        .centered()
        .block(block);
    frame.render_widget(paragraph, overlay);
}
