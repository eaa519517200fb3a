use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};

use crate::api::Movie;
use crate::tui::component::Component;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

/// A stateless component that renders one movie record.
///
/// Created fresh each frame by `MoviesList`. The only per-item state the user
/// can see, the in-flight delete, comes in as the `is_deleting` prop.
#[derive(Clone, Copy)]
pub struct MovieListItem<'a> {
    pub movie: &'a Movie,
    pub is_selected: bool,
    pub is_deleting: bool,
}

impl<'a> MovieListItem<'a> {
    pub fn new(movie: &'a Movie, is_selected: bool, is_deleting: bool) -> Self {
        Self {
            movie,
            is_selected,
            is_deleting,
        }
    }

    /// Plain-text lines in render order. Shared by layout and rendering so
    /// the predicted height always matches what is drawn.
    fn text_lines(movie: &Movie) -> Vec<(String, Style)> {
        let mut lines = vec![(
            format!("{} ({})", movie.title, movie.year),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if let Some(director) = movie.director() {
            lines.push((
                format!("directed by {director}"),
                Style::default().add_modifier(Modifier::ITALIC),
            ));
        }
        if let Some(actors) = movie.actors() {
            lines.push((format!("starring {actors}"), Style::default().fg(Color::Gray)));
        }
        if let Some(description) = movie.description() {
            for paragraph in description.lines() {
                lines.push((paragraph.to_string(), Style::default().fg(Color::DarkGray)));
            }
        }
        lines
    }

    /// Height of the rendered item at `width`, without rendering it.
    ///
    /// Uses the same wrapping rules as ratatui's `Paragraph` with `trim: true`
    /// so `MoviesList` can lay out its scroll view up front.
    pub fn calculate_height(movie: &Movie, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            return 1;
        }

        let options = || {
            textwrap::Options::new(content_width as usize)
                .break_words(true)
                .word_separator(textwrap::WordSeparator::AsciiSpace)
        };

        let content: usize = Self::text_lines(movie)
            .iter()
            .map(|(line, _)| textwrap::wrap(line, options()).len().max(1))
            .sum();
        u16::try_from(content)
            .unwrap_or(u16::MAX)
            .saturating_add(VERTICAL_OVERHEAD)
    }
}

impl Widget for MovieListItem<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let border_style = if self.is_deleting {
            Style::default().fg(Color::Red).add_modifier(Modifier::DIM)
        } else if self.is_selected {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };

        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H));
        if self.is_deleting {
            block = block.title_bottom(Line::from(" Deleting... ").right_aligned());
        } else if self.is_selected {
            block = block.title_bottom(Line::from(" e Edit  d Delete ").right_aligned());
        }

        let inner_area = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = Self::text_lines(self.movie)
            .into_iter()
            .map(|(text, style)| Line::from(Span::styled(text, style)))
            .collect();

        let mut paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        if self.is_deleting {
            paragraph = paragraph.style(Style::default().add_modifier(Modifier::DIM));
        }
        paragraph.render(inner_area, buf);
    }
}

impl Component for MovieListItem<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }
}
