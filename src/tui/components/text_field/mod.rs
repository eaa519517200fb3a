//! # TextField Component
//!
//! A bordered, editable text input used by the search bar and every form field.
//!
//! ## State Management
//!
//! `TextField` owns the buffer, the cursor byte offset and (for multi-line
//! fields) the vertical scroll offset. Whether the field is focused or
//! disabled is a prop passed to `TextFieldView` at render time.

mod text_wrap;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use text_wrap::{
    CONTENT_OFFSET_X, CONTENT_OFFSET_Y, VERTICAL_OVERHEAD, column_of, inner_width, line_of,
    next_char_boundary, prev_char_boundary, wrap_line_count, wrap_options,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    /// The buffer content changed.
    Changed,
}

#[derive(Debug, Clone)]
pub struct TextField {
    pub value: String,
    /// Cursor position as byte offset in value (0..=value.len())
    pos: usize,
    multiline: bool,
    /// First visible wrapped line (multi-line only)
    scroll_offset: u16,
}

impl TextField {
    pub fn single_line(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            pos: value.len(),
            value,
            multiline: false,
            scroll_offset: 0,
        }
    }

    pub fn multi_line(value: impl Into<String>) -> Self {
        Self {
            multiline: true,
            ..Self::single_line(value)
        }
    }

    pub fn cursor(&self) -> usize {
        self.pos
    }


    fn insert_str(&mut self, text: &str) {
        let text = if self.multiline {
            text.to_string()
        } else {
            text.replace(['\r', '\n'], " ")
        };
        self.value.insert_str(self.pos, &text);
        self.pos += text.len();
    }

    /// Keeps the cursor line inside the visible window of `rows` lines.
    fn update_scroll_offset(&mut self, width: u16, rows: u16) {
        let total = wrap_line_count(&self.value, width);
        if total <= rows {
            self.scroll_offset = 0;
            return;
        }
        let line = line_of(&self.value, self.pos, width);
        if line < self.scroll_offset {
            self.scroll_offset = line;
        } else if line >= self.scroll_offset + rows {
            self.scroll_offset = line + 1 - rows;
        }
    }
}

impl EventHandler for TextField {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.value.insert(self.pos, *c);
                self.pos += c.len_utf8();
                Some(FieldEvent::Changed)
            }
            TuiEvent::Newline if self.multiline => {
                self.insert_str("\n");
                Some(FieldEvent::Changed)
            }
            TuiEvent::Paste(text) => {
                self.insert_str(text);
                Some(FieldEvent::Changed)
            }
            TuiEvent::Backspace => {
                if self.pos == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.value, self.pos);
                self.value.drain(prev..self.pos);
                self.pos = prev;
                Some(FieldEvent::Changed)
            }
            TuiEvent::Delete => {
                if self.pos >= self.value.len() {
                    return None;
                }
                let next = next_char_boundary(&self.value, self.pos);
                self.value.drain(self.pos..next);
                Some(FieldEvent::Changed)
            }
            TuiEvent::CursorLeft => {
                if self.pos > 0 {
                    self.pos = prev_char_boundary(&self.value, self.pos);
                }
                None
            }
            TuiEvent::CursorRight => {
                if self.pos < self.value.len() {
                    self.pos = next_char_boundary(&self.value, self.pos);
                }
                None
            }
            TuiEvent::CursorHome => {
                self.pos = self.value[..self.pos]
                    .rfind('\n')
                    .map(|i| i + 1)
                    .unwrap_or(0);
                None
            }
            TuiEvent::CursorEnd => {
                self.pos = self.value[self.pos..]
                    .find('\n')
                    .map(|i| self.pos + i)
                    .unwrap_or(self.value.len());
                None
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for a `TextField`.
pub struct TextFieldView<'a> {
    pub field: &'a mut TextField,
    pub label: &'a str,
    pub placeholder: &'a str,
    pub focused: bool,
    pub disabled: bool,
}

impl TextFieldView<'_> {
    /// Height needed for a field showing `rows` lines of text.
    pub fn height_for(rows: u16) -> u16 {
        rows + VERTICAL_OVERHEAD
    }

    fn border_style(&self) -> Style {
        if self.disabled {
            Style::default().fg(Color::DarkGray)
        } else if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        }
    }
}

impl Component for TextFieldView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = inner_width(area.width);
        let rows = area.height.saturating_sub(VERTICAL_OVERHEAD).max(1);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.border_style())
            .title(Span::styled(self.label, self.border_style()))
            .padding(Padding::horizontal(1));

        if self.field.value.is_empty() {
            let placeholder = Paragraph::new(Line::from(Span::styled(
                self.placeholder,
                Style::default().fg(Color::DarkGray),
            )))
            .block(block);
            frame.render_widget(placeholder, area);
            if self.focused && !self.disabled {
                frame.set_cursor_position((area.x + CONTENT_OFFSET_X, area.y + CONTENT_OFFSET_Y));
            }
            return;
        }

        let text_style = if self.disabled {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        if self.field.multiline {
            self.field.update_scroll_offset(width, rows);
            let lines: Vec<String> = textwrap::wrap(&self.field.value, wrap_options(width.max(1)))
                .into_iter()
                .skip(self.field.scroll_offset as usize)
                .take(rows as usize)
                .map(|l| l.into_owned())
                .collect();
            frame.render_widget(Paragraph::new(lines.join("\n")).style(text_style).block(block), area);

            if self.focused && !self.disabled {
                let line = line_of(&self.field.value, self.field.pos, width)
                    .saturating_sub(self.field.scroll_offset);
                let col = column_of(&self.field.value, self.field.pos, width);
                frame.set_cursor_position((
                    area.x + CONTENT_OFFSET_X + col,
                    area.y + CONTENT_OFFSET_Y + line,
                ));
            }
            return;
        }

        // Single line: scroll horizontally so the cursor stays visible.
        let before_width = self.field.value[..self.field.pos].width() as u16;
        let skip_cols = before_width.saturating_sub(width.saturating_sub(1));
        let mut skipped = 0u16;
        let visible: String = self
            .field
            .value
            .chars()
            .skip_while(|c| {
                if skipped >= skip_cols {
                    return false;
                }
                skipped += unicode_width::UnicodeWidthChar::width(*c).unwrap_or(0) as u16;
                true
            })
            .collect();
        frame.render_widget(Paragraph::new(visible).style(text_style).block(block), area);

        if self.focused && !self.disabled {
            let col = before_width.saturating_sub(skipped);
            frame.set_cursor_position((area.x + CONTENT_OFFSET_X + col, area.y + CONTENT_OFFSET_Y));
        }
    }
}
