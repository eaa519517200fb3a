//! # MovieForm Component
//!
//! Controlled form for creating and editing a movie.
//!
//! `MovieFormState` owns the five text fields and the focus index. It never
//! talks to the server: a valid submit produces `FormEvent::Submit(draft)`
//! for the loop to turn into an action. Invalid input raises a blocking
//! alert that Enter or Esc dismisses.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding};

use crate::api::{Movie, MovieDraft, MovieId};
use crate::core::validation::{FormInput, validate};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::confirm_dialog::render_modal;
use crate::tui::components::text_field::{TextField, TextFieldView};
use crate::tui::event::TuiEvent;

const TITLE: usize = 0;
const YEAR: usize = 1;
const DIRECTOR: usize = 2;
const ACTORS: usize = 3;
const DESCRIPTION: usize = 4;
const FIELD_COUNT: usize = 5;

const LABELS: [&str; FIELD_COUNT] = [" Title * ", " Year * ", " Director ", " Actors ", " Description "];
const PLACEHOLDERS: [&str; FIELD_COUNT] = [
    "e.g., The Matrix",
    "e.g., 1999",
    "e.g., Lana Wachowski",
    "e.g., Keanu Reeves, Laurence Fishburne",
    "Write a description...",
];

#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    Submit(MovieDraft),
    Cancel,
}

pub struct MovieFormState {
    fields: [TextField; FIELD_COUNT],
    focused: usize,
    /// The record being edited; `None` in create mode.
    editing: Option<MovieId>,
    /// Validation message shown as a blocking modal.
    pub alert: Option<String>,
}

impl MovieFormState {
    /// Blank form.
    pub fn create() -> Self {
        Self::from_input(FormInput::default(), None)
    }

    /// Form pre-filled from `movie`.
    pub fn edit(movie: &Movie) -> Self {
        Self::from_input(FormInput::from_movie(movie), Some(movie.id))
    }

    fn from_input(input: FormInput, editing: Option<MovieId>) -> Self {
        Self {
            fields: [
                TextField::single_line(input.title),
                TextField::single_line(input.year),
                TextField::single_line(input.director),
                TextField::single_line(input.actors),
                TextField::multi_line(input.description),
            ],
            focused: TITLE,
            editing,
            alert: None,
        }
    }

    pub fn editing(&self) -> Option<MovieId> {
        self.editing
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn input(&self) -> FormInput {
        FormInput {
            title: self.fields[TITLE].value.clone(),
            year: self.fields[YEAR].value.clone(),
            director: self.fields[DIRECTOR].value.clone(),
            actors: self.fields[ACTORS].value.clone(),
            description: self.fields[DESCRIPTION].value.clone(),
        }
    }

    fn submit(&mut self) -> Option<FormEvent> {
        match validate(&self.input()) {
            // Fields stay until the server accepts the record, so a failed
            // add can be resubmitted. Success closes the form.
            Ok(draft) => Some(FormEvent::Submit(draft)),
            Err(err) => {
                log::debug!("Form rejected: {}", err);
                self.alert = Some(err.to_string());
                None
            }
        }
    }
}

impl EventHandler for MovieFormState {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        if self.alert.is_some() {
            if matches!(event, TuiEvent::Submit | TuiEvent::Escape) {
                self.alert = None;
            }
            return None;
        }

        match event {
            TuiEvent::Escape => Some(FormEvent::Cancel),
            TuiEvent::Submit => self.submit(),
            TuiEvent::NextField | TuiEvent::CursorDown => {
                self.focused = (self.focused + 1) % FIELD_COUNT;
                None
            }
            TuiEvent::PrevField | TuiEvent::CursorUp => {
                self.focused = (self.focused + FIELD_COUNT - 1) % FIELD_COUNT;
                None
            }
            other => {
                self.fields[self.focused].handle_event(other);
                None
            }
        }
    }
}

/// Transient render wrapper for the form.
pub struct MovieForm<'a> {
    pub state: &'a mut MovieFormState,
    /// A request for this form is in flight.
    pub submitting: bool,
}

impl Component for MovieForm<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let heading = if self.state.editing.is_some() {
            " Edit Movie "
        } else {
            " Add Movie "
        };
        let footer = if self.submitting {
            Line::from(Span::styled(" Processing... ", Style::default().fg(Color::Yellow)))
        } else {
            let action = if self.state.editing.is_some() { "Save" } else { "Add" };
            Line::from(format!(
                " Enter {action}  Tab Next  Ctrl+J Newline  Esc Cancel "
            ))
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(heading)
            .title_bottom(footer.centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let single = TextFieldView::height_for(1);
        let areas: [Rect; FIELD_COUNT] = Layout::vertical([
            Constraint::Length(single),
            Constraint::Length(single),
            Constraint::Length(single),
            Constraint::Length(single),
            Constraint::Min(TextFieldView::height_for(2)),
        ])
        .areas(inner);

        let focused = self.state.alert.is_none().then_some(self.state.focused);
        for (i, (field, field_area)) in self.state.fields.iter_mut().zip(areas).enumerate() {
            TextFieldView {
                field,
                label: LABELS[i],
                placeholder: PLACEHOLDERS[i],
                focused: focused == Some(i),
                disabled: self.submitting,
            }
            .render(frame, field_area);
        }

        if let Some(alert) = &self.state.alert {
            render_modal(frame, area, " Invalid input ", alert, " Enter/Esc OK ", Color::Yellow);
        }
    }
}
