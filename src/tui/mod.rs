//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop only redraws after an event, a finished request, or an
//! expired notification. While a request is in flight or a toast is showing
//! it polls every 100ms so the clock keeps moving; otherwise it sleeps up
//! to 500ms.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::api::effects::perform;
use crate::api::{HttpMovieService, Movie, MovieService};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Mode};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    ConfirmDialogState, ConfirmEvent, ConfirmTarget, FormEvent, MovieFormState, MoviesListState,
    TextField,
};
use crate::tui::components::text_field::FieldEvent;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which part of the viewing screen receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Search,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub movie_list: MoviesListState,
    pub search: TextField,
    pub focus: Focus,
    /// Present while `App.mode` is Adding or Editing.
    pub form: Option<MovieFormState>,
    /// Delete confirmation overlay (None = hidden)
    pub confirm: Option<ConfirmDialogState>,
    /// Server shown in the title bar.
    pub server: String,
}

impl TuiState {
    pub fn new(server: impl Into<String>) -> Self {
        Self {
            movie_list: MoviesListState::new(),
            search: TextField::single_line(""),
            focus: Focus::List,
            form: None,
            confirm: None,
            server: server.into(),
        }
    }

    /// Create, keep or drop the form so it matches `mode`. An open form
    /// for the same target survives, so typed input is not lost on redraw.
    pub fn sync_form(&mut self, mode: &Mode) {
        match mode {
            Mode::Viewing => self.form = None,
            Mode::Adding => {
                if !matches!(&self.form, Some(form) if form.editing().is_none()) {
                    self.form = Some(MovieFormState::create());
                }
            }
            Mode::Editing(movie) => {
                if self.form.as_ref().and_then(MovieFormState::editing) != Some(movie.id) {
                    self.form = Some(MovieFormState::edit(movie));
                }
            }
        }
    }

    fn selected_movie<'a>(&mut self, app: &'a App) -> Option<&'a Movie> {
        let visible = app.visible_movies();
        self.movie_list.clamp_selection(visible.len());
        visible.get(self.movie_list.selected).copied()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

/// Translate one terminal event into at most one action, updating
/// presentation state along the way.
pub fn handle_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }
    if matches!(event, TuiEvent::Resize) {
        return None;
    }

    // The confirm overlay swallows everything while open
    if let Some(confirm) = tui.confirm.as_mut() {
        let outcome = confirm.handle_event(event)?;
        tui.confirm = None;
        return match outcome {
            ConfirmEvent::Confirmed(ConfirmTarget::Movie(id)) => Some(Action::DeleteMovie(id)),
            ConfirmEvent::Confirmed(ConfirmTarget::All) => Some(Action::DeleteAll),
            ConfirmEvent::Cancelled => None,
        };
    }

    if app.is_loading {
        return matches!(event, TuiEvent::Escape | TuiEvent::InputChar('q'))
            .then_some(Action::Quit);
    }

    if let Some(form) = tui.form.as_mut() {
        // Disabled while its request is in flight
        if app.submitting && form.alert.is_none() {
            return None;
        }
        return match form.handle_event(event)? {
            FormEvent::Submit(draft) => Some(match form.editing() {
                Some(id) => Action::SubmitEdit(draft.into_movie(id)),
                None => Action::SubmitAdd(draft),
            }),
            FormEvent::Cancel => Some(Action::CancelForm),
        };
    }

    if tui.focus == Focus::Search {
        if matches!(event, TuiEvent::Escape | TuiEvent::Submit) {
            tui.focus = Focus::List;
            return None;
        }
        return match tui.search.handle_event(event)? {
            FieldEvent::Changed => Some(Action::SetSearch(tui.search.value.clone())),
        };
    }

    match event {
        TuiEvent::InputChar('/') => {
            tui.focus = Focus::Search;
            None
        }
        TuiEvent::InputChar('a') => Some(Action::StartAdding),
        TuiEvent::InputChar('e') | TuiEvent::Submit => tui
            .selected_movie(app)
            .map(|movie| Action::StartEditing(movie.clone())),
        TuiEvent::InputChar('d') => {
            if let Some(movie) = tui.selected_movie(app)
                && !app.is_deleting(movie.id)
            {
                tui.confirm = Some(ConfirmDialogState::delete_movie(movie));
            }
            None
        }
        TuiEvent::InputChar('D') => {
            if !app.movies.is_empty() && !app.clearing {
                tui.confirm = Some(ConfirmDialogState::delete_all(app.movies.len()));
            }
            None
        }
        TuiEvent::InputChar('r') => Some(Action::Reload),
        TuiEvent::InputChar('q') | TuiEvent::Escape => Some(Action::Quit),
        other => {
            let count = app.visible_movies().len();
            tui.movie_list.clamp_selection(count);
            tui.movie_list.handle_event(other);
            None
        }
    }
}

/// Run `action` through the reducer and start whatever I/O it asks for.
/// Returns true when the loop should exit.
fn dispatch(app: &mut App, action: Action, tx: &mpsc::Sender<Action>) -> bool {
    match update(app, action) {
        Effect::Quit => true,
        Effect::None => false,
        effect => {
            spawn_effect(effect, app.service.clone(), tx.clone());
            false
        }
    }
}

fn spawn_effect(effect: Effect, service: Arc<dyn MovieService>, tx: mpsc::Sender<Action>) {
    info!("Spawning {:?}", effect);
    tokio::spawn(async move {
        if let Some(action) = perform(effect, service.as_ref()).await
            && tx.send(action).is_err()
        {
            warn!("Failed to report request outcome: receiver dropped");
        }
    });
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let service: Arc<dyn MovieService> = Arc::new(HttpMovieService::new(config.base_url.clone()));
    let mut app = App::from_config(service, &config);
    let mut tui = TuiState::new(config.base_url.clone());

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let mut should_quit = dispatch(&mut app, Action::Load, &tx);
    let mut needs_redraw = true;

    while !should_quit {
        tui.sync_form(&app.mode);
        if app.expire_notification(Instant::now()) {
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let busy = app.is_loading
            || app.submitting
            || app.clearing
            || !app.deleting.is_empty()
            || app.notification.is_some();
        let timeout = if busy {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = handle_event(&app, &mut tui, &event) {
                debug!("Key produced {:?}", action);
                if dispatch(&mut app, action, &tx) {
                    should_quit = true;
                    break;
                }
                tui.sync_form(&app.mode);
            }
        }

        // Outcomes of finished requests
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if dispatch(&mut app, action, &tx) {
                should_quit = true;
            }
        }
    }

    info!("Shutting down");
    ratatui::restore();
    Ok(())
}
