//! # Actions
//!
//! Everything that can happen in Marquee becomes an `Action`.
//! User presses `a`? That's `Action::StartAdding`.
//! Server confirms a delete? That's `Action::MovieDeleted(id)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state and returns an `Effect`: the I/O the caller should perform next.
//! No network calls happen here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::api::{Movie, MovieDraft, MovieId};
use crate::core::state::{App, Mode, NotificationLevel};

/// A remote operation, used to word failure messages and to know which
/// in-flight flag to clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Add,
    Edit,
    Delete(MovieId),
    DeleteAll,
}

impl Operation {
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::Load => "Failed to load movies",
            Operation::Add => "Failed to add movie",
            Operation::Edit => "Failed to update movie",
            Operation::Delete(_) => "Failed to delete movie",
            Operation::DeleteAll => "Failed to delete all movies",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Initial fetch of the collection.
    Load,
    /// User-requested refetch. Ignored while a fetch is already running.
    Reload,
    MoviesLoaded(Vec<Movie>),

    StartAdding,
    StartEditing(Movie),
    CancelForm,

    SubmitAdd(MovieDraft),
    MovieAdded(Movie),
    /// Full replacement record: the draft with the edited movie's id merged in.
    SubmitEdit(Movie),
    MovieUpdated(Movie),

    /// Confirmed delete of one record.
    DeleteMovie(MovieId),
    MovieDeleted(MovieId),
    /// Confirmed delete of the whole collection.
    DeleteAll,
    AllDeleted,

    SetSearch(String),
    RequestFailed {
        operation: Operation,
        message: String,
    },
    DismissNotification,
    Quit,
}

/// I/O requested by `update`. Executed by `api::effects::perform`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    FetchMovies,
    CreateMovie(MovieDraft),
    UpdateMovie(Movie),
    DeleteMovie(MovieId),
    DeleteAllMovies,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Load => {
            app.is_loading = true;
            Effect::FetchMovies
        }
        Action::Reload => {
            if app.is_loading {
                return Effect::None;
            }
            app.is_loading = true;
            Effect::FetchMovies
        }
        Action::MoviesLoaded(movies) => {
            info!("Loaded {} movies", movies.len());
            app.movies = movies;
            app.is_loading = false;
            app.error = None;
            Effect::None
        }

        Action::StartAdding => {
            if app.submitting {
                return Effect::None;
            }
            app.mode = Mode::Adding;
            Effect::None
        }
        Action::StartEditing(movie) => {
            if app.submitting {
                return Effect::None;
            }
            app.mode = Mode::Editing(movie);
            Effect::None
        }
        Action::CancelForm => {
            if !app.submitting {
                app.mode = Mode::Viewing;
            }
            Effect::None
        }

        Action::SubmitAdd(draft) => {
            if app.submitting || app.mode != Mode::Adding {
                debug!("Ignoring add submission (submitting={})", app.submitting);
                return Effect::None;
            }
            app.submitting = true;
            Effect::CreateMovie(draft)
        }
        Action::MovieAdded(movie) => {
            app.submitting = false;
            app.error = None;
            let title = movie.title.clone();
            // Exactly once, even if the server hands back an id we already hold.
            match app.movies.iter_mut().find(|m| m.id == movie.id) {
                Some(existing) => *existing = movie,
                None => app.movies.push(movie),
            }
            if app.mode == Mode::Adding {
                app.mode = Mode::Viewing;
            }
            app.notify(NotificationLevel::Info, format!("Added \"{title}\""));
            Effect::None
        }
        Action::SubmitEdit(movie) => {
            let editing_same = matches!(&app.mode, Mode::Editing(current) if current.id == movie.id);
            if app.submitting || !editing_same {
                debug!("Ignoring edit submission for {}", movie.id);
                return Effect::None;
            }
            app.submitting = true;
            Effect::UpdateMovie(movie)
        }
        Action::MovieUpdated(movie) => {
            app.submitting = false;
            app.error = None;
            let title = movie.title.clone();
            let id = movie.id;
            match app.movies.iter_mut().find(|m| m.id == id) {
                Some(existing) => *existing = movie,
                None => warn!("Updated movie {} is not in the local list", id),
            }
            if matches!(&app.mode, Mode::Editing(current) if current.id == id) {
                app.mode = Mode::Viewing;
            }
            app.notify(NotificationLevel::Info, format!("Updated \"{title}\""));
            Effect::None
        }

        Action::DeleteMovie(id) => {
            if app.is_deleting(id) || !app.movies.iter().any(|m| m.id == id) {
                return Effect::None;
            }
            app.deleting.insert(id);
            Effect::DeleteMovie(id)
        }
        Action::MovieDeleted(id) => {
            app.deleting.remove(&id);
            app.error = None;
            app.movies.retain(|m| m.id != id);
            app.notify(NotificationLevel::Info, "Movie deleted");
            Effect::None
        }
        Action::DeleteAll => {
            if app.clearing {
                return Effect::None;
            }
            app.clearing = true;
            Effect::DeleteAllMovies
        }
        Action::AllDeleted => {
            app.clearing = false;
            app.error = None;
            let count = app.movies.len();
            app.movies.clear();
            app.notify(NotificationLevel::Info, format!("Deleted {count} movies"));
            Effect::None
        }

        Action::SetSearch(term) => {
            app.search_term = term;
            Effect::None
        }
        Action::RequestFailed { operation, message } => {
            warn!("{:?} failed: {}", operation, message);
            match operation {
                Operation::Load => app.is_loading = false,
                Operation::Add | Operation::Edit => app.submitting = false,
                Operation::Delete(id) => {
                    app.deleting.remove(&id);
                }
                Operation::DeleteAll => app.clearing = false,
            }
            let text = format!("{} ({})", operation.failure_message(), message);
            app.error = Some(text.clone());
            app.notify(NotificationLevel::Error, text);
            Effect::None
        }
        Action::DismissNotification => {
            app.notification = None;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{movie, test_app};

    fn loaded_app(movies: Vec<Movie>) -> App {
        let mut app = test_app();
        update(&mut app, Action::MoviesLoaded(movies));
        app
    }

    fn failed(operation: Operation) -> Action {
        Action::RequestFailed {
            operation,
            message: "network error: connection refused".to_string(),
        }
    }

    fn ids(app: &App) -> Vec<i64> {
        app.movies.iter().map(|m| m.id.0).collect()
    }

    #[test]
    fn test_load_requests_fetch() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Load), Effect::FetchMovies);
        assert!(app.is_loading);
    }

    #[test]
    fn test_movies_loaded_stores_list_and_clears_error() {
        let mut app = test_app();
        app.error = Some("old".to_string());
        update(&mut app, Action::MoviesLoaded(vec![movie(1, "Alien")]));
        assert!(!app.is_loading);
        assert!(app.error.is_none());
        assert_eq!(ids(&app), vec![1]);
    }

    #[test]
    fn test_load_failure_leaves_empty_list_and_error() {
        let mut app = test_app();
        update(&mut app, Action::Load);
        update(&mut app, failed(Operation::Load));
        assert!(!app.is_loading);
        assert!(app.movies.is_empty());
        assert!(app.error.as_deref().unwrap().starts_with("Failed to load movies"));
        assert_eq!(
            app.notification.as_ref().map(|n| n.level),
            Some(NotificationLevel::Error)
        );
    }

    #[test]
    fn test_reload_ignored_while_loading() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Reload), Effect::None);
        update(&mut app, Action::MoviesLoaded(vec![]));
        assert_eq!(update(&mut app, Action::Reload), Effect::FetchMovies);
    }

    #[test]
    fn test_reload_failure_keeps_existing_list() {
        let mut app = loaded_app(vec![movie(1, "Alien"), movie(2, "Heat")]);
        update(&mut app, Action::Reload);
        update(&mut app, failed(Operation::Load));
        assert_eq!(ids(&app), vec![1, 2]);
        assert!(app.error.is_some());
    }

    #[test]
    fn test_modes_are_exclusive() {
        let mut app = loaded_app(vec![movie(1, "Alien")]);
        update(&mut app, Action::StartAdding);
        assert_eq!(app.mode, Mode::Adding);
        update(&mut app, Action::StartEditing(movie(1, "Alien")));
        assert_eq!(app.mode, Mode::Editing(movie(1, "Alien")));
        update(&mut app, Action::CancelForm);
        assert_eq!(app.mode, Mode::Viewing);
    }

    #[test]
    fn test_add_success_appends_and_exits_adding() {
        let mut app = loaded_app(vec![movie(1, "Alien")]);
        update(&mut app, Action::StartAdding);

        let draft = MovieDraft::new("Up", 2009);
        assert_eq!(
            update(&mut app, Action::SubmitAdd(draft.clone())),
            Effect::CreateMovie(draft)
        );
        assert!(app.submitting);
        // Nothing changes before the server answers
        assert_eq!(ids(&app), vec![1]);

        update(&mut app, Action::MovieAdded(movie(7, "Up")));
        assert_eq!(ids(&app), vec![1, 7]);
        assert_eq!(app.mode, Mode::Viewing);
        assert!(!app.submitting);
    }

    #[test]
    fn test_added_movie_appears_exactly_once() {
        let mut app = loaded_app(vec![movie(7, "Up")]);
        update(&mut app, Action::StartAdding);
        update(&mut app, Action::SubmitAdd(MovieDraft::new("Up", 2009)));
        update(&mut app, Action::MovieAdded(movie(7, "Up")));
        assert_eq!(ids(&app), vec![7]);
    }

    #[test]
    fn test_add_failure_stays_in_adding() {
        let mut app = loaded_app(vec![]);
        update(&mut app, Action::StartAdding);
        update(&mut app, Action::SubmitAdd(MovieDraft::new("Up", 2009)));
        update(&mut app, failed(Operation::Add));
        assert_eq!(app.mode, Mode::Adding);
        assert!(!app.submitting);
        assert!(app.movies.is_empty());
        assert!(app.error.as_deref().unwrap().starts_with("Failed to add movie"));
    }

    #[test]
    fn test_duplicate_submit_is_ignored() {
        let mut app = loaded_app(vec![]);
        update(&mut app, Action::StartAdding);
        update(&mut app, Action::SubmitAdd(MovieDraft::new("Alien", 1979)));
        assert_eq!(
            update(&mut app, Action::SubmitAdd(MovieDraft::new("Alien", 1979))),
            Effect::None
        );
    }

    #[test]
    fn test_cancel_ignored_while_submitting() {
        let mut app = loaded_app(vec![]);
        update(&mut app, Action::StartAdding);
        update(&mut app, Action::SubmitAdd(MovieDraft::new("Alien", 1979)));
        update(&mut app, Action::CancelForm);
        assert_eq!(app.mode, Mode::Adding);
    }

    #[test]
    fn test_submit_add_outside_adding_mode_is_ignored() {
        let mut app = loaded_app(vec![]);
        assert_eq!(
            update(&mut app, Action::SubmitAdd(MovieDraft::new("Alien", 1979))),
            Effect::None
        );
        assert!(!app.submitting);
    }

    #[test]
    fn test_edit_replaces_in_place() {
        let mut app = loaded_app(vec![movie(1, "Alien"), movie(2, "Heat"), movie(3, "Up")]);
        update(&mut app, Action::StartEditing(movie(2, "Heat")));

        let mut edited = movie(2, "Heat (1995)");
        edited.director = Some("Michael Mann".to_string());
        assert_eq!(
            update(&mut app, Action::SubmitEdit(edited.clone())),
            Effect::UpdateMovie(edited.clone())
        );
        assert_eq!(app.movies[1].title, "Heat");

        update(&mut app, Action::MovieUpdated(edited.clone()));
        assert_eq!(ids(&app), vec![1, 2, 3]);
        assert_eq!(app.movies[0], movie(1, "Alien"));
        assert_eq!(app.movies[1], edited);
        assert_eq!(app.movies[2], movie(3, "Up"));
        assert_eq!(app.mode, Mode::Viewing);
    }

    #[test]
    fn test_edit_failure_stays_in_editing() {
        let mut app = loaded_app(vec![movie(2, "Heat")]);
        update(&mut app, Action::StartEditing(movie(2, "Heat")));
        update(&mut app, Action::SubmitEdit(movie(2, "Heat 2")));
        update(&mut app, failed(Operation::Edit));
        assert_eq!(app.mode, Mode::Editing(movie(2, "Heat")));
        assert_eq!(app.movies[0].title, "Heat");
        assert!(!app.submitting);
    }

    #[test]
    fn test_edit_for_other_record_is_ignored() {
        let mut app = loaded_app(vec![movie(1, "Alien"), movie(2, "Heat")]);
        update(&mut app, Action::StartEditing(movie(2, "Heat")));
        assert_eq!(update(&mut app, Action::SubmitEdit(movie(1, "Aliens"))), Effect::None);
    }

    #[test]
    fn test_delete_success_removes_record() {
        let mut app = loaded_app(vec![movie(1, "Alien"), movie(2, "Heat")]);
        assert_eq!(
            update(&mut app, Action::DeleteMovie(MovieId(1))),
            Effect::DeleteMovie(MovieId(1))
        );
        assert!(app.is_deleting(MovieId(1)));
        assert_eq!(ids(&app), vec![1, 2]);

        update(&mut app, Action::MovieDeleted(MovieId(1)));
        assert_eq!(ids(&app), vec![2]);
        assert!(!app.is_deleting(MovieId(1)));
    }

    #[test]
    fn test_delete_in_flight_cannot_repeat() {
        let mut app = loaded_app(vec![movie(1, "Alien")]);
        update(&mut app, Action::DeleteMovie(MovieId(1)));
        assert_eq!(update(&mut app, Action::DeleteMovie(MovieId(1))), Effect::None);
    }

    #[test]
    fn test_delete_unknown_id_is_ignored() {
        let mut app = loaded_app(vec![movie(1, "Alien")]);
        assert_eq!(update(&mut app, Action::DeleteMovie(MovieId(9))), Effect::None);
    }

    #[test]
    fn test_delete_failure_keeps_record() {
        let mut app = loaded_app(vec![movie(1, "Alien")]);
        update(&mut app, Action::DeleteMovie(MovieId(1)));
        update(&mut app, failed(Operation::Delete(MovieId(1))));
        assert_eq!(ids(&app), vec![1]);
        assert!(!app.is_deleting(MovieId(1)));
        assert!(app.error.as_deref().unwrap().starts_with("Failed to delete movie"));
    }

    #[test]
    fn test_delete_all() {
        let mut app = loaded_app(vec![movie(1, "Alien"), movie(2, "Heat")]);
        assert_eq!(update(&mut app, Action::DeleteAll), Effect::DeleteAllMovies);
        assert_eq!(update(&mut app, Action::DeleteAll), Effect::None);
        update(&mut app, Action::AllDeleted);
        assert!(app.movies.is_empty());
        assert!(!app.clearing);
    }

    #[test]
    fn test_delete_all_failure_keeps_list() {
        let mut app = loaded_app(vec![movie(1, "Alien")]);
        update(&mut app, Action::DeleteAll);
        update(&mut app, failed(Operation::DeleteAll));
        assert_eq!(ids(&app), vec![1]);
        assert!(!app.clearing);
    }

    #[test]
    fn test_success_clears_previous_error() {
        let mut app = loaded_app(vec![movie(1, "Alien")]);
        update(&mut app, Action::DeleteMovie(MovieId(1)));
        update(&mut app, failed(Operation::Delete(MovieId(1))));
        assert!(app.error.is_some());
        update(&mut app, Action::DeleteMovie(MovieId(1)));
        update(&mut app, Action::MovieDeleted(MovieId(1)));
        assert!(app.error.is_none());
    }

    #[test]
    fn test_set_search() {
        let mut app = loaded_app(vec![movie(1, "Alien"), movie(2, "Heat")]);
        update(&mut app, Action::SetSearch("hea".to_string()));
        assert_eq!(app.visible_movies().len(), 1);
        update(&mut app, Action::SetSearch(String::new()));
        assert_eq!(app.visible_movies().len(), 2);
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
