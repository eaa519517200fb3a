//! # Application State
//!
//! Core business state for Marquee. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── service: Arc<dyn MovieService>   // remote collection
//! ├── movies: Vec<Movie>               // last confirmed server state
//! ├── mode: Mode                       // Viewing | Adding | Editing(movie)
//! ├── search_term: String              // free-text filter
//! ├── is_loading: bool                 // list fetch in flight
//! ├── error: Option<String>            // inline error banner
//! ├── notification: Option<Notification> // transient toast
//! ├── submitting: bool                 // add/edit request in flight
//! ├── deleting: HashSet<MovieId>       // per-record delete in flight
//! └── clearing: bool                   // delete-all in flight
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! `movies` is only ever touched after the server confirmed the change.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::api::{Movie, MovieId, MovieService};
use crate::core::config::{DEFAULT_NOTIFICATION_SECS, ResolvedConfig};
use crate::core::filter::filter_movies;

/// Which screen the orchestrator is showing. Exactly one at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// List plus the "add" hint.
    Viewing,
    /// Blank form.
    Adding,
    /// Form pre-filled with the record being edited.
    Editing(Movie),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

/// A toast shown until `raised_at + ttl`.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub raised_at: Instant,
}

pub struct App {
    pub service: Arc<dyn MovieService>,
    pub movies: Vec<Movie>,
    pub mode: Mode,
    pub search_term: String,
    pub is_loading: bool,
    pub error: Option<String>,
    pub notification: Option<Notification>,
    pub notification_ttl: Duration,
    pub submitting: bool,
    pub deleting: HashSet<MovieId>,
    pub clearing: bool,
}

impl App {
    /// Starts in the loading state: nothing is rendered until the first fetch resolves.
    pub fn new(service: Arc<dyn MovieService>) -> Self {
        Self {
            service,
            movies: Vec::new(),
            mode: Mode::Viewing,
            search_term: String::new(),
            is_loading: true,
            error: None,
            notification: None,
            notification_ttl: Duration::from_secs(DEFAULT_NOTIFICATION_SECS),
            submitting: false,
            deleting: HashSet::new(),
            clearing: false,
        }
    }

    pub fn from_config(service: Arc<dyn MovieService>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(service);
        app.notification_ttl = config.notification_ttl;
        app
    }

    /// The movies matching the current search term, in collection order.
    pub fn visible_movies(&self) -> Vec<&Movie> {
        filter_movies(&self.movies, &self.search_term)
    }

    pub fn is_deleting(&self, id: MovieId) -> bool {
        self.deleting.contains(&id)
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notification = Some(Notification {
            message: message.into(),
            level,
            raised_at: Instant::now(),
        });
    }

    /// Drops the notification once it has been visible for `notification_ttl`.
    /// Returns true if something was dismissed.
    pub fn expire_notification(&mut self, now: Instant) -> bool {
        let expired = self
            .notification
            .as_ref()
            .is_some_and(|n| now.saturating_duration_since(n.raised_at) >= self.notification_ttl);
        if expired {
            self.notification = None;
        }
        expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{movie, test_app};

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert!(app.is_loading);
        assert!(app.movies.is_empty());
        assert_eq!(app.mode, Mode::Viewing);
        assert!(app.error.is_none());
        assert!(!app.submitting);
    }

    #[test]
    fn test_visible_movies_follows_search_term() {
        let mut app = test_app();
        app.movies = vec![movie(1, "Alien"), movie(2, "Aliens"), movie(3, "Heat")];
        assert_eq!(app.visible_movies().len(), 3);

        app.search_term = "ALIEN".to_string();
        let titles: Vec<&str> = app.visible_movies().iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Alien", "Aliens"]);
    }

    #[test]
    fn test_notification_expires_after_ttl() {
        let mut app = test_app();
        app.notification_ttl = Duration::from_secs(3);
        app.notify(NotificationLevel::Error, "boom");
        let raised = app.notification.as_ref().unwrap().raised_at;

        assert!(!app.expire_notification(raised + Duration::from_secs(2)));
        assert!(app.notification.is_some());

        assert!(app.expire_notification(raised + Duration::from_secs(3)));
        assert!(app.notification.is_none());
    }

    #[test]
    fn test_expire_without_notification_is_noop() {
        let mut app = test_app();
        assert!(!app.expire_notification(Instant::now()));
    }
}
