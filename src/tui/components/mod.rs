//! # TUI Components
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `TitleBar`: top status line
//! - `MovieListItem`: one movie record
//! - `Toast`: transient notification
//!
//! ### Stateful Components (Persistent State + Transient Wrapper)
//!
//! The state struct lives in `TuiState` and handles events; a wrapper
//! borrowing it is created each frame to render:
//! - `TextField` / `TextFieldView`: bordered input (search bar, form fields)
//! - `MoviesListState` / `MoviesList`: scrollable collection with selection
//! - `MovieFormState` / `MovieForm`: add/edit form with validation alert
//! - `ConfirmDialogState` / `ConfirmDialog`: yes/no overlay
//!
//! Components receive external data as props, never by reaching into `App`.
//!
//! ```text
//! components/
//! ├── mod.rs
//! ├── title_bar.rs
//! ├── text_field/       (editable input + wrap helpers)
//! ├── movie_item.rs
//! ├── movie_list.rs
//! ├── movie_form.rs
//! ├── confirm_dialog.rs
//! └── notification.rs
//! ```

use ratatui::layout::{Constraint, Layout, Rect};

mod title_bar;
pub use title_bar::TitleBar;

pub mod confirm_dialog;
pub mod movie_form;
pub mod movie_item;
pub mod movie_list;
pub mod notification;
pub mod text_field;

pub use confirm_dialog::{ConfirmDialog, ConfirmDialogState, ConfirmEvent, ConfirmTarget};
pub use movie_form::{FormEvent, MovieForm, MovieFormState};
pub use movie_list::{MoviesList, MoviesListState};
pub use notification::Toast;
pub use text_field::{TextField, TextFieldView};

/// A rect `percent_x` wide and `height` rows tall, centered in `outer`.
pub(crate) fn centered_rect(percent_x: u16, height: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(outer.height)),
        Constraint::Fill(1),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
