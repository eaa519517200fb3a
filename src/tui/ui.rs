use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{
    ConfirmDialog, MovieForm, MoviesList, TextFieldView, TitleBar, Toast,
};
use crate::tui::{Focus, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};

const SEARCH_PLACEHOLDER: &str = "Search by title, director, actors or description";

/// Title bar status, derived from what is in flight.
pub fn status_text(app: &App) -> &'static str {
    if app.is_loading {
        "Loading..."
    } else if app.submitting {
        "Processing..."
    } else if app.clearing {
        "Deleting all..."
    } else if !app.deleting.is_empty() {
        "Deleting..."
    } else {
        ""
    }
}

fn help_text(app: &App, tui: &TuiState) -> &'static str {
    if tui.confirm.is_some() {
        ""
    } else if tui.form.is_some() {
        " Ctrl+C Quit"
    } else if app.is_loading {
        " q Quit"
    } else if tui.focus == Focus::Search {
        " Type to filter  Enter/Esc Back to list"
    } else {
        " / Search  a Add  e Edit  d Delete  r Reload  D Delete all  q Quit"
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let error_height = if app.error.is_some() { 3 } else { 0 };
    let [title_area, error_area, search_area, main_area, help_area] = Layout::vertical([
        Length(1),
        Length(error_height),
        Length(3),
        Min(0),
        Length(1),
    ])
    .areas(frame.area());

    TitleBar::new(&tui.server, status_text(app)).render(frame, title_area);

    if let Some(error) = &app.error {
        draw_error_banner(frame, error_area, error);
    }

    let overlay_open = tui.form.is_some() || tui.confirm.is_some();
    TextFieldView {
        field: &mut tui.search,
        label: " Search ",
        placeholder: SEARCH_PLACEHOLDER,
        focused: tui.focus == Focus::Search && !overlay_open,
        disabled: tui.form.is_some(),
    }
    .render(frame, search_area);

    draw_main_area(frame, main_area, app, tui);

    frame.render_widget(
        Span::styled(help_text(app, tui), Style::default().add_modifier(Modifier::DIM)),
        help_area,
    );

    if let Some(confirm) = &tui.confirm {
        ConfirmDialog { state: confirm }.render(frame, frame.area());
    }

    if let Some(notification) = &app.notification {
        let toast_area = Rect {
            height: frame.area().height.saturating_sub(help_area.height),
            ..frame.area()
        };
        Toast { notification }.render(frame, toast_area);
    }
}

fn draw_error_banner(frame: &mut Frame, area: Rect, error: &str) {
    let banner = Paragraph::new(error)
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true })
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Red))
                .title(" Error ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(banner, area);
}

fn draw_main_area(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    if app.is_loading {
        let loading = Paragraph::new("Loading...")
            .style(Style::default().fg(Color::DarkGray))
            .centered();
        frame.render_widget(loading, area);
        return;
    }

    if let Some(form) = tui.form.as_mut() {
        MovieForm {
            state: form,
            submitting: app.submitting,
        }
        .render(frame, area);
        return;
    }

    let visible = app.visible_movies();
    MoviesList {
        state: &mut tui.movie_list,
        movies: &visible,
        total: app.movies.len(),
        search_term: &app.search_term,
        deleting: &app.deleting,
    }
    .render(frame, area);
}
