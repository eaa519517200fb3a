//! # MoviesList Component
//!
//! Scrollable view of the (filtered) collection.
//!
//! `MoviesList` is a transient component (created each frame) that wraps
//! `&'a mut MoviesListState` (persistent state) plus the visible movies as
//! props. Item heights are recomputed from `MovieListItem::calculate_height`
//! during render and kept in the state so selection can scroll precisely.
//!
//! The collection has no upper bound, so row positions are tracked as `u32`
//! and only the items overlapping the viewport are drawn into the
//! `ScrollView`. The scrollbar is rendered separately against the full
//! content height.

use std::collections::HashSet;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::api::{Movie, MovieId};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::movie_item::MovieListItem;
use crate::tui::event::TuiEvent;

pub const EMPTY_COLLECTION: &str = "No movies yet. Maybe add something?";

/// Selection and scroll state for the list.
/// Must be persisted in the parent TuiState.
#[derive(Default)]
pub struct MoviesListState {
    /// Index into the visible (filtered) movies.
    pub selected: usize,
    /// Number of items rendered last frame.
    pub item_count: usize,
    /// First visible row, counted from the top of the whole list.
    offset: u32,
    /// Scroll position inside the window of items drawn last frame.
    window_scroll: ScrollViewState,
    heights: Vec<u16>,
    /// Bottom row of each item (exclusive), saturating.
    prefix_heights: Vec<u32>,
    viewport_height: u16,
}

impl MoviesListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Keep the selection inside `0..count`. Called whenever the visible
    /// list may have shrunk (delete, search, reload).
    pub fn clamp_selection(&mut self, count: usize) {
        self.item_count = count;
        self.selected = self.selected.min(count.saturating_sub(1));
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.item_count {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.item_count.saturating_sub(1);
    }

    /// Move by roughly one viewport worth of items. One item before the
    /// first render, when the viewport is still unknown.
    fn page_step(&self) -> usize {
        let avg = (self.total_height() as usize)
            .checked_div(self.heights.len())
            .unwrap_or(1)
            .max(1);
        (self.viewport_height as usize / avg).max(1)
    }

    fn total_height(&self) -> u32 {
        self.prefix_heights.last().copied().unwrap_or(0)
    }

    fn item_top(&self, idx: usize) -> u32 {
        match idx {
            0 => 0,
            _ => self.prefix_heights[idx - 1],
        }
    }

    fn rebuild_prefix_heights(&mut self) {
        self.prefix_heights = self
            .heights
            .iter()
            .scan(0u32, |acc, &h| {
                *acc = acc.saturating_add(u32::from(h));
                Some(*acc)
            })
            .collect();
    }

    fn max_offset(&self) -> u32 {
        self.total_height()
            .saturating_sub(u32::from(self.viewport_height))
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    fn clamp_scroll(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }

    /// Scroll the viewport so the selected item is fully visible.
    /// If the item is taller than the viewport, align its top edge.
    pub fn scroll_to_selected(&mut self) {
        let idx = self.selected;
        if idx >= self.prefix_heights.len() {
            return;
        }
        let item_top = self.item_top(idx);
        let item_bottom = self.prefix_heights[idx];
        let viewport = u32::from(self.viewport_height);

        if item_top < self.offset {
            self.offset = item_top;
        } else if item_bottom > self.offset.saturating_add(viewport) {
            self.offset = item_bottom.saturating_sub(viewport).min(item_top);
        }
    }

    /// Indices of the items overlapping the viewport.
    fn visible_range(&self) -> std::ops::Range<usize> {
        let len = self.prefix_heights.len();
        let view_bottom = self.offset.saturating_add(u32::from(self.viewport_height));
        let first = self.prefix_heights.partition_point(|&bottom| bottom <= self.offset);
        let last = self.prefix_heights.partition_point(|&bottom| bottom < view_bottom);
        first.min(len)..(last + 1).min(len)
    }
}

/// Navigation only. Edit and delete are decided by the loop, which knows
/// which movie sits at `selected`.
impl EventHandler for MoviesListState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp => self.select_prev(),
            TuiEvent::CursorDown => self.select_next(),
            TuiEvent::CursorHome => self.select_first(),
            TuiEvent::CursorEnd => self.select_last(),
            TuiEvent::PageUp => {
                self.selected = self.selected.saturating_sub(self.page_step());
            }
            TuiEvent::PageDown => {
                let step = self.page_step();
                self.selected = (self.selected + step).min(self.item_count.saturating_sub(1));
            }
            TuiEvent::ScrollUp => {
                self.offset = self.offset.saturating_sub(1);
                return None;
            }
            TuiEvent::ScrollDown => {
                self.offset = self.offset.saturating_add(1);
                self.clamp_scroll();
                return None;
            }
            _ => return None,
        }
        self.scroll_to_selected();
        None
    }
}

/// Scrollable collection view.
pub struct MoviesList<'a> {
    pub state: &'a mut MoviesListState,
    /// Movies after search filtering, in collection order.
    pub movies: &'a [&'a Movie],
    /// Size of the unfiltered collection.
    pub total: usize,
    pub search_term: &'a str,
    pub deleting: &'a HashSet<MovieId>,
}

impl MoviesList<'_> {
    fn header(&self) -> Line<'static> {
        let count = self.movies.len();
        let noun = if count == 1 { "movie" } else { "movies" };
        Line::from(Span::styled(
            format!("Your Collection ({count} {noun})"),
            Style::default().add_modifier(Modifier::BOLD),
        ))
    }

    fn render_empty(&self, frame: &mut Frame, area: Rect) {
        let text = if self.total == 0 {
            EMPTY_COLLECTION.to_string()
        } else {
            format!("No movies match \"{}\"", self.search_term)
        };
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::DarkGray))
            .centered();
        frame.render_widget(paragraph, area);
    }
}

impl Component for MoviesList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.movies.is_empty() && self.total == 0 {
            self.state.clamp_selection(0);
            self.render_empty(frame, area);
            return;
        }

        let [header_area, _, body_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);
        frame.render_widget(self.header(), header_area);

        self.state.clamp_selection(self.movies.len());
        if self.movies.is_empty() {
            self.render_empty(frame, body_area);
            return;
        }

        let content_width = body_area.width.saturating_sub(1); // scrollbar
        let state = &mut *self.state;
        state.heights = self
            .movies
            .iter()
            .map(|m| MovieListItem::calculate_height(m, content_width))
            .collect();
        state.rebuild_prefix_heights();
        state.viewport_height = body_area.height;
        state.clamp_scroll();
        state.scroll_to_selected();

        let range = state.visible_range();
        let window_top = state.item_top(range.start);
        let window_height = state.item_top(range.end) - window_top;
        let mut scroll_view = ScrollView::new(Size::new(
            content_width,
            u16::try_from(window_height).unwrap_or(u16::MAX),
        ))
        .vertical_scrollbar_visibility(ScrollbarVisibility::Never)
        .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset = 0u32;
        for i in range {
            let Ok(y) = u16::try_from(y_offset) else {
                break;
            };
            let movie = self.movies[i];
            let height = state.heights[i];
            let item = MovieListItem::new(
                movie,
                i == state.selected,
                self.deleting.contains(&movie.id),
            );
            scroll_view.render_widget(item, Rect::new(0, y, content_width, height));
            y_offset += u32::from(height);
        }

        let window_y = u16::try_from(state.offset - window_top).unwrap_or(u16::MAX);
        state.window_scroll.set_offset(Position { x: 0, y: window_y });
        frame.render_stateful_widget(scroll_view, body_area, &mut state.window_scroll);

        let max_offset = state.max_offset();
        if max_offset > 0 {
            // content_length is the max scroll position, not the item count
            let mut scrollbar_state = ScrollbarState::default()
                .content_length(max_offset as usize)
                .position(state.offset as usize);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                body_area,
                &mut scrollbar_state,
            );
        }
    }
}
