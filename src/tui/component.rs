use ratatui::Frame;
use ratatui::layout::Rect;

use super::event::TuiEvent;

/// Something that draws itself into a region of the frame.
///
/// Props are plain struct fields; persistent state is borrowed as
/// `&mut` from `TuiState`. `render` takes `&mut self` so a component can
/// record layout (item heights, scroll offsets) while drawing.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Turns raw `TuiEvent`s into component-level events.
pub trait EventHandler {
    type Event;

    /// `None` when the event was consumed (or ignored) without anything
    /// for the parent to act on.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
