use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::event::TuiEvent;

/// Something that draws itself into a region of the frame.
///
/// Pages and widgets get their data as constructor arguments. `render` takes
/// `&mut self` because pages keep scroll offsets and table selections in the
/// state they borrow, and fix them up while drawing.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Turns raw key events into something the caller acts on.
pub trait EventHandler {
    /// What the handler emits: a form result, a page request, ...
    type Event;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
