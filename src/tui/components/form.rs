//! # Modal Forms
//!
//! The antenna, booking and request dialogs share one shape: a titled box of
//! labelled rows, one focused at a time, with Enter to submit and Esc to back
//! out. Each dialog owns its fields and exposes them through [`FormLayout`];
//! focus movement and rendering live here.
//!
//! ```text
//! ┌ Add New Antenna ─────────────────────────────┐
//! │ Name *            Aurora Array Gamma         │
//! │ Type *            ◂ Microwave ▸              │
//! │ ...                                          │
//! └──── Tab Next  ←/→ Choose  Enter Save  Esc ───┘
//! ```
//!
//! A form never writes to the repositories itself. Submitting produces an
//! [`Action`] that the event loop hands to `update()`; the form stays open
//! until the loop sees `Effect::CloseForm`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::core::action::Action;
use crate::core::error::FieldError;
use crate::core::state::Level;
use crate::tui::components::overlay::centered_fixed;
use crate::tui::event::TuiEvent;

const LABEL_WIDTH: u16 = 20;

/// What a field looks like for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub text: String,
    /// Column of the text cursor inside the value area, if the field edits text.
    pub cursor: Option<u16>,
    pub is_placeholder: bool,
}

/// One editable value inside a form.
pub trait FormField {
    /// Returns true if the event was consumed.
    fn handle_event(&mut self, event: &TuiEvent) -> bool;

    fn view(&self, width: u16) -> FieldView;

    /// Read-only rows are rendered but skipped by focus movement.
    fn is_read_only(&self) -> bool {
        false
    }
}

pub struct FormRow<'a> {
    pub label: &'static str,
    pub required: bool,
    pub field: &'a dyn FormField,
}

/// Events emitted by a form.
#[derive(Debug, Clone)]
pub enum FormEvent {
    Dispatch(Action),
    Dismiss,
}

pub trait FormLayout {
    fn title(&self) -> String;

    /// Lines shown above the fields (e.g. the antenna being booked).
    fn header(&self) -> Vec<Line<'static>> {
        Vec::new()
    }

    fn help(&self) -> &'static str {
        " Tab Next  ←/→ Choose  Enter Save  Esc Cancel "
    }

    fn rows(&self) -> Vec<FormRow<'_>>;

    fn field_mut(&mut self, index: usize) -> Option<&mut dyn FormField>;

    fn focus(&self) -> usize;

    fn set_focus(&mut self, index: usize);

    /// Build the action for Enter.
    fn submit(&self) -> FormEvent;

    /// Form-specific keys, checked before the focused field sees the event.
    fn handle_shortcut(&mut self, _event: &TuiEvent) -> Option<FormEvent> {
        None
    }
}

/// Route one event through a form: shortcuts, focus keys, then the focused field.
pub fn handle_form_event<F: FormLayout + ?Sized>(
    form: &mut F,
    event: &TuiEvent,
) -> Option<FormEvent> {
    if let Some(form_event) = form.handle_shortcut(event) {
        return Some(form_event);
    }
    match event {
        TuiEvent::Escape => Some(FormEvent::Dismiss),
        TuiEvent::Submit => Some(form.submit()),
        TuiEvent::NextField | TuiEvent::CursorDown => {
            move_focus(form, true);
            None
        }
        TuiEvent::PrevField | TuiEvent::CursorUp => {
            move_focus(form, false);
            None
        }
        other => {
            let focus = form.focus();
            if let Some(field) = form.field_mut(focus) {
                field.handle_event(other);
            }
            None
        }
    }
}

/// Move to the next (or previous) editable row, wrapping around.
fn move_focus<F: FormLayout + ?Sized>(form: &mut F, forward: bool) {
    let editable: Vec<bool> = form.rows().iter().map(|r| !r.field.is_read_only()).collect();
    let count = editable.len();
    if count == 0 {
        return;
    }
    let mut index = form.focus();
    for _ in 0..count {
        index = if forward { (index + 1) % count } else { (index + count - 1) % count };
        if editable[index] {
            form.set_focus(index);
            return;
        }
    }
}

/// First row that accepts input, for the initial focus.
pub fn first_editable(rows: &[FormRow<'_>]) -> usize {
    rows.iter().position(|r| !r.field.is_read_only()).unwrap_or(0)
}

/// An error toast for a value the form itself could not parse.
pub fn field_problem(error: FieldError) -> FormEvent {
    FormEvent::Dispatch(Action::Notify {
        level: Level::Error,
        title: "Error".to_string(),
        message: format!("Please check the form: {error}."),
    })
}

/// Draw a form as a centered modal over `area`.
pub fn render_form(frame: &mut Frame, area: Rect, form: &dyn FormLayout) {
    let header = form.header();
    let rows = form.rows();
    let header_height = if header.is_empty() { 0 } else { header.len() as u16 + 1 };
    // borders + vertical padding
    let height = rows.len() as u16 + header_height + 4;
    let overlay = centered_fixed(70, height, area);

    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" {} ", form.title()))
        .title_alignment(Alignment::Left)
        .title_bottom(Line::from(form.help()).centered())
        .padding(Padding::uniform(1));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let [header_area, rows_area] =
        Layout::vertical([Constraint::Length(header_height), Constraint::Min(0)]).areas(inner);
    if !header.is_empty() {
        frame.render_widget(Paragraph::new(header), header_area);
    }

    let value_width = rows_area.width.saturating_sub(LABEL_WIDTH);
    let focus = form.focus();
    for (i, row) in rows.iter().enumerate() {
        let y = rows_area.y + i as u16;
        if y >= rows_area.y + rows_area.height {
            break;
        }
        let focused = i == focus;
        let label_style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if row.required { " *" } else { "" };
        let label = Line::from(vec![
            Span::styled(row.label, label_style),
            Span::styled(marker, Style::default().fg(Color::Red)),
        ]);
        frame.render_widget(
            Paragraph::new(label),
            Rect::new(rows_area.x, y, LABEL_WIDTH.min(rows_area.width), 1),
        );

        let view = row.field.view(value_width);
        let value_style = if view.is_placeholder || row.field.is_read_only() {
            Style::default().fg(Color::DarkGray)
        } else if focused {
            Style::default().fg(Color::White).add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::White)
        };
        let value_area = Rect::new(rows_area.x + LABEL_WIDTH, y, value_width, 1);
        frame.render_widget(Paragraph::new(Span::styled(view.text, value_style)), value_area);

        if focused && let Some(col) = view.cursor {
            frame.set_cursor_position(Position::new(value_area.x + col, y));
        }
    }
}
