//! # Admin Dashboard
//!
//! Stat cards over two tables: antennas on top, bookings below. Tab moves
//! focus between the tables; the letter keys act on the selected row.
//!
//! ```text
//! n        new antenna / new booking (focused table)
//! e, Enter edit selected row
//! d d      delete selected antenna (press twice)
//! a / r    approve / reject selected booking (pending only)
//! ```
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `AdminState` lives in `TuiState`
//! - `AdminDashboard` is created each frame with borrowed state and `App`

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};

use crate::core::action::Action;
use crate::core::model::{Antenna, Booking, BookingStatus};
use crate::core::request::DATE_FORMAT;
use crate::core::state::{App, DashboardStats, Level};
use crate::tui::component::Component;
use crate::tui::components::badge::{antenna_status_color, booking_status_color};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTable {
    #[default]
    Antennas,
    Bookings,
}

/// Persistent state for the admin dashboard.
#[derive(Debug, Default)]
pub struct AdminState {
    pub focus: AdminTable,
    pub antenna_table: TableState,
    pub booking_table: TableState,
    pub confirm_delete: bool,
}

/// Events emitted by the dashboard.
#[derive(Debug, Clone)]
pub enum AdminEvent {
    NewAntenna,
    EditAntenna(u32),
    NewBooking,
    EditBooking(u32),
    Dispatch(Action),
}

impl AdminState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_event(&mut self, event: &TuiEvent, app: &App) -> Option<AdminEvent> {
        self.sync(app.antennas.len(), app.bookings.len());

        // Reset delete confirmation on any non-delete key
        if !matches!(event, TuiEvent::InputChar('d')) {
            self.confirm_delete = false;
        }

        match event {
            TuiEvent::NextField | TuiEvent::PrevField => {
                self.focus = match self.focus {
                    AdminTable::Antennas => AdminTable::Bookings,
                    AdminTable::Bookings => AdminTable::Antennas,
                };
                None
            }
            TuiEvent::CursorUp => {
                self.move_selection(false, app);
                None
            }
            TuiEvent::CursorDown => {
                self.move_selection(true, app);
                None
            }
            TuiEvent::InputChar('n') => Some(match self.focus {
                AdminTable::Antennas => AdminEvent::NewAntenna,
                AdminTable::Bookings => AdminEvent::NewBooking,
            }),
            TuiEvent::InputChar('e') | TuiEvent::Submit => match self.focus {
                AdminTable::Antennas => self.selected_antenna(app).map(|a| AdminEvent::EditAntenna(a.id)),
                AdminTable::Bookings => self.selected_booking(app).map(|b| AdminEvent::EditBooking(b.id)),
            },
            TuiEvent::InputChar('d') if self.focus == AdminTable::Antennas => {
                let id = self.selected_antenna(app)?.id;
                if self.confirm_delete {
                    self.confirm_delete = false;
                    Some(AdminEvent::Dispatch(Action::DeleteAntenna(id)))
                } else {
                    self.confirm_delete = true;
                    None
                }
            }
            TuiEvent::InputChar('a') if self.focus == AdminTable::Bookings => {
                self.review_booking(app, Action::ApproveBooking)
            }
            TuiEvent::InputChar('r') if self.focus == AdminTable::Bookings => {
                self.review_booking(app, Action::RejectBooking)
            }
            _ => None,
        }
    }

    pub fn selected_antenna<'a>(&self, app: &'a App) -> Option<&'a Antenna> {
        self.antenna_table.selected().and_then(|i| app.antennas.list().get(i))
    }

    pub fn selected_booking<'a>(&self, app: &'a App) -> Option<&'a Booking> {
        self.booking_table.selected().and_then(|i| app.bookings.list().get(i))
    }

    /// Approve or reject the selected booking. Anything but a pending booking
    /// gets an error toast instead.
    fn review_booking(&self, app: &App, action: fn(u32) -> Action) -> Option<AdminEvent> {
        let booking = self.selected_booking(app)?;
        Some(AdminEvent::Dispatch(if booking.status == BookingStatus::Pending {
            action(booking.id)
        } else {
            Action::Notify {
                level: Level::Error,
                title: "Not Pending".to_string(),
                message: format!(
                    "Booking {} is already {}; only pending bookings can be approved or rejected.",
                    booking.id, booking.status
                ),
            }
        }))
    }

    fn move_selection(&mut self, forward: bool, app: &App) {
        let (table, len) = match self.focus {
            AdminTable::Antennas => (&mut self.antenna_table, app.antennas.len()),
            AdminTable::Bookings => (&mut self.booking_table, app.bookings.len()),
        };
        if len == 0 {
            return;
        }
        let current = table.selected().unwrap_or(0);
        let next = if forward { (current + 1).min(len - 1) } else { current.saturating_sub(1) };
        table.select(Some(next));
    }

    /// Keep both selections valid for the current row counts.
    pub fn sync(&mut self, antennas: usize, bookings: usize) {
        clamp_selection(&mut self.antenna_table, antennas);
        clamp_selection(&mut self.booking_table, bookings);
    }
}

fn clamp_selection(table: &mut TableState, len: usize) {
    if len == 0 {
        table.select(None);
    } else {
        table.select(Some(table.selected().unwrap_or(0).min(len - 1)));
    }
}

/// Transient render wrapper for the admin dashboard.
pub struct AdminDashboard<'a> {
    state: &'a mut AdminState,
    app: &'a App,
}

impl<'a> AdminDashboard<'a> {
    pub fn new(state: &'a mut AdminState, app: &'a App) -> Self {
        Self { state, app }
    }
}

impl Component for AdminDashboard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.sync(self.app.antennas.len(), self.app.bookings.len());

        let [stats_area, antennas_area, bookings_area, help_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Percentage(50),
            Constraint::Percentage(50),
            Constraint::Length(1),
        ])
        .areas(area);

        render_stats(frame, stats_area, self.app.stats());
        self.render_antennas(frame, antennas_area);
        self.render_bookings(frame, bookings_area);

        let help = if self.state.confirm_delete {
            " Press d again to confirm delete | any other key cancels "
        } else {
            match self.state.focus {
                AdminTable::Antennas => " Tab Bookings  n New  e Edit  d Delete  1 Catalog  q Quit ",
                AdminTable::Bookings => {
                    " Tab Antennas  n New  e Edit  a Approve  r Reject  1 Catalog  q Quit "
                }
            }
        };
        let help_style = if self.state.confirm_delete {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        frame.render_widget(Paragraph::new(Line::from(help).centered()).style(help_style), help_area);
    }
}

impl AdminDashboard<'_> {
    fn table_block(&self, title: &'static str, table: AdminTable) -> Block<'static> {
        let border_style = if self.state.focus == table {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {title} "))
    }

    fn highlight(&self, table: AdminTable) -> Style {
        let base = Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED);
        match (self.state.focus == table, self.state.confirm_delete) {
            (true, true) => base.fg(Color::Red),
            (true, false) => base.fg(Color::White),
            (false, _) => Style::default().add_modifier(Modifier::BOLD),
        }
    }

    fn render_antennas(&mut self, frame: &mut Frame, area: Rect) {
        let block = self.table_block("Antenna Management", AdminTable::Antennas);
        if self.app.antennas.is_empty() {
            frame.render_widget(
                Paragraph::new("No antennas. Press n to add one.")
                    .style(Style::default().fg(Color::DarkGray))
                    .block(block),
                area,
            );
            return;
        }
        let header = Row::new(["Name", "Type", "Frequency", "Location", "Status", "Maintained"])
            .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));
        let rows = self.app.antennas.list().iter().map(|a| {
            Row::new(vec![
                Cell::from(a.name.clone()),
                Cell::from(a.antenna_type.label()),
                Cell::from(a.frequency.clone()),
                Cell::from(a.location.label()),
                Cell::from(Span::styled(
                    a.status.label(),
                    Style::default().fg(antenna_status_color(a.status)),
                )),
                Cell::from(a.last_maintenance.format(DATE_FORMAT).to_string()),
            ])
        });
        let widths = [
            Constraint::Fill(3),
            Constraint::Fill(3),
            Constraint::Fill(2),
            Constraint::Fill(2),
            Constraint::Length(11),
            Constraint::Length(10),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(self.highlight(AdminTable::Antennas));
        frame.render_stateful_widget(table, area, &mut self.state.antenna_table);
    }

    fn render_bookings(&mut self, frame: &mut Frame, area: Rect) {
        let block = self.table_block("Booking Management", AdminTable::Bookings);
        if self.app.bookings.is_empty() {
            frame.render_widget(
                Paragraph::new("No bookings yet.")
                    .style(Style::default().fg(Color::DarkGray))
                    .block(block),
                area,
            );
            return;
        }
        let header = Row::new(["Antenna", "User", "Date", "Time", "Purpose", "Status"])
            .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));
        let rows = self.app.bookings.list().iter().map(|b| {
            Row::new(vec![
                Cell::from(b.antenna_name.clone()),
                Cell::from(b.requester.clone()),
                Cell::from(b.date.clone()),
                Cell::from(b.time.clone()),
                Cell::from(b.purpose.clone()),
                Cell::from(Span::styled(
                    b.status.label(),
                    Style::default().fg(booking_status_color(b.status)),
                )),
            ])
        });
        let widths = [
            Constraint::Fill(3),
            Constraint::Fill(3),
            Constraint::Length(10),
            Constraint::Length(13),
            Constraint::Fill(3),
            Constraint::Length(9),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(self.highlight(AdminTable::Bookings));
        frame.render_stateful_widget(table, area, &mut self.state.booking_table);
    }
}

fn render_stats(frame: &mut Frame, area: Rect, stats: DashboardStats) {
    let cards = [
        ("Total Antennas", stats.total_antennas, Color::Cyan),
        ("Available", stats.available_antennas, Color::Green),
        ("Total Bookings", stats.total_bookings, Color::Blue),
        ("Pending Requests", stats.pending_bookings, Color::Yellow),
    ];
    let areas = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);
    for ((label, value, color), card_area) in cards.into_iter().zip(areas.iter()) {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                value.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(label, Style::default().fg(Color::Gray))),
        ])
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::DarkGray)));
        frame.render_widget(card, *card_area);
    }
}
