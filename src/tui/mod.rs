//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Routing
//!
//! ```text
//! TuiEvent ─► Ctrl+C?            → quit
//!          ─► form open?         → form  → FormEvent  → update() / close
//!          ─► 1 / 2 / q          → switch page / quit
//!          ─► current page       → CatalogEvent / AdminEvent → open form / update()
//! ```
//!
//! ## Redraw Strategy
//!
//! The loop only draws after an event or when the toast needs to go away.
//! Idle, it sleeps up to 500ms per poll; while a toast is showing it wakes
//! more often so the toast disappears close to its deadline.

mod component;
mod components;
mod event;
mod ui;

use std::io::{self, stdout};
use std::time::{Duration, Instant};

use chrono::{Local, NaiveDate};
use crossterm::cursor::SetCursorStyle;
use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use log::{debug, info, warn};

use crate::StartPage;
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Level};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    AdminEvent, AdminState, AntennaForm, BookingForm, CatalogEvent, CatalogState, FormEvent,
    FormLayout, RequestForm,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// The modal form currently on screen.
pub enum Overlay {
    Antenna(AntennaForm),
    Booking(BookingForm),
    Request(RequestForm),
}

impl Overlay {
    pub fn form(&self) -> &dyn FormLayout {
        match self {
            Overlay::Antenna(form) => form,
            Overlay::Booking(form) => form,
            Overlay::Request(form) => form,
        }
    }

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FormEvent> {
        match self {
            Overlay::Antenna(form) => form.handle_event(event),
            Overlay::Booking(form) => form.handle_event(event),
            Overlay::Request(form) => form.handle_event(event),
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub page: StartPage,
    // Persistent page states
    pub catalog: CatalogState,
    pub admin: AdminState,
    // Open form (None = hidden)
    pub overlay: Option<Overlay>,
    /// Notification seq currently on screen and when it first appeared.
    toast_shown: Option<(u64, Instant)>,
}

impl TuiState {
    pub fn new(page: StartPage) -> Self {
        Self {
            page,
            catalog: CatalogState::new(),
            admin: AdminState::new(),
            overlay: None,
            toast_shown: None,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        // Kitty keyboard protocol lets Shift+Tab and Ctrl+letter come through
        // unambiguously; terminals without it ignore the request.
        execute!(
            stdout(),
            EnableBracketedPaste,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let mut app = if config.seed_demo_data { App::seeded() } else { App::empty() };
    let mut tui = TuiState::new(config.start_page);
    let toast_ttl = Duration::from_secs(config.notification_secs);
    info!(
        "Starting on {:?} with {} antennas and {} bookings",
        config.start_page,
        app.antennas.len(),
        app.bookings.len()
    );

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app, &mut tui, toast_ttl);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    toast_ttl: Duration,
) -> io::Result<()> {
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Could not enable terminal modes: {e}");
            None
        }
    };
    let mut needs_redraw = true; // Force first frame

    loop {
        if expire_toast(app, tui, Instant::now(), toast_ttl) {
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        // Wake up sooner while a toast is counting down
        let timeout = if app.notification.is_some() {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(500)
        };
        let Some(first_event) = poll_event_timeout(timeout)? else {
            continue;
        };
        needs_redraw = true;

        // Process first event + drain ALL pending events before next draw
        let mut next = Some(first_event);
        while let Some(event) = next {
            if handle_event(app, tui, event, today()) {
                info!("Quit requested");
                return Ok(());
            }
            next = poll_event_immediate()?;
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Start timing a new notification, or dismiss the current one once `ttl`
/// has passed. Returns true when the screen needs a redraw.
fn expire_toast(app: &mut App, tui: &mut TuiState, now: Instant, ttl: Duration) -> bool {
    let Some(seq) = app.notification.as_ref().map(|n| n.seq) else {
        tui.toast_shown = None;
        return false;
    };
    match tui.toast_shown {
        Some((shown, since)) if shown == seq => {
            if now.duration_since(since) >= ttl {
                update(app, Action::DismissNotification);
                tui.toast_shown = None;
                true
            } else {
                false
            }
        }
        _ => {
            tui.toast_shown = Some((seq, now));
            false
        }
    }
}

/// Route one event. Returns true when the application should quit.
fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent, today: NaiveDate) -> bool {
    match event {
        // Ctrl+C always quits, whatever has focus
        TuiEvent::ForceQuit => return dispatch(app, Action::Quit) == Effect::Quit,
        // Resize just needs a redraw
        TuiEvent::Resize => return false,
        _ => {}
    }

    // When a form is open, route all events to it
    if let Some(overlay) = tui.overlay.as_mut() {
        match overlay.handle_event(&event) {
            Some(FormEvent::Dispatch(action)) => match dispatch(app, action) {
                Effect::CloseForm => tui.overlay = None,
                Effect::Quit => return true,
                Effect::None => {}
            },
            Some(FormEvent::Dismiss) => tui.overlay = None,
            None => {}
        }
        return false;
    }

    match event {
        TuiEvent::InputChar('1') => {
            tui.page = StartPage::Catalog;
            return false;
        }
        TuiEvent::InputChar('2') => {
            tui.page = StartPage::Admin;
            return false;
        }
        TuiEvent::InputChar('q') => return dispatch(app, Action::Quit) == Effect::Quit,
        _ => {}
    }

    match tui.page {
        StartPage::Catalog => match tui.catalog.handle_event(&event, app.antennas.list()) {
            Some(CatalogEvent::Book(id)) => {
                if let Some(antenna) = app.antennas.get(id) {
                    debug!("Opening request form for antenna {id}");
                    tui.overlay = Some(Overlay::Request(RequestForm::new(antenna, today)));
                }
            }
            Some(CatalogEvent::Unavailable(id)) => {
                if let Some(message) = app.antennas.get(id).map(|a| a.unavailable_message()) {
                    dispatch(
                        app,
                        Action::Notify {
                            level: Level::Error,
                            title: "Unavailable".to_string(),
                            message,
                        },
                    );
                }
            }
            None => {}
        },
        StartPage::Admin => match tui.admin.handle_event(&event, app) {
            Some(AdminEvent::NewAntenna) => {
                tui.overlay = Some(Overlay::Antenna(AntennaForm::create(today)));
            }
            Some(AdminEvent::EditAntenna(id)) => {
                if let Some(antenna) = app.antennas.get(id) {
                    tui.overlay = Some(Overlay::Antenna(AntennaForm::edit(antenna)));
                }
            }
            Some(AdminEvent::NewBooking) => {
                let names = app.antennas.list().iter().map(|a| a.name.clone()).collect();
                tui.overlay = Some(Overlay::Booking(BookingForm::create(names)));
            }
            Some(AdminEvent::EditBooking(id)) => {
                if let Some(booking) = app.bookings.get(id) {
                    tui.overlay = Some(Overlay::Booking(BookingForm::edit(booking)));
                }
            }
            Some(AdminEvent::Dispatch(action)) => {
                if dispatch(app, action) == Effect::Quit {
                    return true;
                }
            }
            None => {}
        },
    }
    false
}

fn dispatch(app: &mut App, action: Action) -> Effect {
    let effect = update(app, action);
    debug!("Effect: {:?}", effect);
    effect
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{AntennaStatus, BookingStatus};
    use crate::test_support::test_app;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()
    }

    fn send(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> bool {
        handle_event(app, tui, event, today())
    }

    fn type_str(app: &mut App, tui: &mut TuiState, text: &str) {
        for c in text.chars() {
            send(app, tui, TuiEvent::InputChar(c));
        }
    }

    fn fill_request(app: &mut App, tui: &mut TuiState) {
        for value in ["Ada Park", "ada@example.com", "555-0100", "2024-07-05", "09:00", "11:00"] {
            type_str(app, tui, value);
            send(app, tui, TuiEvent::NextField);
        }
        send(app, tui, TuiEvent::CursorRight);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app();
        let mut tui = TuiState::new(StartPage::Catalog);
        assert!(!send(&mut app, &mut tui, TuiEvent::Resize));
        assert!(send(&mut app, &mut tui, TuiEvent::InputChar('q')));
        assert!(send(&mut app, &mut tui, TuiEvent::ForceQuit));
    }

    #[test]
    fn test_page_switching() {
        let mut app = test_app();
        let mut tui = TuiState::new(StartPage::Catalog);
        send(&mut app, &mut tui, TuiEvent::InputChar('2'));
        assert_eq!(tui.page, StartPage::Admin);
        send(&mut app, &mut tui, TuiEvent::InputChar('1'));
        assert_eq!(tui.page, StartPage::Catalog);
    }

    #[test]
    fn test_typing_q_in_a_form_does_not_quit() {
        let mut app = test_app();
        let mut tui = TuiState::new(StartPage::Admin);
        send(&mut app, &mut tui, TuiEvent::InputChar('n'));
        assert!(matches!(tui.overlay, Some(Overlay::Antenna(_))));
        assert!(!send(&mut app, &mut tui, TuiEvent::InputChar('q')));
        assert!(!send(&mut app, &mut tui, TuiEvent::InputChar('2')));
        send(&mut app, &mut tui, TuiEvent::Escape);
        assert!(tui.overlay.is_none());
        assert_eq!(app.antennas.len(), 3);
    }

    #[test]
    fn test_catalog_request_flow_leaves_bookings_alone() {
        let mut app = test_app();
        let mut tui = TuiState::new(StartPage::Catalog);
        send(&mut app, &mut tui, TuiEvent::Submit);
        assert!(matches!(tui.overlay, Some(Overlay::Request(_))));

        fill_request(&mut app, &mut tui);
        send(&mut app, &mut tui, TuiEvent::Submit);

        assert!(tui.overlay.is_none());
        assert_eq!(app.bookings.len(), 2);
        let notification = app.notification.as_ref().unwrap();
        assert_eq!(notification.title, "Booking Confirmed!");
    }

    #[test]
    fn test_invalid_request_keeps_form_open() {
        let mut app = test_app();
        let mut tui = TuiState::new(StartPage::Catalog);
        send(&mut app, &mut tui, TuiEvent::Submit);
        send(&mut app, &mut tui, TuiEvent::Submit);
        assert!(matches!(tui.overlay, Some(Overlay::Request(_))));
        assert_eq!(app.notification.as_ref().unwrap().level, Level::Error);
    }

    #[test]
    fn test_occupied_antenna_cannot_be_booked_from_catalog() {
        let mut app = test_app();
        let mut tui = TuiState::new(StartPage::Catalog);

        // Take the first antenna out of service through the admin form
        send(&mut app, &mut tui, TuiEvent::InputChar('2'));
        send(&mut app, &mut tui, TuiEvent::InputChar('e'));
        let Some(Overlay::Antenna(form)) = tui.overlay.as_mut() else {
            panic!("expected the antenna form");
        };
        form.set_focus(4);
        send(&mut app, &mut tui, TuiEvent::CursorRight);
        send(&mut app, &mut tui, TuiEvent::Submit);
        assert!(tui.overlay.is_none());
        assert_eq!(app.antennas.get(1).unwrap().status, AntennaStatus::Occupied);

        send(&mut app, &mut tui, TuiEvent::InputChar('1'));
        send(&mut app, &mut tui, TuiEvent::Submit);
        assert!(tui.overlay.is_none());
        let notification = app.notification.as_ref().unwrap();
        assert_eq!(notification.level, Level::Error);
        assert_eq!(
            notification.message,
            "Aurora Array Alpha is currently unavailable (occupied)."
        );
    }

    #[test]
    fn test_admin_creates_antenna() {
        let mut app = test_app();
        let mut tui = TuiState::new(StartPage::Admin);
        send(&mut app, &mut tui, TuiEvent::InputChar('n'));
        type_str(&mut app, &mut tui, "Gamma");
        send(&mut app, &mut tui, TuiEvent::NextField);
        send(&mut app, &mut tui, TuiEvent::CursorRight);
        send(&mut app, &mut tui, TuiEvent::NextField);
        type_str(&mut app, &mut tui, "2-18 GHz");
        send(&mut app, &mut tui, TuiEvent::NextField);
        send(&mut app, &mut tui, TuiEvent::CursorRight);
        send(&mut app, &mut tui, TuiEvent::Submit);

        assert!(tui.overlay.is_none());
        let created = app.antennas.get(4).unwrap();
        assert_eq!(created.name, "Gamma");
        assert_eq!(created.last_maintenance, today());
        assert_eq!(app.notification.as_ref().unwrap().message, "Antenna created successfully.");
    }

    #[test]
    fn test_failed_save_keeps_form_open() {
        let mut app = test_app();
        let mut tui = TuiState::new(StartPage::Admin);
        send(&mut app, &mut tui, TuiEvent::InputChar('n'));
        send(&mut app, &mut tui, TuiEvent::Submit);
        assert!(matches!(tui.overlay, Some(Overlay::Antenna(_))));
        assert_eq!(app.antennas.len(), 3);
        assert_eq!(app.notification.as_ref().unwrap().level, Level::Error);
    }

    #[test]
    fn test_admin_delete_antenna() {
        let mut app = test_app();
        let mut tui = TuiState::new(StartPage::Admin);
        send(&mut app, &mut tui, TuiEvent::InputChar('d'));
        assert_eq!(app.antennas.len(), 3);
        send(&mut app, &mut tui, TuiEvent::InputChar('d'));
        assert_eq!(app.antennas.len(), 2);
        assert!(app.antennas.get(1).is_none());
    }

    #[test]
    fn test_admin_approve_from_table_and_form() {
        let mut app = test_app();
        let mut tui = TuiState::new(StartPage::Admin);
        send(&mut app, &mut tui, TuiEvent::NextField);
        send(&mut app, &mut tui, TuiEvent::CursorDown);
        send(&mut app, &mut tui, TuiEvent::InputChar('a'));
        assert_eq!(app.bookings.get(2).unwrap().status, BookingStatus::Confirmed);

        let mut app = test_app();
        let mut tui = TuiState::new(StartPage::Admin);
        send(&mut app, &mut tui, TuiEvent::NextField);
        send(&mut app, &mut tui, TuiEvent::CursorDown);
        send(&mut app, &mut tui, TuiEvent::Submit);
        assert!(matches!(tui.overlay, Some(Overlay::Booking(_))));
        send(&mut app, &mut tui, TuiEvent::Reject);
        assert!(tui.overlay.is_none());
        assert_eq!(app.bookings.get(2).unwrap().status, BookingStatus::Rejected);
        assert_eq!(app.notification.as_ref().unwrap().message, "Booking rejected.");
    }

    #[test]
    fn test_admin_approve_confirmed_booking_explains() {
        let mut app = test_app();
        let mut tui = TuiState::new(StartPage::Admin);
        send(&mut app, &mut tui, TuiEvent::NextField);
        send(&mut app, &mut tui, TuiEvent::InputChar('a'));
        assert_eq!(app.bookings.get(1).unwrap().status, BookingStatus::Confirmed);
        let notification = app.notification.as_ref().unwrap();
        assert_eq!(notification.level, Level::Error);
        assert_eq!(notification.title, "Not Pending");
    }

    #[test]
    fn test_admin_new_booking_is_pending() {
        let mut app = test_app();
        let mut tui = TuiState::new(StartPage::Admin);
        send(&mut app, &mut tui, TuiEvent::NextField);
        send(&mut app, &mut tui, TuiEvent::InputChar('n'));
        send(&mut app, &mut tui, TuiEvent::CursorRight);
        send(&mut app, &mut tui, TuiEvent::NextField);
        type_str(&mut app, &mut tui, "Dr. Ada Park");
        send(&mut app, &mut tui, TuiEvent::NextField);
        type_str(&mut app, &mut tui, "2024-07-10");
        send(&mut app, &mut tui, TuiEvent::NextField);
        type_str(&mut app, &mut tui, "10:00 - 11:00");
        send(&mut app, &mut tui, TuiEvent::Submit);

        assert!(tui.overlay.is_none());
        let booking = app.bookings.get(3).unwrap();
        assert_eq!(booking.antenna_name, "Aurora Array Alpha");
        assert_eq!(booking.status, BookingStatus::Pending);
    }

    #[test]
    fn test_toast_expires_after_ttl() {
        let mut app = test_app();
        let mut tui = TuiState::new(StartPage::Catalog);
        let ttl = Duration::from_secs(4);
        let start = Instant::now();

        assert!(!expire_toast(&mut app, &mut tui, start, ttl));
        app.notify(Level::Success, "Success", "first");
        assert!(!expire_toast(&mut app, &mut tui, start, ttl));
        assert!(!expire_toast(&mut app, &mut tui, start + Duration::from_secs(3), ttl));

        // A fresh notification restarts the clock
        app.notify(Level::Success, "Success", "second");
        let later = start + Duration::from_secs(3);
        assert!(!expire_toast(&mut app, &mut tui, later, ttl));
        assert!(!expire_toast(&mut app, &mut tui, start + Duration::from_secs(6), ttl));
        assert!(expire_toast(&mut app, &mut tui, later + ttl, ttl));
        assert!(app.notification.is_none());
    }
}
