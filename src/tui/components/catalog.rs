//! # Catalog Page
//!
//! Public view: one card per antenna, newest last. Up/Down move between
//! cards; Enter on an available antenna opens the request form. Cards for
//! any other status show "Currently Unavailable" and Enter only explains why.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CatalogState` lives in `TuiState`
//! - `Catalog` is created each frame with borrowed state and antennas

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::core::features::join_features;
use crate::core::model::Antenna;
use crate::core::request::DATE_FORMAT;
use crate::tui::component::Component;
use crate::tui::components::badge::{antenna_status_color, badge};
use crate::tui::components::overlay::truncate_str;
use crate::tui::event::TuiEvent;

const CARD_HEIGHT: u16 = 8;

#[derive(Debug, Default)]
pub struct CatalogState {
    pub selected: usize,
    /// Index of the first card drawn.
    offset: usize,
}

/// Events emitted by the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEvent {
    /// Open the request form for this antenna id.
    Book(u32),
    /// Enter on an antenna that cannot be booked right now.
    Unavailable(u32),
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_event(&mut self, event: &TuiEvent, antennas: &[Antenna]) -> Option<CatalogEvent> {
        self.clamp(antennas.len());
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                if !antennas.is_empty() {
                    self.selected = (self.selected + 1).min(antennas.len() - 1);
                }
                None
            }
            TuiEvent::CursorHome => {
                self.selected = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.selected = antennas.len().saturating_sub(1);
                None
            }
            TuiEvent::Submit | TuiEvent::InputChar('b') => {
                antennas.get(self.selected).map(|a| {
                    if a.is_bookable() {
                        CatalogEvent::Book(a.id)
                    } else {
                        CatalogEvent::Unavailable(a.id)
                    }
                })
            }
            _ => None,
        }
    }

    /// Keep the selection inside the list after antennas were removed.
    fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    /// Scroll so the selected card is one of the `visible` drawn cards.
    fn scroll_to_selected(&mut self, visible: usize) {
        let visible = visible.max(1);
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + visible {
            self.offset = self.selected + 1 - visible;
        }
    }
}

/// Transient render wrapper for the catalog page.
pub struct Catalog<'a> {
    state: &'a mut CatalogState,
    antennas: &'a [Antenna],
}

impl<'a> Catalog<'a> {
    pub fn new(state: &'a mut CatalogState, antennas: &'a [Antenna]) -> Self {
        Self { state, antennas }
    }
}

impl Component for Catalog<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [heading_area, cards_area, help_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        let heading = Paragraph::new(vec![
            Line::from(Span::styled(
                "Antenna Catalog",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Browse our test chambers and request a time slot.",
                Style::default().fg(Color::Gray),
            )),
        ]);
        frame.render_widget(heading, heading_area);

        frame.render_widget(
            Paragraph::new(Line::from(" ↑/↓ Select  Enter Book  2 Admin  q Quit ").centered())
                .style(Style::default().fg(Color::DarkGray)),
            help_area,
        );

        if self.antennas.is_empty() {
            let empty = Paragraph::new("No antennas in the catalog yet.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, cards_area);
            return;
        }

        self.state.clamp(self.antennas.len());
        let visible = usize::from(cards_area.height / CARD_HEIGHT).max(1);
        self.state.scroll_to_selected(visible);

        let mut y = cards_area.y;
        for (i, antenna) in self.antennas.iter().enumerate().skip(self.state.offset).take(visible) {
            let height = CARD_HEIGHT.min(cards_area.y + cards_area.height - y);
            if height < 3 {
                break;
            }
            let card_area = Rect::new(cards_area.x, y, cards_area.width, height);
            render_card(frame, card_area, antenna, i == self.state.selected);
            y += height;
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, antenna: &Antenna, selected: bool) {
    let border_style = if selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let status_color = antenna_status_color(antenna.status);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Line::from(vec![
            Span::styled(
                format!(" {} ", antenna.name),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            badge(antenna.status.label(), status_color),
            Span::raw(" "),
        ]));

    let inner_width = usize::from(area.width.saturating_sub(2));
    let dim = Style::default().fg(Color::Gray);
    let features = if antenna.features.is_empty() {
        "-".to_string()
    } else {
        join_features(&antenna.features)
    };
    let action = if antenna.is_bookable() {
        Span::styled(
            "▶ Book Chamber",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("Currently Unavailable", Style::default().fg(Color::DarkGray))
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(antenna.antenna_type.label(), Style::default().fg(Color::Cyan)),
            Span::styled(format!("  {}  ", antenna.frequency), dim),
            Span::styled(antenna.location.label(), dim),
        ]),
        Line::from(truncate_str(&antenna.description, inner_width)),
        Line::from(Span::styled(
            truncate_str(&format!("Features: {features}"), inner_width),
            dim,
        )),
        Line::from(Span::styled(
            format!(
                "Last maintenance: {}",
                antenna.last_maintenance.format(DATE_FORMAT)
            ),
            dim,
        )),
        Line::from(""),
        Line::from(action),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
