//! # TitleBar Component
//!
//! Top status bar: application name, the two page tabs, and the status
//! message from `App`.
//!
//! ```text
//! NSI Chamber Booking │ [1] Catalog  [2] Admin │ 3 antennas, 1 pending
//! ```
//!
//! Stateless: every field is a prop supplied by the caller each frame.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::StartPage;
use crate::tui::component::Component;

pub struct TitleBar {
    pub status_message: String,
    pub page: StartPage,
    /// Short summary shown after the tabs (e.g. "3 antennas, 1 pending").
    pub summary: String,
}

impl TitleBar {
    pub fn new(status_message: String, page: StartPage, summary: String) -> Self {
        Self {
            status_message,
            page,
            summary,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let tab = |key: &str, label: &str, page: StartPage| {
            let style = if self.page == page {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::Gray)
            };
            Span::styled(format!("[{key}] {label}"), style)
        };
        let separator = Span::styled(" │ ", Style::default().fg(Color::DarkGray));

        let mut spans = vec![
            Span::styled(
                self.status_message.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            separator.clone(),
            tab("1", "Catalog", StartPage::Catalog),
            Span::raw("  "),
            tab("2", "Admin", StartPage::Admin),
        ];
        if !self.summary.is_empty() {
            spans.push(separator);
            spans.push(Span::styled(self.summary.clone(), Style::default().fg(Color::DarkGray)));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
