//! # Toast Component
//!
//! The latest notification, drawn in the top-right corner over whatever
//! page or form is showing. Expiry is handled by the event loop.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::core::state::{Level, Notification};
use crate::tui::component::Component;

const TOAST_WIDTH: u16 = 44;

pub struct Toast<'a> {
    pub notification: &'a Notification,
}

impl<'a> Toast<'a> {
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }

    /// Corner placement inside `area`, tall enough for the wrapped message.
    pub fn area(&self, area: Rect) -> Rect {
        let width = TOAST_WIDTH.min(area.width);
        let inner = usize::from(width.saturating_sub(2)).max(1);
        let lines = self.notification.message.chars().count().div_ceil(inner).max(1) as u16;
        let height = (lines + 3).min(area.height);
        Rect::new(area.x + area.width - width, area.y, width, height)
    }
}

impl Component for Toast<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let toast_area = self.area(area);
        let color = match self.notification.level {
            Level::Success => Color::Green,
            Level::Error => Color::Red,
        };
        frame.render_widget(Clear, toast_area);
        let paragraph = Paragraph::new(vec![
            Line::from(Span::styled(
                self.notification.title.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(self.notification.message.clone()),
        ])
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(color)));
        frame.render_widget(paragraph, toast_area);
    }
}
