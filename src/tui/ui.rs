use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::StartPage;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{AdminDashboard, Catalog, TitleBar, Toast, render_form};
use crate::tui::TuiState;

/// Draw one frame: title bar, the current page, then the open form and the
/// toast on top.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let area = frame.area();
    let [title_area, main_area] = Layout::vertical([Length(1), Min(0)]).areas(area);

    let stats = app.stats();
    let summary = format!(
        "{} antennas, {} pending",
        stats.total_antennas, stats.pending_bookings
    );
    TitleBar::new(app.status_message.clone(), tui.page, summary).render(frame, title_area);

    match tui.page {
        StartPage::Catalog => {
            Catalog::new(&mut tui.catalog, app.antennas.list()).render(frame, main_area)
        }
        StartPage::Admin => AdminDashboard::new(&mut tui.admin, app).render(frame, main_area),
    }

    if let Some(overlay) = &tui.overlay {
        render_form(frame, main_area, overlay.form());
    }

    if let Some(notification) = &app.notification {
        Toast::new(notification).render(frame, area);
    }
}
