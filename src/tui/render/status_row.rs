use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, StatusKind};
use crate::tui::text::truncate_to_width;

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let Some(status) = &app.status else {
        return;
    };
    let fg = match status.kind {
        StatusKind::Info => app.theme.green,
        StatusKind::Warning => app.theme.red,
    };
    let text = truncate_to_width(&format!(" {}", status.text), area.width as usize);
    let line = Line::from(Span::styled(text, Style::default().fg(fg).bg(bg)));
    frame.render_widget(Paragraph::new(line), area);
}
