pub mod entry_row;
pub mod status_row;
pub mod task_list;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use super::app::App;
use super::text::display_width;

/// Main render function, dispatching to the row renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: title (1 row) | task list | entry line (1 row) | status (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_title(frame, app, chunks[0]);
    task_list::render_task_list(frame, app, chunks[1]);
    entry_row::render_entry_row(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);
}

/// Title on the left, done/total count on the right when there is room
fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let title = " To-Do List";

    let mut spans = vec![Span::styled(
        title,
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];

    let total = app.task_count();
    if total > 0 {
        let done = app.session.records().records().filter(|t| t.done).count();
        let count = format!("{}/{} done", done, total);
        let used = display_width(title) + display_width(&count) + 1;
        if used <= width {
            spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(bg)));
            spans.push(Span::styled(count, Style::default().fg(app.theme.dim).bg(bg)));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
