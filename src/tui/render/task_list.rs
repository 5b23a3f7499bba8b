use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::cli::output::format_task_item;
use crate::tui::app::App;
use crate::tui::text::{display_width, truncate_to_width};

/// Render the task rows, scrolled so the cursor row is visible
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let height = area.height as usize;

    if app.task_count() == 0 {
        let line = Line::from(Span::styled(
            " No tasks.",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    app.clamp_cursor();
    adjust_scroll(app, height);

    let lines: Vec<Line> = app
        .session
        .records()
        .entries()
        .skip(app.scroll_offset)
        .take(height)
        .map(|(index, task)| {
            let selected = index - 1 == app.cursor;
            let fg = if task.done {
                app.theme.dim
            } else {
                app.theme.text
            };
            let item = truncate_to_width(&format_task_item(task), width.saturating_sub(1));
            let mut text = format!(" {}", item);
            let style = if selected {
                // Pad so the selection background spans the row
                let used = display_width(&text);
                if used < width {
                    text.push_str(&" ".repeat(width - used));
                }
                Style::default()
                    .fg(app.theme.text_bright)
                    .bg(app.theme.selection_bg)
            } else {
                Style::default().fg(fg).bg(bg)
            };
            Line::from(Span::styled(text, style))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn adjust_scroll(app: &mut App, height: usize) {
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if height > 0 && app.cursor >= app.scroll_offset + height {
        app.scroll_offset = app.cursor + 1 - height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use pretty_assertions::assert_eq;

    const FIVE: &str = r#"[
        {"task":"one","done":false},
        {"task":"two","done":false},
        {"task":"three","done":true},
        {"task":"four","done":false},
        {"task":"five","done":false}
    ]"#;

    #[test]
    fn scrolls_to_keep_cursor_visible() {
        let (_dir, mut app) = app_with_tasks(FIVE);
        app.cursor = 4;
        let output = render_to_string(20, 2, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        assert_eq!(output, " [✗] four\n [✗] five");
        assert_eq!(app.scroll_offset, 3);

        app.cursor = 1;
        let output = render_to_string(20, 2, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        assert_eq!(output, " [✗] two\n [✓] three");
        assert_eq!(app.scroll_offset, 1);
    }

    #[test]
    fn long_descriptions_are_truncated() {
        let (_dir, mut app) =
            app_with_tasks(r#"[{"task":"a very long description here","done":false}]"#);
        let output = render_to_string(20, 1, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        assert_eq!(output, " [✗] a very long de…");
    }

    #[test]
    fn empty_list_says_so() {
        let (_dir, mut app) = app_with_tasks("[]");
        let output = render_to_string(20, 3, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        assert_eq!(output, " No tasks.");
    }
}
