use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_segmentation::UnicodeSegmentation;

use crate::tui::app::{App, Mode};
use crate::tui::text::display_width;

const NAVIGATE_HINTS: &str = " a add  e edit  x done  d delete  r refresh  q quit";
const ENTRY_HINT: &str = "Enter save  Esc cancel";

/// Render key hints, or the entry line while adding or editing
pub fn render_entry_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let label = match app.mode {
        Mode::Navigate => {
            let line = Line::from(Span::styled(
                NAVIGATE_HINTS,
                Style::default().fg(app.theme.dim).bg(bg),
            ));
            frame.render_widget(Paragraph::new(line), area);
            return;
        }
        Mode::Add => " Add: ",
        Mode::Edit(_) => " Edit: ",
    };

    let label_width = display_width(label);
    let available = width.saturating_sub(label_width);
    let skip = entry_scroll(app.entry.cursor_col(), available);
    let visible = skip_cells(app.entry.text(), skip);

    let mut spans = vec![
        Span::styled(label, Style::default().fg(app.theme.highlight).bg(bg)),
        Span::styled(
            visible.to_string(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ),
    ];
    let used = label_width + display_width(visible);
    let hint_width = display_width(ENTRY_HINT);
    if used + hint_width + 2 <= width {
        spans.push(Span::styled(
            " ".repeat(width - used - hint_width - 1),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(
            ENTRY_HINT,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    let hidden = display_width(app.entry.text()) - display_width(visible);
    let col = label_width + app.entry.cursor_col() - hidden;
    let x = area.x + (col.min(width.saturating_sub(1)) as u16);
    frame.set_cursor_position(Position::new(x, area.y));
}

/// Cells to hide on the left so the text before the cursor, plus the
/// cursor itself, fits in `available` cells
fn entry_scroll(cursor_col: usize, available: usize) -> usize {
    if available == 0 {
        cursor_col
    } else {
        cursor_col.saturating_sub(available - 1)
    }
}

/// Drop whole graphemes from the front of `s` until at least `cells`
/// terminal cells are gone
fn skip_cells(s: &str, cells: usize) -> &str {
    let mut skipped = 0;
    for (offset, g) in s.grapheme_indices(true) {
        if skipped >= cells {
            return &s[offset..];
        }
        skipped += display_width(g);
    }
    ""
}
