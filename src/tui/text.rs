use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Width of `s` in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Cut `s` down to `max_cells` terminal cells, ending in `…` when shortened.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let budget = max_cells - 1;
    let mut width = 0;
    let mut out = String::new();
    for g in s.graphemes(true) {
        let w = display_width(g);
        if width + w > budget {
            break;
        }
        width += w;
        out.push_str(g);
    }
    out.push('…');
    out
}

/// Byte offset of the grapheme boundary after `offset`, if any.
pub fn next_boundary(s: &str, offset: usize) -> Option<usize> {
    s.get(offset..)?
        .graphemes(true)
        .next()
        .map(|g| offset + g.len())
}

/// Byte offset of the grapheme boundary before `offset`, if any.
pub fn prev_boundary(s: &str, offset: usize) -> Option<usize> {
    s.get(..offset)?
        .grapheme_indices(true)
        .next_back()
        .map(|(i, _)| i)
}
