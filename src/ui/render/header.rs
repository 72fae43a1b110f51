use crate::ui::model::Model;
use crate::ui::render::styles::fg;
use crate::ui::render::util::{center_styled, fit_height};

pub const CONTROLS_LINE: &str = "R - Reset | SPACE - Start Sorting | A - Ascending | D - Descending";
pub const SORTS_LINE: &str = "I - Insertion Sort | B - Bubble Sort";

/// Title and key help, padded to `render.top_pad` lines of screen width.
pub fn render_header(m: &Model) -> Vec<String> {
    let width = m.screen_width;
    let title_style = fg(m.render.title).bold(true);
    let text_style = fg(m.render.text);
    let lines = vec![
        center_styled(&m.title(), width, &title_style),
        center_styled(CONTROLS_LINE, width, &text_style),
        center_styled(SORTS_LINE, width, &text_style),
    ];
    fit_height(lines, width, m.render.top_pad)
}
