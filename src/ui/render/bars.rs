use crate::sort::Mark;
use crate::ui::model::Model;
use crate::ui::render::styles::fg;
use crate::ui::render::util::blank_line;

/// Glyphs for a cell filled to 0..=8 eighths from the bottom.
pub const EIGHTHS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Height of bar `i` in eighths of a row. Bars at the minimum keep a
/// one-eighth sliver so they stay visible when highlighted.
fn bar_eighths(m: &Model, i: usize) -> usize {
    let rows = m.array.bar_height(i).max(0.0);
    ((rows * 8.0).round() as usize).max(1)
}

fn glyph(eighths: usize, level: usize) -> char {
    let filled = eighths.saturating_sub(level * 8).min(8);
    EIGHTHS[filled]
}

/// Bar region rows, top to bottom, each exactly screen width.
pub fn render_bars(m: &Model) -> Vec<String> {
    let width = m.screen_width;
    let height = m.array.bounds().height;
    let bar_width = m.array.bar_width();
    let start_x = m.render.start_x();
    let heights: Vec<usize> = (0..m.array.len()).map(|i| bar_eighths(m, i)).collect();

    let mut rows = Vec::with_capacity(height);
    for r in 0..height {
        // level counts rows up from the baseline
        let level = height - 1 - r;
        if start_x >= width {
            rows.push(blank_line(width));
            continue;
        }
        let mut line = " ".repeat(start_x);
        let mut col = start_x;
        for (i, h) in heights.iter().enumerate() {
            if col + bar_width > width {
                break;
            }
            let g = glyph(*h, level);
            let cell: String = std::iter::repeat(g).take(bar_width).collect();
            if g == ' ' {
                line.push_str(&cell);
            } else {
                let color = match m.highlight.get(i) {
                    Some(Mark::Left) => m.render.left_mark,
                    Some(Mark::Right) => m.render.right_mark,
                    None => m.render.bar_color(i),
                };
                line.push_str(&fg(color).render(&cell));
            }
            col += bar_width;
        }
        line.push_str(&" ".repeat(width - col));
        rows.push(line);
    }
    rows
}
