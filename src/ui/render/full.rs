use crate::ui::model::Model;
use crate::ui::render::util::fit_height;

// The header comes from the cache filled by the last full redraw; animation
// frames only repaint the bar region and the status line.
pub fn render_full(m: &Model) -> String {
    let mut lines = m.header.clone();
    lines.extend(m.render_bars());
    lines.truncate(m.screen_height.saturating_sub(1));
    lines = fit_height(lines, m.screen_width, m.screen_height.saturating_sub(1));
    if m.screen_height > 0 {
        lines.push(m.render_modeline());
    }
    lines.join("\n")
}
