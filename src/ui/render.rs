// Render module split into focused submodules: header, bars, status line and the full frame.

pub mod bars;
pub mod full;
pub mod header;
pub mod modeline;
pub mod styles;
pub mod util;

pub use bars::{EIGHTHS, render_bars};
pub use full::render_full;
pub use header::{CONTROLS_LINE, SORTS_LINE, render_header};
pub use modeline::render_modeline;
