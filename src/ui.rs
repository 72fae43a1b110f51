// UI module root: split implementation into focused submodules under `ui/`

pub mod model;
pub mod render;
pub mod run;
pub mod update;

// Re-export commonly used symbols so call sites can stay short (e.g. `crate::ui::initial_model`).
pub use model::{Model, Redraw, initial_model};
pub use render::{render_bars, render_full, render_header, render_modeline};
pub use run::{map_key, run};
pub use update::handle_update;

// Messages used by the update logic
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    WindowSize { width: usize, height: usize },
    Frame,
    Reset,
    Start,
    Ascending,
    Descending,
    SelectBubble,
    SelectInsertion,
    Quit,
}
