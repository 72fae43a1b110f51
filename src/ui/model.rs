use crate::array::{ArrayModel, Bounds, random_values};
use crate::config::{Config, RenderConfig};
use crate::sort::{Algorithm, Direction, Highlight, Session};
use rand::rngs::StdRng;

// small constants reused by rendering code
pub const MODELINE_LINES: usize = 1;
pub const DEFAULT_WIDTH: usize = 80;
pub const DEFAULT_HEIGHT: usize = 24;

/// What the last frame repainted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Redraw {
    /// header, bars and status line
    #[default]
    Full,
    /// bars and status line only; the cached header is reused
    Bars,
}

#[derive(Debug)]
pub struct Model {
    pub config: Config,
    pub render: RenderConfig,
    pub array: ArrayModel,
    // view state
    pub algorithm: Algorithm,
    pub direction: Direction,
    pub session: Option<Session>,
    // indices touched by the latest step; replaced every step
    pub highlight: Highlight,
    // steps of the running session, or of the last one once it finished
    pub steps: usize,
    pub screen_width: usize,
    pub screen_height: usize,
    // header lines cached by the last full redraw
    pub header: Vec<String>,
    pub redraw: Redraw,
    pub frames: u64,
    pub quitting: bool,
    rng: StdRng,
}

pub fn initial_model(config: Config, render: RenderConfig) -> Model {
    let mut rng = config.rng();
    let values = random_values(&mut rng, config.count, config.min_value, config.max_value);
    let mut m = Model {
        array: ArrayModel::new(values, Bounds::default()),
        config,
        render,
        algorithm: Algorithm::default(),
        direction: Direction::default(),
        session: None,
        highlight: Highlight::new(),
        steps: 0,
        screen_width: DEFAULT_WIDTH,
        screen_height: DEFAULT_HEIGHT,
        header: Vec::new(),
        redraw: Redraw::Full,
        frames: 0,
        quitting: false,
        rng,
    };
    m.array.set_bounds(m.bar_bounds());
    m.refresh_header();
    m
}

impl Model {
    // wrapper update that delegates to the update module
    pub fn update(&mut self, msg: crate::ui::Msg) {
        crate::ui::update::handle_update(self, msg);
    }

    pub fn is_sorting(&self) -> bool {
        self.session.is_some()
    }

    pub fn mode(&self) -> &'static str {
        if self.is_sorting() { "SORTING" } else { "IDLE" }
    }

    pub fn title(&self) -> String {
        format!("{} - {}", self.algorithm.name(), self.direction.label())
    }

    /// Region left for the bars once header, status line and side pads are taken.
    pub fn bar_bounds(&self) -> Bounds {
        Bounds {
            width: self.screen_width.saturating_sub(self.render.side_pad),
            height: self
                .screen_height
                .saturating_sub(self.render.top_pad + MODELINE_LINES),
        }
    }

    pub fn regenerate(&mut self) {
        let values = random_values(
            &mut self.rng,
            self.config.count,
            self.config.min_value,
            self.config.max_value,
        );
        self.array.replace(values);
    }

    pub fn refresh_header(&mut self) {
        self.header = crate::ui::render::render_header(self);
    }

    // Render helper wrappers that forward to the render module to keep this file focused on state.
    pub fn render_bars(&self) -> Vec<String> {
        crate::ui::render::render_bars(self)
    }
    pub fn render_modeline(&self) -> String {
        crate::ui::render::render_modeline(self)
    }
    pub fn render_full(&self) -> String {
        crate::ui::render::render_full(self)
    }
}
