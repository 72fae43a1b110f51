use crate::sort::{Algorithm, Direction, Session};
use crate::ui::model::{Model, Redraw};
use tracing::{debug, info};

pub fn handle_update(m: &mut Model, msg: crate::ui::Msg) {
    match msg {
        crate::ui::Msg::WindowSize { width, height } => handle_window_size(m, width, height),
        crate::ui::Msg::Frame => handle_frame(m),
        crate::ui::Msg::Reset => handle_reset(m),
        crate::ui::Msg::Start => handle_start(m),
        crate::ui::Msg::Ascending => set_direction(m, Direction::Ascending),
        crate::ui::Msg::Descending => set_direction(m, Direction::Descending),
        crate::ui::Msg::SelectBubble => set_algorithm(m, Algorithm::Bubble),
        crate::ui::Msg::SelectInsertion => set_algorithm(m, Algorithm::Insertion),
        crate::ui::Msg::Quit => m.quitting = true,
    }
}

fn handle_window_size(m: &mut Model, width: usize, height: usize) {
    m.screen_width = width;
    m.screen_height = height;
    m.array.set_bounds(m.bar_bounds());
    debug!(width, height, "window resized");
    full_redraw(m);
}

// One frame: a single sort step while animating, otherwise an idle repaint.
fn handle_frame(m: &mut Model) {
    m.frames += 1;
    if !m.is_sorting() {
        m.highlight.clear();
        full_redraw(m);
        return;
    }
    let pulled = match m.session.as_mut() {
        Some(session) => session
            .advance(&mut m.array)
            .map(|highlight| (highlight, session.steps())),
        None => None,
    };
    match pulled {
        Some((highlight, steps)) => {
            m.steps = steps;
            m.highlight = highlight;
            m.redraw = Redraw::Bars;
        }
        None => {
            if let Some(session) = m.session.take() {
                info!(
                    algorithm = session.algorithm().name(),
                    direction = session.direction().label(),
                    steps = session.steps(),
                    "sort finished"
                );
            }
            m.highlight.clear();
            full_redraw(m);
        }
    }
}

fn handle_reset(m: &mut Model) {
    if m.session.take().is_some() {
        info!(steps = m.steps, "sort discarded by reset");
    }
    m.regenerate();
    m.highlight.clear();
    m.steps = 0;
    debug!(len = m.array.len(), "array regenerated");
    full_redraw(m);
}

fn handle_start(m: &mut Model) {
    if m.is_sorting() {
        debug!("start ignored: already sorting");
        return;
    }
    info!(
        algorithm = m.algorithm.name(),
        direction = m.direction.label(),
        len = m.array.len(),
        "sort started"
    );
    m.session = Some(Session::start(m.algorithm, m.direction));
    m.steps = 0;
    m.highlight.clear();
}

fn set_direction(m: &mut Model, direction: Direction) {
    if m.is_sorting() {
        debug!(direction = direction.label(), "direction change ignored while sorting");
        return;
    }
    m.direction = direction;
    full_redraw(m);
}

fn set_algorithm(m: &mut Model, algorithm: Algorithm) {
    if m.is_sorting() {
        debug!(algorithm = algorithm.name(), "algorithm change ignored while sorting");
        return;
    }
    m.algorithm = algorithm;
    full_redraw(m);
}

fn full_redraw(m: &mut Model) {
    m.refresh_header();
    m.redraw = Redraw::Full;
}
