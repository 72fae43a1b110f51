use crate::config::{Config, FRAMES_PER_SECOND, RenderConfig};
use crate::error::{Error, Result};
use crate::ui::Msg;
use crate::ui::model::{Model, initial_model};
use bubbletea_rs::{
    Program, command::Cmd, event::KeyMsg, event::WindowSizeMsg, model::Model as TeaModel,
};
use crossterm::event::{KeyCode, KeyModifiers};
use once_cell::sync::OnceCell;
use std::time::Duration;
use tracing::info;

// TeaModel::init takes no arguments, so the parsed config is parked here before the program starts.
static LAUNCH_CONFIG: OnceCell<Config> = OnceCell::new();

const FRAME_INTERVAL: Duration = Duration::from_micros(1_000_000 / FRAMES_PER_SECOND);

// Delivered once per frame by the tick command.
#[derive(Debug)]
struct FrameMsg;

fn frame_tick() -> Cmd {
    bubbletea_rs::tick(FRAME_INTERVAL, |_| Box::new(FrameMsg) as bubbletea_rs::event::Msg)
}

/// Translate a key press into an update message.
pub fn map_key(key: &KeyCode, modifiers: KeyModifiers) -> Option<Msg> {
    match key {
        KeyCode::Esc => Some(Msg::Quit),
        KeyCode::Char(ch) => {
            if modifiers.contains(KeyModifiers::CONTROL) {
                return match ch {
                    'c' | 'C' => Some(Msg::Quit),
                    _ => None,
                };
            }
            match ch {
                // Ctrl-C delivered as ETX
                '\u{03}' => Some(Msg::Quit),
                'q' | 'Q' => Some(Msg::Quit),
                'r' | 'R' => Some(Msg::Reset),
                ' ' => Some(Msg::Start),
                'a' | 'A' => Some(Msg::Ascending),
                'd' | 'D' => Some(Msg::Descending),
                'b' | 'B' => Some(Msg::SelectBubble),
                'i' | 'I' => Some(Msg::SelectInsertion),
                _ => None,
            }
        }
        _ => None,
    }
}

// Adapter type implementing bubbletea-rs Model trait by delegating to our Model
struct TeaAdapter {
    inner: Model,
}

impl TeaModel for TeaAdapter {
    fn init() -> (Self, Option<Cmd>) {
        let config = LAUNCH_CONFIG.get().cloned().unwrap_or_default();
        let mut adapter = TeaAdapter {
            inner: initial_model(config, RenderConfig::default()),
        };
        let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
        adapter.inner.update(Msg::WindowSize {
            width: width as usize,
            height: height as usize,
        });
        let cmd = bubbletea_rs::batch(vec![bubbletea_rs::window_size(), frame_tick()]);
        (adapter, Some(cmd))
    }

    fn update(&mut self, msg: bubbletea_rs::event::Msg) -> Option<Cmd> {
        if msg.downcast_ref::<FrameMsg>().is_some() {
            self.inner.update(Msg::Frame);
            return Some(frame_tick());
        }
        if let Some(km) = msg.downcast_ref::<KeyMsg>() {
            if let Some(ui_msg) = map_key(&km.key, km.modifiers) {
                self.inner.update(ui_msg);
                if self.inner.quitting {
                    return Some(bubbletea_rs::quit());
                }
            }
            return None;
        }
        if let Some(ws) = msg.downcast_ref::<WindowSizeMsg>() {
            self.inner.update(Msg::WindowSize {
                width: ws.width as usize,
                height: ws.height as usize,
            });
            return None;
        }
        None
    }

    fn view(&self) -> String {
        self.inner.render_full()
    }
}

/// Run the interactive visualizer until the user quits.
pub async fn run(config: Config) -> Result<()> {
    config.validate()?;
    info!(
        count = config.count,
        min = config.min_value,
        max = config.max_value,
        seed = ?config.seed,
        "starting visualizer"
    );
    if LAUNCH_CONFIG.set(config).is_err() {
        return Err(Error::Program("visualizer already started".to_string()));
    }

    let builder = Program::<TeaAdapter>::builder()
        .alt_screen(true)
        .signal_handler(true);
    let program = builder
        .build()
        .map_err(|e| Error::Program(format!("failed to build program: {e:?}")))?;
    let final_adapter = program
        .run()
        .await
        .map_err(|e| Error::Program(format!("{e:?}")))?;
    info!(
        frames = final_adapter.inner.frames,
        "visualizer stopped"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_messages() {
        let none = KeyModifiers::NONE;
        assert_eq!(map_key(&KeyCode::Char('r'), none), Some(Msg::Reset));
        assert_eq!(map_key(&KeyCode::Char(' '), none), Some(Msg::Start));
        assert_eq!(map_key(&KeyCode::Char('a'), none), Some(Msg::Ascending));
        assert_eq!(map_key(&KeyCode::Char('d'), none), Some(Msg::Descending));
        assert_eq!(map_key(&KeyCode::Char('b'), none), Some(Msg::SelectBubble));
        assert_eq!(map_key(&KeyCode::Char('i'), none), Some(Msg::SelectInsertion));
        assert_eq!(map_key(&KeyCode::Char('q'), none), Some(Msg::Quit));
        assert_eq!(map_key(&KeyCode::Esc, none), Some(Msg::Quit));
        assert_eq!(map_key(&KeyCode::Char('x'), none), None);
        assert_eq!(map_key(&KeyCode::Enter, none), None);
    }

    #[test]
    fn control_c_quits_but_other_chords_do_not() {
        let ctrl = KeyModifiers::CONTROL;
        assert_eq!(map_key(&KeyCode::Char('c'), ctrl), Some(Msg::Quit));
        assert_eq!(map_key(&KeyCode::Char('r'), ctrl), None);
        assert_eq!(map_key(&KeyCode::Char('\u{03}'), KeyModifiers::NONE), Some(Msg::Quit));
    }

    #[test]
    fn frame_interval_is_sixty_hertz() {
        assert_eq!(FRAME_INTERVAL.as_micros(), 16_666);
    }
}
