//! Run parameters and the render configuration.

use crate::error::{Error, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::path::PathBuf;

pub const DEFAULT_COUNT: usize = 50;
pub const DEFAULT_MIN: i64 = 0;
pub const DEFAULT_MAX: i64 = 100;

/// Frames per second of the animation driver; one sort step per frame.
pub const FRAMES_PER_SECOND: u64 = 60;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Number of bars generated on start and on every reset.
    pub count: usize,
    pub min_value: i64,
    pub max_value: i64,
    /// Fixed seed for reproducible arrays; entropy when absent.
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            count: DEFAULT_COUNT,
            min_value: DEFAULT_MIN,
            max_value: DEFAULT_MAX,
            seed: None,
            log_file: None,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(Error::EmptyArray);
        }
        if self.min_value > self.max_value {
            return Err(Error::InvalidBounds {
                min: self.min_value,
                max: self.max_value,
            });
        }
        Ok(())
    }

    /// Create (truncate) the log file, if one was requested.
    pub fn open_log_file(&self) -> Result<Option<File>> {
        match &self.log_file {
            Some(path) => Ok(Some(File::create(path)?)),
            None => Ok(None),
        }
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

pub type Rgb = (u8, u8, u8);

/// Colours and paddings used by the render surface. Built once and handed
/// to the model; nothing reads these from globals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    /// Bar colours cycled by index.
    pub palette: Vec<Rgb>,
    pub left_mark: Rgb,
    pub right_mark: Rgb,
    pub title: Rgb,
    pub text: Rgb,
    /// Columns left free around the bars, split evenly between both sides.
    pub side_pad: usize,
    /// Header lines above the bars.
    pub top_pad: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            palette: vec![(128, 128, 128), (160, 160, 160), (192, 192, 192)],
            left_mark: (0, 255, 0),
            right_mark: (255, 0, 0),
            title: (0, 255, 0),
            text: (255, 255, 255),
            side_pad: 4,
            top_pad: 4,
        }
    }
}

impl RenderConfig {
    pub fn bar_color(&self, index: usize) -> Rgb {
        if self.palette.is_empty() {
            return self.text;
        }
        self.palette[index % self.palette.len()]
    }

    pub fn start_x(&self) -> usize {
        self.side_pad / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn defaults_validate() {
        let c = Config::default();
        assert_eq!(c.count, 50);
        assert_eq!((c.min_value, c.max_value), (0, 100));
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_empty_and_inverted_bounds() {
        let c = Config {
            count: 0,
            ..Config::default()
        };
        assert!(matches!(c.validate(), Err(Error::EmptyArray)));
        let c = Config {
            min_value: 10,
            max_value: 5,
            ..Config::default()
        };
        assert!(matches!(
            c.validate(),
            Err(Error::InvalidBounds { min: 10, max: 5 })
        ));
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let c = Config {
            seed: Some(99),
            ..Config::default()
        };
        let a: u64 = c.rng().gen();
        let b: u64 = c.rng().gen();
        assert_eq!(a, b);
    }

    #[test]
    fn log_file_is_optional_and_io_errors_surface() {
        assert!(Config::default().open_log_file().unwrap().is_none());

        let path = std::env::temp_dir().join(format!("sortvis-{}.log", std::process::id()));
        let c = Config {
            log_file: Some(path.clone()),
            ..Config::default()
        };
        assert!(c.open_log_file().unwrap().is_some());
        let _ = std::fs::remove_file(&path);

        let c = Config {
            log_file: Some(PathBuf::from("/nonexistent-sortvis-dir/run.log")),
            ..Config::default()
        };
        assert!(matches!(c.open_log_file(), Err(Error::Io(_))));
    }

    #[test]
    fn palette_cycles_by_index() {
        let r = RenderConfig::default();
        assert_eq!(r.bar_color(0), (128, 128, 128));
        assert_eq!(r.bar_color(4), (160, 160, 160));
        assert_eq!(r.bar_color(5), (192, 192, 192));
        assert_eq!(r.start_x(), 2);
    }
}
