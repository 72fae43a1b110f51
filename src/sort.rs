// Sort engine root: step generators that pause after every visible mutation.

pub mod bubble;
pub mod insertion;
pub mod session;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;
pub use session::Session;

use crate::array::ArrayModel;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ascending => "Ascending",
            Self::Descending => "Descending",
        }
    }

    /// True when `left` must move past `right` for this direction.
    pub fn out_of_order(&self, left: i64, right: i64) -> bool {
        (left > right && *self == Self::Ascending) || (left < right && *self == Self::Descending)
    }

    pub fn is_sorted(&self, values: &[i64]) -> bool {
        values.windows(2).all(|w| !self.out_of_order(w[0], w[1]))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Bubble,
    Insertion,
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Insertion => "Insertion Sort",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "bubble" | "b" => Some(Self::Bubble),
            "insertion" | "i" => Some(Self::Insertion),
            _ => None,
        }
    }

    pub fn generator(&self, direction: Direction) -> Box<dyn StepGenerator> {
        match self {
            Self::Bubble => Box::new(BubbleSort::new(direction)),
            Self::Insertion => Box::new(InsertionSort::new(direction)),
        }
    }
}

/// Emphasis of an index touched by the latest step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    /// drawn green
    Left,
    /// drawn red
    Right,
}

/// Indices mutated by one step. Built fresh for every step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Highlight {
    marks: BTreeMap<usize, Mark>,
}

impl Highlight {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pair(left: usize, right: usize) -> Self {
        let mut h = Self::new();
        h.mark(left, Mark::Left);
        h.mark(right, Mark::Right);
        h
    }

    pub fn mark(&mut self, index: usize, mark: Mark) {
        self.marks.insert(index, mark);
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.marks.get(&index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, Mark)> + '_ {
        self.marks.iter().map(|(i, m)| (*i, *m))
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn clear(&mut self) {
        self.marks.clear();
    }
}

/// A sorting algorithm as a resumable sequence of steps.
///
/// `step` runs until the next swap or shift, performs it on `array` and
/// returns the touched indices. `None` means the sort is finished; a
/// finished generator keeps returning `None`.
pub trait StepGenerator: Send {
    fn step(&mut self, array: &mut ArrayModel) -> Option<Highlight>;
}
