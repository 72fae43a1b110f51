//! Headless runs: drive a sort session to the end without a terminal and
//! report every step.

use crate::array::{ArrayModel, Bounds};
use crate::error::{Error, Result};
use crate::sort::{Algorithm, Direction, Mark, Session};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MarkedIndex {
    pub index: usize,
    pub mark: Mark,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TraceStep {
    pub step: usize,
    /// Array contents right after this step.
    pub values: Vec<i64>,
    pub highlight: Vec<MarkedIndex>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Trace {
    pub algorithm: Algorithm,
    pub direction: Direction,
    pub initial: Vec<i64>,
    #[serde(rename = "final")]
    pub final_values: Vec<i64>,
    pub steps: Vec<TraceStep>,
}

pub fn trace(algorithm: Algorithm, direction: Direction, values: Vec<i64>) -> Result<Trace> {
    if values.is_empty() {
        return Err(Error::EmptyArray);
    }
    let initial = values.clone();
    // geometry is irrelevant without a screen
    let mut array = ArrayModel::new(values, Bounds::default());
    let mut session = Session::start(algorithm, direction);
    let mut steps = Vec::new();
    while let Some(h) = session.advance(&mut array) {
        steps.push(TraceStep {
            step: session.steps(),
            values: array.values().to_vec(),
            highlight: h
                .iter()
                .map(|(index, mark)| MarkedIndex { index, mark })
                .collect(),
        });
    }
    Ok(Trace {
        algorithm: session.algorithm(),
        direction: session.direction(),
        initial,
        final_values: array.values().to_vec(),
        steps,
    })
}

impl Trace {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
