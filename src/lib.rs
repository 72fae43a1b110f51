//! sortvis - terminal sorting algorithm visualizer
//!
//! Library crate exposing the sort engine, the array model and the
//! bubbletea-rs UI used by the binary.
//!
//! Tests live close to the modules they exercise as unit tests.

pub mod array;
pub mod cli;
pub mod config;
pub mod error;
pub mod sort;
pub mod trace;

pub mod ui;
