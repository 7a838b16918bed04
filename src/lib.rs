//! # lifetick
//!
//! Live precise-age clock for the terminal.
//!
//! Pick a birth date on three wheel columns, then watch your age tick
//! by as a real number with 12 fractional digits, updating every frame
//! without flicker.
//!
//! ## Architecture
//!
//! The computation core is a pure function: (birth instant, current
//! instant) -> age snapshot. Around it, a frame loop samples the clock
//! once per frame and splits the output two ways: per-frame fields are
//! written straight to their terminal cells, while slow-changing stats
//! flow through [spark-signals](https://crates.io/crates/spark-signals)
//! and only repaint when a value actually changes.
//!
//! ```text
//! input events ─> wheel gestures ─> DateSelection ─> BirthInstant
//!                                                        │
//! frame tick ─> calculate() ─┬─> fast-path cell writes   │
//!                            └─> signals ─> stats effect ◄┘
//! ```
//!
//! ## Modules
//!
//! - [`age`] - the pure calculator, zodiac table, calendar helpers
//! - [`state`] - date selection, wheel gesture accumulator, clipboard
//! - [`pipeline`] - cancellable frame loop, terminal session guard
//! - [`input`] - crossterm event conversion and polling
//! - [`render`] - the entry and results screens
//! - [`app`] - screen routing and the event loop

pub mod age;
pub mod app;
pub mod input;
pub mod pipeline;
pub mod render;
pub mod state;

// Re-export commonly used items
pub use age::{
    AgeSnapshot, BirthInstant, FractionalYears, MS_PER_DAY, MS_PER_YEAR, calculate,
    current_instant, format_precise, life_progress, zodiac_sign,
};
pub use app::App;
pub use pipeline::FrameLoop;
pub use state::{DateSelection, Field, Step, WheelState};
