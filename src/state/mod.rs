//! State Module - user-interaction state.
//!
//! - **Selection** - the year/month/day triple under edit, with wrap rules
//! - **Wheel** - gesture accumulator turning continuous input into steps
//! - **Clipboard** - internal copy buffer for the precise-age string

pub mod clipboard;
mod selection;
mod wheel;

pub use selection::{DateSelection, Field, MONTH_ABBR};
pub use wheel::{
    DRAG_ROW_DELTA, DRAG_THRESHOLD, Step, WHEEL_NOTCH_DELTA, WHEEL_THRESHOLD, WheelState,
};
