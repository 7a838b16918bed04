//! Pipeline Module - frame scheduling and terminal lifecycle.
//!
//! - **FrameLoop** - cancellable repeating frame task
//! - **Terminal** - raw-mode/alternate-screen session guard

mod frame_loop;
mod terminal;

pub use frame_loop::FrameLoop;
pub use terminal::{TerminalSession, terminal_size};
