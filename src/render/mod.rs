//! Render Module - the two screens and shared drawing helpers.
//!
//! - **Entry** - date picker with three wheel columns
//! - **Results** - live age display (fast-path fields + reactive stats)
//!
//! All drawing goes through queued crossterm commands with one flush
//! per draw, the cheapest way to avoid flicker without keeping a full
//! back buffer for a screen this small.

pub mod entry;
pub mod results;

use unicode_width::UnicodeWidthStr;

pub use entry::EntryScreen;
pub use results::ResultsScreen;

// =============================================================================
// GEOMETRY
// =============================================================================

/// A rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether a cell lies inside the rectangle.
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Column at which `text` starts when centered in `total` cells.
///
/// Uses display width, not char count; the zodiac and label strings
/// are CJK and occupy two cells per character.
pub fn centered_x(total: u16, text: &str) -> u16 {
    let width = text.width() as u16;
    (total.saturating_sub(width)) / 2
}

// =============================================================================
// TESTS
// =============================================================================
