//! Entry screen - birth date picker with three wheel columns.
//!
//! Each column (year, month, day) shows the previous value dimmed, the
//! current value bold, and the next value dimmed. Wheel scrolling,
//! press-drags, and clicks on the neighbor rows all step the column;
//! gesture thresholding lives in [`WheelState`], wrap rules in
//! [`DateSelection`]. The screen redraws fully after every step, which
//! is cheap because it only happens on user input.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{Clear, ClearType};

use crate::input::{MouseAction, MouseInput};
use crate::state::{DateSelection, Field, Step, WheelState};

use super::{Rect, centered_x};

// =============================================================================
// LAYOUT CONSTANTS
// =============================================================================

/// Width of one wheel column in cells.
const COLUMN_WIDTH: u16 = 10;

/// Gap between wheel columns.
const COLUMN_GAP: u16 = 4;

/// Rows inside a column: label, blank, prev, blank, current, blank, next.
const COLUMN_HEIGHT: u16 = 7;

const TITLE: &str = "岁月时钟";
const SUBTITLE: &str = "探索精确到小数点后 12 位的年龄";
const PROMPT: &str = "选择出生日期";
const HINT: &str = "滚轮/拖拽调整 · Enter 开始计算 · q 退出";

const FIELDS: [Field; 3] = [Field::Year, Field::Month, Field::Day];
const LABELS: [&str; 3] = ["年", "月", "日"];

// =============================================================================
// WHEEL COLUMN
// =============================================================================

/// One column's hit region and the rows that act as click targets.
#[derive(Debug, Clone, Copy, Default)]
struct WheelColumn {
    rect: Rect,
    prev_row: u16,
    next_row: u16,
}

// =============================================================================
// ENTRY SCREEN
// =============================================================================

/// The date-picker screen. Owns the selection until submission.
pub struct EntryScreen {
    pub selection: DateSelection,
    wheels: [WheelState; 3],
    columns: [WheelColumn; 3],
    /// Column index a drag started in, while the button is held.
    active_drag: Option<usize>,
    /// Row of the initial press, for click detection on release.
    press_row: Option<u16>,
}

impl EntryScreen {
    pub fn new() -> Self {
        Self {
            selection: DateSelection::default(),
            wheels: [WheelState::new(), WheelState::new(), WheelState::new()],
            columns: [WheelColumn::default(); 3],
            active_drag: None,
            press_row: None,
        }
    }

    /// Full redraw. Recomputes column hit regions for the given size.
    pub fn draw(&mut self, out: &mut impl Write, size: (u16, u16)) -> io::Result<()> {
        let (w, h) = size;
        let top = h / 2;
        let picker_top = top.saturating_sub(4);

        queue!(out, Clear(ClearType::All))?;

        queue!(
            out,
            MoveTo(centered_x(w, TITLE), picker_top.saturating_sub(5)),
            SetAttribute(Attribute::Bold),
            Print(TITLE),
            SetAttribute(Attribute::Reset),
            MoveTo(centered_x(w, SUBTITLE), picker_top.saturating_sub(3)),
            SetAttribute(Attribute::Dim),
            Print(SUBTITLE),
            SetAttribute(Attribute::Reset),
            MoveTo(centered_x(w, PROMPT), picker_top.saturating_sub(1)),
            SetAttribute(Attribute::Dim),
            Print(PROMPT),
            SetAttribute(Attribute::Reset),
        )?;

        let total_width = COLUMN_WIDTH * 3 + COLUMN_GAP * 2;
        let start_x = w.saturating_sub(total_width) / 2;

        for (i, field) in FIELDS.iter().enumerate() {
            let x = start_x + (COLUMN_WIDTH + COLUMN_GAP) * i as u16;
            self.columns[i] = WheelColumn {
                rect: Rect::new(x, picker_top, COLUMN_WIDTH, COLUMN_HEIGHT),
                prev_row: picker_top + 2,
                next_row: picker_top + 6,
            };
            self.draw_column(out, i, *field)?;
        }

        queue!(
            out,
            MoveTo(centered_x(w, HINT), h.saturating_sub(2)),
            SetAttribute(Attribute::Dim),
            Print(HINT),
            SetAttribute(Attribute::Reset),
        )?;

        out.flush()
    }

    fn draw_column(&self, out: &mut impl Write, index: usize, field: Field) -> io::Result<()> {
        let column = &self.columns[index];
        let (prev, current, next) = self.selection.wheel_values(field);
        let center = |text: &str| column.rect.x + centered_x(COLUMN_WIDTH, text);

        queue!(
            out,
            MoveTo(center(LABELS[index]), column.rect.y),
            SetAttribute(Attribute::Dim),
            Print(LABELS[index]),
            SetAttribute(Attribute::Reset),
            MoveTo(column.rect.x, column.prev_row),
            Print(" ".repeat(COLUMN_WIDTH as usize)),
            MoveTo(center(&prev), column.prev_row),
            SetAttribute(Attribute::Dim),
            Print(&prev),
            SetAttribute(Attribute::Reset),
            MoveTo(column.rect.x, column.rect.y + 4),
            Print(" ".repeat(COLUMN_WIDTH as usize)),
            MoveTo(center(&current), column.rect.y + 4),
            SetAttribute(Attribute::Bold),
            Print(&current),
            SetAttribute(Attribute::Reset),
            MoveTo(column.rect.x, column.next_row),
            Print(" ".repeat(COLUMN_WIDTH as usize)),
            MoveTo(center(&next), column.next_row),
            SetAttribute(Attribute::Dim),
            Print(&next),
            SetAttribute(Attribute::Reset),
        )
    }

    /// Route a mouse event to the column under it.
    ///
    /// Returns true when a step was applied and the screen needs a
    /// redraw.
    pub fn handle_mouse(&mut self, mouse: &MouseInput) -> bool {
        match mouse.action {
            MouseAction::ScrollDown | MouseAction::ScrollUp => {
                let Some(index) = self.column_at(mouse.x, mouse.y) else {
                    return false;
                };
                let step = if mouse.action == MouseAction::ScrollDown {
                    self.wheels[index].wheel_notch_down()
                } else {
                    self.wheels[index].wheel_notch_up()
                };
                self.apply(index, step)
            }
            MouseAction::Down => {
                if let Some(index) = self.column_at(mouse.x, mouse.y) {
                    self.active_drag = Some(index);
                    self.press_row = Some(mouse.y);
                    self.wheels[index].begin_drag(mouse.y);
                }
                false
            }
            MouseAction::Drag => {
                // Drags stay captive to the column they started in,
                // even when the pointer leaves its rectangle.
                let Some(index) = self.active_drag else {
                    return false;
                };
                let step = self.wheels[index].feed_drag(mouse.y);
                self.apply(index, step)
            }
            MouseAction::Up => {
                let Some(index) = self.active_drag.take() else {
                    return false;
                };
                let dragged = self.wheels[index].end_drag() > 0;
                let press_row = self.press_row.take();

                if dragged {
                    return false;
                }
                // A motionless press-release is a click: the neighbor
                // rows act as single-step buttons.
                let column = &self.columns[index];
                let step = match press_row {
                    Some(row) if row == column.prev_row => Some(Step::Retreat),
                    Some(row) if row == column.next_row => Some(Step::Advance),
                    _ => None,
                };
                self.apply(index, step)
            }
            MouseAction::Other => false,
        }
    }

    fn apply(&mut self, index: usize, step: Option<Step>) -> bool {
        match step {
            Some(step) => {
                self.selection.apply(FIELDS[index], step);
                true
            }
            None => false,
        }
    }

    fn column_at(&self, x: u16, y: u16) -> Option<usize> {
        self.columns.iter().position(|c| c.rect.contains(x, y))
    }
}

impl Default for EntryScreen {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: (u16, u16) = (80, 24);

    fn drawn_screen() -> EntryScreen {
        let mut screen = EntryScreen::new();
        let mut sink = Vec::new();
        screen.draw(&mut sink, SIZE).unwrap();
        screen
    }

    fn mouse(action: MouseAction, x: u16, y: u16) -> MouseInput {
        MouseInput { action, x, y }
    }

    #[test]
    fn test_draw_emits_chrome_and_values() {
        let mut screen = EntryScreen::new();
        let mut sink = Vec::new();
        screen.draw(&mut sink, SIZE).unwrap();

        let output = String::from_utf8_lossy(&sink);
        assert!(output.contains("岁月时钟"));
        assert!(output.contains("1998"));
        assert!(output.contains("6月"));
        assert!(output.contains("15"));
    }

    #[test]
    fn test_scroll_down_over_year_column_advances() {
        let mut screen = drawn_screen();
        let rect = screen.columns[0].rect;

        let changed = screen.handle_mouse(&mouse(MouseAction::ScrollDown, rect.x, rect.y + 4));
        assert!(changed);
        assert_eq!(screen.selection.year, 1999);
    }

    #[test]
    fn test_scroll_up_over_day_column_retreats() {
        let mut screen = drawn_screen();
        let rect = screen.columns[2].rect;

        let changed = screen.handle_mouse(&mouse(MouseAction::ScrollUp, rect.x + 1, rect.y + 4));
        assert!(changed);
        assert_eq!(screen.selection.day, 14);
    }

    #[test]
    fn test_scroll_outside_columns_is_ignored() {
        let mut screen = drawn_screen();
        let before = screen.selection;

        let changed = screen.handle_mouse(&mouse(MouseAction::ScrollDown, 0, 0));
        assert!(!changed);
        assert_eq!(screen.selection, before);
    }

    #[test]
    fn test_drag_steps_continuously() {
        let mut screen = drawn_screen();
        let rect = screen.columns[1].rect;
        let x = rect.x + 2;
        let y = rect.y + 4;

        assert!(!screen.handle_mouse(&mouse(MouseAction::Down, x, y)));
        // Upward drag: one step per row, re-anchored each time.
        assert!(screen.handle_mouse(&mouse(MouseAction::Drag, x, y - 1)));
        assert!(screen.handle_mouse(&mouse(MouseAction::Drag, x, y - 2)));
        assert!(!screen.handle_mouse(&mouse(MouseAction::Up, x, y - 2)));

        // June stepped forward twice -> August (month0 7).
        assert_eq!(screen.selection.month, 7);
    }

    #[test]
    fn test_drag_leaving_column_stays_captive() {
        let mut screen = drawn_screen();
        let rect = screen.columns[0].rect;

        screen.handle_mouse(&mouse(MouseAction::Down, rect.x, rect.y + 4));
        // Far outside the rect, still routed to the year wheel.
        let changed = screen.handle_mouse(&mouse(MouseAction::Drag, 0, rect.y + 5));
        assert!(changed);
        assert_eq!(screen.selection.year, 1997);
    }

    #[test]
    fn test_click_on_neighbor_rows_steps_once() {
        let mut screen = drawn_screen();
        let column = screen.columns[2];
        let x = column.rect.x + 2;

        // Click the next-value row: advance.
        screen.handle_mouse(&mouse(MouseAction::Down, x, column.next_row));
        assert!(screen.handle_mouse(&mouse(MouseAction::Up, x, column.next_row)));
        assert_eq!(screen.selection.day, 16);

        // Click the prev-value row: retreat.
        screen.handle_mouse(&mouse(MouseAction::Down, x, column.prev_row));
        assert!(screen.handle_mouse(&mouse(MouseAction::Up, x, column.prev_row)));
        assert_eq!(screen.selection.day, 15);
    }

    #[test]
    fn test_click_after_drag_does_not_double_step() {
        let mut screen = drawn_screen();
        let column = screen.columns[2];
        let x = column.rect.x;

        screen.handle_mouse(&mouse(MouseAction::Down, x, column.next_row));
        screen.handle_mouse(&mouse(MouseAction::Drag, x, column.next_row - 1));
        // Release on a click row after a real drag: no extra step.
        assert!(!screen.handle_mouse(&mouse(MouseAction::Up, x, column.next_row)));
        assert_eq!(screen.selection.day, 16); // from the drag only
    }
}
