//! Results screen - the live precise-age display.
//!
//! Two update paths, split on purpose:
//!
//! - **Fast path** - the integer years, the three 4-digit fractional
//!   groups, and the progress bar change every frame. They are written
//!   straight to their cells each tick, bypassing any state layer, so
//!   a 60 Hz update costs a handful of cursor moves and one flush.
//! - **State-driven** - zodiac, next-birthday countdown, elapsed
//!   seconds/days, and the progress percentage change once a second at
//!   most. They live in signals; a render effect redraws the stats
//!   block only when one of them actually changed.
//!
//! Every value drawn in one frame derives from a single sampled
//! instant, so the years and fractional digits can never tear.
//!
//! The frame loop is cancelled before the screen is dropped (and again
//! by `Drop` as a backstop), so no write can land after teardown.

use std::cell::RefCell;
use std::io::{self, Write, stdout};
use std::rc::Rc;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{Clear, ClearType};
use spark_signals::{Signal, effect, signal};

use crate::age::{
    AgeSnapshot, BirthInstant, calculate, current_instant, format_precise, life_progress,
};
use crate::pipeline::FrameLoop;
use crate::state::clipboard;

use super::centered_x;

// =============================================================================
// LAYOUT
// =============================================================================

const TITLE: &str = "精确结果";
const STATS_HEADING: &str = "实时统计";
const HINT: &str = "c 复制精确年龄 · Esc 返回 · q 退出";

const LABEL_ZODIAC: &str = "星座";
const LABEL_NEXT: &str = "下次生日";
const LABEL_SECONDS: &str = "生存秒数";
const LABEL_DAYS: &str = "生存天数";
const LABEL_PROGRESS: &str = "生命进度";

/// Fixed display width of the integer-years field. Years only grow,
/// and right-alignment inside the field keeps old digits overwritten.
const YEARS_FIELD: usize = 4;

/// Cell positions of everything the screen rewrites after the chrome
/// is drawn. Recomputed on resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultsLayout {
    /// Left edge of the right-aligned years field.
    years_pos: (u16, u16),
    /// The decimal point between years and fractional groups.
    dot_pos: (u16, u16),
    /// Left edges of the three 4-digit groups.
    group_pos: [(u16, u16); 3],
    /// Column where stat values start (labels end before it).
    value_x: u16,
    label_x: u16,
    heading_y: u16,
    zodiac_y: u16,
    next_y: u16,
    seconds_y: u16,
    days_y: u16,
    progress_y: u16,
    hint_y: u16,
    bar_row: u16,
    bar_width: u16,
}

impl ResultsLayout {
    /// Lay the screen out for a terminal size.
    pub fn compute(size: (u16, u16)) -> Self {
        let (w, h) = size;
        let center = h / 2;

        // "  25 . 1234 5678 9012" - years, dot, three groups.
        let line_width = YEARS_FIELD as u16 + 3 + 3 * 5;
        let x0 = w.saturating_sub(line_width) / 2;
        let age_y = center.saturating_sub(6);
        let dot_x = x0 + YEARS_FIELD as u16 + 1;

        let stats_top = age_y + 3;
        let label_x = w.saturating_sub(24) / 2;

        Self {
            years_pos: (x0, age_y),
            dot_pos: (dot_x, age_y),
            group_pos: [
                (dot_x + 2, age_y),
                (dot_x + 7, age_y),
                (dot_x + 12, age_y),
            ],
            label_x,
            value_x: label_x + 12,
            heading_y: stats_top,
            zodiac_y: stats_top + 2,
            next_y: stats_top + 3,
            seconds_y: stats_top + 4,
            days_y: stats_top + 5,
            progress_y: stats_top + 6,
            hint_y: h.saturating_sub(3),
            bar_row: h.saturating_sub(1),
            bar_width: w,
        }
    }
}

// =============================================================================
// DRAWING
// =============================================================================

/// Draw the parts that never change: title, decimal point, stat
/// labels, key hints.
fn draw_chrome(out: &mut impl Write, layout: &ResultsLayout, width: u16) -> io::Result<()> {
    queue!(
        out,
        Clear(ClearType::All),
        MoveTo(centered_x(width, TITLE), 1),
        SetAttribute(Attribute::Bold),
        Print(TITLE),
        SetAttribute(Attribute::Reset),
        MoveTo(layout.dot_pos.0, layout.dot_pos.1),
        SetAttribute(Attribute::Bold),
        Print("."),
        SetAttribute(Attribute::Reset),
        MoveTo(layout.label_x, layout.heading_y),
        SetAttribute(Attribute::Dim),
        Print(STATS_HEADING),
        SetAttribute(Attribute::Reset),
    )?;

    let labels = [
        (LABEL_ZODIAC, layout.zodiac_y),
        (LABEL_NEXT, layout.next_y),
        (LABEL_SECONDS, layout.seconds_y),
        (LABEL_DAYS, layout.days_y),
        (LABEL_PROGRESS, layout.progress_y),
    ];
    for (label, y) in labels {
        queue!(
            out,
            MoveTo(layout.label_x, y),
            SetAttribute(Attribute::Dim),
            Print(label),
            SetAttribute(Attribute::Reset),
        )?;
    }

    queue!(
        out,
        MoveTo(centered_x(width, HINT), layout.hint_y),
        SetAttribute(Attribute::Dim),
        Print(HINT),
        SetAttribute(Attribute::Reset),
    )?;
    out.flush()
}

/// Write the per-frame fields: years, the three fractional groups, and
/// the progress bar. One flush; all values from one snapshot.
fn write_fast_fields(
    out: &mut impl Write,
    layout: &ResultsLayout,
    snapshot: &AgeSnapshot,
) -> io::Result<()> {
    queue!(
        out,
        MoveTo(layout.years_pos.0, layout.years_pos.1),
        SetAttribute(Attribute::Bold),
        Print(format!("{:>width$}", snapshot.years, width = YEARS_FIELD)),
        SetAttribute(Attribute::Reset),
    )?;

    // Groups fade left to right: bold, normal, dim.
    let attrs = [Attribute::Bold, Attribute::Reset, Attribute::Dim];
    for (i, (x, y)) in layout.group_pos.iter().enumerate() {
        queue!(
            out,
            MoveTo(*x, *y),
            SetAttribute(attrs[i]),
            Print(snapshot.fractional.group(i)),
            SetAttribute(Attribute::Reset),
        )?;
    }

    let filled = progress_cells(layout.bar_width, snapshot.elapsed_seconds);
    let empty = (layout.bar_width - filled) as usize;
    queue!(
        out,
        MoveTo(0, layout.bar_row),
        Print("█".repeat(filled as usize)),
        SetAttribute(Attribute::Dim),
        Print("░".repeat(empty)),
        SetAttribute(Attribute::Reset),
    )?;

    out.flush()
}

/// Filled width of the progress bar for an elapsed-seconds value.
fn progress_cells(bar_width: u16, elapsed_seconds: i64) -> u16 {
    let ratio = life_progress(elapsed_seconds) / 100.0;
    ((bar_width as f64 * ratio).round() as u16).min(bar_width)
}

/// Redraw the slow-changing stat values. Called from the render effect
/// whenever one of the signals changes, and directly after a resize.
fn draw_stats(
    out: &mut impl Write,
    layout: &ResultsLayout,
    zodiac: &str,
    next_days: i64,
    seconds: i64,
    days: i64,
    progress_tenths: i64,
) -> io::Result<()> {
    // Trailing pad clears remnants of longer previous values.
    let rows = [
        (layout.zodiac_y, zodiac.to_string()),
        (layout.next_y, format!("{} 天后", next_days)),
        (layout.seconds_y, format!("{:.1}M+", seconds as f64 / 1_000_000.0)),
        (layout.days_y, format!("{} 天", days)),
        (
            layout.progress_y,
            format!("{}.{}%", progress_tenths / 10, progress_tenths % 10),
        ),
    ];

    for (y, value) in rows {
        queue!(
            out,
            MoveTo(layout.value_x, y),
            Print(format!("{:<16}", value)),
        )?;
    }
    out.flush()
}

// =============================================================================
// RESULTS SCREEN
// =============================================================================

/// The live results view. Owns the birth instant for its lifetime.
pub struct ResultsScreen {
    birth: BirthInstant,
    zodiac: &'static str,
    layout: Rc<RefCell<ResultsLayout>>,
    frame_loop: FrameLoop,
    stop_effect: Option<Box<dyn FnOnce()>>,
    seconds: Signal<i64>,
    days: Signal<i64>,
    next_days: Signal<i64>,
    progress_tenths: Signal<i64>,
}

impl ResultsScreen {
    /// Build the screen, draw its chrome, and start the frame loop.
    ///
    /// The loop does not run until the host starts ticking it, and
    /// never again after [`teardown`](Self::teardown).
    pub fn new(birth: BirthInstant, size: (u16, u16)) -> io::Result<Self> {
        let zodiac = birth.zodiac();
        let layout = Rc::new(RefCell::new(ResultsLayout::compute(size)));

        draw_chrome(&mut stdout(), &layout.borrow(), size.0)?;

        // Slow-changing fields as signals. Seeded off one sample so
        // the first effect run paints real values.
        let first = calculate(&birth, current_instant());
        let seconds = signal(first.elapsed_seconds);
        let days = signal(first.elapsed_days);
        let next_days = signal(first.days_to_next_anniversary);
        let progress_tenths = signal((life_progress(first.elapsed_seconds) * 10.0) as i64);

        // Render effect: reads every signal, so any change redraws the
        // stats block. Runs once immediately.
        let stop_effect: Box<dyn FnOnce()> = {
            let layout = layout.clone();
            let seconds = seconds.clone();
            let days = days.clone();
            let next_days = next_days.clone();
            let progress_tenths = progress_tenths.clone();
            Box::new(effect(move || {
                let _ = draw_stats(
                    &mut stdout(),
                    &layout.borrow(),
                    zodiac,
                    next_days.get(),
                    seconds.get(),
                    days.get(),
                    progress_tenths.get(),
                );
            }))
        };

        // Frame task: sample once, compute once, fan out. Signals are
        // only set on an actual change so the effect never re-runs for
        // identical values.
        let frame_loop = {
            let layout = layout.clone();
            let seconds = seconds.clone();
            let days = days.clone();
            let next_days = next_days.clone();
            let progress_tenths = progress_tenths.clone();
            FrameLoop::start(move || {
                let snapshot = calculate(&birth, current_instant());
                let _ = write_fast_fields(&mut stdout(), &layout.borrow(), &snapshot);

                if seconds.get() != snapshot.elapsed_seconds {
                    seconds.set(snapshot.elapsed_seconds);
                }
                if days.get() != snapshot.elapsed_days {
                    days.set(snapshot.elapsed_days);
                }
                if next_days.get() != snapshot.days_to_next_anniversary {
                    next_days.set(snapshot.days_to_next_anniversary);
                }
                let tenths = (life_progress(snapshot.elapsed_seconds) * 10.0) as i64;
                if progress_tenths.get() != tenths {
                    progress_tenths.set(tenths);
                }
            })
        };

        Ok(Self {
            birth,
            zodiac,
            layout,
            frame_loop,
            stop_effect: Some(stop_effect),
            seconds,
            days,
            next_days,
            progress_tenths,
        })
    }

    /// Run one display frame.
    pub fn tick(&mut self) {
        self.frame_loop.tick();
    }

    /// Recompute the layout and repaint everything for a new size.
    pub fn resize(&mut self, size: (u16, u16)) -> io::Result<()> {
        *self.layout.borrow_mut() = ResultsLayout::compute(size);
        let layout = self.layout.borrow();
        let mut out = stdout();
        draw_chrome(&mut out, &layout, size.0)?;
        draw_stats(
            &mut out,
            &layout,
            self.zodiac,
            self.next_days.get(),
            self.seconds.get(),
            self.days.get(),
            self.progress_tenths.get(),
        )
    }

    /// Copy the current precise age to the clipboard buffer and return
    /// the copied string.
    pub fn copy_precise_age(&self) -> String {
        let snapshot = calculate(&self.birth, current_instant());
        let text = format_precise(snapshot.years, &snapshot.fractional);
        clipboard::copy(&text);
        text
    }

    /// Stop the frame loop and the render effect. After this returns
    /// no further writes can originate from this screen.
    pub fn teardown(&mut self) {
        self.frame_loop.cancel();
        if let Some(stop) = self.stop_effect.take() {
            stop();
        }
    }
}

impl Drop for ResultsScreen {
    fn drop(&mut self) {
        self.teardown();
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const SIZE: (u16, u16) = (80, 24);

    fn snapshot_at(y: i32, m: u32, d: u32) -> AgeSnapshot {
        let birth = BirthInstant::from_ymd(1998, 5, 15);
        let now = NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        calculate(&birth, now)
    }

    #[test]
    fn test_layout_groups_are_spaced_after_dot() {
        let layout = ResultsLayout::compute(SIZE);

        let dot = layout.dot_pos.0;
        assert_eq!(layout.group_pos[0].0, dot + 2);
        assert_eq!(layout.group_pos[1].0, dot + 7);
        assert_eq!(layout.group_pos[2].0, dot + 12);

        // All on one row.
        assert!(layout.group_pos.iter().all(|(_, y)| *y == layout.dot_pos.1));
    }

    #[test]
    fn test_layout_bar_spans_bottom_row() {
        let layout = ResultsLayout::compute(SIZE);
        assert_eq!(layout.bar_row, 23);
        assert_eq!(layout.bar_width, 80);
    }

    #[test]
    fn test_chrome_contains_labels() {
        let layout = ResultsLayout::compute(SIZE);
        let mut sink = Vec::new();
        draw_chrome(&mut sink, &layout, SIZE.0).unwrap();

        let output = String::from_utf8_lossy(&sink);
        assert!(output.contains("精确结果"));
        assert!(output.contains("星座"));
        assert!(output.contains("下次生日"));
        assert!(output.contains("生命进度"));
    }

    #[test]
    fn test_fast_fields_write_all_groups() {
        let layout = ResultsLayout::compute(SIZE);
        let snapshot = snapshot_at(2024, 6, 15);
        let mut sink = Vec::new();
        write_fast_fields(&mut sink, &layout, &snapshot).unwrap();

        let output = String::from_utf8_lossy(&sink);
        assert!(output.contains("  26"));
        assert!(output.contains(snapshot.fractional.group(0)));
        assert!(output.contains(snapshot.fractional.group(1)));
        assert!(output.contains(snapshot.fractional.group(2)));
    }

    #[test]
    fn test_progress_cells_bounds() {
        assert_eq!(progress_cells(80, 0), 0);
        assert_eq!(progress_cells(80, i64::MAX / 2), 80);

        // 40 years of an 80-year expectancy fills half the bar.
        let forty_years = (40.0 * 365.25 * 86_400.0) as i64;
        assert_eq!(progress_cells(80, forty_years), 40);
    }

    #[test]
    fn test_draw_stats_formats_values() {
        let layout = ResultsLayout::compute(SIZE);
        let mut sink = Vec::new();
        draw_stats(&mut sink, &layout, "双子座", 123, 822_528_000, 9497, 325).unwrap();

        let output = String::from_utf8_lossy(&sink);
        assert!(output.contains("双子座"));
        assert!(output.contains("123 天后"));
        assert!(output.contains("822.5M+"));
        assert!(output.contains("9497 天"));
        assert!(output.contains("32.5%"));
    }

    #[test]
    fn test_copied_string_concatenates_displayed_groups() {
        let snapshot = snapshot_at(2024, 6, 15);
        let expected = format!(
            "{}.{}{}{}",
            snapshot.years,
            snapshot.fractional.group(0),
            snapshot.fractional.group(1),
            snapshot.fractional.group(2)
        );
        assert_eq!(format_precise(snapshot.years, &snapshot.fractional), expected);
    }
}
