//! Clipboard Module - precise-age copy buffer.
//!
//! Holds the text the user copies from the results screen (the
//! `years.digits` concatenation). Backed by an internal thread-local
//! buffer with no external dependencies; everything runs on the UI
//! thread, so no locking is needed.

use std::cell::RefCell;

thread_local! {
    /// Internal clipboard buffer.
    static CLIPBOARD_BUFFER: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Copy text to the clipboard buffer.
///
/// Empty strings are ignored (the buffer keeps its previous content).
pub fn copy(text: &str) {
    if text.is_empty() {
        return;
    }

    CLIPBOARD_BUFFER.with(|buf| {
        *buf.borrow_mut() = Some(text.to_string());
    });
}

/// Read the most recently copied text, if any. Non-destructive.
pub fn paste() -> Option<String> {
    CLIPBOARD_BUFFER.with(|buf| buf.borrow().clone())
}

/// Clear the clipboard buffer.
pub fn clear() {
    CLIPBOARD_BUFFER.with(|buf| {
        *buf.borrow_mut() = None;
    });
}

/// Whether the buffer currently holds anything.
pub fn has_content() -> bool {
    CLIPBOARD_BUFFER.with(|buf| buf.borrow().is_some())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::age::{BirthInstant, calculate, format_precise};

    fn setup() {
        clear();
    }

    #[test]
    fn test_copy_paste() {
        setup();

        assert!(paste().is_none());
        assert!(!has_content());

        copy("25.123456789012");
        assert_eq!(paste(), Some("25.123456789012".to_string()));
        assert!(has_content());

        // Paste again, non-destructive.
        assert_eq!(paste(), Some("25.123456789012".to_string()));
    }

    #[test]
    fn test_copy_overwrites() {
        setup();

        copy("26.000000000000");
        copy("26.000000000001");
        assert_eq!(paste(), Some("26.000000000001".to_string()));
    }

    #[test]
    fn test_copy_empty_ignored() {
        setup();

        copy("26.999999999999");
        copy("");
        assert_eq!(paste(), Some("26.999999999999".to_string()));
    }

    #[test]
    fn test_clear() {
        setup();

        copy("1.234");
        clear();
        assert!(!has_content());
        assert!(paste().is_none());
    }

    #[test]
    fn test_round_trip_of_precise_age() {
        setup();

        let birth = BirthInstant::from_ymd(1998, 5, 15);
        let now = chrono::NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let snapshot = calculate(&birth, now);

        copy(&format_precise(snapshot.years, &snapshot.fractional));

        let pasted = paste().unwrap();
        assert!(pasted.starts_with("26."));
        assert_eq!(pasted.len(), "26.".len() + 12);
    }
}
