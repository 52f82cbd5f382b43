//! Page-window computation
//!
//! Turns (current page, total pages, buffer size) into the ordered marker
//! row a renderer displays.
//!
//! # Overview
//!
//! Two regimes:
//! - Short: when `total_pages <= 5 + 2 * buffer_size`, every page gets a
//!   button and no elision or boundary markers appear.
//! - Windowed: a window of `buffer_size` pages around the current page,
//!   anchored so it never collapses near either end, with elision markers
//!   (`JumpBackward` / `JumpForward`) for the pages outside it and a plain
//!   first/last page button whenever the window does not already touch
//!   that end.
//!
//! The elision markers carry two quirks kept for layout stability: the
//! backward marker is suppressed on page 3, and the forward marker on page
//! `total_pages - 2`, where either would elide a single page or none.

mod types;

pub use types::{JumpHint, PageMarker};

/// Compute the marker row for a pagination strip
///
/// `current` is not clamped here: an out-of-range page (possible while an
/// external owner is mid-update) simply yields a row with no active button,
/// anchored to the nearest end.
pub fn page_window(current: u32, total_pages: u32, buffer_size: u32) -> Vec<PageMarker> {
    // Signed math throughout: with an out-of-range current the anchor
    // comparisons below go negative.
    let total = i64::from(total_pages.max(1));
    let current = i64::from(current);
    let buffer = i64::from(buffer_size);

    if total <= 5 + buffer * 2 {
        return (1..=total)
            .map(|number| PageMarker::page(number as u32, number == current))
            .collect();
    }

    let mut left = (current - buffer).max(1);
    let mut right = (current + buffer).min(total);
    if current - 1 <= buffer {
        right = 1 + buffer * 2;
    }
    if total - current <= buffer {
        left = total - buffer * 2;
    }

    let show_jump_backward = current - 1 >= buffer * 2 && current != 3;
    let show_jump_forward = total - current >= buffer * 2 && current != total - 2;

    let mut markers = Vec::with_capacity((right - left + 5) as usize);

    if left != 1 {
        markers.push(PageMarker::page(1, false));
    }
    if show_jump_backward {
        markers.push(PageMarker::JumpBackward);
    }
    for number in left..=right {
        let hint = if show_jump_backward && number == left {
            JumpHint::FollowsJumpBackward
        } else if show_jump_forward && number == right {
            JumpHint::PrecedesJumpForward
        } else {
            JumpHint::None
        };
        markers.push(PageMarker::Page {
            number: number as u32,
            active: number == current,
            hint,
        });
    }
    if show_jump_forward {
        markers.push(PageMarker::JumpForward);
    }
    if right != total {
        markers.push(PageMarker::page(total as u32, false));
    }

    markers
}

#[cfg(test)]
mod tests;
