//! Tests for the window module

use super::*;
use test_case::test_case;

fn page(number: u32) -> PageMarker {
    PageMarker::page(number, false)
}

fn active(number: u32) -> PageMarker {
    PageMarker::page(number, true)
}

fn page_after_jump(number: u32) -> PageMarker {
    PageMarker::Page {
        number,
        active: false,
        hint: JumpHint::FollowsJumpBackward,
    }
}

fn page_before_jump(number: u32) -> PageMarker {
    PageMarker::Page {
        number,
        active: false,
        hint: JumpHint::PrecedesJumpForward,
    }
}

// ============================================================================
// Short Regime Tests
// ============================================================================

#[test]
fn test_short_regime_lists_every_page() {
    let markers = page_window(3, 5, 2);
    assert_eq!(
        markers,
        vec![page(1), page(2), active(3), page(4), page(5)]
    );
}

#[test]
fn test_short_regime_upper_bound() {
    // With buffer 2 the short regime holds through 9 pages.
    let markers = page_window(1, 9, 2);
    assert_eq!(markers.len(), 9);
    assert!(markers.iter().all(PageMarker::is_page));
    assert_eq!(markers[0], active(1));
    assert_eq!(markers[8], page(9));
}

#[test]
fn test_short_regime_single_page() {
    assert_eq!(page_window(1, 1, 2), vec![active(1)]);
    // A zero page count is treated as one page.
    assert_eq!(page_window(1, 0, 2), vec![active(1)]);
}

#[test_case(9, 2 => 9 ; "nine pages stay short with buffer two")]
#[test_case(10, 2 => 7 ; "ten pages go windowed with buffer two")]
#[test_case(7, 1 => 7 ; "seven pages stay short with buffer one")]
#[test_case(8, 1 => 5 ; "eight pages go windowed with buffer one")]
fn regime_marker_count(total_pages: u32, buffer: u32) -> usize {
    page_window(1, total_pages, buffer).len()
}

// ============================================================================
// Windowed Regime Tests
// ============================================================================

#[test]
fn test_window_mid_range() {
    let markers = page_window(10, 20, 2);
    assert_eq!(
        markers,
        vec![
            page(1),
            PageMarker::JumpBackward,
            page_after_jump(8),
            page(9),
            active(10),
            page(11),
            page_before_jump(12),
            PageMarker::JumpForward,
            page(20),
        ]
    );
}

#[test]
fn test_window_start_anchored() {
    // Near the start the window is pinned to 1 + 2 * buffer pages.
    let markers = page_window(2, 20, 2);
    assert_eq!(
        markers,
        vec![
            page(1),
            active(2),
            page(3),
            page(4),
            page_before_jump(5),
            PageMarker::JumpForward,
            page(20),
        ]
    );
}

#[test]
fn test_window_first_page() {
    let markers = page_window(1, 20, 2);
    assert_eq!(
        markers,
        vec![
            active(1),
            page(2),
            page(3),
            page(4),
            page_before_jump(5),
            PageMarker::JumpForward,
            page(20),
        ]
    );
}

#[test]
fn test_window_end_anchored() {
    let markers = page_window(19, 20, 2);
    assert_eq!(
        markers,
        vec![
            page(1),
            PageMarker::JumpBackward,
            page_after_jump(16),
            page(17),
            page(18),
            active(19),
            page(20),
        ]
    );
}

#[test]
fn test_window_last_page() {
    let markers = page_window(20, 20, 2);
    assert_eq!(
        markers,
        vec![
            page(1),
            PageMarker::JumpBackward,
            page_after_jump(16),
            page(17),
            page(18),
            page(19),
            active(20),
        ]
    );
}

#[test]
fn test_window_boundary_without_backward_jump() {
    // Page 4 of 10: the first page appears as a plain boundary button while
    // the backward elision threshold is not yet met.
    let markers = page_window(4, 10, 2);
    assert_eq!(
        markers,
        vec![
            page(1),
            page(2),
            page(3),
            active(4),
            page(5),
            page_before_jump(6),
            PageMarker::JumpForward,
            page(10),
        ]
    );
}

#[test]
fn test_window_both_jumps() {
    let markers = page_window(5, 10, 2);
    assert_eq!(
        markers,
        vec![
            page(1),
            PageMarker::JumpBackward,
            page_after_jump(3),
            page(4),
            active(5),
            page(6),
            page_before_jump(7),
            PageMarker::JumpForward,
            page(10),
        ]
    );
}

// ============================================================================
// Jump Suppression Tests
// ============================================================================

#[test]
fn test_backward_jump_suppressed_on_page_three() {
    // With buffer 1 the backward elision threshold is met on page 3, but the
    // marker would elide nothing between the boundary and the window.
    let markers = page_window(3, 10, 1);
    assert_eq!(
        markers,
        vec![
            page(1),
            page(2),
            active(3),
            page_before_jump(4),
            PageMarker::JumpForward,
            page(10),
        ]
    );
}

#[test]
fn test_forward_jump_suppressed_near_end() {
    let markers = page_window(8, 10, 1);
    assert_eq!(
        markers,
        vec![
            page(1),
            PageMarker::JumpBackward,
            page_after_jump(7),
            active(8),
            page(9),
            page(10),
        ]
    );
}

#[test]
fn test_page_three_shows_backward_jump_with_larger_buffer() {
    // The suppression is specific to the elide-nothing geometry; with
    // buffer 2 page 3 never reaches the backward threshold in the first
    // place, and the start anchor covers it.
    let markers = page_window(3, 12, 2);
    assert_eq!(
        markers,
        vec![
            page(1),
            page(2),
            active(3),
            page(4),
            page_before_jump(5),
            PageMarker::JumpForward,
            page(12),
        ]
    );
}

// ============================================================================
// Out-of-Range Current Tests
// ============================================================================

#[test]
fn test_out_of_range_current_short_regime() {
    let markers = page_window(99, 3, 2);
    assert_eq!(markers, vec![page(1), page(2), page(3)]);
    assert!(!markers.iter().any(PageMarker::is_active));
}

#[test]
fn test_out_of_range_current_anchors_to_end() {
    // A mirrored current past the end (possible while an external owner is
    // mid-update) renders an end-anchored row with no active button.
    let markers = page_window(99, 20, 2);
    assert_eq!(
        markers,
        vec![
            page(1),
            PageMarker::JumpBackward,
            page_after_jump(16),
            page(17),
            page(18),
            page(19),
            page(20),
        ]
    );
}

#[test]
fn test_zero_current_anchors_to_start() {
    let markers = page_window(0, 20, 2);
    assert_eq!(
        markers,
        vec![
            page(1),
            page(2),
            page(3),
            page(4),
            page_before_jump(5),
            PageMarker::JumpForward,
            page(20),
        ]
    );
}

// ============================================================================
// Sweep Invariants
// ============================================================================

#[test]
fn test_full_sweep_invariants() {
    for current in 1..=20 {
        let markers = page_window(current, 20, 2);

        let actives: Vec<u32> = markers
            .iter()
            .filter(|m| m.is_active())
            .filter_map(PageMarker::number)
            .collect();
        assert_eq!(actives, vec![current], "current {current}");

        let numbers: Vec<u32> = markers.iter().filter_map(PageMarker::number).collect();
        assert!(
            numbers.windows(2).all(|pair| pair[0] < pair[1]),
            "page numbers out of order at current {current}: {numbers:?}"
        );
        assert_eq!(numbers.first(), Some(&1), "current {current}");
        assert_eq!(numbers.last(), Some(&20), "current {current}");

        let backward = markers
            .iter()
            .filter(|m| matches!(m, PageMarker::JumpBackward))
            .count();
        let forward = markers
            .iter()
            .filter(|m| matches!(m, PageMarker::JumpForward))
            .count();
        assert!(backward <= 1 && forward <= 1, "current {current}");
    }
}

// ============================================================================
// Marker Helper Tests
// ============================================================================

#[test]
fn test_marker_helpers() {
    let button = PageMarker::page(7, true);
    assert!(button.is_page());
    assert!(!button.is_jump());
    assert!(button.is_active());
    assert_eq!(button.number(), Some(7));

    assert!(PageMarker::JumpBackward.is_jump());
    assert!(!PageMarker::JumpBackward.is_page());
    assert_eq!(PageMarker::JumpForward.number(), None);
    assert!(!PageMarker::JumpForward.is_active());
}

#[test]
fn test_marker_serialization() {
    let json = serde_json::to_value(PageMarker::page(3, true)).unwrap();
    assert_eq!(json["type"], "page");
    assert_eq!(json["number"], 3);
    assert_eq!(json["active"], true);
    assert_eq!(json["hint"], "none");

    let json = serde_json::to_value(PageMarker::JumpForward).unwrap();
    assert_eq!(json["type"], "jump_forward");
}
