//! Pure geometry evaluation for the stickiness decision.
//!
//! Nothing in this module touches the surface; the controller gathers the
//! measurements and the functions here only compute. Stickiness is a pure
//! function of the current measurements.

use crate::types::{Offset, ScrollPosition, Size};

/// Measurements sampled at the start of a toggle tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryInput {
    /// Whether the window itself is the configured scrollable area.
    pub window_scrolling: bool,
    /// Effective top offset: the configured fixed offset in window mode,
    /// otherwise the scrollable area's top plus the literal fixed offset.
    pub top_offset: f64,
    /// Scroll position of the configured scrollable area.
    pub area_scroll: ScrollPosition,
    /// Document-space offset of the table.
    pub table_offset: Offset,
    /// Rendered height of the table.
    pub table_height: f64,
}

/// Result of one geometry evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub top_offset: f64,
    pub scroll_top: f64,
    pub scroll_left: f64,
    /// Whether the header should be in fixed positioning right now.
    pub sticky: bool,
}

/// Decide stickiness for the sampled measurements.
///
/// `header_height` is invoked only when the table top has been scrolled
/// past; the caller supplies the (possibly cached) header height lazily so
/// no measurement happens on ticks that cannot be sticky.
pub fn evaluate(input: &GeometryInput, header_height: impl FnOnce() -> f64) -> Geometry {
    let scroll_top = input.area_scroll.top + input.top_offset;
    let scroll_left = input.area_scroll.left;

    let scrolled_past_top = if input.window_scrolling {
        scroll_top > input.table_offset.top
    } else {
        input.top_offset > input.table_offset.top
    };

    let sticky = scrolled_past_top && {
        let header_height = header_height();
        let position = if input.window_scrolling {
            scroll_top
        } else {
            0.0
        };
        let bottom_limit = input.table_offset.top + input.table_height
            - header_height
            - if input.window_scrolling {
                0.0
            } else {
                input.top_offset
            };
        position < bottom_limit
    };

    Geometry {
        top_offset: input.top_offset,
        scroll_top,
        scroll_left,
        sticky,
    }
}

/// Whether a window scroll position is inside valid document bounds.
///
/// Over-scroll (rubber-banding) reports positions outside these bounds;
/// position refreshes are skipped there to avoid jitter.
pub fn within_document_bounds(scroll: ScrollPosition, viewport: Size, document: Size) -> bool {
    scroll.top >= 0.0
        && scroll.top + viewport.height <= document.height
        && scroll.left >= 0.0
        && scroll.left + viewport.width <= document.width
}
