//! Shared value vocabulary for geometry and style state.
//!
//! All geometry is in pixels (`f64`), matching what a layout surface
//! reports for bounding boxes and scroll positions.

/// Document-space offset of an element (top/left of its bounding box).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub top: f64,
    pub left: f64,
}

impl Offset {
    pub const fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }
}

/// A width/height pair (viewport, document, or element size).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Scroll position of a scrollable area.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollPosition {
    pub top: f64,
    pub left: f64,
}

impl ScrollPosition {
    pub const fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }
}

/// Min/max width overrides on a cell. `None` means the bound is unset
/// and the surface's own sizing rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WidthBounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl WidthBounds {
    /// Pin both bounds to the same pixel width.
    pub const fn pinned(width: f64) -> Self {
        Self {
            min: Some(width),
            max: Some(width),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    #[default]
    Static,
    Relative,
    Fixed,
}

/// Display state of a managed element.
///
/// There is deliberately no explicit "visible" variant: leaving hidden
/// means reverting to the surface's native display rule for the element,
/// not forcing a specific one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Default,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Auto,
}

/// Box model of a header cell, as resolved by the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxSizing {
    #[default]
    ContentBox,
    BorderBox,
}
