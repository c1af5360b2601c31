//! Controller configuration.

use crate::surface::{NodeId, Surface};

/// The vertical offset reserved above the sticky header.
///
/// Resolved fresh on every toggle tick, so a deferred reference tracks the
/// live height of the referenced element (a fixed nav bar, typically).
#[derive(Debug, Clone, PartialEq)]
pub enum FixedOffset {
    /// A literal pixel offset.
    Px(f64),
    /// The outer height of another element, measured at evaluation time.
    /// An unmeasurable element resolves to 0.
    ElementHeight(NodeId),
}

impl Default for FixedOffset {
    fn default() -> Self {
        Self::Px(0.0)
    }
}

impl FixedOffset {
    /// Resolve to pixels against the current layout state.
    pub fn resolve<S: Surface + ?Sized>(&self, dom: &S) -> f64 {
        match self {
            Self::Px(px) => *px,
            Self::ElementHeight(node) => dom.outer_height(node).unwrap_or(0.0),
        }
    }

    /// The literal pixel value, ignoring deferred references.
    ///
    /// Container-scrolling mode only honors literal offsets.
    pub fn literal(&self) -> f64 {
        match self {
            Self::Px(px) => *px,
            Self::ElementHeight(_) => 0.0,
        }
    }
}

/// Which scrollable area drives stickiness.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScrollArea {
    #[default]
    Window,
    Node(NodeId),
}

/// Controller options. Applied at attach; replaceable via
/// [`Controller::update_options`](crate::Controller::update_options).
#[derive(Debug, Clone)]
pub struct Options {
    pub fixed_offset: FixedOffset,
    pub left_offset: f64,
    pub margin_top: f64,
    pub scrollable_area: ScrollArea,
    pub cache_header_height: bool,
    /// Secondary horizontally-scrollable wrapper around the table.
    pub horizontal_scrolling_area: Option<NodeId>,
    /// Header-content element mirrored into the fixed overlay.
    pub sticky_header_content: Option<NodeId>,
    /// Element layered above the overlay that must not be shone through.
    pub sticky_header_hidden: Option<NodeId>,
    pub z_index_offset: i32,
    pub z_index: i32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            fixed_offset: FixedOffset::default(),
            left_offset: 0.0,
            margin_top: 0.0,
            scrollable_area: ScrollArea::Window,
            cache_header_height: false,
            horizontal_scrolling_area: None,
            sticky_header_content: None,
            sticky_header_hidden: None,
            z_index_offset: 0,
            z_index: 3,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fixed_offset(mut self, offset: FixedOffset) -> Self {
        self.fixed_offset = offset;
        self
    }

    pub fn left_offset(mut self, px: f64) -> Self {
        self.left_offset = px;
        self
    }

    pub fn margin_top(mut self, px: f64) -> Self {
        self.margin_top = px;
        self
    }

    pub fn scrollable_area(mut self, area: ScrollArea) -> Self {
        self.scrollable_area = area;
        self
    }

    pub fn cache_header_height(mut self, cache: bool) -> Self {
        self.cache_header_height = cache;
        self
    }

    pub fn horizontal_scrolling_area(mut self, node: NodeId) -> Self {
        self.horizontal_scrolling_area = Some(node);
        self
    }

    pub fn sticky_header_content(mut self, node: NodeId) -> Self {
        self.sticky_header_content = Some(node);
        self
    }

    pub fn sticky_header_hidden(mut self, node: NodeId) -> Self {
        self.sticky_header_hidden = Some(node);
        self
    }

    pub fn z_index_offset(mut self, offset: i32) -> Self {
        self.z_index_offset = offset;
        self
    }

    pub fn z_index(mut self, z: i32) -> Self {
        self.z_index = z;
        self
    }
}
