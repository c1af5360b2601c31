//! The layout surface capability.
//!
//! [`Surface`] is the seam between the stickiness algorithm and the host's
//! layout/style engine. The controller only ever measures and writes
//! through this trait, so the whole system can run against a fake surface
//! in tests as well as against a real renderer.
//!
//! The controller is the sole writer of the style properties it manages on
//! the elements it manages; implementations must tolerate concurrent
//! external reads/writes to unrelated properties on the same elements.

pub use palette::Srgba;

use crate::controller::ControllerId;
use crate::event::{SignalKind, SignalSource};
use crate::types::{
    BoxSizing, Display, Offset, Overflow, Position, ScrollPosition, Size, WidthBounds,
};

/// Opaque handle to a host element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A scroll/resize subscription registered by a controller.
///
/// Subscriptions are scoped by the owning controller so that
/// [`Surface::unsubscribe`] can remove everything one controller
/// registered without touching other instances on the same elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    pub owner: ControllerId,
    pub source: SignalSource,
    pub kind: SignalKind,
}

/// Host capabilities required by the controller.
///
/// Measurement methods are reads against live layout state; style setters
/// write the single property they name. Structural methods mutate the
/// element tree.
pub trait Surface {
    // ------------------------------------------------------------------
    // Structure
    // ------------------------------------------------------------------

    /// Duplicate a subtree, stripping element identifiers from the copy.
    /// Returns the new root. The copy is inserted nowhere; callers place it.
    fn clone_subtree(&mut self, node: &NodeId) -> NodeId;

    /// Create a detached block container element.
    fn create_container(&mut self) -> NodeId;

    /// Insert `node` as the next sibling of `anchor`.
    fn insert_after(&mut self, anchor: &NodeId, node: &NodeId);

    /// Append `node` to the document root (end of body).
    fn append_to_root(&mut self, node: &NodeId);

    /// Append `child` as the last child of `parent`, reparenting if needed.
    fn append_child(&mut self, parent: &NodeId, child: &NodeId);

    /// Remove `node` and its subtree from the document.
    fn remove(&mut self, node: &NodeId);

    /// Remove the body row groups of a table, keeping only its header.
    fn strip_body(&mut self, table: &NodeId);

    /// Disable interactive descendants (inputs, selects) of `node` so a
    /// hidden placeholder cannot receive focus or input.
    fn disable_interactive(&mut self, node: &NodeId);

    /// The first header row group of `table`, if any.
    fn header_of(&self, table: &NodeId) -> Option<NodeId>;

    /// The top-level header cells of the first header row group found
    /// under `node` (which may itself be that row group).
    fn header_cells(&self, node: &NodeId) -> Vec<NodeId>;

    // ------------------------------------------------------------------
    // Measurement
    // ------------------------------------------------------------------

    /// Document-space offset of the element's bounding box.
    fn offset(&self, node: &NodeId) -> Offset;

    /// Content-box width.
    fn content_width(&self, node: &NodeId) -> f64;

    /// Content-box height.
    fn content_height(&self, node: &NodeId) -> f64;

    /// Width including padding and borders.
    fn outer_width(&self, node: &NodeId) -> f64;

    /// Height including padding and borders. `None` when the element
    /// cannot be measured (detached, display-less hosts, ...).
    fn outer_height(&self, node: &NodeId) -> Option<f64>;

    /// Rendered bounding-box width (fractional).
    fn bounding_width(&self, node: &NodeId) -> f64;

    /// The resolved style width, when the surface can report one.
    fn computed_width(&self, node: &NodeId) -> Option<f64>;

    /// Left and right padding widths.
    fn horizontal_padding(&self, node: &NodeId) -> (f64, f64);

    /// Resolved border width of the element.
    fn border_width(&self, node: &NodeId) -> f64;

    fn box_sizing(&self, node: &NodeId) -> BoxSizing;

    /// Whether the element participates in a collapsed-border table model.
    fn border_collapsed(&self, node: &NodeId) -> bool;

    /// Current min/max width overrides on the element.
    fn width_bounds(&self, node: &NodeId) -> WidthBounds;

    fn window_scroll(&self) -> ScrollPosition;

    fn node_scroll(&self, node: &NodeId) -> ScrollPosition;

    /// Window (viewport) size.
    fn viewport(&self) -> Size;

    /// Full document size.
    fn document_size(&self) -> Size;

    /// Computed background color, `None` when none is set or it is fully
    /// transparent in a way the surface cannot resolve.
    fn computed_background(&self, node: &NodeId) -> Option<Srgba<u8>>;

    // ------------------------------------------------------------------
    // Style writes
    // ------------------------------------------------------------------

    fn set_position(&mut self, node: &NodeId, position: Position);

    fn set_top(&mut self, node: &NodeId, px: f64);

    fn set_left(&mut self, node: &NodeId, px: f64);

    fn set_bottom(&mut self, node: &NodeId, px: f64);

    fn set_margin_top(&mut self, node: &NodeId, px: f64);

    fn set_z_index(&mut self, node: &NodeId, z: i32);

    fn set_display(&mut self, node: &NodeId, display: Display);

    fn set_width(&mut self, node: &NodeId, px: f64);

    fn set_height(&mut self, node: &NodeId, px: f64);

    fn set_width_bounds(&mut self, node: &NodeId, bounds: WidthBounds);

    fn set_overflow(&mut self, node: &NodeId, x: Overflow, y: Overflow);

    fn set_background(&mut self, node: &NodeId, color: Srgba<u8>);

    /// Zero out the element's padding.
    fn clear_padding(&mut self, node: &NodeId);

    /// Set the horizontal scroll offset of a scrollable element.
    fn set_scroll_left(&mut self, node: &NodeId, px: f64);

    // ------------------------------------------------------------------
    // Signals
    // ------------------------------------------------------------------

    /// Register interest in a scroll/resize signal. Registering an
    /// already-present subscription is a no-op.
    fn subscribe(&mut self, subscription: Subscription);

    /// Remove every subscription registered by `owner`.
    fn unsubscribe(&mut self, owner: ControllerId);
}
