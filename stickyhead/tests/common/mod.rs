//! In-memory layout surface for exercising the controller without a
//! renderer. Geometry is whatever the test sets; `writes` counts only
//! value-changing mutations so idempotence is directly observable.

// Each test binary uses a different subset of the fake.
#![allow(dead_code)]

use std::collections::HashMap;

use stickyhead::surface::Srgba;
use stickyhead::{
    BoxSizing, ControllerId, Display, NodeId, Offset, Overflow, Position, ScrollPosition, Size,
    Subscription, Surface, WidthBounds,
};

#[derive(Debug, Clone, Default)]
pub struct FakeNode {
    // Structure
    pub children: Vec<NodeId>,
    /// Table nodes: their header row group.
    pub header: Option<NodeId>,
    /// Header row groups (and header-content elements): their cells.
    pub cells: Vec<NodeId>,

    // Geometry
    pub offset: Offset,
    pub content: Size,
    pub outer_width: f64,
    pub outer_height: Option<f64>,
    pub bounding_width: f64,
    pub computed_width: Option<f64>,
    pub padding: (f64, f64),
    pub border_width: f64,
    pub box_sizing: BoxSizing,
    pub border_collapsed: bool,
    pub scroll: ScrollPosition,
    pub background: Option<Srgba<u8>>,

    // Written style state
    pub width_bounds: WidthBounds,
    pub position: Position,
    pub display: Display,
    pub top: Option<f64>,
    pub left: Option<f64>,
    pub bottom: Option<f64>,
    pub margin_top: Option<f64>,
    pub z_index: Option<i32>,
    pub style_width: Option<f64>,
    pub style_height: Option<f64>,
    pub overflow: (Overflow, Overflow),
    pub applied_background: Option<Srgba<u8>>,
    pub padding_cleared: bool,
    pub interactive_disabled: bool,
}

#[derive(Debug, Default)]
pub struct FakeDom {
    pub nodes: HashMap<NodeId, FakeNode>,
    pub root_children: Vec<NodeId>,
    pub window_scroll: ScrollPosition,
    pub viewport: Size,
    pub document: Size,
    pub subscriptions: Vec<Subscription>,
    /// Value-changing writes only; rewriting an equal value doesn't count.
    pub writes: usize,
    next_id: u64,
}

fn assign<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot != value {
        *slot = value;
        true
    } else {
        false
    }
}

impl FakeDom {
    pub fn new() -> Self {
        Self {
            viewport: Size::new(800.0, 600.0),
            document: Size::new(2000.0, 3000.0),
            ..Default::default()
        }
    }

    pub fn add(&mut self, id: &str, node: FakeNode) -> NodeId {
        let id = NodeId::new(id);
        self.nodes.insert(id.clone(), node);
        id
    }

    pub fn node(&self, id: &NodeId) -> &FakeNode {
        self.nodes.get(id).expect("node exists")
    }

    pub fn node_mut(&mut self, id: &NodeId) -> &mut FakeNode {
        self.nodes.get_mut(id).expect("node exists")
    }

    pub fn has_node(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    fn fresh_id(&mut self, prefix: &str) -> NodeId {
        self.next_id += 1;
        NodeId::new(format!("{prefix}-{}", self.next_id))
    }

    fn apply<F>(&mut self, id: &NodeId, mutate: F)
    where
        F: FnOnce(&mut FakeNode) -> bool,
    {
        if let Some(node) = self.nodes.get_mut(id) {
            if mutate(node) {
                self.writes += 1;
            }
        }
    }

    fn clone_into(&mut self, source: &NodeId, target: NodeId) {
        let Some(mut copy) = self.nodes.get(source).cloned() else {
            self.nodes.insert(target, FakeNode::default());
            return;
        };
        let children = std::mem::take(&mut copy.children);
        let header = copy.header.take();
        let cells = std::mem::take(&mut copy.cells);
        self.nodes.insert(target.clone(), copy);
        for child in children {
            let child_copy = self.fresh_id("clone");
            self.clone_into(&child, child_copy.clone());
            self.node_mut(&target).children.push(child_copy);
        }
        if let Some(header) = header {
            let header_copy = self.fresh_id("clone");
            self.clone_into(&header, header_copy.clone());
            self.node_mut(&target).header = Some(header_copy);
        }
        for cell in cells {
            let cell_copy = self.fresh_id("clone");
            self.clone_into(&cell, cell_copy.clone());
            self.node_mut(&target).cells.push(cell_copy);
        }
    }

    fn detach(&mut self, node: &NodeId) {
        self.root_children.retain(|child| child != node);
        for other in self.nodes.values_mut() {
            other.children.retain(|child| child != node);
        }
    }
}

impl Surface for FakeDom {
    fn clone_subtree(&mut self, node: &NodeId) -> NodeId {
        let id = self.fresh_id("clone");
        self.clone_into(node, id.clone());
        self.writes += 1;
        id
    }

    fn create_container(&mut self) -> NodeId {
        let id = self.fresh_id("div");
        self.nodes.insert(id.clone(), FakeNode::default());
        self.writes += 1;
        id
    }

    fn insert_after(&mut self, anchor: &NodeId, node: &NodeId) {
        self.writes += 1;
        let sibling_parent = self
            .nodes
            .iter()
            .find(|(_, n)| n.children.contains(anchor))
            .map(|(id, _)| id.clone());
        if let Some(parent) = sibling_parent {
            let children = &mut self.node_mut(&parent).children;
            let index = children.iter().position(|c| c == anchor).unwrap();
            children.insert(index + 1, node.clone());
            return;
        }
        // A header row group is tracked on its table, not in children.
        let header_parent = self
            .nodes
            .iter()
            .find(|(_, n)| n.header.as_ref() == Some(anchor))
            .map(|(id, _)| id.clone());
        if let Some(parent) = header_parent {
            self.node_mut(&parent).children.insert(0, node.clone());
            return;
        }
        self.root_children.push(node.clone());
    }

    fn append_to_root(&mut self, node: &NodeId) {
        self.writes += 1;
        self.root_children.push(node.clone());
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) {
        self.writes += 1;
        self.detach(child);
        self.node_mut(parent).children.push(child.clone());
    }

    fn remove(&mut self, node: &NodeId) {
        self.detach(node);
        if let Some(removed) = self.nodes.remove(node) {
            self.writes += 1;
            for child in &removed.children {
                self.remove(child);
            }
            if let Some(header) = &removed.header {
                self.remove(header);
            }
            for cell in &removed.cells {
                self.remove(cell);
            }
        }
    }

    fn strip_body(&mut self, table: &NodeId) {
        let children = self
            .nodes
            .get_mut(table)
            .map(|n| std::mem::take(&mut n.children))
            .unwrap_or_default();
        for child in children {
            self.remove(&child);
        }
    }

    fn disable_interactive(&mut self, node: &NodeId) {
        self.apply(node, |n| assign(&mut n.interactive_disabled, true));
    }

    fn header_of(&self, table: &NodeId) -> Option<NodeId> {
        self.nodes.get(table).and_then(|n| n.header.clone())
    }

    fn header_cells(&self, node: &NodeId) -> Vec<NodeId> {
        let Some(n) = self.nodes.get(node) else {
            return Vec::new();
        };
        if !n.cells.is_empty() {
            return n.cells.clone();
        }
        if let Some(header) = &n.header {
            return self
                .nodes
                .get(header)
                .map(|h| h.cells.clone())
                .unwrap_or_default();
        }
        Vec::new()
    }

    fn offset(&self, node: &NodeId) -> Offset {
        self.nodes.get(node).map(|n| n.offset).unwrap_or_default()
    }

    fn content_width(&self, node: &NodeId) -> f64 {
        self.nodes.get(node).map(|n| n.content.width).unwrap_or(0.0)
    }

    fn content_height(&self, node: &NodeId) -> f64 {
        self.nodes
            .get(node)
            .map(|n| n.content.height)
            .unwrap_or(0.0)
    }

    fn outer_width(&self, node: &NodeId) -> f64 {
        self.nodes.get(node).map(|n| n.outer_width).unwrap_or(0.0)
    }

    fn outer_height(&self, node: &NodeId) -> Option<f64> {
        self.nodes.get(node).and_then(|n| n.outer_height)
    }

    fn bounding_width(&self, node: &NodeId) -> f64 {
        self.nodes
            .get(node)
            .map(|n| n.bounding_width)
            .unwrap_or(0.0)
    }

    fn computed_width(&self, node: &NodeId) -> Option<f64> {
        self.nodes.get(node).and_then(|n| n.computed_width)
    }

    fn horizontal_padding(&self, node: &NodeId) -> (f64, f64) {
        self.nodes.get(node).map(|n| n.padding).unwrap_or((0.0, 0.0))
    }

    fn border_width(&self, node: &NodeId) -> f64 {
        self.nodes.get(node).map(|n| n.border_width).unwrap_or(0.0)
    }

    fn box_sizing(&self, node: &NodeId) -> BoxSizing {
        self.nodes
            .get(node)
            .map(|n| n.box_sizing)
            .unwrap_or_default()
    }

    fn border_collapsed(&self, node: &NodeId) -> bool {
        self.nodes
            .get(node)
            .map(|n| n.border_collapsed)
            .unwrap_or(false)
    }

    fn width_bounds(&self, node: &NodeId) -> WidthBounds {
        self.nodes
            .get(node)
            .map(|n| n.width_bounds)
            .unwrap_or_default()
    }

    fn window_scroll(&self) -> ScrollPosition {
        self.window_scroll
    }

    fn node_scroll(&self, node: &NodeId) -> ScrollPosition {
        self.nodes.get(node).map(|n| n.scroll).unwrap_or_default()
    }

    fn viewport(&self) -> Size {
        self.viewport
    }

    fn document_size(&self) -> Size {
        self.document
    }

    fn computed_background(&self, node: &NodeId) -> Option<Srgba<u8>> {
        self.nodes.get(node).and_then(|n| n.background)
    }

    fn set_position(&mut self, node: &NodeId, position: Position) {
        self.apply(node, |n| assign(&mut n.position, position));
    }

    fn set_top(&mut self, node: &NodeId, px: f64) {
        self.apply(node, |n| assign(&mut n.top, Some(px)));
    }

    fn set_left(&mut self, node: &NodeId, px: f64) {
        self.apply(node, |n| assign(&mut n.left, Some(px)));
    }

    fn set_bottom(&mut self, node: &NodeId, px: f64) {
        self.apply(node, |n| assign(&mut n.bottom, Some(px)));
    }

    fn set_margin_top(&mut self, node: &NodeId, px: f64) {
        self.apply(node, |n| assign(&mut n.margin_top, Some(px)));
    }

    fn set_z_index(&mut self, node: &NodeId, z: i32) {
        self.apply(node, |n| assign(&mut n.z_index, Some(z)));
    }

    fn set_display(&mut self, node: &NodeId, display: Display) {
        self.apply(node, |n| assign(&mut n.display, display));
    }

    fn set_width(&mut self, node: &NodeId, px: f64) {
        self.apply(node, |n| assign(&mut n.style_width, Some(px)));
    }

    fn set_height(&mut self, node: &NodeId, px: f64) {
        self.apply(node, |n| assign(&mut n.style_height, Some(px)));
    }

    fn set_width_bounds(&mut self, node: &NodeId, bounds: WidthBounds) {
        self.apply(node, |n| assign(&mut n.width_bounds, bounds));
    }

    fn set_overflow(&mut self, node: &NodeId, x: Overflow, y: Overflow) {
        self.apply(node, |n| assign(&mut n.overflow, (x, y)));
    }

    fn set_background(&mut self, node: &NodeId, color: Srgba<u8>) {
        self.apply(node, |n| assign(&mut n.applied_background, Some(color)));
    }

    fn clear_padding(&mut self, node: &NodeId) {
        self.apply(node, |n| assign(&mut n.padding_cleared, true));
    }

    fn set_scroll_left(&mut self, node: &NodeId, px: f64) {
        self.apply(node, |n| assign(&mut n.scroll.left, px));
    }

    fn subscribe(&mut self, subscription: Subscription) {
        if !self.subscriptions.contains(&subscription) {
            self.subscriptions.push(subscription);
        }
    }

    fn unsubscribe(&mut self, owner: ControllerId) {
        self.subscriptions.retain(|s| s.owner != owner);
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// A window-scrolled page: one table at (top 200, left 10), 540 wide,
/// 1000 tall, with a 30px three-cell header.
pub struct Page {
    pub dom: FakeDom,
    pub table: NodeId,
    pub header: NodeId,
    pub cells: Vec<NodeId>,
}

pub fn window_page() -> Page {
    let mut dom = FakeDom::new();
    let mut cells = Vec::new();
    for (index, width) in [120.0, 180.0, 240.0].into_iter().enumerate() {
        let cell = dom.add(
            &format!("cell-{index}"),
            FakeNode {
                content: Size::new(width, 30.0),
                outer_width: width + 16.0,
                bounding_width: width + 16.0,
                padding: (8.0, 8.0),
                border_width: 1.0,
                ..Default::default()
            },
        );
        cells.push(cell);
    }
    let header = dom.add(
        "header",
        FakeNode {
            cells: cells.clone(),
            content: Size::new(540.0, 30.0),
            offset: Offset::new(200.0, 10.0),
            ..Default::default()
        },
    );
    let body = dom.add("body-rows", FakeNode::default());
    let table = dom.add(
        "table",
        FakeNode {
            header: Some(header.clone()),
            children: vec![body],
            content: Size::new(540.0, 1000.0),
            offset: Offset::new(200.0, 10.0),
            ..Default::default()
        },
    );
    Page {
        dom,
        table,
        header,
        cells,
    }
}
