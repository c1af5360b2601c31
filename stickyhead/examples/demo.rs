//! Drives a controller against a tiny in-memory page: scrolls the window
//! from the top of the document to past the table and prints every
//! stickiness transition. Run with `cargo run --example demo`.

use std::collections::HashMap;
use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use stickyhead::surface::Srgba;
use stickyhead::{
    BoxSizing, Controller, ControllerId, Display, NodeId, Notification, Offset, Options, Overflow,
    Position, ScrollPosition, Signal, SignalSource, Size, Subscription, Surface, WidthBounds,
};

#[derive(Debug, Clone, Default)]
struct Node {
    children: Vec<NodeId>,
    header: Option<NodeId>,
    cells: Vec<NodeId>,
    offset: Offset,
    content: Size,
    scroll: ScrollPosition,
    position: Position,
    display: Display,
}

/// Just enough of a page to run the controller: every element is a bag of
/// numbers and the style writes land back in the bag.
#[derive(Debug, Default)]
struct Page {
    nodes: HashMap<NodeId, Node>,
    window_scroll: ScrollPosition,
    subscriptions: Vec<Subscription>,
    next_id: u64,
}

impl Page {
    fn add(&mut self, id: &str, node: Node) -> NodeId {
        let id = NodeId::new(id);
        self.nodes.insert(id.clone(), node);
        id
    }

    fn fresh_id(&mut self) -> NodeId {
        self.next_id += 1;
        NodeId::new(format!("gen-{}", self.next_id))
    }

    fn get(&self, id: &NodeId) -> Node {
        self.nodes.get(id).cloned().unwrap_or_default()
    }

    fn with<F: FnOnce(&mut Node)>(&mut self, id: &NodeId, mutate: F) {
        if let Some(node) = self.nodes.get_mut(id) {
            mutate(node);
        }
    }
}

impl Surface for Page {
    fn clone_subtree(&mut self, node: &NodeId) -> NodeId {
        let mut copy = self.get(node);
        let cells = std::mem::take(&mut copy.cells);
        let id = self.fresh_id();
        self.nodes.insert(id.clone(), copy);
        for cell in cells {
            let cell_copy = self.fresh_id();
            let cloned = self.get(&cell);
            self.nodes.insert(cell_copy.clone(), cloned);
            self.with(&id, |n| n.cells.push(cell_copy));
        }
        id
    }

    fn create_container(&mut self) -> NodeId {
        let id = self.fresh_id();
        self.nodes.insert(id.clone(), Node::default());
        id
    }

    fn insert_after(&mut self, _anchor: &NodeId, _node: &NodeId) {}

    fn append_to_root(&mut self, _node: &NodeId) {}

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) {
        self.with(parent, |n| n.children.push(child.clone()));
    }

    fn remove(&mut self, node: &NodeId) {
        self.nodes.remove(node);
    }

    fn strip_body(&mut self, table: &NodeId) {
        self.with(table, |n| n.children.clear());
    }

    fn disable_interactive(&mut self, _node: &NodeId) {}

    fn header_of(&self, table: &NodeId) -> Option<NodeId> {
        self.nodes.get(table).and_then(|n| n.header.clone())
    }

    fn header_cells(&self, node: &NodeId) -> Vec<NodeId> {
        let n = self.get(node);
        if !n.cells.is_empty() {
            return n.cells;
        }
        n.header.map(|h| self.get(&h).cells).unwrap_or_default()
    }

    fn offset(&self, node: &NodeId) -> Offset {
        self.get(node).offset
    }

    fn content_width(&self, node: &NodeId) -> f64 {
        self.get(node).content.width
    }

    fn content_height(&self, node: &NodeId) -> f64 {
        self.get(node).content.height
    }

    fn outer_width(&self, node: &NodeId) -> f64 {
        self.get(node).content.width
    }

    fn outer_height(&self, node: &NodeId) -> Option<f64> {
        Some(self.get(node).content.height)
    }

    fn bounding_width(&self, node: &NodeId) -> f64 {
        self.get(node).content.width
    }

    fn computed_width(&self, _node: &NodeId) -> Option<f64> {
        None
    }

    fn horizontal_padding(&self, _node: &NodeId) -> (f64, f64) {
        (0.0, 0.0)
    }

    fn border_width(&self, _node: &NodeId) -> f64 {
        0.0
    }

    fn box_sizing(&self, _node: &NodeId) -> BoxSizing {
        BoxSizing::ContentBox
    }

    fn border_collapsed(&self, _node: &NodeId) -> bool {
        false
    }

    fn width_bounds(&self, _node: &NodeId) -> WidthBounds {
        WidthBounds::default()
    }

    fn window_scroll(&self) -> ScrollPosition {
        self.window_scroll
    }

    fn node_scroll(&self, node: &NodeId) -> ScrollPosition {
        self.get(node).scroll
    }

    fn viewport(&self) -> Size {
        Size::new(1280.0, 720.0)
    }

    fn document_size(&self) -> Size {
        Size::new(1280.0, 4000.0)
    }

    fn computed_background(&self, _node: &NodeId) -> Option<Srgba<u8>> {
        None
    }

    fn set_position(&mut self, node: &NodeId, position: Position) {
        self.with(node, |n| n.position = position);
    }

    fn set_top(&mut self, _node: &NodeId, _px: f64) {}

    fn set_left(&mut self, _node: &NodeId, _px: f64) {}

    fn set_bottom(&mut self, _node: &NodeId, _px: f64) {}

    fn set_margin_top(&mut self, _node: &NodeId, _px: f64) {}

    fn set_z_index(&mut self, _node: &NodeId, _z: i32) {}

    fn set_display(&mut self, node: &NodeId, display: Display) {
        self.with(node, |n| n.display = display);
    }

    fn set_width(&mut self, _node: &NodeId, _px: f64) {}

    fn set_height(&mut self, _node: &NodeId, _px: f64) {}

    fn set_width_bounds(&mut self, _node: &NodeId, _bounds: WidthBounds) {}

    fn set_overflow(&mut self, _node: &NodeId, _x: Overflow, _y: Overflow) {}

    fn set_background(&mut self, _node: &NodeId, _color: Srgba<u8>) {}

    fn clear_padding(&mut self, _node: &NodeId) {}

    fn set_scroll_left(&mut self, node: &NodeId, px: f64) {
        self.with(node, |n| n.scroll.left = px);
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

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut page = Page::default();
    let mut cells = Vec::new();
    for (index, width) in [160.0, 220.0, 300.0].into_iter().enumerate() {
        let cell = page.add(
            &format!("th-{index}"),
            Node {
                content: Size::new(width, 40.0),
                ..Default::default()
            },
        );
        cells.push(cell);
    }
    let header = page.add(
        "thead",
        Node {
            cells,
            content: Size::new(680.0, 40.0),
            offset: Offset::new(400.0, 40.0),
            ..Default::default()
        },
    );
    let body = page.add("tbody", Node::default());
    let table = page.add(
        "table",
        Node {
            header: Some(header.clone()),
            children: vec![body],
            content: Size::new(680.0, 2400.0),
            offset: Offset::new(400.0, 40.0),
            ..Default::default()
        },
    );

    let mut controller = Controller::attach(&mut page, table, Options::new().margin_top(8.0))
        .expect("table has a header");
    report(controller.drain_notifications());
    report(controller.tick(&mut page));

    // Scroll down through the table and back up.
    for top in (0..=3000).step_by(200).chain((0..3000).rev().step_by(200)) {
        page.window_scroll.top = f64::from(top);
        controller.handle_signal(&mut page, &Signal::scroll(SignalSource::Window));
        let notifications = controller.tick(&mut page);
        if !notifications.is_empty() {
            println!("scroll {top:>5}:");
            report(notifications);
        }
    }

    println!("final header position: {:?}", page.get(&header).position);
    println!(
        "clone display: {:?}",
        page.get(controller.cloned_header()).display
    );

    controller.destroy(&mut page);
    println!("destroyed, {} subscriptions left", page.subscriptions.len());
    Ok(())
}

fn report(notifications: Vec<Notification>) {
    for notification in notifications {
        match notification {
            Notification::CloneCreated(id) => println!("  clone created: {id}"),
            Notification::StickinessEnabled => println!("  header is now fixed"),
            Notification::StickinessDisabled => println!("  header is static again"),
        }
    }
}
