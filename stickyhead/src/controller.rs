//! The stickiness state machine.
//!
//! One [`Controller`] per table. It consumes host scroll/resize signals,
//! coalesces them through the [`Scheduler`], evaluates geometry on each
//! tick, and drives the STATIC ⇄ FIXED transitions: positioning the
//! original header, revealing the floating clone as a layout placeholder,
//! mirroring column widths, and refreshing the horizontal proxy.

use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, trace};

use crate::error::AttachError;
use crate::event::{Notification, Signal, SignalKind, SignalSource};
use crate::geometry::{self, GeometryInput};
use crate::hscroll::HorizontalProxy;
use crate::options::{Options, ScrollArea};
use crate::scheduler::{Scheduler, Task};
use crate::surface::{NodeId, Subscription, Surface};
use crate::types::{Display, Position, ScrollPosition};
use crate::width;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Per-controller scoping token for signal subscriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControllerId(u64);

impl ControllerId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for ControllerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sticky-{}", self.0)
    }
}

/// Positioning mode of the original header. Exactly one per controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stickiness {
    #[default]
    Static,
    Fixed,
}

/// Sticky-header controller for a single table.
pub struct Controller {
    id: ControllerId,
    options: Options,
    table: NodeId,
    original_header: NodeId,
    cloned_header: NodeId,
    original_cells: Vec<NodeId>,
    cloned_cells: Vec<NodeId>,
    cached_header_height: Option<f64>,
    state: Stickiness,
    /// Effective top offset captured when the header went fixed.
    top_offset: f64,
    /// Fixed left position captured when the header went fixed.
    left_offset: f64,
    proxy: Option<HorizontalProxy>,
    scheduler: Scheduler,
    notifications: Vec<Notification>,
    live: bool,
}

impl Controller {
    /// Attach to a table: clone its header, build the optional horizontal
    /// proxy, register subscriptions, and schedule the initial width and
    /// stickiness pass.
    ///
    /// Emits [`Notification::CloneCreated`]; drain it with
    /// [`Controller::drain_notifications`] or collect it from the first
    /// [`Controller::tick`].
    pub fn attach<S: Surface + ?Sized>(
        dom: &mut S,
        table: NodeId,
        options: Options,
    ) -> Result<Self, AttachError> {
        let original_header = dom.header_of(&table).ok_or(AttachError::MissingHeader)?;

        // Table padding offsets the fixed header from the placeholder.
        dom.clear_padding(&table);

        let cloned_header = dom.clone_subtree(&original_header);
        dom.insert_after(&original_header, &cloned_header);
        dom.set_display(&cloned_header, Display::Hidden);
        dom.disable_interactive(&cloned_header);

        let original_cells = dom.header_cells(&original_header);
        let cloned_cells = dom.header_cells(&cloned_header);
        let proxy = HorizontalProxy::build(dom, &table, &options);

        let mut controller = Self {
            id: ControllerId::next(),
            options,
            table,
            original_header,
            cloned_header: cloned_header.clone(),
            original_cells,
            cloned_cells,
            cached_header_height: None,
            state: Stickiness::Static,
            top_offset: 0.0,
            left_offset: 0.0,
            proxy,
            scheduler: Scheduler::new(),
            notifications: vec![Notification::CloneCreated(cloned_header)],
            live: true,
        };

        controller.bind(dom);
        controller.scheduler.schedule(Task::Width);
        controller.scheduler.schedule(Task::Toggle);
        debug!("controller {} attached to {}", controller.id, controller.table);
        Ok(controller)
    }

    pub fn id(&self) -> ControllerId {
        self.id
    }

    pub fn stickiness(&self) -> Stickiness {
        self.state
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    pub fn cloned_header(&self) -> &NodeId {
        &self.cloned_header
    }

    pub fn proxy(&self) -> Option<&HorizontalProxy> {
        self.proxy.as_ref()
    }

    /// Take the notifications accumulated since the last drain.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Replace the configuration: rebind subscriptions (the scrollable
    /// area may have changed) and force a width and stickiness recompute.
    pub fn update_options<S: Surface + ?Sized>(&mut self, dom: &mut S, options: Options) {
        if !self.live {
            return;
        }
        self.options = options;
        dom.unsubscribe(self.id);
        self.bind(dom);
        self.scheduler.schedule(Task::Width);
        self.scheduler.schedule(Task::Toggle);
    }

    /// Tear down: restore static positioning, remove the clone and any
    /// proxy surfaces, drop all subscriptions. Signals and ticks arriving
    /// afterwards are no-ops.
    pub fn destroy<S: Surface + ?Sized>(&mut self, dom: &mut S) {
        if !self.live {
            return;
        }
        if self.state == Stickiness::Fixed {
            dom.set_position(&self.original_header, Position::Static);
        }
        dom.unsubscribe(self.id);
        dom.remove(&self.cloned_header);
        dom.set_display(&self.original_header, Display::Default);
        if let Some(proxy) = self.proxy.take() {
            proxy.teardown(dom);
        }
        self.state = Stickiness::Static;
        self.scheduler.clear();
        self.live = false;
        debug!("controller {} destroyed", self.id);
    }

    /// Route one host signal.
    ///
    /// Horizontal-proxy scroll sync runs immediately (a tick of visible
    /// lag on the scrollbar is jarring); everything else is scheduled and
    /// coalesced into the next tick.
    pub fn handle_signal<S: Surface + ?Sized>(&mut self, dom: &mut S, signal: &Signal) {
        if !self.live {
            return;
        }

        if signal.kind == SignalKind::Scroll {
            if let SignalSource::Node(node) = &signal.source {
                if let Some(proxy) = &mut self.proxy {
                    if node == proxy.wrapper() {
                        proxy.sync_from_wrapper(dom);
                        self.scheduler.schedule(Task::Toggle);
                        return;
                    }
                    if node == proxy.scrollbar_pane() {
                        proxy.sync_from_scrollbar(dom);
                        return;
                    }
                }
            }
        }

        let area = self.area_source();
        match signal.kind {
            SignalKind::Scroll => {
                if signal.source == area {
                    self.scheduler.schedule(Task::Toggle);
                }
                if signal.source == SignalSource::Window {
                    if !self.window_scrolling() {
                        self.scheduler.schedule(Task::Position);
                    }
                    if let Some(proxy) = &mut self.proxy {
                        proxy.refresh_visibility(dom, &self.table, &self.original_header);
                    }
                }
            }
            SignalKind::Resize => {
                if signal.source == area {
                    self.scheduler.schedule(Task::Toggle);
                    self.scheduler.schedule(Task::Width);
                }
                if signal.source == SignalSource::Window && !self.window_scrolling() {
                    self.scheduler.schedule(Task::Toggle);
                }
            }
        }
    }

    /// Run the recomputations scheduled since the previous tick and return
    /// the notifications they produced. At most one recomputation per task
    /// kind executes regardless of the signal burst that preceded it.
    pub fn tick<S: Surface + ?Sized>(&mut self, dom: &mut S) -> Vec<Notification> {
        if !self.live {
            self.scheduler.clear();
            return Vec::new();
        }
        for task in self.scheduler.drain() {
            trace!("controller {} running {:?}", self.id, task);
            match task {
                Task::Toggle => self.toggle(dom),
                Task::Width => self.update_width(dom),
                Task::Position => self.refresh_position(dom),
            }
        }
        std::mem::take(&mut self.notifications)
    }

    fn window_scrolling(&self) -> bool {
        matches!(self.options.scrollable_area, ScrollArea::Window)
    }

    fn area_source(&self) -> SignalSource {
        match &self.options.scrollable_area {
            ScrollArea::Window => SignalSource::Window,
            ScrollArea::Node(node) => SignalSource::Node(node.clone()),
        }
    }

    fn area_scroll<S: Surface + ?Sized>(&self, dom: &S) -> ScrollPosition {
        match &self.options.scrollable_area {
            ScrollArea::Window => dom.window_scroll(),
            ScrollArea::Node(node) => dom.node_scroll(node),
        }
    }

    /// Effective top offset for this tick. A deferred fixed offset is
    /// resolved fresh against live layout; container mode only honors a
    /// literal offset, added to the container's own top.
    fn effective_top_offset<S: Surface + ?Sized>(&self, dom: &S) -> f64 {
        match &self.options.scrollable_area {
            ScrollArea::Window => self.options.fixed_offset.resolve(dom),
            ScrollArea::Node(area) => dom.offset(area).top + self.options.fixed_offset.literal(),
        }
    }

    fn bind<S: Surface + ?Sized>(&self, dom: &mut S) {
        let area = self.area_source();
        dom.subscribe(Subscription {
            owner: self.id,
            source: area.clone(),
            kind: SignalKind::Scroll,
        });
        dom.subscribe(Subscription {
            owner: self.id,
            source: area,
            kind: SignalKind::Resize,
        });
        if let Some(proxy) = &self.proxy {
            dom.subscribe(Subscription {
                owner: self.id,
                source: SignalSource::Node(proxy.wrapper().clone()),
                kind: SignalKind::Scroll,
            });
            dom.subscribe(Subscription {
                owner: self.id,
                source: SignalSource::Node(proxy.scrollbar_pane().clone()),
                kind: SignalKind::Scroll,
            });
            // Visibility tracks window scrolling even in window mode.
            dom.subscribe(Subscription {
                owner: self.id,
                source: SignalSource::Window,
                kind: SignalKind::Scroll,
            });
        }
        if !self.window_scrolling() {
            dom.subscribe(Subscription {
                owner: self.id,
                source: SignalSource::Window,
                kind: SignalKind::Scroll,
            });
            dom.subscribe(Subscription {
                owner: self.id,
                source: SignalSource::Window,
                kind: SignalKind::Resize,
            });
        }
    }

    /// Evaluate geometry and drive the state machine. Idempotent: with
    /// unchanged geometry the same values are written and no transition
    /// fires.
    fn toggle<S: Surface + ?Sized>(&mut self, dom: &mut S) {
        let input = GeometryInput {
            window_scrolling: self.window_scrolling(),
            top_offset: self.effective_top_offset(dom),
            area_scroll: self.area_scroll(dom),
            table_offset: dom.offset(&self.table),
            table_height: dom.content_height(&self.table),
        };

        let cached = if self.options.cache_header_height {
            self.cached_header_height
        } else {
            None
        };
        let clone = &self.cloned_header;
        let measured = &*dom;
        let geometry = geometry::evaluate(&input, || {
            cached.unwrap_or_else(|| measured.content_height(clone))
        });

        if geometry.sticky {
            let left = input.table_offset.left - geometry.scroll_left + self.options.left_offset;
            dom.set_position(&self.original_header, Position::Fixed);
            dom.set_margin_top(&self.original_header, self.options.margin_top);
            dom.set_top(&self.original_header, 0.0);
            dom.set_left(&self.original_header, left);
            dom.set_z_index(&self.original_header, self.options.z_index);
            self.left_offset = left;
            self.top_offset = geometry.top_offset;
            dom.set_display(&self.cloned_header, Display::Default);

            if let Some(proxy) = &mut self.proxy {
                proxy.refresh_on_fixed(dom, &self.table, &self.original_header);
            }

            if self.state == Stickiness::Static {
                self.state = Stickiness::Fixed;
                debug!("controller {} stickiness enabled", self.id);
                // Static-mode layout may have changed since the last
                // mirror; re-capture before the header detaches visually.
                self.update_width(dom);
                self.notifications.push(Notification::StickinessEnabled);
            }
            self.refresh_position(dom);
        } else if self.state == Stickiness::Fixed {
            dom.set_position(&self.original_header, Position::Static);
            dom.set_display(&self.cloned_header, Display::Hidden);

            if let Some(proxy) = &mut self.proxy {
                proxy.hide(dom, &self.table, &self.original_header);
            }

            self.state = Stickiness::Static;
            width::reset(dom, &self.cloned_cells, &self.original_cells);
            if let Some(proxy) = &self.proxy {
                let content_cells = dom.header_cells(proxy.header_content());
                width::reset(dom, &self.cloned_cells, &content_cells);
                let scrollbar_cells = dom.header_cells(proxy.scrollbar_header());
                width::reset(dom, &self.cloned_cells, &scrollbar_cells);
            }
            debug!("controller {} stickiness disabled", self.id);
            self.notifications.push(Notification::StickinessDisabled);
        }
    }

    /// Mirror column widths from the clone onto every pinned surface.
    /// Static mode needs no mirroring; the original header still lays
    /// itself out.
    fn update_width<S: Surface + ?Sized>(&mut self, dom: &mut S) {
        if self.state != Stickiness::Fixed {
            return;
        }

        let collapsed = self
            .original_cells
            .first()
            .is_some_and(|cell| dom.border_collapsed(cell));
        let widths = width::measure(dom, &self.cloned_cells, collapsed);
        width::apply(dom, &widths, &self.original_cells);
        if let Some(proxy) = &self.proxy {
            let content_cells = dom.header_cells(proxy.header_content());
            width::apply(dom, &widths, &content_cells);
            let scrollbar_cells = dom.header_cells(proxy.scrollbar_header());
            width::apply(dom, &widths, &scrollbar_cells);
        }

        // Row width follows the whole clone, not the cell sum.
        let row_width = dom.content_width(&self.cloned_header);
        dom.set_width(&self.original_header, row_width);

        if self.options.cache_header_height {
            self.cached_header_height = Some(dom.content_height(&self.cloned_header));
        }
    }

    /// Re-derive the fixed header's absolute top/left from the window
    /// scroll position. Skipped entirely while over-scrolled so
    /// rubber-banding does not jitter the header.
    fn refresh_position<S: Surface + ?Sized>(&mut self, dom: &mut S) {
        if self.state != Stickiness::Fixed {
            return;
        }
        let scroll = dom.window_scroll();
        if !geometry::within_document_bounds(scroll, dom.viewport(), dom.document_size()) {
            return;
        }

        let (top_adjust, left_adjust) = if self.window_scrolling() {
            (0.0, 0.0)
        } else {
            (scroll.top, scroll.left)
        };
        dom.set_top(&self.original_header, self.top_offset - top_adjust);
        dom.set_left(&self.original_header, self.left_offset - left_adjust);

        if let Some(proxy) = &mut self.proxy {
            proxy.refresh_position(dom, scroll.left);
        }
    }
}
