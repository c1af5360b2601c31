//! Horizontal scroll proxy: an always-visible scrollbar and header overlay
//! for a horizontally-scrollable table wrapper whose native scrollbar may
//! be off-screen.
//!
//! Fixed positioning disables overflow clipping on the same element, so
//! each overlay is a two-layer construction: a fixed outer container and a
//! relative, clipped inner pane. One pair mirrors the sticky header
//! content, the other exposes just a scrollbar sized to the wrapper.

use log::debug;
use palette::Srgba;

use crate::options::Options;
use crate::surface::{NodeId, Surface};
use crate::types::{Display, Overflow, Position};

/// Height of the scrollbar pane: enough for the bar, nothing else.
pub const SCROLLBAR_PANE_HEIGHT: f64 = 19.0;

fn opaque_white() -> Srgba<u8> {
    Srgba::new(255, 255, 255, 255)
}

/// Overlay surfaces synchronized with a secondary scrollable wrapper.
///
/// Built once at attach, only when both the wrapper and the sticky header
/// content element are configured; lives exactly as long as the
/// controller.
#[derive(Debug)]
pub struct HorizontalProxy {
    wrapper: NodeId,
    header_content: NodeId,
    head_container: NodeId,
    head_pane: NodeId,
    scrollbar_container: NodeId,
    scrollbar_pane: NodeId,
    /// Body-stripped clone of the table; gives the scrollbar pane the full
    /// table width to scroll over.
    scrollbar_header: NodeId,
    /// Last applied header-content left, so re-applying an equal offset is
    /// a no-op.
    last_content_left: Option<f64>,
}

impl HorizontalProxy {
    /// Build the overlay surfaces, or `None` when the configuration does
    /// not enable the subsystem. Absence of configuration is feature
    /// detection, not a failure.
    pub fn build<S: Surface + ?Sized>(
        dom: &mut S,
        table: &NodeId,
        options: &Options,
    ) -> Option<Self> {
        let wrapper = options.horizontal_scrolling_area.clone()?;
        let header_content = options.sticky_header_content.clone()?;

        let table_left = dom.offset(table).left;
        let wrapper_width = dom.content_width(&wrapper);
        let z = options.z_index + options.z_index_offset;

        let head_container = dom.create_container();
        dom.set_position(&head_container, Position::Fixed);
        dom.set_top(&head_container, 0.0);
        dom.set_left(&head_container, table_left);
        dom.set_display(&head_container, Display::Hidden);
        dom.set_z_index(&head_container, z);
        dom.append_to_root(&head_container);

        let head_pane = dom.create_container();
        dom.set_width(&head_pane, wrapper_width);
        dom.append_child(&head_container, &head_pane);
        dom.append_child(&head_pane, &header_content);
        dom.set_position(&header_content, Position::Relative);

        let scrollbar_header = dom.clone_subtree(table);
        dom.strip_body(&scrollbar_header);

        let scrollbar_container = dom.create_container();
        dom.set_position(&scrollbar_container, Position::Fixed);
        dom.set_bottom(&scrollbar_container, 0.0);
        dom.set_left(&scrollbar_container, table_left);
        dom.set_display(&scrollbar_container, Display::Hidden);
        dom.set_z_index(&scrollbar_container, z);
        dom.append_to_root(&scrollbar_container);

        let scrollbar_pane = dom.create_container();
        dom.set_overflow(&scrollbar_pane, Overflow::Auto, Overflow::Hidden);
        dom.set_height(&scrollbar_pane, SCROLLBAR_PANE_HEIGHT);
        dom.set_width(&scrollbar_pane, wrapper_width);
        dom.append_child(&scrollbar_container, &scrollbar_pane);
        dom.append_child(&scrollbar_pane, &scrollbar_header);
        dom.set_position(&scrollbar_header, Position::Relative);

        if let Some(hidden) = &options.sticky_header_hidden {
            // An element behind the overlay must not show through it:
            // elevate it and give it an opaque background.
            let background = dom
                .computed_background(hidden)
                .filter(|color| color.alpha > 0)
                .unwrap_or_else(opaque_white);
            dom.set_position(hidden, Position::Relative);
            dom.set_z_index(hidden, z + 1);
            dom.set_background(hidden, background);
        }

        Some(Self {
            wrapper,
            header_content,
            head_container,
            head_pane,
            scrollbar_container,
            scrollbar_pane,
            scrollbar_header,
            last_content_left: None,
        })
    }

    pub fn wrapper(&self) -> &NodeId {
        &self.wrapper
    }

    pub fn header_content(&self) -> &NodeId {
        &self.header_content
    }

    pub fn head_container(&self) -> &NodeId {
        &self.head_container
    }

    pub fn scrollbar_container(&self) -> &NodeId {
        &self.scrollbar_container
    }

    pub fn scrollbar_pane(&self) -> &NodeId {
        &self.scrollbar_pane
    }

    pub fn scrollbar_header(&self) -> &NodeId {
        &self.scrollbar_header
    }

    /// The real wrapper scrolled: mirror its offset onto the scrollbar
    /// pane and shift the header content the opposite way.
    pub fn sync_from_wrapper<S: Surface + ?Sized>(&mut self, dom: &mut S) {
        let left = dom.node_scroll(&self.wrapper).left;
        if dom.node_scroll(&self.scrollbar_pane).left != left {
            dom.set_scroll_left(&self.scrollbar_pane, left);
        }
        self.shift_content(dom, left);
    }

    /// The scrollbar pane scrolled: copy back to the real wrapper and
    /// shift the header content.
    pub fn sync_from_scrollbar<S: Surface + ?Sized>(&mut self, dom: &mut S) {
        let left = dom.node_scroll(&self.scrollbar_pane).left;
        if dom.node_scroll(&self.wrapper).left != left {
            dom.set_scroll_left(&self.wrapper, left);
        }
        self.shift_content(dom, left);
    }

    fn shift_content<S: Surface + ?Sized>(&mut self, dom: &mut S, scroll_left: f64) {
        let content_left = -scroll_left;
        if self.last_content_left == Some(content_left) {
            return;
        }
        dom.set_left(&self.header_content, content_left);
        self.last_content_left = Some(content_left);
    }

    /// FIXED-entry refresh: re-size both panes to the wrapper and reveal
    /// the header overlay.
    pub fn refresh_on_fixed<S: Surface + ?Sized>(
        &mut self,
        dom: &mut S,
        table: &NodeId,
        header: &NodeId,
    ) {
        let width = dom.content_width(&self.wrapper);
        dom.set_width(&self.head_pane, width);
        dom.set_width(&self.scrollbar_pane, width);
        dom.set_display(&self.head_container, Display::Default);
        self.refresh_visibility(dom, table, header);
    }

    /// FIXED-exit: hide the header overlay and re-evaluate the scrollbar.
    pub fn hide<S: Surface + ?Sized>(&mut self, dom: &mut S, table: &NodeId, header: &NodeId) {
        dom.set_display(&self.head_container, Display::Hidden);
        self.refresh_visibility(dom, table, header);
    }

    /// Re-evaluate scrollbar-proxy visibility. Runs on every window-scroll
    /// tick, independent of vertical stickiness.
    ///
    /// Visible iff the wrapper actually overflows (its rendered width is
    /// smaller than the table's full width) and the wrapper intersects the
    /// viewport: its top edge is on screen, or it spans the whole screen.
    pub fn refresh_visibility<S: Surface + ?Sized>(
        &mut self,
        dom: &mut S,
        table: &NodeId,
        header: &NodeId,
    ) {
        if dom.content_width(&self.wrapper) >= dom.content_width(table) {
            dom.set_display(&self.scrollbar_container, Display::Hidden);
            return;
        }

        let wrapper_top = dom.offset(&self.wrapper).top;
        // Position once the header row is past, not the raw wrapper edge.
        let view_top = wrapper_top + dom.content_height(header);
        let view_bottom = wrapper_top + dom.content_height(&self.wrapper);
        let window_top = dom.window_scroll().top;
        let window_bottom = window_top + dom.viewport().height;

        let visible = (window_top < view_top && view_top < window_bottom)
            || (view_top < window_top && window_bottom < view_bottom);
        debug!("scrollbar proxy visibility: {visible}");
        dom.set_display(
            &self.scrollbar_container,
            if visible {
                Display::Default
            } else {
                Display::Hidden
            },
        );
    }

    /// Track window horizontal scrolling: all proxy surfaces sit at the
    /// wrapper's offset-left minus the window scroll-left.
    pub fn refresh_position<S: Surface + ?Sized>(&mut self, dom: &mut S, window_scroll_left: f64) {
        let left = dom.offset(&self.wrapper).left - window_scroll_left;
        dom.set_left(&self.head_container, left);
        dom.set_left(&self.head_pane, left);
        dom.set_left(&self.scrollbar_container, left);
        dom.set_left(&self.scrollbar_pane, left);
    }

    /// Remove the overlay surfaces from the document.
    pub fn teardown<S: Surface + ?Sized>(self, dom: &mut S) {
        dom.remove(&self.head_container);
        dom.remove(&self.scrollbar_container);
    }
}
