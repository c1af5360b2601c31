//! Column-width mirroring across duplicated header surfaces.
//!
//! The floating clone is the measurement source of truth: it is the only
//! header surface whose layout is never overridden by live positioning, so
//! its cells carry the widths the table's own sizing produced.

use log::debug;

use crate::surface::{NodeId, Surface};
use crate::types::{BoxSizing, WidthBounds};

/// Ordered per-column pixel widths captured from the clone.
///
/// Never persisted between mirror calls; always recomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnWidths(Vec<f64>);

impl ColumnWidths {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// Measure per-column widths on the clone's cells.
///
/// Policy, in order:
/// 1. Border-inclusive sizing: the rendered bounding width is the width.
/// 2. Collapsed-border table model: the resolved style width when the
///    surface reports one, otherwise `outer − paddings − border`. This
///    fallback assumes uniform borders around the cell and its neighbours
///    and is knowingly approximate under nested border configurations.
/// 3. Plain content width.
///
/// `collapsed_borders` is resolved once by the caller, from the original
/// header's first cell.
pub fn measure<S: Surface + ?Sized>(
    dom: &S,
    cells: &[NodeId],
    collapsed_borders: bool,
) -> ColumnWidths {
    let mut widths = Vec::with_capacity(cells.len());
    for cell in cells {
        let width = if dom.box_sizing(cell) == BoxSizing::BorderBox {
            dom.bounding_width(cell)
        } else if collapsed_borders {
            match dom.computed_width(cell) {
                Some(width) => width,
                None => {
                    let (left, right) = dom.horizontal_padding(cell);
                    dom.outer_width(cell) - left - right - dom.border_width(cell)
                }
            }
        } else {
            dom.content_width(cell)
        };
        widths.push(width);
    }
    ColumnWidths(widths)
}

/// Pin each target cell to the captured width via min/max bounds.
///
/// Pairing is positional; surplus targets are left untouched.
pub fn apply<S: Surface + ?Sized>(dom: &mut S, widths: &ColumnWidths, targets: &[NodeId]) {
    debug!("mirroring {} column widths", widths.len());
    for (target, width) in targets.iter().zip(widths.0.iter()) {
        dom.set_width_bounds(target, WidthBounds::pinned(*width));
    }
}

/// Release pixel pinning: each target's min/max width overrides are
/// replaced with the reference cells' own current bounds.
pub fn reset<S: Surface + ?Sized>(dom: &mut S, reference: &[NodeId], targets: &[NodeId]) {
    for (source, target) in reference.iter().zip(targets.iter()) {
        let bounds = dom.width_bounds(source);
        dom.set_width_bounds(target, bounds);
    }
}
