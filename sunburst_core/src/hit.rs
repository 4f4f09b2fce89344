// Copyright 2025 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point-in-sector hit testing.

use crate::layout::{Layout, LayoutNodeId};
use crate::polar::PolarPoint;

/// Returns the node whose sector contains `point`, if any.
///
/// The search starts at the display root and only descends into a node's children when the
/// point lies outside that node's ring. Within a ring, the radial band is `(offset, offset +
/// width]` and the angular band is `(start, end]`.
pub fn find_node(point: PolarPoint, layout: &Layout) -> Option<LayoutNodeId> {
    find_in(layout, LayoutNodeId::ROOT, point)
}

fn find_in(layout: &Layout, id: LayoutNodeId, point: PolarPoint) -> Option<LayoutNodeId> {
    let node = layout.get(id);
    if point.dist <= node.offset {
        return None;
    }
    if point.dist <= node.outer_radius() {
        return node.angles.contains(point.angle).then_some(id);
    }
    node.children
        .iter()
        .find_map(|&child| find_in(layout, child, point))
}
