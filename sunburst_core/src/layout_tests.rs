// Copyright 2025 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::vec;
use alloc::vec::Vec;

use kurbo::Point;

use crate::{
    ColorAllocator, Layout, LayoutNodeId, LayoutOptions, NodePath, SunburstNode,
    polar_to_cartesian,
};

fn lay_out(data: &SunburstNode, size: f64, scale: f64) -> Layout {
    Layout::compute(
        data,
        &LayoutOptions::new(size).with_scale(scale),
        &mut ColorAllocator::new(),
    )
}

#[test]
fn root_is_always_full_circle() {
    let data = SunburstNode::new(
        3.0,
        vec![SunburstNode::leaf(1.0), SunburstNode::leaf(2.0)],
    );
    let layout = lay_out(&data, 100.0, 1.618);
    assert_eq!(layout.root().angles.start, 0.0);
    assert_eq!(layout.root().angles.end, 360.0);
}

#[test]
fn re_rooting_restarts_depth_at_the_new_root() {
    let data = SunburstNode::new(
        10.0,
        vec![
            SunburstNode::new(
                6.0,
                vec![SunburstNode::new(6.0, vec![SunburstNode::leaf(1.0)])],
            ),
            SunburstNode::leaf(4.0),
        ],
    );
    let mut colors = ColorAllocator::new();
    let full = Layout::compute(&data, &LayoutOptions::new(200.0), &mut colors);
    assert_eq!(full.max_depth(), 4);

    let base = NodePath::from_indices([0]);
    let sub = data.get(&base).expect("subtree");
    let zoomed = Layout::compute(
        sub,
        &LayoutOptions::new(200.0)
            .with_base(base.clone())
            .with_carried_colors(full.colors_by_path()),
        &mut colors,
    );
    assert_eq!(zoomed.max_depth(), 3);
    assert_eq!(zoomed.root().source, base);
    assert_eq!(zoomed.root().depth, 0);
    assert_eq!(zoomed.root().angles.abs, 360.0);

    // Every node kept its color; no new colors were drawn from the palette.
    let cursor = colors.cursor();
    for (_, node) in zoomed.iter() {
        let before = full.find_by_path(&node.source).expect("present before zoom");
        assert_eq!(
            full.get(before).color.to_rgba8(),
            node.color.to_rgba8(),
            "{} was recolored",
            node.source
        );
    }
    assert_eq!(colors.cursor(), cursor);
    assert_eq!(zoomed.find_by_path(&NodePath::from_indices([1])), None);
}

#[test]
fn hit_testing_follows_the_zoomed_layout() {
    let data = SunburstNode::new(
        4.0,
        vec![
            SunburstNode::new(2.0, vec![SunburstNode::leaf(1.0), SunburstNode::leaf(1.0)]),
            SunburstNode::leaf(2.0),
        ],
    );
    let base = NodePath::from_indices([0]);
    let zoomed = Layout::compute(
        data.get(&base).expect("subtree"),
        &LayoutOptions::new(100.0).with_base(base),
        &mut ColorAllocator::new(),
    );
    let origin = Point::new(50.0, 50.0);
    // The second grandchild now covers the left half of the outer ring.
    let p = polar_to_cartesian(origin, 40.0, 270.0);
    let id = zoomed.node_at(p, origin).expect("outer ring");
    assert_eq!(zoomed.get(id).source, NodePath::from_indices([0, 1]));
    assert_eq!(zoomed.ancestors(id).collect::<Vec<_>>(), vec![LayoutNodeId::ROOT]);
}
