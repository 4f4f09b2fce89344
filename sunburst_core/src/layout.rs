// Copyright 2025 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ring layout.
//!
//! A [`Layout`] is an arena of [`LayoutNode`]s in pre-order (parents before children). The
//! display root spans the full circle and owns the innermost disc; each deeper ring sits
//! directly outside its parent's ring and splits the parent's angular span between the
//! children in proportion to their values.
//!
//! Ring widths form a geometric series: with `scale > 1` every ring is `1 / scale` as thick
//! as the one inside it, and the series is normalized so the outermost ring ends at half the
//! chart size.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::Point;
use log::{debug, warn};
use peniko::Color;

use crate::color::ColorAllocator;
use crate::hit::find_node;
use crate::node::{NodePath, SunburstNode};
use crate::polar::cartesian_to_polar;

/// Index of a node inside a [`Layout`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayoutNodeId(usize);

impl LayoutNodeId {
    /// The display root of every layout.
    pub const ROOT: Self = Self(0);

    /// Position of this node in [`Layout::iter`] order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Angular span of a sector, in degrees clockwise from 12 o'clock.
///
/// For hit testing the span is `(start, end]`: a point on a shared boundary belongs to the
/// sector that ends there, not the one that starts there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Angles {
    /// Start angle (exclusive).
    pub start: f64,
    /// End angle (inclusive).
    pub end: f64,
    /// Angular width, `end - start`.
    pub abs: f64,
}

impl Angles {
    /// The whole circle, `[0, 360]`.
    pub const FULL: Self = Self {
        start: 0.0,
        end: 360.0,
        abs: 360.0,
    };

    /// Creates a span from its endpoints.
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            abs: end - start,
        }
    }

    /// Angle halfway through the span.
    pub fn mid(&self) -> f64 {
        self.start + 0.5 * self.abs
    }

    /// Returns `true` if the span covers the whole circle.
    pub fn is_full_circle(&self) -> bool {
        self.abs >= 360.0
    }

    /// Returns `true` if `angle` (in `[0, 360)`) falls inside `(start, end]`.
    ///
    /// 12 o'clock is both 0° and 360°, so it belongs to whichever non-empty span ends at 360°.
    pub fn contains(&self, angle: f64) -> bool {
        (self.start < angle && angle <= self.end)
            || (angle == 0.0 && self.end >= 360.0 && self.start < self.end)
    }
}

/// One laid-out node.
#[derive(Clone, Debug)]
pub struct LayoutNode {
    /// Location of the source node in the dataset.
    pub source: NodePath,
    /// Value copied from the source node.
    pub value: f64,
    /// Fill color.
    pub color: Color,
    /// Enclosing node, `None` for the display root.
    pub parent: Option<LayoutNodeId>,
    /// Angular span.
    pub angles: Angles,
    /// Inner radius of this node's ring.
    pub offset: f64,
    /// Radial thickness of this node's ring.
    pub width: f64,
    /// Ring index, 0 for the display root.
    pub depth: usize,
    /// Laid-out children in source order (skipped children are absent).
    pub children: Vec<LayoutNodeId>,
}

impl LayoutNode {
    /// Outer radius of this node's ring.
    pub fn outer_radius(&self) -> f64 {
        self.offset + self.width
    }
}

/// Inputs for [`Layout::compute`].
#[derive(Clone, Debug)]
pub struct LayoutOptions {
    /// Chart diameter; the outermost ring ends at `size / 2`.
    pub size: f64,
    /// Ratio between the widths of consecutive rings (1 keeps rings uniform).
    pub scale: f64,
    /// Location of the laid-out root inside the dataset.
    pub base: NodePath,
    /// Colors to keep for nodes that were already drawn, keyed by dataset path.
    pub carried_colors: HashMap<NodePath, Color>,
}

impl LayoutOptions {
    /// Creates options for a chart of the given diameter.
    pub fn new(size: f64) -> Self {
        Self {
            size,
            scale: 1.0,
            base: NodePath::root(),
            carried_colors: HashMap::new(),
        }
    }

    /// Sets the ring width ratio.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the dataset path of the node being laid out.
    pub fn with_base(mut self, base: NodePath) -> Self {
        self.base = base;
        self
    }

    /// Sets colors to reuse for already-drawn nodes.
    pub fn with_carried_colors(mut self, colors: HashMap<NodePath, Color>) -> Self {
        self.carried_colors = colors;
        self
    }

    /// The scale actually used: non-positive or non-finite values fall back to 1.
    pub fn effective_scale(&self) -> f64 {
        if self.scale.is_finite() && self.scale > 0.0 {
            self.scale
        } else {
            1.0
        }
    }
}

/// Width of the innermost ring for a chart of diameter `size` with `depth` rings.
///
/// Solves `size / 2 = w * (1 + 1/scale + ... + 1/scale^(depth-1))` for `w`.
pub fn root_ring_width(size: f64, scale: f64, depth: usize) -> f64 {
    let mut sum = 0.0;
    let mut term = 1.0;
    for _ in 0..depth.max(1) {
        sum += term;
        term /= scale;
    }
    size / 2.0 / sum
}

/// The computed geometry for one display root.
#[derive(Clone, Debug)]
pub struct Layout {
    nodes: Vec<LayoutNode>,
    max_depth: usize,
}

impl Layout {
    /// Lays out `root` and its descendants.
    ///
    /// Colors are taken from the node itself, then from `options.carried_colors`, then from
    /// `colors`, visiting nodes in pre-order.
    pub fn compute(
        root: &SunburstNode,
        options: &LayoutOptions,
        colors: &mut ColorAllocator,
    ) -> Self {
        let scale = options.effective_scale();
        let max_depth = max_depth(root);
        let root_width = root_ring_width(options.size, scale, max_depth);

        let mut builder = Builder {
            nodes: Vec::new(),
            scale,
            carried: &options.carried_colors,
            colors,
        };
        let color = builder.pick_color(root, &options.base);
        builder.nodes.push(LayoutNode {
            source: options.base.clone(),
            value: root.value,
            color,
            parent: None,
            angles: Angles::FULL,
            offset: 0.0,
            width: root_width,
            depth: 0,
            children: Vec::new(),
        });
        builder.lay_out_children(root, LayoutNodeId::ROOT);

        debug!(
            "laid out {} nodes from {} ({} rings, root width {root_width})",
            builder.nodes.len(),
            options.base,
            max_depth,
        );
        Self {
            nodes: builder.nodes,
            max_depth,
        }
    }

    /// The display root.
    pub fn root(&self) -> &LayoutNode {
        &self.nodes[0]
    }

    /// Looks up a node.
    ///
    /// Panics if `id` does not belong to this layout.
    pub fn get(&self, id: LayoutNodeId) -> &LayoutNode {
        &self.nodes[id.0]
    }

    /// Number of laid-out nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a layout contains at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of rings.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Width of the innermost ring.
    pub fn root_width(&self) -> f64 {
        self.root().width
    }

    /// Iterates nodes in pre-order.
    pub fn iter(&self) -> impl Iterator<Item = (LayoutNodeId, &LayoutNode)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (LayoutNodeId(i), node))
    }

    /// Children of `id`, in source order.
    pub fn children(&self, id: LayoutNodeId) -> &[LayoutNodeId] {
        &self.get(id).children
    }

    /// Parent of `id`.
    pub fn parent(&self, id: LayoutNodeId) -> Option<LayoutNodeId> {
        self.get(id).parent
    }

    /// Walks from `id`'s parent up to the display root.
    pub fn ancestors(&self, id: LayoutNodeId) -> impl Iterator<Item = LayoutNodeId> + '_ {
        core::iter::successors(self.parent(id), move |&p| self.parent(p))
    }

    /// Finds the node laid out for a dataset path.
    pub fn find_by_path(&self, path: &NodePath) -> Option<LayoutNodeId> {
        self.iter()
            .find(|(_, node)| node.source == *path)
            .map(|(id, _)| id)
    }

    /// Colors of every laid-out node, keyed by dataset path.
    pub fn colors_by_path(&self) -> HashMap<NodePath, Color> {
        self.nodes
            .iter()
            .map(|node| (node.source.clone(), node.color))
            .collect()
    }

    /// Resolves a cartesian point to the node drawn under it, for a chart centered at `origin`.
    pub fn node_at(&self, point: Point, origin: Point) -> Option<LayoutNodeId> {
        find_node(cartesian_to_polar(point, origin)?, self)
    }
}

struct Builder<'a> {
    nodes: Vec<LayoutNode>,
    scale: f64,
    carried: &'a HashMap<NodePath, Color>,
    colors: &'a mut ColorAllocator,
}

impl Builder<'_> {
    fn pick_color(&mut self, node: &SunburstNode, path: &NodePath) -> Color {
        node.color
            .or_else(|| self.carried.get(path).copied())
            .unwrap_or_else(|| self.colors.next_color())
    }

    fn lay_out_children(&mut self, node: &SunburstNode, id: LayoutNodeId) {
        let parent = &self.nodes[id.0];
        let Angles { start, end, .. } = parent.angles;
        let offset = parent.outer_radius();
        let width = parent.width / self.scale;
        let depth = parent.depth + 1;
        let path = parent.source.clone();

        let mut admitted = Vec::with_capacity(node.children.len());
        for (index, child) in node.children.iter().enumerate() {
            if node.admits(child) {
                admitted.push((index, child));
            } else {
                warn!(
                    "skipping child {} of {path}: value {} does not fit parent value {}",
                    index, child.value, node.value,
                );
            }
        }

        let total: f64 = admitted.iter().map(|(_, child)| child.value).sum();
        let span = end - start;
        let mut consumed = 0.0;
        let mut cursor = start;
        for (index, child) in admitted {
            consumed += child.value;
            // The last non-empty child ends exactly on the parent's end angle.
            let child_end = if total <= 0.0 {
                start
            } else if consumed >= total {
                end
            } else {
                start + span * consumed / total
            };

            let source = path.child(index);
            let color = self.pick_color(child, &source);
            let child_id = LayoutNodeId(self.nodes.len());
            self.nodes.push(LayoutNode {
                source,
                value: child.value,
                color,
                parent: Some(id),
                angles: Angles::new(cursor, child_end),
                offset,
                width,
                depth,
                children: Vec::new(),
            });
            self.nodes[id.0].children.push(child_id);
            self.lay_out_children(child, child_id);
            cursor = child_end;
        }
    }
}

/// Number of rings needed to draw `node` and its admitted descendants.
fn max_depth(node: &SunburstNode) -> usize {
    1 + node
        .children
        .iter()
        .filter(|child| node.admits(child))
        .map(max_depth)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    fn compute(root: &SunburstNode, options: &LayoutOptions) -> Layout {
        Layout::compute(root, options, &mut ColorAllocator::new())
    }

    #[test]
    fn root_spans_the_full_circle() {
        let layout = compute(&SunburstNode::leaf(5.0), &LayoutOptions::new(100.0));
        assert_eq!(layout.len(), 1);
        assert_eq!(layout.root().angles, Angles::FULL);
        assert_close(layout.root().offset, 0.0);
        assert_close(layout.root().width, 50.0);
        assert!(layout.root().children.is_empty());
        assert_eq!(layout.max_depth(), 1);
    }

    #[test]
    fn uniform_rings_when_scale_is_one() {
        let data = SunburstNode::new(
            4.0,
            vec![SunburstNode::new(4.0, vec![SunburstNode::leaf(4.0)])],
        );
        let layout = compute(&data, &LayoutOptions::new(300.0));
        assert_eq!(layout.max_depth(), 3);
        for (_, node) in layout.iter() {
            assert_close(node.width, 50.0);
            assert_close(node.offset, 50.0 * node.depth as f64);
        }
    }

    #[test]
    fn rings_halve_with_scale_two() {
        let data = SunburstNode::new(
            1.0,
            vec![SunburstNode::new(1.0, vec![SunburstNode::leaf(1.0)])],
        );
        let layout = compute(&data, &LayoutOptions::new(140.0).with_scale(2.0));
        // 70 = w * (1 + 1/2 + 1/4)
        assert_close(layout.root_width(), 40.0);

        let chain: Vec<_> = layout.iter().map(|(_, n)| n).collect();
        assert_eq!(chain.len(), 3);
        assert_close(chain[1].width, chain[0].width / 2.0);
        assert_close(chain[2].width, chain[1].width / 2.0);
        assert_close(chain[2].outer_radius(), 70.0);
        assert!(chain[0].offset < chain[1].offset && chain[1].offset < chain[2].offset);
    }

    #[test]
    fn children_split_parent_span_by_value() {
        let data = SunburstNode::new(
            10.0,
            vec![
                SunburstNode::leaf(1.0),
                SunburstNode::leaf(3.0),
                SunburstNode::leaf(4.0),
            ],
        );
        let layout = compute(&data, &LayoutOptions::new(100.0));
        let kids = layout.children(LayoutNodeId::ROOT);
        assert_eq!(kids.len(), 3);

        let a = layout.get(kids[0]).angles;
        let b = layout.get(kids[1]).angles;
        let c = layout.get(kids[2]).angles;
        assert_close(a.start, 0.0);
        assert_close(a.abs, 45.0);
        assert_eq!(b.start, a.end);
        assert_close(b.abs, 135.0);
        assert_eq!(c.start, b.end);
        assert_eq!(c.end, 360.0);
    }

    #[test]
    fn oversized_child_is_skipped() {
        let data = SunburstNode::new(
            10.0,
            vec![SunburstNode::leaf(5.0), SunburstNode::leaf(20.0)],
        );
        let layout = compute(&data, &LayoutOptions::new(100.0));
        let kids = layout.children(LayoutNodeId::ROOT);
        assert_eq!(kids.len(), 1);
        let only = layout.get(kids[0]);
        assert_eq!(only.value, 5.0);
        assert_eq!(only.source, NodePath::from_indices([0]));
        assert_eq!(only.angles, Angles::FULL);
        assert!(layout.find_by_path(&NodePath::from_indices([1])).is_none());
    }

    #[test]
    fn skipped_subtrees_do_not_add_rings() {
        let data = SunburstNode::new(
            10.0,
            vec![
                SunburstNode::leaf(5.0),
                SunburstNode::new(20.0, vec![SunburstNode::leaf(1.0)]),
            ],
        );
        let layout = compute(&data, &LayoutOptions::new(100.0));
        assert_eq!(layout.max_depth(), 2);
        assert_close(layout.root_width(), 25.0);
    }

    #[test]
    fn nested_oversized_child_is_skipped() {
        let data = SunburstNode::new(
            10.0,
            vec![SunburstNode::new(
                4.0,
                vec![SunburstNode::leaf(5.0), SunburstNode::leaf(2.0)],
            )],
        );
        let layout = compute(&data, &LayoutOptions::new(100.0));
        let child = layout.children(LayoutNodeId::ROOT)[0];
        let grandkids = layout.children(child);
        assert_eq!(grandkids.len(), 1);
        assert_eq!(
            layout.get(grandkids[0]).source,
            NodePath::from_indices([0, 1])
        );
    }

    #[test]
    fn zero_valued_children_get_empty_spans() {
        let data = SunburstNode::new(
            5.0,
            vec![SunburstNode::leaf(0.0), SunburstNode::leaf(0.0)],
        );
        let layout = compute(&data, &LayoutOptions::new(100.0));
        for &kid in layout.children(LayoutNodeId::ROOT) {
            let angles = layout.get(kid).angles;
            assert_eq!(angles.start, 0.0);
            assert_eq!(angles.abs, 0.0);
        }

        let data = SunburstNode::new(
            5.0,
            vec![SunburstNode::leaf(5.0), SunburstNode::leaf(0.0)],
        );
        let layout = compute(&data, &LayoutOptions::new(100.0));
        let kids = layout.children(LayoutNodeId::ROOT);
        assert_eq!(layout.get(kids[0]).angles, Angles::FULL);
        assert_eq!(layout.get(kids[1]).angles, Angles::new(360.0, 360.0));
    }

    #[test]
    fn base_prefixes_source_paths() {
        let data = SunburstNode::new(3.0, vec![SunburstNode::leaf(1.0)]);
        let base = NodePath::from_indices([2, 1]);
        let layout = compute(&data, &LayoutOptions::new(10.0).with_base(base.clone()));
        assert_eq!(layout.root().source, base);
        assert_eq!(
            layout.get(layout.children(LayoutNodeId::ROOT)[0]).source,
            base.child(0)
        );
    }

    #[test]
    fn colors_prefer_explicit_then_carried_then_palette() {
        let explicit = Color::from_rgb8(1, 2, 3);
        let carried = Color::from_rgb8(4, 5, 6);
        let data = SunburstNode::new(
            3.0,
            vec![
                SunburstNode::leaf(1.0).with_color(explicit),
                SunburstNode::leaf(1.0),
                SunburstNode::leaf(1.0),
            ],
        );
        let mut carry = HashMap::new();
        carry.insert(NodePath::from_indices([1]), carried);
        carry.insert(NodePath::from_indices([0]), carried);

        let mut colors = ColorAllocator::new();
        let layout = Layout::compute(
            &data,
            &LayoutOptions::new(10.0).with_carried_colors(carry),
            &mut colors,
        );
        let palette = crate::default_palette();
        let kids = layout.children(LayoutNodeId::ROOT);
        assert_eq!(layout.root().color.to_rgba8(), palette[0].to_rgba8());
        assert_eq!(layout.get(kids[0]).color.to_rgba8(), explicit.to_rgba8());
        assert_eq!(layout.get(kids[1]).color.to_rgba8(), carried.to_rgba8());
        assert_eq!(layout.get(kids[2]).color.to_rgba8(), palette[1].to_rgba8());
        assert_eq!(colors.cursor(), 2);
    }

    #[test]
    fn colors_are_assigned_in_pre_order() {
        let data = SunburstNode::new(
            2.0,
            vec![
                SunburstNode::new(1.0, vec![SunburstNode::leaf(1.0)]),
                SunburstNode::leaf(1.0),
            ],
        );
        let layout = compute(&data, &LayoutOptions::new(10.0));
        let palette = crate::default_palette();
        let got: Vec<_> = layout.iter().map(|(_, n)| n.color.to_rgba8()).collect();
        let want: Vec<_> = palette[..4].iter().map(|c| c.to_rgba8()).collect();
        assert_eq!(got, want);
        assert_eq!(
            layout.get(LayoutNodeId(2)).source,
            NodePath::from_indices([0, 0])
        );
    }

    #[test]
    fn ancestors_walk_to_root() {
        let data = SunburstNode::new(
            1.0,
            vec![SunburstNode::new(1.0, vec![SunburstNode::leaf(1.0)])],
        );
        let layout = compute(&data, &LayoutOptions::new(10.0));
        let leaf = layout
            .find_by_path(&NodePath::from_indices([0, 0]))
            .expect("leaf");
        let up: Vec<_> = layout.ancestors(leaf).collect();
        assert_eq!(up, vec![LayoutNodeId(1), LayoutNodeId::ROOT]);
        assert_eq!(layout.parent(LayoutNodeId::ROOT), None);
    }

    #[test]
    fn invalid_scale_falls_back_to_uniform_rings() {
        assert_eq!(LayoutOptions::new(1.0).with_scale(0.0).effective_scale(), 1.0);
        assert_eq!(LayoutOptions::new(1.0).with_scale(-2.0).effective_scale(), 1.0);
        assert_eq!(
            LayoutOptions::new(1.0).with_scale(f64::NAN).effective_scale(),
            1.0
        );
        assert_eq!(LayoutOptions::new(1.0).with_scale(1.5).effective_scale(), 1.5);
    }

    #[test]
    fn angles_contains_is_start_exclusive_end_inclusive() {
        let a = Angles::new(90.0, 180.0);
        assert!(!a.contains(90.0));
        assert!(a.contains(90.5));
        assert!(a.contains(180.0));
        assert!(!a.contains(180.5));
        assert!(!a.contains(0.0));

        assert!(Angles::FULL.contains(0.0));
        assert!(Angles::new(270.0, 360.0).contains(0.0));
        assert!(!Angles::new(0.0, 90.0).contains(0.0));
    }
}
