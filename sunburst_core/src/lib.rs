// Copyright 2025 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sunburst (radial partition) layout for weighted trees.
//!
//! This crate turns a tree of weighted [`SunburstNode`]s into ring geometry and back:
//! - **Layout** assigns every node an angular span, a ring offset/width and a fill color.
//! - **Paths** describe a laid-out node as a closed annular-sector outline.
//! - **Hit testing** resolves a polar point to the node whose sector contains it.
//!
//! Nothing here talks to a rendering surface. Angles are in degrees, measured clockwise from
//! 12 o'clock, in a y-down coordinate space.
//!
//! ```
//! use kurbo::Point;
//! use sunburst_core::{ColorAllocator, Layout, LayoutOptions, SunburstNode, describe_arc};
//!
//! let data = SunburstNode::new(
//!     10.0,
//!     vec![SunburstNode::leaf(4.0), SunburstNode::leaf(6.0)],
//! );
//! let mut colors = ColorAllocator::new();
//! let layout = Layout::compute(&data, &LayoutOptions::new(200.0), &mut colors);
//!
//! let origin = Point::new(100.0, 100.0);
//! for (_id, node) in layout.iter() {
//!     let d = describe_arc(node, origin).to_svg();
//!     assert!(d.starts_with('M'));
//! }
//! ```

#![no_std]

extern crate alloc;

mod color;
#[cfg(not(feature = "std"))]
mod float;
mod hit;
mod layout;
#[cfg(test)]
mod layout_tests;
mod node;
mod path;
mod polar;

pub use color::{ColorAllocator, default_palette};
pub use hit::find_node;
pub use layout::{Angles, Layout, LayoutNode, LayoutNodeId, LayoutOptions, root_ring_width};
pub use node::{NodePath, SunburstNode};
pub use path::{ArcPath, PathCommand, describe_arc};
pub use polar::{PolarPoint, cartesian_to_polar, polar_to_cartesian};
