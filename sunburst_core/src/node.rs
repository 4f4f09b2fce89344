// Copyright 2025 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input tree and node addressing.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use peniko::Color;
use smallvec::SmallVec;

/// A weighted node of the input hierarchy.
///
/// The layout only ever reads this tree. A child whose `value` exceeds its parent's `value`
/// is reported and left out of the layout.
#[derive(Clone, Debug, Default)]
pub struct SunburstNode {
    /// Non-negative weight of this node.
    pub value: f64,
    /// Explicit fill color; when `None` the layout picks one from its palette.
    pub color: Option<Color>,
    /// Optional display name (used for tooltips and diagnostics).
    pub label: Option<String>,
    /// Ordered children, possibly empty.
    pub children: Vec<Self>,
}

impl SunburstNode {
    /// Creates a node with the given children.
    pub fn new(value: f64, children: Vec<Self>) -> Self {
        Self {
            value,
            color: None,
            label: None,
            children,
        }
    }

    /// Creates a node without children.
    pub fn leaf(value: f64) -> Self {
        Self::new(value, Vec::new())
    }

    /// Sets an explicit fill color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Appends a child.
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Resolves a path relative to this node.
    pub fn get(&self, path: &NodePath) -> Option<&Self> {
        let mut node = self;
        for &index in path.indices() {
            node = node.children.get(index)?;
        }
        Some(node)
    }

    /// Returns `true` if `child` may be laid out inside this node.
    ///
    /// A child is rejected when its value is negative, not a number, or larger than ours.
    pub fn admits(&self, child: &Self) -> bool {
        child.value >= 0.0 && child.value <= self.value
    }
}

/// Location of a node inside the input tree, as child indices from the dataset root.
///
/// The empty path addresses the dataset root itself.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodePath(SmallVec<[usize; 8]>);

impl NodePath {
    /// The dataset root.
    pub fn root() -> Self {
        Self(SmallVec::new())
    }

    /// Builds a path from child indices.
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        Self(indices.into_iter().collect())
    }

    /// Returns `true` for the dataset root.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of steps from the dataset root.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Child indices from the dataset root.
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Path of the `index`-th child of this node.
    pub fn child(&self, index: usize) -> Self {
        let mut out = self.clone();
        out.0.push(index);
        out
    }

    /// Path of the parent node, or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.0.split_last()?;
        Some(Self(rest.iter().copied().collect()))
    }

    /// Appends a relative path to this one.
    pub fn join(&self, relative: &Self) -> Self {
        let mut out = self.clone();
        out.0.extend_from_slice(&relative.0);
        out
    }

    /// Returns `true` if `prefix` is this path or one of its ancestors.
    pub fn starts_with(&self, prefix: &Self) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("/");
        }
        for index in &self.0 {
            write!(f, "/{index}")?;
        }
        Ok(())
    }
}
