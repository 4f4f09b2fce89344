// Copyright 2025 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rendering surface seam.

use kurbo::Size;
use peniko::Color;
use sunburst_core::{ArcPath, NodePath};

use crate::error::SurfaceError;

/// One sector ready to be drawn.
#[derive(Clone, Copy, Debug)]
pub struct Drawable<'a> {
    /// Closed outline of the sector.
    pub path: &'a ArcPath,
    /// Fill color.
    pub fill: Color,
    /// Display label of the source node, if any.
    pub label: Option<&'a str>,
    /// Location of the source node in the dataset.
    pub source: &'a NodePath,
}

/// A host drawing target.
///
/// A chart render calls [`Surface::create_container`], then [`Surface::clear`], then
/// [`Surface::append_path`] once per sector (parents before children), and finally
/// [`Surface::bind_pointer_events`].
pub trait Surface {
    /// Creates the drawing container inside the host element `id`, replacing any previous one.
    ///
    /// Fails when the host has no such element; the render is abandoned and the surface must
    /// be left as it was.
    fn create_container(&mut self, id: &str, size: Size) -> Result<(), SurfaceError>;

    /// Appends one filled outline.
    fn append_path(&mut self, drawable: Drawable<'_>);

    /// Removes every drawn outline and pointer binding, keeping the container.
    fn clear(&mut self);

    /// Starts delivering pointer events for the freshly created container.
    ///
    /// Hosts that forward events themselves can ignore this.
    fn bind_pointer_events(&mut self) {}
}
