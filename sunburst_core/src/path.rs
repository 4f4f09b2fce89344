// Copyright 2025 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sector outline generation.
//!
//! A laid-out node is drawn as an annular sector between `offset` and `offset + width`. The
//! outline runs backwards along the outer arc, steps inward, runs forwards along the inner
//! arc and closes, so every sector is wound the same way regardless of its span.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Arc, BezPath, Point, SvgArc, Vec2};

use crate::layout::LayoutNode;
use crate::polar::polar_to_cartesian;

/// End angle used for full-circle outlines; an arc whose endpoints coincide draws nothing.
const FULL_CIRCLE_END: f64 = 359.0;

/// One drawing command of an [`ArcPath`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    /// Starts a new subpath.
    MoveTo(Point),
    /// Straight segment.
    LineTo(Point),
    /// Circular arc from the current point, with SVG flag semantics.
    ArcTo {
        /// Circle radius.
        radius: f64,
        /// Take the longer of the two possible arcs.
        large_arc: bool,
        /// Travel in the positive-angle (clockwise on screen) direction.
        sweep: bool,
        /// End point.
        to: Point,
    },
    /// Closes the current subpath.
    Close,
}

/// A closed sector outline, as an ordered list of commands.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArcPath {
    commands: Vec<PathCommand>,
}

impl ArcPath {
    /// The commands in drawing order.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Returns `true` if there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// SVG path data (the `d` attribute).
    pub fn to_svg(&self) -> String {
        alloc::format!("{self}")
    }

    /// Converts the outline to a `kurbo` path, approximating arcs with cubic Béziers.
    pub fn to_bez_path(&self, tolerance: f64) -> BezPath {
        let mut path = BezPath::new();
        let mut current = Point::ZERO;
        let mut subpath_start = Point::ZERO;
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => {
                    path.move_to(p);
                    current = p;
                    subpath_start = p;
                }
                PathCommand::LineTo(p) => {
                    path.line_to(p);
                    current = p;
                }
                PathCommand::ArcTo {
                    radius,
                    large_arc,
                    sweep,
                    to,
                } => {
                    let svg_arc = SvgArc {
                        from: current,
                        to,
                        radii: Vec2::new(radius, radius),
                        x_rotation: 0.0,
                        large_arc,
                        sweep,
                    };
                    match Arc::from_svg_arc(&svg_arc) {
                        Some(arc) => {
                            for el in arc.append_iter(tolerance) {
                                path.push(el);
                            }
                        }
                        None => path.line_to(to),
                    }
                    current = to;
                }
                PathCommand::Close => {
                    path.close_path();
                    current = subpath_start;
                }
            }
        }
        path
    }

    fn move_to(&mut self, p: Point) {
        self.commands.push(PathCommand::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        self.commands.push(PathCommand::LineTo(p));
    }

    fn arc_to(&mut self, radius: f64, large_arc: bool, sweep: bool, to: Point) {
        self.commands.push(PathCommand::ArcTo {
            radius,
            large_arc,
            sweep,
            to,
        });
    }

    fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }
}

impl fmt::Display for ArcPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match *command {
                PathCommand::MoveTo(p) => write!(f, "M {} {}", p.x, p.y)?,
                PathCommand::LineTo(p) => write!(f, "L {} {}", p.x, p.y)?,
                PathCommand::ArcTo {
                    radius,
                    large_arc,
                    sweep,
                    to,
                } => write!(
                    f,
                    "A {radius} {radius} 0 {} {} {} {}",
                    u8::from(large_arc),
                    u8::from(sweep),
                    to.x,
                    to.y
                )?,
                PathCommand::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

/// Builds the outline of `node` for a chart centered at `origin`.
///
/// A node covering the whole circle becomes a disc (or an annulus when it has a non-zero
/// inner radius). The node itself is left untouched.
pub fn describe_arc(node: &LayoutNode, origin: Point) -> ArcPath {
    let inner = node.offset;
    let outer = node.outer_radius();
    let start = node.angles.start;
    let mut path = ArcPath::default();

    if node.angles.is_full_circle() {
        let end = start + FULL_CIRCLE_END;
        path.move_to(polar_to_cartesian(origin, outer, end));
        path.arc_to(outer, true, false, polar_to_cartesian(origin, outer, start));
        path.close();
        if inner > 0.0 {
            // Opposite winding punches the hole under the non-zero fill rule.
            path.move_to(polar_to_cartesian(origin, inner, start));
            path.arc_to(inner, true, true, polar_to_cartesian(origin, inner, end));
            path.close();
        }
        return path;
    }

    let end = node.angles.end;
    let large_arc = node.angles.abs > 180.0;
    path.move_to(polar_to_cartesian(origin, outer, end));
    path.arc_to(
        outer,
        large_arc,
        false,
        polar_to_cartesian(origin, outer, start),
    );
    if inner > 0.0 {
        path.line_to(polar_to_cartesian(origin, inner, start));
        path.arc_to(
            inner,
            large_arc,
            true,
            polar_to_cartesian(origin, inner, end),
        );
    } else {
        path.line_to(origin);
    }
    path.close();
    path
}
