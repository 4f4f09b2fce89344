// Copyright 2025 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polar/cartesian conversion.
//!
//! Angles are degrees measured clockwise from 12 o'clock, matching a y-down screen space.

use core::f64::consts::{FRAC_PI_2, TAU};

use kurbo::Point;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// A point relative to the chart origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolarPoint {
    /// Distance from the origin.
    pub dist: f64,
    /// Angle in degrees, in `[0, 360)`.
    pub angle: f64,
}

impl PolarPoint {
    /// Creates a polar point.
    pub fn new(dist: f64, angle: f64) -> Self {
        Self { dist, angle }
    }
}

/// Converts a polar position around `center` to a cartesian point.
pub fn polar_to_cartesian(center: Point, radius: f64, angle_degrees: f64) -> Point {
    let radians = (angle_degrees - 90.0).to_radians();
    Point::new(
        center.x + radius * radians.cos(),
        center.y + radius * radians.sin(),
    )
}

/// Converts `point` to polar coordinates around `origin`.
///
/// Returns `None` when the point coincides with the origin (the angle is undefined there)
/// or when the inputs are not finite.
pub fn cartesian_to_polar(point: Point, origin: Point) -> Option<PolarPoint> {
    let dx = point.x - origin.x;
    let dy = point.y - origin.y;
    let dist = (dx * dx + dy * dy).sqrt();
    if !dist.is_finite() || dist <= 0.0 {
        return None;
    }

    let mut radians = (dx / dist).clamp(-1.0, 1.0).acos();
    if dy < 0.0 {
        radians = TAU - radians;
    }
    let mut angle = (radians + FRAC_PI_2).to_degrees() % 360.0;
    if angle < 0.0 {
        angle += 360.0;
    }
    Some(PolarPoint { dist, angle })
}
