// Copyright 2025 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interactive sunburst charts on top of `sunburst_core`.
//!
//! This crate owns the parts of a sunburst chart that talk to the outside world:
//! - **Options** describing the target container, its size and the ring scale.
//! - **Surfaces** that accept finished sector outlines ([`Surface`], with an in-memory
//!   [`SvgSurface`]).
//! - **The controller** ([`SunburstChart`]) that lays out the current display root, feeds the
//!   outlines to the surface, and re-roots the chart when a sector is clicked.
//!
//! The host owns the event loop: it forwards pointer positions to
//! [`SunburstChart::handle_pointer`] in the same coordinate space the surface draws in.

#![no_std]

extern crate alloc;

mod chart;
mod error;
mod options;
mod surface;
mod svg;

pub use chart::{ChartState, ClickOutcome, PointerEvent, SunburstChart};
pub use error::{ChartError, SurfaceError};
pub use options::ChartOptions;
pub use surface::{Drawable, Surface};
pub use svg::SvgSurface;

pub use sunburst_core::{NodePath, SunburstNode};
