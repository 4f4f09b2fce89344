// Copyright 2025 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart construction options.

extern crate alloc;

use alloc::string::String;

use kurbo::{Point, Size};

use crate::error::ChartError;

/// Where and how large to draw a chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
    /// Id of the host container the chart is drawn into.
    pub surface_id: String,
    /// Surface width.
    pub width: f64,
    /// Surface height.
    pub height: f64,
    /// Ratio between the widths of consecutive rings.
    ///
    /// 1 keeps all rings equally thick; larger values (the golden ratio, 1.618, works well)
    /// make outer rings progressively thinner.
    pub scale: f64,
}

impl ChartOptions {
    /// Creates options with uniform ring widths.
    pub fn new(surface_id: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            surface_id: surface_id.into(),
            width,
            height,
            scale: 1.0,
        }
    }

    /// Sets the ring width ratio.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Checks that the size and scale can produce a layout.
    pub fn validate(&self) -> Result<(), ChartError> {
        let size_ok = |v: f64| v.is_finite() && v > 0.0;
        if !size_ok(self.width) || !size_ok(self.height) {
            return Err(ChartError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        if !size_ok(self.scale) {
            return Err(ChartError::InvalidScale(self.scale));
        }
        Ok(())
    }

    /// Surface size.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Diameter of the chart: the shorter side of the surface.
    pub fn chart_size(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Center of the chart, inside the top-left square of the surface.
    pub fn center(&self) -> Point {
        let radius = self.chart_size() / 2.0;
        Point::new(radius, radius)
    }
}
