// Copyright 2025 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

extern crate alloc;

use alloc::string::String;
use core::fmt;

use sunburst_core::NodePath;

/// Errors reported by a [`Surface`](crate::Surface).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// The host has no container with the requested id.
    MissingContainer(String),
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingContainer(id) => write!(f, "no container with id `{id}`"),
        }
    }
}

impl core::error::Error for SurfaceError {}

/// Errors returned by [`SunburstChart`](crate::SunburstChart).
#[derive(Debug, Clone, PartialEq)]
pub enum ChartError {
    /// The ring scale must be finite and positive.
    InvalidScale(f64),
    /// The chart size must be finite and positive.
    InvalidSize {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },
    /// The requested display root does not exist in the dataset.
    UnknownNode(NodePath),
    /// The rendering surface rejected the chart.
    Surface(SurfaceError),
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScale(scale) => write!(f, "invalid ring scale {scale}"),
            Self::InvalidSize { width, height } => {
                write!(f, "invalid chart size {width}x{height}")
            }
            Self::UnknownNode(path) => write!(f, "no node at {path}"),
            Self::Surface(err) => write!(f, "surface error: {err}"),
        }
    }
}

impl core::error::Error for ChartError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Surface(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SurfaceError> for ChartError {
    fn from(err: SurfaceError) -> Self {
        Self::Surface(err)
    }
}
