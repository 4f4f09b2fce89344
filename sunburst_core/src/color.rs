// Copyright 2025 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Palette cycling for nodes without an explicit color.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use peniko::Color;

/// The default five-color palette.
pub fn default_palette() -> Vec<Color> {
    vec![
        Color::from_rgb8(0x46, 0x89, 0x66),
        Color::from_rgb8(0xFF, 0xF0, 0xA5),
        Color::from_rgb8(0xFF, 0xB0, 0x3B),
        Color::from_rgb8(0xB6, 0x49, 0x26),
        Color::from_rgb8(0x8E, 0x28, 0x00),
    ]
}

/// Hands out palette colors in order, wrapping around at the end.
///
/// The cursor survives across layouts so repeated renders keep cycling; call
/// [`ColorAllocator::reset`] to start again from the first entry.
#[derive(Clone, Debug)]
pub struct ColorAllocator {
    palette: Vec<Color>,
    cursor: usize,
}

impl Default for ColorAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorAllocator {
    /// Creates an allocator over [`default_palette`].
    pub fn new() -> Self {
        Self {
            palette: default_palette(),
            cursor: 0,
        }
    }

    /// Creates an allocator over a custom palette.
    ///
    /// An empty palette falls back to [`default_palette`].
    pub fn with_palette(palette: Vec<Color>) -> Self {
        if palette.is_empty() {
            return Self::new();
        }
        Self { palette, cursor: 0 }
    }

    /// Returns the next palette color and advances the cursor.
    pub fn next_color(&mut self) -> Color {
        let color = self.palette[self.cursor % self.palette.len()];
        self.cursor = self.cursor.wrapping_add(1);
        color
    }

    /// Rewinds to the first palette entry.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Number of colors handed out since the last reset.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The palette being cycled.
    pub fn palette(&self) -> &[Color] {
        &self.palette
    }
}
