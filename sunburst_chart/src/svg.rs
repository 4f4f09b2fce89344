// Copyright 2025 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory SVG surface.

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::Size;
use peniko::Color;

use crate::error::SurfaceError;
use crate::surface::{Drawable, Surface};

#[derive(Clone, Debug)]
struct SvgPath {
    d: String,
    fill: Color,
    label: Option<String>,
}

/// A [`Surface`] that collects sectors into a standalone SVG document.
///
/// Host elements are simulated by a list of known container ids; drawing into any other id
/// fails like a missing DOM element would.
#[derive(Clone, Debug, Default)]
pub struct SvgSurface {
    hosts: Vec<String>,
    container: Option<(String, Size)>,
    paths: Vec<SvgPath>,
    pointer_events: bool,
}

impl SvgSurface {
    /// Creates a surface with no host elements.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a host element id.
    pub fn with_host(mut self, id: impl Into<String>) -> Self {
        self.add_host(id);
        self
    }

    /// Registers a host element id.
    pub fn add_host(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.hosts.contains(&id) {
            self.hosts.push(id);
        }
    }

    /// Id and size of the current container, if one was created.
    pub fn container(&self) -> Option<(&str, Size)> {
        self.container.as_ref().map(|(id, size)| (id.as_str(), *size))
    }

    /// Number of drawn sectors.
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Path data of every drawn sector, in drawing order.
    pub fn path_data(&self) -> impl Iterator<Item = &str> + '_ {
        self.paths.iter().map(|p| p.d.as_str())
    }

    /// Fill colors of every drawn sector, in drawing order.
    pub fn fills(&self) -> impl Iterator<Item = Color> + '_ {
        self.paths.iter().map(|p| p.fill)
    }

    /// Whether pointer events were bound for the current container.
    pub fn pointer_events_bound(&self) -> bool {
        self.pointer_events
    }

    /// Serializes the current container.
    ///
    /// Without a container this is an empty, zero-sized document.
    pub fn to_svg_string(&self) -> String {
        let size = self.container.as_ref().map_or(Size::ZERO, |(_, s)| *s);
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="0 0 {} {}" style="width: {}px; height: {}px">"#,
            size.width, size.height, size.width, size.height
        ));
        out.push('\n');

        for path in &self.paths {
            out.push_str(&format!(r#"<path d="{}""#, path.d));
            write_fill_attr(&mut out, path.fill);
            match &path.label {
                Some(label) => {
                    out.push('>');
                    out.push_str(&format!("<title>{}</title>", escape_xml(label)));
                    out.push_str("</path>\n");
                }
                None => out.push_str("/>\n"),
            }
        }

        out.push_str("</svg>\n");
        out
    }
}

impl Surface for SvgSurface {
    fn create_container(&mut self, id: &str, size: Size) -> Result<(), SurfaceError> {
        if !self.hosts.iter().any(|h| h == id) {
            return Err(SurfaceError::MissingContainer(id.to_string()));
        }
        self.container = Some((id.to_string(), size));
        self.paths.clear();
        self.pointer_events = false;
        Ok(())
    }

    fn append_path(&mut self, drawable: Drawable<'_>) {
        self.paths.push(SvgPath {
            d: drawable.path.to_svg(),
            fill: drawable.fill,
            label: drawable.label.map(ToString::to_string),
        });
    }

    fn clear(&mut self) {
        self.paths.clear();
        self.pointer_events = false;
    }

    fn bind_pointer_events(&mut self) {
        self.pointer_events = true;
    }
}

fn write_fill_attr(out: &mut String, color: Color) {
    let rgba = color.to_rgba8();
    out.push_str(&format!(
        r##" fill="#{:02x}{:02x}{:02x}""##,
        rgba.r, rgba.g, rgba.b
    ));
    if rgba.a != 255 {
        out.push_str(&format!(
            r#" fill-opacity="{}""#,
            f64::from(rgba.a) / 255.0
        ));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
