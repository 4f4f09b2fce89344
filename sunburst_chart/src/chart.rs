// Copyright 2025 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The chart controller.
//!
//! A chart is either showing the whole dataset (top level) or a subtree (zoomed). Clicking a
//! sector other than the display root zooms into it; clicking the display root of a zoomed
//! chart returns to the top level and restarts the color cycle.

use hashbrown::HashMap;
use kurbo::Point;
use log::{debug, trace};
use peniko::Color;
use sunburst_core::{
    ColorAllocator, Layout, LayoutOptions, NodePath, SunburstNode, cartesian_to_polar,
    describe_arc, find_node,
};

use crate::error::ChartError;
use crate::options::ChartOptions;
use crate::surface::{Drawable, Surface};

/// Which part of the dataset is on display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartState {
    /// The dataset root is the display root.
    TopLevel,
    /// A descendant of the dataset root is the display root.
    Zoomed,
}

/// Result of handling a click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The click did not change the chart.
    Ignored,
    /// The chart was re-rooted at the clicked node.
    ZoomedIn(NodePath),
    /// The chart returned to the dataset root.
    ZoomedOut,
}

/// Pointer input forwarded by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// The pointer moved.
    Move(Point),
    /// The primary button was clicked.
    Click(Point),
}

/// An interactive sunburst chart bound to a rendering surface.
#[derive(Debug)]
pub struct SunburstChart<S> {
    data: SunburstNode,
    options: ChartOptions,
    surface: S,
    colors: ColorAllocator,
    origin: Option<Point>,
    display_root: NodePath,
    layout: Option<Layout>,
}

impl<S: Surface> SunburstChart<S> {
    /// Creates a chart; nothing is drawn until [`SunburstChart::render`].
    pub fn new(data: SunburstNode, options: ChartOptions, surface: S) -> Result<Self, ChartError> {
        options.validate()?;
        Ok(Self {
            data,
            options,
            surface,
            colors: ColorAllocator::new(),
            origin: None,
            display_root: NodePath::root(),
            layout: None,
        })
    }

    /// Replaces the palette allocator (and therefore the palette).
    pub fn with_colors(mut self, colors: ColorAllocator) -> Self {
        self.colors = colors;
        self
    }

    /// Lays out and redraws the chart.
    ///
    /// `root` selects the display root; `None` keeps the current one (the dataset root on the
    /// first call). Nodes that were already drawn keep their colors.
    pub fn render(&mut self, root: Option<NodePath>) -> Result<(), ChartError> {
        let root = root.unwrap_or_else(|| self.display_root.clone());
        let carried = self
            .layout
            .as_ref()
            .map(Layout::colors_by_path)
            .unwrap_or_default();
        self.draw(root, carried, self.colors.clone())
    }

    /// Handles a click at `position` (surface coordinates).
    ///
    /// Surface errors from the resulting re-render are returned; the chart keeps its previous
    /// state in that case.
    pub fn on_click(&mut self, position: Point) -> Result<ClickOutcome, ChartError> {
        let (Some(layout), Some(origin)) = (&self.layout, self.origin) else {
            return Ok(ClickOutcome::Ignored);
        };
        let Some(point) = cartesian_to_polar(position, origin) else {
            trace!("click at {position:?} is on the chart origin");
            return Ok(ClickOutcome::Ignored);
        };
        let Some(id) = find_node(point, layout) else {
            trace!("click at {position:?} ({point:?}) missed every sector");
            return Ok(ClickOutcome::Ignored);
        };
        let target = layout.get(id).source.clone();
        trace!("click at {position:?} hit {target}");

        if target.is_root() {
            return Ok(ClickOutcome::Ignored);
        }
        if target != self.display_root {
            debug!("zooming into {target}");
            self.render(Some(target.clone()))?;
            return Ok(ClickOutcome::ZoomedIn(target));
        }

        debug!("zooming out of {target}");
        let mut colors = self.colors.clone();
        colors.reset();
        self.draw(NodePath::root(), HashMap::new(), colors)?;
        Ok(ClickOutcome::ZoomedOut)
    }

    /// Pointer-move hook; currently does nothing.
    pub fn on_pointer_move(&mut self, _position: Point) {}

    /// Dispatches a pointer event.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Result<ClickOutcome, ChartError> {
        match event {
            PointerEvent::Move(position) => {
                self.on_pointer_move(position);
                Ok(ClickOutcome::Ignored)
            }
            PointerEvent::Click(position) => self.on_click(position),
        }
    }

    /// Whether the whole dataset is on display.
    pub fn state(&self) -> ChartState {
        if self.display_root.is_root() {
            ChartState::TopLevel
        } else {
            ChartState::Zoomed
        }
    }

    /// Dataset path of the current display root.
    pub fn display_root(&self) -> &NodePath {
        &self.display_root
    }

    /// The layout drawn by the last successful render.
    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    /// Chart center, fixed by the first render.
    pub fn origin(&self) -> Option<Point> {
        self.origin
    }

    /// The dataset.
    pub fn data(&self) -> &SunburstNode {
        &self.data
    }

    /// The construction options.
    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    /// The rendering surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The rendering surface, mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The palette allocator, e.g. to restart the color cycle before a render.
    pub fn colors_mut(&mut self) -> &mut ColorAllocator {
        &mut self.colors
    }

    /// Consumes the chart, returning the surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    fn draw(
        &mut self,
        root: NodePath,
        carried: HashMap<NodePath, Color>,
        mut colors: ColorAllocator,
    ) -> Result<(), ChartError> {
        let origin = *self.origin.get_or_insert_with(|| self.options.center());
        let Some(root_node) = self.data.get(&root) else {
            return Err(ChartError::UnknownNode(root));
        };

        let layout_options = LayoutOptions::new(self.options.chart_size())
            .with_scale(self.options.scale)
            .with_base(root.clone())
            .with_carried_colors(carried);
        let layout = Layout::compute(root_node, &layout_options, &mut colors);

        // Nothing is committed until the container exists.
        self.surface
            .create_container(&self.options.surface_id, self.options.size())?;
        self.colors = colors;
        self.surface.clear();
        for (_, node) in layout.iter() {
            let path = describe_arc(node, origin);
            let label = self
                .data
                .get(&node.source)
                .and_then(|n| n.label.as_deref());
            self.surface.append_path(Drawable {
                path: &path,
                fill: node.color,
                label,
                source: &node.source,
            });
        }
        self.surface.bind_pointer_events();

        self.display_root = root;
        self.layout = Some(layout);
        Ok(())
    }
}
