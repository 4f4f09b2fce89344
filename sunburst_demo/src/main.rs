// Copyright 2025 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sunburst chart demo.
//!
//! Renders a small disk-usage style hierarchy, clicks into one of its sectors, clicks the
//! center to zoom back out, and writes an SVG snapshot after each step. Run with
//! `RUST_LOG=debug` to see layout and zoom diagnostics.

use std::error::Error;

use kurbo::Point;
use log::info;
use peniko::color::palette::css;
use sunburst_chart::{
    ChartOptions, ClickOutcome, NodePath, PointerEvent, SunburstChart, SunburstNode, SvgSurface,
};
use sunburst_core::polar_to_cartesian;

const SURFACE_ID: &str = "sunburst";
/// Consecutive rings shrink by the golden ratio.
const GOLDEN_RATIO: f64 = 1.618;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let options = ChartOptions::new(SURFACE_ID, 480.0, 480.0).with_scale(GOLDEN_RATIO);
    let surface = SvgSurface::new().with_host(SURFACE_ID);
    let mut chart = SunburstChart::new(sample_data(), options, surface)?;

    chart.render(None)?;
    write_snapshot(&chart, "sunburst_top.svg")?;

    let target = NodePath::from_indices([0]);
    let outcome = chart.handle_pointer(PointerEvent::Click(sector_center(&chart, &target)?))?;
    info!("clicked {target}: {outcome:?}");
    write_snapshot(&chart, "sunburst_zoomed.svg")?;

    let origin = chart.origin().ok_or("chart has not been rendered")?;
    let outcome = chart.handle_pointer(PointerEvent::Click(polar_to_cartesian(origin, 5.0, 0.0)))?;
    if outcome != ClickOutcome::ZoomedOut {
        return Err(format!("expected to zoom out, got {outcome:?}").into());
    }
    write_snapshot(&chart, "sunburst_reset.svg")?;
    Ok(())
}

fn sample_data() -> SunburstNode {
    let leaf = |value: f64, label: &str| SunburstNode::leaf(value).with_label(label);
    SunburstNode::new(
        100.0,
        vec![
            SunburstNode::new(
                45.0,
                vec![
                    SunburstNode::new(
                        30.0,
                        vec![leaf(12.0, "lib"), leaf(10.0, "share"), leaf(8.0, "bin")],
                    )
                    .with_label("usr"),
                    leaf(15.0, "opt"),
                ],
            )
            .with_label("system"),
            SunburstNode::new(
                35.0,
                vec![
                    leaf(20.0, "photos"),
                    leaf(9.0, "music"),
                    SunburstNode::new(6.0, vec![leaf(4.0, "drafts"), leaf(2.0, "final")])
                        .with_label("documents"),
                    // More than its parent holds: reported and left out of the chart.
                    leaf(40.0, "corrupt"),
                ],
            )
            .with_label("home"),
            leaf(20.0, "swap").with_color(css::SLATE_GRAY),
        ],
    )
    .with_label("disk")
}

/// A point in the middle of the sector currently drawn for `path`.
fn sector_center(
    chart: &SunburstChart<SvgSurface>,
    path: &NodePath,
) -> Result<Point, Box<dyn Error>> {
    let layout = chart.layout().ok_or("chart has not been rendered")?;
    let origin = chart.origin().ok_or("chart has not been rendered")?;
    let id = layout
        .find_by_path(path)
        .ok_or_else(|| format!("{path} is not on display"))?;
    let node = layout.get(id);
    Ok(polar_to_cartesian(
        origin,
        node.offset + 0.5 * node.width,
        node.angles.mid(),
    ))
}

fn write_snapshot(chart: &SunburstChart<SvgSurface>, file: &str) -> Result<(), Box<dyn Error>> {
    std::fs::write(file, chart.surface().to_svg_string())?;
    println!(
        "wrote {file} ({} sectors, root {})",
        chart.surface().path_count(),
        chart.display_root()
    );
    Ok(())
}
