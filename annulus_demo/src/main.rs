// Copyright 2025 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Doughnut chart demo for `annulus_charts`.
//!
//! Runs a chart through its lifecycle (load, hover, insert, remove, resize) and writes an SVG
//! snapshot after each stage. Pass an output directory as the first argument; set
//! `RUST_LOG=debug` to follow the chart's own logging.
mod svg;

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use annulus_charts::{
    ArcFactory, Dataset, DatasetPoint, Doughnut, DoughnutConfig, Easing, LegendColors,
    PointerEvent, SegmentData, SegmentId, TickOutcome,
};
use kurbo::{Point, Size};
use peniko::color::palette::css;

use crate::svg::SvgScene;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let out_dir = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("annulus_demo_out"), PathBuf::from);
    fs::create_dir_all(&out_dir)?;

    doughnut_lifecycle(&out_dir)?;
    pie_with_datasets(&out_dir)?;

    log::info!("snapshots written to {}", out_dir.display());
    Ok(())
}

fn sales() -> Vec<SegmentData> {
    vec![
        SegmentData::new(300.0, css::TOMATO)
            .with_highlight(css::SALMON)
            .with_label("Red"),
        SegmentData::new(50.0, css::MEDIUM_SEA_GREEN)
            .with_highlight(css::LIGHT_GREEN)
            .with_label("Green"),
        SegmentData::new(100.0, css::GOLD)
            .with_highlight(css::KHAKI)
            .with_label("Yellow"),
        SegmentData::new(40.0, css::STEEL_BLUE)
            .with_highlight(css::LIGHT_STEEL_BLUE)
            .with_label("Blue"),
    ]
}

/// A point in the middle of segment `index`'s band.
fn inside(chart: &Doughnut<SvgScene>, index: usize) -> Point {
    ArcFactory::new(chart.layout().center)
        .shape(&chart.segments()[index])
        .tooltip_anchor()
}

fn snapshot(chart: &Doughnut<SvgScene>, dir: &Path, name: &str) -> Result<(), Box<dyn Error>> {
    let path = dir.join(format!("{name}.svg"));
    fs::write(&path, chart.backend().to_svg_string())?;
    log::info!("wrote {}", path.display());
    Ok(())
}

fn doughnut_lifecycle(dir: &Path) -> Result<(), Box<dyn Error>> {
    let config = DoughnutConfig::doughnut().with_animation_steps(60, Easing::EaseOutBounce);
    let mut chart = Doughnut::new(config, Size::new(320.0, 320.0), sales(), SvgScene::default())?;

    // Sample the load animation every 15 frames.
    loop {
        match chart.tick() {
            TickOutcome::Frame(p) if p.step % 15 == 0 => {
                snapshot(&chart, dir, &format!("load_{:03}", p.step))?;
            }
            TickOutcome::Frame(_) => {}
            TickOutcome::Finished(..) | TickOutcome::Idle => break,
        }
    }
    snapshot(&chart, dir, "loaded")?;

    let target = inside(&chart, 0);
    chart.handle_pointer(PointerEvent::Move(target));
    chart.finish();
    snapshot(&chart, dir, "hover")?;

    chart.handle_pointer(PointerEvent::Leave);
    chart.finish();

    let id = chart.add_segment(
        SegmentData::new(120.0, css::SLATE_BLUE)
            .with_highlight(css::MEDIUM_SLATE_BLUE)
            .with_label("Purple"),
        Some(2),
        false,
    )?;
    log::info!("inserted {id:?}");
    chart.finish();
    snapshot(&chart, dir, "inserted")?;

    chart.remove_segment(Some(0));
    chart.finish();
    snapshot(&chart, dir, "removed")?;

    chart.resize(Size::new(200.0, 240.0));
    snapshot(&chart, dir, "resized")?;

    let legend = chart.legend();
    log::info!(
        "{} legend: {}",
        legend.name,
        legend.labels().collect::<Vec<_>>().join(", ")
    );
    Ok(())
}

fn pie_with_datasets(dir: &Path) -> Result<(), Box<dyn Error>> {
    let config = DoughnutConfig::pie().with_animation(false);
    let mut chart = Doughnut::new(config, Size::new(320.0, 320.0), sales(), SvgScene::default())?;

    // Last year's figures, placed as if drawn by a neighboring series.
    let current = chart.segments_dataset(Some("this year".to_string()));
    let mut previous = Dataset::new(Some("last year".to_string()));
    for (i, (point, value)) in current
        .elements
        .iter()
        .zip([240.0, 80.0, 90.0, 60.0])
        .enumerate()
    {
        previous = previous.with_point(DatasetPoint {
            id: SegmentId(10_000 + i as u64),
            position: Point::new(point.position.x, point.position.y + 24.0),
            value: Some(value),
            label: point.label.clone(),
            colors: LegendColors {
                fill: css::DARK_GRAY,
                stroke: css::WHITE,
            },
        });
    }
    chart.set_datasets(vec![current, previous]);

    let target = inside(&chart, 2);
    chart.handle_pointer(PointerEvent::Move(target));
    chart.finish();
    snapshot(&chart, dir, "pie_multi_tooltip")?;
    Ok(())
}
