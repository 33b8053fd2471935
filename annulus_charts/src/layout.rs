// Copyright 2025 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radial layout: chart-level radii and per-segment angular extents.
//!
//! Angles follow the canvas convention (y grows downward), so [`TOP_ANGLE`] (`1.5π`) points
//! straight up and positive sweeps run clockwise on screen.

use core::f64::consts::{PI, TAU};

use kurbo::{Point, Size};

use crate::config::DoughnutConfig;

/// The angle every chain of segments starts from.
pub const TOP_ANGLE: f64 = PI * 1.5;

/// Chart-level geometry shared by every segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialLayout {
    /// Center of the chart.
    pub center: Point,
    /// Resting outer radius.
    pub outer_radius: f64,
    /// Resting inner radius.
    pub inner_radius: f64,
}

impl RadialLayout {
    /// Computes the layout for a chart of the given size.
    pub fn arrange(size: Size, config: &DoughnutConfig) -> Self {
        let outer = outer_radius(size, config.extra_thickness, config.segment_stroke_width);
        Self {
            center: Point::new(size.width / 2.0, size.height / 2.0),
            outer_radius: outer,
            inner_radius: inner_radius(outer, config.percentage_inner_cutout),
        }
    }
}

/// `(min(w, h) - 2 * extra_thickness - stroke_width / 2) / 2`, floored at zero.
///
/// The `extra_thickness` allowance keeps a hovered, expanded segment inside the canvas.
pub fn outer_radius(size: Size, extra_thickness: f64, stroke_width: f64) -> f64 {
    let side = size.width.min(size.height);
    ((side - extra_thickness * 2.0 - stroke_width / 2.0) / 2.0).max(0.0)
}

/// The inner radius for a cutout given in percent of the outer radius.
pub fn inner_radius(outer_radius: f64, percentage_inner_cutout: f64) -> f64 {
    outer_radius / 100.0 * percentage_inner_cutout
}

/// Sum of absolute values.
pub fn total_of(values: impl IntoIterator<Item = f64>) -> f64 {
    values.into_iter().map(f64::abs).sum()
}

/// `2π · |value| / total`, or `0` when the total is zero.
pub fn circumference_for(value: f64, total: f64) -> f64 {
    if total > 0.0 && total.is_finite() {
        TAU * (value.abs() / total)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn outer_radius_reserves_hover_room_and_half_stroke() {
        let r = outer_radius(Size::new(400.0, 300.0), 10.0, 2.0);
        assert_eq!(r, (300.0 - 20.0 - 1.0) / 2.0);
    }

    #[test]
    fn outer_radius_never_goes_negative() {
        assert_eq!(outer_radius(Size::new(10.0, 10.0), 10.0, 2.0), 0.0);
    }

    #[test]
    fn arrange_centers_and_cuts_out() {
        let layout = RadialLayout::arrange(Size::new(200.0, 200.0), &DoughnutConfig::default());
        assert_eq!(layout.center, Point::new(100.0, 100.0));
        assert!((layout.inner_radius - layout.outer_radius * 0.5).abs() < 1e-12);

        let pie = RadialLayout::arrange(Size::new(200.0, 200.0), &DoughnutConfig::pie());
        assert_eq!(pie.inner_radius, 0.0);
    }

    #[test]
    fn circumferences_are_proportional() {
        let values = [10.0, 20.0, 30.0, 40.0];
        let total = total_of(values);
        assert_eq!(total, 100.0);
        let got: Vec<f64> = values
            .iter()
            .map(|v| circumference_for(*v, total))
            .collect();
        for (g, want) in got.iter().zip([0.2 * PI, 0.4 * PI, 0.6 * PI, 0.8 * PI]) {
            assert!((g - want).abs() < 1e-12, "{g} != {want}");
        }
    }

    #[test]
    fn sign_is_ignored_for_sizing() {
        let total = total_of([-10.0, 10.0]);
        assert_eq!(total, 20.0);
        assert_eq!(circumference_for(-10.0, total), PI);
    }

    #[test]
    fn zero_total_gives_zero_circumference() {
        let total = total_of([0.0, 0.0]);
        assert_eq!(circumference_for(0.0, total), 0.0);
        assert_eq!(circumference_for(5.0, 0.0), 0.0);
    }
}
