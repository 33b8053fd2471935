// Copyright 2025 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sector (arc) shapes.
//!
//! A [`SectorShape`] is the drawable snapshot of one segment for one frame: a circle segment
//! around a shared center plus paint. Shapes are produced by an [`ArcFactory`] that carries the
//! chart center explicitly, so a reflow only has to swap the factory.

use core::f64::consts::TAU;

use kurbo::{BezPath, Circle, Point, Rect, Shape, Vec2};
use peniko::Color;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::segment::{Segment, SegmentId};

/// Outline paint for a sector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectorStroke {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f64,
}

/// A sector (arc slice) ready to draw or hit-test.
///
/// Angles are in radians in canvas orientation.
#[derive(Clone, Debug, PartialEq)]
pub struct SectorShape {
    /// The segment this shape was built from.
    pub id: SegmentId,
    /// Center in canvas coordinates.
    pub center: Point,
    /// Inner radius (0 for a pie slice).
    pub inner_radius: f64,
    /// Outer radius.
    pub outer_radius: f64,
    /// Start angle.
    pub start_angle: f64,
    /// End angle.
    pub end_angle: f64,
    /// Fill paint.
    pub fill: Color,
    /// Optional outline.
    pub stroke: Option<SectorStroke>,
}

impl SectorShape {
    /// Angular extent, `end_angle - start_angle`.
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Whether `point` lies inside the sector.
    ///
    /// The angular span is half-open, `[start_angle, end_angle)`; a sweep of a full turn or
    /// more covers every angle. The radial band `[inner_radius, outer_radius]` is closed.
    /// Zero-width sectors contain nothing.
    pub fn contains(&self, point: Point) -> bool {
        let offset: Vec2 = point - self.center;
        let distance = offset.hypot();
        if distance < self.inner_radius || distance > self.outer_radius {
            return false;
        }
        let sweep = self.sweep();
        if sweep <= 0.0 {
            return false;
        }
        if sweep >= TAU {
            return true;
        }
        let mut relative = (offset.atan2() - self.start_angle) % TAU;
        if relative < 0.0 {
            relative += TAU;
        }
        relative < sweep
    }

    /// The point a tooltip for this sector points at: the middle of the band at the
    /// bisecting angle, rounded to whole pixels.
    pub fn tooltip_anchor(&self) -> Point {
        let angle = self.start_angle + self.sweep() / 2.0;
        let range = (self.outer_radius - self.inner_radius) / 2.0 + self.inner_radius;
        Point::new(
            (self.center.x + angle.cos() * range).round(),
            (self.center.y + angle.sin() * range).round(),
        )
    }

    /// Converts the sector to a path with the given flattening tolerance.
    pub fn to_path(&self, tolerance: f64) -> BezPath {
        let circle = Circle::new(self.center, self.outer_radius);
        circle
            .segment(self.inner_radius, self.start_angle, self.sweep())
            .to_path(tolerance)
    }

    /// Bounding box of the full circle the sector belongs to.
    pub fn bounds(&self) -> Rect {
        Circle::new(self.center, self.outer_radius).bounding_box()
    }
}

/// Builds [`SectorShape`]s around a shared center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcFactory {
    /// Center applied to every shape.
    pub center: Point,
}

impl ArcFactory {
    /// Creates a factory for the given center.
    pub fn new(center: Point) -> Self {
        Self { center }
    }

    /// Snapshots a segment's live state into a shape.
    pub fn shape(&self, segment: &Segment) -> SectorShape {
        let stroke = segment.show_stroke.then_some(SectorStroke {
            color: segment.visual.stroke,
            width: segment.stroke_width,
        });
        SectorShape {
            id: segment.id,
            center: self.center,
            inner_radius: segment.geometry.inner_radius,
            outer_radius: segment.geometry.outer_radius,
            start_angle: segment.start_angle,
            end_angle: segment.end_angle,
            fill: segment.visual.fill,
            stroke,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::f64::consts::{FRAC_PI_2, PI};

    use peniko::color::palette::css;

    use super::*;
    use crate::layout::TOP_ANGLE;

    fn sector(start_angle: f64, end_angle: f64) -> SectorShape {
        SectorShape {
            id: SegmentId(1),
            center: Point::new(50.0, 50.0),
            inner_radius: 10.0,
            outer_radius: 20.0,
            start_angle,
            end_angle,
            fill: css::TOMATO,
            stroke: Some(SectorStroke {
                color: css::BLACK,
                width: 2.0,
            }),
        }
    }

    #[test]
    fn contains_checks_the_radial_band() {
        let s = sector(0.0, FRAC_PI_2);
        // Angle ~pi/4 (down-right on screen).
        assert!(s.contains(Point::new(61.0, 61.0)));
        // Inside the hole.
        assert!(!s.contains(Point::new(53.0, 53.0)));
        // Beyond the outer radius.
        assert!(!s.contains(Point::new(70.0, 70.0)));
    }

    #[test]
    fn contains_handles_spans_that_wrap_past_a_full_turn() {
        // From the top, clockwise a half turn: covers the right-hand side.
        let s = sector(TOP_ANGLE, TOP_ANGLE + PI);
        assert!(s.contains(Point::new(65.0, 50.0)));
        assert!(!s.contains(Point::new(35.0, 50.0)));
        // Top-left quadrant is outside, top-right is inside.
        assert!(!s.contains(Point::new(40.0, 40.0)));
        assert!(s.contains(Point::new(60.0, 40.0)));
    }

    #[test]
    fn span_is_half_open() {
        let s = sector(0.0, FRAC_PI_2);
        // Exactly at the start angle (pointing right).
        assert!(s.contains(Point::new(65.0, 50.0)));
        // Exactly at the end angle (pointing down) belongs to the next sector.
        assert!(!s.contains(Point::new(50.0, 65.0)));
    }

    #[test]
    fn degenerate_sweeps() {
        assert!(!sector(1.0, 1.0).contains(Point::new(65.0, 50.0)));
        let full = sector(TOP_ANGLE, TOP_ANGLE + TAU);
        assert!(full.contains(Point::new(35.0, 50.0)));
        assert!(full.contains(Point::new(65.0, 50.0)));
    }

    #[test]
    fn tooltip_anchor_bisects_the_band() {
        // Mid radius 15 at pi/4: 15 / sqrt(2) ~= 10.61 from the center on each axis.
        let p = sector(0.0, FRAC_PI_2).tooltip_anchor();
        assert_eq!(p, Point::new(61.0, 61.0));
    }

    #[test]
    fn path_stays_within_the_outer_circle() {
        let s = sector(0.0, PI);
        let bb = s.to_path(0.1).bounding_box();
        let outer = s.bounds().inflate(0.5, 0.5);
        assert!(bb.width() > 0.0 && bb.height() > 0.0);
        assert!(
            bb.x0 >= outer.x0 && bb.x1 <= outer.x1 && bb.y0 >= outer.y0 && bb.y1 <= outer.y1,
            "{bb:?} escapes {outer:?}"
        );
    }
}
