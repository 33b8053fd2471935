// Copyright 2025 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segment records.
//!
//! A [`Segment`] carries its live geometry and colors plus a [`Snapshot`] baseline. Animated
//! fields always interpolate *from the baseline* toward a target, so redrawing a frame at the
//! same progress yields the same geometry no matter how many times it runs.

extern crate alloc;

use alloc::string::String;
use core::fmt;

use peniko::Color;

use crate::layout::TOP_ANGLE;

/// Stable identity of a chart element.
///
/// Ids are handed out by the chart on insertion and never reused by that chart, so they
/// compare equal exactly when two handles name the same element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId(pub u64);

/// Caller input for one segment.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentData {
    /// Signed magnitude; sizing uses the absolute value.
    pub value: f64,
    /// Resting fill color.
    pub color: Color,
    /// Fill color while hovered; `None` means "same as `color`".
    pub highlight: Option<Color>,
    /// Optional label for tooltips and legends.
    pub label: Option<String>,
}

impl SegmentData {
    /// Creates unlabeled segment input without a distinct highlight.
    pub fn new(value: f64, color: Color) -> Self {
        Self {
            value,
            color,
            highlight: None,
            label: None,
        }
    }

    /// Sets the hover color.
    pub fn with_highlight(mut self, highlight: Color) -> Self {
        self.highlight = Some(highlight);
        self
    }

    /// Sets the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Errors raised when building a segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SegmentError {
    /// The value is NaN or infinite.
    NonFiniteValue(f64),
}

impl fmt::Display for SegmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteValue(v) => write!(f, "segment value must be finite, got {v}"),
        }
    }
}

impl core::error::Error for SegmentError {}

/// Transient colors that hover swaps and restores.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    /// Fill color.
    pub fill: Color,
    /// Outline color.
    pub stroke: Color,
}

/// The animatable extent of a segment.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ArcGeometry {
    /// Angular extent in radians.
    pub circumference: f64,
    /// Outer radius in pixels.
    pub outer_radius: f64,
    /// Inner radius in pixels (0 for a pie slice).
    pub inner_radius: f64,
}

/// A saved baseline: the state animations interpolate from and hover restores to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snapshot {
    /// Saved colors.
    pub visual: VisualState,
    /// Saved geometry.
    pub geometry: ArcGeometry,
}

/// Interpolation targets for [`Segment::transition`]; `None` fields are left alone.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transition {
    /// Target circumference.
    pub circumference: Option<f64>,
    /// Target outer radius.
    pub outer_radius: Option<f64>,
    /// Target inner radius.
    pub inner_radius: Option<f64>,
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    (to - from) * t + from
}

/// One slice of the chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    /// Stable identity.
    pub id: SegmentId,
    /// Signed magnitude; sizing uses the absolute value.
    pub value: f64,
    /// Optional label.
    pub label: Option<String>,
    /// Live colors.
    pub visual: VisualState,
    /// Fill applied while hovered.
    pub highlight: Color,
    /// Whether the outline is drawn.
    pub show_stroke: bool,
    /// Outline width.
    pub stroke_width: f64,
    /// Start angle in radians.
    pub start_angle: f64,
    /// End angle in radians, `start_angle + circumference` after a draw pass.
    pub end_angle: f64,
    /// Live geometry.
    pub geometry: ArcGeometry,
    baseline: Snapshot,
}

impl Segment {
    /// Builds a segment whose baseline equals its initial state.
    pub fn new(
        id: SegmentId,
        data: SegmentData,
        geometry: ArcGeometry,
        stroke: Color,
        stroke_width: f64,
        show_stroke: bool,
    ) -> Result<Self, SegmentError> {
        if !data.value.is_finite() {
            return Err(SegmentError::NonFiniteValue(data.value));
        }
        let visual = VisualState {
            fill: data.color,
            stroke,
        };
        Ok(Self {
            id,
            value: data.value,
            label: data.label,
            visual,
            highlight: data.highlight.unwrap_or(data.color),
            show_stroke,
            stroke_width,
            start_angle: TOP_ANGLE,
            end_angle: TOP_ANGLE + geometry.circumference,
            geometry,
            baseline: Snapshot { visual, geometry },
        })
    }

    /// Whether the segment currently wears its highlight.
    ///
    /// A segment whose highlight equals its resting fill always reports `true` while drawn;
    /// such a segment cannot show a distinct hover state.
    pub fn is_highlighted(&self) -> bool {
        self.visual.fill == self.highlight
    }

    /// The saved baseline.
    pub fn baseline(&self) -> &Snapshot {
        &self.baseline
    }

    /// Copies the live colors and sweep into the baseline.
    ///
    /// The radii baseline is left alone; [`Segment::retarget_radii`] and
    /// [`Segment::commit_geometry`] own it.
    pub fn save(&mut self) {
        self.baseline.visual = self.visual;
        self.baseline.geometry.circumference = self.geometry.circumference;
    }

    /// Makes the live sweep and inner radius the new baseline, with `outer_radius` as the
    /// resting outer radius. Saved colors are left alone.
    pub fn commit_geometry(&mut self, outer_radius: f64) {
        self.baseline.geometry = ArcGeometry {
            outer_radius,
            ..self.geometry
        };
    }

    /// Copies the baseline fill back into the live fill.
    pub fn restore_fill(&mut self) {
        self.visual.fill = self.baseline.visual.fill;
    }

    /// Copies the whole baseline back into the live state.
    pub fn restore(&mut self) {
        self.visual = self.baseline.visual;
        self.geometry = self.baseline.geometry;
    }

    /// Applies the hover tint.
    pub fn highlight(&mut self) {
        self.visual.fill = self.highlight;
    }

    /// Moves the live radii to new values, keeping the previous live radii as the baseline
    /// they will animate from.
    pub fn retarget_radii(&mut self, outer_radius: f64, inner_radius: f64) {
        self.baseline.geometry.outer_radius = self.geometry.outer_radius;
        self.baseline.geometry.inner_radius = self.geometry.inner_radius;
        self.geometry.outer_radius = outer_radius;
        self.geometry.inner_radius = inner_radius;
    }

    /// Interpolates the given fields from the baseline toward `target` at `progress`.
    pub fn transition(&mut self, target: Transition, progress: f64) {
        let from = self.baseline.geometry;
        if let Some(c) = target.circumference {
            self.geometry.circumference = lerp(from.circumference, c, progress);
        }
        if let Some(r) = target.outer_radius {
            self.geometry.outer_radius = lerp(from.outer_radius, r, progress);
        }
        if let Some(r) = target.inner_radius {
            self.geometry.inner_radius = lerp(from.inner_radius, r, progress);
        }
    }

    /// Closes the angular span: `end_angle = start_angle + circumference`.
    pub fn close_span(&mut self) {
        self.end_angle = self.start_angle + self.geometry.circumference;
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::color::palette::css;

    use super::*;

    fn segment(data: SegmentData) -> Segment {
        let geometry = ArcGeometry {
            circumference: 1.0,
            outer_radius: 100.0,
            inner_radius: 50.0,
        };
        Segment::new(SegmentId(1), data, geometry, css::WHITE, 2.0, true).unwrap()
    }

    #[test]
    fn highlight_defaults_to_fill() {
        let s = segment(SegmentData::new(5.0, css::RED));
        assert_eq!(s.highlight, css::RED);
        assert!(s.is_highlighted());
    }

    #[test]
    fn restore_fill_undoes_highlight_without_touching_baseline() {
        let mut s = segment(SegmentData::new(5.0, css::RED).with_highlight(css::ORANGE));
        assert!(!s.is_highlighted());
        s.highlight();
        assert!(s.is_highlighted());
        s.restore_fill();
        assert_eq!(s.visual.fill, css::RED);
        s.restore_fill();
        assert_eq!(s.baseline().visual.fill, css::RED);
    }

    #[test]
    fn restore_rolls_back_without_touching_the_baseline() {
        let mut s = segment(SegmentData::new(5.0, css::RED).with_highlight(css::ORANGE));
        let saved = *s.baseline();
        s.highlight();
        s.geometry.outer_radius = 120.0;
        s.restore();
        assert_eq!(s.visual, saved.visual);
        assert_eq!(s.geometry, saved.geometry);
        assert_eq!(*s.baseline(), saved);
    }

    #[test]
    fn save_keeps_the_radii_an_entry_grows_from() {
        let mut s = segment(SegmentData::new(5.0, css::RED));
        s.retarget_radii(0.0, 0.0);
        s.retarget_radii(100.0, 50.0);
        s.geometry.circumference = 2.0;
        s.save();
        assert_eq!(s.baseline().geometry.circumference, 2.0);
        assert_eq!(s.baseline().geometry.outer_radius, 0.0);
        assert_eq!(s.baseline().geometry.inner_radius, 0.0);
        assert_eq!(s.geometry.outer_radius, 100.0);
    }

    #[test]
    fn committed_geometry_rests_at_the_given_radius() {
        let mut s = segment(SegmentData::new(5.0, css::RED).with_highlight(css::ORANGE));
        s.highlight();
        s.geometry.circumference = 2.5;
        s.geometry.outer_radius = 110.0;
        s.commit_geometry(100.0);
        assert_eq!(s.baseline().geometry.circumference, 2.5);
        assert_eq!(s.baseline().geometry.outer_radius, 100.0);
        assert_eq!(s.baseline().visual.fill, css::RED);
    }

    #[test]
    fn transition_is_idempotent_for_a_fixed_progress() {
        let mut s = segment(SegmentData::new(5.0, css::RED));
        let target = Transition {
            circumference: Some(3.0),
            outer_radius: Some(200.0),
            inner_radius: None,
        };
        s.transition(target, 0.5);
        let once = s.geometry;
        s.transition(target, 0.5);
        assert_eq!(s.geometry, once);
        assert_eq!(once.circumference, 2.0);
        assert_eq!(once.outer_radius, 150.0);
        assert_eq!(once.inner_radius, 50.0);
    }

    #[test]
    fn retarget_keeps_previous_radii_as_animation_origin() {
        let mut s = segment(SegmentData::new(5.0, css::RED));
        s.retarget_radii(80.0, 40.0);
        assert_eq!(s.geometry.outer_radius, 80.0);
        assert_eq!(s.baseline().geometry.outer_radius, 100.0);
        s.transition(
            Transition {
                outer_radius: Some(80.0),
                ..Transition::default()
            },
            0.5,
        );
        assert_eq!(s.geometry.outer_radius, 90.0);
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let geometry = ArcGeometry::default();
        let err = Segment::new(
            SegmentId(1),
            SegmentData::new(f64::INFINITY, css::RED),
            geometry,
            css::WHITE,
            2.0,
            true,
        )
        .unwrap_err();
        assert_eq!(err, SegmentError::NonFiniteValue(f64::INFINITY));
    }
}
