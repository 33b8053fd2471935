// Copyright 2025 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip placement.
//!
//! With a single dataset every active segment gets its own tooltip at its band midpoint.
//! With several datasets the chart shows one combined tooltip for all elements sharing the
//! positional index of the first active element, anchored by [`median_anchor`].

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;
use peniko::Color;

use crate::arc::ArcFactory;
use crate::config::{TooltipContext, TooltipFormatter};
use crate::segment::{Segment, SegmentId, VisualState};

/// Where the tooltip state machine stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TooltipPhase {
    /// The first render has not completed; hover is ignored.
    Suppressed,
    /// Nothing is hovered.
    Idle,
    /// At least one segment is hovered.
    Hovering,
}

/// A fill/stroke pair shown as a color key in a multi-tooltip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendColors {
    /// Key fill.
    pub fill: Color,
    /// Key outline.
    pub stroke: Color,
}

impl From<VisualState> for LegendColors {
    fn from(v: VisualState) -> Self {
        Self {
            fill: v.fill,
            stroke: v.stroke,
        }
    }
}

/// One element of a dataset, as far as tooltips are concerned.
#[derive(Clone, Debug, PartialEq)]
pub struct DatasetPoint {
    /// Identity shared with the chart element it describes.
    pub id: SegmentId,
    /// Position used for combined-tooltip placement.
    pub position: Point,
    /// The element's value; elements without one are skipped.
    pub value: Option<f64>,
    /// Optional label.
    pub label: Option<String>,
    /// Pre-hover colors.
    pub colors: LegendColors,
}

/// An ordered collection of elements from one data series.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    /// Series label.
    pub label: Option<String>,
    /// Elements in positional order.
    pub elements: Vec<DatasetPoint>,
}

impl Dataset {
    /// Creates an empty dataset.
    pub fn new(label: Option<String>) -> Self {
        Self {
            label,
            elements: Vec::new(),
        }
    }

    /// Appends an element.
    pub fn with_point(mut self, point: DatasetPoint) -> Self {
        self.elements.push(point);
        self
    }

    /// Describes chart segments, positioned at their tooltip anchors and colored with their
    /// saved (pre-hover) colors.
    pub fn from_segments(label: Option<String>, arcs: &ArcFactory, segments: &[Segment]) -> Self {
        let elements = segments
            .iter()
            .map(|s| DatasetPoint {
                id: s.id,
                position: arcs.shape(s).tooltip_anchor(),
                value: Some(s.value),
                label: s.label.clone(),
                colors: s.baseline().visual.into(),
            })
            .collect();
        Self { label, elements }
    }

    /// Position of the element with the given id.
    pub fn index_of(&self, id: SegmentId) -> Option<usize> {
        self.elements.iter().position(|e| e.id == id)
    }
}

/// A tooltip for one element.
#[derive(Clone, Debug, PartialEq)]
pub struct SingleTooltip {
    /// Point the caret targets.
    pub anchor: Point,
    /// Body text.
    pub text: String,
}

/// A combined tooltip across datasets.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiTooltip {
    /// Point the box is placed against.
    pub anchor: Point,
    /// Title, taken from the first active element's label.
    pub title: Option<String>,
    /// One row of text per gathered element.
    pub labels: Vec<String>,
    /// One color key per gathered element.
    pub colors: Vec<LegendColors>,
}

/// Positional index of `id`, searching the most recently added dataset first.
pub fn find_index(datasets: &[Dataset], id: SegmentId) -> Option<usize> {
    datasets.iter().rev().find_map(|d| d.index_of(id))
}

/// The elements at `index` across all datasets, skipping those without a value.
pub fn gather_at(datasets: &[Dataset], index: usize) -> Vec<&DatasetPoint> {
    datasets
        .iter()
        .filter_map(|d| d.elements.get(index))
        .filter(|e| e.value.is_some())
        .collect()
}

/// Anchor for a combined tooltip over `positions`.
///
/// `y` is the midpoint of the vertical extent. `x` is the rightmost position unless the
/// leftmost one already lies right of `center_x`, in which case it is the leftmost.
/// Returns `None` for an empty input.
pub fn median_anchor(positions: impl IntoIterator<Item = Point>, center_x: f64) -> Option<Point> {
    let mut iter = positions.into_iter();
    let first = iter.next()?;
    let (mut x_min, mut x_max, mut y_min, mut y_max) = (first.x, first.x, first.y, first.y);
    for p in iter {
        x_min = x_min.min(p.x);
        x_max = x_max.max(p.x);
        y_min = y_min.min(p.y);
        y_max = y_max.max(p.y);
    }
    let x = if x_min > center_x { x_min } else { x_max };
    Some(Point::new(x, (y_min + y_max) / 2.0))
}

/// Builds the combined tooltip for the element `first_active`.
///
/// Returns `None` when no dataset contains the element or no element at its index carries a
/// value.
pub fn multi_tooltip(
    datasets: &[Dataset],
    first_active: SegmentId,
    title: Option<String>,
    center_x: f64,
    formatter: TooltipFormatter,
) -> Option<MultiTooltip> {
    let index = find_index(datasets, first_active)?;
    let elements = gather_at(datasets, index);
    let anchor = median_anchor(elements.iter().map(|e| e.position), center_x)?;
    let labels = elements
        .iter()
        .map(|e| {
            formatter(TooltipContext {
                label: e.label.as_deref(),
                value: e.value.unwrap_or_default(),
            })
        })
        .collect();
    let colors = elements.iter().map(|e| e.colors).collect();
    Some(MultiTooltip {
        anchor,
        title,
        labels,
        colors,
    })
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;

    use peniko::color::palette::css;

    use super::*;
    use crate::config::value_only;

    fn point(id: u64, x: f64, y: f64, value: Option<f64>) -> DatasetPoint {
        DatasetPoint {
            id: SegmentId(id),
            position: Point::new(x, y),
            value,
            label: None,
            colors: LegendColors {
                fill: css::RED,
                stroke: css::WHITE,
            },
        }
    }

    #[test]
    fn median_anchor_prefers_the_right_extreme_left_of_center() {
        let a = median_anchor([Point::new(10.0, 5.0), Point::new(10.0, 15.0)], 50.0);
        assert_eq!(a, Some(Point::new(10.0, 10.0)));

        let a = median_anchor([Point::new(10.0, 0.0), Point::new(30.0, 20.0)], 50.0);
        assert_eq!(a, Some(Point::new(30.0, 10.0)));
    }

    #[test]
    fn median_anchor_takes_the_left_extreme_right_of_center() {
        let a = median_anchor([Point::new(60.0, 0.0), Point::new(90.0, 40.0)], 50.0);
        assert_eq!(a, Some(Point::new(60.0, 20.0)));
    }

    #[test]
    fn median_anchor_of_nothing_is_none() {
        assert_eq!(median_anchor(core::iter::empty(), 50.0), None);
    }

    #[test]
    fn index_search_prefers_the_latest_dataset() {
        let first = Dataset::new(None)
            .with_point(point(1, 0.0, 0.0, Some(1.0)))
            .with_point(point(7, 0.0, 0.0, Some(1.0)));
        let second = Dataset::new(None)
            .with_point(point(7, 0.0, 0.0, Some(1.0)))
            .with_point(point(3, 0.0, 0.0, Some(1.0)));
        let datasets = vec![first, second];
        assert_eq!(find_index(&datasets, SegmentId(7)), Some(0));
        assert_eq!(find_index(&datasets, SegmentId(1)), Some(0));
        assert_eq!(find_index(&datasets, SegmentId(99)), None);
    }

    #[test]
    fn multi_tooltip_skips_valueless_elements() {
        let a = Dataset::new(None)
            .with_point(point(1, 10.0, 5.0, Some(4.0)))
            .with_point(point(2, 20.0, 5.0, Some(6.0)));
        let b = Dataset::new(None)
            .with_point(point(3, 10.0, 15.0, Some(8.0)))
            .with_point(point(4, 20.0, 99.0, None));
        let datasets = vec![a, b];

        let t = multi_tooltip(
            &datasets,
            SegmentId(1),
            Some("Jan".to_string()),
            50.0,
            value_only,
        )
        .unwrap();
        assert_eq!(t.anchor, Point::new(10.0, 10.0));
        assert_eq!(t.labels, ["4", "8"]);
        assert_eq!(t.colors.len(), 2);
        assert_eq!(t.title.as_deref(), Some("Jan"));

        let t = multi_tooltip(&datasets, SegmentId(2), None, 50.0, value_only).unwrap();
        assert_eq!(t.labels, ["6"]);
        assert_eq!(t.anchor, Point::new(20.0, 5.0));
    }

    #[test]
    fn multi_tooltip_for_unknown_element_is_none() {
        let datasets = vec![Dataset::new(None), Dataset::new(None)];
        assert_eq!(
            multi_tooltip(&datasets, SegmentId(1), None, 50.0, value_only),
            None
        );
    }
}
