// Copyright 2025 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover correlation: which segments sit under the pointer, and did that change.
//!
//! ## Usage
//!
//! 1) Convert the raw pointer position into canvas space and collect the hit segments with
//!    [`segments_at_point`].
//! 2) Re-tint with [`apply_highlight`]: every segment first gets its saved fill back, then the
//!    new subset wears its highlight. Running both phases every time means a segment that was
//!    hovered on the previous event never keeps a stale tint.
//! 3) Compare against the previous subset with [`is_changed`] to decide whether a redraw is
//!    warranted.

use kurbo::Point;
use smallvec::SmallVec;

use crate::arc::ArcFactory;
use crate::segment::{Segment, SegmentId};

/// The ordered set of segments under the pointer.
pub type ActiveSet = SmallVec<[SegmentId; 4]>;

/// A pointer event as delivered by the host's event binding, in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// The pointer moved.
    Move(Point),
    /// A touch started or moved.
    Touch(Point),
    /// The pointer left the canvas.
    Leave,
}

impl PointerEvent {
    /// The client position, or `None` for [`PointerEvent::Leave`].
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::Move(p) | Self::Touch(p) => Some(*p),
            Self::Leave => None,
        }
    }
}

/// Converts a client position into canvas space given the canvas' top-left corner.
pub fn to_canvas(client: Point, canvas_origin: Point) -> Point {
    Point::new(client.x - canvas_origin.x, client.y - canvas_origin.y)
}

/// Returns, in store order, the ids of every segment whose current shape contains `point`.
///
/// `point` is in canvas space. Hovered segments are tested with their expanded radius.
pub fn segments_at_point(arcs: &ArcFactory, segments: &[Segment], point: Point) -> ActiveSet {
    segments
        .iter()
        .filter(|s| arcs.shape(s).contains(point))
        .map(|s| s.id)
        .collect()
}

/// Restores every segment's fill, then highlights the members of `active`.
pub fn apply_highlight(segments: &mut [Segment], active: &[SegmentId]) {
    for segment in segments.iter_mut() {
        segment.restore_fill();
    }
    for segment in segments.iter_mut() {
        if active.contains(&segment.id) {
            segment.highlight();
        }
    }
}

/// Whether `next` differs from `previous` in length or in any position.
pub fn is_changed(previous: &[SegmentId], next: &[SegmentId]) -> bool {
    previous.len() != next.len() || previous.iter().zip(next).any(|(a, b)| a != b)
}
