// Copyright 2025 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering hooks.
//!
//! The chart computes geometry and decides *what* to show; a backend decides *how*. Canvas
//! renderers, scene encoders and test recorders all implement the same pair of traits.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Size;

use crate::arc::SectorShape;
use crate::config::TooltipStyle;
use crate::tooltip::{MultiTooltip, SingleTooltip};

/// Receives sector geometry, one full frame at a time.
pub trait Surface {
    /// Starts a new frame of the given size.
    fn clear(&mut self, size: Size);
    /// Draws one sector into the current frame.
    fn draw_sector(&mut self, sector: &SectorShape);
}

/// Draws tooltips after a hover transition finishes.
pub trait TooltipRenderer {
    /// Hides a host-provided custom tooltip overlay, if any.
    fn hide_custom(&mut self) {}
    /// Draws a tooltip for one element.
    fn draw_tooltip(&mut self, tooltip: &SingleTooltip, style: &TooltipStyle);
    /// Draws a combined tooltip across datasets.
    fn draw_multi_tooltip(&mut self, tooltip: &MultiTooltip, style: &TooltipStyle);
}

/// Everything a chart needs from its host.
pub trait Backend: Surface + TooltipRenderer {}

impl<T: Surface + TooltipRenderer> Backend for T {}

/// One recorded frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    /// Canvas size at the time of drawing.
    pub size: Size,
    /// Sectors in paint order.
    pub sectors: Vec<SectorShape>,
}

/// A recorded tooltip draw.
#[derive(Clone, Debug, PartialEq)]
pub enum TooltipRecord {
    /// A single-element tooltip.
    Single(SingleTooltip),
    /// A combined tooltip.
    Multi(MultiTooltip),
}

/// A backend that keeps everything it is asked to draw.
///
/// Meant for tests: a frame is recorded on every clear and nothing is dropped until
/// [`RecordingBackend::take_frames`] drains them.
#[derive(Clone, Debug, Default)]
pub struct RecordingBackend {
    /// Every frame, oldest first.
    pub frames: Vec<Frame>,
    /// Tooltips drawn since the last [`RecordingBackend::take_tooltips`].
    pub tooltips: Vec<TooltipRecord>,
    /// How many times a custom overlay was asked to hide.
    pub custom_hides: usize,
}

impl RecordingBackend {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent frame.
    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Drains the recorded frames.
    pub fn take_frames(&mut self) -> Vec<Frame> {
        core::mem::take(&mut self.frames)
    }

    /// Drains the recorded tooltips.
    pub fn take_tooltips(&mut self) -> Vec<TooltipRecord> {
        core::mem::take(&mut self.tooltips)
    }
}

impl Surface for RecordingBackend {
    fn clear(&mut self, size: Size) {
        self.frames.push(Frame {
            size,
            sectors: Vec::new(),
        });
    }

    fn draw_sector(&mut self, sector: &SectorShape) {
        if self.frames.is_empty() {
            self.frames.push(Frame::default());
        }
        if let Some(frame) = self.frames.last_mut() {
            frame.sectors.push(sector.clone());
        }
    }
}

impl TooltipRenderer for RecordingBackend {
    fn hide_custom(&mut self) {
        self.custom_hides += 1;
    }

    fn draw_tooltip(&mut self, tooltip: &SingleTooltip, _style: &TooltipStyle) {
        self.tooltips.push(TooltipRecord::Single(tooltip.clone()));
    }

    fn draw_multi_tooltip(&mut self, tooltip: &MultiTooltip, _style: &TooltipStyle) {
        self.tooltips.push(TooltipRecord::Multi(tooltip.clone()));
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::Point;
    use peniko::color::palette::css;

    use super::*;
    use crate::segment::SegmentId;

    fn sector() -> SectorShape {
        SectorShape {
            id: SegmentId(0),
            center: Point::new(50.0, 50.0),
            inner_radius: 10.0,
            outer_radius: 40.0,
            start_angle: 0.0,
            end_angle: 1.0,
            fill: css::TOMATO,
            stroke: None,
        }
    }

    #[test]
    fn taking_frames_empties_the_recorder() {
        let mut backend = RecordingBackend::new();
        backend.clear(Size::new(100.0, 100.0));
        backend.draw_sector(&sector());
        backend.clear(Size::new(100.0, 100.0));

        let frames = backend.take_frames();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].sectors.len(), 1);
        assert!(frames[1].sectors.is_empty());
        assert!(backend.frames.is_empty());
        assert_eq!(backend.last_frame(), None);
    }
}
