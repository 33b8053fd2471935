// Copyright 2025 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animated doughnut and pie charts.
//!
//! This crate owns the parts of a radial chart that are independent of any particular canvas:
//! - **Segments** hold values, colors and an animation baseline.
//! - **Layout** turns values into angular extents and the canvas size into radii.
//! - **Animation** steps an easing curve one frame at a time.
//! - **Hover** maps pointer positions to segments and re-tints them.
//! - **Tooltips** place per-segment or combined tooltips.
//!
//! Drawing goes through the [`Backend`] traits: the chart hands over [`SectorShape`]s and
//! tooltip descriptions, and the backend turns them into pixels, scene graphs or test records.
//!
//! ## Example
//!
//! ```
//! use annulus_charts::{Doughnut, DoughnutConfig, RecordingBackend, SegmentData};
//! use kurbo::Size;
//! use peniko::color::palette::css;
//!
//! let data = [
//!     SegmentData::new(300.0, css::TOMATO).with_label("Red"),
//!     SegmentData::new(50.0, css::STEEL_BLUE).with_label("Blue"),
//! ];
//! let mut chart = Doughnut::new(
//!     DoughnutConfig::doughnut(),
//!     Size::new(200.0, 200.0),
//!     data,
//!     RecordingBackend::new(),
//! )
//! .unwrap();
//!
//! // Drive the load animation to completion.
//! chart.finish();
//! assert!(chart.is_loaded());
//! ```
//!
//! Text shaping is out of scope; tooltips carry unshaped strings plus a [`TextStyle`].

#![no_std]

extern crate alloc;

mod animation;
mod arc;
mod backend;
mod chart;
mod config;
mod easing;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod hover;
mod layout;
mod legend;
mod segment;
mod text;
mod tooltip;

pub use animation::{Animation, AnimationKind, Completion, Progress, TickOutcome};
pub use arc::{ArcFactory, SectorShape, SectorStroke};
pub use backend::{Backend, Frame, RecordingBackend, Surface, TooltipRecord, TooltipRenderer};
pub use chart::Doughnut;
pub use config::{
    ChartKind, ConfigError, DoughnutConfig, TOOLTIP_TRANSITION_STEPS, TooltipContext,
    TooltipFormatter, TooltipStyle, label_and_value, value_only,
};
pub use easing::Easing;
pub use error::ChartError;
pub use hover::{
    ActiveSet, PointerEvent, apply_highlight, is_changed, segments_at_point, to_canvas,
};
pub use layout::{
    RadialLayout, TOP_ANGLE, circumference_for, inner_radius, outer_radius, total_of,
};
pub use legend::{Legend, LegendItem};
pub use segment::{
    ArcGeometry, Segment, SegmentData, SegmentError, SegmentId, Snapshot, Transition, VisualState,
};
pub use text::{FamilyName, FontFamily, FontStyle, FontWeight, GenericFamily, TextStyle};
pub use tooltip::{
    Dataset, DatasetPoint, LegendColors, MultiTooltip, SingleTooltip, TooltipPhase, find_index,
    gather_at, median_anchor, multi_tooltip,
};
