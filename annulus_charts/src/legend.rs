// Copyright 2025 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend data.
//!
//! The chart does not render legends. It hands an ordered list of swatches, the chart name and
//! the configured template to whatever legend renderer the host uses.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;

use crate::segment::Segment;

/// A legend row: one swatch and its label.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
    /// Label shown next to the swatch, if the segment has one.
    pub label: Option<String>,
    /// Swatch fill.
    pub fill: Color,
}

impl From<&Segment> for LegendItem {
    fn from(segment: &Segment) -> Self {
        Self {
            label: segment.label.clone(),
            fill: segment.visual.fill,
        }
    }
}

/// Everything an external legend renderer needs.
#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    /// Chart name, e.g. `"Doughnut"`.
    pub name: &'static str,
    /// The configured template, passed through untouched.
    pub template: String,
    /// Items in segment order.
    pub items: Vec<LegendItem>,
}

impl Legend {
    /// Labels of all labeled items, in order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(|i| i.label.as_deref())
    }
}
