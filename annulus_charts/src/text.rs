// Copyright 2025 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font descriptions for tooltip text.
//!
//! The chart never shapes text. Tooltip renderers receive these styles alongside unshaped
//! strings and do their own measurement.

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;

/// Text styling handed to tooltip renderers.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in chart pixels.
    pub font_size: f64,
    /// Preferred families, most preferred first.
    pub font_family: FontFamily,
    /// Font weight (e.g. `400` for normal, `700` for bold).
    pub font_weight: FontWeight,
    /// Font style (normal/italic/oblique).
    pub font_style: FontStyle,
}

impl TextStyle {
    /// Creates a normal-weight sans-serif style with the given size.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::single(GenericFamily::SansSerif),
            font_weight: FontWeight::NORMAL,
            font_style: FontStyle::Normal,
        }
    }

    /// Sets the family list.
    #[must_use]
    pub fn with_family(mut self, family: FontFamily) -> Self {
        self.font_family = family;
        self
    }

    /// Sets the weight.
    #[must_use]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = weight;
        self
    }

    /// Sets the style.
    #[must_use]
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.font_style = style;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// A generic CSS family keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GenericFamily {
    /// CSS `serif`.
    Serif,
    /// CSS `sans-serif`.
    SansSerif,
    /// CSS `monospace`.
    Monospace,
}

/// One entry of a family fallback list.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FamilyName {
    /// A generic family keyword.
    Generic(GenericFamily),
    /// A named family (e.g. `"Helvetica Neue"`).
    Named(Arc<str>),
}

impl FamilyName {
    /// Returns the family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Generic(GenericFamily::Serif) => "serif",
            Self::Generic(GenericFamily::SansSerif) => "sans-serif",
            Self::Generic(GenericFamily::Monospace) => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// A family fallback list.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FontFamily(pub Vec<FamilyName>);

impl FontFamily {
    /// A list with one generic family.
    #[must_use]
    pub fn single(generic: GenericFamily) -> Self {
        Self(alloc::vec![FamilyName::Generic(generic)])
    }

    /// `'Helvetica Neue', 'Helvetica', 'Arial', sans-serif`.
    #[must_use]
    pub fn tooltip_default() -> Self {
        Self(alloc::vec![
            FamilyName::Named(Arc::from("Helvetica Neue")),
            FamilyName::Named(Arc::from("Helvetica")),
            FamilyName::Named(Arc::from("Arial")),
            FamilyName::Generic(GenericFamily::SansSerif),
        ])
    }

    /// Iterates the CSS family names in preference order.
    pub fn css_families(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(FamilyName::as_css_family)
    }
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

/// CSS-style font styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Normal style.
    Normal,
    /// Italic style.
    Italic,
    /// Oblique style.
    Oblique,
}
