// Copyright 2025 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart configuration.
//!
//! A [`DoughnutConfig`] is an immutable value owned by each chart instance. The pie variant is
//! not a separate type: [`DoughnutConfig::pie`] copies the doughnut defaults and overrides the
//! inner cutout.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use core::fmt;

use peniko::Color;
use peniko::color::palette::css;

use crate::easing::Easing;
use crate::text::{FontFamily, FontWeight, TextStyle};

/// Which flavor of radial chart a configuration describes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// An annulus with a cut-out center.
    #[default]
    Doughnut,
    /// A full disc.
    Pie,
}

impl ChartKind {
    /// Returns the display name used by legends.
    pub fn name(self) -> &'static str {
        match self {
            Self::Doughnut => "Doughnut",
            Self::Pie => "Pie",
        }
    }
}

/// Data handed to a tooltip formatter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipContext<'a> {
    /// The element label, if any.
    pub label: Option<&'a str>,
    /// The element value.
    pub value: f64,
}

/// Formats tooltip text for one element.
pub type TooltipFormatter = fn(TooltipContext<'_>) -> String;

/// Default single-tooltip text: `"label: value"`, or just the value when unlabeled.
pub fn label_and_value(ctx: TooltipContext<'_>) -> String {
    match ctx.label {
        Some(label) if !label.is_empty() => format!("{label}: {}", ctx.value),
        _ => format!("{}", ctx.value),
    }
}

/// Default multi-tooltip row text: the value alone.
pub fn value_only(ctx: TooltipContext<'_>) -> String {
    format!("{}", ctx.value)
}

/// Tooltip box styling handed to tooltip renderers.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipStyle {
    /// Background fill of the tooltip box.
    pub fill: Color,
    /// Body text style.
    pub text: TextStyle,
    /// Body text color.
    pub text_color: Color,
    /// Title text style (multi-tooltips only).
    pub title: TextStyle,
    /// Title text color.
    pub title_color: Color,
    /// Horizontal padding inside the box.
    pub x_padding: f64,
    /// Vertical padding inside the box.
    pub y_padding: f64,
    /// Size of the caret pointing at the anchor (single tooltips only).
    pub caret_size: f64,
    /// Corner radius of the box.
    pub corner_radius: f64,
    /// Horizontal offset between the anchor and a multi-tooltip box.
    pub x_offset: f64,
    /// Background behind each multi-tooltip color key.
    pub key_background: Color,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        let family = FontFamily::tooltip_default();
        Self {
            fill: Color::from_rgba8(0, 0, 0, 204),
            text: TextStyle::new(14.0).with_family(family.clone()),
            text_color: css::WHITE,
            title: TextStyle::new(14.0)
                .with_family(family)
                .with_weight(FontWeight::BOLD),
            title_color: css::WHITE,
            x_padding: 6.0,
            y_padding: 6.0,
            caret_size: 8.0,
            corner_radius: 6.0,
            x_offset: 10.0,
            key_background: css::WHITE,
        }
    }
}

/// Errors returned by [`DoughnutConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// `percentage_inner_cutout` is outside `0..=100`.
    CutoutOutOfRange(f64),
    /// `animation_steps` is zero.
    ZeroAnimationSteps,
    /// `extra_thickness` is negative or not finite.
    InvalidExtraThickness(f64),
    /// `segment_stroke_width` is negative or not finite.
    InvalidStrokeWidth(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CutoutOutOfRange(v) => {
                write!(f, "inner cutout must be within 0..=100 percent, got {v}")
            }
            Self::ZeroAnimationSteps => f.write_str("animation needs at least one step"),
            Self::InvalidExtraThickness(v) => {
                write!(f, "extra hover thickness must be a non-negative number, got {v}")
            }
            Self::InvalidStrokeWidth(v) => {
                write!(f, "segment stroke width must be a non-negative number, got {v}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Options for a doughnut or pie chart.
#[derive(Clone, Debug)]
pub struct DoughnutConfig {
    /// Chart flavor, reported by legends.
    pub kind: ChartKind,
    /// Whether each segment draws an outline.
    pub segment_show_stroke: bool,
    /// Segment outline color.
    pub segment_stroke_color: Color,
    /// Segment outline width.
    pub segment_stroke_width: f64,
    /// Share of the outer radius cut out of the middle, in percent.
    pub percentage_inner_cutout: f64,
    /// Radial growth of a hovered segment, in pixels.
    pub extra_thickness: f64,
    /// Whether structural changes animate at all.
    pub animation: bool,
    /// Number of frames in an eased render.
    pub animation_steps: u32,
    /// Easing curve for eased renders.
    pub animation_easing: Easing,
    /// Sweep new segments in from zero width.
    pub animate_rotate: bool,
    /// Grow new segments out from the center.
    pub animate_scale: bool,
    /// Whether pointer events drive tooltips.
    pub show_tooltips: bool,
    /// Tooltip box styling.
    pub tooltip: TooltipStyle,
    /// Text for single tooltips.
    pub tooltip_formatter: TooltipFormatter,
    /// Row text for multi-tooltips.
    pub multi_tooltip_formatter: TooltipFormatter,
    /// Opaque legend template handed to external legend renderers.
    pub legend_template: String,
}

/// Frame count of the short transition that precedes a tooltip render.
pub const TOOLTIP_TRANSITION_STEPS: u32 = 10;

const DEFAULT_LEGEND_TEMPLATE: &str = "<ul class=\"<%=name.toLowerCase()%>-legend\"><% for (var i=0; i<segments.length; i++){%><li><span style=\"background-color:<%=segments[i].fillColor%>\"></span><%if(segments[i].label){%><%=segments[i].label%><%}%></li><%}%></ul>";

impl Default for DoughnutConfig {
    fn default() -> Self {
        Self {
            kind: ChartKind::Doughnut,
            segment_show_stroke: true,
            segment_stroke_color: css::WHITE,
            segment_stroke_width: 2.0,
            percentage_inner_cutout: 50.0,
            extra_thickness: 10.0,
            animation: true,
            animation_steps: 100,
            animation_easing: Easing::EaseOutBounce,
            animate_rotate: true,
            animate_scale: false,
            show_tooltips: true,
            tooltip: TooltipStyle::default(),
            tooltip_formatter: label_and_value,
            multi_tooltip_formatter: value_only,
            legend_template: String::from(DEFAULT_LEGEND_TEMPLATE),
        }
    }
}

impl DoughnutConfig {
    /// Doughnut defaults.
    pub fn doughnut() -> Self {
        Self::default()
    }

    /// Pie defaults: the doughnut defaults with no inner cutout.
    pub fn pie() -> Self {
        Self {
            kind: ChartKind::Pie,
            percentage_inner_cutout: 0.0,
            ..Self::default()
        }
    }

    /// Checks option ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let cutout = self.percentage_inner_cutout;
        if !(0.0..=100.0).contains(&cutout) {
            return Err(ConfigError::CutoutOutOfRange(cutout));
        }
        if self.animation_steps == 0 {
            return Err(ConfigError::ZeroAnimationSteps);
        }
        if !self.extra_thickness.is_finite() || self.extra_thickness < 0.0 {
            return Err(ConfigError::InvalidExtraThickness(self.extra_thickness));
        }
        let width = self.segment_stroke_width;
        if !width.is_finite() || width < 0.0 {
            return Err(ConfigError::InvalidStrokeWidth(width));
        }
        Ok(())
    }

    /// Sets the inner cutout percentage.
    pub fn with_inner_cutout(mut self, percentage: f64) -> Self {
        self.percentage_inner_cutout = percentage;
        self
    }

    /// Sets the hover growth in pixels.
    pub fn with_extra_thickness(mut self, extra_thickness: f64) -> Self {
        self.extra_thickness = extra_thickness;
        self
    }

    /// Sets the segment outline.
    pub fn with_segment_stroke(mut self, color: Color, width: f64) -> Self {
        self.segment_stroke_color = color;
        self.segment_stroke_width = width;
        self
    }

    /// Disables segment outlines.
    pub fn without_segment_stroke(mut self) -> Self {
        self.segment_show_stroke = false;
        self
    }

    /// Enables or disables animation.
    pub fn with_animation(mut self, animation: bool) -> Self {
        self.animation = animation;
        self
    }

    /// Sets the frame count and easing of eased renders.
    pub fn with_animation_steps(mut self, steps: u32, easing: Easing) -> Self {
        self.animation_steps = steps;
        self.animation_easing = easing;
        self
    }

    /// Selects the entry animations for new segments.
    pub fn with_entry_animation(mut self, rotate: bool, scale: bool) -> Self {
        self.animate_rotate = rotate;
        self.animate_scale = scale;
        self
    }

    /// Enables or disables pointer-driven tooltips.
    pub fn with_tooltips(mut self, show_tooltips: bool) -> Self {
        self.show_tooltips = show_tooltips;
        self
    }

    /// Sets the tooltip styling.
    pub fn with_tooltip_style(mut self, style: TooltipStyle) -> Self {
        self.tooltip = style;
        self
    }

    /// Sets the single and multi tooltip formatters.
    pub fn with_tooltip_formatters(
        mut self,
        single: TooltipFormatter,
        multi: TooltipFormatter,
    ) -> Self {
        self.tooltip_formatter = single;
        self.multi_tooltip_formatter = multi;
        self
    }

    /// Sets the opaque legend template.
    pub fn with_legend_template(mut self, template: impl Into<String>) -> Self {
        self.legend_template = template.into();
        self
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn pie_differs_from_doughnut_only_in_cutout_and_kind() {
        let d = DoughnutConfig::doughnut();
        let p = DoughnutConfig::pie();
        assert_eq!(p.percentage_inner_cutout, 0.0);
        assert_eq!(d.percentage_inner_cutout, 50.0);
        assert_eq!(p.kind, ChartKind::Pie);
        assert_eq!(p.extra_thickness, d.extra_thickness);
        assert_eq!(p.animation_steps, d.animation_steps);
        assert_eq!(p.animation_easing, d.animation_easing);
        assert_eq!(p.segment_stroke_color, d.segment_stroke_color);
    }

    #[test]
    fn defaults_validate() {
        assert_eq!(DoughnutConfig::default().validate(), Ok(()));
        assert_eq!(DoughnutConfig::pie().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_bad_ranges() {
        let c = DoughnutConfig::default().with_inner_cutout(120.0);
        assert_eq!(c.validate(), Err(ConfigError::CutoutOutOfRange(120.0)));

        let c = DoughnutConfig::default().with_animation_steps(0, Easing::Linear);
        assert_eq!(c.validate(), Err(ConfigError::ZeroAnimationSteps));

        let c = DoughnutConfig::default().with_extra_thickness(-1.0);
        assert_eq!(c.validate(), Err(ConfigError::InvalidExtraThickness(-1.0)));

        let c = DoughnutConfig::default().with_segment_stroke(css::BLACK, f64::NAN);
        assert!(matches!(
            c.validate(),
            Err(ConfigError::InvalidStrokeWidth(_))
        ));
    }

    #[test]
    fn default_formatters() {
        let ctx = TooltipContext {
            label: Some("Red"),
            value: 300.0,
        };
        assert_eq!(label_and_value(ctx), "Red: 300");
        assert_eq!(value_only(ctx), "300");

        let unlabeled = TooltipContext {
            label: None,
            value: 2.5,
        };
        assert_eq!(label_and_value(unlabeled), "2.5");
    }
}
