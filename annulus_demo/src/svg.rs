// Copyright 2025 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG backend for `annulus_demo`.

use annulus_charts::{
    MultiTooltip, SectorShape, SingleTooltip, Surface, TextStyle, TooltipRenderer, TooltipStyle,
};
use kurbo::{Point, Rect, RoundedRect, Shape, Size};
use peniko::Color;

/// Flattening tolerance for sector outlines.
const TOLERANCE: f64 = 0.1;

/// Keeps the most recent frame as SVG elements.
///
/// Like a canvas, clearing drops everything, tooltips included.
#[derive(Debug, Default)]
pub(crate) struct SvgScene {
    size: Size,
    sectors: Vec<SectorShape>,
    overlays: Vec<String>,
}

impl SvgScene {
    pub(crate) fn to_svg_string(&self) -> String {
        let view_box = Rect::from_origin_size(Point::ZERO, self.size);
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        ));
        out.push('\n');

        for sector in &self.sectors {
            let d = sector.to_path(TOLERANCE).to_svg();
            out.push_str(&format!(r#"<path d="{d}""#));
            write_paint_attr(&mut out, "fill", sector.fill);
            if let Some(stroke) = sector.stroke {
                write_paint_attr(&mut out, "stroke", stroke.color);
                out.push_str(&format!(
                    r#" stroke-width="{}" stroke-linejoin="bevel""#,
                    stroke.width
                ));
            }
            out.push_str("/>\n");
        }
        for overlay in &self.overlays {
            out.push_str(overlay);
        }

        out.push_str("</svg>\n");
        out
    }

    fn push_box(&mut self, rect: Rect, style: &TooltipStyle) {
        let d = RoundedRect::from_rect(rect, style.corner_radius)
            .to_path(TOLERANCE)
            .to_svg();
        let mut out = format!(r#"<path d="{d}""#);
        write_paint_attr(&mut out, "fill", style.fill);
        out.push_str("/>\n");
        self.overlays.push(out);
    }

    fn push_text(&mut self, pos: Point, text: &str, style: &TextStyle, color: Color) {
        let mut out = format!(
            r#"<text x="{}" y="{}" font-size="{}" font-weight="{}" font-family="{}" dominant-baseline="middle""#,
            pos.x,
            pos.y,
            style.font_size,
            style.font_weight.0,
            style.font_family.css_families().collect::<Vec<_>>().join(", "),
        );
        write_paint_attr(&mut out, "fill", color);
        out.push('>');
        out.push_str(&escape_xml(text));
        out.push_str("</text>\n");
        self.overlays.push(out);
    }

    fn push_key(&mut self, rect: Rect, fill: Color, background: Color) {
        for (r, color) in [(rect, background), (rect.inset(-1.0), fill)] {
            let mut out = format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                r.x0,
                r.y0,
                r.width(),
                r.height()
            );
            write_paint_attr(&mut out, "fill", color);
            out.push_str("/>\n");
            self.overlays.push(out);
        }
    }
}

impl Surface for SvgScene {
    fn clear(&mut self, size: Size) {
        self.size = size;
        self.sectors.clear();
        self.overlays.clear();
    }

    fn draw_sector(&mut self, sector: &SectorShape) {
        self.sectors.push(sector.clone());
    }
}

impl TooltipRenderer for SvgScene {
    fn draw_tooltip(&mut self, tooltip: &SingleTooltip, style: &TooltipStyle) {
        let text_width = estimate_text_width(&tooltip.text, style.text.font_size);
        let width = text_width + style.x_padding * 2.0;
        let height = style.text.font_size + style.y_padding * 2.0;
        let anchor = tooltip.anchor;

        // Above the anchor unless that runs off the top edge.
        let above = anchor.y - height - style.caret_size >= 0.0;
        let x0 = (anchor.x - width / 2.0).clamp(0.0, (self.size.width - width).max(0.0));
        let (y0, caret) = if above {
            let y0 = anchor.y - height - style.caret_size;
            (
                y0,
                [
                    Point::new(anchor.x - style.caret_size, y0 + height),
                    Point::new(anchor.x + style.caret_size, y0 + height),
                    anchor,
                ],
            )
        } else {
            let y0 = anchor.y + style.caret_size;
            (
                y0,
                [
                    Point::new(anchor.x - style.caret_size, y0),
                    Point::new(anchor.x + style.caret_size, y0),
                    anchor,
                ],
            )
        };
        let rect = Rect::new(x0, y0, x0 + width, y0 + height);

        self.push_box(rect, style);
        let mut out = format!(
            r#"<polygon points="{},{} {},{} {},{}""#,
            caret[0].x, caret[0].y, caret[1].x, caret[1].y, caret[2].x, caret[2].y
        );
        write_paint_attr(&mut out, "fill", style.fill);
        out.push_str("/>\n");
        self.overlays.push(out);

        let text_pos = Point::new(rect.x0 + style.x_padding, rect.center().y);
        self.push_text(text_pos, &tooltip.text, &style.text, style.text_color);
    }

    fn draw_multi_tooltip(&mut self, tooltip: &MultiTooltip, style: &TooltipStyle) {
        let font_size = style.text.font_size;
        let line_height = font_size * 1.5;
        let title = tooltip.title.as_deref().unwrap_or_default();
        let key_size = font_size - 4.0;

        let widest_label = tooltip
            .labels
            .iter()
            .map(|l| estimate_text_width(l, font_size) + key_size + 2.0)
            .fold(estimate_text_width(title, style.title.font_size), f64::max);
        let width = widest_label + style.x_padding * 2.0;
        let height = line_height * (tooltip.labels.len() as f64 + 1.0) + style.y_padding * 2.0;

        // Away from the center, vertically centered on the anchor and kept on the canvas.
        let anchor = tooltip.anchor;
        let x0 = if anchor.x > self.size.width / 2.0 {
            anchor.x - style.x_offset - width
        } else {
            anchor.x + style.x_offset
        };
        let y0 = (anchor.y - height / 2.0).clamp(0.0, (self.size.height - height).max(0.0));
        let rect = Rect::new(x0, y0, x0 + width, y0 + height);

        self.push_box(rect, style);
        let mut line_y = rect.y0 + style.y_padding + line_height / 2.0;
        self.push_text(
            Point::new(rect.x0 + style.x_padding, line_y),
            title,
            &style.title,
            style.title_color,
        );
        for (label, colors) in tooltip.labels.iter().zip(&tooltip.colors) {
            line_y += line_height;
            let key = Rect::from_center_size(
                Point::new(rect.x0 + style.x_padding + key_size / 2.0, line_y),
                Size::new(key_size, key_size),
            );
            self.push_key(key, colors.fill, style.key_background);
            self.push_text(
                Point::new(key.x1 + 2.0, line_y),
                label,
                &style.text,
                style.text_color,
            );
        }
    }
}

/// Very rough heuristic: assume ~0.6em average glyph width.
fn estimate_text_width(text: &str, font_size: f64) -> f64 {
    0.6 * font_size * text.chars().count() as f64
}

fn svg_paint(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = if rgba.a == 255 {
        None
    } else {
        Some(f64::from(rgba.a) / 255.0)
    };
    (fill, opacity)
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let (value, opacity) = svg_paint(color);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use annulus_charts::{SectorStroke, SegmentId};
    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn clearing_drops_tooltips_and_sectors() {
        let mut scene = SvgScene::default();
        scene.clear(Size::new(100.0, 100.0));
        scene.draw_sector(&SectorShape {
            id: SegmentId(0),
            center: Point::new(50.0, 50.0),
            inner_radius: 10.0,
            outer_radius: 40.0,
            start_angle: 0.0,
            end_angle: 1.0,
            fill: css::TOMATO,
            stroke: Some(SectorStroke {
                color: css::WHITE,
                width: 2.0,
            }),
        });
        scene.draw_tooltip(
            &SingleTooltip {
                anchor: Point::new(70.0, 60.0),
                text: "Red & <b>".to_string(),
            },
            &TooltipStyle::default(),
        );
        let svg = scene.to_svg_string();
        assert!(svg.contains(r##"fill="#ff6347""##));
        assert!(svg.contains("Red &amp; &lt;b&gt;"));
        assert!(svg.contains(r#"fill-opacity="0.8""#));

        scene.clear(Size::new(100.0, 100.0));
        let svg = scene.to_svg_string();
        assert!(!svg.contains("<path"));
        assert!(!svg.contains("<text"));
    }
}
