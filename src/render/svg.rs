//! SVG document generation.
//!
//! The canvas renders to a single self-contained SVG document: a background
//! rectangle followed by every item in stacking order, one element per line.

use glam::DVec2;

use super::shapes::Drawable;
use crate::canvas::Canvas;
use crate::style::{LineStyle, ShapeOptions};
use crate::types::Color;

/// Format a coordinate with at most four decimals, trailing zeros trimmed.
pub(crate) fn fmt_num(value: f64) -> String {
    let mut s = format!("{:.4}", value);
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" { "0".to_string() } else { s }
}

/// The `points` attribute value of a polygon/polyline element.
pub(crate) fn points_attr(points: &[DVec2]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Stroke attributes for an element, empty when there is no stroke.
pub(crate) fn stroke_attrs(options: &ShapeOptions, stroke: Option<&Color>) -> String {
    let Some(color) = stroke else {
        return String::new();
    };
    let mut attrs = format!(
        " stroke=\"{}\" stroke-width=\"{}\"",
        color,
        fmt_num(options.stroke_width())
    );
    if options.line_style == LineStyle::Dashed {
        attrs.push_str(" stroke-dasharray=\"6 4\"");
    }
    attrs
}

impl Canvas {
    /// Render the whole canvas to an SVG document string.
    pub fn to_svg(&self) -> String {
        let (w, h) = (fmt_num(self.width), fmt_num(self.height));
        let mut out = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n"
        );
        out.push_str(&format!(
            "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
            self.background
        ));
        for item in self.items() {
            out.push_str(&item.geometry.svg_element(&item.options));
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BoundingBox;
    use glam::dvec2;
    use insta::assert_snapshot;

    #[test]
    fn fmt_num_trims_trailing_zeros() {
        assert_eq!(fmt_num(10.0), "10");
        assert_eq!(fmt_num(2.5), "2.5");
        assert_eq!(fmt_num(1.0 / 3.0), "0.3333");
        assert_eq!(fmt_num(-0.000001), "0");
    }

    #[test]
    fn document_snapshot_for_a_tiny_canvas() {
        let mut canvas = Canvas::new(20.0, 20.0);
        canvas.create_rectangle(
            BoundingBox::new(dvec2(0.0, 0.0), dvec2(10.0, 10.0)),
            ShapeOptions::new().fill(Color::named("black")),
        );
        assert_snapshot!(canvas.to_svg().trim_end(), @r#"
        <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 20 20">
        <rect width="100%" height="100%" fill="white"/>
        <polygon points="0,0 10,0 10,10 0,10" fill="black"/>
        </svg>
        "#);
    }

    #[test]
    fn items_appear_in_stacking_order() {
        let mut canvas = Canvas::new(20.0, 20.0);
        let bottom = canvas.create_rectangle(
            BoundingBox::new(dvec2(0.0, 0.0), dvec2(4.0, 4.0)),
            ShapeOptions::new().fill(Color::named("red")),
        );
        canvas.create_rectangle(
            BoundingBox::new(dvec2(2.0, 2.0), dvec2(6.0, 6.0)),
            ShapeOptions::new().fill(Color::named("blue")),
        );
        let svg = canvas.to_svg();
        let red = svg.find("red").unwrap();
        let blue = svg.find("blue").unwrap();
        assert!(red < blue);

        // Raising the bottom item flips the order.
        canvas.raise(bottom, None);
        let svg = canvas.to_svg();
        assert!(svg.find("red").unwrap() > svg.find("blue").unwrap());
    }

    #[test]
    fn dashed_outline_emits_dasharray() {
        let mut canvas = Canvas::new(20.0, 20.0);
        canvas.create_rectangle(
            BoundingBox::new(dvec2(0.0, 0.0), dvec2(10.0, 10.0)),
            ShapeOptions::new()
                .outline(Color::named("black"))
                .dashed(),
        );
        assert!(canvas.to_svg().contains("stroke-dasharray=\"6 4\""));
    }
}
