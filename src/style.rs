//! Shape configuration: an explicit options structure instead of an
//! open-ended keyword bag, plus the small tag enums the string-typed
//! canvas surface parses into.

use std::str::FromStr;

use crate::errors::CanvasError;
use crate::types::Color;

/// How a partial ellipse outline is closed into a drawable shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ArcStyle {
    /// Filled wedge including the ellipse center.
    #[default]
    Pieslice,
    /// Filled region closed by the straight edge between the endpoints.
    Chord,
    /// Open outline, stroke only.
    Arc,
}

impl FromStr for ArcStyle {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pieslice" => Ok(ArcStyle::Pieslice),
            "chord" => Ok(ArcStyle::Chord),
            "arc" => Ok(ArcStyle::Arc),
            other => Err(CanvasError::UnknownArcStyle {
                name: other.to_string(),
            }),
        }
    }
}

/// Start angle, angular extent and closure style of an elliptical arc.
/// Angles are in degrees; defaults match the classic canvas conventions
/// (a 90-degree pieslice starting at 0).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcParams {
    pub start: f64,
    pub extent: f64,
    pub style: ArcStyle,
}

impl Default for ArcParams {
    fn default() -> Self {
        ArcParams {
            start: 0.0,
            extent: 90.0,
            style: ArcStyle::default(),
        }
    }
}

impl ArcParams {
    pub fn new(start: f64, extent: f64, style: ArcStyle) -> Self {
        ArcParams { start, extent, style }
    }
}

/// The shape types the unified factory dispatches on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
    Arc,
}

impl FromStr for ShapeKind {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rectangle" => Ok(ShapeKind::Rectangle),
            "ellipse" => Ok(ShapeKind::Ellipse),
            "arc" => Ok(ShapeKind::Arc),
            other => Err(CanvasError::UnknownShapeType {
                name: other.to_string(),
            }),
        }
    }
}

/// Line rendering style for outlines and polylines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
}

/// Style configuration for a shape.
///
/// `fill` paints the interior of a closed polygon; `outline` strokes the
/// boundary, and is also the line color of open polylines. An unset fill on
/// a polygon renders hollow.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ShapeOptions {
    pub fill: Option<Color>,
    pub outline: Option<Color>,
    pub outline_width: Option<f64>,
    pub line_style: LineStyle,
    pub tags: Vec<String>,
}

impl ShapeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn outline(mut self, color: Color) -> Self {
        self.outline = Some(color);
        self
    }

    pub fn outline_width(mut self, width: f64) -> Self {
        self.outline_width = Some(width);
        self
    }

    pub fn dashed(mut self) -> Self {
        self.line_style = LineStyle::Dashed;
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Stroke width to render with; 1 unless configured.
    pub fn stroke_width(&self) -> f64 {
        self.outline_width.unwrap_or(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arc_style_parses_known_names() {
        assert_eq!("pieslice".parse::<ArcStyle>().unwrap(), ArcStyle::Pieslice);
        assert_eq!("chord".parse::<ArcStyle>().unwrap(), ArcStyle::Chord);
        assert_eq!("arc".parse::<ArcStyle>().unwrap(), ArcStyle::Arc);
    }

    #[test]
    fn arc_style_rejects_unknown_names() {
        let err = "wedge".parse::<ArcStyle>().unwrap_err();
        assert_eq!(
            err,
            CanvasError::UnknownArcStyle {
                name: "wedge".to_string()
            }
        );
    }

    #[test]
    fn shape_kind_rejects_unknown_names() {
        assert!("rectangle".parse::<ShapeKind>().is_ok());
        let err = "triangle".parse::<ShapeKind>().unwrap_err();
        assert_eq!(
            err,
            CanvasError::UnknownShapeType {
                name: "triangle".to_string()
            }
        );
    }

    #[test]
    fn arc_params_default_is_quarter_pieslice() {
        let params = ArcParams::default();
        assert_eq!(params.start, 0.0);
        assert_eq!(params.extent, 90.0);
        assert_eq!(params.style, ArcStyle::Pieslice);
    }

    #[test]
    fn options_builder_accumulates() {
        let opts = ShapeOptions::new()
            .fill(Color::named("white"))
            .outline(Color::named("black"))
            .outline_width(2.0)
            .tag("eye")
            .tag("face");
        assert_eq!(opts.fill, Some(Color::named("white")));
        assert_eq!(opts.stroke_width(), 2.0);
        assert_eq!(opts.tags, vec!["eye".to_string(), "face".to_string()]);
        assert_eq!(opts.line_style, LineStyle::Solid);
        // Unconfigured width falls back to 1.
        assert_eq!(ShapeOptions::new().stroke_width(), 1.0);
    }
}
