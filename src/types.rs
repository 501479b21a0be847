//! Core geometric types: bounding boxes and colors.
//!
//! All canvas coordinates are `glam::DVec2` in pixel space with the y axis
//! growing downward (screen convention).

use glam::{DVec2, dvec2};

use crate::errors::CanvasError;

/// An axis-aligned bounding box given by two opposite corner points.
///
/// The corners are stored exactly as given, without normalization: a box
/// whose corners are "swapped" has negative semi-axes and mirrors the shapes
/// generated from it, matching the corner-pair parameterization of classic
/// canvas toolkits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    /// First corner (conventionally top-left)
    pub p1: DVec2,
    /// Opposite corner (conventionally bottom-right)
    pub p2: DVec2,
}

impl BoundingBox {
    /// Create a bounding box from two opposite corner points.
    pub fn new(p1: DVec2, p2: DVec2) -> Self {
        BoundingBox { p1, p2 }
    }

    /// Resolve a flat coordinate list `[x1, y1, x2, y2]` into a bounding box.
    ///
    /// Fails when the list does not hold exactly four values, or when any
    /// value is NaN or infinite.
    pub fn from_coords(coords: &[f64]) -> Result<Self, CanvasError> {
        let [x1, y1, x2, y2] = *coords else {
            return Err(CanvasError::BadCornerCount { got: coords.len() });
        };
        for value in [x1, y1, x2, y2] {
            if !value.is_finite() {
                return Err(CanvasError::NonFiniteCoordinate { value });
            }
        }
        Ok(BoundingBox::new(dvec2(x1, y1), dvec2(x2, y2)))
    }

    /// The bounding box of a given size centered on a point.
    pub fn centered(center: DVec2, width: f64, height: f64) -> Self {
        let half = dvec2(width, height) / 2.0;
        BoundingBox::new(center - half, center + half)
    }

    /// The center point: the midpoint of the two corners.
    pub fn center(&self) -> DVec2 {
        (self.p1 + self.p2) / 2.0
    }

    /// Half-extents `(a, b)` along x and y.
    ///
    /// These are the semi-axes of the inscribed ellipse; negative when the
    /// corners are swapped.
    pub fn semi_axes(&self) -> DVec2 {
        (self.p2 - self.p1) / 2.0
    }
}

/// Fill and stroke colors for the SVG output.
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    Named(String),
    Rgb(u8, u8, u8),
    Raw(String),
}

impl Color {
    /// A CSS/SVG named color.
    pub fn named(name: impl Into<String>) -> Color {
        Color::Named(name.into())
    }

    /// A raw color string passed through verbatim (e.g. `#FF8787`).
    pub fn raw(value: impl Into<String>) -> Color {
        Color::Raw(value.into())
    }

    /// A gray at the given percentage of full intensity, on the ramp used
    /// by Tk's `grayNN` names: `round(percent * 255 / 100)` per channel.
    pub fn gray(percent: u8) -> Color {
        let level = (f64::from(percent.min(100)) * 255.0 / 100.0).round() as u8;
        Color::Rgb(level, level, level)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Named(s) | Color::Raw(s) => write!(f, "{}", s),
            Color::Rgb(r, g, b) => write!(f, "rgb({},{},{})", r, g, b),
        }
    }
}
