//! Drawable geometry backing canvas items.
//!
//! Every item is an ordered point sequence: a closed polygon (filled,
//! auto-closing) or an open polyline (stroke only). The two variants share
//! the [`Drawable`] trait, dispatched over [`Geometry`] with `enum_dispatch`.

use enum_dispatch::enum_dispatch;
use glam::DVec2;

use super::svg::{points_attr, stroke_attrs};
use crate::style::ShapeOptions;

/// Common behavior of every drawable point sequence.
#[enum_dispatch]
pub trait Drawable {
    /// The flattened point sequence defining this shape.
    fn points(&self) -> &[DVec2];

    /// Mutable access for in-place rewrites (rotation, translation).
    fn points_mut(&mut self) -> &mut Vec<DVec2>;

    /// Whether the outline closes back on itself when rendered.
    fn is_closed(&self) -> bool;

    /// Render this shape as a single SVG element.
    fn svg_element(&self, options: &ShapeOptions) -> String;
}

/// A closed, fillable polygon.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub points: Vec<DVec2>,
}

impl Drawable for Polygon {
    fn points(&self) -> &[DVec2] {
        &self.points
    }

    fn points_mut(&mut self) -> &mut Vec<DVec2> {
        &mut self.points
    }

    fn is_closed(&self) -> bool {
        true
    }

    fn svg_element(&self, options: &ShapeOptions) -> String {
        let fill = match &options.fill {
            Some(color) => color.to_string(),
            None => "none".to_string(),
        };
        format!(
            "<polygon points=\"{}\" fill=\"{}\"{}/>",
            points_attr(&self.points),
            fill,
            stroke_attrs(options, options.outline.as_ref()),
        )
    }
}

/// An open polyline; never filled.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    pub points: Vec<DVec2>,
}

impl Drawable for Polyline {
    fn points(&self) -> &[DVec2] {
        &self.points
    }

    fn points_mut(&mut self) -> &mut Vec<DVec2> {
        &mut self.points
    }

    fn is_closed(&self) -> bool {
        false
    }

    fn svg_element(&self, options: &ShapeOptions) -> String {
        // An open line must have a visible stroke; default to black when no
        // outline color was configured.
        let black = crate::types::Color::named("black");
        let stroke = options.outline.as_ref().unwrap_or(&black);
        format!(
            "<polyline points=\"{}\" fill=\"none\"{}/>",
            points_attr(&self.points),
            stroke_attrs(options, Some(stroke)),
        )
    }
}

/// Uniform storage for the two drawable variants.
#[enum_dispatch(Drawable)]
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Polygon,
    Polyline,
}
