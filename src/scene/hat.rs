//! The hat figure: brim, band and crown, three stacked rectangles.
//!
//! Rectangles are drawn as explicit 4-corner polygons so the hat keeps its
//! shape when the finished scene is rotated as a group.

use glam::{DVec2, dvec2};

use crate::canvas::Canvas;
use crate::style::ShapeOptions;
use crate::types::{BoundingBox, Color};

/// A hat sized to a head of radius `r`, drawn around `origin`.
pub struct Hat {
    pub name: String,
    pub origin: DVec2,
    pub r: f64,
}

impl Hat {
    pub fn draw(canvas: &mut Canvas, origin: DVec2, r: f64, name: &str) -> Hat {
        let hat = Hat {
            name: name.to_string(),
            origin,
            r,
        };
        let o = origin;

        canvas.create_rectangle(
            BoundingBox::new(
                dvec2(o.x - 0.5 * r, o.y - 0.04 * r),
                dvec2(o.x + 0.5 * r, o.y + 0.04 * r),
            ),
            ShapeOptions::new()
                .fill(Color::named("black"))
                .tag(hat.part_tag("brim"))
                .tag(name),
        );

        canvas.create_rectangle(
            BoundingBox::new(
                dvec2(o.x - 0.4 * r, o.y - 0.03 * r),
                dvec2(o.x + 0.4 * r, o.y + 0.03 * r),
            ),
            ShapeOptions::new()
                .fill(Color::gray(95))
                .tag(hat.part_tag("band"))
                .tag(name),
        );
        canvas.translate(hat.part_tag("band"), dvec2(0.0, -0.07 * r));

        canvas.create_rectangle(
            BoundingBox::new(
                dvec2(o.x - 0.4 * r, o.y - 0.08 * r),
                dvec2(o.x + 0.4 * r, o.y + 0.08 * r),
            ),
            ShapeOptions::new()
                .fill(Color::named("black"))
                .tag(hat.part_tag("crown"))
                .tag(name),
        );
        canvas.translate(hat.part_tag("crown"), dvec2(0.0, -0.18 * r));

        hat
    }

    fn part_tag(&self, part: &str) -> String {
        format!("{}.{}", self.name, part)
    }
}
