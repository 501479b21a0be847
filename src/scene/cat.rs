//! The cat head figure.
//!
//! All feature placement is literal offset data scaled by the head radius
//! `r`, tuned by eye against the reference drawing. Every shape carries the
//! figure name as a tag; features carry an additional `"{name}.feature"`
//! tag for per-feature stacking fixes.

use std::f64::consts::FRAC_1_SQRT_2;

use glam::{DVec2, dvec2};

use crate::canvas::{Canvas, ItemId};
use crate::style::{ArcParams, ArcStyle, ShapeOptions};
use crate::types::{BoundingBox, Color};

/// A cat head drawn on a canvas, skull radius `r`, centered on `origin`.
pub struct Cat {
    pub name: String,
    pub origin: DVec2,
    pub r: f64,
}

impl Cat {
    pub fn draw(canvas: &mut Canvas, origin: DVec2, r: f64, name: &str) -> Cat {
        let cat = Cat {
            name: name.to_string(),
            origin,
            r,
        };
        let skull = canvas.create_ellipse(
            BoundingBox::new(origin - DVec2::splat(r), origin + DVec2::splat(r)),
            ShapeOptions::new().fill(Color::gray(65)).tag(name),
        );
        cat.draw_ears(canvas, skull);
        cat.draw_eyes(canvas);
        cat.draw_pupils(canvas);
        cat.draw_muzzle(canvas);
        cat.draw_nose(canvas);
        cat.draw_tongue(canvas);
        cat.draw_whiskers(canvas);
        cat
    }

    fn feature_tag(&self, feature: &str) -> String {
        format!("{}.{}", self.name, feature)
    }

    /// An ellipse of the given size, centered on `center` and rotated by
    /// `angle` degrees around its own center.
    fn draw_ellipse(
        &self,
        canvas: &mut Canvas,
        width: f64,
        height: f64,
        center: DVec2,
        angle: f64,
        options: ShapeOptions,
    ) -> ItemId {
        let id = canvas.create_ellipse(
            BoundingBox::centered(center, width, height),
            options.tag(self.name.clone()),
        );
        canvas.rotate(id, angle, center);
        id
    }

    fn draw_arc(
        &self,
        canvas: &mut Canvas,
        width: f64,
        height: f64,
        center: DVec2,
        params: ArcParams,
        options: ShapeOptions,
    ) -> ItemId {
        canvas.create_arc(
            BoundingBox::centered(center, width, height),
            params,
            options.tag(self.name.clone()),
        )
    }

    /// Two ears, each an outer and an inner ellipse tilted along the skull
    /// diagonal, tucked under the skull.
    fn draw_ears(&self, canvas: &mut Canvas, skull: ItemId) {
        let (o, r) = (self.origin, self.r);
        let ears = self.feature_tag("ears");
        let d = r * FRAC_1_SQRT_2;
        for (side, angle) in [(1.0, 45.0), (-1.0, 135.0)] {
            let center = dvec2(o.x + side * d, o.y - d);
            self.draw_ellipse(
                canvas,
                0.8 * r,
                0.45 * r,
                center,
                angle,
                ShapeOptions::new().fill(Color::gray(65)).tag(ears.clone()),
            );
            self.draw_ellipse(
                canvas,
                0.5 * r,
                0.25 * r,
                center,
                angle,
                ShapeOptions::new().fill(Color::gray(75)).tag(ears.clone()),
            );
        }
        canvas.lower(ears.as_str(), Some(skull.into()));
    }

    fn draw_eyes(&self, canvas: &mut Canvas) {
        let (o, r) = (self.origin, self.r);
        let eyes = self.feature_tag("eyes");
        let d = r * FRAC_1_SQRT_2 / 2.0;
        for (side, angle) in [(1.0, 30.0), (-1.0, 150.0)] {
            self.draw_ellipse(
                canvas,
                0.55 * r,
                0.3 * r,
                dvec2(o.x + side * d, o.y - d),
                angle,
                ShapeOptions::new()
                    .fill(Color::named("white"))
                    .outline(Color::named("black"))
                    .outline_width(2.0)
                    .tag(eyes.clone()),
            );
        }
    }

    /// Vertical slit pupils: narrow ellipses stood upright by a 90-degree
    /// turn.
    fn draw_pupils(&self, canvas: &mut Canvas) {
        let (o, r) = (self.origin, self.r);
        let pupils = self.feature_tag("pupils");
        let d = r * FRAC_1_SQRT_2 / 2.0;
        for side in [1.0, -1.0] {
            self.draw_ellipse(
                canvas,
                0.3 * r,
                0.1 * r,
                dvec2(o.x + side * d, o.y - d),
                90.0,
                ShapeOptions::new()
                    .fill(Color::named("black"))
                    .tag(pupils.clone()),
            );
        }
    }

    fn draw_muzzle(&self, canvas: &mut Canvas) {
        let (o, r) = (self.origin, self.r);
        let muzzle = self.feature_tag("muzzle");
        let dx = 0.4 * r * 30.0_f64.to_radians().cos();
        let dy = 0.35 * r * 30.0_f64.to_radians().sin();
        for (side, angle) in [(1.0, 20.0), (-1.0, 160.0)] {
            self.draw_ellipse(
                canvas,
                0.72 * r,
                0.35 * r,
                dvec2(o.x + side * dx, o.y + dy),
                angle,
                ShapeOptions::new()
                    .fill(Color::gray(85))
                    .outline(Color::named("black"))
                    .outline_width(2.0)
                    .tag(muzzle.clone()),
            );
        }
    }

    /// The nose: a downward-pointing quarter wedge under the eyes.
    fn draw_nose(&self, canvas: &mut Canvas) {
        let (o, r) = (self.origin, self.r);
        self.draw_arc(
            canvas,
            0.5 * r,
            0.5 * r,
            dvec2(o.x, o.y + 0.25 * r),
            ArcParams::new(45.0, 90.0, ArcStyle::Pieslice),
            ShapeOptions::new()
                .fill(Color::gray(42))
                .tag(self.feature_tag("nose")),
        );
    }

    fn draw_tongue(&self, canvas: &mut Canvas) {
        let (o, r) = (self.origin, self.r);
        let tongue = self.feature_tag("tongue");
        self.draw_ellipse(
            canvas,
            0.5 * r,
            0.3 * r,
            dvec2(o.x, o.y + 0.37 * r),
            0.0,
            ShapeOptions::new()
                .fill(Color::raw("#FF8787"))
                .outline(Color::named("black"))
                .outline_width(2.0)
                .tag(tongue.clone()),
        );
        canvas.lower(tongue.as_str(), Some(self.feature_tag("muzzle").into()));
    }

    /// Six whisker arcs, three per side, each an open polyline rotated
    /// around its root point on the muzzle.
    fn draw_whiskers(&self, canvas: &mut Canvas) {
        let (o, r) = (self.origin, self.r);
        let whiskers = self.feature_tag("whiskers");
        let (w, h) = (1.5 * r, 0.35 * r);
        // (root offset from origin in units of r, start angle, tilt)
        let layout = [
            (dvec2(0.55, 0.10), 10.0, 0.0),
            (dvec2(0.37, 0.17), 10.0, -10.0),
            (dvec2(0.25, 0.25), 10.0, -20.0),
            (dvec2(-0.55, 0.10), 90.0, 0.0),
            (dvec2(-0.37, 0.17), 90.0, 10.0),
            (dvec2(-0.25, 0.25), 90.0, 20.0),
        ];
        for (offset, start, tilt) in layout {
            let root = o + offset * r;
            let center = dvec2(root.x, root.y + h / 2.0);
            let id = self.draw_arc(
                canvas,
                w,
                h,
                center,
                ArcParams::new(start, 80.0, ArcStyle::Arc),
                ShapeOptions::new()
                    .outline(Color::named("black"))
                    .outline_width(2.0)
                    .tag(whiskers.clone()),
            );
            canvas.rotate(id, tilt, root);
        }
    }
}
