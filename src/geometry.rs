//! Polygon approximation of conics and rigid point-set rotation.
//!
//! Ellipses and elliptical arcs are approximated by polygons with a fixed
//! angular resolution, and rectangles are emitted as explicit 4-corner
//! polygons. That representation is the unit of rotation: every vertex
//! rotates rigidly around the pivot, so the silhouette is preserved. A
//! native primitive redefined by its rotated corner points would skew
//! instead.

use std::f64::consts::TAU;

use glam::{DVec2, dvec2};

use crate::style::ArcStyle;
use crate::types::BoundingBox;

/// Number of vertices approximating a full ellipse.
///
/// Arcs use the same angular density, so a 360-degree arc and a full
/// ellipse are approximated by the same number of points.
pub const ELLIPSE_VERTICES: usize = 300;

/// The four corners of the axis-aligned rectangle spanning `bbox`,
/// in order top-left, top-right, bottom-right, bottom-left.
pub fn rectangle_points(bbox: BoundingBox) -> Vec<DVec2> {
    let c = bbox.center();
    let h = bbox.semi_axes();
    vec![
        dvec2(c.x - h.x, c.y - h.y),
        dvec2(c.x + h.x, c.y - h.y),
        dvec2(c.x + h.x, c.y + h.y),
        dvec2(c.x - h.x, c.y + h.y),
    ]
}

/// The full ellipse inscribed in `bbox`, as [`ELLIPSE_VERTICES`] vertices
/// evenly spaced in parametric angle.
pub fn ellipse_points(bbox: BoundingBox) -> Vec<DVec2> {
    let c = bbox.center();
    let h = bbox.semi_axes();
    let dfi = TAU / ELLIPSE_VERTICES as f64;
    (0..ELLIPSE_VERTICES)
        .map(|i| {
            let fi = i as f64 * dfi;
            dvec2(h.x * fi.cos() + c.x, h.y * fi.sin() + c.y)
        })
        .collect()
}

/// An elliptical arc over the ellipse inscribed in `bbox`, starting at
/// `start_deg` and sweeping `extent_deg` degrees.
///
/// The point count is chosen so the angular density matches
/// [`ellipse_points`]; it is clamped to at least one point so sub-step
/// extents still produce a sliver. A negative extent sweeps the opposite
/// way. The sine term is negated: the y axis grows downward on screen, and
/// the flip keeps `start`/`extent` visually counter-clockwise, matching
/// conventional angle semantics.
///
/// [`ArcStyle::Pieslice`] appends the ellipse center, closing the wedge into
/// a filled sector. [`ArcStyle::Chord`] relies on polygon auto-closing to
/// join the endpoints with a straight edge. [`ArcStyle::Arc`] is the bare
/// open point run, to be drawn as a polyline.
pub fn arc_points(
    bbox: BoundingBox,
    start_deg: f64,
    extent_deg: f64,
    style: ArcStyle,
) -> Vec<DVec2> {
    let c = bbox.center();
    let h = bbox.semi_axes();
    let start = start_deg.to_radians();
    let extent = extent_deg.to_radians();

    let k = ((extent.abs() / TAU) * ELLIPSE_VERTICES as f64)
        .round()
        .max(1.0) as usize;
    let dfi = extent / k as f64;

    let mut points: Vec<DVec2> = (0..k)
        .map(|i| {
            let fi = i as f64 * dfi + start;
            dvec2(h.x * fi.cos() + c.x, h.y * (-fi).sin() + c.y)
        })
        .collect();
    if style == ArcStyle::Pieslice {
        points.push(c);
    }
    points
}

/// Rotate every point rigidly by `angle_deg` degrees around `pivot`,
/// in place.
///
/// The rotation angle is negated before building the matrix; combined with
/// the downward y axis, a positive angle turns shapes counter-clockwise on
/// screen (and a negative one clockwise).
pub fn rotate_points(points: &mut [DVec2], angle_deg: f64, pivot: DVec2) {
    let t = -angle_deg.to_radians();
    let (sin_t, cos_t) = t.sin_cos();
    for p in points {
        let d = *p - pivot;
        *p = dvec2(
            d.x * cos_t - d.y * sin_t + pivot.x,
            d.x * sin_t + d.y * cos_t + pivot.y,
        );
    }
}
