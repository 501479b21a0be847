//! polycat: a retained 2D canvas of polygon-approximated rotatable shapes.
//!
//! Ellipses, elliptical arcs and rectangles are realized as fixed-resolution
//! polygons (or open polylines), so any shape can be rotated rigidly around
//! an arbitrary pivot without distorting its silhouette. Shapes live on a
//! tag-indexed [`Canvas`] supporting group translation, rotation and
//! stacking reorder, and render to a static SVG image.
//!
//! The crate ships one scene built from these primitives: a cat wearing a
//! hat, composed in [`scene`] and rendered by [`render_scene`].

pub mod canvas;
pub mod errors;
pub mod geometry;
pub mod log;
pub mod render;
pub mod scene;
pub mod style;
pub mod types;

pub use canvas::{Canvas, Item, ItemId, Target};
pub use errors::CanvasError;
pub use style::{ArcParams, ArcStyle, LineStyle, ShapeKind, ShapeOptions};
pub use types::{BoundingBox, Color};

/// Render the cat-in-a-hat scene to SVG.
///
/// Returns the SVG document string on success, or an error with diagnostics
/// when the canvas dimensions are invalid.
pub fn render_scene(width: f64, height: f64) -> Result<String, miette::Report> {
    let canvas = scene::compose(width, height)?;
    Ok(canvas.to_svg())
}
