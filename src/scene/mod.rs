//! Scene composition: a cat wearing a hat.
//!
//! Pure placement arithmetic over the canvas primitives. Each figure tags
//! its shapes with the figure name so the whole figure can be moved,
//! restacked or rotated as a group.

pub mod cat;
pub mod hat;

pub use cat::Cat;
pub use hat::Hat;

use glam::dvec2;

use crate::canvas::Canvas;
use crate::errors::CanvasError;
use crate::types::Color;

/// Tag carried by every shape of the finished scene.
pub const GROUP_TAG: &str = "cat-in-hat";

/// Compose the full scene on a fresh canvas of the given size.
///
/// The cat sits at the canvas center; its head radius is a third of the
/// short canvas edge, matching the 7 cm head the original 800x800 scene
/// used. The hat is dropped onto the head, then the whole assembly is
/// tilted 15 degrees clockwise (negative angle, see
/// [`crate::geometry::rotate_points`]).
pub fn compose(width: f64, height: f64) -> Result<Canvas, CanvasError> {
    if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
        return Err(CanvasError::BadDimensions { width, height });
    }
    let mut canvas = Canvas::new(width, height).with_background(Color::named("lightyellow"));
    let origin = dvec2(width / 2.0, height / 2.0);
    let r = 0.33 * width.min(height);

    let cat = Cat::draw(&mut canvas, origin, r, "tom");
    let hat = Hat::draw(&mut canvas, origin, r, "topper");
    canvas.translate(hat.name.as_str(), dvec2(0.0, -0.95 * cat.r));

    canvas.add_tag_all(GROUP_TAG);
    canvas.rotate(GROUP_TAG, -15.0, origin);
    Ok(canvas)
}
