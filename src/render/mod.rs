//! Rendering of canvas items to SVG.
//!
//! - `shapes`: the drawable geometry variants (polygon / polyline) and the
//!   `Drawable` trait dispatched over them
//! - `svg`: the SVG document writer

pub mod shapes;
pub mod svg;

pub use shapes::{Drawable, Geometry, Polygon, Polyline};
