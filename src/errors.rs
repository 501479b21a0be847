//! Error types with diagnostic codes using miette
//!
//! Everything here is an "invalid argument" in spirit: a malformed corner
//! list, an unrecognized shape or arc-style tag, or a stale item handle.
//! Errors are raised at the call that detects them and propagate to the
//! caller; nothing is caught internally.

use miette::Diagnostic;
use thiserror::Error;

use crate::canvas::ItemId;

/// Errors raised by the canvas and its shape generators
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum CanvasError {
    /// Corner resolution expects exactly two opposite corner points,
    /// i.e. four scalar coordinates.
    #[error("invalid corner coordinates: expected 4 values (x1, y1, x2, y2), got {got}")]
    #[diagnostic(code(polycat::geometry::bad_corner_count))]
    BadCornerCount { got: usize },

    #[error("corner coordinate is not a finite number: {value}")]
    #[diagnostic(code(polycat::geometry::non_finite_coordinate))]
    NonFiniteCoordinate { value: f64 },

    #[error("unknown shape type {name:?}")]
    #[diagnostic(
        code(polycat::canvas::unknown_shape_type),
        help("valid shape types are \"rectangle\", \"ellipse\" and \"arc\"")
    )]
    UnknownShapeType { name: String },

    #[error("unknown arc style {name:?}")]
    #[diagnostic(
        code(polycat::canvas::unknown_arc_style),
        help("valid arc styles are \"pieslice\", \"chord\" and \"arc\"")
    )]
    UnknownArcStyle { name: String },

    #[error("no item with handle {id} on this canvas")]
    #[diagnostic(code(polycat::canvas::no_such_item))]
    NoSuchItem { id: ItemId },

    #[error("canvas dimensions must be finite and positive, got {width} x {height}")]
    #[diagnostic(code(polycat::canvas::bad_dimensions))]
    BadDimensions { width: f64, height: f64 },
}
