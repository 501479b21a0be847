//! The retained drawing surface.
//!
//! A [`Canvas`] owns every shape drawn on it. Items are created once during
//! scene setup, optionally rotated or moved, and never destroyed; the item
//! order is the stacking (paint) order. Group operations go through an
//! explicit tag index mapping a group name to the handles that carry it.

use std::collections::HashMap;

use glam::DVec2;

use crate::errors::CanvasError;
use crate::geometry::{arc_points, ellipse_points, rectangle_points, rotate_points};
use crate::log::debug;
use crate::render::shapes::{Drawable, Geometry, Polygon, Polyline};
use crate::style::{ArcParams, ArcStyle, ShapeKind, ShapeOptions};
use crate::types::{BoundingBox, Color};

/// Unique handle of a canvas item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u32);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a group operation applies to: a single handle or every item
/// carrying a tag.
#[derive(Clone, Debug, PartialEq)]
pub enum Target {
    Id(ItemId),
    Tag(String),
}

impl From<ItemId> for Target {
    fn from(id: ItemId) -> Self {
        Target::Id(id)
    }
}

impl From<&str> for Target {
    fn from(tag: &str) -> Self {
        Target::Tag(tag.to_string())
    }
}

impl From<String> for Target {
    fn from(tag: String) -> Self {
        Target::Tag(tag)
    }
}

/// A single renderable entity: geometry plus style, identified by a unique
/// handle and zero or more tags (stored in its options).
#[derive(Clone, Debug)]
pub struct Item {
    pub id: ItemId,
    pub geometry: Geometry,
    pub options: ShapeOptions,
}

/// The retained canvas.
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    pub background: Color,
    items: Vec<Item>,
    tag_index: HashMap<String, Vec<ItemId>>,
    next_id: u32,
}

impl Canvas {
    /// A blank canvas of the given size with a white background.
    pub fn new(width: f64, height: f64) -> Self {
        Canvas {
            width,
            height,
            background: Color::named("white"),
            items: Vec::new(),
            tag_index: HashMap::new(),
            next_id: 1,
        }
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Items in stacking order, bottom first.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn insert(&mut self, geometry: Geometry, options: ShapeOptions) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        for tag in &options.tags {
            self.tag_index.entry(tag.clone()).or_default().push(id);
        }
        debug!(
            ?id,
            points = geometry.points().len(),
            closed = geometry.is_closed(),
            "creating canvas item"
        );
        self.items.push(Item { id, geometry, options });
        id
    }

    /// Draw a filled polygon from an explicit point list.
    pub fn create_polygon(&mut self, points: Vec<DVec2>, options: ShapeOptions) -> ItemId {
        self.insert(Polygon { points }.into(), options)
    }

    /// Draw an open polyline from an explicit point list.
    pub fn create_polyline(&mut self, points: Vec<DVec2>, options: ShapeOptions) -> ItemId {
        self.insert(Polyline { points }.into(), options)
    }

    /// Draw a rectangle spanned by two opposite corners, realized as an
    /// explicit 4-corner polygon so it stays rectangular under rotation.
    pub fn create_rectangle(&mut self, bbox: BoundingBox, options: ShapeOptions) -> ItemId {
        self.create_polygon(rectangle_points(bbox), options)
    }

    /// Draw the ellipse inscribed in a bounding box, approximated by a
    /// fixed-resolution polygon.
    pub fn create_ellipse(&mut self, bbox: BoundingBox, options: ShapeOptions) -> ItemId {
        self.create_polygon(ellipse_points(bbox), options)
    }

    /// Draw an elliptical arc over the ellipse inscribed in a bounding box.
    /// Pieslice and chord styles fill; the open style strokes a polyline.
    pub fn create_arc(
        &mut self,
        bbox: BoundingBox,
        params: ArcParams,
        options: ShapeOptions,
    ) -> ItemId {
        let points = arc_points(bbox, params.start, params.extent, params.style);
        match params.style {
            ArcStyle::Pieslice | ArcStyle::Chord => self.create_polygon(points, options),
            ArcStyle::Arc => self.create_polyline(points, options),
        }
    }

    /// The unified factory: dispatch on a shape-type tag.
    ///
    /// `kind` must be one of `rectangle`, `ellipse` or `arc`; arcs take
    /// their start, extent and closure style from `arc`, falling back to
    /// [`ArcParams::default`] when `None` (rectangles and ellipses ignore
    /// it). Anything else fails with [`CanvasError::UnknownShapeType`].
    pub fn create_shape(
        &mut self,
        kind: &str,
        bbox: BoundingBox,
        arc: Option<ArcParams>,
        options: ShapeOptions,
    ) -> Result<ItemId, CanvasError> {
        Ok(match kind.parse::<ShapeKind>()? {
            ShapeKind::Rectangle => self.create_rectangle(bbox, options),
            ShapeKind::Ellipse => self.create_ellipse(bbox, options),
            ShapeKind::Arc => self.create_arc(bbox, arc.unwrap_or_default(), options),
        })
    }

    fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// All handles matching a target, in creation order for tags. An unknown
    /// tag or handle matches nothing.
    pub fn find(&self, target: impl Into<Target>) -> Vec<ItemId> {
        match target.into() {
            Target::Id(id) => self.item(id).map(|item| vec![item.id]).unwrap_or_default(),
            Target::Tag(tag) => self.tag_index.get(&tag).cloned().unwrap_or_default(),
        }
    }

    /// Read back an item's current flattened point sequence.
    pub fn coords(&self, id: ItemId) -> Option<&[DVec2]> {
        self.item(id).map(|item| item.geometry.points())
    }

    /// Overwrite an item's point sequence, replacing its geometry in place.
    pub fn set_coords(&mut self, id: ItemId, points: Vec<DVec2>) -> Result<(), CanvasError> {
        let item = self.item_mut(id).ok_or(CanvasError::NoSuchItem { id })?;
        *item.geometry.points_mut() = points;
        Ok(())
    }

    /// Attach a tag to every item matching the target.
    pub fn add_tag(&mut self, tag: impl Into<String>, target: impl Into<Target>) {
        let tag = tag.into();
        for id in self.find(target) {
            let item = self.item_mut(id).expect("find returned a live handle");
            if !item.options.tags.contains(&tag) {
                item.options.tags.push(tag.clone());
                self.tag_index.entry(tag.clone()).or_default().push(id);
            }
        }
    }

    /// Attach a tag to every item on the canvas.
    pub fn add_tag_all(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        let all: Vec<ItemId> = self.items.iter().map(|item| item.id).collect();
        for id in all {
            self.add_tag(tag.clone(), id);
        }
    }

    /// Translate every matched item by `delta`.
    pub fn translate(&mut self, target: impl Into<Target>, delta: DVec2) {
        for id in self.find(target) {
            let item = self.item_mut(id).expect("find returned a live handle");
            for p in item.geometry.points_mut() {
                *p += delta;
            }
        }
    }

    /// Rotate every matched item rigidly by `angle_deg` degrees around
    /// `pivot`, rewriting its stored coordinates in place.
    ///
    /// Works on any point-backed item regardless of point count. A positive
    /// angle turns counter-clockwise on screen (see
    /// [`crate::geometry::rotate_points`]). Unmatched targets are a no-op.
    pub fn rotate(&mut self, target: impl Into<Target>, angle_deg: f64, pivot: DVec2) {
        let matched = self.find(target);
        debug!(count = matched.len(), angle_deg, "rotating items");
        for id in matched {
            let item = self.item_mut(id).expect("find returned a live handle");
            rotate_points(item.geometry.points_mut(), angle_deg, pivot);
        }
    }

    /// Move the matched items up in the stacking order: just above the
    /// topmost item matching `above`, or all the way to the top.
    pub fn raise(&mut self, target: impl Into<Target>, above: Option<Target>) {
        self.restack(target.into(), above, true);
    }

    /// Move the matched items down in the stacking order: just below the
    /// bottommost item matching `below`, or all the way to the bottom.
    pub fn lower(&mut self, target: impl Into<Target>, below: Option<Target>) {
        self.restack(target.into(), below, false);
    }

    fn restack(&mut self, target: Target, reference: Option<Target>, up: bool) {
        let moved_ids = self.find(target);
        if moved_ids.is_empty() {
            return;
        }
        let mut moved = Vec::new();
        let mut rest = Vec::new();
        for item in self.items.drain(..) {
            if moved_ids.contains(&item.id) {
                moved.push(item);
            } else {
                rest.push(item);
            }
        }
        let reference_ids = reference.map(|r| {
            match r {
                Target::Id(id) => vec![id],
                Target::Tag(tag) => self.tag_index.get(&tag).cloned().unwrap_or_default(),
            }
        });
        let at = match (&reference_ids, up) {
            (Some(ids), true) => rest
                .iter()
                .rposition(|item| ids.contains(&item.id))
                .map(|i| i + 1)
                .unwrap_or(rest.len()),
            (Some(ids), false) => rest
                .iter()
                .position(|item| ids.contains(&item.id))
                .unwrap_or(0),
            (None, true) => rest.len(),
            (None, false) => 0,
        };
        self.items = rest;
        for (offset, item) in moved.into_iter().enumerate() {
            self.items.insert(at + offset, item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ELLIPSE_VERTICES;
    use glam::dvec2;

    fn unit_box() -> BoundingBox {
        BoundingBox::new(dvec2(0.0, 0.0), dvec2(10.0, 10.0))
    }

    #[test]
    fn factory_dispatches_on_type_tag() {
        let mut canvas = Canvas::new(100.0, 100.0);
        let rect = canvas
            .create_shape("rectangle", unit_box(), None, ShapeOptions::new())
            .unwrap();
        let ellipse = canvas
            .create_shape("ellipse", unit_box(), None, ShapeOptions::new())
            .unwrap();
        let arc = canvas
            .create_shape("arc", unit_box(), None, ShapeOptions::new())
            .unwrap();
        assert_eq!(canvas.coords(rect).unwrap().len(), 4);
        assert_eq!(canvas.coords(ellipse).unwrap().len(), ELLIPSE_VERTICES);
        // Default arc: 90-degree pieslice, a quarter of the vertices plus
        // the appended center.
        assert_eq!(canvas.coords(arc).unwrap().len(), 76);
    }

    #[test]
    fn factory_forwards_arc_parameters() {
        let mut canvas = Canvas::new(100.0, 100.0);
        let open = canvas
            .create_shape(
                "arc",
                unit_box(),
                Some(ArcParams::new(10.0, 80.0, ArcStyle::Arc)),
                ShapeOptions::new(),
            )
            .unwrap();
        let item = canvas.items().find(|item| item.id == open).unwrap();
        assert!(!item.geometry.is_closed());

        let chord = canvas
            .create_shape(
                "arc",
                unit_box(),
                Some(ArcParams::new(30.0, 120.0, ArcStyle::Chord)),
                ShapeOptions::new(),
            )
            .unwrap();
        // A third of the vertices, closed without the pieslice center.
        assert_eq!(canvas.coords(chord).unwrap().len(), 100);
        let item = canvas.items().find(|item| item.id == chord).unwrap();
        assert!(item.geometry.is_closed());
    }

    #[test]
    fn factory_rejects_unknown_type_tag() {
        let mut canvas = Canvas::new(100.0, 100.0);
        let err = canvas
            .create_shape("triangle", unit_box(), None, ShapeOptions::new())
            .unwrap_err();
        assert_eq!(
            err,
            CanvasError::UnknownShapeType {
                name: "triangle".to_string()
            }
        );
        assert!(canvas.is_empty());
    }

    #[test]
    fn open_arc_style_creates_a_polyline() {
        let mut canvas = Canvas::new(100.0, 100.0);
        let id = canvas.create_arc(
            unit_box(),
            ArcParams::new(10.0, 80.0, ArcStyle::Arc),
            ShapeOptions::new(),
        );
        let item = canvas.items().find(|item| item.id == id).unwrap();
        assert!(!item.geometry.is_closed());
    }

    #[test]
    fn tags_index_items_for_group_lookup() {
        let mut canvas = Canvas::new(100.0, 100.0);
        let a = canvas.create_rectangle(unit_box(), ShapeOptions::new().tag("face"));
        let b = canvas.create_ellipse(unit_box(), ShapeOptions::new().tag("face").tag("eye"));
        let c = canvas.create_rectangle(unit_box(), ShapeOptions::new());

        assert_eq!(canvas.find("face"), vec![a, b]);
        assert_eq!(canvas.find("eye"), vec![b]);
        assert_eq!(canvas.find("nope"), Vec::<ItemId>::new());
        assert_eq!(canvas.find(c), vec![c]);

        canvas.add_tag("face", c);
        assert_eq!(canvas.find("face"), vec![a, b, c]);
        // Re-tagging is idempotent.
        canvas.add_tag("face", c);
        assert_eq!(canvas.find("face"), vec![a, b, c]);

        canvas.add_tag_all("everything");
        assert_eq!(canvas.find("everything").len(), 3);
    }

    #[test]
    fn translate_moves_every_point_of_a_group() {
        let mut canvas = Canvas::new(100.0, 100.0);
        let a = canvas.create_rectangle(unit_box(), ShapeOptions::new().tag("hat"));
        let b = canvas.create_rectangle(unit_box(), ShapeOptions::new().tag("hat"));
        canvas.translate("hat", dvec2(3.0, -4.0));
        for id in [a, b] {
            assert_eq!(canvas.coords(id).unwrap()[0], dvec2(3.0, -4.0));
        }
    }

    #[test]
    fn rotate_by_tag_rewrites_all_matched_items() {
        let mut canvas = Canvas::new(100.0, 100.0);
        let a = canvas.create_rectangle(unit_box(), ShapeOptions::new().tag("group"));
        let b = canvas.create_rectangle(
            BoundingBox::new(dvec2(20.0, 20.0), dvec2(30.0, 30.0)),
            ShapeOptions::new().tag("group"),
        );
        let before_a = canvas.coords(a).unwrap().to_vec();
        canvas.rotate("group", 90.0, dvec2(5.0, 5.0));
        // Top-left corner (0,0) of the first rectangle maps to (5-5, 5+(-5)) rotated:
        // with t = -90deg, (x', y') = (y, 10 - x) around (5,5).
        assert!(canvas.coords(a).unwrap()[0].distance(dvec2(0.0, 10.0)) < 1e-9);
        assert_ne!(canvas.coords(a).unwrap()[0], before_a[0]);
        assert!(canvas.coords(b).unwrap()[0].distance(dvec2(20.0, -10.0)) < 1e-9);
    }

    #[test]
    fn rotate_unmatched_target_is_a_no_op() {
        let mut canvas = Canvas::new(100.0, 100.0);
        let id = canvas.create_rectangle(unit_box(), ShapeOptions::new());
        let before = canvas.coords(id).unwrap().to_vec();
        canvas.rotate("ghost", 45.0, dvec2(0.0, 0.0));
        assert_eq!(canvas.coords(id).unwrap(), &before[..]);
    }

    #[test]
    fn set_coords_overwrites_and_checks_the_handle() {
        let mut canvas = Canvas::new(100.0, 100.0);
        let id = canvas.create_rectangle(unit_box(), ShapeOptions::new());
        canvas
            .set_coords(id, vec![dvec2(1.0, 1.0), dvec2(2.0, 2.0)])
            .unwrap();
        assert_eq!(canvas.coords(id).unwrap().len(), 2);

        let stale = ItemId(999);
        assert_eq!(
            canvas.set_coords(stale, Vec::new()),
            Err(CanvasError::NoSuchItem { id: stale })
        );
    }

    #[test]
    fn lower_moves_items_below_a_reference() {
        let mut canvas = Canvas::new(100.0, 100.0);
        let skull = canvas.create_ellipse(unit_box(), ShapeOptions::new());
        let ear1 = canvas.create_ellipse(unit_box(), ShapeOptions::new().tag("ears"));
        let ear2 = canvas.create_ellipse(unit_box(), ShapeOptions::new().tag("ears"));
        canvas.lower("ears", Some(skull.into()));
        let order: Vec<ItemId> = canvas.items().map(|item| item.id).collect();
        assert_eq!(order, vec![ear1, ear2, skull]);
    }

    #[test]
    fn raise_and_lower_without_reference_go_to_the_extremes() {
        let mut canvas = Canvas::new(100.0, 100.0);
        let a = canvas.create_rectangle(unit_box(), ShapeOptions::new());
        let b = canvas.create_rectangle(unit_box(), ShapeOptions::new());
        let c = canvas.create_rectangle(unit_box(), ShapeOptions::new());

        canvas.raise(a, None);
        let order: Vec<ItemId> = canvas.items().map(|item| item.id).collect();
        assert_eq!(order, vec![b, c, a]);

        canvas.lower(c, None);
        let order: Vec<ItemId> = canvas.items().map(|item| item.id).collect();
        assert_eq!(order, vec![c, b, a]);
    }
}
