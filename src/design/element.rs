//! Design elements: the furniture records placed in a room
//!
//! Elements are plain data. Every mutation is a copy-on-write operation that
//! returns a fresh record; the editing session swaps the new record into its
//! collection, so a view holding the previous state never observes a
//! half-applied change.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::design::color::Rgb;
use crate::geom::{Bounds, Point2};

/// Broad element category. Only furniture is fully built out; the other
/// variants exist so saved designs from richer editors still load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Furniture,
    Wall,
    Window,
    Door,
    Decoration,
}

/// Catalog of furniture kinds with bespoke 3D builders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FurnitureKind {
    Sofa,
    Chair,
    Table,
    Bed,
    Desk,
    Bookshelf,
    Dresser,
    Nightstand,
    Rug,
}

impl FurnitureKind {
    pub const ALL: [FurnitureKind; 9] = [
        FurnitureKind::Sofa,
        FurnitureKind::Chair,
        FurnitureKind::Table,
        FurnitureKind::Bed,
        FurnitureKind::Desk,
        FurnitureKind::Bookshelf,
        FurnitureKind::Dresser,
        FurnitureKind::Nightstand,
        FurnitureKind::Rug,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FurnitureKind::Sofa => "Sofa",
            FurnitureKind::Chair => "Chair",
            FurnitureKind::Table => "Table",
            FurnitureKind::Bed => "Bed",
            FurnitureKind::Desk => "Desk",
            FurnitureKind::Bookshelf => "Bookshelf",
            FurnitureKind::Dresser => "Dresser",
            FurnitureKind::Nightstand => "Nightstand",
            FurnitureKind::Rug => "Rug",
        }
    }

    /// Catalog default dimensions in meters (width, length, height)
    pub fn default_dimensions(&self) -> Dimensions {
        let (width, length, height) = match self {
            FurnitureKind::Sofa => (2.0, 0.9, 0.8),
            FurnitureKind::Chair => (0.7, 0.7, 0.9),
            FurnitureKind::Table => (1.2, 0.8, 0.75),
            FurnitureKind::Bed => (1.5, 2.0, 0.5),
            FurnitureKind::Desk => (1.2, 0.6, 0.75),
            FurnitureKind::Bookshelf => (0.8, 0.3, 1.8),
            FurnitureKind::Dresser => (1.0, 0.5, 0.8),
            FurnitureKind::Nightstand => (0.4, 0.4, 0.6),
            FurnitureKind::Rug => (2.0, 3.0, 0.01),
        };
        Dimensions { width, length, height }
    }
}

/// Fallback dimensions for kinds missing from the catalog
pub fn fallback_dimensions() -> Dimensions {
    Dimensions {
        width: 1.0,
        length: 1.0,
        height: 0.5,
    }
}

/// Element size in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f32,
    pub length: f32,
    pub height: f32,
}

/// A single placed element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignElement {
    /// Stable for the element's lifetime; the only relation selection and
    /// persistence use
    pub id: Uuid,
    pub kind: ElementKind,
    /// None for non-furniture kinds; unknown kinds render as a plain box
    pub furniture: Option<FurnitureKind>,
    /// Center position in room-local metric coordinates
    pub position: Point2,
    pub dimensions: Dimensions,
    /// Degrees. Accumulates from UI increments and drag-set values and is
    /// deliberately never normalized to [0, 360).
    pub rotation: f32,
    pub color: Rgb,
    pub shaded: bool,
    /// Present only while shaded
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub shading_intensity: Option<f32>,
}

impl DesignElement {
    /// Create a furniture element from the catalog at the given position
    pub fn furniture(kind: FurnitureKind, x: f32, y: f32, color: Rgb, rotation: f32) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: ElementKind::Furniture,
            furniture: Some(kind),
            position: Point2::new(x, y),
            dimensions: kind.default_dimensions(),
            rotation,
            color,
            shaded: false,
            shading_intensity: None,
        }
    }

    /// Uniform scale of all three dimensions.
    ///
    /// There is no stored base size; repeated calls compound
    /// multiplicatively. The UI keeps factors in [0.5, 2.0] but the
    /// operation itself imposes no bound.
    pub fn scaled(&self, factor: f32) -> Self {
        let mut out = self.clone();
        out.dimensions.width *= factor;
        out.dimensions.length *= factor;
        out.dimensions.height *= factor;
        out
    }

    pub fn recolored(&self, color: Rgb) -> Self {
        let mut out = self.clone();
        out.color = color;
        out
    }

    pub fn with_shading(&self, intensity: f32) -> Self {
        let mut out = self.clone();
        out.shaded = true;
        out.shading_intensity = Some(intensity);
        out
    }

    pub fn without_shading(&self) -> Self {
        let mut out = self.clone();
        out.shaded = false;
        out.shading_intensity = None;
        out
    }

    pub fn rotated_by(&self, degrees: f32) -> Self {
        let mut out = self.clone();
        out.rotation += degrees;
        out
    }

    pub fn moved_to(&self, position: Point2) -> Self {
        let mut out = self.clone();
        out.position = position;
        out
    }

    /// The four footprint corners in room space, rotated about the element
    /// center. Shared by collision detection and the 2D selection handles.
    pub fn rotated_corners(&self) -> [Point2; 4] {
        let half_w = self.dimensions.width * 0.5;
        let half_l = self.dimensions.length * 0.5;
        let angle = self.rotation.to_radians();
        let local = [
            Point2::new(-half_w, -half_l),
            Point2::new(half_w, -half_l),
            Point2::new(half_w, half_l),
            Point2::new(-half_w, half_l),
        ];
        local.map(|corner| corner.rotated(angle) + self.position)
    }

    /// Bounding box of the rotated footprint
    pub fn footprint_bounds(&self) -> Bounds {
        let corners = self.rotated_corners();
        let mut b = Bounds {
            min_x: corners[0].x,
            max_x: corners[0].x,
            min_y: corners[0].y,
            max_y: corners[0].y,
        };
        for c in &corners[1..] {
            b.min_x = b.min_x.min(c.x);
            b.max_x = b.max_x.max(c.x);
            b.min_y = b.min_y.min(c.y);
            b.max_y = b.max_y.max(c.y);
        }
        b
    }

    /// Advisory overlap test on rotated-footprint bounding boxes.
    ///
    /// False positives are possible for rotated elements whose AABBs overlap
    /// while the footprints do not; callers treat the result as a hint, never
    /// a hard constraint.
    pub fn collides_with(&self, other: &DesignElement) -> bool {
        self.footprint_bounds().overlaps(&other.footprint_bounds())
    }

    /// Hit test a room-space point against the unrotated local frame
    pub fn hit_test(&self, point: Point2) -> bool {
        let local = (point - self.position).rotated(-self.rotation.to_radians());
        let half_w = self.dimensions.width * 0.5;
        let half_l = self.dimensions.length * 0.5;
        local.x >= -half_w && local.x <= half_w && local.y >= -half_l && local.y <= half_l
    }
}

/// Default shading intensity applied by the UI toggle
pub const DEFAULT_SHADING_INTENSITY: f32 = 0.3;
