//! Room footprint geometry
//!
//! Pure functions over the shape record; no rendering or input state here.
//! All four topologies are origin-anchored: the outline starts at (0,0) and
//! extends into positive x/y, so the circle sits with its center at
//! (radius, radius). Centering is the caller's job, always derived from the
//! vertex bounding box rather than assumed to be dimensions/2.

use serde::{Deserialize, Serialize};
use crate::design::color::Rgb;
use crate::geom::{point_in_polygon, Bounds, Point2};

/// Segment count used to approximate the circular footprint
pub const CIRCLE_SEGMENTS: usize = 36;

/// Room footprint: shape tag and its metric dimensions as one tagged union
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RoomShape {
    Rectangle {
        width: f32,
        length: f32,
    },
    Square {
        size: f32,
    },
    /// Rectangle with the upper-right corner removed
    LShape {
        width: f32,
        length: f32,
        cutout_width: f32,
        cutout_length: f32,
    },
    Circle {
        radius: f32,
    },
}

impl RoomShape {
    /// Ordered, closed outline of the footprint for rendering and containment
    pub fn vertices(&self) -> Vec<Point2> {
        match *self {
            RoomShape::Rectangle { width, length } => vec![
                Point2::new(0.0, 0.0),
                Point2::new(width, 0.0),
                Point2::new(width, length),
                Point2::new(0.0, length),
            ],
            RoomShape::Square { size } => vec![
                Point2::new(0.0, 0.0),
                Point2::new(size, 0.0),
                Point2::new(size, size),
                Point2::new(0.0, size),
            ],
            RoomShape::LShape {
                width,
                length,
                cutout_width,
                cutout_length,
            } => vec![
                Point2::new(0.0, 0.0),
                Point2::new(width, 0.0),
                Point2::new(width, cutout_length),
                Point2::new(width - cutout_width, cutout_length),
                Point2::new(width - cutout_width, length),
                Point2::new(0.0, length),
            ],
            RoomShape::Circle { radius } => (0..CIRCLE_SEGMENTS)
                .map(|i| {
                    let angle = (i as f32 / CIRCLE_SEGMENTS as f32) * std::f32::consts::TAU;
                    Point2::new(
                        radius * angle.cos() + radius,
                        radius * angle.sin() + radius,
                    )
                })
                .collect(),
        }
    }

    /// Is a room-local point inside the footprint?
    ///
    /// The circle uses the exact disc rather than its polygon approximation;
    /// everything else ray-casts against the outline. Points exactly on the
    /// boundary may classify either way.
    pub fn contains(&self, point: Point2) -> bool {
        match *self {
            RoomShape::Circle { radius } => {
                let center = Point2::new(radius, radius);
                point.distance(center) <= radius
            }
            _ => point_in_polygon(point, &self.vertices()),
        }
    }

    /// Floor area in square meters
    pub fn area(&self) -> f32 {
        match *self {
            RoomShape::Rectangle { width, length } => width * length,
            RoomShape::Square { size } => size * size,
            RoomShape::LShape {
                width,
                length,
                cutout_width,
                cutout_length,
            } => width * length - cutout_width * cutout_length,
            RoomShape::Circle { radius } => std::f32::consts::PI * radius * radius,
        }
    }

    /// Largest linear extent, used for view fitting and camera framing
    pub fn max_extent(&self) -> f32 {
        match *self {
            RoomShape::Rectangle { width, length } => width.max(length),
            RoomShape::Square { size } => size,
            RoomShape::LShape { width, length, .. } => width.max(length),
            RoomShape::Circle { radius } => radius * 2.0,
        }
    }

    /// Bounding box of the generated outline
    pub fn bounds(&self) -> Bounds {
        // Outline is never empty for any shape variant
        Bounds::of(&self.vertices()).unwrap_or(Bounds {
            min_x: 0.0,
            max_x: 0.0,
            min_y: 0.0,
            max_y: 0.0,
        })
    }

    /// Geometric center, from the outline bounding box
    pub fn center(&self) -> Point2 {
        self.bounds().center()
    }

    /// Validate dimensions at the room-setup boundary.
    ///
    /// The geometry functions themselves do not re-check this; they only
    /// guarantee not to panic on bad input.
    pub fn validate(&self) -> Result<(), String> {
        let positive = |name: &str, v: f32| -> Result<(), String> {
            if v > 0.0 {
                Ok(())
            } else {
                Err(format!("{} must be positive, got {}", name, v))
            }
        };
        match *self {
            RoomShape::Rectangle { width, length } => {
                positive("width", width)?;
                positive("length", length)
            }
            RoomShape::Square { size } => positive("size", size),
            RoomShape::LShape {
                width,
                length,
                cutout_width,
                cutout_length,
            } => {
                positive("width", width)?;
                positive("length", length)?;
                positive("cutout width", cutout_width)?;
                positive("cutout length", cutout_length)?;
                if cutout_width >= width {
                    return Err("cutout width must be smaller than width".to_string());
                }
                if cutout_length >= length {
                    return Err("cutout length must be smaller than length".to_string());
                }
                Ok(())
            }
            RoomShape::Circle { radius } => positive("radius", radius),
        }
    }
}

/// A room as set up by the user
///
/// Shape and dimensions are fixed after setup; height and colors stay
/// editable. Owned by the editing session and persisted as part of the
/// design snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub shape: RoomShape,
    /// Wall height in meters
    pub height: f32,
    pub floor_color: Rgb,
    pub wall_color: Rgb,
    /// Ordered preview palette; also feeds the recolor cycle in the UI
    pub colors: Vec<Rgb>,
}

impl Room {
    pub fn new(shape: RoomShape, height: f32, floor_color: Rgb, wall_color: Rgb) -> Self {
        Self {
            shape,
            height,
            floor_color,
            wall_color,
            colors: vec![
                Rgb::new(0x8a, 0x66, 0x42),
                Rgb::new(0x45, 0x6a, 0x8c),
                Rgb::new(0x6b, 0x8e, 0x5a),
                Rgb::new(0x9c, 0x4a, 0x3c),
            ],
        }
    }

    /// Validate the whole record at the setup boundary
    pub fn validate(&self) -> Result<(), String> {
        self.shape.validate()?;
        if self.height <= 0.0 {
            return Err(format!("height must be positive, got {}", self.height));
        }
        if self.colors.len() < 2 {
            return Err("palette needs at least two colors".to_string());
        }
        Ok(())
    }
}
