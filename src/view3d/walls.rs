//! Floor and wall meshes for each room topology
//!
//! Walls are tagged with the side they belong to so the UI can toggle them
//! individually; nothing indexes into the wall list by position. The circular
//! room gets a full cylindrical shell for seamless rendering plus four tagged
//! quadrant segments that carry the visibility toggles.

use macroquad::models::Mesh;
use serde::{Deserialize, Serialize};
use crate::geom::{lift, triangulate, Point2, Point3};
use crate::room::{Room, RoomShape};
use crate::view3d::primitives::MeshBatch;

/// Wall slab thickness in meters
const WALL_THICKNESS: f32 = 0.1;
/// Minimum ground grid extent in meters
const MIN_GRID_EXTENT: f32 = 20.0;

/// Which side of the room a wall segment belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WallSide {
    Front,
    Back,
    Left,
    Right,
}

impl WallSide {
    pub const ALL: [WallSide; 4] = [WallSide::Front, WallSide::Back, WallSide::Left, WallSide::Right];

    pub fn label(&self) -> &'static str {
        match self {
            WallSide::Front => "Front",
            WallSide::Back => "Back",
            WallSide::Left => "Left",
            WallSide::Right => "Right",
        }
    }
}

/// A wall mesh tagged with its side
pub struct WallMesh {
    pub side: WallSide,
    pub mesh: Mesh,
}

/// Per-side visibility flags, all on by default
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallVisibility {
    pub front: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
}

impl Default for WallVisibility {
    fn default() -> Self {
        Self {
            front: true,
            back: true,
            left: true,
            right: true,
        }
    }
}

impl WallVisibility {
    pub fn is_visible(&self, side: WallSide) -> bool {
        match side {
            WallSide::Front => self.front,
            WallSide::Back => self.back,
            WallSide::Left => self.left,
            WallSide::Right => self.right,
        }
    }

    pub fn toggle(&mut self, side: WallSide) {
        match side {
            WallSide::Front => self.front = !self.front,
            WallSide::Back => self.back = !self.back,
            WallSide::Left => self.left = !self.left,
            WallSide::Right => self.right = !self.right,
        }
    }
}

/// Triangulated floor at y = 0
pub fn build_floor(room: &Room) -> Mesh {
    let vertices = room.shape.vertices();
    let mut batch = MeshBatch::new();
    for [a, b, c] in triangulate(&vertices) {
        batch.triangle(
            [lift(vertices[a], 0.0), lift(vertices[b], 0.0), lift(vertices[c], 0.0)],
            room.floor_color,
            1.0,
        );
    }
    batch.build()
}

/// Tagged wall meshes for the room
pub fn build_walls(room: &Room) -> Vec<WallMesh> {
    match room.shape {
        RoomShape::Rectangle { width, length } => rect_walls(room, width, length),
        RoomShape::Square { size } => rect_walls(room, size, size),
        RoomShape::LShape {
            width,
            length,
            cutout_width,
            cutout_length,
        } => l_walls(room, width, length, cutout_width, cutout_length),
        RoomShape::Circle { radius } => circle_walls(room, radius),
    }
}

/// Full cylindrical shell for the circular room; None for the other shapes.
///
/// The shell renders the seamless wall surface while the quadrant segments
/// from `build_walls` carry the toggles on top of it.
pub fn build_circle_shell(room: &Room) -> Option<Mesh> {
    let RoomShape::Circle { radius } = room.shape else {
        return None;
    };
    let mut batch = MeshBatch::new();
    batch.cylinder(
        Point3::new(radius, room.height * 0.5, radius),
        radius,
        radius,
        room.height,
        crate::room::shape::CIRCLE_SEGMENTS,
        room.wall_color,
    );
    Some(batch.build())
}

/// Ground grid extent; None means no grid for this shape.
///
/// The L-shape skips the grid because the grid plane cuts through the
/// cutout walls and reads as a rendering glitch.
pub fn grid_extent(room: &Room) -> Option<f32> {
    match room.shape {
        RoomShape::LShape { .. } => None,
        _ => Some(room.shape.max_extent().max(MIN_GRID_EXTENT)),
    }
}

fn rect_walls(room: &Room, width: f32, length: f32) -> Vec<WallMesh> {
    let h = room.height;
    let specs = [
        (WallSide::Front, Point3::new(width * 0.5, h * 0.5, length), (width, h, WALL_THICKNESS)),
        (WallSide::Right, Point3::new(width, h * 0.5, length * 0.5), (WALL_THICKNESS, h, length)),
        (WallSide::Back, Point3::new(width * 0.5, h * 0.5, 0.0), (width, h, WALL_THICKNESS)),
        (WallSide::Left, Point3::new(0.0, h * 0.5, length * 0.5), (WALL_THICKNESS, h, length)),
    ];
    specs
        .into_iter()
        .map(|(side, center, size)| {
            let mut batch = MeshBatch::new();
            batch.cuboid(center, size, room.wall_color);
            WallMesh {
                side,
                mesh: batch.build(),
            }
        })
        .collect()
}

fn l_walls(
    room: &Room,
    width: f32,
    length: f32,
    cutout_width: f32,
    cutout_length: f32,
) -> Vec<WallMesh> {
    // Outline edges walked counter-clockwise, each tagged with the side it
    // faces. Both cutout edges reuse the Right/Front tags so a toggle hides
    // the whole logical side.
    let segments = [
        (Point2::new(0.0, 0.0), Point2::new(width, 0.0), WallSide::Back),
        (Point2::new(width, 0.0), Point2::new(width, cutout_length), WallSide::Right),
        (
            Point2::new(width, cutout_length),
            Point2::new(width - cutout_width, cutout_length),
            WallSide::Front,
        ),
        (
            Point2::new(width - cutout_width, cutout_length),
            Point2::new(width - cutout_width, length),
            WallSide::Right,
        ),
        (
            Point2::new(width - cutout_width, length),
            Point2::new(0.0, length),
            WallSide::Front,
        ),
        (Point2::new(0.0, length), Point2::new(0.0, 0.0), WallSide::Left),
    ];

    segments
        .into_iter()
        .map(|(start, end, side)| {
            let delta = end - start;
            let wall_length = start.distance(end);
            let mid = (start + end) * 0.5;
            let yaw = delta.y.atan2(delta.x).to_degrees();

            let mut batch = MeshBatch::new();
            batch.cuboid(
                Point3::new(0.0, 0.0, 0.0),
                (wall_length, room.height, WALL_THICKNESS),
                room.wall_color,
            );
            let mesh = batch
                .transformed(yaw, Point3::new(mid.x, room.height * 0.5, mid.y))
                .build();
            WallMesh { side, mesh }
        })
        .collect()
}

fn circle_walls(room: &Room, radius: f32) -> Vec<WallMesh> {
    // Quadrant tags follow the arc starting at the +x axis
    let tags = [WallSide::Front, WallSide::Right, WallSide::Back, WallSide::Left];
    let segments_per_quadrant = crate::room::shape::CIRCLE_SEGMENTS / 4;
    let center = Point2::new(radius, radius);

    tags.iter()
        .enumerate()
        .map(|(q, &side)| {
            let mut batch = MeshBatch::new();
            for i in 0..segments_per_quadrant {
                let step = std::f32::consts::FRAC_PI_2 / segments_per_quadrant as f32;
                let a0 = q as f32 * std::f32::consts::FRAC_PI_2 + i as f32 * step;
                let a1 = a0 + step;
                let p0 = center + Point2::new(a0.cos(), a0.sin()) * radius;
                let p1 = center + Point2::new(a1.cos(), a1.sin()) * radius;
                batch.quad(
                    [
                        lift(p0, 0.0),
                        lift(p1, 0.0),
                        lift(p1, room.height),
                        lift(p0, room.height),
                    ],
                    room.wall_color,
                    1.0,
                );
            }
            WallMesh {
                side,
                mesh: batch.build(),
            }
        })
        .collect()
}
