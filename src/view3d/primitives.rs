//! Mesh assembly primitives for the 3D view
//!
//! macroquad renders unlit, so depth cues are baked into the vertex colors:
//! each cuboid face gets a fixed brightness by orientation. All builders work
//! in a local frame; `transformed` applies the element yaw and world offset
//! in one pass before the batch becomes a mesh.

use macroquad::models::{Mesh, Vertex};
use crate::design::Rgb;
use crate::geom::Point3;

/// Face brightness by orientation (top, x sides, z sides, bottom)
const SHADE_TOP: f32 = 1.0;
const SHADE_X: f32 = 0.85;
const SHADE_Z: f32 = 0.7;
const SHADE_BOTTOM: f32 = 0.5;

/// Accumulates quads into one mesh
pub struct MeshBatch {
    vertices: Vec<Vertex>,
    indices: Vec<u16>,
}

impl MeshBatch {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Add one quad from four corners in winding order
    pub fn quad(&mut self, corners: [Point3; 4], color: Rgb, brightness: f32) {
        let base = self.vertices.len() as u16;
        let draw = color.scaled(brightness).to_draw_color(1.0);
        let uvs = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
        for (p, (u, v)) in corners.iter().zip(uvs) {
            self.vertices.push(Vertex::new(p.x, p.y, p.z, u, v, draw));
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Add one triangle
    pub fn triangle(&mut self, corners: [Point3; 3], color: Rgb, brightness: f32) {
        let base = self.vertices.len() as u16;
        let draw = color.scaled(brightness).to_draw_color(1.0);
        for p in corners {
            self.vertices.push(Vertex::new(p.x, p.y, p.z, 0.0, 0.0, draw));
        }
        self.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    /// Axis-aligned box centered at `center` with full size `(sx, sy, sz)`
    pub fn cuboid(&mut self, center: Point3, size: (f32, f32, f32), color: Rgb) {
        let (hx, hy, hz) = (size.0 * 0.5, size.1 * 0.5, size.2 * 0.5);
        let p = |dx: f32, dy: f32, dz: f32| {
            Point3::new(center.x + dx * hx, center.y + dy * hy, center.z + dz * hz)
        };

        // Top and bottom
        self.quad(
            [p(-1.0, 1.0, -1.0), p(1.0, 1.0, -1.0), p(1.0, 1.0, 1.0), p(-1.0, 1.0, 1.0)],
            color,
            SHADE_TOP,
        );
        self.quad(
            [p(-1.0, -1.0, 1.0), p(1.0, -1.0, 1.0), p(1.0, -1.0, -1.0), p(-1.0, -1.0, -1.0)],
            color,
            SHADE_BOTTOM,
        );
        // Facing +z / -z
        self.quad(
            [p(-1.0, -1.0, 1.0), p(-1.0, 1.0, 1.0), p(1.0, 1.0, 1.0), p(1.0, -1.0, 1.0)],
            color,
            SHADE_Z,
        );
        self.quad(
            [p(1.0, -1.0, -1.0), p(1.0, 1.0, -1.0), p(-1.0, 1.0, -1.0), p(-1.0, -1.0, -1.0)],
            color,
            SHADE_Z,
        );
        // Facing +x / -x
        self.quad(
            [p(1.0, -1.0, 1.0), p(1.0, 1.0, 1.0), p(1.0, 1.0, -1.0), p(1.0, -1.0, -1.0)],
            color,
            SHADE_X,
        );
        self.quad(
            [p(-1.0, -1.0, -1.0), p(-1.0, 1.0, -1.0), p(-1.0, 1.0, 1.0), p(-1.0, -1.0, 1.0)],
            color,
            SHADE_X,
        );
    }

    /// Vertical cylinder (tapered when the radii differ), y axis through `center`
    pub fn cylinder(
        &mut self,
        center: Point3,
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        segments: usize,
        color: Rgb,
    ) {
        let half = height * 0.5;
        for i in 0..segments {
            let a0 = (i as f32 / segments as f32) * std::f32::consts::TAU;
            let a1 = ((i + 1) as f32 / segments as f32) * std::f32::consts::TAU;
            let bottom0 = Point3::new(
                center.x + radius_bottom * a0.cos(),
                center.y - half,
                center.z + radius_bottom * a0.sin(),
            );
            let bottom1 = Point3::new(
                center.x + radius_bottom * a1.cos(),
                center.y - half,
                center.z + radius_bottom * a1.sin(),
            );
            let top1 = Point3::new(
                center.x + radius_top * a1.cos(),
                center.y + half,
                center.z + radius_top * a1.sin(),
            );
            let top0 = Point3::new(
                center.x + radius_top * a0.cos(),
                center.y + half,
                center.z + radius_top * a0.sin(),
            );
            self.quad([bottom0, bottom1, top1, top0], color, SHADE_X);
        }
    }

    /// Yaw the batch around the local y axis, then translate.
    ///
    /// The yaw maps local +x to (cos, 0, sin), matching the plan-view
    /// rotation convention once plan y becomes depth.
    pub fn transformed(mut self, yaw_degrees: f32, offset: Point3) -> Self {
        let (sin, cos) = yaw_degrees.to_radians().sin_cos();
        for v in &mut self.vertices {
            let (x, z) = (v.position.x, v.position.z);
            v.position.x = x * cos - z * sin + offset.x;
            v.position.z = x * sin + z * cos + offset.z;
            v.position.y += offset.y;
        }
        self
    }

    pub fn build(self) -> Mesh {
        Mesh {
            vertices: self.vertices,
            indices: self.indices,
            texture: None,
        }
    }
}

impl Default for MeshBatch {
    fn default() -> Self {
        Self::new()
    }
}
