//! Plane and space math for room layouts
//!
//! Small serde-friendly vector types plus the polygon helpers shared by the
//! 2D plan view and the 3D scene builder. All angles are radians unless a
//! function name says degrees.

use std::ops::{Add, Mul, Sub};
use serde::{Deserialize, Serialize};

/// 2D point in room-local metric coordinates (meters)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point2) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Rotate around the origin by `angle` radians (counter-clockwise in a
    /// y-down screen convention this reads as clockwise, matching the canvas)
    pub fn rotated(self, angle: f32) -> Point2 {
        let (sin, cos) = angle.sin_cos();
        Point2 {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }
}

impl Add for Point2 {
    type Output = Point2;
    fn add(self, other: Point2) -> Point2 {
        Point2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point2 {
    type Output = Point2;
    fn sub(self, other: Point2) -> Point2 {
        Point2::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f32> for Point2 {
    type Output = Point2;
    fn mul(self, s: f32) -> Point2 {
        Point2::new(self.x * s, self.y * s)
    }
}

/// 3D point in world space (meters, y up)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Lift a room-plane point into 3D world space.
///
/// This is the single authoritative axis convention: plan x stays x, plan y
/// becomes depth (z), and the caller supplies the height. Every 3D consumer
/// goes through here rather than re-deriving the mapping.
pub fn lift(p: Point2, height: f32) -> Point3 {
    Point3::new(p.x, height, p.y)
}

/// Axis-aligned bounds of a set of plane points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Bounds {
    /// Compute bounds from points; returns None for an empty slice
    pub fn of(points: &[Point2]) -> Option<Bounds> {
        let first = points.first()?;
        let mut b = Bounds {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        for p in &points[1..] {
            b.min_x = b.min_x.min(p.x);
            b.max_x = b.max_x.max(p.x);
            b.min_y = b.min_y.min(p.y);
            b.max_y = b.max_y.max(p.y);
        }
        Some(b)
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point2 {
        Point2::new(
            (self.min_x + self.max_x) * 0.5,
            (self.min_y + self.max_y) * 0.5,
        )
    }

    /// AABB overlap test (used by the advisory element collision check)
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.min_x < other.max_x
            && self.max_x > other.min_x
            && self.min_y < other.max_y
            && self.max_y > other.min_y
    }
}

/// Ray-casting parity test for a closed polygon.
///
/// Points exactly on an edge may classify either way; callers that need a
/// guaranteed boundary contract must not rely on this.
pub fn point_in_polygon(point: Point2, vertices: &[Point2]) -> bool {
    let mut inside = false;
    let n = vertices.len();
    let mut j = n.wrapping_sub(1);
    for i in 0..n {
        let vi = vertices[i];
        let vj = vertices[j];
        let crosses = (vi.y > point.y) != (vj.y > point.y)
            && point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x;
        if crosses {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Signed area of a closed polygon (positive = counter-clockwise in y-up)
pub fn polygon_signed_area(vertices: &[Point2]) -> f32 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        sum += a.x * b.y - b.x * a.y;
    }
    sum * 0.5
}

/// Triangulate a simple polygon by ear clipping.
///
/// Returns index triples into `vertices`. Handles convex and concave
/// outlines (the L-shape floor) but not self-intersecting ones, which the
/// room shapes never produce.
pub fn triangulate(vertices: &[Point2]) -> Vec<[usize; 3]> {
    let n = vertices.len();
    if n < 3 {
        return Vec::new();
    }

    // Work on indices so the output refers back to the input slice
    let mut remaining: Vec<usize> = (0..n).collect();
    let winding = polygon_signed_area(vertices).signum();
    let mut triangles = Vec::with_capacity(n - 2);

    let cross = |a: Point2, b: Point2, c: Point2| -> f32 {
        (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
    };

    let mut guard = 0;
    while remaining.len() > 3 && guard < n * n {
        guard += 1;
        let m = remaining.len();
        let mut clipped = false;

        for i in 0..m {
            let ia = remaining[(i + m - 1) % m];
            let ib = remaining[i];
            let ic = remaining[(i + 1) % m];
            let (a, b, c) = (vertices[ia], vertices[ib], vertices[ic]);

            // Reflex corner: not an ear
            if cross(a, b, c) * winding <= 0.0 {
                continue;
            }

            // Ear must not contain any other remaining vertex
            let blocked = remaining.iter().any(|&j| {
                if j == ia || j == ib || j == ic {
                    return false;
                }
                let p = vertices[j];
                let d1 = cross(a, b, p) * winding;
                let d2 = cross(b, c, p) * winding;
                let d3 = cross(c, a, p) * winding;
                d1 >= 0.0 && d2 >= 0.0 && d3 >= 0.0
            });
            if blocked {
                continue;
            }

            triangles.push([ia, ib, ic]);
            remaining.remove(i);
            clipped = true;
            break;
        }

        if !clipped {
            // Degenerate input; bail with what we have
            break;
        }
    }

    if remaining.len() == 3 {
        triangles.push([remaining[0], remaining[1], remaining[2]]);
    }
    triangles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_in_polygon_square() {
        let square = [
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(0.0, 4.0),
        ];
        assert!(point_in_polygon(Point2::new(2.0, 2.0), &square));
        assert!(!point_in_polygon(Point2::new(5.0, 2.0), &square));
        assert!(!point_in_polygon(Point2::new(-1000.0, -1000.0), &square));
    }

    #[test]
    fn test_lift_axis_convention() {
        let p = lift(Point2::new(1.5, 2.5), 0.75);
        assert_eq!(p.x, 1.5);
        assert_eq!(p.y, 0.75);
        assert_eq!(p.z, 2.5);
    }

    #[test]
    fn test_bounds_of_points() {
        let b = Bounds::of(&[
            Point2::new(-1.0, 2.0),
            Point2::new(3.0, -4.0),
            Point2::new(0.5, 0.5),
        ])
        .unwrap();
        assert_eq!(b.min_x, -1.0);
        assert_eq!(b.max_x, 3.0);
        assert_eq!(b.min_y, -4.0);
        assert_eq!(b.max_y, 2.0);
        assert_eq!(b.center(), Point2::new(1.0, -1.0));
    }

    #[test]
    fn test_bounds_of_empty() {
        assert!(Bounds::of(&[]).is_none());
    }

    #[test]
    fn test_rotated_full_turn() {
        let p = Point2::new(1.0, 0.5);
        let q = p.rotated(std::f32::consts::TAU);
        assert!((p.x - q.x).abs() < 1e-5);
        assert!((p.y - q.y).abs() < 1e-5);
    }

    #[test]
    fn test_triangulate_convex() {
        let square = [
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
        ];
        let tris = triangulate(&square);
        assert_eq!(tris.len(), 2);
    }

    #[test]
    fn test_triangulate_concave_l() {
        // L outline as the room generator produces it
        let l = [
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 4.0),
            Point2::new(6.0, 4.0),
            Point2::new(6.0, 10.0),
            Point2::new(0.0, 10.0),
        ];
        let tris = triangulate(&l);
        assert_eq!(tris.len(), 4);

        // Triangulated area must match the analytic L area (100 - 16)
        let area: f32 = tris
            .iter()
            .map(|t| polygon_signed_area(&[l[t[0]], l[t[1]], l[t[2]]]).abs())
            .sum();
        assert!((area - 84.0).abs() < 1e-3);
    }
}
