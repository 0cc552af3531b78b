//! Procedural furniture meshes
//!
//! Each furniture kind maps to a builder function through a registry table,
//! so adding a kind means adding a table row, not editing a dispatch switch.
//! Builders assemble parts in a local frame centered on the element (y = 0 at
//! mid-height); `build_element` applies yaw and world placement afterwards.
//! Kinds without a bespoke builder fall back to a plain box.

use macroquad::models::Mesh;
use macroquad::rand::{gen_range, srand};
use crate::design::{DesignElement, Dimensions, FurnitureKind, Rgb};
use crate::geom::Point3;
use crate::view3d::primitives::MeshBatch;

const WOOD: Rgb = Rgb::new(0x5c, 0x3a, 0x21);
const DARK_WOOD: Rgb = Rgb::new(0x5d, 0x40, 0x37);
const METAL: Rgb = Rgb::new(0x55, 0x55, 0x55);
const PILLOW: Rgb = Rgb::new(0xff, 0xff, 0xff);
const BLANKET: Rgb = Rgb::new(0x41, 0x69, 0xe1);
const BOOK_COLORS: [Rgb; 6] = [
    Rgb::new(0xa5, 0x2a, 0x2a),
    Rgb::new(0x22, 0x8b, 0x22),
    Rgb::new(0x41, 0x69, 0xe1),
    Rgb::new(0x8b, 0x00, 0x8b),
    Rgb::new(0x80, 0x80, 0x00),
    Rgb::new(0x80, 0x00, 0x00),
];

type PartBuilder = fn(&mut MeshBatch, &DesignElement, Rgb);

const BUILDERS: [(FurnitureKind, PartBuilder); 7] = [
    (FurnitureKind::Sofa, build_sofa),
    (FurnitureKind::Chair, build_chair),
    (FurnitureKind::Table, build_table),
    (FurnitureKind::Bed, build_bed),
    (FurnitureKind::Bookshelf, build_bookshelf),
    (FurnitureKind::Dresser, build_dresser),
    (FurnitureKind::Rug, build_rug),
];

fn builder_for(kind: Option<FurnitureKind>) -> PartBuilder {
    kind.and_then(|k| {
        BUILDERS
            .iter()
            .find(|(registered, _)| *registered == k)
            .map(|(_, builder)| *builder)
    })
    .unwrap_or(build_box)
}

/// Build the world-space mesh for one element
pub fn build_element(element: &DesignElement) -> Mesh {
    let base = match (element.shaded, element.shading_intensity) {
        (true, Some(intensity)) => element.color.darken(intensity),
        _ => element.color,
    };

    let mut batch = MeshBatch::new();
    builder_for(element.furniture)(&mut batch, element, base);
    batch
        .transformed(
            element.rotation,
            Point3::new(
                element.position.x,
                element.dimensions.height * 0.5,
                element.position.y,
            ),
        )
        .build()
}

fn dims(element: &DesignElement) -> (f32, f32, f32) {
    let Dimensions { width, length, height } = element.dimensions;
    (width, length, height)
}

fn build_box(batch: &mut MeshBatch, element: &DesignElement, base: Rgb) {
    let (w, l, h) = dims(element);
    batch.cuboid(Point3::new(0.0, 0.0, 0.0), (w, h, l), base);
}

fn build_sofa(batch: &mut MeshBatch, element: &DesignElement, base: Rgb) {
    let (w, l, h) = dims(element);

    batch.cuboid(Point3::new(0.0, -h * 0.3, 0.0), (w, h * 0.4, l), base);
    // Back cushion
    batch.cuboid(
        Point3::new(0.0, -h * 0.05, -l * 0.3),
        (w * 0.9, h * 0.5, l * 0.2),
        base.scaled(0.9),
    );
    // Seat cushions with a divider groove
    batch.cuboid(
        Point3::new(0.0, -h * 0.225, -l * 0.05),
        (w * 0.9, h * 0.15, l * 0.7),
        base.scaled(0.95),
    );
    batch.cuboid(
        Point3::new(0.0, -h * 0.2, -l * 0.05),
        (w * 0.05, h * 0.05, l * 0.7),
        base.scaled(0.85),
    );
    // Arms
    for x in [-w * 0.45, w * 0.45] {
        batch.cuboid(
            Point3::new(x, -h * 0.2, 0.0),
            (w * 0.1, h * 0.4, l * 0.8),
            base.scaled(0.85),
        );
    }
    for x in [-w * 0.4, w * 0.4] {
        for z in [-l * 0.35, l * 0.35] {
            batch.cylinder(Point3::new(x, -h * 0.45, z), w * 0.02, w * 0.02, h * 0.1, 8, WOOD);
        }
    }
}

fn build_chair(batch: &mut MeshBatch, element: &DesignElement, base: Rgb) {
    let (w, l, h) = dims(element);

    batch.cuboid(Point3::new(0.0, -h * 0.35, 0.0), (w, h * 0.1, l), base);
    let back = base.scaled(0.9);
    batch.cuboid(
        Point3::new(0.0, -h * 0.075, -l * 0.45),
        (w, h * 0.55, l * 0.1),
        back,
    );
    // Horizontal slats on the backrest
    let slat_height = h * 0.4 / 3.0;
    let slat_gap = h * 0.05;
    for i in 0..3 {
        batch.cuboid(
            Point3::new(0.0, -h * 0.25 + i as f32 * slat_height, -l * 0.425),
            (w * 0.9, slat_height - slat_gap, l * 0.05),
            back.scaled(0.95 + i as f32 * 0.02),
        );
    }
    for x in [-w * 0.4, w * 0.4] {
        for z in [-l * 0.4, l * 0.4] {
            batch.cylinder(Point3::new(x, -h * 0.575, z), w * 0.03, w * 0.02, h * 0.4, 8, WOOD);
        }
    }
}

fn build_table(batch: &mut MeshBatch, element: &DesignElement, base: Rgb) {
    let (w, l, h) = dims(element);

    batch.cuboid(Point3::new(0.0, h * 0.025, 0.0), (w, h * 0.05, l), base);
    // Apron under the top
    batch.cuboid(
        Point3::new(0.0, -h * 0.05, 0.0),
        (w * 0.95, h * 0.1, l * 0.95),
        base.scaled(0.85),
    );
    for x in [-w * 0.45, w * 0.45] {
        for z in [-l * 0.45, l * 0.45] {
            batch.cuboid(
                Point3::new(x, -h * 0.5, z),
                (w * 0.05, h * 0.9, l * 0.05),
                base.scaled(0.8),
            );
        }
    }
}

fn build_bed(batch: &mut MeshBatch, element: &DesignElement, base: Rgb) {
    let (w, l, h) = dims(element);
    let frame = base.scaled(0.85);

    batch.cuboid(Point3::new(0.0, -h * 0.35, 0.0), (w, h * 0.3, l), frame);
    batch.cuboid(
        Point3::new(0.0, -h * 0.15, 0.0),
        (w * 0.95, h * 0.2, l * 0.9),
        base,
    );
    // Two pillows at the head
    for x in [-w * 0.25, w * 0.25] {
        batch.cuboid(
            Point3::new(x, -h * 0.1, -l * 0.35),
            (w * 0.35, h * 0.1, l * 0.15),
            PILLOW,
        );
    }
    // Folded blanket at the foot
    batch.cuboid(
        Point3::new(0.0, -h * 0.075, l * 0.25),
        (w * 0.9, h * 0.05, l * 0.4),
        BLANKET,
    );
    batch.cuboid(
        Point3::new(0.0, -h * 0.2, -l * 0.47),
        (w * 1.05, h * 0.5, l * 0.05),
        frame,
    );
    for x in [-w * 0.45, w * 0.45] {
        for z in [-l * 0.45, l * 0.45] {
            batch.cylinder(Point3::new(x, -h * 0.5, z), w * 0.02, w * 0.02, h * 0.15, 8, DARK_WOOD);
        }
    }
}

fn build_bookshelf(batch: &mut MeshBatch, element: &DesignElement, base: Rgb) {
    let (w, l, h) = dims(element);

    // Open carcass: back, top, bottom and side panels
    batch.cuboid(Point3::new(0.0, 0.0, -l * 0.45), (w, h, l * 0.1), base);
    batch.cuboid(Point3::new(0.0, h * 0.475, 0.0), (w, h * 0.05, l), base);
    batch.cuboid(Point3::new(0.0, -h * 0.475, 0.0), (w, h * 0.05, l), base);
    batch.cuboid(Point3::new(-w * 0.475, 0.0, 0.0), (w * 0.05, h, l), base);
    batch.cuboid(Point3::new(w * 0.475, 0.0, 0.0), (w * 0.05, h, l), base);

    let shelf_color = base.scaled(1.1);
    for i in 1..4 {
        batch.cuboid(
            Point3::new(0.0, h * 0.4 - i as f32 * (h * 0.8 / 4.0), 0.0),
            (w * 0.9, h * 0.02, l * 0.9),
            shelf_color,
        );
    }

    // Books vary per element but stay stable across rebuilds: the generator
    // is reseeded from the element id every time
    let id = element.id.as_u128();
    srand((id >> 64) as u64 ^ id as u64);
    for i in 0..3 {
        let shelf_y = h * 0.4 - i as f32 * (h * 0.8 / 4.0);
        let count = gen_range(4, 8);
        let slot = w * 0.8 / count as f32;
        for j in 0..count {
            let book_h = h * 0.15 + gen_range(0.0, h * 0.05);
            let book_d = l * 0.7 + gen_range(0.0, l * 0.1);
            let color = BOOK_COLORS[gen_range(0, BOOK_COLORS.len() as i32) as usize];
            batch.cuboid(
                Point3::new(
                    -w * 0.4 + j as f32 * slot + slot * 0.5,
                    shelf_y + h * 0.02 + book_h * 0.5,
                    0.0,
                ),
                (slot * 0.8, book_h, book_d),
                color,
            );
        }
    }
}

fn build_dresser(batch: &mut MeshBatch, element: &DesignElement, base: Rgb) {
    let (w, l, h) = dims(element);

    batch.cuboid(Point3::new(0.0, 0.0, 0.0), (w, h, l), base);

    let drawer = base.scaled(1.1);
    let drawer_height = h * 0.25;
    for i in 0..3 {
        let y = h * 0.25 - i as f32 * drawer_height;
        batch.cuboid(
            Point3::new(0.0, y, l * 0.45),
            (w * 0.9, drawer_height * 0.9, l * 0.05),
            drawer,
        );
        // Handle bar across the drawer front
        batch.cuboid(
            Point3::new(0.0, y, l * 0.48),
            (w * 0.3, h * 0.04, h * 0.04),
            METAL,
        );
    }

    for x in [-w * 0.45, w * 0.45] {
        for z in [-l * 0.45, l * 0.45] {
            batch.cylinder(Point3::new(x, -h * 0.55, z), w * 0.02, w * 0.01, h * 0.1, 8, METAL);
        }
    }
}

fn build_rug(batch: &mut MeshBatch, element: &DesignElement, base: Rgb) {
    let (w, l, h) = dims(element);

    batch.cuboid(Point3::new(0.0, 0.0, 0.0), (w, h, l), base);

    // Center pattern and border, floated just above the pile
    let top = h * 0.5;
    let pattern = base.scaled(0.85);
    batch.quad(
        [
            Point3::new(-w * 0.45, top + 0.001, -l * 0.45),
            Point3::new(w * 0.45, top + 0.001, -l * 0.45),
            Point3::new(w * 0.45, top + 0.001, l * 0.45),
            Point3::new(-w * 0.45, top + 0.001, l * 0.45),
        ],
        pattern,
        1.0,
    );
    let border = base.scaled(1.1);
    let bw = w * 0.05;
    let strips = [
        (Point3::new(0.0, 0.0, -l * 0.5 + bw * 0.5), (w, bw)),
        (Point3::new(0.0, 0.0, l * 0.5 - bw * 0.5), (w, bw)),
        (Point3::new(-w * 0.5 + bw * 0.5, 0.0, 0.0), (bw, l - bw * 2.0)),
        (Point3::new(w * 0.5 - bw * 0.5, 0.0, 0.0), (bw, l - bw * 2.0)),
    ];
    for (center, (sx, sz)) in strips {
        batch.quad(
            [
                Point3::new(center.x - sx * 0.5, top + 0.002, center.z - sz * 0.5),
                Point3::new(center.x + sx * 0.5, top + 0.002, center.z - sz * 0.5),
                Point3::new(center.x + sx * 0.5, top + 0.002, center.z + sz * 0.5),
                Point3::new(center.x - sx * 0.5, top + 0.002, center.z + sz * 0.5),
            ],
            border,
            1.0,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::{DesignElement, ElementKind};
    use crate::geom::Point2;
    use uuid::Uuid;

    fn element(kind: FurnitureKind) -> DesignElement {
        DesignElement::furniture(kind, 3.0, 2.0, Rgb::new(0x8a, 0x66, 0x42), 0.0)
    }

    #[test]
    fn test_every_kind_builds_a_mesh() {
        for kind in FurnitureKind::ALL {
            let mesh = build_element(&element(kind));
            assert!(!mesh.vertices.is_empty(), "{:?} built empty mesh", kind);
            assert_eq!(mesh.indices.len() % 3, 0);
        }
    }

    #[test]
    fn test_multi_part_kinds_are_richer_than_a_box() {
        let box_count = build_element(&element(FurnitureKind::Desk)).vertices.len();
        for kind in [FurnitureKind::Sofa, FurnitureKind::Bed, FurnitureKind::Dresser] {
            assert!(build_element(&element(kind)).vertices.len() > box_count);
        }
    }

    #[test]
    fn test_mesh_centered_on_element_position() {
        // Desk has no bespoke builder, so it is a plain box and must fill
        // its declared dimensions exactly
        let e = element(FurnitureKind::Desk);
        let mesh = build_element(&e);
        let min_x = mesh.vertices.iter().map(|v| v.position.x).fold(f32::MAX, f32::min);
        let max_x = mesh.vertices.iter().map(|v| v.position.x).fold(f32::MIN, f32::max);
        assert!(((min_x + max_x) * 0.5 - 3.0).abs() < 1e-3);
        // Sits on the floor, top at its full height
        let min_y = mesh.vertices.iter().map(|v| v.position.y).fold(f32::MAX, f32::min);
        let max_y = mesh.vertices.iter().map(|v| v.position.y).fold(f32::MIN, f32::max);
        assert!(min_y.abs() < 1e-4);
        assert!((max_y - 0.75).abs() < 1e-4);
    }

    #[test]
    fn test_bookshelf_books_are_stable_per_element() {
        let e = element(FurnitureKind::Bookshelf);
        let a = build_element(&e);
        let b = build_element(&e);
        assert_eq!(a.vertices.len(), b.vertices.len());
        for (va, vb) in a.vertices.iter().zip(&b.vertices) {
            assert_eq!(va.position, vb.position);
        }
    }

    #[test]
    fn test_bookshelf_varies_between_elements() {
        let mut differs = false;
        let reference = build_element(&element(FurnitureKind::Bookshelf)).vertices.len();
        for _ in 0..8 {
            if build_element(&element(FurnitureKind::Bookshelf)).vertices.len() != reference {
                differs = true;
                break;
            }
        }
        assert!(differs, "book layout never varied across ids");
    }

    #[test]
    fn test_shading_darkens_base_color() {
        let e = element(FurnitureKind::Desk);
        let shaded = e.with_shading(0.3);
        let plain = build_element(&e);
        let dark = build_element(&shaded);
        // Compare the same vertex of the top face
        let a = plain.vertices[0].color;
        let b = dark.vertices[0].color;
        assert!(b[0] < a[0]);
        assert!(b[1] < a[1]);
        assert!(b[2] < a[2]);
    }

    #[test]
    fn test_unknown_furniture_falls_back_to_box() {
        let e = DesignElement {
            id: Uuid::new_v4(),
            kind: ElementKind::Decoration,
            furniture: None,
            position: Point2::new(1.0, 1.0),
            dimensions: Dimensions {
                width: 1.0,
                length: 1.0,
                height: 1.0,
            },
            rotation: 0.0,
            color: Rgb::new(100, 100, 100),
            shaded: false,
            shading_intensity: None,
        };
        let mesh = build_element(&e);
        assert_eq!(mesh.vertices.len(), 24);
    }

    #[test]
    fn test_rotation_swaps_footprint_axes() {
        let mut e = element(FurnitureKind::Desk);
        e.rotation = 90.0;
        let mesh = build_element(&e);
        let span = |f: fn(&macroquad::math::Vec3) -> f32| {
            let min = mesh.vertices.iter().map(|v| f(&v.position)).fold(f32::MAX, f32::min);
            let max = mesh.vertices.iter().map(|v| f(&v.position)).fold(f32::MIN, f32::max);
            max - min
        };
        // Desk is 1.2 x 0.6; after a quarter turn x spans the short side
        assert!((span(|p| p.x) - 0.6).abs() < 1e-3);
        assert!((span(|p| p.z) - 1.2).abs() < 1e-3);
    }
}
