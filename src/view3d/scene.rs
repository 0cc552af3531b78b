//! Retained 3D scene for the preview
//!
//! Meshes are rebuilt wholesale whenever the design revision changes; the
//! previous buffers are dropped with the old scene. Per-frame cost is then
//! just draw calls, and the scene can never show a half-updated design.

use macroquad::models::{draw_grid, draw_mesh, Mesh};
use macroquad::prelude::*;
use crate::design::DesignElement;
use crate::room::Room;
use crate::view3d::furniture::build_element;
use crate::view3d::walls::{
    build_circle_shell, build_floor, build_walls, grid_extent, WallMesh, WallVisibility,
};

pub struct RoomScene {
    revision: u64,
    floor: Mesh,
    walls: Vec<WallMesh>,
    /// Seamless cylinder behind the circular room's quadrant segments
    shell: Option<Mesh>,
    furniture: Vec<Mesh>,
    grid_extent: Option<f32>,
}

impl RoomScene {
    pub fn build(room: &Room, elements: &[DesignElement], revision: u64) -> Self {
        Self {
            revision,
            floor: build_floor(room),
            walls: build_walls(room),
            shell: build_circle_shell(room),
            furniture: elements.iter().map(build_element).collect(),
            grid_extent: grid_extent(room),
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Rebuild if the design moved past the revision this scene was built from
    pub fn sync(&mut self, room: &Room, elements: &[DesignElement], revision: u64) {
        if self.revision != revision {
            *self = Self::build(room, elements, revision);
        }
    }

    pub fn draw(&self, visibility: &WallVisibility) {
        if let Some(extent) = self.grid_extent {
            let slices = (extent.ceil() as u32).max(1);
            draw_grid(
                slices,
                1.0,
                Color::from_rgba(120, 120, 130, 255),
                Color::from_rgba(60, 60, 70, 255),
            );
        }

        draw_mesh(&self.floor);
        if let Some(shell) = &self.shell {
            draw_mesh(shell);
        }
        for wall in &self.walls {
            if visibility.is_visible(wall.side) {
                draw_mesh(&wall.mesh);
            }
        }
        for mesh in &self.furniture {
            draw_mesh(mesh);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::{FurnitureKind, Rgb};
    use crate::room::RoomShape;

    fn room() -> Room {
        Room::new(
            RoomShape::Circle { radius: 3.0 },
            2.8,
            Rgb::new(0xa9, 0x7c, 0x50),
            Rgb::new(0xf5, 0xf5, 0xf5),
        )
    }

    #[test]
    fn test_build_populates_all_parts() {
        let elements = vec![DesignElement::furniture(
            FurnitureKind::Chair,
            3.0,
            3.0,
            Rgb::new(0x45, 0x6a, 0x8c),
            0.0,
        )];
        let scene = RoomScene::build(&room(), &elements, 1);
        assert!(!scene.floor.vertices.is_empty());
        assert_eq!(scene.walls.len(), 4);
        assert!(scene.shell.is_some());
        assert_eq!(scene.furniture.len(), 1);
        assert_eq!(scene.revision(), 1);
    }

    #[test]
    fn test_sync_rebuilds_only_on_new_revision() {
        let room = room();
        let mut scene = RoomScene::build(&room, &[], 1);
        let elements = vec![DesignElement::furniture(
            FurnitureKind::Bed,
            3.0,
            3.0,
            Rgb::new(0x8a, 0x66, 0x42),
            0.0,
        )];

        // Same revision: stale element list is ignored
        scene.sync(&room, &elements, 1);
        assert_eq!(scene.furniture.len(), 0);

        scene.sync(&room, &elements, 2);
        assert_eq!(scene.furniture.len(), 1);
        assert_eq!(scene.revision(), 2);
    }
}
