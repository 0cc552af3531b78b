//! Orbit camera for the 3D preview

use macroquad::prelude::*;
use crate::room::Room;
use crate::ui::MouseState;

/// Named viewpoints the toolbar offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraPreset {
    Front,
    Side,
    Top,
    Corner,
}

impl CameraPreset {
    pub const ALL: [CameraPreset; 4] = [
        CameraPreset::Front,
        CameraPreset::Side,
        CameraPreset::Top,
        CameraPreset::Corner,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CameraPreset::Front => "Front",
            CameraPreset::Side => "Side",
            CameraPreset::Top => "Top",
            CameraPreset::Corner => "Corner",
        }
    }
}

/// Orbit state around a ground target
pub struct OrbitCamera {
    pub target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    orbiting: bool,
    last_mouse: (f32, f32),
}

impl OrbitCamera {
    /// Frame the whole room: target the footprint center, back off
    /// proportionally to the largest extent and rise to twice wall height.
    pub fn frame_room(room: &Room) -> Self {
        let center = room.shape.center();
        let target = vec3(center.x, 0.0, center.y);
        let distance = room.shape.max_extent() * 1.5;
        let position = vec3(
            target.x + distance * 0.7,
            room.height * 2.0,
            target.z + distance * 0.7,
        );
        let mut cam = Self {
            target,
            yaw: 0.0,
            pitch: 0.0,
            distance: 1.0,
            orbiting: false,
            last_mouse: (0.0, 0.0),
        };
        cam.set_position(position);
        cam
    }

    /// Jump to a named viewpoint
    pub fn apply_preset(&mut self, preset: CameraPreset, room: &Room) {
        let center = room.shape.center();
        self.target = vec3(center.x, 0.0, center.y);
        let d = room.shape.max_extent();
        let position = match preset {
            CameraPreset::Front => vec3(self.target.x, d, self.target.z + d),
            CameraPreset::Side => vec3(self.target.x + d, d, self.target.z),
            CameraPreset::Top => vec3(self.target.x, d * 1.5, self.target.z),
            CameraPreset::Corner => vec3(
                self.target.x + d * 1.5 * 0.7,
                room.height * 2.0,
                self.target.z + d * 1.5 * 0.7,
            ),
        };
        self.set_position(position);
    }

    /// Derive yaw/pitch/distance from an explicit eye position
    pub fn set_position(&mut self, position: Vec3) {
        let offset = position - self.target;
        self.distance = offset.length().max(0.1);
        self.yaw = offset.z.atan2(offset.x);
        // Clamp shy of straight down so the up vector stays valid
        self.pitch = (offset.y / self.distance).clamp(-1.0, 1.0).asin().min(1.54);
    }

    pub fn position(&self) -> Vec3 {
        let horizontal = self.distance * self.pitch.cos();
        self.target
            + vec3(
                horizontal * self.yaw.cos(),
                self.distance * self.pitch.sin(),
                horizontal * self.yaw.sin(),
            )
    }

    /// Right-drag orbits, scroll zooms
    pub fn handle_input(&mut self, mouse: &MouseState, inside_view: bool) {
        if inside_view && mouse.scroll != 0.0 {
            self.distance = (self.distance * (1.0 - mouse.scroll * 0.02)).clamp(1.0, 200.0);
        }

        if mouse.right_down && (self.orbiting || inside_view) {
            if self.orbiting {
                let dx = mouse.x - self.last_mouse.0;
                let dy = mouse.y - self.last_mouse.1;
                self.yaw += dx * 0.01;
                self.pitch = (self.pitch + dy * 0.01).clamp(-0.1, 1.54);
            }
            self.orbiting = true;
        } else {
            self.orbiting = false;
        }
        self.last_mouse = (mouse.x, mouse.y);
    }

    pub fn camera(&self) -> Camera3D {
        Camera3D {
            position: self.position(),
            target: self.target,
            up: vec3(0.0, 1.0, 0.0),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::Rgb;
    use crate::room::RoomShape;

    fn room() -> Room {
        Room::new(
            RoomShape::Rectangle { width: 6.0, length: 4.0 },
            2.5,
            Rgb::new(0xa9, 0x7c, 0x50),
            Rgb::new(0xf5, 0xf5, 0xf5),
        )
    }

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-2
    }

    #[test]
    fn test_frame_room_position() {
        let cam = OrbitCamera::frame_room(&room());
        // Extent 6 -> distance 9, offset 0.7 on both ground axes, height 2h
        assert!(close(cam.position(), vec3(3.0 + 6.3, 5.0, 2.0 + 6.3)));
        assert!(close(cam.target, vec3(3.0, 0.0, 2.0)));
    }

    #[test]
    fn test_presets_target_room_center() {
        let room = room();
        let mut cam = OrbitCamera::frame_room(&room);
        for preset in CameraPreset::ALL {
            cam.apply_preset(preset, &room);
            assert!(close(cam.target, vec3(3.0, 0.0, 2.0)));
        }
    }

    #[test]
    fn test_front_preset_position() {
        let room = room();
        let mut cam = OrbitCamera::frame_room(&room);
        cam.apply_preset(CameraPreset::Front, &room);
        assert!(close(cam.position(), vec3(3.0, 6.0, 2.0 + 6.0)));
    }

    #[test]
    fn test_top_preset_keeps_valid_pitch() {
        let room = room();
        let mut cam = OrbitCamera::frame_room(&room);
        cam.apply_preset(CameraPreset::Top, &room);
        assert!(cam.pitch < std::f32::consts::FRAC_PI_2);
        // Still roughly overhead at 1.5x extent
        let pos = cam.position();
        assert!((pos.y - 9.0).abs() < 0.5);
    }

    #[test]
    fn test_set_position_round_trip() {
        let mut cam = OrbitCamera::frame_room(&room());
        let eye = vec3(8.0, 4.0, -2.0);
        cam.set_position(eye);
        assert!(close(cam.position(), eye));
    }

    #[test]
    fn test_scroll_zooms_within_limits() {
        let mut cam = OrbitCamera::frame_room(&room());
        let start = cam.distance;
        let mouse = MouseState {
            scroll: 1.0,
            ..Default::default()
        };
        cam.handle_input(&mouse, true);
        assert!(cam.distance < start);

        for _ in 0..500 {
            cam.handle_input(&mouse, true);
        }
        assert!(cam.distance >= 1.0);
    }
}
