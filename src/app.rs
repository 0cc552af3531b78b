//! Application state for the editing session
//!
//! One design is open at a time. Every mutation goes through a helper here
//! that swaps in a fresh element record and bumps the revision counter; the
//! 3D scene rebuilds itself when it sees a revision it has not rendered.

use std::path::PathBuf;
use macroquad::time::get_time;
use uuid::Uuid;
use crate::design::element::DEFAULT_SHADING_INTENSITY;
use crate::design::{DesignElement, FurnitureKind, Rgb};
use crate::room::{Design, Room};
use crate::view2d::PlanViewState;
use crate::view3d::{OrbitCamera, RoomScene, WallVisibility};

/// Which view fills the main area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Plan,
    Preview,
}

/// Transient message for the status line
pub struct StatusMessage {
    pub text: String,
    pub shown_at: f64,
}

/// Seconds a status message stays visible
pub const STATUS_DURATION: f64 = 3.0;

pub struct AppState {
    pub design: Design,
    pub selection: Option<Uuid>,
    /// Bumped on every design mutation; the 3D scene syncs against it
    pub revision: u64,
    pub view: ViewMode,
    pub plan: PlanViewState,
    pub camera: OrbitCamera,
    pub walls: WallVisibility,
    pub scene: RoomScene,
    pub file_path: Option<PathBuf>,
    pub status: Option<StatusMessage>,
}

impl AppState {
    pub fn new(design: Design, file_path: Option<PathBuf>) -> Self {
        let camera = OrbitCamera::frame_room(&design.room);
        let scene = RoomScene::build(&design.room, &design.elements, 0);
        Self {
            design,
            selection: None,
            revision: 0,
            view: ViewMode::Plan,
            plan: PlanViewState::default(),
            camera,
            walls: WallVisibility::default(),
            scene,
            file_path,
            status: None,
        }
    }

    /// Replace the open design (new room or loaded file)
    pub fn open(&mut self, design: Design, file_path: Option<PathBuf>) {
        self.camera = OrbitCamera::frame_room(&design.room);
        self.walls = WallVisibility::default();
        self.selection = None;
        self.plan = PlanViewState::default();
        self.design = design;
        self.file_path = file_path;
        self.bump();
    }

    pub fn room(&self) -> &Room {
        &self.design.room
    }

    pub fn bump(&mut self) {
        self.revision += 1;
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            shown_at: get_time(),
        });
    }

    /// Drop the status message once it has been on screen long enough
    pub fn expire_status(&mut self) {
        if let Some(status) = &self.status {
            if get_time() - status.shown_at > STATUS_DURATION {
                self.status = None;
            }
        }
    }

    /// Place a catalog item at the room center, cycling the room palette
    pub fn add_furniture(&mut self, kind: FurnitureKind) {
        let center = self.design.room.shape.center();
        let color = self.next_palette_color();
        let element = DesignElement::furniture(kind, center.x, center.y, color, 0.0);
        self.selection = Some(element.id);
        self.design.elements.push(element);
        self.bump();
    }

    fn next_palette_color(&self) -> Rgb {
        let palette = &self.design.room.colors;
        if palette.is_empty() {
            return Rgb::new(0x8a, 0x66, 0x42);
        }
        palette[self.design.elements.len() % palette.len()]
    }

    pub fn selected(&self) -> Option<&DesignElement> {
        let id = self.selection?;
        self.design.elements.iter().find(|e| e.id == id)
    }

    /// Swap the selected element for a derived copy
    pub fn replace_selected(&mut self, f: impl FnOnce(&DesignElement) -> DesignElement) {
        let Some(id) = self.selection else { return };
        if let Some(slot) = self.design.elements.iter_mut().find(|e| e.id == id) {
            *slot = f(slot);
            self.bump();
        }
    }

    pub fn delete_selected(&mut self) {
        let Some(id) = self.selection.take() else { return };
        self.design.elements.retain(|e| e.id != id);
        self.bump();
    }

    pub fn rotate_selected(&mut self, degrees: f32) {
        self.replace_selected(|e| e.rotated_by(degrees));
    }

    pub fn scale_selected(&mut self, factor: f32) {
        self.replace_selected(|e| e.scaled(factor));
    }

    /// Recolor the selected element (the toolbar offers palette and
    /// scheme-variant swatches)
    pub fn recolor_selected(&mut self, color: Rgb) {
        self.replace_selected(|e| e.recolored(color));
    }

    pub fn toggle_shading_selected(&mut self) {
        self.replace_selected(|e| {
            if e.shaded {
                e.without_shading()
            } else {
                e.with_shading(DEFAULT_SHADING_INTENSITY)
            }
        });
    }

    /// Advisory overlap check for the selected element
    pub fn selected_overlaps(&self) -> bool {
        let Some(selected) = self.selected() else {
            return false;
        };
        self.design
            .elements
            .iter()
            .any(|other| other.id != selected.id && selected.collides_with(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::RoomShape;

    fn app() -> AppState {
        let room = Room::new(
            RoomShape::Square { size: 6.0 },
            2.8,
            Rgb::new(0xa9, 0x7c, 0x50),
            Rgb::new(0xf5, 0xf5, 0xf5),
        );
        AppState::new(Design::new(room), None)
    }

    #[test]
    fn test_add_furniture_selects_and_bumps() {
        let mut app = app();
        app.add_furniture(FurnitureKind::Sofa);
        assert_eq!(app.design.elements.len(), 1);
        assert_eq!(app.selection, Some(app.design.elements[0].id));
        assert_eq!(app.revision, 1);
        // Placed at the room center
        let e = &app.design.elements[0];
        assert!((e.position.x - 3.0).abs() < 1e-4);
        assert!((e.position.y - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_palette_cycles_across_additions() {
        let mut app = app();
        let palette = app.design.room.colors.clone();
        for _ in 0..palette.len() + 1 {
            app.add_furniture(FurnitureKind::Chair);
        }
        assert_eq!(app.design.elements[0].color, palette[0]);
        assert_eq!(app.design.elements[palette.len()].color, palette[0]);
    }

    #[test]
    fn test_rotate_and_scale_selected() {
        let mut app = app();
        app.add_furniture(FurnitureKind::Table);
        app.rotate_selected(15.0);
        app.rotate_selected(15.0);
        app.scale_selected(2.0);
        let e = app.selected().unwrap();
        assert_eq!(e.rotation, 30.0);
        assert!((e.dimensions.width - 2.4).abs() < 1e-4);
        assert_eq!(app.revision, 4);
    }

    #[test]
    fn test_recolor_applies_swatch_color() {
        let mut app = app();
        app.add_furniture(FurnitureKind::Rug);
        let palette = app.design.room.colors.clone();
        assert_eq!(app.selected().unwrap().color, palette[0]);
        app.recolor_selected(palette[2]);
        assert_eq!(app.selected().unwrap().color, palette[2]);
        // Scheme-variant swatches pass derived colors the same way
        let variant = palette[2].complementary();
        app.recolor_selected(variant);
        assert_eq!(app.selected().unwrap().color, variant);
    }

    #[test]
    fn test_shading_toggle_round_trip() {
        let mut app = app();
        app.add_furniture(FurnitureKind::Bed);
        app.toggle_shading_selected();
        assert!(app.selected().unwrap().shaded);
        assert_eq!(
            app.selected().unwrap().shading_intensity,
            Some(DEFAULT_SHADING_INTENSITY)
        );
        app.toggle_shading_selected();
        assert!(!app.selected().unwrap().shaded);
        assert!(app.selected().unwrap().shading_intensity.is_none());
    }

    #[test]
    fn test_delete_clears_selection() {
        let mut app = app();
        app.add_furniture(FurnitureKind::Desk);
        app.delete_selected();
        assert!(app.design.elements.is_empty());
        assert!(app.selection.is_none());
        // Deleting with nothing selected is a no-op
        let before = app.revision;
        app.delete_selected();
        assert_eq!(app.revision, before);
    }

    #[test]
    fn test_overlap_advisory() {
        let mut app = app();
        app.add_furniture(FurnitureKind::Sofa);
        app.add_furniture(FurnitureKind::Sofa);
        // Both at the center
        assert!(app.selected_overlaps());
        app.replace_selected(|e| e.moved_to(crate::geom::Point2::new(1.0, 5.0)));
        assert!(!app.selected_overlaps());
    }

    #[test]
    fn test_drag_then_scale_session() {
        use crate::ui::MouseState;
        use crate::view2d::{handle_pointer, PlanAction};
        use crate::viewport::{ViewTransform, ViewportRect};

        let mut app = app();
        app.add_furniture(FurnitureKind::Sofa);
        let id = app.design.elements[0].id;

        let t = ViewTransform::fit(
            app.design.room.shape.bounds(),
            app.design.room.shape.max_extent(),
            ViewportRect::new(0.0, 0.0, 600.0, 600.0),
        )
        .unwrap();

        // Grab the sofa at the room center and drag it toward a corner
        let press_at = t.room_to_screen(crate::geom::Point2::new(3.0, 3.0));
        let press = MouseState {
            x: press_at.x,
            y: press_at.y,
            left_down: true,
            left_pressed: true,
            ..Default::default()
        };
        let action = handle_pointer(
            &mut app.plan,
            &press,
            true,
            &t,
            &app.design.room,
            &app.design.elements,
        );
        assert_eq!(action, PlanAction::Select(id));

        let drag_at = t.room_to_screen(crate::geom::Point2::new(2.0, 1.5));
        let drag = MouseState {
            x: drag_at.x,
            y: drag_at.y,
            left_down: true,
            ..Default::default()
        };
        let action = handle_pointer(
            &mut app.plan,
            &drag,
            true,
            &t,
            &app.design.room,
            &app.design.elements,
        );
        let PlanAction::Move { id: moved, to } = action else {
            panic!("expected Move, got {:?}", action);
        };
        assert_eq!(moved, id);
        app.replace_selected(|e| e.moved_to(to));

        app.scale_selected(1.1);
        app.scale_selected(1.1);
        let e = app.selected().unwrap();
        assert!((e.position.x - 2.0).abs() < 1e-3);
        assert!((e.position.y - 1.5).abs() < 1e-3);
        assert!((e.dimensions.width - 2.0 * 1.1 * 1.1).abs() < 1e-4);
    }

    #[test]
    fn test_edit_session_survives_save_and_reload() {
        use crate::room::store::load_design_from_str;

        let mut app = app();
        app.add_furniture(FurnitureKind::Bed);
        app.rotate_selected(15.0);
        app.scale_selected(1.1);
        app.toggle_shading_selected();
        app.replace_selected(|e| e.moved_to(crate::geom::Point2::new(2.0, 4.0)));
        let saved = app.selected().unwrap().clone();

        let text = ron::to_string(&app.design).unwrap();
        let loaded = load_design_from_str(&text).unwrap();
        let mut restored = AppState::new(loaded, None);
        restored.selection = Some(saved.id);

        let e = restored.selected().unwrap();
        assert_eq!(e.rotation, saved.rotation);
        assert_eq!(e.position, saved.position);
        assert_eq!(e.dimensions, saved.dimensions);
        assert!(e.shaded);
        assert_eq!(e.shading_intensity, saved.shading_intensity);
    }

    #[test]
    fn test_open_resets_session_state() {
        let mut app = app();
        app.add_furniture(FurnitureKind::Chair);
        let room = Room::new(
            RoomShape::Circle { radius: 4.0 },
            3.0,
            Rgb::new(0xa9, 0x7c, 0x50),
            Rgb::new(0xf5, 0xf5, 0xf5),
        );
        app.open(Design::new(room), None);
        assert!(app.selection.is_none());
        assert!(app.design.elements.is_empty());
        assert!(matches!(app.design.room.shape, RoomShape::Circle { .. }));
    }
}
