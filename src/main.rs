//! RoomPlan: interactive room layout designer
//!
//! Set up a room footprint, drop furniture into a top-down plan view, then
//! walk around it in a 3D preview. Designs persist as RON files.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod design;
mod geom;
mod room;
mod ui;
mod view2d;
mod view3d;
mod viewport;

use macroquad::prelude::*;
use app::{AppState, ViewMode};
use design::{color_scheme, room_palette, FurnitureKind, Rgb, SchemeKind};
use room::store::{load_design, save_design};
use room::{Design, Room, RoomShape};
use ui::{MouseState, Rect, Toolbar, UiContext};
use view3d::{CameraPreset, WallSide};
use viewport::ViewportRect;

const TOOLBAR_HEIGHT: f32 = 32.0;
const STATUS_HEIGHT: f32 = 24.0;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("RoomPlan v{}", VERSION),
        window_width: 1280,
        window_height: 800,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

/// Starter rooms offered by the New menu, each paired with a named palette
fn room_presets() -> [(&'static str, RoomShape, &'static str); 4] {
    [
        ("Rectangle 5x4", RoomShape::Rectangle { width: 5.0, length: 4.0 }, "warm"),
        ("Square 5", RoomShape::Square { size: 5.0 }, "modern"),
        (
            "L-Shape 8x8",
            RoomShape::LShape {
                width: 8.0,
                length: 8.0,
                cutout_width: 3.0,
                cutout_length: 3.0,
            },
            "cool",
        ),
        ("Circle r3", RoomShape::Circle { radius: 3.0 }, "vibrant"),
    ]
}

fn default_room(shape: RoomShape, palette: &str) -> Room {
    let mut room = Room::new(shape, 2.8, Rgb::new(0xa9, 0x7c, 0x50), Rgb::new(0xf5, 0xf5, 0xf5));
    if let Some(colors) = room_palette(palette) {
        room.colors = colors.to_vec();
    }
    room
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut app = AppState::new(
        Design::new(default_room(RoomShape::Rectangle { width: 5.0, length: 4.0 }, "warm")),
        None,
    );
    let mut ui_ctx = UiContext::new();
    let mut new_menu_open = false;

    loop {
        clear_background(Color::from_rgba(16, 16, 20, 255));
        let mouse = MouseState::poll();
        ui_ctx.begin_frame(mouse);

        let screen_w = screen_width();
        let screen_h = screen_height();
        let view_rect = ViewportRect::new(
            0.0,
            TOOLBAR_HEIGHT * 2.0,
            screen_w,
            (screen_h - TOOLBAR_HEIGHT * 2.0 - STATUS_HEIGHT).max(0.0),
        );

        // Main view first so toolbar clicks never fall through to it
        match app.view {
            ViewMode::Plan => {
                let moved = view2d::draw_plan_view(
                    &mouse,
                    view_rect,
                    &mut app.plan,
                    &app.design.room,
                    &mut app.design.elements,
                    &mut app.selection,
                );
                if moved {
                    app.bump();
                    if app.selected_overlaps() {
                        app.set_status("Warning: elements overlap");
                    }
                }
            }
            ViewMode::Preview => {
                let inside = view_rect.contains(geom::Point2::new(mouse.x, mouse.y));
                app.camera.handle_input(&mouse, inside);
                app.scene
                    .sync(&app.design.room, &app.design.elements, app.revision);

                set_camera(&app.camera.camera());
                app.scene.draw(&app.walls);
                set_default_camera();
            }
        }

        // Primary toolbar: file actions, view toggle, element operations
        let bar1 = Rect::new(0.0, 0.0, screen_w, TOOLBAR_HEIGHT);
        draw_rectangle(bar1.x, bar1.y, bar1.w, bar1.h, Color::from_rgba(30, 30, 35, 255));
        let mut bar = Toolbar::new(bar1);

        if bar.button_active(&mut ui_ctx, "New", new_menu_open) {
            new_menu_open = !new_menu_open;
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            if bar.button(&mut ui_ctx, "Open") {
                open_design(&mut app);
            }
            if bar.button(&mut ui_ctx, "Save") {
                save_current(&mut app, false);
            }
            if bar.button(&mut ui_ctx, "Save As") {
                save_current(&mut app, true);
            }
        }
        bar.separator();

        if bar.button_active(&mut ui_ctx, "Plan", app.view == ViewMode::Plan) {
            app.view = ViewMode::Plan;
        }
        if bar.button_active(&mut ui_ctx, "3D", app.view == ViewMode::Preview) {
            app.view = ViewMode::Preview;
        }
        bar.separator();

        match app.view {
            ViewMode::Plan => {
                if app.selection.is_some() {
                    if bar.button(&mut ui_ctx, "Rotate -") {
                        app.rotate_selected(-15.0);
                    }
                    if bar.button(&mut ui_ctx, "Rotate +") {
                        app.rotate_selected(15.0);
                    }
                    if bar.button(&mut ui_ctx, "Smaller") {
                        app.scale_selected(1.0 / 1.1);
                    }
                    if bar.button(&mut ui_ctx, "Larger") {
                        app.scale_selected(1.1);
                    }
                    // Swatches: the room palette, then lighter/darker/
                    // complementary variants of the current color
                    if let Some(current) = app.selected().map(|e| e.color) {
                        let palette = app.design.room.colors.clone();
                        for color in palette {
                            if bar.swatch(&mut ui_ctx, color, color == current) {
                                app.recolor_selected(color);
                            }
                        }
                        let mut variants = color_scheme(current, SchemeKind::Monochromatic);
                        variants.push(current.complementary());
                        for color in variants.into_iter().skip(1) {
                            if bar.swatch(&mut ui_ctx, color, false) {
                                app.recolor_selected(color);
                            }
                        }
                    }
                    let shaded = app.selected().map(|e| e.shaded).unwrap_or(false);
                    if bar.button_active(&mut ui_ctx, "Shade", shaded) {
                        app.toggle_shading_selected();
                    }
                    if bar.button(&mut ui_ctx, "Delete") {
                        app.delete_selected();
                    }
                } else {
                    bar.label("Select an element to edit it");
                }
            }
            ViewMode::Preview => {
                bar.label("Walls:");
                for side in WallSide::ALL {
                    if bar.button_active(&mut ui_ctx, side.label(), app.walls.is_visible(side)) {
                        app.walls.toggle(side);
                    }
                }
                bar.separator();
                bar.label("View:");
                for preset in CameraPreset::ALL {
                    if bar.button(&mut ui_ctx, preset.label()) {
                        app.camera.apply_preset(preset, &app.design.room);
                    }
                }
            }
        }

        // Secondary toolbar: room presets while the New menu is open,
        // otherwise the furniture palette
        let bar2 = Rect::new(0.0, TOOLBAR_HEIGHT, screen_w, TOOLBAR_HEIGHT);
        draw_rectangle(bar2.x, bar2.y, bar2.w, bar2.h, Color::from_rgba(26, 26, 31, 255));
        let mut bar = Toolbar::new(bar2);

        if new_menu_open {
            bar.label("New room:");
            for (label, shape, palette) in room_presets() {
                if bar.button(&mut ui_ctx, label) {
                    app.open(Design::new(default_room(shape, palette)), None);
                    app.set_status(format!("Created {}", label));
                    new_menu_open = false;
                }
            }
        } else {
            bar.label("Add:");
            for kind in FurnitureKind::ALL {
                if bar.button(&mut ui_ctx, kind.label()) {
                    app.add_furniture(kind);
                    app.view = ViewMode::Plan;
                }
            }
        }

        draw_status_line(&mut app, screen_w, screen_h);
        app.expire_status();

        next_frame().await;
    }
}

fn draw_status_line(app: &mut AppState, screen_w: f32, screen_h: f32) {
    let y = screen_h - STATUS_HEIGHT;
    draw_rectangle(0.0, y, screen_w, STATUS_HEIGHT, Color::from_rgba(30, 30, 35, 255));

    let text = if let Some(status) = &app.status {
        status.text.clone()
    } else {
        let file = app
            .file_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "unsaved design".to_string());
        format!(
            "{} | {} elements | area {:.1} m2",
            file,
            app.design.elements.len(),
            app.design.room.shape.area()
        )
    };
    draw_text(&text, 8.0, y + 16.0, 14.0, Color::from_rgba(180, 180, 190, 255));
}

#[cfg(not(target_arch = "wasm32"))]
fn open_design(app: &mut AppState) {
    let Some(path) = rfd::FileDialog::new()
        .add_filter("Room design", &["ron"])
        .pick_file()
    else {
        return;
    };
    match load_design(&path) {
        Ok(design) => {
            app.open(design, Some(path));
            app.set_status("Design loaded");
        }
        Err(e) => {
            eprintln!("failed to load {}: {}", path.display(), e);
            app.set_status(format!("Load failed: {}", e));
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn save_current(app: &mut AppState, always_ask: bool) {
    let path = if always_ask || app.file_path.is_none() {
        rfd::FileDialog::new()
            .add_filter("Room design", &["ron"])
            .set_file_name("room.ron")
            .save_file()
    } else {
        app.file_path.clone()
    };
    let Some(path) = path else { return };

    match save_design(&app.design, &path) {
        Ok(()) => {
            app.file_path = Some(path);
            app.set_status("Design saved");
        }
        Err(e) => {
            eprintln!("failed to save {}: {}", path.display(), e);
            app.set_status(format!("Save failed: {}", e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_apply_named_palettes() {
        for (_, shape, palette) in room_presets() {
            let expected = room_palette(palette).unwrap();
            let room = default_room(shape, palette);
            assert_eq!(room.colors, expected);
        }
    }

    #[test]
    fn test_unknown_palette_keeps_default_colors() {
        let fallback = default_room(RoomShape::Square { size: 5.0 }, "brutalist");
        let stock = Room::new(
            RoomShape::Square { size: 5.0 },
            2.8,
            Rgb::new(0xa9, 0x7c, 0x50),
            Rgb::new(0xf5, 0xf5, 0xf5),
        );
        assert_eq!(fallback.colors, stock.colors);
    }
}
