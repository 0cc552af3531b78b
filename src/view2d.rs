//! 2D plan view - top-down room rendering and element dragging
//!
//! Rendering runs every frame from current state; there is no retained
//! canvas. Pointer handling is split into a pure state machine
//! (`handle_pointer`) so the drag rules are testable without a window.

use macroquad::prelude::*;
use uuid::Uuid;
use crate::design::DesignElement;
use crate::geom::{triangulate, Point2};
use crate::room::Room;
use crate::ui::MouseState;
use crate::viewport::{ViewTransform, ViewportRect};

/// Grid spacing in meters
const GRID_STEP: f32 = 0.5;
/// Side of the square selection handles, in pixels
const HANDLE_SIZE: f32 = 5.0;

/// Per-session plan view state (drag in progress)
#[derive(Debug, Default)]
pub struct PlanViewState {
    drag: Option<DragState>,
}

#[derive(Debug, Clone, Copy)]
struct DragState {
    element_id: Uuid,
    /// Element center minus grab point, in room space, so the element does
    /// not jump to the cursor on pickup
    grab_offset: Point2,
}

/// What the pointer did this frame, for the caller to apply
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlanAction {
    None,
    Select(Uuid),
    ClearSelection,
    /// Drag update that passed the containment check
    Move { id: Uuid, to: Point2 },
}

/// Advance the drag state machine for one frame of pointer input.
///
/// Picking tests elements in reverse order so the one drawn on top wins.
/// A drag update is only emitted when the new center stays inside the room
/// footprint; otherwise the element holds its last valid position, and the
/// drag itself stays alive so the cursor can come back inside.
pub fn handle_pointer(
    state: &mut PlanViewState,
    mouse: &MouseState,
    inside_view: bool,
    transform: &ViewTransform,
    room: &Room,
    elements: &[DesignElement],
) -> PlanAction {
    let cursor = transform.screen_to_room(Point2::new(mouse.x, mouse.y));

    if mouse.left_pressed && inside_view {
        for element in elements.iter().rev() {
            if element.hit_test(cursor) {
                state.drag = Some(DragState {
                    element_id: element.id,
                    grab_offset: element.position - cursor,
                });
                return PlanAction::Select(element.id);
            }
        }
        state.drag = None;
        return PlanAction::ClearSelection;
    }

    if let Some(drag) = state.drag {
        // Release or leaving the view both end the drag
        if !mouse.left_down || !inside_view {
            state.drag = None;
            return PlanAction::None;
        }
        let target = cursor + drag.grab_offset;
        if room.shape.contains(target) {
            return PlanAction::Move {
                id: drag.element_id,
                to: target,
            };
        }
    }

    PlanAction::None
}

/// Draw the plan view and handle element dragging
pub fn draw_plan_view(
    mouse: &MouseState,
    rect: ViewportRect,
    state: &mut PlanViewState,
    room: &Room,
    elements: &mut Vec<DesignElement>,
    selection: &mut Option<Uuid>,
) -> bool {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, Color::from_rgba(24, 24, 28, 255));

    let vertices = room.shape.vertices();
    let bounds = room.shape.bounds();
    let transform = match ViewTransform::fit(bounds, room.shape.max_extent(), rect) {
        Some(t) => t,
        // Viewport too small this frame; draw nothing rather than divide
        None => return false,
    };

    // Clip everything to the view rect
    let dpi = screen_dpi_scale();
    gl_use_default_material();
    unsafe {
        get_internal_gl().quad_gl.scissor(Some((
            (rect.x * dpi) as i32,
            (rect.y * dpi) as i32,
            (rect.w * dpi) as i32,
            (rect.h * dpi) as i32,
        )));
    }

    let to_screen = |p: Point2| -> Vec2 {
        let s = transform.room_to_screen(p);
        Vec2::new(s.x, s.y)
    };

    // Floor fill (triangulated, so the L-shape and circle fill correctly)
    let floor_color = room.floor_color.to_draw_color(1.0);
    for [a, b, c] in triangulate(&vertices) {
        draw_triangle(to_screen(vertices[a]), to_screen(vertices[b]), to_screen(vertices[c]), floor_color);
    }

    // Half-meter grid over the outline bounding box
    let grid_color = Color::from_rgba(255, 255, 255, 40);
    let mut x = bounds.min_x;
    while x <= bounds.max_x + 1e-3 {
        let top = to_screen(Point2::new(x, bounds.min_y));
        let bottom = to_screen(Point2::new(x, bounds.max_y));
        draw_line(top.x, top.y, bottom.x, bottom.y, 1.0, grid_color);
        x += GRID_STEP;
    }
    let mut y = bounds.min_y;
    while y <= bounds.max_y + 1e-3 {
        let left = to_screen(Point2::new(bounds.min_x, y));
        let right = to_screen(Point2::new(bounds.max_x, y));
        draw_line(left.x, left.y, right.x, right.y, 1.0, grid_color);
        y += GRID_STEP;
    }

    // Room outline
    let outline_color = Color::from_rgba(60, 60, 70, 255);
    for i in 0..vertices.len() {
        let a = to_screen(vertices[i]);
        let b = to_screen(vertices[(i + 1) % vertices.len()]);
        draw_line(a.x, a.y, b.x, b.y, 2.0, outline_color);
    }

    // Elements, in insertion order so later ones draw on top
    for element in elements.iter() {
        let corners = element.rotated_corners().map(to_screen);
        let alpha = if element.shaded { 0.7 } else { 1.0 };
        let fill = element.color.to_draw_color(alpha);
        draw_triangle(corners[0], corners[1], corners[2], fill);
        draw_triangle(corners[0], corners[2], corners[3], fill);

        if *selection == Some(element.id) {
            let accent = Color::from_rgba(255, 200, 100, 255);
            for i in 0..4 {
                draw_dashed_line(corners[i], corners[(i + 1) % 4], accent);
            }
            for corner in corners {
                draw_rectangle(
                    corner.x - HANDLE_SIZE * 0.5,
                    corner.y - HANDLE_SIZE * 0.5,
                    HANDLE_SIZE,
                    HANDLE_SIZE,
                    accent,
                );
            }
        } else {
            let stroke = Color::from_rgba(0, 0, 0, 255);
            for i in 0..4 {
                let a = corners[i];
                let b = corners[(i + 1) % 4];
                draw_line(a.x, a.y, b.x, b.y, 1.0, stroke);
            }
        }
    }

    // Scale readout, bottom right
    let readout = format!("Scale: 1:{}", (1.0 / transform.scale()).round() as i32);
    let dims = measure_text(&readout, None, 14, 1.0);
    draw_text(
        &readout,
        rect.x + rect.w - dims.width - 10.0,
        rect.y + rect.h - 10.0,
        14.0,
        Color::from_rgba(150, 150, 160, 255),
    );

    unsafe {
        get_internal_gl().quad_gl.scissor(None);
    }

    // Pointer interaction after drawing so picking sees this frame's layout
    let inside = rect.contains(Point2::new(mouse.x, mouse.y));
    let mut changed = false;
    match handle_pointer(state, mouse, inside, &transform, room, elements) {
        PlanAction::Select(id) => *selection = Some(id),
        PlanAction::ClearSelection => *selection = None,
        PlanAction::Move { id, to } => {
            if let Some(element) = elements.iter_mut().find(|e| e.id == id) {
                if element.position != to {
                    *element = element.moved_to(to);
                    changed = true;
                }
            }
        }
        PlanAction::None => {}
    }
    changed
}

fn draw_dashed_line(a: Vec2, b: Vec2, color: Color) {
    let dash = 6.0;
    let gap = 4.0;
    let total = (b - a).length();
    if total <= f32::EPSILON {
        return;
    }
    let dir = (b - a) / total;
    let mut t = 0.0;
    while t < total {
        let end = (t + dash).min(total);
        let p0 = a + dir * t;
        let p1 = a + dir * end;
        draw_line(p0.x, p0.y, p1.x, p1.y, 1.5, color);
        t += dash + gap;
    }
}
