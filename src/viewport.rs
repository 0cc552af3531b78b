//! Room-space to screen-space mapping for the 2D plan view
//!
//! One transform is derived per frame from the room outline and the current
//! viewport, and both directions (drawing and pointer picking) go through the
//! same record. Deriving them separately is how the two ends drift apart.

use crate::geom::{Bounds, Point2};

/// Pixel margin kept around the room outline when fitting
pub const VIEW_PADDING: f32 = 40.0;

/// A screen-space rectangle the plan view draws into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl ViewportRect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, p: Point2) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }
}

/// Meters-per-pixel fit for a room extent inside a viewport.
///
/// Returns None when the viewport is too small or the extent degenerate;
/// callers skip rendering for that frame instead of dividing by zero.
pub fn scale_factor(max_extent: f32, view_w: f32, view_h: f32) -> Option<f32> {
    let usable = view_w.min(view_h) - VIEW_PADDING;
    if usable <= 0.0 || max_extent <= 0.0 {
        return None;
    }
    Some(usable / max_extent)
}

/// The canonical plan-view transform for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    scale: f32,
    /// Screen position of the outline bounding box minimum
    screen_origin: Point2,
    /// Room position of the outline bounding box minimum
    room_origin: Point2,
}

impl ViewTransform {
    /// Fit the outline bounds into the viewport, centered.
    ///
    /// The fit uses the actual vertex bounding box, not the nominal
    /// dimensions, so shapes whose outline does not start at the origin
    /// (or whose polygonal extent differs slightly, like the circle) still
    /// land centered.
    pub fn fit(bounds: Bounds, max_extent: f32, viewport: ViewportRect) -> Option<ViewTransform> {
        let scale = scale_factor(max_extent, viewport.w, viewport.h)?;
        let screen_origin = Point2::new(
            viewport.x + (viewport.w - bounds.width() * scale) * 0.5,
            viewport.y + (viewport.h - bounds.height() * scale) * 0.5,
        );
        Some(ViewTransform {
            scale,
            screen_origin,
            room_origin: Point2::new(bounds.min_x, bounds.min_y),
        })
    }

    /// Pixels per meter
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn room_to_screen(&self, p: Point2) -> Point2 {
        self.screen_origin + (p - self.room_origin) * self.scale
    }

    pub fn screen_to_room(&self, p: Point2) -> Point2 {
        self.room_origin + (p - self.screen_origin) * (1.0 / self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_bounds(size: f32) -> Bounds {
        Bounds {
            min_x: 0.0,
            max_x: size,
            min_y: 0.0,
            max_y: size,
        }
    }

    #[test]
    fn test_scale_factor_fit() {
        // 800x600 view, 5m room: (600 - 40) / 5
        let s = scale_factor(5.0, 800.0, 600.0).unwrap();
        assert!((s - 112.0).abs() < 1e-5);
    }

    #[test]
    fn test_scale_factor_degenerate() {
        assert!(scale_factor(5.0, 30.0, 600.0).is_none());
        assert!(scale_factor(5.0, 40.0, 40.0).is_none());
        assert!(scale_factor(0.0, 800.0, 600.0).is_none());
    }

    #[test]
    fn test_round_trip_is_identity() {
        let t = ViewTransform::fit(
            square_bounds(5.0),
            5.0,
            ViewportRect::new(100.0, 50.0, 800.0, 600.0),
        )
        .unwrap();
        let p = Point2::new(1.25, 3.75);
        let back = t.screen_to_room(t.room_to_screen(p));
        assert!((back.x - p.x).abs() < 1e-4);
        assert!((back.y - p.y).abs() < 1e-4);
    }

    #[test]
    fn test_room_centered_in_viewport() {
        let viewport = ViewportRect::new(0.0, 0.0, 800.0, 600.0);
        let t = ViewTransform::fit(square_bounds(5.0), 5.0, viewport).unwrap();
        let center = t.room_to_screen(Point2::new(2.5, 2.5));
        assert!((center.x - 400.0).abs() < 1e-3);
        assert!((center.y - 300.0).abs() < 1e-3);
    }

    #[test]
    fn test_fit_handles_offset_viewport() {
        let viewport = ViewportRect::new(200.0, 100.0, 400.0, 400.0);
        let t = ViewTransform::fit(square_bounds(4.0), 4.0, viewport).unwrap();
        // All four corners land inside the viewport
        for corner in [
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(0.0, 4.0),
        ] {
            assert!(viewport.contains(t.room_to_screen(corner)));
        }
    }

    #[test]
    fn test_fit_degenerate_returns_none() {
        let viewport = ViewportRect::new(0.0, 0.0, 20.0, 20.0);
        assert!(ViewTransform::fit(square_bounds(5.0), 5.0, viewport).is_none());
    }
}
