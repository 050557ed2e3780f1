#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

/// A point in container space (CSS pixels relative to the diagram surface).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Lower zoom bound, in percent.
pub const MIN_ZOOM: f64 = 50.0;
/// Upper zoom bound, in percent.
pub const MAX_ZOOM: f64 = 200.0;
/// Zoom step applied by the toolbar buttons, in percentage points.
pub const BUTTON_ZOOM_STEP: f64 = 10.0;
/// Zoom step applied per wheel notch, in percentage points.
pub const WHEEL_ZOOM_STEP: f64 = 5.0;

/// Camera state for the diagram surface.
///
/// `offset_x` / `offset_y` are the translate component in pre-scale CSS
/// pixels; `zoom` is a percentage clamped to `[MIN_ZOOM, MAX_ZOOM]`.
/// The rendered element uses `scale(zoom/100) translate(offset)` with a
/// top-left transform origin, so a content point `p` lands on screen at
/// `scale * (p + offset)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub offset_x: f64,
    pub offset_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { offset_x: 0.0, offset_y: 0.0, zoom: 100.0 }
    }
}

impl Camera {
    /// The zoom expressed as a scale factor (1.0 = 100 %).
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.zoom / 100.0
    }

    /// Set the zoom, clamped to the allowed range. Pan is untouched.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Button zoom-in: one `BUTTON_ZOOM_STEP` increment.
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + BUTTON_ZOOM_STEP);
    }

    /// Button zoom-out: one `BUTTON_ZOOM_STEP` decrement.
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - BUTTON_ZOOM_STEP);
    }

    /// Screen position of a content point under the current transform.
    #[must_use]
    pub fn content_to_screen(&self, content: Point) -> Point {
        Point {
            x: (content.x + self.offset_x) * self.scale(),
            y: (content.y + self.offset_y) * self.scale(),
        }
    }

    /// Content point currently rendered at a screen position.
    #[must_use]
    pub fn screen_to_content(&self, screen: Point) -> Point {
        Point {
            x: screen.x / self.scale() - self.offset_x,
            y: screen.y / self.scale() - self.offset_y,
        }
    }

    /// Zoom to `zoom` percent while keeping the content point under
    /// `cursor` stationary on screen.
    pub fn zoom_at(&mut self, zoom: f64, cursor: Point) {
        let next = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        if (next - self.zoom).abs() < f64::EPSILON {
            return;
        }
        let anchor = self.screen_to_content(cursor);
        let next_scale = next / 100.0;
        self.offset_x = cursor.x / next_scale - anchor.x;
        self.offset_y = cursor.y / next_scale - anchor.y;
        self.zoom = next;
    }

    /// Wheel zoom: one `WHEEL_ZOOM_STEP` notch toward or away from the
    /// cursor position.
    pub fn wheel_zoom(&mut self, zoom_in: bool, cursor: Point) {
        let target = if zoom_in {
            self.zoom + WHEEL_ZOOM_STEP
        } else {
            self.zoom - WHEEL_ZOOM_STEP
        };
        self.zoom_at(target, cursor);
    }

    /// Camera produced by dragging from `start` to `current` (both in
    /// screen pixels) starting at this camera's pan. Zoom is preserved;
    /// the drag vector is converted into pre-scale pixels so the content
    /// tracks the pointer 1:1 at every zoom level.
    #[must_use]
    pub fn dragged(&self, start: Point, current: Point) -> Camera {
        Camera {
            offset_x: self.offset_x + (current.x - start.x) / self.scale(),
            offset_y: self.offset_y + (current.y - start.y) / self.scale(),
            zoom: self.zoom,
        }
    }

    /// CSS `transform` value for the current camera.
    #[must_use]
    pub fn css_transform(&self) -> String {
        format!(
            "scale({}) translate({}px, {}px)",
            self.scale(),
            self.offset_x,
            self.offset_y
        )
    }
}
