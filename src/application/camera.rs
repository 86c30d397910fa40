/// Camera maps between screen pixels and world cells.
/// It is purely a view concern; the simulation never sees it.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub offset_x: f32,
    pub offset_y: f32,
    pub zoom: f32,
    home: (f32, f32, f32),
}

const MIN_ZOOM: f32 = 0.5;
const MAX_ZOOM: f32 = 8.0;

impl Camera {
    /// Camera framing a `width` x `height` world inside a viewport
    pub fn framing(width: usize, height: usize, viewport: (f32, f32), cell_size: f32) -> Self {
        let world_w = width as f32 * cell_size;
        let world_h = height as f32 * cell_size;
        let zoom = (viewport.0 / world_w)
            .min(viewport.1 / world_h)
            .clamp(MIN_ZOOM, MAX_ZOOM);
        let offset_x = (viewport.0 - world_w * zoom) / 2.0;
        let offset_y = (viewport.1 - world_h * zoom) / 2.0;
        Self {
            offset_x,
            offset_y,
            zoom,
            home: (offset_x, offset_y, zoom),
        }
    }

    /// Zoom by `factor`, keeping the point under `anchor` fixed on screen
    pub fn zoom_at(&mut self, factor: f32, anchor: (f32, f32)) {
        let new_zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        let ratio = new_zoom / self.zoom;
        self.offset_x = anchor.0 - (anchor.0 - self.offset_x) * ratio;
        self.offset_y = anchor.1 - (anchor.1 - self.offset_y) * ratio;
        self.zoom = new_zoom;
    }

    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Cell under a screen position, if it lies inside a `width` x `height` world
    pub fn screen_to_cell(
        &self,
        screen: (f32, f32),
        cell_size: f32,
        width: usize,
        height: usize,
    ) -> Option<(usize, usize)> {
        let gx = ((screen.0 - self.offset_x) / (cell_size * self.zoom)).floor();
        let gy = ((screen.1 - self.offset_y) / (cell_size * self.zoom)).floor();
        if gx < 0.0 || gy < 0.0 || gx >= width as f32 || gy >= height as f32 {
            return None;
        }
        Some((gx as usize, gy as usize))
    }

    pub fn cell_to_screen(&self, x: usize, y: usize, cell_size: f32) -> (f32, f32) {
        (
            x as f32 * cell_size * self.zoom + self.offset_x,
            y as f32 * cell_size * self.zoom + self.offset_y,
        )
    }

    /// Back to the framing the camera was created with
    pub fn reset(&mut self) {
        (self.offset_x, self.offset_y, self.zoom) = self.home;
    }
}
