pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 30.0;

/// Camera looks at a rectangle of the grid, measured in cells.
/// At zoom 1 the whole grid is visible; zooming never shows past the edges.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub target_x: f32,
    pub target_y: f32,
    pub zoom: f32,
    grid_width: f32,
    grid_height: f32,
}

impl Camera {
    pub fn new(grid_width: usize, grid_height: usize) -> Self {
        let (grid_width, grid_height) = (grid_width as f32, grid_height as f32);
        Self {
            target_x: grid_width / 2.0,
            target_y: grid_height / 2.0,
            zoom: MIN_ZOOM,
            grid_width,
            grid_height,
        }
    }

    /// Multiply zoom by `factor`, keeping it within `[MIN_ZOOM, MAX_ZOOM]`
    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        self.clamp_target();
    }

    /// Move the view centre by a distance in cells
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.target_x += dx;
        self.target_y += dy;
        self.clamp_target();
    }

    /// Half the visible width and height, in cells
    fn half_extent(&self) -> (f32, f32) {
        (
            self.grid_width / (self.zoom * 2.0),
            self.grid_height / (self.zoom * 2.0),
        )
    }

    fn clamp_target(&mut self) {
        let (half_w, half_h) = self.half_extent();
        self.target_x = self.target_x.clamp(half_w, self.grid_width - half_w);
        self.target_y = self.target_y.clamp(half_h, self.grid_height - half_h);
    }

    /// Visible region as `(min_x, min_y, width, height)` in cells
    pub fn visible_rect(&self) -> (f32, f32, f32, f32) {
        let (half_w, half_h) = self.half_extent();
        (self.target_x - half_w, self.target_y - half_h, half_w * 2.0, half_h * 2.0)
    }

    /// Convert a screen position inside a `viewport` to the cell under it
    pub fn screen_to_grid(&self, screen_x: f32, screen_y: f32, viewport: (f32, f32)) -> Option<(usize, usize)> {
        let (min_x, min_y, w, h) = self.visible_rect();
        let gx = min_x + screen_x / viewport.0 * w;
        let gy = min_y + screen_y / viewport.1 * h;
        (gx >= 0.0 && gy >= 0.0 && gx < self.grid_width && gy < self.grid_height)
            .then(|| (gx as usize, gy as usize))
    }

    /// Convert a cell position to the top-left screen position of that cell
    pub fn grid_to_screen(&self, grid_x: f32, grid_y: f32, viewport: (f32, f32)) -> (f32, f32) {
        let (min_x, min_y, w, h) = self.visible_rect();
        ((grid_x - min_x) / w * viewport.0, (grid_y - min_y) / h * viewport.1)
    }

    /// Reset camera to the full-grid view
    pub fn reset(&mut self) {
        self.target_x = self.grid_width / 2.0;
        self.target_y = self.grid_height / 2.0;
        self.zoom = MIN_ZOOM;
    }
}
