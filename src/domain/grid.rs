use super::{Cell, GridError};

/// Fixed width and height of a grid. Both are non-zero and `width * height`
/// fits in `usize`, so every [`Coord`] built from them maps to a valid index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: usize,
    height: usize,
}

impl Dimensions {
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::ZeroDimension { width, height });
        }
        width
            .checked_mul(height)
            .ok_or(GridError::TooLarge { width, height })?;
        Ok(Self { width, height })
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub const fn len(&self) -> usize {
        self.width * self.height
    }

    /// Validate a position and turn it into a typed coordinate
    pub fn coord(&self, x: usize, y: usize) -> Result<Coord, GridError> {
        if x < self.width && y < self.height {
            Ok(Coord { x, y })
        } else {
            Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Row-major linear index, `x + y * width`. Panics if `coord` does not
    /// fit these dimensions.
    pub const fn index(&self, coord: Coord) -> usize {
        assert!(coord.x < self.width && coord.y < self.height, "coordinate outside grid");
        coord.x + coord.y * self.width
    }

    /// All coordinates in row-major order
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Coord { x, y }))
    }
}

/// A position checked against some [`Dimensions`].
///
/// Using a coordinate against a grid it does not fit is a caller bug;
/// [`Generation::get`] and [`Generation::set`] panic instead of wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    x: usize,
    y: usize,
}

impl Coord {
    pub const fn x(&self) -> usize {
        self.x
    }

    pub const fn y(&self) -> usize {
        self.y
    }
}

/// One complete grid snapshot stored as a fixed, contiguous byte array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generation {
    dims: Dimensions,
    cells: Box<[i8]>,
}

impl Generation {
    /// Allocate a generation with every cell dead
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            cells: vec![Cell::DEAD.raw(); dims.len()].into_boxed_slice(),
        }
    }

    pub const fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Linear index of `coord`, which must lie inside this generation
    fn index_of(&self, coord: Coord) -> usize {
        assert!(
            coord.x < self.dims.width && coord.y < self.dims.height,
            "coordinate ({}, {}) used on a {}x{} grid",
            coord.x,
            coord.y,
            self.dims.width,
            self.dims.height
        );
        self.dims.index(coord)
    }

    pub fn get(&self, coord: Coord) -> Cell {
        Cell::from_stored(self.cells[self.index_of(coord)])
    }

    pub fn set(&mut self, coord: Coord, cell: Cell) {
        let idx = self.index_of(coord);
        self.cells[idx] = cell.raw();
    }

    /// Untyped read, rejecting positions outside the grid
    pub fn get_xy(&self, x: usize, y: usize) -> Result<Cell, GridError> {
        self.dims.coord(x, y).map(|c| self.get(c))
    }

    /// Untyped write, rejecting positions outside the grid
    pub fn set_xy(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), GridError> {
        let coord = self.dims.coord(x, y)?;
        self.set(coord, cell);
        Ok(())
    }

    /// Read-only row-major view of all `width * height` cell bytes.
    /// This is what gets handed to a renderer.
    pub fn as_raw(&self) -> &[i8] {
        &self.cells
    }

    pub(crate) fn raw_mut(&mut self) -> &mut [i8] {
        &mut self.cells
    }

    /// Overwrite every cell with the same value
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell.raw());
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&v| v == Cell::ALIVE.raw()).count()
    }

    /// Number of cells still fading out
    pub fn decaying(&self) -> usize {
        self.cells.iter().filter(|&&v| v < 0).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.dims
            .coords()
            .zip(self.cells.iter())
            .map(|(coord, &v)| (coord, Cell::from_stored(v)))
    }
}

/// Two same-shape generations: `current` is authoritative and rendered,
/// `next` is where the following tick is written. The two never alias.
#[derive(Clone, Debug)]
pub struct GridBuffer {
    current: Generation,
    next: Generation,
}

impl GridBuffer {
    pub fn new(dims: Dimensions) -> Self {
        Self {
            current: Generation::new(dims),
            next: Generation::new(dims),
        }
    }

    pub const fn dimensions(&self) -> Dimensions {
        self.current.dims
    }

    pub fn current(&self) -> &Generation {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut Generation {
        &mut self.current
    }

    /// Borrow the current generation for reading and the next one for writing
    pub fn split(&mut self) -> (&Generation, &mut Generation) {
        (&self.current, &mut self.next)
    }

    /// Exchange the roles of the two generations. Only the boxed slices move;
    /// no cell data is copied.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
    }

    /// Zero both generations in place
    pub fn clear(&mut self) {
        self.current.fill(Cell::DEAD);
        self.next.fill(Cell::DEAD);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(w: usize, h: usize) -> Dimensions {
        Dimensions::new(w, h).unwrap()
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Dimensions::new(0, 5),
            Err(GridError::ZeroDimension { width: 0, height: 5 })
        );
        assert!(Dimensions::new(5, 0).is_err());
        assert!(matches!(
            Dimensions::new(usize::MAX, 2),
            Err(GridError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_new_generation_is_dead() {
        let g = Generation::new(dims(4, 3));
        assert_eq!(g.as_raw().len(), 12);
        assert!(g.as_raw().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_get_set_row_major() {
        let mut g = Generation::new(dims(4, 3));
        g.set_xy(1, 2, Cell::ALIVE).unwrap();
        assert_eq!(g.get_xy(1, 2), Ok(Cell::ALIVE));
        assert_eq!(g.as_raw()[1 + 2 * 4], 1);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut g = Generation::new(dims(4, 3));
        assert_eq!(
            g.get_xy(4, 0),
            Err(GridError::OutOfBounds { x: 4, y: 0, width: 4, height: 3 })
        );
        assert!(g.set_xy(0, 3, Cell::ALIVE).is_err());
        assert_eq!(g.population(), 0);
    }

    #[test]
    #[should_panic(expected = "used on a 2x6 grid")]
    fn test_coord_from_wider_grid_panics() {
        let wide = dims(4, 3);
        let coord = wide.coord(3, 0).unwrap();
        let mut tall = Generation::new(dims(2, 6));
        tall.set(coord, Cell::ALIVE);
    }

    #[test]
    #[should_panic(expected = "used on a 5x2 grid")]
    fn test_coord_from_taller_grid_panics_on_read() {
        let coord = dims(2, 5).coord(0, 4).unwrap();
        Generation::new(dims(5, 2)).get(coord);
    }

    #[test]
    #[should_panic(expected = "coordinate outside grid")]
    fn test_index_rejects_foreign_coord() {
        let coord = dims(4, 3).coord(3, 0).unwrap();
        dims(2, 6).index(coord);
    }

    #[test]
    fn test_coord_fitting_other_grid_is_accepted() {
        let coord = dims(2, 2).coord(1, 1).unwrap();
        let mut g = Generation::new(dims(4, 4));
        g.set(coord, Cell::ALIVE);
        assert_eq!(g.get_xy(1, 1), Ok(Cell::ALIVE));
    }

    #[test]
    fn test_population_and_decaying() {
        let mut g = Generation::new(dims(3, 3));
        g.set_xy(0, 0, Cell::ALIVE).unwrap();
        g.set_xy(1, 0, Cell::ALIVE).unwrap();
        g.set_xy(2, 2, Cell::DECAY_START).unwrap();
        assert_eq!(g.population(), 2);
        assert_eq!(g.decaying(), 1);
    }

    #[test]
    fn test_swap_exchanges_without_copy() {
        let mut buffer = GridBuffer::new(dims(3, 2));
        buffer.current_mut().set_xy(2, 1, Cell::ALIVE).unwrap();
        let current_ptr = buffer.current().as_raw().as_ptr();

        buffer.swap();
        assert_eq!(buffer.current().population(), 0);
        assert_ne!(buffer.current().as_raw().as_ptr(), current_ptr);

        buffer.swap();
        assert_eq!(buffer.current().as_raw().as_ptr(), current_ptr);
        assert_eq!(buffer.current().get_xy(2, 1), Ok(Cell::ALIVE));
    }

    #[test]
    fn test_split_buffers_are_disjoint() {
        let mut buffer = GridBuffer::new(dims(2, 2));
        let (current, next) = buffer.split();
        next.fill(Cell::ALIVE);
        assert_eq!(current.population(), 0);
        assert_eq!(next.population(), 4);
    }

    #[test]
    fn test_coords_row_major() {
        let d = dims(2, 2);
        let order: Vec<_> = d.coords().map(|c| (c.x(), c.y())).collect();
        assert_eq!(order, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }
}
