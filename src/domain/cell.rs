/// Cell is one slot of the decaying Life grid, stored as a signed byte.
///
/// * `1` is alive
/// * `0` is dead
/// * `-20..=-1` is a cell that died recently and is fading back towards `0`
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Cell(i8);

impl Cell {
    pub const ALIVE: Cell = Cell(1);
    pub const DEAD: Cell = Cell(0);
    /// Value written into a cell on the tick it dies
    pub const DECAY_START: Cell = Cell(-20);

    /// Accept a raw byte only if it lies in `{1} ∪ [-20, 0]`
    pub const fn from_raw(value: i8) -> Option<Self> {
        if value == Self::ALIVE.0 || (value >= Self::DECAY_START.0 && value <= 0) {
            Some(Cell(value))
        } else {
            None
        }
    }

    /// Wrap a byte read back out of a generation buffer. Only buffers this
    /// crate writes go through here, so the value is already in range.
    pub(crate) const fn from_stored(value: i8) -> Self {
        Cell(value)
    }

    pub const fn raw(self) -> i8 {
        self.0
    }

    pub const fn is_alive(self) -> bool {
        self.0 == Self::ALIVE.0
    }

    pub const fn is_decaying(self) -> bool {
        self.0 < 0
    }

    /// Ticks left until a decaying cell reaches `0`; zero for live and dead cells
    pub const fn decay_remaining(self) -> u8 {
        if self.0 < 0 { self.0.unsigned_abs() } else { 0 }
    }

    /// Next value of this cell given its live neighbor count:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Any other live cell dies and starts decaying at -20
    /// 3. A non-live cell with exactly 3 neighbors is born
    /// 4. Otherwise the decay counter moves one step towards 0
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self.0, neighbors) {
            (1, 2 | 3) => Self::ALIVE,
            (1, _) => Self::DECAY_START,
            (_, 3) => Self::ALIVE,
            (v, _) if v < 0 => Cell(v + 1),
            _ => Self::DEAD,
        }
    }
}
