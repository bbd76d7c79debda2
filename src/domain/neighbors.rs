//! Live-neighbor counting.
//!
//! The grid wraps top-to-bottom: row `0` and row `H-1` are neighbors of each
//! other, and only on those wrapped rows do the diagonals also wrap around
//! the columns. Everywhere else the left and right edges are open, so a live
//! cell in column `0` never counts towards column `W-1` of the same band of
//! rows. Every strategy below produces exactly the same counts.

use rayon::prelude::*;

use super::{Algorithm, Dimensions, Generation};

/// Per-cell live-neighbor counts, reused from tick to tick.
#[derive(Clone, Debug)]
pub struct NeighborCounts {
    dims: Dimensions,
    counts: Box<[u8]>,
}

impl NeighborCounts {
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            counts: vec![0; dims.len()].into_boxed_slice(),
        }
    }

    pub const fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.counts
    }

    /// Count at `(x, y)`, or `None` outside the grid
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        self.dims.coord(x, y).ok().map(|c| self.counts[self.dims.index(c)])
    }

    /// Recount every cell of `source` with the chosen strategy
    pub fn accumulate(&mut self, source: &Generation, algorithm: Algorithm) {
        assert_eq!(
            source.dimensions(),
            self.dims,
            "neighbor counts and source generation differ in shape"
        );
        match algorithm {
            Algorithm::Shifted => accumulate_shifted(source.as_raw(), self.dims, &mut self.counts),
            Algorithm::Direct => accumulate_direct(source.as_raw(), self.dims, &mut self.counts),
            Algorithm::DirectParallel => {
                accumulate_direct_parallel(source.as_raw(), self.dims, &mut self.counts)
            }
        }
    }
}

#[inline]
fn live(cells: &[i8], idx: usize) -> u8 {
    (cells[idx] == 1) as u8
}

/// Add every live source cell in `rows x cols` to the count of the cell
/// `offset` positions away from it.
fn shifted_pass(
    cells: &[i8],
    counts: &mut [u8],
    width: usize,
    rows: std::ops::Range<usize>,
    cols: std::ops::Range<usize>,
    offset: isize,
) {
    for y in rows {
        let row = y * width;
        for x in cols.clone() {
            let idx = row + x;
            counts[idx.wrapping_add_signed(offset)] += live(cells, idx);
        }
    }
}

/// Eight bulk passes, one per direction, each bounded so it never leaves the
/// array, then six passes adding the top/bottom wrap.
fn accumulate_shifted(cells: &[i8], dims: Dimensions, counts: &mut [u8]) {
    let (w, h) = (dims.width(), dims.height());
    let wi = w as isize;
    counts.fill(0);

    shifted_pass(cells, counts, w, 0..h - 1, 0..w, wi);
    shifted_pass(cells, counts, w, 1..h, 0..w, -wi);
    shifted_pass(cells, counts, w, 0..h, 0..w - 1, 1);
    shifted_pass(cells, counts, w, 0..h, 1..w, -1);
    shifted_pass(cells, counts, w, 1..h, 1..w, -1 - wi);
    shifted_pass(cells, counts, w, 0..h - 1, 1..w, -1 + wi);
    shifted_pass(cells, counts, w, 0..h - 1, 0..w - 1, 1 + wi);
    shifted_pass(cells, counts, w, 1..h, 0..w - 1, 1 - wi);

    let bottom = w * (h - 1);
    for x in 0..w {
        let east = (x + 1) % w;
        let west = (x + w - 1) % w;

        counts[x] += live(cells, bottom + x);
        counts[bottom + x] += live(cells, x);
        counts[x] += live(cells, bottom + east);
        counts[bottom + east] += live(cells, x);
        counts[x] += live(cells, bottom + west);
        counts[bottom + west] += live(cells, x);
    }
}

/// Count for a single cell by looking at its neighbors directly
fn count_at(cells: &[i8], w: usize, h: usize, x: usize, y: usize) -> u8 {
    let mut count = 0;

    // Open neighborhood: anything that stays inside the array
    for dy in -1isize..=1 {
        for dx in -1isize..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
                continue;
            };
            if nx < w && ny < h {
                count += live(cells, nx + ny * w);
            }
        }
    }

    // Top row sees the bottom row, with column wrap on the diagonals
    let bottom = w * (h - 1);
    if y == 0 {
        count += live(cells, bottom + x);
        count += live(cells, bottom + (x + 1) % w);
        count += live(cells, bottom + (x + w - 1) % w);
    }
    // Bottom row sees the top row the same way
    if y == h - 1 {
        count += live(cells, x);
        count += live(cells, (x + w - 1) % w);
        count += live(cells, (x + 1) % w);
    }

    count
}

fn accumulate_direct(cells: &[i8], dims: Dimensions, counts: &mut [u8]) {
    let (w, h) = (dims.width(), dims.height());
    for (y, row) in counts.chunks_mut(w).enumerate() {
        for (x, count) in row.iter_mut().enumerate() {
            *count = count_at(cells, w, h, x, y);
        }
    }
}

/// Rows are split across rayon tasks; each task writes only its own row of
/// `counts`, and the call returns once every row is done.
fn accumulate_direct_parallel(cells: &[i8], dims: Dimensions, counts: &mut [u8]) {
    let (w, h) = (dims.width(), dims.height());

    // Batch rows per task to keep scheduling overhead down on small grids
    let min_rows_per_task = (h / (rayon::current_num_threads() * 32)).max(4);

    counts
        .par_chunks_mut(w)
        .enumerate()
        .with_min_len(min_rows_per_task)
        .for_each(|(y, row)| {
            for (x, count) in row.iter_mut().enumerate() {
                *count = count_at(cells, w, h, x, y);
            }
        });
}
