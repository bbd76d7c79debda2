//! The lifecycle rule applied to a whole generation.
//!
//! Each cell's next value depends only on its own value and its neighbor
//! count (see [`Cell::evolve`]), so the pass has no ordering constraints.

use rayon::prelude::*;

use super::{Cell, Generation, NeighborCounts};

fn check_shapes(current: &Generation, counts: &NeighborCounts, next: &Generation) {
    assert_eq!(current.dimensions(), counts.dimensions(), "counts do not match generation");
    assert_eq!(current.dimensions(), next.dimensions(), "generations differ in shape");
}

/// Write the next value of every cell into `next`
pub fn apply(current: &Generation, counts: &NeighborCounts, next: &mut Generation) {
    check_shapes(current, counts, next);
    next.raw_mut()
        .iter_mut()
        .zip(current.as_raw())
        .zip(counts.as_slice())
        .for_each(|((out, &cell), &neighbors)| {
            *out = Cell::from_stored(cell).evolve(neighbors).raw();
        });
}

/// Same as [`apply`], spread over the rayon pool
pub fn apply_parallel(current: &Generation, counts: &NeighborCounts, next: &mut Generation) {
    check_shapes(current, counts, next);
    let width = current.dimensions().width();
    next.raw_mut()
        .par_iter_mut()
        .zip(current.as_raw().par_iter())
        .zip(counts.as_slice().par_iter())
        .with_min_len(width)
        .for_each(|((out, &cell), &neighbors)| {
            *out = Cell::from_stored(cell).evolve(neighbors).raw();
        });
}
