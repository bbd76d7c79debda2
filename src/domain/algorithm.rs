//! Algorithm enum for selecting the neighbor-counting strategy.
//!
//! All strategies produce identical counts; they differ only in how the
//! work is laid out, which matters for the benchmark and for large grids.

/// Available neighbor-counting strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Eight bulk shifted passes plus explicit wrap passes, serial
    Shifted,
    /// Per-cell 8-offset lookup, serial
    Direct,
    /// Per-cell lookup with rows spread over rayon
    #[default]
    DirectParallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Shifted, Algorithm::Direct, Algorithm::DirectParallel]
    }

    /// Short display name, also accepted by [`Algorithm::from_name`]
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Shifted => "shifted",
            Algorithm::Direct => "direct",
            Algorithm::DirectParallel => "direct-par",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Shifted => "8 shifted passes + wrap fix-up, serial",
            Algorithm::Direct => "per-cell neighbor lookup, serial",
            Algorithm::DirectParallel => "per-cell neighbor lookup, parallel rows",
        }
    }

    /// Case-insensitive lookup by [`Algorithm::name`]
    pub fn from_name(name: &str) -> Option<Algorithm> {
        Self::all()
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Whether the rule pass should also run on the rayon pool
    pub const fn is_parallel(&self) -> bool {
        matches!(self, Algorithm::DirectParallel)
    }

    /// The following entry in [`Algorithm::all`], wrapping around
    pub fn next(&self) -> Algorithm {
        let all = Self::all();
        let idx = all.iter().position(|a| a == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }
}
