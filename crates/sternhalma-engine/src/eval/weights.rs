//! The tunable parameter vector consumed by the evaluator.

use sternhalma_core::Cell;

/// Default per-cell progress, in 98ths, written from the owner's point of
/// view: a1 is deep in our home, h8 is the far corner of the target.
#[rustfmt::skip]
const DEFAULT_PROGRESS: [u8; Cell::COUNT] = [
     0,  1,  4,  9, 16, 25, 36, 49,
     1,  2,  5, 10, 17, 26, 37, 50,
     4,  5,  8, 13, 20, 29, 40, 53,
     9, 10, 13, 18, 25, 34, 45, 58,
    16, 17, 20, 25, 32, 41, 52, 65,
    25, 26, 29, 34, 41, 50, 62, 74,
    36, 37, 40, 45, 52, 62, 72, 85,
    49, 50, 53, 58, 65, 74, 85, 98,
];

const fn default_table() -> [f64; Cell::COUNT] {
    let mut table = [0.0; Cell::COUNT];
    let mut i = 0;
    while i < Cell::COUNT {
        table[i] = DEFAULT_PROGRESS[i] as f64 / 98.0;
        i += 1;
    }
    table
}

/// Evaluation weights.
///
/// `advance` and `opponent` are indexed by [`Color::relative`] cells, so one
/// table serves both colors. The tunable entries (both tables and
/// `cohesion`) live in `[0, 1]`; `own_factor` is a fixed multiplier that
/// tuning leaves alone.
///
/// [`Color::relative`]: sternhalma_core::Color::relative
#[derive(Debug, Clone, PartialEq)]
pub struct Weights {
    /// Value of one of our pieces on a cell.
    pub advance: [f64; Cell::COUNT],
    /// Value of one of the opponent's pieces on a cell, seen from the opponent.
    pub opponent: [f64; Cell::COUNT],
    /// Multiplier on our own progress.
    pub own_factor: f64,
    /// Bonus per pair of adjacent own pieces.
    pub cohesion: f64,
}

impl Weights {
    /// Number of tunable entries.
    pub const GENES: usize = 2 * Cell::COUNT + 1;

    /// Build weights with every tunable entry produced by `f`, clamped to
    /// `[0, 1]`.
    pub fn from_fn(mut f: impl FnMut() -> f64) -> Weights {
        let mut weights = Weights::default();
        for gene in weights.genes_mut() {
            *gene = f().clamp(0.0, 1.0);
        }
        weights
    }

    /// Iterate over the tunable entries.
    pub fn genes(&self) -> impl Iterator<Item = f64> + '_ {
        self.advance
            .iter()
            .chain(self.opponent.iter())
            .chain(std::iter::once(&self.cohesion))
            .copied()
    }

    /// Iterate mutably over the tunable entries.
    pub fn genes_mut(&mut self) -> impl Iterator<Item = &mut f64> + '_ {
        self.advance
            .iter_mut()
            .chain(self.opponent.iter_mut())
            .chain(std::iter::once(&mut self.cohesion))
    }
}

impl Default for Weights {
    fn default() -> Self {
        Weights {
            advance: default_table(),
            opponent: default_table(),
            own_factor: 6.0,
            cohesion: 0.0,
        }
    }
}
