use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::GridBuffer;
use crate::error::{LifeError, LifeResult};

/// Probability that a cell starts alive in the `random` pattern
pub const RANDOM_DENSITY: f64 = 0.3;

/// Identifier of a seed pattern
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternId {
    #[default]
    Random,
    Empty,
    Glider,
    Blinker,
    Pulsar,
    GliderGun,
}

impl PatternId {
    /// All patterns in menu order
    pub const fn all() -> [PatternId; 6] {
        [
            PatternId::Random,
            PatternId::Empty,
            PatternId::Glider,
            PatternId::Blinker,
            PatternId::Pulsar,
            PatternId::GliderGun,
        ]
    }

    /// Stable string id, also accepted by `FromStr`
    pub const fn as_str(self) -> &'static str {
        match self {
            PatternId::Random => "random",
            PatternId::Empty => "empty",
            PatternId::Glider => "glider",
            PatternId::Blinker => "blinker",
            PatternId::Pulsar => "pulsar",
            PatternId::GliderGun => "glider-gun",
        }
    }

    /// Display name for UI
    pub const fn name(self) -> &'static str {
        match self {
            PatternId::Random => "Random",
            PatternId::Empty => "Empty",
            PatternId::Glider => "Glider",
            PatternId::Blinker => "Blinker",
            PatternId::Pulsar => "Pulsar",
            PatternId::GliderGun => "Glider Gun",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            PatternId::Random => "30% of cells alive",
            PatternId::Empty => "Blank grid for drawing",
            PatternId::Glider => "Moves diagonally (period 4)",
            PatternId::Blinker => "Oscillator (period 2)",
            PatternId::Pulsar => "Oscillator (period 3)",
            PatternId::GliderGun => "Produces gliders (period 30)",
        }
    }

    /// Offset table for the named patterns; `None` for `random` and `empty`
    pub const fn pattern(self) -> Option<Pattern> {
        match self {
            PatternId::Random | PatternId::Empty => None,
            PatternId::Glider => Some(presets::GLIDER),
            PatternId::Blinker => Some(presets::BLINKER),
            PatternId::Pulsar => Some(presets::PULSAR),
            PatternId::GliderGun => Some(presets::GLIDER_GUN),
        }
    }
}

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternId {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PatternId::all()
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| LifeError::InvalidPattern(s.to_owned()))
    }
}

/// Where a pattern's (0, 0) offset lands on an N×N grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// (N/2 + shift, N/2 + shift)
    Center { shift: isize },
    /// Fixed (row, col) regardless of N
    Fixed { row: isize, col: isize },
}

impl Anchor {
    pub const fn origin(self, size: usize) -> (isize, isize) {
        match self {
            Anchor::Center { shift } => {
                let mid = (size / 2) as isize;
                (mid + shift, mid + shift)
            }
            Anchor::Fixed { row, col } => (row, col),
        }
    }
}

/// A named pattern as a list of live (row, col) offsets from its anchor
#[derive(Clone, Copy, Debug)]
pub struct Pattern {
    pub anchor: Anchor,
    pub offsets: &'static [(isize, isize)],
}

impl Pattern {
    /// Absolute coordinates of this pattern on an N×N grid, skipping any that
    /// land outside [0, N). Clipped cells are dropped, never wrapped.
    pub fn cells(&self, size: usize) -> impl Iterator<Item = (isize, isize)> + '_ {
        let (origin_row, origin_col) = self.anchor.origin(size);
        let n = size as isize;
        self.offsets
            .iter()
            .map(move |&(dr, dc)| (origin_row + dr, origin_col + dc))
            .filter(move |&(row, col)| (0..n).contains(&row) && (0..n).contains(&col))
    }

    /// Stamp live cells onto the grid
    pub fn place_on(&self, grid: &mut GridBuffer) {
        let size = grid.size();
        for (row, col) in self.cells(size) {
            grid.set(row, col, true);
        }
    }
}

/// Build a fresh grid for `id`. Deterministic for every pattern except
/// `random`, which draws one Bernoulli(0.3) sample per cell from `rng`.
pub fn seed<R: Rng + ?Sized>(id: PatternId, size: usize, rng: &mut R) -> GridBuffer {
    let mut grid = GridBuffer::new(size);
    match id {
        PatternId::Empty => {}
        PatternId::Random => {
            let n = grid.size() as isize;
            for row in 0..n {
                for col in 0..n {
                    grid.set(row, col, rng.random_bool(RANDOM_DENSITY));
                }
            }
        }
        named => {
            if let Some(pattern) = named.pattern() {
                pattern.place_on(&mut grid);
            }
        }
    }
    grid
}

/// [`seed`] by string id; unknown ids are reported, never defaulted
pub fn seed_named<R: Rng + ?Sized>(id: &str, size: usize, rng: &mut R) -> LifeResult<GridBuffer> {
    let id = id.parse::<PatternId>()?;
    Ok(seed(id, size, rng))
}

/// Offset tables, (row, col) relative to each pattern's anchor
pub mod presets {
    use super::*;

    /// Three collinear cells through the midpoint
    pub const BLINKER: Pattern = Pattern {
        anchor: Anchor::Center { shift: 0 },
        offsets: &[(-1, 0), (0, 0), (1, 0)],
    };

    /// Canonical 5-cell glider heading toward (+1, +1)
    pub const GLIDER: Pattern = Pattern {
        anchor: Anchor::Center { shift: 0 },
        offsets: &[(0, 0), (1, 0), (2, 0), (2, -1), (1, -2)],
    };

    /// 48-cell period-3 pulsar, anchored 6 cells up-left of the midpoint
    pub const PULSAR: Pattern = Pattern {
        anchor: Anchor::Center { shift: -6 },
        offsets: &[
            // Top
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            // Upper middle
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            // Center
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            // Lower middle
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            // Bottom
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    };

    /// 36-cell Gosper Glider Gun at (5, 5). Grids with fewer than 41 rows clip
    /// its far end.
    pub const GLIDER_GUN: Pattern = Pattern {
        anchor: Anchor::Fixed { row: 5, col: 5 },
        offsets: &[
            // Left square
            (0, 4), (0, 5),
            (1, 4), (1, 5),

            // Left circle
            (10, 4), (10, 5), (10, 6),
            (11, 3), (11, 7),
            (12, 2), (12, 8),
            (13, 2), (13, 8),
            (14, 5),
            (15, 3), (15, 7),
            (16, 4), (16, 5), (16, 6),
            (17, 5),

            // Middle pieces
            (20, 2), (20, 3), (20, 4),
            (21, 2), (21, 3), (21, 4),
            (22, 1), (22, 5),
            (24, 0), (24, 1), (24, 5), (24, 6),

            // Right square
            (34, 2), (34, 3),
            (35, 2), (35, 3),
        ],
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::SmallRng};

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(7)
    }

    #[test]
    fn test_ids_round_trip_through_strings() {
        for id in PatternId::all() {
            assert_eq!(id.as_str().parse::<PatternId>().unwrap(), id);
        }
    }

    #[test]
    fn test_unknown_pattern_is_an_error() {
        let err = seed_named("spaceship", 30, &mut rng()).unwrap_err();
        assert!(matches!(err, LifeError::InvalidPattern(ref id) if id == "spaceship"));
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(presets::BLINKER.offsets.len(), 3);
        assert_eq!(presets::GLIDER.offsets.len(), 5);
        assert_eq!(presets::PULSAR.offsets.len(), 48);
        assert_eq!(presets::GLIDER_GUN.offsets.len(), 36);
    }

    #[test]
    fn test_empty_has_no_live_cells() {
        assert_eq!(seed(PatternId::Empty, 30, &mut rng()).live_count(), 0);
    }

    #[test]
    fn test_blinker_centered() {
        let grid = seed(PatternId::Blinker, 30, &mut rng());
        let live: Vec<_> = grid.live_cells().collect();
        assert_eq!(live, vec![(14, 15), (15, 15), (16, 15)]);
    }

    #[test]
    fn test_glider_cells() {
        let grid = seed(PatternId::Glider, 30, &mut rng());
        let live: Vec<_> = grid.live_cells().collect();
        assert_eq!(live, vec![(15, 15), (16, 13), (16, 15), (17, 14), (17, 15)]);
    }

    #[test]
    fn test_pulsar_fits_default_grid() {
        let grid = seed(PatternId::Pulsar, 30, &mut rng());
        assert_eq!(grid.live_count(), 48);
        assert!(grid.get(9, 11));
        assert!(grid.get(21, 19));
    }

    #[test]
    fn test_glider_gun_clips_instead_of_wrapping() {
        let grid = seed(PatternId::GliderGun, 30, &mut rng());
        // Rows 5 + 34 and 5 + 35 fall off the bottom
        assert_eq!(grid.live_count(), 32);
        assert!(grid.get(5, 9));
        assert!(grid.get(29, 5));
        // Wrapping would have landed the right square on rows 9 and 10
        assert!(!grid.get(9, 7));
        assert!(!grid.get(10, 7));
    }

    #[test]
    fn test_pattern_clipped_on_tiny_grid() {
        let grid = seed(PatternId::Pulsar, 4, &mut rng());
        // Origin is (-4, -4); only offsets reaching [0, 4) survive
        for (row, col) in grid.live_cells() {
            assert!(row < 4 && col < 4);
        }
        assert_eq!(grid.live_count(), presets::PULSAR.cells(4).count());
    }

    #[test]
    fn test_random_is_reproducible_and_near_density() {
        let a = seed(PatternId::Random, 100, &mut SmallRng::seed_from_u64(42));
        let b = seed(PatternId::Random, 100, &mut SmallRng::seed_from_u64(42));
        assert_eq!(a, b);
        let live = a.live_count();
        assert!((2_500..3_500).contains(&live), "{live} live cells");
    }

    #[test]
    fn test_named_patterns_are_deterministic() {
        for id in [PatternId::Glider, PatternId::Pulsar, PatternId::GliderGun] {
            let a = seed(id, 30, &mut SmallRng::seed_from_u64(1));
            let b = seed(id, 30, &mut SmallRng::seed_from_u64(2));
            assert_eq!(a, b, "{id}");
        }
    }

    #[test]
    fn test_serde_uses_kebab_ids() {
        let json = serde_json::to_string(&PatternId::GliderGun).unwrap();
        assert_eq!(json, "\"glider-gun\"");
    }
}
