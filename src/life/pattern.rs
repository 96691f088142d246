/// A named seed, as `(x, y)` cells relative to its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
};

/// Horizontal phase; the vertical one follows after a tick.
pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (1, 0), (2, 0)],
};

/// Travels one cell down and right every four generations.
pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
};

pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "R-pentomino",
    cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
};

pub const PATTERNS: &[Pattern] = &[BLOCK, BLINKER, GLIDER, TOAD, BEACON, R_PENTOMINO];

impl Pattern {
    /// Case-insensitive lookup in [`PATTERNS`].
    pub fn by_name(name: &str) -> Option<&'static Pattern> {
        PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Bounding box as `(width, height)`.
    pub fn size(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(w, h), &(x, y)| {
            (w.max(x + 1), h.max(y + 1))
        })
    }
}
