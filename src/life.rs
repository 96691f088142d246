pub mod moore;
pub mod pattern;

use std::fmt;

use log::{debug, log_enabled, trace, Level};

use crate::error::LifeError;
use crate::life::moore::neighbours_of;
use crate::life::pattern::Pattern;

pub type Result<T> = std::result::Result<T, LifeError>;

/// Fraction of cells alive after a random seeding unless told otherwise.
pub const DEFAULT_DENSITY: f32 = 0.5;

/// Generate a pseudorandom seed for the grid's PRNG.
pub fn generate_seed() -> Result<(u64, u64)> {
    use byteorder::{ByteOrder, NativeEndian};

    let mut seed = [0_u8; 16];
    getrandom::getrandom(&mut seed)?;

    Ok((
        NativeEndian::read_u64(&seed[0..8]),
        NativeEndian::read_u64(&seed[8..16]),
    ))
}

/// B3/S23: survive on two or three neighbours, birth on exactly three.
pub const fn next_state(alive: bool, neighbours: u8) -> bool {
    matches!((alive, neighbours), (true, 2) | (true, 3) | (false, 3))
}

/// A cell whose state differs in the next generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellChange {
    pub x: usize,
    pub y: usize,
    pub alive: bool,
}

/// A fixed-size Game of Life grid.
///
/// Two row-major buffers are kept: `cells` is the current generation and
/// `scratch_cells` receives the next one during [`tick`](Self::tick), after
/// which they trade places. Everything outside the grid counts as dead.
#[derive(Debug, Clone)]
pub struct LifeGrid {
    width: usize,
    height: usize,
    generation: u64,
    cells: Vec<bool>,
    scratch_cells: Vec<bool>,
}

impl LifeGrid {
    /// An all-dead grid.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let size = width
            .checked_mul(height)
            .filter(|&size| size > 0 && isize::try_from(size).is_ok())
            .ok_or(LifeError::InvalidDimensions { width, height })?;

        debug!("allocating {width}x{height} grid");

        Ok(Self {
            width,
            height,
            generation: 0,
            cells: vec![false; size],
            scratch_cells: vec![false; size],
        })
    }

    /// A grid populated from an OS-random seed.
    pub fn new_random(width: usize, height: usize, density: f32) -> Result<Self> {
        let mut result = Self::new(width, height)?;
        result.randomize(density)?;
        Ok(result)
    }

    /// A grid populated from a caller-chosen seed, for reproducible runs.
    pub fn with_seed(width: usize, height: usize, density: f32, seed: (u64, u64)) -> Result<Self> {
        let mut result = Self::new(width, height)?;
        result.randomize_with_seed(density, seed)?;
        Ok(result)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Ticks since the grid was last seeded or cleared.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Repopulate every cell, alive with probability `density`.
    pub fn randomize(&mut self, density: f32) -> Result<()> {
        // Reject before drawing OS randomness.
        check_density(density)?;
        self.randomize_with_seed(density, generate_seed()?)
    }

    pub fn randomize_with_seed(&mut self, density: f32, seed: (u64, u64)) -> Result<()> {
        check_density(density)?;

        let mut rng: randomize::PCG32 = seed.into();
        for cell in self.cells.iter_mut() {
            *cell = randomize::f32_half_open_right(rng.next_u32()) < density;
        }
        self.scratch_cells.fill(false);
        self.generation = 0;

        debug!(
            "randomized {}x{} grid at density {density}: {} alive",
            self.width,
            self.height,
            self.population()
        );
        Ok(())
    }

    /// Kill every cell and reset the generation counter.
    pub fn clear(&mut self) {
        self.cells.fill(false);
        self.generation = 0;
    }

    pub fn cell(&self, x: isize, y: isize) -> Result<bool> {
        Ok(self.cells[self.index(x, y)?])
    }

    /// Overwrite one cell of the current generation.
    pub fn set_cell(&mut self, x: isize, y: isize, alive: bool) -> Result<()> {
        let idx = self.index(x, y)?;
        self.cells[idx] = alive;
        Ok(())
    }

    /// Flip one cell, returning its new state.
    pub fn toggle(&mut self, x: isize, y: isize) -> Result<bool> {
        let idx = self.index(x, y)?;
        self.cells[idx] = !self.cells[idx];
        Ok(self.cells[idx])
    }

    /// Alive Moore neighbours of a cell in the current generation.
    pub fn neighbours(&self, x: isize, y: isize) -> Result<u8> {
        let idx = self.index(x, y)?;
        Ok(self.count_neighbours(idx % self.width, idx / self.width))
    }

    /// Set every cell of `pattern` alive with its top-left corner at `origin`.
    ///
    /// Nothing is written unless the whole pattern fits.
    pub fn stamp(&mut self, pattern: &Pattern, origin: (isize, isize)) -> Result<()> {
        let indices = pattern
            .cells
            .iter()
            .map(|&(px, py)| self.index(shift(origin.0, px), shift(origin.1, py)))
            .collect::<Result<Vec<_>>>()?;

        for idx in indices {
            self.cells[idx] = true;
        }
        debug!("stamped {} at {:?}", pattern.name, origin);
        Ok(())
    }

    /// Draw a straight line of cells between two points, clipped to the grid.
    ///
    /// Returns `false` when the line misses the grid entirely.
    pub fn set_line(&mut self, from: (isize, isize), to: (isize, isize), alive: bool) -> bool {
        // `new` guarantees both dimensions fit in an isize.
        let clip = ((0, 0), (self.width as isize - 1, self.height as isize - 1));
        let width = self.width;
        let cells = &mut self.cells;

        clipline::clipline((from, to), clip, |x, y| {
            cells[y as usize * width + x as usize] = alive;
        })
        .is_some()
    }

    /// Advance exactly one generation.
    pub fn tick(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = y * self.width + x;
                let neighbours = self.count_neighbours(x, y);

                // Write into scratch_cells, since we're still reading from `self.cells`
                self.scratch_cells[idx] = next_state(self.cells[idx], neighbours);
            }
        }
        std::mem::swap(&mut self.scratch_cells, &mut self.cells);
        self.generation += 1;

        if log_enabled!(Level::Trace) {
            trace!("generation {}: {} alive", self.generation, self.population());
        }
    }

    /// Every cell that would change on the next [`tick`](Self::tick), in
    /// row-major order. Nothing is mutated.
    pub fn changes(&self) -> Vec<CellChange> {
        let mut changes = Vec::new();

        for y in 0..self.height {
            for x in 0..self.width {
                let alive = self.cells[y * self.width + x];
                let next = next_state(alive, self.count_neighbours(x, y));
                if next != alive {
                    changes.push(CellChange { x, y, alive: next });
                }
            }
        }
        changes
    }

    /// The current generation, row-major.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// An owned copy of the current generation, one `Vec` per row.
    pub fn snapshot(&self) -> Vec<Vec<bool>> {
        self.rows().map(<[bool]>::to_vec).collect()
    }

    fn index(&self, x: isize, y: isize) -> Result<usize> {
        match (usize::try_from(x), usize::try_from(y)) {
            (Ok(col), Ok(row)) if col < self.width && row < self.height => {
                Ok(row * self.width + col)
            }
            _ => Err(LifeError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            }),
        }
    }

    fn count_neighbours(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;
        for (nx, ny) in neighbours_of(x, y, self.width, self.height) {
            count += u8::from(self.cells[ny * self.width + nx]);
        }
        count
    }
}

impl fmt::Display for LifeGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn check_density(density: f32) -> Result<()> {
    if (0.0..=1.0).contains(&density) {
        Ok(())
    } else {
        Err(LifeError::InvalidDensity(density))
    }
}

fn shift(origin: isize, by: usize) -> isize {
    isize::try_from(by)
        .ok()
        .and_then(|by| origin.checked_add(by))
        .unwrap_or(isize::MAX)
}
