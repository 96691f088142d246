//! Conway's Game of Life on a fixed, non-wrapping grid.
//!
//! [`LifeGrid`] is the engine. [`run`] is a small terminal driver that seeds
//! a grid from a [`Config`], ticks it and writes ASCII frames.

pub mod error;
pub mod life;

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use log::info;

pub use crate::error::{LifeError, RunError};
pub use crate::life::pattern::{Pattern, PATTERNS};
pub use crate::life::{CellChange, LifeGrid, DEFAULT_DENSITY};

/// How [`run`] builds and drives a grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    /// Ignored when `pattern` is set.
    pub density: f32,
    /// Number of ticks; `generations + 1` frames are rendered.
    pub generations: u64,
    /// Fixed PRNG seed; an OS-random one is drawn when `None`.
    pub seed: Option<(u64, u64)>,
    /// Start from this named pattern, centred, instead of random noise.
    pub pattern: Option<String>,
    pub frame_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 64,
            height: 32,
            density: DEFAULT_DENSITY,
            generations: 100,
            seed: None,
            pattern: None,
            frame_delay: Duration::from_millis(100),
        }
    }
}

impl Config {
    /// Build the initial grid described by this config.
    pub fn build(&self) -> Result<LifeGrid, LifeError> {
        match (&self.pattern, self.seed) {
            (Some(name), _) => {
                let pattern = Pattern::by_name(name)
                    .ok_or_else(|| LifeError::UnknownPattern(name.clone()))?;
                let mut grid = LifeGrid::new(self.width, self.height)?;
                let (pw, ph) = pattern.size();
                let origin = (
                    (self.width.saturating_sub(pw) / 2) as isize,
                    (self.height.saturating_sub(ph) / 2) as isize,
                );
                grid.stamp(pattern, origin)?;
                Ok(grid)
            }
            (None, Some(seed)) => LifeGrid::with_seed(self.width, self.height, self.density, seed),
            (None, None) => LifeGrid::new_random(self.width, self.height, self.density),
        }
    }

    /// Check that [`build`](Self::build) would succeed, discarding the grid.
    pub fn validate(&self) -> Result<(), LifeError> {
        self.build().map(drop)
    }
}

/// Write one frame: a header line followed by the grid.
pub fn render<W: Write>(grid: &LifeGrid, out: &mut W) -> io::Result<()> {
    writeln!(out, "generation {} ({} alive)", grid.generation(), grid.population())?;
    write!(out, "{grid}")?;
    writeln!(out)?;
    out.flush()
}

/// Seed a grid from `config`, tick it `config.generations` times and render
/// every generation to `out`. Returns the final grid.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<LifeGrid, RunError> {
    let mut grid = config.build()?;
    info!(
        "starting {}x{} grid with {} alive",
        grid.width(),
        grid.height(),
        grid.population()
    );

    for _ in 0..config.generations {
        render(&grid, out)?;
        grid.tick();
        if !config.frame_delay.is_zero() {
            thread::sleep(config.frame_delay);
        }
    }
    render(&grid, out)?;

    info!(
        "stopped at generation {} with {} alive",
        grid.generation(),
        grid.population()
    );
    Ok(grid)
}
