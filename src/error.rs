//! Error types for the `conway-life` crate.
//!
//! All fallible grid operations return [`LifeError`] through the
//! [`Result`](crate::life::Result) alias; the driver wraps it in [`RunError`].

/// Errors that can occur while building or addressing a [`LifeGrid`](crate::LifeGrid).
#[derive(Debug, thiserror::Error)]
pub enum LifeError {
    /// A cell coordinate fell outside `[0, width) x [0, height)`.
    #[error("cell ({x}, {y}) is out of bounds for a {width}x{height} grid")]
    OutOfBounds {
        /// Requested column.
        x: isize,
        /// Requested row.
        y: isize,
        /// Grid width.
        width: usize,
        /// Grid height.
        height: usize,
    },

    /// A grid was requested with a zero dimension.
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// A population density outside `[0, 1]`.
    #[error("density must be within [0, 1], got {0}")]
    InvalidDensity(f32),

    /// No pattern with this name is known.
    #[error("unknown pattern {0:?}")]
    UnknownPattern(String),

    /// The OS random source could not produce a seed.
    #[error("failed to seed the random generator")]
    Seed(#[from] getrandom::Error),
}

/// Errors surfaced by [`run`](crate::run).
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// The grid could not be built or seeded.
    #[error("failed to set up the simulation")]
    Life(#[from] LifeError),

    /// A frame could not be written out.
    #[error("failed to render a frame")]
    Io(#[from] std::io::Error),
}
