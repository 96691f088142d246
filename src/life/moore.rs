/// A relative step from one cell to another.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub struct Offset {
    pub dx: isize,
    pub dy: isize,
}

impl Offset {
    pub const fn new(dx: isize, dy: isize) -> Self {
        Self { dx, dy }
    }

    /// The eight Moore offsets, row by row from the top-left.
    #[rustfmt::skip]
    pub const fn moore() -> [Offset; 8] {
        [
            Offset::new(-1, -1), Offset::new(0, -1), Offset::new(1, -1),
            Offset::new(-1, 0),                      Offset::new(1, 0),
            Offset::new(-1, 1),  Offset::new(0, 1),  Offset::new(1, 1),
        ]
    }

    /// Apply this offset to `(x, y)`, returning `None` when the result
    /// leaves `[0, width) x [0, height)`.
    pub fn apply(&self, x: usize, y: usize, width: usize, height: usize) -> Option<(usize, usize)> {
        let nx = x.checked_add_signed(self.dx)?;
        let ny = y.checked_add_signed(self.dy)?;
        (nx < width && ny < height).then_some((nx, ny))
    }
}

/// In-bounds Moore neighbours of `(x, y)`. Cells past the edge are skipped,
/// never wrapped.
pub fn neighbours_of(
    x: usize,
    y: usize,
    width: usize,
    height: usize,
) -> impl Iterator<Item = (usize, usize)> {
    Offset::moore()
        .into_iter()
        .filter_map(move |offset| offset.apply(x, y, width, height))
}
