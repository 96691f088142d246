use conway_life::life::pattern::{BEACON, BLINKER, BLOCK, GLIDER, TOAD};
use conway_life::{LifeError, LifeGrid, DEFAULT_DENSITY};

fn alive(grid: &LifeGrid) -> Vec<(usize, usize)> {
    let mut cells = Vec::new();
    for (y, row) in grid.rows().enumerate() {
        for (x, &alive) in row.iter().enumerate() {
            if alive {
                cells.push((x, y));
            }
        }
    }
    cells
}

fn seeded(cells: &[(isize, isize)], width: usize, height: usize) -> LifeGrid {
    let mut grid = LifeGrid::new(width, height).unwrap();
    for &(x, y) in cells {
        grid.set_cell(x, y, true).unwrap();
    }
    grid
}

#[test]
fn identical_seeds_evolve_identically() {
    let cells = [(3, 1), (4, 2), (2, 3), (3, 3), (4, 3), (7, 7), (7, 8), (8, 7)];
    let mut a = seeded(&cells, 12, 10);
    let mut b = seeded(&cells, 12, 10);
    for _ in 0..25 {
        a.tick();
        b.tick();
    }
    assert_eq!(a.cells(), b.cells());
    assert_eq!(a.generation(), 25);

    let mut c = LifeGrid::with_seed(20, 20, 0.3, (11, 12)).unwrap();
    let mut d = LifeGrid::with_seed(20, 20, 0.3, (11, 12)).unwrap();
    for _ in 0..10 {
        c.tick();
        d.tick();
    }
    assert_eq!(c.snapshot(), d.snapshot());
}

#[test]
fn lone_corner_cell_dies() {
    for (w, h) in [(3, 3), (4, 7), (10, 5)] {
        for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
            let mut grid = seeded(&[(x as isize, y as isize)], w, h);
            grid.tick();
            assert_eq!(grid.population(), 0, "{w}x{h} corner ({x}, {y})");
        }
    }
}

#[test]
fn block_is_still() {
    let mut grid = LifeGrid::new(6, 6).unwrap();
    grid.stamp(&BLOCK, (2, 2)).unwrap();
    let start = alive(&grid);
    for _ in 0..10 {
        grid.tick();
        assert_eq!(alive(&grid), start);
    }
}

#[test]
fn block_in_corner_is_still() {
    let mut grid = LifeGrid::new(4, 4).unwrap();
    grid.stamp(&BLOCK, (0, 0)).unwrap();
    grid.tick();
    assert_eq!(alive(&grid), vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
}

#[test]
fn blinker_oscillates() {
    let mut grid = seeded(&[(1, 2), (2, 2), (3, 2)], 5, 5);
    grid.tick();
    assert_eq!(alive(&grid), vec![(2, 1), (2, 2), (2, 3)]);
    grid.tick();
    assert_eq!(alive(&grid), vec![(1, 2), (2, 2), (3, 2)]);
}

#[test]
fn period_two_oscillators_return() {
    for (pattern, origin) in [(&BLINKER, (3, 4)), (&TOAD, (2, 3)), (&BEACON, (2, 2))] {
        let mut grid = LifeGrid::new(9, 9).unwrap();
        grid.stamp(pattern, origin).unwrap();
        let start = grid.snapshot();
        grid.tick();
        assert_ne!(grid.snapshot(), start, "{}", pattern.name);
        grid.tick();
        assert_eq!(grid.snapshot(), start, "{}", pattern.name);
    }
}

#[test]
fn glider_moves_diagonally() {
    let mut grid = LifeGrid::new(10, 10).unwrap();
    grid.stamp(&GLIDER, (1, 1)).unwrap();
    let start = alive(&grid);
    for _ in 0..4 {
        grid.tick();
    }
    let moved: Vec<_> = start.iter().map(|&(x, y)| (x + 1, y + 1)).collect();
    assert_eq!(alive(&grid), moved);
}

#[test]
fn glider_dies_against_the_edge() {
    // No wraparound: a glider hitting the corner becomes a block.
    let mut grid = LifeGrid::new(6, 6).unwrap();
    grid.stamp(&GLIDER, (0, 0)).unwrap();
    for _ in 0..40 {
        grid.tick();
    }
    assert_eq!(alive(&grid), vec![(4, 4), (5, 4), (4, 5), (5, 5)]);
}

#[test]
fn out_of_bounds_access_fails_without_mutation() {
    let mut grid = LifeGrid::with_seed(5, 4, DEFAULT_DENSITY, (1, 1)).unwrap();
    let before = grid.snapshot();

    assert!(matches!(grid.cell(-1, 0), Err(LifeError::OutOfBounds { x: -1, y: 0, .. })));
    assert!(matches!(grid.cell(5, 0), Err(LifeError::OutOfBounds { x: 5, .. })));
    assert!(matches!(
        grid.set_cell(0, 4, true),
        Err(LifeError::OutOfBounds { y: 4, width: 5, height: 4, .. })
    ));
    assert!(grid.set_cell(isize::MIN, isize::MAX, true).is_err());

    assert_eq!(grid.snapshot(), before);
}

#[test]
fn tick_matches_change_list() {
    for seed in 0..24_u64 {
        let mut buffered = LifeGrid::with_seed(17, 13, 0.35, (seed, seed * 31 + 1)).unwrap();
        let mut reference = buffered.clone();

        for _ in 0..5 {
            for change in reference.changes() {
                reference
                    .set_cell(change.x as isize, change.y as isize, change.alive)
                    .unwrap();
            }
            buffered.tick();
            assert_eq!(buffered.cells(), reference.cells(), "seed {seed}");
        }
    }
}

#[test]
fn no_changes_means_stable() {
    let mut grid = LifeGrid::new(6, 6).unwrap();
    grid.stamp(&BLOCK, (1, 1)).unwrap();
    assert!(grid.changes().is_empty());
}

#[test]
fn density_bounds() {
    let mut grid = LifeGrid::new(9, 7).unwrap();
    grid.randomize(0.0).unwrap();
    assert!(grid.cells().iter().all(|&alive| !alive));
    grid.randomize(1.0).unwrap();
    assert!(grid.cells().iter().all(|&alive| alive));
}

#[test]
fn full_grid_keeps_only_corners() {
    let mut grid = LifeGrid::with_seed(4, 4, 1.0, (0, 0)).unwrap();
    grid.tick();
    assert_eq!(alive(&grid), vec![(0, 0), (3, 0), (0, 3), (3, 3)]);
}
