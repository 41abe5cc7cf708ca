use grid_bfs::{Cell, GridPathfinder, PathError};

/// The 6x6 reference grid with the start in the top-left corner, the layout
/// hosts build from a 36-widget row-major grid.
fn reference_engine() -> GridPathfinder {
    GridPathfinder::new(6, 6, Cell::new(0, 0)).unwrap()
}

fn cells(coords: &[(i32, i32)]) -> Vec<Cell> {
    coords
        .iter()
        .map(|&(row, col)| Cell::new(row, col))
        .collect()
}

#[test]
fn straight_line_along_the_top_row() {
    let engine = reference_engine();
    let path = engine.find_path(Cell::new(0, 5)).unwrap();
    assert_eq!(path, cells(&[(0, 1), (0, 2), (0, 3), (0, 4), (0, 5)]));
}

#[test]
fn far_corner_takes_the_tie_broken_route() {
    // Exploring +col before +row pushes the route along row 0 first, then
    // down column 5.
    let engine = reference_engine();
    let path = engine.find_path(Cell::new(5, 5)).unwrap();
    assert_eq!(path.len(), 10);
    assert_eq!(
        path,
        cells(&[
            (0, 1),
            (0, 2),
            (0, 3),
            (0, 4),
            (0, 5),
            (1, 5),
            (2, 5),
            (3, 5),
            (4, 5),
            (5, 5)
        ])
    );
}

#[test]
fn clicking_the_start_cell_highlights_nothing() {
    let mut engine = reference_engine();
    let update = engine.select_target(Cell::new(0, 0));
    assert_eq!(update.found, Ok(vec![]));
    assert!(update.cleared.is_empty());
    assert!(engine.current_path().is_empty());
}

#[test]
fn second_click_clears_the_first_highlight() {
    let mut engine = reference_engine();
    let first = engine.select_target(Cell::new(2, 3));
    let highlighted = first.found.unwrap();
    assert_eq!(highlighted, cells(&[(0, 1), (0, 2), (0, 3), (1, 3), (2, 3)]));

    let second = engine.select_target(Cell::new(5, 0));
    assert_eq!(second.cleared, highlighted);
    assert_eq!(
        second.found.unwrap(),
        cells(&[(1, 0), (2, 0), (3, 0), (4, 0), (5, 0)])
    );
}

#[test]
fn failed_search_still_clears_the_old_path() {
    let mut engine = reference_engine();
    let first = engine.select_target(Cell::new(0, 5));
    let highlighted = first.found.unwrap();
    assert!(!highlighted.is_empty());

    let off_grid = Cell::new(0, 6);
    let second = engine.select_target(off_grid);
    assert_eq!(second.cleared, highlighted);
    assert_eq!(second.found, Err(PathError::OutOfBounds(off_grid)));
    assert!(engine.current_path().is_empty());
}
