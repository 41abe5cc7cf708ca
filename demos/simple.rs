use grid_bfs::{Cell, GridPathfinder};

// In this example a path is found on an open 6x6 grid with shape
//  ______
// |S     |
// |      |
// |      |
// |      |
// |      |
// |     E|
//  ______
// where
// - S marks the start
// - E marks the clicked target
//
// Cells have a 4-neighborhood

fn main() {
    let mut engine = GridPathfinder::new(6, 6, Cell::new(0, 0)).unwrap();
    let target = Cell::new(5, 5);
    let path = engine.find_path(target).unwrap();
    println!("Path:");
    for cell in &path {
        println!("{}", cell);
    }
    engine.apply_path(path);
    println!("{}", engine);
}
