use grid_bfs::{Cell, GridPathfinder};

// Drives the engine through the cycle a host runs on every click: clear the
// previous highlight, search, apply the new path. The last click misses the
// grid; the stale highlight is cleared regardless.

fn main() {
    let mut engine = GridPathfinder::new(6, 6, Cell::new(0, 0)).unwrap();
    for target in [
        Cell::new(0, 5),
        Cell::new(5, 5),
        Cell::new(2, 3),
        Cell::new(6, 6),
    ] {
        let update = engine.select_target(target);
        println!("Clicked {}", target);
        println!("  unhighlight: {:?}", update.cleared);
        match update.found {
            Ok(path) => println!("  highlight: {:?}", path),
            Err(err) => println!("  {}", err),
        }
        println!("{}", engine);
    }
}
