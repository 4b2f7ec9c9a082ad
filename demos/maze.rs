//! Square-grid pathfinding demo: random walls, then a route around them.
//!
//! Run: cargo run --bin maze

use rand::RngExt;
use tilegraph_core::{BlockedValue, Topology};
use tilegraph_demos::render_square;
use tilegraph_grids::SquareGraph;

const WIDTH: i32 = 28;
const HEIGHT: i32 = 12;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = rand::rng();
    let mut grid = SquareGraph::with_options(WIDTH, HEIGHT, false, false)?;
    grid.initialize()?;

    let source = grid.vertex_at((0, 0)).ok_or("grid not initialized")?;
    let destination = grid
        .vertex_at((HEIGHT - 1, WIDTH - 1))
        .ok_or("grid not initialized")?;

    // Wall off roughly a quarter of the cells.
    for _ in 0..(WIDTH * HEIGHT / 4) {
        let v = grid
            .vertex_at((rng.random_range(0..HEIGHT), rng.random_range(0..WIDTH)))
            .ok_or("grid not initialized")?;
        if v == source || v == destination {
            continue;
        }
        grid.set_value(v, BlockedValue)?;
    }

    match grid.shortest_path(source, destination)? {
        Some(path) => {
            print!("{}", render_square(&grid, &path));
            println!(
                "{} -> {} in {} steps",
                grid.coordinates(source)?,
                grid.coordinates(destination)?,
                path.len() - 1
            );
        }
        None => {
            print!("{}", render_square(&grid, &[]));
            println!("walled in; run again for a new layout");
        }
    }
    Ok(())
}
