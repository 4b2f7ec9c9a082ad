//! Hex-grid demo: per-direction neighbors, then a route across the map.
//!
//! Run: cargo run --bin hexmap

use rand::RngExt;
use tilegraph_core::{BlockedValue, Coord, Topology};
use tilegraph_demos::render_hex;
use tilegraph_grids::HexGraph;

const WIDTH: i32 = 16;
const HEIGHT: i32 = 9;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = rand::rng();
    let mut grid = HexGraph::new(WIDTH, HEIGHT)?;
    grid.initialize()?;

    let anchor = Coord::new(HEIGHT / 2, WIDTH / 2);
    println!("neighbors of {anchor} on a {} layout:", grid.orientation());
    for &direction in grid.directions() {
        println!(
            "  {:<9} {}",
            direction.label(),
            grid.neighbor_coordinates(anchor, direction)?
        );
    }
    println!();

    let source = grid.vertex_at((0, 0)).ok_or("grid not initialized")?;
    let destination = grid
        .vertex_at((HEIGHT - 1, WIDTH - 1))
        .ok_or("grid not initialized")?;

    // A light scatter of impassable cells.
    for _ in 0..(WIDTH * HEIGHT / 5) {
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
            print!("{}", render_hex(&grid, &path));
            println!("crossed in {} steps", path.len() - 1);
        }
        None => {
            print!("{}", render_hex(&grid, &[]));
            println!("no route through this scatter; run again");
        }
    }
    Ok(())
}
