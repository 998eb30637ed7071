//! Run the engine once and print the result.
//!
//! Run: cargo run --bin pathviz -- [LAYOUT_FILE] [--seed N] [--density P] [--selection scan|heap]
//!
//! Without a layout file the default 20x35 grid is used with walls scattered
//! from the seed and density. Log level comes from `PATHVIZ_LOG`.

use clap::Parser;
use pathviz_demos::{Args, init_logger, render, summary};
use pathviz_engine::Engine;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();
    let args = Args::parse();

    let mut grid = args.load_grid()?;
    grid.reset_working_state();

    let mut engine = Engine::new(args.engine_config());
    log::debug!("selection: {:?}", engine.config().selection);
    let result = engine.run_grid(&mut grid)?;

    println!("{}", render(&grid, &result));
    println!("{}", summary(&result));
    Ok(())
}
