//! Shared pieces of the `pathviz` terminal demo: command-line arguments,
//! logger setup, and text rendering of a finished run.
//!
//! The demo is a collaborator of the engine, not part of it: it prepares a
//! grid, calls the engine once, and prints both result sequences at once
//! instead of animating them.

use std::collections::HashSet;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use pathviz_engine::{EngineConfig, RunResult, Selection};
use pathviz_grid::{CellKind, Grid, GridConfig, GridError, WallScatter};
use rand::SeedableRng;
use rand::rngs::StdRng;

// ---------------------------------------------------------------------------
// Arguments
// ---------------------------------------------------------------------------

/// Run the shortest-path engine once and print the visited cells and path.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "pathviz", version, about, long_about = None)]
pub struct Args {
    /// Layout file (`.` empty, `#` wall, `S` start, `E` end). A random grid
    /// is used when omitted.
    pub layout: Option<PathBuf>,

    /// Seed for wall scattering
    #[arg(long, env = "PATHVIZ_SEED", default_value_t = 1)]
    pub seed: u64,

    /// Wall probability per Empty cell, between 0 and 1
    #[arg(
        long,
        env = "PATHVIZ_DENSITY",
        value_name = "P",
        default_value_t = WallScatter::default().density,
        value_parser = parse_density
    )]
    pub density: f64,

    /// How the next cell to finalize is chosen
    #[arg(long, env = "PATHVIZ_SELECTION", value_enum, default_value_t = SelectionArg::Scan)]
    pub selection: SelectionArg,
}

/// Command-line names for [`Selection`].
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionArg {
    Scan,
    Heap,
}

impl From<SelectionArg> for Selection {
    fn from(s: SelectionArg) -> Self {
        match s {
            SelectionArg::Scan => Selection::LinearScan,
            SelectionArg::Heap => Selection::Heap,
        }
    }
}

fn parse_density(s: &str) -> Result<f64, String> {
    let p: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(format!("{p} is not in 0..=1"))
    }
}

impl Args {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            selection: self.selection.into(),
        }
    }

    pub fn scatter(&self) -> WallScatter {
        WallScatter::new(self.density)
    }

    /// Read the layout file if one was given, otherwise build a random grid.
    pub fn load_grid(&self) -> Result<Grid, Box<dyn std::error::Error>> {
        match &self.layout {
            Some(path) => {
                log::info!("loading layout from {}", path.display());
                Ok(Grid::parse_layout(&std::fs::read_to_string(path)?)?)
            }
            None => Ok(self.random_grid()?),
        }
    }

    /// Build the default grid and scatter walls over it.
    pub fn random_grid(&self) -> Result<Grid, GridError> {
        let mut grid = GridConfig::default().build()?;
        let mut rng = StdRng::seed_from_u64(self.seed);
        let placed = self.scatter().scatter(&mut grid, &mut rng);
        log::info!(
            "{}x{} grid, {placed} walls (seed {})",
            grid.rows(),
            grid.cols(),
            self.seed
        );
        Ok(grid)
    }
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Install `env_logger`, filtered by `PATHVIZ_LOG` (default `info`).
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("PATHVIZ_LOG", "info")).init();
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Overlay character for a path cell.
pub const PATH: char = 'o';
/// Overlay character for a finalized cell off the path.
pub const VISITED: char = '+';

/// Draw the grid with the run overlaid. Markers and walls keep their layout
/// characters; path cells win over visited cells.
pub fn render(grid: &Grid, result: &RunResult) -> String {
    let path: HashSet<_> = result.path.iter().copied().collect();
    let visited: HashSet<_> = result.visited.iter().copied().collect();
    let mut out = String::with_capacity(grid.len() + grid.rows());
    for c in grid.cells() {
        if c.pos.col == 0 && c.pos.row > 0 {
            out.push('\n');
        }
        let ch = match c.kind {
            CellKind::Wall | CellKind::Start | CellKind::End => c.kind.rune(),
            CellKind::Empty if path.contains(&c.pos) => PATH,
            CellKind::Empty if visited.contains(&c.pos) => VISITED,
            CellKind::Empty => c.kind.rune(),
        };
        out.push(ch);
    }
    out
}

/// One-line outcome of a run.
pub fn summary(result: &RunResult) -> String {
    match result.steps() {
        Some(n) if n > 0 => format!(
            "Path found! Length: {n} steps ({} cells visited)",
            result.visited.len()
        ),
        _ => format!("No path found! ({} cells visited)", result.visited.len()),
    }
}
