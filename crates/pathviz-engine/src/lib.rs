//! Deterministic shortest paths on pathviz grids.
//!
//! The engine runs Dijkstra's algorithm with unit edge weights over a
//! 4-connected [`Grid`](pathviz_grid::Grid) and reports two sequences:
//!
//! - the **visitation order**: every non-Wall cell in the order it was
//!   finalized, with nondecreasing distance;
//! - the **shortest path**: Start to End inclusive, empty if End is
//!   unreachable.
//!
//! Ties between cells at equal distance are broken by row-major index, so a
//! given grid always yields the same sequences. [`Selection`] picks between a
//! plain linear scan for the next cell and a binary heap; both produce the
//! same output.
//!
//! ```
//! use pathviz_engine::Engine;
//! use pathviz_grid::{Grid, Pos};
//!
//! let mut grid: Grid = "S..\n.#.\n..E".parse().unwrap();
//! grid.reset_working_state();
//! let result = Engine::default().run_grid(&mut grid).unwrap();
//! assert_eq!(result.steps(), Some(4));
//! assert_eq!(result.path.first(), Some(&Pos::new(0, 0)));
//! ```

mod config;
mod engine;
mod error;
mod heap;
mod result;
mod scan;

pub use config::{EngineConfig, Selection};
pub use engine::{Engine, run};
pub use error::{EndpointProblem, EngineError};
pub use result::RunResult;
