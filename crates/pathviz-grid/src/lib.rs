//! **pathviz-grid** is the grid model for the pathviz shortest-path visualizer.
//!
//! A [`Grid`] is a rectangular arena of [`Cell`]s addressed by [`Pos`]. Each
//! cell is Empty, Wall, Start or End; a grid built through this API always
//! carries exactly one Start and one End. Next to the cells the grid keeps a
//! table of per-run [`WorkingState`] (visited flag, distance, predecessor)
//! that a search writes and callers reset between runs.
//!
//! Grids can be built from dimensions ([`Grid::build`], [`GridConfig`]), from
//! text layouts ([`Grid::parse_layout`]), and decorated with random walls
//! ([`WallScatter`]).

mod cell;
mod config;
mod error;
mod grid;
mod layout;
mod pos;
mod scatter;

pub use cell::{Cell, CellKind, Marker, UNREACHABLE, WorkingState};
pub use config::{DEFAULT_COLS, DEFAULT_ROWS, GridConfig};
pub use error::GridError;
pub use grid::{Grid, Topology};
pub use pos::Pos;
pub use scatter::WallScatter;
