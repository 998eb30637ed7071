use pathviz_grid::Marker;
use std::fmt;

/// Why a grid's endpoints could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointProblem {
    /// No cell holds this marker.
    Missing(Marker),
    /// More than one cell holds this marker.
    Duplicate(Marker),
}

/// Errors returned by [`Engine::run`](crate::Engine::run).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// The grid does not carry exactly one Start and one End cell.
    InvalidEndpoints(EndpointProblem),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEndpoints(EndpointProblem::Missing(m)) => {
                write!(f, "invalid endpoints: no {m} cell in grid")
            }
            Self::InvalidEndpoints(EndpointProblem::Duplicate(m)) => {
                write!(f, "invalid endpoints: more than one {m} cell in grid")
            }
        }
    }
}

impl std::error::Error for EngineError {}
