use std::collections::BinaryHeap;

use pathviz_grid::{CellKind, Grid, Marker, Pos, Topology, WorkingState};

use crate::config::{EngineConfig, Selection};
use crate::error::{EndpointProblem, EngineError};
use crate::heap::NodeRef;
use crate::result::RunResult;

/// Shortest-path engine for unweighted, 4-connected grids.
///
/// `Engine` owns its scratch buffers (candidate list, heap, neighbour buffer)
/// so that repeated runs do not reallocate after the first one.
#[derive(Debug, Default)]
pub struct Engine {
    pub(crate) config: EngineConfig,
    pub(crate) candidates: Vec<usize>,
    pub(crate) open: BinaryHeap<NodeRef>,
    pub(crate) nbuf: Vec<usize>,
}

impl Engine {
    /// Create an engine with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            candidates: Vec::new(),
            open: BinaryHeap::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    #[inline]
    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Compute the visitation order and the shortest path from Start to End.
    ///
    /// Start and End are located by scanning the grid for their kinds; `start`
    /// and `end` are only checked against what the scan finds. The caller must
    /// have called [`Grid::reset_working_state`] beforehand. Only the grid's
    /// working state is written.
    ///
    /// An unreachable End is not an error: the result has an empty `path`.
    pub fn run(&mut self, grid: &mut Grid, start: Pos, end: Pos) -> Result<RunResult, EngineError> {
        let (topo, work) = grid.split_mut();
        let s = locate(topo, Marker::Start)?;
        let e = locate(topo, Marker::End)?;
        for (m, given, found) in [(Marker::Start, start, s), (Marker::End, end, e)] {
            if topo.idx(given) != Some(found) {
                log::warn!("{m} given at {given} but found at {}", topo.pos(found));
            }
        }
        if work.iter().any(|st| st.visited) {
            log::warn!("working state was not reset before run");
        }

        work[s].distance = 0;
        let mut visited = Vec::new();
        let found = match self.config.selection {
            Selection::LinearScan => self.search_scan(topo, work, e, &mut visited),
            Selection::Heap => self.search_heap(topo, work, s, e, &mut visited),
        };
        let path = if found {
            reconstruct(topo, work, s, e)
        } else {
            Vec::new()
        };

        log::debug!(
            "{:?} run on {}x{}: {} finalized, path {}",
            self.config.selection,
            topo.rows(),
            topo.cols(),
            visited.len(),
            match path.len() {
                0 => "not found".to_string(),
                n => format!("{} steps", n - 1),
            }
        );
        Ok(RunResult { visited, path })
    }

    /// Like [`run`](Self::run), using the grid's cached marker positions.
    pub fn run_grid(&mut self, grid: &mut Grid) -> Result<RunResult, EngineError> {
        let start = grid
            .start()
            .ok_or(EngineError::InvalidEndpoints(EndpointProblem::Missing(Marker::Start)))?;
        let end = grid
            .end()
            .ok_or(EngineError::InvalidEndpoints(EndpointProblem::Missing(Marker::End)))?;
        self.run(grid, start, end)
    }
}

/// Run a search with a default [`Engine`].
pub fn run(grid: &mut Grid, start: Pos, end: Pos) -> Result<RunResult, EngineError> {
    Engine::default().run(grid, start, end)
}

/// Find the unique cell holding `marker`.
fn locate(topo: &Topology, marker: Marker) -> Result<usize, EngineError> {
    let mut it = topo.indices_of(CellKind::from(marker));
    let first = it
        .next()
        .ok_or(EngineError::InvalidEndpoints(EndpointProblem::Missing(marker)))?;
    if it.next().is_some() {
        return Err(EngineError::InvalidEndpoints(EndpointProblem::Duplicate(marker)));
    }
    Ok(first)
}

/// Relax every not-yet-visited neighbour of the finalized cell `ci`.
///
/// Distance and predecessor are overwritten unconditionally. On a uniform
/// grid this never loses a shorter distance: cells are finalized in
/// nondecreasing distance order and two adjacent cells never share a
/// distance. Relaxed indices are left in `nbuf`.
pub(crate) fn relax(topo: &Topology, work: &mut [WorkingState], ci: usize, nbuf: &mut Vec<usize>) {
    let d = work[ci].distance.saturating_add(1);
    nbuf.clear();
    topo.neighbors(ci, nbuf);
    nbuf.retain(|&ni| !work[ni].visited);
    for &ni in nbuf.iter() {
        work[ni].distance = d;
        work[ni].predecessor = Some(ci);
    }
}

/// Walk predecessors from `end` back to `start` and return the path in
/// travel order.
fn reconstruct(topo: &Topology, work: &[WorkingState], start: usize, end: usize) -> Vec<Pos> {
    let mut path = Vec::new();
    let mut ci = end;
    loop {
        path.push(topo.pos(ci));
        if ci == start {
            break;
        }
        match work[ci].predecessor {
            Some(pi) if path.len() <= topo.len() => ci = pi,
            _ => {
                log::warn!("predecessor chain from {} is broken", topo.pos(end));
                return Vec::new();
            }
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_grid::{UNREACHABLE, WallScatter};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::{HashMap, HashSet, VecDeque};

    fn layout(s: &str) -> Grid {
        Grid::parse_layout(s).unwrap()
    }

    fn run_fresh(engine: &mut Engine, grid: &mut Grid) -> RunResult {
        grid.reset_working_state();
        engine.run_grid(grid).unwrap()
    }

    fn p(row: usize, col: usize) -> Pos {
        Pos::new(row, col)
    }

    // -----------------------------------------------------------------------
    // Reference breadth-first search over non-Wall cells
    // -----------------------------------------------------------------------

    fn bfs_distances(grid: &Grid) -> HashMap<Pos, usize> {
        let mut dist = HashMap::new();
        let Some(start) = grid.find(CellKind::Start) else {
            return dist;
        };
        dist.insert(start, 0);
        let mut queue = VecDeque::from([start]);
        while let Some(cur) = queue.pop_front() {
            let d = dist[&cur];
            let mut next = Vec::new();
            if cur.row > 0 {
                next.push(p(cur.row - 1, cur.col));
            }
            if cur.col > 0 {
                next.push(p(cur.row, cur.col - 1));
            }
            next.push(p(cur.row + 1, cur.col));
            next.push(p(cur.row, cur.col + 1));
            for n in next {
                match grid.kind(n) {
                    None | Some(CellKind::Wall) => continue,
                    Some(_) => {}
                }
                if !dist.contains_key(&n) {
                    dist.insert(n, d + 1);
                    queue.push_back(n);
                }
            }
        }
        dist
    }

    /// Check every invariant a run must satisfy against the reference BFS.
    fn check_run(grid: &Grid, r: &RunResult) {
        let truth = bfs_distances(grid);
        let start = grid.find(CellKind::Start).unwrap();
        let end = grid.find(CellKind::End).unwrap();

        assert_eq!(r.visited.first(), Some(&start));
        let unique: HashSet<_> = r.visited.iter().collect();
        assert_eq!(unique.len(), r.visited.len(), "cell finalized twice");

        let mut last = 0;
        for &v in &r.visited {
            assert_ne!(grid.kind(v), Some(CellKind::Wall));
            let st = grid.state(v).unwrap();
            assert!(st.visited);
            assert!(st.distance >= last, "distance decreased at {v}");
            assert_eq!(Some(st.distance as usize), truth.get(&v).copied());
            last = st.distance;
        }

        match truth.get(&end) {
            Some(&best) => {
                assert_eq!(r.path.first(), Some(&start));
                assert_eq!(r.path.last(), Some(&end));
                assert_eq!(r.visited.last(), Some(&end));
                assert_eq!(r.steps(), Some(best));
                for w in r.path.windows(2) {
                    assert!(w[0].is_adjacent(w[1]), "{} -> {} not adjacent", w[0], w[1]);
                }
                for &c in &r.path {
                    assert_ne!(grid.kind(c), Some(CellKind::Wall));
                }
            }
            None => {
                assert!(r.path.is_empty());
                let reached: HashSet<_> = truth.keys().copied().collect();
                let seen: HashSet<_> = r.visited.iter().copied().collect();
                assert_eq!(seen, reached);
            }
        }
    }

    fn random_grid(rng: &mut StdRng) -> Grid {
        let rows = rng.random_range(1..=10);
        let cols = rng.random_range(2..=10);
        let start = p(rng.random_range(0..rows), rng.random_range(0..cols));
        let end = loop {
            let q = p(rng.random_range(0..rows), rng.random_range(0..cols));
            if q != start {
                break q;
            }
        };
        let mut g = Grid::build(rows, cols, start, end).unwrap();
        WallScatter::new(0.3).scatter(&mut g, rng);
        g
    }

    // -----------------------------------------------------------------------
    // Scenarios
    // -----------------------------------------------------------------------

    #[test]
    fn open_3x3() {
        let mut g = Grid::build(3, 3, p(0, 0), p(2, 2)).unwrap();
        let r = run(&mut g, p(0, 0), p(2, 2)).unwrap();
        assert_eq!(r.path, vec![p(0, 0), p(1, 0), p(2, 0), p(2, 1), p(2, 2)]);
        assert_eq!(
            r.visited,
            vec![
                p(0, 0),
                p(0, 1),
                p(1, 0),
                p(0, 2),
                p(1, 1),
                p(2, 0),
                p(1, 2),
                p(2, 1),
                p(2, 2),
            ]
        );
        check_run(&g, &r);
    }

    #[test]
    fn predecessor_is_last_relaxer() {
        let mut g = Grid::build(3, 3, p(0, 0), p(2, 2)).unwrap();
        run(&mut g, p(0, 0), p(2, 2)).unwrap();
        // (1, 1) is relaxed by (0, 1) and then by (1, 0).
        assert_eq!(g.predecessor(p(1, 1)), Some(p(1, 0)));
        assert_eq!(g.predecessor(p(2, 2)), Some(p(2, 1)));
        assert_eq!(g.predecessor(p(0, 0)), None);
        assert_eq!(g.state(p(0, 0)).unwrap().distance, 0);
    }

    #[test]
    fn walled_row_blocks_end() {
        let mut g = layout("S..\n###\n..E");
        let r = Engine::default().run_grid(&mut g).unwrap();
        assert!(!r.found());
        assert_eq!(r.steps(), None);
        assert_eq!(r.visited, vec![p(0, 0), p(0, 1), p(0, 2)]);
        check_run(&g, &r);
    }

    #[test]
    fn walls_are_relaxed_but_never_finalized() {
        let mut g = layout("S..\n###\n..E");
        Engine::default().run_grid(&mut g).unwrap();
        let wall = g.state(p(1, 0)).unwrap();
        assert!(!wall.visited);
        assert_eq!(wall.distance, 1);
        assert_eq!(g.state(p(2, 0)).unwrap().distance, UNREACHABLE);
    }

    #[test]
    fn enclosed_end() {
        let mut g = layout(
            "\
S....
.....
.....
....#
...#E",
        );
        let r = Engine::default().run_grid(&mut g).unwrap();
        assert!(r.path.is_empty());
        assert_eq!(r.visited.len(), 22);
        check_run(&g, &r);
    }

    #[test]
    fn enclosed_start() {
        let mut g = layout("S#.\n#..\n..E");
        let r = Engine::default().run_grid(&mut g).unwrap();
        assert_eq!(r.visited, vec![p(0, 0)]);
        assert!(r.path.is_empty());
    }

    #[test]
    fn adjacent_markers() {
        let mut g = layout("SE");
        let r = Engine::default().run_grid(&mut g).unwrap();
        assert_eq!(r.visited, vec![p(0, 0), p(0, 1)]);
        assert_eq!(r.path, vec![p(0, 0), p(0, 1)]);
        assert_eq!(r.steps(), Some(1));
    }

    #[test]
    fn maze_detour() {
        let mut g = layout(
            "\
S.#....
.##.##.
....#E.
.##...#",
        );
        let r = Engine::default().run_grid(&mut g).unwrap();
        assert_eq!(r.steps(), Some(9));
        check_run(&g, &r);
    }

    #[test]
    fn default_config_grid() {
        let mut g = pathviz_grid::GridConfig::default().build().unwrap();
        let r = Engine::default().run_grid(&mut g).unwrap();
        assert_eq!(r.steps(), Some(25));
        check_run(&g, &r);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let mut g = layout("S..#\n.#..\n...E");
        let mut engine = Engine::default();
        let a = run_fresh(&mut engine, &mut g);
        let state = g.working_state().to_vec();
        let b = run_fresh(&mut engine, &mut g);
        assert_eq!(a, b);
        assert_eq!(g.working_state(), &state[..]);
    }

    #[test]
    fn engine_reuse_across_grid_sizes() {
        let mut engine = Engine::new(EngineConfig {
            selection: Selection::Heap,
        });
        assert_eq!(engine.config().selection, Selection::Heap);
        let mut big = Grid::build(12, 15, p(0, 0), p(11, 14)).unwrap();
        let mut small = layout("S.\n.E");
        assert_eq!(run_fresh(&mut engine, &mut big).steps(), Some(25));
        assert_eq!(run_fresh(&mut engine, &mut small).steps(), Some(2));
        assert_eq!(run_fresh(&mut engine, &mut big).steps(), Some(25));
    }

    #[test]
    fn edits_between_runs() {
        let mut g = Grid::build(3, 3, p(0, 0), p(2, 2)).unwrap();
        let mut engine = Engine::default();
        assert_eq!(run_fresh(&mut engine, &mut g).steps(), Some(4));
        g.toggle_wall(p(1, 0));
        g.toggle_wall(p(1, 1));
        assert_eq!(
            run_fresh(&mut engine, &mut g).path,
            vec![p(0, 0), p(0, 1), p(0, 2), p(1, 2), p(2, 2)]
        );
        g.move_marker(Marker::End, p(0, 2));
        assert_eq!(run_fresh(&mut engine, &mut g).steps(), Some(2));
        g.toggle_wall(p(1, 2));
        assert!(run_fresh(&mut engine, &mut g).found());
        g.move_marker(Marker::Start, p(2, 0));
        assert!(!run_fresh(&mut engine, &mut g).found());
    }

    // -----------------------------------------------------------------------
    // Endpoints
    // -----------------------------------------------------------------------

    #[test]
    fn missing_start() {
        let mut g = Grid::from_kinds(1, 3, vec![CellKind::Empty, CellKind::Empty, CellKind::End])
            .unwrap();
        let err = run(&mut g, p(0, 0), p(0, 2)).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidEndpoints(EndpointProblem::Missing(Marker::Start))
        );
        assert_eq!(Engine::default().run_grid(&mut g).unwrap_err(), err);
    }

    #[test]
    fn duplicate_end() {
        let mut g = Grid::from_kinds(1, 3, vec![CellKind::Start, CellKind::End, CellKind::End])
            .unwrap();
        let err = Engine::default().run_grid(&mut g).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidEndpoints(EndpointProblem::Duplicate(Marker::End))
        );
        assert!(err.to_string().contains("more than one end"));
    }

    #[test]
    fn given_endpoints_are_rederived() {
        let mut g = Grid::build(3, 3, p(0, 0), p(2, 2)).unwrap();
        let trusted = run(&mut g, p(0, 0), p(2, 2)).unwrap();
        g.reset_working_state();
        let stale = run(&mut g, p(1, 1), p(7, 7)).unwrap();
        assert_eq!(stale, trusted);
    }

    // -----------------------------------------------------------------------
    // Random fixtures
    // -----------------------------------------------------------------------

    #[test]
    fn random_grids_satisfy_invariants() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut engine = Engine::default();
        for _ in 0..200 {
            let mut g = random_grid(&mut rng);
            let r = run_fresh(&mut engine, &mut g);
            check_run(&g, &r);
        }
    }

    #[test]
    fn scan_and_heap_agree() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut scan = Engine::new(EngineConfig {
            selection: Selection::LinearScan,
        });
        let mut heap = Engine::new(EngineConfig {
            selection: Selection::Heap,
        });
        for _ in 0..200 {
            let mut a = random_grid(&mut rng);
            let mut b = a.clone();
            let ra = run_fresh(&mut scan, &mut a);
            let rb = run_fresh(&mut heap, &mut b);
            assert_eq!(ra, rb, "grid:\n{a}");
            assert_eq!(a.working_state(), b.working_state(), "grid:\n{a}");
        }
    }
}
