use pathviz_grid::{CellKind, Pos, Topology, WorkingState};

use crate::engine::{Engine, relax};

impl Engine {
    /// Selection loop that scans every remaining cell for the smallest
    /// `(distance, idx)` on each iteration.
    ///
    /// Walls stay in the candidate set and are dropped when selected. The
    /// loop stops at End, at the first selected cell that is still
    /// unreachable, or when no candidates remain.
    pub(crate) fn search_scan(
        &mut self,
        topo: &Topology,
        work: &mut [WorkingState],
        end: usize,
        visited: &mut Vec<Pos>,
    ) -> bool {
        self.candidates.clear();
        self.candidates.extend(0..topo.len());

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = loop {
            let Some(slot) = self
                .candidates
                .iter()
                .enumerate()
                .min_by_key(|&(_, &i)| (work[i].distance, i))
                .map(|(slot, _)| slot)
            else {
                break false;
            };
            // The key carries the index, so candidate order is irrelevant.
            let ci = self.candidates.swap_remove(slot);

            if topo.kind_at(ci) == CellKind::Wall {
                continue;
            }
            let distance = work[ci].distance;
            if !work[ci].is_reached() {
                break false;
            }

            work[ci].visited = true;
            let p = topo.pos(ci);
            log::trace!("finalize {p} at distance {distance}");
            visited.push(p);

            if ci == end {
                break true;
            }

            relax(topo, work, ci, &mut nbuf);
        };

        self.nbuf = nbuf;
        found
    }
}
