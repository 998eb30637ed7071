use std::collections::BinaryHeap;

use pathviz_grid::{CellKind, Pos, Topology, WorkingState};

use crate::engine::{Engine, relax};

/// Heap entry: a cell index and the distance it had when pushed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) distance: u32,
    pub(crate) idx: usize,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest
        // (distance, idx) first.
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Engine {
    /// Selection loop backed by a binary heap.
    ///
    /// An entry is stale once its cell is visited or its distance has been
    /// overwritten since the push; stale entries are skipped on pop. Walls are
    /// relaxed like any other cell but never pushed, since they are never
    /// finalized.
    pub(crate) fn search_heap(
        &mut self,
        topo: &Topology,
        work: &mut [WorkingState],
        start: usize,
        end: usize,
        visited: &mut Vec<Pos>,
    ) -> bool {
        let open: &mut BinaryHeap<NodeRef> = &mut self.open;
        open.clear();
        open.push(NodeRef {
            distance: work[start].distance,
            idx: start,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = loop {
            let Some(NodeRef { distance, idx: ci }) = open.pop() else {
                break false;
            };
            let st = work[ci];
            if st.visited || st.distance != distance {
                continue;
            }

            work[ci].visited = true;
            let p = topo.pos(ci);
            log::trace!("finalize {p} at distance {distance}");
            visited.push(p);

            if ci == end {
                break true;
            }

            relax(topo, work, ci, &mut nbuf);
            for &ni in nbuf.iter() {
                if topo.kind_at(ni) != CellKind::Wall {
                    open.push(NodeRef {
                        distance: work[ni].distance,
                        idx: ni,
                    });
                }
            }
        };

        self.nbuf = nbuf;
        found
    }
}
