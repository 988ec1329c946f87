use crate::maximum_flow::csr::CSR;
use crate::maximum_flow::graph::Graph;
use crate::maximum_flow::status::Status;
use log::{debug, trace};
use num_traits::NumAssign;
use std::fmt::Debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shortest augmenting path maximum flow.
///
/// Flow already recorded on the graph is taken as the starting point, so `solve` only
/// pushes what can be added on top of it. Every phase augments along a path with the
/// fewest edges, which bounds the number of phases by O(nm).
#[derive(Default)]
pub struct EdmondsKarp<Flow> {
    csr: CSR<Flow>,
    augmented_flow: Option<Flow>,
    num_phases: usize,
    cancel: Option<Arc<AtomicBool>>,
}

impl<Flow> EdmondsKarp<Flow>
where
    Flow: NumAssign + Ord + Copy + Debug,
{
    pub fn with_cancel_flag(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn solve(&mut self, source: usize, sink: usize, graph: &mut Graph<Flow>) -> Status {
        if source >= graph.num_nodes() || sink >= graph.num_nodes() || source == sink {
            return Status::BadInput;
        }

        self.csr.build(graph);
        self.num_phases = 0;
        let mut flow = Flow::zero();

        let status = loop {
            if self.cancel.as_ref().is_some_and(|c| c.load(Ordering::Relaxed)) {
                break Status::Interrupted;
            }

            if !self.csr.bfs(source, Some(sink)) {
                break Status::Optimal;
            }

            // calculate delta
            let mut delta = self.csr.inside_edge_list[self.csr.prev[sink].1].residual_capacity();
            let mut v = sink;
            while v != source {
                let (u, edge_id) = self.csr.prev[v];
                delta = delta.min(self.csr.inside_edge_list[edge_id].residual_capacity());
                v = u;
            }

            // update flow
            let mut v = sink;
            while v != source {
                let (u, edge_id) = self.csr.prev[v];
                self.csr.push_flow(edge_id, delta);
                v = u;
            }

            flow += delta;
            self.num_phases += 1;
            trace!("phase {}: pushed {:?}", self.num_phases, delta);
        };

        debug!("edmonds-karp: {:?} after {} phases, added flow {:?}", status, self.num_phases, flow);
        self.augmented_flow = Some(flow);
        self.csr.set_flow(graph);
        status
    }

    // flow pushed by the last call to solve, on top of the starting flow
    pub fn augmented_flow(&self) -> Option<Flow> {
        self.augmented_flow
    }

    pub fn num_phases(&self) -> usize {
        self.num_phases
    }

    /// Nodes reachable from `source` in the residual network left by the last `solve`.
    /// At optimality this is the source side of a minimum cut.
    pub fn minimum_cut(&mut self, source: usize) -> Vec<bool> {
        if source >= self.csr.num_nodes {
            return vec![false; self.csr.num_nodes];
        }
        self.csr.bfs(source, None);
        self.csr.visited.clone()
    }
}
