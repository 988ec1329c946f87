use crate::maximum_flow::graph::Graph;
use std::collections::VecDeque;
use std::ops::Sub;

use num_traits::NumAssign;

#[derive(Default, PartialEq, Debug)]
pub struct InsideEdge<Flow> {
    pub to: usize,
    pub flow: Flow,
    pub upper: Flow,
    pub rev: usize,
}

impl<Flow> InsideEdge<Flow>
where
    Flow: Sub<Output = Flow> + Copy,
{
    pub fn residual_capacity(&self) -> Flow {
        self.upper - self.flow
    }
}

// residual network: every graph edge becomes a forward/backward pair of inside edges
#[derive(Default)]
pub struct CSR<Flow> {
    pub num_nodes: usize,
    pub edge_index_to_inside_edge_index: Vec<usize>,

    pub start: Vec<usize>,
    pub inside_edge_list: Vec<InsideEdge<Flow>>,
    pub prev: Vec<(usize, usize)>, // (node, inside edge) used to reach u in the last bfs
    pub visited: Vec<bool>,
    que: VecDeque<usize>,
}

impl<Flow> CSR<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    // flow already recorded on the graph is kept, so solvers continue from it
    pub fn build(&mut self, graph: &Graph<Flow>) {
        self.num_nodes = graph.num_nodes();

        // initialize
        self.edge_index_to_inside_edge_index.clear();
        self.edge_index_to_inside_edge_index.resize(graph.num_edges(), usize::MAX);
        self.start.clear();
        self.start.resize(self.num_nodes + 1, 0);
        self.inside_edge_list = (0..2 * graph.num_edges()).map(|_| InsideEdge { to: 0, flow: Flow::zero(), upper: Flow::zero(), rev: 0 }).collect();
        self.prev.clear();
        self.prev.resize(self.num_nodes, (usize::MAX, usize::MAX));
        self.visited.clear();
        self.visited.resize(self.num_nodes, false);

        let mut degree = vec![0; self.num_nodes];
        for edge in graph.edges.iter() {
            degree[edge.to] += 1;
            degree[edge.from] += 1;
        }

        for i in 1..=self.num_nodes {
            self.start[i] = self.start[i - 1] + degree[i - 1];
        }

        let mut counter = vec![0; self.num_nodes];
        for (edge_index, e) in graph.edges.iter().enumerate() {
            let (u, v) = (e.from, e.to);
            let inside_edge_index_u = self.start[u] + counter[u];
            counter[u] += 1;
            let inside_edge_index_v = self.start[v] + counter[v];
            counter[v] += 1;
            self.edge_index_to_inside_edge_index[edge_index] = inside_edge_index_u;

            self.inside_edge_list[inside_edge_index_u] = InsideEdge { to: v, flow: e.flow, upper: e.upper, rev: inside_edge_index_v };
            self.inside_edge_list[inside_edge_index_v] = InsideEdge { to: u, flow: e.upper - e.flow, upper: e.upper, rev: inside_edge_index_u };
        }
    }

    pub fn set_flow(&self, graph: &mut Graph<Flow>) {
        for edge_id in 0..graph.num_edges() {
            let i = self.edge_index_to_inside_edge_index[edge_id];
            graph.edges[edge_id].flow = self.inside_edge_list[i].flow;
        }
    }

    #[inline]
    pub fn push_flow(&mut self, inside_edge_index: usize, flow: Flow) {
        let rev = self.inside_edge_list[inside_edge_index].rev;

        // pushing on a backward edge cancels flow of its forward edge
        self.inside_edge_list[inside_edge_index].flow += flow;
        self.inside_edge_list[rev].flow -= flow;
    }

    // O(n + m)
    // breadth-first search over edges with positive residual capacity.
    // with a target, stops as soon as the target is discovered and prev holds a shortest path to it.
    // without one, visited ends up as the set of nodes reachable from source.
    pub fn bfs(&mut self, source: usize, target: Option<usize>) -> bool {
        self.prev.fill((usize::MAX, usize::MAX));
        self.visited.fill(false);
        self.que.clear();

        self.visited[source] = true;
        self.que.push_back(source);
        if target == Some(source) {
            return true;
        }

        while let Some(u) = self.que.pop_front() {
            for edge_id in self.start[u]..self.start[u + 1] {
                let edge = &self.inside_edge_list[edge_id];
                if self.visited[edge.to] || edge.residual_capacity() == Flow::zero() {
                    continue;
                }

                self.visited[edge.to] = true;
                self.prev[edge.to] = (u, edge_id);
                if target == Some(edge.to) {
                    return true;
                }
                self.que.push_back(edge.to);
            }
        }

        false
    }
}
