use crate::assignment::instance::Instance;
use crate::error::PlanError;
use crate::maximum_flow::graph::{Edge, Graph};
use log::debug;
use num_traits::NumAssign;
use std::collections::HashSet;
use std::fmt::Debug;
use std::ops::Range;

pub struct AssignmentNetwork<Flow> {
    pub(crate) graph: Graph<Flow>,
    source: usize,
    sink: usize,
    num_hubs: usize,
    num_providers: usize,
    pub(crate) source_edges: Vec<usize>,
    // (provider, edge id) for every hub in insertion order
    pub(crate) connection_edges: Vec<Vec<(usize, usize)>>,
    // indexed by provider - num_hubs
    pub(crate) sink_edges: Vec<usize>,
}

impl<Flow> AssignmentNetwork<Flow>
where
    Flow: NumAssign + Ord + Copy + Debug + Default,
{
    pub fn build(instance: &Instance<Flow>) -> Result<Self, PlanError> {
        instance.validate()?;

        let (num_hubs, num_providers) = (instance.num_hubs, instance.num_providers);
        let mut graph = Graph::default();
        graph.add_nodes(num_hubs + num_providers);
        let source = graph.add_node();
        let sink = graph.add_node();

        let mut add_edge = |from: usize, to: usize, upper: Flow| graph.add_directed_edge(from, to, upper).ok_or_else(|| PlanError::Internal(format!("cannot add edge {from} -> {to}")));

        let mut source_edges = Vec::with_capacity(num_hubs);
        for hub in instance.hubs() {
            source_edges.push(add_edge(source, hub, Flow::one())?);
        }

        let mut connection_edges = vec![Vec::new(); num_hubs];
        for (&hub, providers) in instance.connections.iter() {
            let mut seen = HashSet::new();
            for &provider in providers.iter().filter(|&&p| seen.insert(p)) {
                connection_edges[hub].push((provider, add_edge(hub, provider, Flow::one())?));
            }
        }

        // zero capacity providers keep an edge so every provider has one
        let mut sink_edges = Vec::with_capacity(num_providers);
        for provider in instance.providers() {
            sink_edges.push(add_edge(provider, sink, instance.capacity(provider))?);
        }

        debug!("assignment network: {} hubs, {} providers, {} edges", num_hubs, num_providers, graph.num_edges());
        Ok(Self { graph, source, sink, num_hubs, num_providers, source_edges, connection_edges, sink_edges })
    }

    #[inline]
    pub fn source(&self) -> usize {
        self.source
    }

    #[inline]
    pub fn sink(&self) -> usize {
        self.sink
    }

    #[inline]
    pub fn num_hubs(&self) -> usize {
        self.num_hubs
    }

    #[inline]
    pub fn num_providers(&self) -> usize {
        self.num_providers
    }

    #[inline]
    pub fn hubs(&self) -> Range<usize> {
        0..self.num_hubs
    }

    #[inline]
    pub fn providers(&self) -> Range<usize> {
        self.num_hubs..self.num_hubs + self.num_providers
    }

    pub fn graph(&self) -> &Graph<Flow> {
        &self.graph
    }

    pub fn source_edge(&self, hub: usize) -> Option<&Edge<Flow>> {
        self.source_edges.get(hub).map(|&e| &self.graph.edges[e])
    }

    pub fn connection_edge(&self, hub: usize, provider: usize) -> Option<&Edge<Flow>> {
        let edges = self.connection_edges.get(hub)?;
        edges.iter().find(|&&(p, _)| p == provider).map(|&(_, e)| &self.graph.edges[e])
    }

    pub fn connections(&self, hub: usize) -> impl Iterator<Item = &Edge<Flow>> + '_ {
        self.connection_edges.get(hub).into_iter().flatten().map(|&(_, e)| &self.graph.edges[e])
    }

    pub fn sink_edge(&self, provider: usize) -> Option<&Edge<Flow>> {
        let index = provider.checked_sub(self.num_hubs)?;
        self.sink_edges.get(index).map(|&e| &self.graph.edges[e])
    }

    pub fn total_flow(&self) -> Flow {
        self.graph.maximum_flow(self.source)
    }

    // hubs whose source edge carries flow
    pub fn routed_hubs(&self) -> usize {
        self.source_edges.iter().filter(|&&e| self.graph.edges[e].flow > Flow::zero()).count()
    }
}
