use crate::assignment::network::AssignmentNetwork;
use crate::error::PlanError;
use log::{debug, warn};
use num_traits::NumAssign;
use std::fmt::Debug;

/// What to do with a preliminary pair that has no free unit on one of its legs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedPolicy {
    /// Skip the whole pair and report it; the solver may still route the hub elsewhere.
    #[default]
    Skip,
    /// Fail the query with `PlanError::SeedRejected`.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded,
    HubAlreadyRouted,
    ProviderFull,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub outcomes: Vec<((usize, usize), SeedOutcome)>,
    pub initial_flow: usize,
}

impl SeedReport {
    pub fn skipped(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.outcomes.iter().filter(|(_, outcome)| *outcome != SeedOutcome::Seeded).map(|&(pair, _)| pair)
    }
}

impl<Flow> AssignmentNetwork<Flow>
where
    Flow: NumAssign + Ord + Copy + Debug + Default,
{
    /// Puts one unit of flow on `source -> hub -> provider -> sink` for every pair, in order.
    /// A pair is seeded only if all three legs have a free unit, so conservation always holds.
    pub fn seed(&mut self, preliminary: &[(usize, usize)], policy: SeedPolicy) -> Result<SeedReport, PlanError> {
        let mut report = SeedReport::default();

        for &(hub, provider) in preliminary.iter() {
            let source_edge = *self.source_edges.get(hub).ok_or(PlanError::HubOutOfRange { hub, num_hubs: self.num_hubs() })?;
            let connection_edge = self.connection_edges[hub].iter().find(|&&(p, _)| p == provider).map(|&(_, e)| e).ok_or(PlanError::NotEligible { hub, provider })?;
            let sink_edge = self.sink_edges[provider - self.num_hubs()];

            // a hub with a free source edge has no flow on its connections
            let outcome = if self.graph.edges[source_edge].residual_capacity() < Flow::one() {
                SeedOutcome::HubAlreadyRouted
            } else if self.graph.edges[sink_edge].residual_capacity() < Flow::one() {
                SeedOutcome::ProviderFull
            } else {
                for edge_id in [source_edge, connection_edge, sink_edge] {
                    if !self.graph.add_flow(edge_id, Flow::one()) {
                        return Err(PlanError::Internal(format!("seeding edge {edge_id} exceeded its capacity")));
                    }
                }
                report.initial_flow += 1;
                SeedOutcome::Seeded
            };

            if outcome != SeedOutcome::Seeded {
                if policy == SeedPolicy::Strict {
                    return Err(PlanError::SeedRejected { hub, provider });
                }
                warn!("preliminary pair {} -> {} skipped: {:?}", hub, provider, outcome);
            }
            report.outcomes.push(((hub, provider), outcome));
        }

        debug!("seeded {} of {} preliminary pairs", report.initial_flow, preliminary.len());
        Ok(report)
    }
}
