use crate::assignment::bottleneck::Bottlenecks;
use crate::assignment::network::AssignmentNetwork;
use crate::assignment::seed::SeedReport;
use crate::error::PlanError;
use num_traits::NumAssign;
use std::fmt::Debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// `assignment[hub]` is the provider serving that hub.
    Feasible { assignment: Vec<usize> },
    Infeasible(Bottlenecks),
}

/// Result of one query. `network` holds the final flow on every edge.
pub struct Plan<Flow> {
    pub outcome: Outcome,
    pub max_flow: Flow,
    pub initial_flow: usize,
    pub seed_report: SeedReport,
    pub num_phases: usize,
    pub network: AssignmentNetwork<Flow>,
}

impl<Flow> Plan<Flow> {
    pub fn is_feasible(&self) -> bool {
        matches!(self.outcome, Outcome::Feasible { .. })
    }

    pub fn assignment(&self) -> Option<&[usize]> {
        match &self.outcome {
            Outcome::Feasible { assignment } => Some(assignment),
            Outcome::Infeasible(_) => None,
        }
    }

    pub fn bottlenecks(&self) -> Option<&Bottlenecks> {
        match &self.outcome {
            Outcome::Feasible { .. } => None,
            Outcome::Infeasible(bottlenecks) => Some(bottlenecks),
        }
    }
}

impl<Flow> AssignmentNetwork<Flow>
where
    Flow: NumAssign + Ord + Copy + Debug + Default,
{
    /// Reads the provider of every hub off the final flow.
    /// Each hub must carry flow on exactly one connection and no provider may exceed its capacity.
    pub fn extract_assignment(&self) -> Result<Vec<usize>, PlanError> {
        let mut assignment = Vec::with_capacity(self.num_hubs());
        let mut load = vec![Flow::zero(); self.num_providers()];

        for hub in self.hubs() {
            let mut used = self.connections(hub).filter(|e| e.flow > Flow::zero());
            let provider = match (used.next(), used.next()) {
                (Some(edge), None) => edge.to,
                (None, _) => return Err(PlanError::Internal(format!("hub {hub} carries no flow"))),
                (Some(_), Some(_)) => return Err(PlanError::Internal(format!("hub {hub} carries flow to several providers"))),
            };
            load[provider - self.num_hubs()] += Flow::one();
            assignment.push(provider);
        }

        for provider in self.providers() {
            let capacity = self.sink_edge(provider).map_or(Flow::zero(), |e| e.upper);
            if load[provider - self.num_hubs()] > capacity {
                return Err(PlanError::Internal(format!("provider {provider} serves more hubs than its capacity")));
            }
        }

        Ok(assignment)
    }
}
