use crate::assignment::extract::{Outcome, Plan};
use crate::assignment::instance::Instance;
use crate::assignment::network::AssignmentNetwork;
use crate::assignment::seed::SeedPolicy;
use crate::error::PlanError;
use crate::maximum_flow::edmonds_karp::EdmondsKarp;
use crate::maximum_flow::status::Status;
use log::info;
use num_traits::NumAssign;
use std::fmt::Debug;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct PlanOptions {
    pub seed_policy: SeedPolicy,
    pub cancel: Option<Arc<AtomicBool>>,
}

impl PlanOptions {
    pub fn seed_policy(mut self, seed_policy: SeedPolicy) -> Self {
        self.seed_policy = seed_policy;
        self
    }

    // checked once per augmenting phase
    pub fn cancel_flag(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }
}

/// Runs build, seed, augment and extract for one instance.
/// Holds no state between queries; every call owns its network and solver.
#[derive(Debug, Clone, Default)]
pub struct Planner {
    options: PlanOptions,
}

impl Planner {
    pub fn new(options: PlanOptions) -> Self {
        Self { options }
    }

    pub fn solve<Flow>(&self, instance: &Instance<Flow>) -> Result<Plan<Flow>, PlanError>
    where
        Flow: NumAssign + Ord + Copy + Debug + Default,
    {
        let mut network = AssignmentNetwork::build(instance)?;
        let seed_report = network.seed(&instance.preliminary, self.options.seed_policy)?;

        let mut solver = EdmondsKarp::default();
        if let Some(cancel) = &self.options.cancel {
            solver = solver.with_cancel_flag(Arc::clone(cancel));
        }

        let (source, sink) = (network.source(), network.sink());
        match solver.solve(source, sink, &mut network.graph) {
            Status::Optimal => {}
            Status::Interrupted => return Err(PlanError::Interrupted),
            status => return Err(PlanError::Internal(format!("solver finished with {status:?}"))),
        }

        let max_flow = network.total_flow();
        let routed = network.routed_hubs();
        let outcome = if routed == network.num_hubs() {
            Outcome::Feasible { assignment: network.extract_assignment()? }
        } else {
            let reachable = solver.minimum_cut(source);
            Outcome::Infeasible(network.bottlenecks(&reachable))
        };

        info!("{} of {} hubs routed (max flow {:?}, {} seeded), feasible: {}", routed, network.num_hubs(), max_flow, seed_report.initial_flow, matches!(outcome, Outcome::Feasible { .. }));

        Ok(Plan { outcome, max_flow, initial_flow: seed_report.initial_flow, seed_report, num_phases: solver.num_phases(), network })
    }

    pub fn is_feasible<Flow>(&self, instance: &Instance<Flow>) -> Result<bool, PlanError>
    where
        Flow: NumAssign + Ord + Copy + Debug + Default,
    {
        Ok(self.solve(instance)?.is_feasible())
    }
}
