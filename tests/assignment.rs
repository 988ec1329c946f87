mod common;

use common::{init_logger, listing};
use hub_assignment::assignment::{AssignmentNetwork, SeedOutcome};
use hub_assignment::{Instance, Outcome, PlanError, PlanOptions, Planner, SeedPolicy};
use rstest::{fixture, rstest};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[fixture]
fn planner() -> Planner {
    init_logger();
    Planner::default()
}

#[rstest]
fn preliminary_assignment_is_extended_through_the_free_provider(planner: Planner) {
    let instance = listing([0, 1, 0, 2, 2], &[(0, 8), (1, 8), (2, 9), (3, 9)]);
    let plan = planner.solve(&instance).unwrap();

    assert_eq!(plan.initial_flow, 4);
    assert_eq!(plan.max_flow, 5);
    assert_eq!(plan.num_phases, 1);
    assert_eq!(plan.assignment(), Some(&[8, 8, 9, 9, 6][..]));
}

#[rstest]
fn empty_preliminary_assignment(planner: Planner) {
    let instance = listing([0, 1, 0, 2, 2], &[]);
    let plan = planner.solve(&instance).unwrap();

    assert_eq!(plan.initial_flow, 0);
    assert_eq!(plan.max_flow, 5);
    assert_eq!(plan.outcome, Outcome::Feasible { assignment: vec![8, 8, 9, 9, 6] });
}

#[rstest]
fn saturated_provider_is_reported_as_bottleneck(planner: Planner) {
    let instance = listing([0, 0, 0, 2, 2], &[(0, 8), (1, 8), (2, 9), (3, 9)]);
    let plan = planner.solve(&instance).unwrap();

    assert!(!plan.is_feasible());
    assert_eq!(plan.max_flow, 4);
    let bottlenecks = plan.bottlenecks().unwrap();
    assert_eq!(bottlenecks.indicators(), vec![0, 0, 0, 0, 0, 0, 0, 0, 1, 0]);
    assert_eq!(bottlenecks.providers(), vec![8]);
    assert_eq!(bottlenecks.unassigned_hubs, vec![4]);
}

#[rstest]
#[case(Instance::new(0, 0))]
#[case(Instance::new(0, 3).with_capacities(vec![1, 2, 3]))]
fn no_hubs_is_trivially_feasible(planner: Planner, #[case] instance: Instance<i64>) {
    let plan = planner.solve(&instance).unwrap();
    assert_eq!(plan.outcome, Outcome::Feasible { assignment: vec![] });
    assert_eq!(plan.max_flow, 0);
}

#[rstest]
fn zero_capacity_provider_is_never_used_or_flagged(planner: Planner) {
    // hub 0 can only reach provider 2, which has no capacity; provider 3 is full but off the cut
    let instance = Instance::new(2, 2).connect(0, [2]).connect(1, [2, 3]).with_capacities(vec![0, 0, 0, 1]);
    let plan = planner.solve(&instance).unwrap();

    let bottlenecks = plan.bottlenecks().unwrap();
    assert_eq!(bottlenecks.indicators(), vec![0, 0, 0, 0]);
    assert_eq!(bottlenecks.unassigned_hubs, vec![0]);
    assert_eq!(plan.network.sink_edge(2).unwrap().flow, 0);
    assert_eq!(plan.network.sink_edge(3).unwrap().flow, 1);
}

#[rstest]
fn isolated_hub_cuts_on_the_hub_side(planner: Planner) {
    let instance = Instance::new(2, 1).connect(0, [2]).with_capacities(vec![0, 0, 5]);
    let plan = planner.solve(&instance).unwrap();

    let bottlenecks = plan.bottlenecks().unwrap();
    assert!(bottlenecks.is_empty());
    assert_eq!(bottlenecks.unassigned_hubs, vec![1]);
    assert_eq!(plan.max_flow, 1);
}

#[rstest]
fn seeded_choice_is_rerouted_when_needed(planner: Planner) {
    // hub 1 only fits provider 2, which the preliminary assignment gave to hub 0
    let instance = Instance::new(2, 2).connect(0, [2, 3]).connect(1, [2]).with_capacities(vec![0, 0, 1, 1]).with_preliminary([(0, 2)]);
    let plan = planner.solve(&instance).unwrap();

    assert_eq!(plan.assignment(), Some(&[3, 2][..]));
    assert_eq!(plan.network.connection_edge(0, 2).unwrap().flow, 0);
    assert_eq!(plan.network.connection_edge(0, 3).unwrap().flow, 1);
}

#[rstest]
fn duplicate_connections_do_not_add_capacity() {
    let instance = Instance::new(1, 1).connect(0, [1, 1]).connect(0, [1]).with_capacities(vec![0, 3]);
    let network = AssignmentNetwork::build(&instance).unwrap();

    assert_eq!(network.connections(0).count(), 1);
    assert_eq!(network.connection_edge(0, 1).unwrap().upper, 1);
    assert_eq!(network.graph().num_edges(), 3);
}

fn over_committed() -> Instance<i64> {
    Instance::new(2, 1).connect(0, [2]).connect(1, [2]).with_capacities(vec![0, 0, 1]).with_preliminary([(0, 2), (1, 2)])
}

#[rstest]
fn skip_policy_reports_unseeded_pairs(planner: Planner) {
    let plan = planner.solve(&over_committed()).unwrap();

    assert_eq!(plan.initial_flow, 1);
    assert_eq!(plan.seed_report.outcomes, vec![((0, 2), SeedOutcome::Seeded), ((1, 2), SeedOutcome::ProviderFull)]);
    assert_eq!(plan.seed_report.skipped().collect::<Vec<_>>(), vec![(1, 2)]);
    assert_eq!(plan.bottlenecks().unwrap().indicators(), vec![0, 0, 1]);
}

#[test]
fn strict_policy_rejects_unseeded_pairs() {
    let planner = Planner::new(PlanOptions::default().seed_policy(SeedPolicy::Strict));
    assert_eq!(planner.solve(&over_committed()).err(), Some(PlanError::SeedRejected { hub: 1, provider: 2 }));
}

#[test]
fn seeding_twice_finds_hubs_already_routed() {
    let instance = Instance::new(1, 1).connect(0, [1]).with_capacities(vec![0, 2]);
    let mut network = AssignmentNetwork::build(&instance).unwrap();

    let first = network.seed(&[(0, 1)], SeedPolicy::Skip).unwrap();
    let second = network.seed(&[(0, 1)], SeedPolicy::Skip).unwrap();
    assert_eq!(first.initial_flow, 1);
    assert_eq!(second.outcomes, vec![((0, 1), SeedOutcome::HubAlreadyRouted)]);
    assert_eq!(network.total_flow(), 1);
}

#[rstest]
#[case(Instance::new(1, 1).connect(1, [1]).with_capacities(vec![0, 1]), PlanError::HubOutOfRange { hub: 1, num_hubs: 1 })]
#[case(Instance::new(2, 1).connect(0, [1]).with_capacities(vec![0, 0, 1]), PlanError::ProviderOutOfRange { provider: 1, start: 2, end: 3 })]
#[case(Instance::new(1, 1).connect(0, [2]).with_capacities(vec![0, 1]), PlanError::ProviderOutOfRange { provider: 2, start: 1, end: 2 })]
#[case(Instance::new(1, 2).with_capacities(vec![0, 1]), PlanError::MissingCapacity { len: 2, expected: 3 })]
#[case(Instance::new(1, 2).with_capacities(vec![0, 1, -1]), PlanError::NegativeCapacity { provider: 2 })]
#[case(Instance::new(1, 1).connect(0, [1]).with_capacities(vec![0, 2]).with_preliminary([(0, 1), (0, 1)]), PlanError::DuplicatePreliminary { hub: 0 })]
#[case(Instance::new(2, 1).connect(0, [2]).with_capacities(vec![0, 0, 2]).with_preliminary([(1, 2)]), PlanError::NotEligible { hub: 1, provider: 2 })]
#[case(Instance::new(1, 1).connect(0, [1]).with_capacities(vec![0, 2]).with_preliminary([(3, 1)]), PlanError::HubOutOfRange { hub: 3, num_hubs: 1 })]
fn invalid_input_is_rejected(planner: Planner, #[case] instance: Instance<i64>, #[case] expected: PlanError) {
    let err = planner.solve(&instance).err().unwrap();
    assert!(err.is_invalid_input());
    assert_eq!(err, expected);
}

#[test]
fn negative_hub_capacity_entries_are_ignored() {
    let instance = Instance::new(1, 1).connect(0, [1]).with_capacities(vec![-4, 1]);
    assert!(Planner::default().is_feasible(&instance).unwrap());
}

#[test]
fn unsigned_capacities() {
    let instance = Instance::<u32>::new(3, 1).connect(0, [3]).connect(1, [3]).connect(2, [3]).with_capacities(vec![0, 0, 0, 3]);
    let plan = Planner::default().solve(&instance).unwrap();
    assert_eq!(plan.max_flow, 3);
    assert_eq!(plan.assignment(), Some(&[3, 3, 3][..]));
}

#[test]
fn cancelled_query() {
    let options = PlanOptions::default().cancel_flag(Arc::new(AtomicBool::new(true)));
    let result = Planner::new(options).solve(&listing([0, 1, 0, 2, 2], &[]));
    assert_eq!(result.err(), Some(PlanError::Interrupted));
}

#[rstest]
fn repeated_queries_agree(planner: Planner) {
    let instance = listing([1, 0, 1, 1, 1], &[(3, 9)]);
    let first = planner.solve(&instance).unwrap();
    let second = planner.solve(&instance).unwrap();

    assert_eq!(first.max_flow, second.max_flow);
    assert_eq!(first.outcome, second.outcome);
}
