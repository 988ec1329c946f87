//! Hub/provider assignment on top of the maximum flow solvers.
//!
//! The network is `source -> hubs -> providers -> sink`. Hubs use ids `0..num_hubs`, providers
//! use `num_hubs..num_hubs + num_providers`, and the source and sink are two extra nodes after them.
pub mod bottleneck;
pub mod extract;
pub mod instance;
pub mod network;
pub mod planner;
pub mod seed;

pub use bottleneck::Bottlenecks;
pub use extract::{Outcome, Plan};
pub use instance::Instance;
pub use network::AssignmentNetwork;
pub use planner::{PlanOptions, Planner};
pub use seed::{SeedOutcome, SeedPolicy, SeedReport};
