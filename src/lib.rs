pub mod assignment;
pub mod error;
pub mod maximum_flow;

pub use assignment::{Instance, Outcome, Plan, PlanOptions, Planner, SeedPolicy};
pub use error::PlanError;
