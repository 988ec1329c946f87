use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("hub {hub} is out of range (expected < {num_hubs})")]
    HubOutOfRange { hub: usize, num_hubs: usize },
    #[error("provider {provider} is out of range (expected {start}..{end})")]
    ProviderOutOfRange { provider: usize, start: usize, end: usize },
    #[error("capacity sequence has {len} entries, {expected} are required")]
    MissingCapacity { len: usize, expected: usize },
    #[error("provider {provider} has a negative capacity")]
    NegativeCapacity { provider: usize },
    #[error("hub {hub} appears more than once in the preliminary assignment")]
    DuplicatePreliminary { hub: usize },
    #[error("hub {hub} is not connected to provider {provider}")]
    NotEligible { hub: usize, provider: usize },
    #[error("preliminary pair hub {hub} -> provider {provider} has no free unit to seed")]
    SeedRejected { hub: usize, provider: usize },
    #[error("flow computation was cancelled")]
    Interrupted,
    #[error("internal invariant violated: {0}")]
    Internal(String),
}

impl PlanError {
    // caller-side mistakes, reported before any flow is computed
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, PlanError::Interrupted | PlanError::Internal(_))
    }
}
