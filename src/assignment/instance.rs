use crate::error::PlanError;
use num_traits::NumAssign;
use std::collections::{BTreeMap, HashSet};
use std::ops::Range;

/// Caller input for one feasibility query.
///
/// `capacities` is indexed by node id: entries `num_hubs..num_hubs + num_providers` are the
/// provider capacities, entries below `num_hubs` are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance<Flow> {
    pub num_hubs: usize,
    pub num_providers: usize,
    pub connections: BTreeMap<usize, Vec<usize>>,
    pub capacities: Vec<Flow>,
    pub preliminary: Vec<(usize, usize)>,
}

impl<Flow> Instance<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    pub fn new(num_hubs: usize, num_providers: usize) -> Self {
        Self { num_hubs, num_providers, connections: BTreeMap::new(), capacities: vec![Flow::zero(); num_hubs + num_providers], preliminary: Vec::new() }
    }

    pub fn connect(mut self, hub: usize, providers: impl IntoIterator<Item = usize>) -> Self {
        self.connections.entry(hub).or_default().extend(providers);
        self
    }

    pub fn with_capacities(mut self, capacities: Vec<Flow>) -> Self {
        self.capacities = capacities;
        self
    }

    pub fn with_preliminary(mut self, preliminary: impl IntoIterator<Item = (usize, usize)>) -> Self {
        self.preliminary = preliminary.into_iter().collect();
        self
    }

    #[inline]
    pub fn hubs(&self) -> Range<usize> {
        0..self.num_hubs
    }

    #[inline]
    pub fn providers(&self) -> Range<usize> {
        self.num_hubs..self.num_hubs + self.num_providers
    }

    pub fn capacity(&self, provider: usize) -> Flow {
        self.capacities.get(provider).copied().unwrap_or_else(Flow::zero)
    }

    pub fn is_eligible(&self, hub: usize, provider: usize) -> bool {
        self.connections.get(&hub).is_some_and(|providers| providers.contains(&provider))
    }

    pub fn validate(&self) -> Result<(), PlanError> {
        let expected = self.num_hubs + self.num_providers;
        if self.capacities.len() < expected {
            return Err(PlanError::MissingCapacity { len: self.capacities.len(), expected });
        }
        if let Some(provider) = self.providers().find(|&p| self.capacities[p] < Flow::zero()) {
            return Err(PlanError::NegativeCapacity { provider });
        }

        for (&hub, providers) in self.connections.iter() {
            self.check_hub(hub)?;
            for &provider in providers {
                self.check_provider(provider)?;
            }
        }

        let mut seen = HashSet::new();
        for &(hub, provider) in self.preliminary.iter() {
            self.check_hub(hub)?;
            self.check_provider(provider)?;
            if !seen.insert(hub) {
                return Err(PlanError::DuplicatePreliminary { hub });
            }
            if !self.is_eligible(hub, provider) {
                return Err(PlanError::NotEligible { hub, provider });
            }
        }

        Ok(())
    }

    fn check_hub(&self, hub: usize) -> Result<(), PlanError> {
        if hub >= self.num_hubs {
            return Err(PlanError::HubOutOfRange { hub, num_hubs: self.num_hubs });
        }
        Ok(())
    }

    fn check_provider(&self, provider: usize) -> Result<(), PlanError> {
        if !self.providers().contains(&provider) {
            let range = self.providers();
            return Err(PlanError::ProviderOutOfRange { provider, start: range.start, end: range.end });
        }
        Ok(())
    }
}
