use crate::assignment::network::AssignmentNetwork;
use num_traits::NumAssign;
use std::fmt::Debug;

/// Providers on the source side of the minimum cut whose sink edge is saturated.
///
/// `flags` has one entry per hub followed by one per provider; hub entries are always `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bottlenecks {
    pub flags: Vec<bool>,
    pub unassigned_hubs: Vec<usize>,
}

impl Bottlenecks {
    // 0/1 layout: hub zeros followed by provider flags
    pub fn indicators(&self) -> Vec<u8> {
        self.flags.iter().map(|&flag| u8::from(flag)).collect()
    }

    pub fn providers(&self) -> Vec<usize> {
        self.flags.iter().enumerate().filter(|&(_, &flag)| flag).map(|(node, _)| node).collect()
    }

    pub fn is_empty(&self) -> bool {
        !self.flags.contains(&true)
    }
}

impl<Flow> AssignmentNetwork<Flow>
where
    Flow: NumAssign + Ord + Copy + Debug + Default,
{
    /// `reachable` is the source side of the final residual network, indexed by node.
    pub fn bottlenecks(&self, reachable: &[bool]) -> Bottlenecks {
        let mut flags = vec![false; self.num_hubs() + self.num_providers()];
        for provider in self.providers() {
            let Some(edge) = self.sink_edge(provider) else {
                continue;
            };
            flags[provider] = reachable.get(provider).copied().unwrap_or(false) && edge.upper > Flow::zero() && edge.residual_capacity() == Flow::zero();
        }

        let unassigned_hubs = self.hubs().filter(|&hub| self.source_edge(hub).is_some_and(|e| e.flow == Flow::zero())).collect();

        Bottlenecks { flags, unassigned_hubs }
    }
}
