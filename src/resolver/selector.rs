//! Nameserver selection strategy

use rand::seq::SliceRandom;

/// Picks which configured nameserver a query goes to. Injected into the
/// resolver so tests can pin the choice.
pub trait NameserverSelector: Send + Sync {
    fn select<'a>(&self, candidates: &'a [String]) -> Option<&'a str>;
}

/// Uniform random pick, independent across calls. No session affinity.
pub struct RandomSelector;

impl NameserverSelector for RandomSelector {
    fn select<'a>(&self, candidates: &'a [String]) -> Option<&'a str> {
        candidates.choose(&mut rand::thread_rng()).map(String::as_str)
    }
}

/// Always returns the candidate at a fixed index, for deterministic tests.
pub struct FixedSelector(pub usize);

impl NameserverSelector for FixedSelector {
    fn select<'a>(&self, candidates: &'a [String]) -> Option<&'a str> {
        candidates.get(self.0).map(String::as_str)
    }
}
