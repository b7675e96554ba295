use rand::Rng;

use crate::error::{BotornotError, Result};
use crate::llm::DynLlmClient;

/// Picks which pool slot serves the next call. Implementations must be cheap;
/// `choose` is called once per scoring request.
pub trait SelectionStrategy: Send + Sync {
    fn choose(&self, pool_size: usize) -> usize;
}

/// Independent uniform pick per call. No affinity, no rotation.
#[derive(Default, Clone)]
pub struct UniformRandom;

impl SelectionStrategy for UniformRandom {
    fn choose(&self, pool_size: usize) -> usize {
        rand::thread_rng().gen_range(0..pool_size)
    }
}

/// Set of interchangeable model clients, one per configured credential,
/// used to spread scoring traffic across upstream quotas.
pub struct ScoringPool {
    clients: Vec<DynLlmClient>,
    strategy: Box<dyn SelectionStrategy>,
}

impl ScoringPool {
    pub fn new(clients: Vec<DynLlmClient>) -> Self {
        Self::with_strategy(clients, Box::new(UniformRandom))
    }

    pub fn with_strategy(clients: Vec<DynLlmClient>, strategy: Box<dyn SelectionStrategy>) -> Self {
        Self { clients, strategy }
    }

    pub fn pick(&self) -> Result<&DynLlmClient> {
        if self.clients.is_empty() {
            return Err(BotornotError::EmptyPool);
        }
        let index = self.strategy.choose(self.clients.len());
        self.clients
            .get(index)
            .ok_or_else(|| BotornotError::Config(format!("selection index {index} out of range")))
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::LocalEchoClient;
    use std::sync::Arc;

    #[test]
    fn uniform_random_stays_in_range() {
        let strategy = UniformRandom;
        for _ in 0..200 {
            assert!(strategy.choose(6) < 6);
        }
    }

    #[test]
    fn empty_pool_is_an_error() {
        let pool = ScoringPool::new(Vec::new());
        assert!(matches!(pool.pick(), Err(BotornotError::EmptyPool)));
    }

    #[test]
    fn custom_strategy_is_honored() {
        struct AlwaysLast;
        impl SelectionStrategy for AlwaysLast {
            fn choose(&self, pool_size: usize) -> usize {
                pool_size - 1
            }
        }

        let clients: Vec<DynLlmClient> =
            (0..6).map(|_| Arc::new(LocalEchoClient) as DynLlmClient).collect();
        let pool = ScoringPool::with_strategy(clients, Box::new(AlwaysLast));
        assert!(pool.pick().is_ok());
        assert_eq!(pool.len(), 6);
    }
}
