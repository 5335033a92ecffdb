//! Process-wide application state.
//!
//! Built once in `main`, wrapped in an `Arc`, and handed to the router. Every
//! request sees the same instance through [`Request::state`](crate::Request::state).

use std::sync::atomic::{AtomicU64, Ordering};

use crate::store::Store;
use crate::validate::ValidationPolicy;

#[derive(Default)]
pub struct AppState {
    policy: ValidationPolicy,
    hits: AtomicU64,
    store: Store,
}

impl AppState {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy, hits: AtomicU64::new(0), store: Store::default() }
    }

    pub fn policy(&self) -> &ValidationPolicy { &self.policy }
    pub fn store(&self) -> &Store { &self.store }

    /// Number of requests counted since startup or the last reset.
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn reset_hits(&self) {
        self.hits.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn concurrent_hits_are_not_lost() {
        let state = Arc::new(AppState::default());
        let mut tasks = tokio::task::JoinSet::new();
        for _ in 0..8 {
            let state = Arc::clone(&state);
            tasks.spawn(async move {
                for _ in 0..1000 {
                    state.record_hit();
                }
            });
        }
        while tasks.join_next().await.is_some() {}
        assert_eq!(state.hits(), 8000);

        state.reset_hits();
        assert_eq!(state.hits(), 0);
    }
}
