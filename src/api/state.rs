//! Shared handler state

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::SortConfig;
use crate::sort::{BatchSortStrategy, StrategyKind};
use crate::{BatchSortError, Result};

/// Strategies available to the handlers, keyed by entry point
#[derive(Clone)]
pub struct AppState {
    strategies: HashMap<StrategyKind, Arc<dyn BatchSortStrategy>>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("strategies", &self.strategies.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl AppState {
    /// Register every strategy built from the configuration
    pub fn new(config: &SortConfig) -> Self {
        let strategies = StrategyKind::ALL
            .into_iter()
            .map(|kind| (kind, kind.build(config)))
            .collect();
        Self { strategies }
    }

    /// Replace the strategy behind one entry point
    pub fn with_strategy(mut self, kind: StrategyKind, strategy: Arc<dyn BatchSortStrategy>) -> Self {
        self.strategies.insert(kind, strategy);
        self
    }

    /// Strategy registered for `kind`
    pub fn strategy(&self, kind: StrategyKind) -> Result<Arc<dyn BatchSortStrategy>> {
        self.strategies
            .get(&kind)
            .cloned()
            .ok_or_else(|| BatchSortError::UnknownStrategy(kind.route().to_string()))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&SortConfig::default())
    }
}
