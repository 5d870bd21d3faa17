//! API server state

use std::sync::Arc;

use crate::roster::{Roster, Seed};

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Activity roster shared by all handlers
    pub roster: Arc<Roster>,
}

impl AppState {
    pub fn new(roster: Arc<Roster>) -> Self {
        Self { roster }
    }

    /// Create state with a fresh roster built from `seed`
    pub fn from_seed(seed: Seed) -> Self {
        Self::new(Arc::new(Roster::from_seed(seed)))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_seed(Seed::default())
    }
}
