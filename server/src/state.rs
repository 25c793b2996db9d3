//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed config and a map of browser sessions keyed by the session
//! cookie. A session only remembers what the page needs across reloads: the
//! last submitted inputs and whether a visualization has been shown. The
//! grouping core itself is stateless.

use std::collections::HashMap;
use std::sync::Arc;

use grouping::Inputs;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::ServerConfig;

/// Number prefilled on a fresh session.
pub const DEFAULT_NUMBER: u32 = 12;
/// Group size prefilled on a fresh session.
pub const DEFAULT_GROUP_SIZE: u32 = 3;

// =============================================================================
// SESSION STATE
// =============================================================================

/// Per-browser page state, kept across reloads.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub number: u32,
    pub group_size: u32,
    /// Set once the user has submitted valid inputs.
    pub visualized: bool,
    /// Whether the prime/composite summary is shown.
    pub show_summary: bool,
    /// Store tick of the last request that used this session.
    pub last_seen: u64,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            number: DEFAULT_NUMBER,
            group_size: DEFAULT_GROUP_SIZE,
            visualized: false,
            show_summary: false,
            last_seen: 0,
        }
    }

    #[must_use]
    pub fn inputs(&self) -> Inputs {
        Inputs { number: self.number, group_size: self.group_size }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// SESSION STORE
// =============================================================================

/// Sessions keyed by cookie id, plus a logical clock for recency.
#[derive(Debug, Default)]
pub struct SessionStore {
    pub sessions: HashMap<Uuid, SessionState>,
    /// Incremented on every access; ordering `last_seen` values.
    pub tick: u64,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub sessions: Arc<RwLock<SessionStore>>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self { config: Arc::new(config), sessions: Arc::new(RwLock::new(SessionStore::new())) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
