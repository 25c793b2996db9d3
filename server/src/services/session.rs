//! Browser session bookkeeping.
//!
//! ARCHITECTURE
//! ============
//! Each browser carries a random session id in a cookie. The id maps to a
//! [`SessionState`] in `AppState::sessions`, which is what lets the page
//! keep the last inputs and the "has visualized" flag across reloads.
//!
//! TRADE-OFFS
//! ==========
//! Sessions live only in memory and are bounded by `session_capacity`; when
//! full, the least recently seen session is evicted. Losing a session only
//! resets the form to its defaults.

use grouping::Inputs;
use tracing::debug;
use uuid::Uuid;

use crate::state::{AppState, SessionState, SessionStore};

/// Parse a session id from a cookie value.
#[must_use]
pub fn parse_session_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}

/// Return the session for `id`, creating a fresh one if it is unknown.
pub async fn touch(state: &AppState, id: Uuid) -> SessionState {
    let mut store = state.sessions.write().await;
    entry(&mut store, id, state.config.session_capacity).clone()
}

/// Store a successful submission for `id`.
pub async fn record(state: &AppState, id: Uuid, inputs: Inputs, show_summary: bool) -> SessionState {
    let mut store = state.sessions.write().await;
    let session = entry(&mut store, id, state.config.session_capacity);
    session.number = inputs.number;
    session.group_size = inputs.group_size;
    session.visualized = true;
    session.show_summary = show_summary;
    debug!(%id, number = inputs.number, group_size = inputs.group_size, show_summary, "session updated");
    session.clone()
}

/// Look up or create the session for `id`, stamping it with a fresh tick.
fn entry(store: &mut SessionStore, id: Uuid, capacity: usize) -> &mut SessionState {
    if !store.sessions.contains_key(&id) {
        while store.sessions.len() >= capacity {
            if !evict_oldest(store) {
                break;
            }
        }
    }
    store.tick += 1;
    let tick = store.tick;
    let session = store.sessions.entry(id).or_default();
    session.last_seen = tick;
    session
}

/// Remove the least recently seen session. Returns `false` if none remain.
fn evict_oldest(store: &mut SessionStore) -> bool {
    let oldest = store.sessions.iter().min_by_key(|(_, s)| s.last_seen).map(|(id, _)| *id);
    match oldest {
        Some(id) => {
            store.sessions.remove(&id);
            debug!(%id, "session evicted");
            true
        }
        None => false,
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
