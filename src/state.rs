//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the registry of live rooms: one owned map with a per-room lock, so
//! operations on unrelated rooms never contend, while join and move on the
//! same room serialize on that room's mutex alone. Rooms live for the
//! process lifetime; there is no eviction.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::game::session::{GameSession, RoomId};

/// Shared application state. Clone is required by Axum; the inner map is
/// Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    /// Live rooms. The map lock is held only for lookup and create; game
    /// operations run under the per-room mutex.
    pub rooms: Arc<RwLock<HashMap<RoomId, Arc<Mutex<GameSession>>>>>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self { rooms: Arc::new(RwLock::new(HashMap::new())) }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
