//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own room lookup, locking discipline, and the AI move
//! chooser so route handlers can stay focused on protocol translation.

pub mod ai;
pub mod registry;
