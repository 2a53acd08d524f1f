//! Actions flowing through the UI loop.
//!
//! These are UI-level messages. Store actions live in `modboard_core` and
//! only reach the UI as `StateChanged` snapshots from the data bridge.

use std::sync::Arc;

use modboard_core::{AdminRoute, AppState};

/// Reads the UI can ask the data bridge to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchRequest {
    Session,
    Stats,
    RecentItems,
    /// Stats and recent items together.
    Dashboard,
}

#[derive(Debug, Clone)]
pub enum Action {
    // ── Lifecycle ──────────────────────────────────────────────────
    Quit,
    Tick,
    Render,

    // ── Navigation ────────────────────────────────────────────────
    SwitchRoute(AdminRoute),
    GoBack,

    // ── Data ──────────────────────────────────────────────────────
    StateChanged(Arc<AppState>),
    Fetch(FetchRequest),

    // ── Overlays ──────────────────────────────────────────────────
    ToggleHelp,
}
