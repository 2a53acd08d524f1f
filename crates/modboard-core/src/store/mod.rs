// ── Application store ──
//
// A single `AppState` tree behind a `watch` channel. Every action passes
// through `Store::dispatch`, which runs the root reducer while holding
// the channel's write lock, so reductions are serialized. Subscribers
// wake only when some slice actually changed.

mod action;
pub mod admin;
pub mod requests;
pub mod session;

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::stream::StateStream;

pub use action::Action;
pub use admin::AdminState;
pub use requests::{Load, RequestsState};
pub use session::SessionState;

/// The combined state tree. Regions are disjoint and each is shared by
/// `Arc`, so cloning the tree is cheap.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The "main" region: who is signed in.
    pub session: Arc<SessionState>,
    pub admin: Arc<AdminState>,
    pub requests: Arc<RequestsState>,
}

impl AppState {
    /// True when both trees share every slice.
    pub fn same_as(&self, other: &AppState) -> bool {
        Arc::ptr_eq(&self.session, &other.session)
            && Arc::ptr_eq(&self.admin, &other.admin)
            && Arc::ptr_eq(&self.requests, &other.requests)
    }
}

/// Root reducer: every slice sees every action.
pub fn reduce(state: &AppState, action: &Action) -> AppState {
    AppState {
        session: session::reduce(&state.session, action),
        admin: admin::reduce(&state.admin, action),
        requests: requests::reduce(&state.requests, action),
    }
}

/// Explicitly constructed state container, shared by `Arc` between the
/// view layer and the fetch effects.
#[derive(Debug)]
pub struct Store {
    state: watch::Sender<Arc<AppState>>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    pub fn with_state(initial: AppState) -> Self {
        let (state, _) = watch::channel(Arc::new(initial));
        Self { state }
    }

    /// Reduce `action` into the tree. Returns whether anything changed;
    /// subscribers are notified only in that case.
    pub fn dispatch(&self, action: Action) -> bool {
        let kind = action.kind();
        let changed = self.state.send_if_modified(|current| {
            let next = reduce(current, &action);
            if next.same_as(current) {
                false
            } else {
                *current = Arc::new(next);
                true
            }
        });
        debug!(action = kind, changed, "dispatch");
        changed
    }

    /// Snapshot of the current tree.
    pub fn state(&self) -> Arc<AppState> {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> StateStream {
        StateStream::new(self.state.subscribe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AdminStats;

    #[test]
    fn root_reducer_routes_to_every_slice() {
        let state = AppState::default();
        let stats = AdminStats {
            users: 100,
            posts: 200,
            comments: 300,
        };
        let next = reduce(&state, &Action::StatsFetched(stats));

        assert_eq!(next.admin.stats, stats);
        assert_eq!(next.requests.stats, Load::Ready);
        assert!(Arc::ptr_eq(&state.session, &next.session));
        assert!(!next.same_as(&state));
    }

    #[test]
    fn dispatch_reports_real_changes_only() {
        let store = Store::new();
        assert!(store.dispatch(Action::SessionRequested));
        assert!(!store.dispatch(Action::SessionRequested));
        assert!(store.state().requests.session.is_loading());
    }
}
