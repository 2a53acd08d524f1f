// ── Request status slice ──
//
// Tracks where each read stands so views can show a spinner or an error
// without the admin slice having to know about failures.

use std::sync::Arc;

use super::Action;
use crate::error::FetchError;

/// Lifecycle of a single read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Load {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(FetchError),
}

impl Load {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Failed(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestsState {
    pub session: Load,
    pub stats: Load,
    pub recent: Load,
}

impl RequestsState {
    pub fn any_loading(&self) -> bool {
        self.session.is_loading() || self.stats.is_loading() || self.recent.is_loading()
    }
}

pub fn reduce(state: &Arc<RequestsState>, action: &Action) -> Arc<RequestsState> {
    let mut next = RequestsState::clone(state);
    let (slot, load) = match action {
        Action::SessionRequested => (&mut next.session, Load::Loading),
        Action::SessionLoaded(_) => (&mut next.session, Load::Ready),
        Action::SessionFailed(e) => (&mut next.session, Load::Failed(e.clone())),
        Action::StatsRequested => (&mut next.stats, Load::Loading),
        Action::StatsFetched(_) => (&mut next.stats, Load::Ready),
        Action::StatsFailed(e) => (&mut next.stats, Load::Failed(e.clone())),
        Action::RecentItemsRequested => (&mut next.recent, Load::Loading),
        Action::RecentItemsFetched(_) => (&mut next.recent, Load::Ready),
        Action::RecentItemsFailed(e) => (&mut next.recent, Load::Failed(e.clone())),
    };
    if *slot == load {
        return Arc::clone(state);
    }
    *slot = load;
    Arc::new(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AdminStats;

    #[test]
    fn stats_lifecycle() {
        let state = Arc::new(RequestsState::default());
        let loading = reduce(&state, &Action::StatsRequested);
        assert!(loading.stats.is_loading());
        assert!(loading.any_loading());

        let err = FetchError::Network {
            reason: "connection refused".into(),
        };
        let failed = reduce(&loading, &Action::StatsFailed(err.clone()));
        assert_eq!(failed.stats.error(), Some(&err));

        let ready = reduce(&failed, &Action::StatsFetched(AdminStats::default()));
        assert_eq!(ready.stats, Load::Ready);
        assert_eq!(ready.recent, Load::Idle);
    }

    #[test]
    fn repeated_status_keeps_the_same_state() {
        let loading = reduce(
            &Arc::new(RequestsState::default()),
            &Action::RecentItemsRequested,
        );
        let again = reduce(&loading, &Action::RecentItemsRequested);
        assert!(Arc::ptr_eq(&loading, &again));
    }
}
