// ── Session slice ──

use std::sync::Arc;

use super::Action;
use crate::model::CurrentUser;

/// The signed-in user, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<CurrentUser>,
}

pub fn reduce(state: &Arc<SessionState>, action: &Action) -> Arc<SessionState> {
    match action {
        Action::SessionLoaded(user) => Arc::new(SessionState { user: user.clone() }),
        _ => Arc::clone(state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AdminStats, ItemId};

    #[test]
    fn session_loaded_sets_user() {
        let user = CurrentUser {
            id: ItemId::Numeric(1),
            username: "admin".into(),
            is_admin: true,
        };
        let state = reduce(
            &Arc::new(SessionState::default()),
            &Action::SessionLoaded(Some(user.clone())),
        );
        assert_eq!(state.user, Some(user));

        let cleared = reduce(&state, &Action::SessionLoaded(None));
        assert!(cleared.user.is_none());
    }

    #[test]
    fn other_actions_are_ignored() {
        let state = Arc::new(SessionState::default());
        let next = reduce(&state, &Action::StatsFetched(AdminStats::default()));
        assert!(Arc::ptr_eq(&state, &next));
    }
}
