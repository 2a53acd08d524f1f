// ── Admin slice ──
//
// Counters and recent-entity lists for the dashboard.

use std::sync::Arc;

use super::Action;
use crate::model::{AdminStats, RecentComment, RecentPost, RecentUser};

/// Starts zeroed and empty; lives for the process, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminState {
    pub stats: AdminStats,
    pub recent_users: Vec<RecentUser>,
    pub recent_posts: Vec<RecentPost>,
    pub recent_comments: Vec<RecentComment>,
}

/// `StatsFetched` replaces `stats`; `RecentItemsFetched` replaces the three
/// recent lists. Any other action hands back the same `Arc`.
pub fn reduce(state: &Arc<AdminState>, action: &Action) -> Arc<AdminState> {
    match action {
        Action::StatsFetched(stats) => Arc::new(AdminState {
            stats: *stats,
            ..AdminState::clone(state)
        }),
        Action::RecentItemsFetched(recent) => Arc::new(AdminState {
            stats: state.stats,
            recent_users: recent.users.clone(),
            recent_posts: recent.posts.clone(),
            recent_comments: recent.comments.clone(),
        }),
        _ => Arc::clone(state),
    }
}
