// ── Fetch effects ──
//
// Each effect announces itself with a `*Requested` action, awaits the
// repository, then dispatches the outcome. The result is also returned
// for callers that want it directly.

use tracing::{info, warn};

use crate::error::FetchError;
use crate::model::{AdminStats, CurrentUser, RecentItems};
use crate::repository::AdminRepository;
use crate::store::{Action, Store};

pub async fn load_session<R: AdminRepository>(
    repo: &R,
    store: &Store,
) -> Result<Option<CurrentUser>, FetchError> {
    store.dispatch(Action::SessionRequested);
    match repo.current_user().await {
        Ok(user) => {
            match &user {
                Some(u) => info!(username = %u.username, is_admin = u.is_admin, "session loaded"),
                None => info!("no signed-in user"),
            }
            store.dispatch(Action::SessionLoaded(user.clone()));
            Ok(user)
        }
        Err(e) => {
            warn!(error = %e, "session load failed");
            store.dispatch(Action::SessionFailed(e.clone()));
            Err(e)
        }
    }
}

pub async fn fetch_stats<R: AdminRepository>(
    repo: &R,
    store: &Store,
) -> Result<AdminStats, FetchError> {
    store.dispatch(Action::StatsRequested);
    match repo.get_stats().await {
        Ok(stats) => {
            store.dispatch(Action::StatsFetched(stats));
            Ok(stats)
        }
        Err(e) => {
            warn!(error = %e, kind = %e.kind(), "stats fetch failed");
            store.dispatch(Action::StatsFailed(e.clone()));
            Err(e)
        }
    }
}

pub async fn fetch_recent_items<R: AdminRepository>(
    repo: &R,
    store: &Store,
) -> Result<RecentItems, FetchError> {
    store.dispatch(Action::RecentItemsRequested);
    match repo.get_recent_items().await {
        Ok(recent) => {
            store.dispatch(Action::RecentItemsFetched(recent.clone()));
            Ok(recent)
        }
        Err(e) => {
            warn!(error = %e, kind = %e.kind(), "recent items fetch failed");
            store.dispatch(Action::RecentItemsFailed(e.clone()));
            Err(e)
        }
    }
}

/// Fetch stats and recent items concurrently. Failures are already in
/// the store; the return value only reports whether both succeeded.
pub async fn refresh_dashboard<R: AdminRepository>(repo: &R, store: &Store) -> bool {
    let (stats, recent) = tokio::join!(fetch_stats(repo, store), fetch_recent_items(repo, store));
    stats.is_ok() && recent.is_ok()
}
