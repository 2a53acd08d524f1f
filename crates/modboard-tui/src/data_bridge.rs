//! Data bridge: the only place the TUI touches the repository.
//!
//! Runs as a background task. It loads the session once at start-up, turns
//! each [`FetchRequest`] from the UI into a spawned fetch effect, and
//! forwards every store change to the UI as [`Action::StateChanged`].

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use modboard_core::{AdminRepository, Store, effects};

use crate::action::{Action, FetchRequest};

pub async fn run_data_bridge<R>(
    repo: Arc<R>,
    store: Arc<Store>,
    action_tx: mpsc::UnboundedSender<Action>,
    mut requests: mpsc::UnboundedReceiver<FetchRequest>,
    cancel: CancellationToken,
) where
    R: AdminRepository + 'static,
{
    let mut states = store.subscribe();
    if action_tx
        .send(Action::StateChanged(Arc::clone(states.current())))
        .is_err()
    {
        return;
    }

    spawn_fetch(&repo, &store, FetchRequest::Session);

    loop {
        tokio::select! {
            biased;

            () = cancel.cancelled() => break,

            Some(state) = states.changed() => {
                if action_tx.send(Action::StateChanged(state)).is_err() {
                    break;
                }
            }

            request = requests.recv() => match request {
                Some(request) => spawn_fetch(&repo, &store, request),
                None => break,
            },
        }
    }

    info!("data bridge stopped");
}

/// Run one effect on the runtime. Its outcome reaches the UI through the
/// store, so the returned value is not needed here.
fn spawn_fetch<R>(repo: &Arc<R>, store: &Arc<Store>, request: FetchRequest)
where
    R: AdminRepository + 'static,
{
    debug!(?request, "fetch");
    let repo = Arc::clone(repo);
    let store = Arc::clone(store);

    tokio::spawn(async move {
        match request {
            FetchRequest::Session => {
                let _ = effects::load_session(repo.as_ref(), &store).await;
            }
            FetchRequest::Stats => {
                let _ = effects::fetch_stats(repo.as_ref(), &store).await;
            }
            FetchRequest::RecentItems => {
                let _ = effects::fetch_recent_items(repo.as_ref(), &store).await;
            }
            FetchRequest::Dashboard => {
                effects::refresh_dashboard(repo.as_ref(), &store).await;
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use modboard_core::{AdminStats, AppState, FetchError, FixtureRepository, Load};
    use pretty_assertions::assert_eq;
    use tokio::task::JoinHandle;

    use super::*;

    struct Harness {
        actions: mpsc::UnboundedReceiver<Action>,
        requests: mpsc::UnboundedSender<FetchRequest>,
        cancel: CancellationToken,
        task: JoinHandle<()>,
    }

    fn start(repo: FixtureRepository) -> Harness {
        let (action_tx, actions) = mpsc::unbounded_channel();
        let (requests, request_rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let task = tokio::spawn(run_data_bridge(
            Arc::new(repo),
            Arc::new(Store::new()),
            action_tx,
            request_rx,
            cancel.clone(),
        ));
        Harness {
            actions,
            requests,
            cancel,
            task,
        }
    }

    /// Wait for the first snapshot satisfying `pred`.
    async fn until(
        actions: &mut mpsc::UnboundedReceiver<Action>,
        pred: impl Fn(&AppState) -> bool,
    ) -> Arc<AppState> {
        tokio::time::timeout(Duration::from_secs(5), async {
            loop {
                match actions.recv().await {
                    Some(Action::StateChanged(state)) if pred(&state) => return state,
                    Some(_) => {}
                    None => panic!("bridge closed the action channel"),
                }
            }
        })
        .await
        .expect("timed out waiting for state")
    }

    #[tokio::test]
    async fn loads_session_at_start() {
        let mut h = start(FixtureRepository::sample());

        let state = until(&mut h.actions, |s| s.session.user.is_some()).await;
        assert!(state.session.user.as_ref().is_some_and(|u| u.is_admin));
        // Nothing else is fetched until asked.
        assert_eq!(state.requests.stats, Load::Idle);

        h.cancel.cancel();
        h.task.await.expect("bridge task");
    }

    #[tokio::test]
    async fn dashboard_request_fetches_stats_and_recent_once() {
        let repo = FixtureRepository::sample();
        let calls = repo.calls();
        let mut h = start(repo);

        h.requests.send(FetchRequest::Dashboard).expect("send");
        let state = until(&mut h.actions, |s| {
            s.requests.stats == Load::Ready && s.requests.recent == Load::Ready
        })
        .await;

        assert_eq!(
            state.admin.stats,
            AdminStats {
                users: 100,
                posts: 200,
                comments: 300,
            }
        );
        assert_eq!(state.admin.recent_users.len(), 2);
        assert_eq!(calls.stats(), 1);
        assert_eq!(calls.recent(), 1);

        h.cancel.cancel();
        h.task.await.expect("bridge task");
    }

    #[tokio::test]
    async fn failures_arrive_as_state() {
        let repo = FixtureRepository::sample().failing_stats(FetchError::Timeout { timeout_ms: 30_000 });
        let mut h = start(repo);

        h.requests.send(FetchRequest::Stats).expect("send");
        let state = until(&mut h.actions, |s| s.requests.stats.error().is_some()).await;
        assert_eq!(state.admin.stats, AdminStats::default());

        h.cancel.cancel();
        h.task.await.expect("bridge task");
    }

    #[tokio::test]
    async fn stops_when_ui_goes_away() {
        let h = start(FixtureRepository::sample());
        drop(h.requests);
        drop(h.actions);

        tokio::time::timeout(Duration::from_secs(5), h.task)
            .await
            .expect("bridge did not stop")
            .expect("bridge task");
    }
}
