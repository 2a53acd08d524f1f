// Store dispatch and subscription behavior.
#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use pretty_assertions::assert_eq;

use modboard_core::{Action, AdminStats, AppState, FetchError, Load, RecentItems, Store};

fn stats(users: u64, posts: u64, comments: u64) -> AdminStats {
    AdminStats {
        users,
        posts,
        comments,
    }
}

#[tokio::test]
async fn subscribers_see_fetched_stats() {
    let store = Store::new();
    let mut sub = store.subscribe();
    assert_eq!(sub.current().admin.stats, stats(0, 0, 0));

    assert!(store.dispatch(Action::StatsFetched(stats(100, 200, 300))));

    let snap = sub.changed().await.unwrap();
    assert_eq!(snap.admin.stats, stats(100, 200, 300));
    assert_eq!(sub.current().admin.stats, stats(100, 200, 300));
}

#[tokio::test]
async fn no_op_dispatch_does_not_wake_subscribers() {
    let store = Store::new();
    store.dispatch(Action::StatsRequested);
    let mut sub = store.subscribe();

    // Already loading: the tree is unchanged.
    assert!(!store.dispatch(Action::StatsRequested));

    let woke = tokio::time::timeout(Duration::from_millis(50), sub.changed()).await;
    assert!(woke.is_err(), "subscriber woke without a change");
}

#[tokio::test]
async fn unrelated_slices_keep_identity_across_dispatch() {
    let store = Store::new();
    let before = store.state();

    store.dispatch(Action::RecentItemsFetched(RecentItems::default()));
    let after = store.state();

    assert!(Arc::ptr_eq(&before.session, &after.session));
    assert!(!Arc::ptr_eq(&before.admin, &after.admin));
}

#[tokio::test]
async fn stream_yields_current_then_changes() {
    let store = Arc::new(Store::new());
    let mut stream = store.subscribe().into_stream();

    let first = stream.next().await.unwrap();
    assert_eq!(first.requests.stats, Load::Idle);

    let err = FetchError::Status {
        status: 502,
        message: "Bad Gateway".into(),
    };
    store.dispatch(Action::StatsFailed(err.clone()));

    let second = stream.next().await.unwrap();
    assert_eq!(second.requests.stats, Load::Failed(err));
    // Failure leaves the counters alone.
    assert_eq!(second.admin.stats, AdminStats::default());
}

#[test]
fn store_can_start_from_a_given_state() {
    let initial = modboard_core::store::reduce(
        &AppState::default(),
        &Action::StatsFetched(stats(1, 2, 3)),
    );
    let store = Store::with_state(initial);
    assert_eq!(store.state().admin.stats, stats(1, 2, 3));
}
