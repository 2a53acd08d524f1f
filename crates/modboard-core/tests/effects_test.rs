// Fetch effects against fixture and HTTP repositories.
#![allow(clippy::unwrap_used)]

use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use modboard_core::effects::{fetch_recent_items, fetch_stats, load_session, refresh_dashboard};
use modboard_core::{
    AdminStats, FetchError, FetchErrorKind, FixtureRepository, HttpRepository, Load, ServerConfig,
    Store,
};

// ── Fixture ─────────────────────────────────────────────────────────

#[tokio::test]
async fn refresh_dashboard_fills_both_resources() {
    let repo = FixtureRepository::sample();
    let store = Store::new();

    assert!(refresh_dashboard(&repo, &store).await);

    let state = store.state();
    assert_eq!(
        state.admin.stats,
        AdminStats {
            users: 100,
            posts: 200,
            comments: 300
        }
    );
    assert_eq!(state.admin.recent_users.len(), 2);
    assert_eq!(state.admin.recent_posts[1].title, "Post Two");
    assert_eq!(state.admin.recent_comments[0].content, "Comment One");
    assert_eq!(state.requests.stats, Load::Ready);
    assert_eq!(state.requests.recent, Load::Ready);

    let calls = repo.calls();
    assert_eq!((calls.stats(), calls.recent()), (1, 1));
}

#[tokio::test]
async fn failed_stats_keep_previous_counters() {
    let store = Store::new();
    fetch_stats(&FixtureRepository::sample(), &store).await.unwrap();

    let err = FetchError::Timeout { timeout_ms: 30_000 };
    let failing = FixtureRepository::sample().failing_stats(err.clone());
    assert_eq!(fetch_stats(&failing, &store).await, Err(err.clone()));

    let state = store.state();
    assert_eq!(state.admin.stats.users, 100);
    assert_eq!(state.requests.stats, Load::Failed(err));
}

#[tokio::test]
async fn load_session_for_non_admin() {
    let store = Store::new();
    let user = load_session(&FixtureRepository::sample().non_admin(), &store)
        .await
        .unwrap()
        .unwrap();
    assert!(!user.is_admin);
    assert_eq!(store.state().session.user.as_ref(), Some(&user));
    assert_eq!(store.state().requests.session, Load::Ready);
}

#[tokio::test(start_paused = true)]
async fn loading_is_visible_while_in_flight() {
    let repo = FixtureRepository::sample().with_latency(Duration::from_secs(2));
    let store = std::sync::Arc::new(Store::new());

    let task = {
        let store = std::sync::Arc::clone(&store);
        tokio::spawn(async move { fetch_recent_items(&repo, &store).await })
    };
    tokio::task::yield_now().await;
    assert!(store.state().requests.recent.is_loading());

    task.await.unwrap().unwrap();
    assert_eq!(store.state().requests.recent, Load::Ready);
}

// ── HTTP ────────────────────────────────────────────────────────────

async fn http_repo(server: &MockServer) -> HttpRepository {
    let config = ServerConfig::new(Url::parse(&server.uri()).unwrap());
    HttpRepository::new(&config).unwrap()
}

#[tokio::test]
async fn http_stats_and_recent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": 3, "posts": 14, "comments": 15,
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/recent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": [{ "id": "b2", "name": "second" }, { "id": "a1", "name": "first" }],
        })))
        .mount(&server)
        .await;

    let repo = http_repo(&server).await;
    let store = Store::new();
    assert!(refresh_dashboard(&repo, &store).await);

    let state = store.state();
    assert_eq!(state.admin.stats.comments, 15);
    let names: Vec<_> = state.admin.recent_users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["second", "first"]);
    assert!(state.admin.recent_posts.is_empty());
}

#[tokio::test]
async fn http_errors_map_to_fetch_error_kinds() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": -4, "posts": 0, "comments": 0,
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/recent"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let repo = http_repo(&server).await;
    let store = Store::new();
    assert!(!refresh_dashboard(&repo, &store).await);

    let state = store.state();
    assert_eq!(
        state.requests.stats.error().map(FetchError::kind),
        Some(FetchErrorKind::MalformedPayload)
    );
    assert_eq!(
        state.requests.recent.error().map(FetchError::kind),
        Some(FetchErrorKind::Status)
    );
    assert_eq!(state.admin.stats, AdminStats::default());
}

#[tokio::test]
async fn http_anonymous_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/_user"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let repo = http_repo(&server).await;
    let store = Store::new();
    assert_eq!(load_session(&repo, &store).await, Ok(None));
    assert!(store.state().session.user.is_none());
}

#[tokio::test]
async fn http_unreachable_server_is_network_error() {
    let config = ServerConfig::new(Url::parse("http://127.0.0.1:9").unwrap());
    let repo = HttpRepository::new(&config).unwrap();
    let store = Store::new();

    let err = fetch_stats(&repo, &store).await.unwrap_err();
    assert_eq!(err.kind(), FetchErrorKind::Network);
}

#[tokio::test]
async fn http_slow_server_times_out_with_configured_duration() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/stats"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "users": 1, "posts": 1, "comments": 1 }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let mut config = ServerConfig::new(Url::parse(&server.uri()).unwrap());
    config.timeout = Duration::from_millis(300);
    let repo = HttpRepository::new(&config).unwrap();
    let store = Store::new();

    let err = fetch_stats(&repo, &store).await.unwrap_err();
    assert_eq!(err, FetchError::Timeout { timeout_ms: 300 });
    assert_eq!(err.kind(), FetchErrorKind::Timeout);
    assert_eq!(err.to_string(), "Request timed out after 300ms");
    assert_eq!(store.state().requests.stats, Load::Failed(err));
}
