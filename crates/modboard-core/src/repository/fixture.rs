// ── Fixture repository ──
//
// Serves a fixed snapshot. Backs `--demo` mode and stands in for the
// backend in tests; failures and latency can be injected per resource.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::AdminRepository;
use crate::error::FetchError;
use crate::model::{
    AdminStats, CurrentUser, ItemId, RecentComment, RecentItems, RecentPost, RecentUser,
};

/// How many times each repository method has been called.
#[derive(Debug, Default)]
pub struct CallCounts {
    current_user: AtomicUsize,
    stats: AtomicUsize,
    recent: AtomicUsize,
}

impl CallCounts {
    pub fn current_user(&self) -> usize {
        self.current_user.load(Ordering::SeqCst)
    }

    pub fn stats(&self) -> usize {
        self.stats.load(Ordering::SeqCst)
    }

    pub fn recent(&self) -> usize {
        self.recent.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone)]
pub struct FixtureRepository {
    user: Option<CurrentUser>,
    stats: Result<AdminStats, FetchError>,
    recent: Result<RecentItems, FetchError>,
    latency: Option<Duration>,
    calls: Arc<CallCounts>,
}

impl Default for FixtureRepository {
    fn default() -> Self {
        Self::sample()
    }
}

impl FixtureRepository {
    /// The demo snapshot: an admin user, `{100, 200, 300}` totals, and
    /// two entries in each recent list.
    pub fn sample() -> Self {
        Self {
            user: Some(CurrentUser {
                id: ItemId::Numeric(1),
                username: "admin".into(),
                is_admin: true,
            }),
            stats: Ok(AdminStats {
                users: 100,
                posts: 200,
                comments: 300,
            }),
            recent: Ok(sample_recent()),
            latency: None,
            calls: Arc::default(),
        }
    }

    /// Keep the user but drop their admin flag.
    pub fn non_admin(mut self) -> Self {
        if let Some(user) = self.user.as_mut() {
            user.is_admin = false;
        }
        self
    }

    pub fn with_user(mut self, user: Option<CurrentUser>) -> Self {
        self.user = user;
        self
    }

    pub fn with_stats(mut self, stats: AdminStats) -> Self {
        self.stats = Ok(stats);
        self
    }

    pub fn with_recent(mut self, recent: RecentItems) -> Self {
        self.recent = Ok(recent);
        self
    }

    pub fn failing_stats(mut self, err: FetchError) -> Self {
        self.stats = Err(err);
        self
    }

    pub fn failing_recent(mut self, err: FetchError) -> Self {
        self.recent = Err(err);
        self
    }

    /// Delay every call, so loading states are visible.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Shared call counters; clones of this repository report into the
    /// same counters.
    pub fn calls(&self) -> Arc<CallCounts> {
        Arc::clone(&self.calls)
    }

    async fn pause(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

impl AdminRepository for FixtureRepository {
    async fn current_user(&self) -> Result<Option<CurrentUser>, FetchError> {
        self.calls.current_user.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        Ok(self.user.clone())
    }

    async fn get_stats(&self) -> Result<AdminStats, FetchError> {
        self.calls.stats.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        self.stats.clone()
    }

    async fn get_recent_items(&self) -> Result<RecentItems, FetchError> {
        self.calls.recent.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        self.recent.clone()
    }
}

fn sample_recent() -> RecentItems {
    RecentItems {
        users: vec![
            RecentUser {
                id: ItemId::Numeric(1),
                name: "User One".into(),
            },
            RecentUser {
                id: ItemId::Numeric(2),
                name: "User Two".into(),
            },
        ],
        posts: vec![
            RecentPost {
                id: ItemId::Numeric(1),
                title: "Post One".into(),
            },
            RecentPost {
                id: ItemId::Numeric(2),
                title: "Post Two".into(),
            },
        ],
        comments: vec![
            RecentComment {
                id: ItemId::Numeric(1),
                content: "Comment One".into(),
            },
            RecentComment {
                id: ItemId::Numeric(2),
                content: "Comment Two".into(),
            },
        ],
    }
}
