// ── Data-source seam ──
//
// Views and effects depend on `AdminRepository`, never on HTTP directly.
// `HttpRepository` talks to a live backend; `FixtureRepository` serves a
// fixed snapshot for demo mode and tests.

mod fixture;
mod http;

use std::future::Future;

use crate::error::FetchError;
use crate::model::{AdminStats, CurrentUser, RecentItems};

pub use fixture::{CallCounts, FixtureRepository};
pub use http::HttpRepository;

/// Read access to the backend's admin surface. Every call is a single
/// idempotent read with no retry.
pub trait AdminRepository: Send + Sync {
    /// The signed-in user; `Ok(None)` when nobody is.
    fn current_user(&self) -> impl Future<Output = Result<Option<CurrentUser>, FetchError>> + Send;

    fn get_stats(&self) -> impl Future<Output = Result<AdminStats, FetchError>> + Send;

    fn get_recent_items(&self) -> impl Future<Output = Result<RecentItems, FetchError>> + Send;
}
