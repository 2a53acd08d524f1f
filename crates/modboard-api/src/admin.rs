// Admin endpoints
//
// Both require an admin session; the backend answers 401/403 otherwise.

use tracing::debug;

use crate::client::AdminClient;
use crate::error::Error;
use crate::models::{RecentResponse, StatsResponse};

impl AdminClient {
    /// Site-wide totals.
    ///
    /// `GET /api/admin/stats`
    pub async fn get_stats(&self) -> Result<StatsResponse, Error> {
        let url = self.api_url("admin/stats")?;
        let stats: StatsResponse = self.get_json(url).await?;
        debug!(
            users = stats.users,
            posts = stats.posts,
            comments = stats.comments,
            "fetched stats"
        );
        Ok(stats)
    }

    /// Most recent users, posts, and comments, newest first.
    ///
    /// `GET /api/admin/recent`
    pub async fn get_recent(&self) -> Result<RecentResponse, Error> {
        let url = self.api_url("admin/recent")?;
        let recent: RecentResponse = self.get_json(url).await?;
        debug!(
            users = recent.users.len(),
            posts = recent.posts.len(),
            comments = recent.comments.len(),
            "fetched recent items"
        );
        Ok(recent)
    }
}
