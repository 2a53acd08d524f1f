// ── HTTP-backed repository ──

use tracing::warn;

use modboard_api::AdminClient;

use super::AdminRepository;
use crate::config::ServerConfig;
use crate::error::FetchError;
use crate::model::{AdminStats, CurrentUser, RecentItems};

#[derive(Debug, Clone)]
pub struct HttpRepository {
    client: AdminClient,
}

impl HttpRepository {
    pub fn new(config: &ServerConfig) -> Result<Self, modboard_api::Error> {
        let client = AdminClient::new(config.url.clone(), &config.transport())?;
        Ok(Self { client })
    }
}

impl AdminRepository for HttpRepository {
    async fn current_user(&self) -> Result<Option<CurrentUser>, FetchError> {
        let user = self.client.current_user().await.map_err(|e| {
            warn!(
                error = %e,
                status = ?e.status(),
                transient = e.is_transient(),
                "session lookup failed"
            );
            FetchError::from(e)
        })?;
        Ok(user.map(CurrentUser::from))
    }

    async fn get_stats(&self) -> Result<AdminStats, FetchError> {
        let stats = self.client.get_stats().await.map_err(|e| {
            warn!(
                error = %e,
                status = ?e.status(),
                transient = e.is_transient(),
                "stats fetch failed"
            );
            FetchError::from(e)
        })?;
        Ok(stats.into())
    }

    async fn get_recent_items(&self) -> Result<RecentItems, FetchError> {
        let recent = self.client.get_recent().await.map_err(|e| {
            warn!(
                error = %e,
                status = ?e.status(),
                transient = e.is_transient(),
                "recent items fetch failed"
            );
            FetchError::from(e)
        })?;
        Ok(recent.into())
    }
}
