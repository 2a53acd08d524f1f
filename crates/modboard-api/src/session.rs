// Session endpoint

use reqwest::StatusCode;
use tracing::debug;

use crate::client::AdminClient;
use crate::error::Error;
use crate::models::UserResponse;

impl AdminClient {
    /// The user the session cookie belongs to.
    ///
    /// `GET /api/_user`. An anonymous session (401) is `Ok(None)`,
    /// not an error.
    pub async fn current_user(&self) -> Result<Option<UserResponse>, Error> {
        let url = self.api_url("_user")?;
        let resp = self.get_raw(url).await?;

        if resp.status() == StatusCode::UNAUTHORIZED {
            debug!("no signed-in user");
            return Ok(None);
        }

        let user: UserResponse = self.decode(resp).await?;
        debug!(username = %user.username, is_admin = user.is_admin, "resolved session user");
        Ok(Some(user))
    }
}
