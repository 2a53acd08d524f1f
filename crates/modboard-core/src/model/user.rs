use serde::{Deserialize, Serialize};

use super::ItemId;

/// The signed-in user behind the session cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: ItemId,
    pub username: String,
    pub is_admin: bool,
}
