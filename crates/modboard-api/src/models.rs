// Wire types for the admin endpoints.
//
// These mirror the backend's JSON exactly (camelCase). `modboard-core`
// converts them into its own domain model; nothing above the core
// crate should need these.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier as the backend sends it: a number on some deployments,
/// an opaque (hex) string on others.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Number(u64),
    Text(String),
}

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// `GET /api/_user`
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: WireId,
    pub username: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// `GET /api/admin/stats`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct StatsResponse {
    pub users: u64,
    pub posts: u64,
    pub comments: u64,
}

/// `GET /api/admin/recent`
///
/// A missing list is read as empty; entries keep response order.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RecentResponse {
    #[serde(default)]
    pub users: Vec<RecentUserResponse>,
    #[serde(default)]
    pub posts: Vec<RecentPostResponse>,
    #[serde(default)]
    pub comments: Vec<RecentCommentResponse>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecentUserResponse {
    pub id: WireId,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecentPostResponse {
    pub id: WireId,
    pub title: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecentCommentResponse {
    pub id: WireId,
    pub content: String,
}

/// Error body the backend attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
