// ── Admin dashboard data ──

use serde::{Deserialize, Serialize};

use super::ItemId;

/// Site-wide totals. Replaced wholesale on every fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminStats {
    pub users: u64,
    pub posts: u64,
    pub comments: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentUser {
    pub id: ItemId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentPost {
    pub id: ItemId,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentComment {
    pub id: ItemId,
    pub content: String,
}

/// The three recent-entity lists, in the order the backend returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentItems {
    pub users: Vec<RecentUser>,
    pub posts: Vec<RecentPost>,
    pub comments: Vec<RecentComment>,
}
