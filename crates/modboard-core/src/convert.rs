// ── API-to-domain type conversions ──
//
// Bridges `modboard_api` response types into `modboard_core::model`.
// List order is preserved exactly; nothing is sorted or deduplicated.

use modboard_api::{
    RecentCommentResponse, RecentPostResponse, RecentResponse, RecentUserResponse, StatsResponse,
    UserResponse, WireId,
};

use crate::model::{
    AdminStats, CurrentUser, ItemId, RecentComment, RecentItems, RecentPost, RecentUser,
};

impl From<WireId> for ItemId {
    fn from(id: WireId) -> Self {
        match id {
            WireId::Number(n) => ItemId::Numeric(n),
            WireId::Text(s) => ItemId::Uid(s),
        }
    }
}

impl From<StatsResponse> for AdminStats {
    fn from(s: StatsResponse) -> Self {
        Self {
            users: s.users,
            posts: s.posts,
            comments: s.comments,
        }
    }
}

impl From<UserResponse> for CurrentUser {
    fn from(u: UserResponse) -> Self {
        Self {
            id: u.id.into(),
            username: u.username,
            is_admin: u.is_admin,
        }
    }
}

impl From<RecentUserResponse> for RecentUser {
    fn from(u: RecentUserResponse) -> Self {
        Self {
            id: u.id.into(),
            name: u.name,
        }
    }
}

impl From<RecentPostResponse> for RecentPost {
    fn from(p: RecentPostResponse) -> Self {
        Self {
            id: p.id.into(),
            title: p.title,
        }
    }
}

impl From<RecentCommentResponse> for RecentComment {
    fn from(c: RecentCommentResponse) -> Self {
        Self {
            id: c.id.into(),
            content: c.content,
        }
    }
}

impl From<RecentResponse> for RecentItems {
    fn from(r: RecentResponse) -> Self {
        Self {
            users: r.users.into_iter().map(Into::into).collect(),
            posts: r.posts.into_iter().map(Into::into).collect(),
            comments: r.comments.into_iter().map(Into::into).collect(),
        }
    }
}
