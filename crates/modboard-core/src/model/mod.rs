// ── Domain model ──
//
// What the rest of the workspace sees of the backend. Wire types from
// `modboard_api` are converted into these in `convert.rs`.

pub mod admin;
pub mod item_id;
pub mod user;

pub use admin::{AdminStats, RecentComment, RecentItems, RecentPost, RecentUser};
pub use item_id::ItemId;
pub use user::CurrentUser;
