// modboard-core: State container and data access between modboard-api and consumers (CLI/TUI).

pub mod access;
pub mod config;
pub mod convert;
pub mod effects;
pub mod error;
pub mod model;
pub mod repository;
pub mod route;
pub mod store;
pub mod stream;

// ── Primary re-exports ──────────────────────────────────────────────
pub use access::{Access, gate};
pub use config::{ServerConfig, TlsVerification};
pub use error::{FetchError, FetchErrorKind};
pub use repository::{AdminRepository, CallCounts, FixtureRepository, HttpRepository};
pub use route::{AdminRoute, View};
pub use store::{Action, AdminState, AppState, Load, RequestsState, SessionState, Store};
pub use stream::StateStream;

pub use model::{
    AdminStats, CurrentUser, ItemId, RecentComment, RecentItems, RecentPost, RecentUser,
};
