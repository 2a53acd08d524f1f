//! Content-area screens. The app picks one per frame from the access gate
//! and the current path.

pub mod dashboard;
pub mod forbidden;
pub mod not_found;

pub use dashboard::DashboardScreen;
pub use forbidden::ForbiddenScreen;
pub use not_found::NotFoundScreen;
