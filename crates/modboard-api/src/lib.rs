// modboard-api: Async Rust client for the forum backend's admin endpoints

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

mod admin;
mod session;

pub use client::AdminClient;
pub use error::Error;
pub use models::{
    RecentCommentResponse, RecentPostResponse, RecentResponse, RecentUserResponse, StatsResponse,
    UserResponse, WireId,
};
pub use transport::{SESSION_COOKIE, TlsMode, TransportConfig};
