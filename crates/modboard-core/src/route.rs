//! Admin sub-routes and path resolution.

use std::fmt;

/// Path of the admin shell itself.
pub const ADMIN_ROOT: &str = "/admin";

/// Sidebar entries, navigable by number keys 1-5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AdminRoute {
    #[default]
    Dashboard, // 1
    Analytics, // 2
    Users,     // 3
    Posts,     // 4
    Comments,  // 5
}

/// What the content area shows for a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    NotFound,
}

impl AdminRoute {
    /// All entries in sidebar order.
    pub const ALL: [AdminRoute; 5] = [
        Self::Dashboard,
        Self::Analytics,
        Self::Users,
        Self::Posts,
        Self::Comments,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => ADMIN_ROOT,
            Self::Analytics => "/admin/analytics",
            Self::Users => "/admin/users",
            Self::Posts => "/admin/posts",
            Self::Comments => "/admin/comments",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Analytics => "Analytics",
            Self::Users => "Users",
            Self::Posts => "Posts",
            Self::Comments => "Comments",
        }
    }

    /// Numeric key (1-5) for this entry.
    pub fn number(self) -> u8 {
        match self {
            Self::Dashboard => 1,
            Self::Analytics => 2,
            Self::Users => 3,
            Self::Posts => 4,
            Self::Comments => 5,
        }
    }

    /// Entry from a numeric key (1-5). Returns None for out-of-range.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Dashboard),
            2 => Some(Self::Analytics),
            3 => Some(Self::Users),
            4 => Some(Self::Posts),
            5 => Some(Self::Comments),
            _ => None,
        }
    }

    /// The entry whose path is exactly `path`, if any.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = normalize(path);
        Self::ALL.into_iter().find(|r| r.path() == path)
    }

    /// Next entry in sidebar order (wraps around).
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&r| r == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous entry in sidebar order (wraps around).
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|&r| r == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Highlighted when the current path equals this entry's path.
    pub fn is_active(self, path: &str) -> bool {
        normalize(path) == self.path()
    }
}

impl fmt::Display for AdminRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Map a path to its view. Only the exact admin root has content; every
/// child (including the sidebar's own targets) and anything outside
/// `/admin` is not found.
pub fn resolve(path: &str) -> View {
    if normalize(path) == ADMIN_ROOT {
        View::Dashboard
    } else {
        View::NotFound
    }
}

/// Strip trailing slashes, keeping a bare `/`.
fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}
