// ── Actions ──
//
// Everything that can change application state. Each variant has a
// stable kind string (`"slice/event"`) used in logs.

use crate::error::FetchError;
use crate::model::{AdminStats, CurrentUser, RecentItems};

#[derive(Debug, Clone, PartialEq, Eq, strum::IntoStaticStr)]
pub enum Action {
    // ── Session ──────────────────────────────────────────────────────
    #[strum(serialize = "main/sessionRequested")]
    SessionRequested,
    /// `None` means nobody is signed in.
    #[strum(serialize = "main/sessionLoaded")]
    SessionLoaded(Option<CurrentUser>),
    #[strum(serialize = "main/sessionFailed")]
    SessionFailed(FetchError),

    // ── Admin stats ──────────────────────────────────────────────────
    #[strum(serialize = "admin/statsRequested")]
    StatsRequested,
    #[strum(serialize = "admin/statsFetched")]
    StatsFetched(AdminStats),
    #[strum(serialize = "admin/statsFailed")]
    StatsFailed(FetchError),

    // ── Recent items ─────────────────────────────────────────────────
    #[strum(serialize = "admin/recentItemsRequested")]
    RecentItemsRequested,
    #[strum(serialize = "admin/recentItemsFetched")]
    RecentItemsFetched(RecentItems),
    #[strum(serialize = "admin/recentItemsFailed")]
    RecentItemsFailed(FetchError),
}

impl Action {
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_strings_are_stable() {
        assert_eq!(
            Action::StatsFetched(AdminStats::default()).kind(),
            "admin/statsFetched"
        );
        assert_eq!(
            Action::RecentItemsFetched(RecentItems::default()).kind(),
            "admin/recentItemsFetched"
        );
        assert_eq!(Action::SessionLoaded(None).kind(), "main/sessionLoaded");
    }
}
