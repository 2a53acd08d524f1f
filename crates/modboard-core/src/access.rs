// ── Access gate ──
//
// Decides whether the admin shell renders its navigation or the
// forbidden view. Evaluated on every render; nothing is cached.

use crate::model::CurrentUser;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    Forbidden,
}

impl Access {
    pub fn is_granted(self) -> bool {
        self == Self::Granted
    }
}

/// `Granted` only for a signed-in user carrying the admin flag.
///
/// No user (anonymous, or the session still loading) is `Forbidden`.
pub fn gate(user: Option<&CurrentUser>) -> Access {
    match user {
        Some(u) if u.is_admin => Access::Granted,
        _ => Access::Forbidden,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemId;

    fn user(is_admin: bool) -> CurrentUser {
        CurrentUser {
            id: ItemId::Numeric(1),
            username: "someone".into(),
            is_admin,
        }
    }

    #[test]
    fn admin_is_granted() {
        assert_eq!(gate(Some(&user(true))), Access::Granted);
    }

    #[test]
    fn regular_user_is_forbidden() {
        assert_eq!(gate(Some(&user(false))), Access::Forbidden);
    }

    #[test]
    fn nobody_is_forbidden() {
        assert!(!gate(None).is_granted());
    }
}
