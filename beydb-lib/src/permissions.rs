//! What each role may do.

use beydb_core::Role;

use crate::Action;

/// Capability flags derived from a [`Role`].
///
/// Handlers are shared between both front ends and consult these flags
/// instead of checking the role directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permissions {
    /// Add parts and catalog Beyblades with caller-chosen ids.
    pub manage_catalog: bool,
    /// Record battles between any two users.
    pub record_battles: bool,
    /// Create accounts with the admin flag set.
    pub grant_admin: bool,
    /// List users, and view other users' collections and battles.
    pub view_other_users: bool,
}

impl Permissions {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => Self {
                manage_catalog: true,
                record_battles: true,
                grant_admin: true,
                view_other_users: true,
            },
            Role::Client => Self {
                manage_catalog: false,
                record_battles: false,
                grant_admin: false,
                view_other_users: false,
            },
        }
    }

    /// Whether an action may run under these permissions.
    pub fn allows(&self, action: Action) -> bool {
        match action {
            Action::AddPart | Action::AddBeyblade => self.manage_catalog,
            Action::AddBattle => self.record_battles,
            Action::ViewUsers | Action::ViewUserBeyblades | Action::UserBattles => {
                self.view_other_users
            }
            _ => true,
        }
    }
}
