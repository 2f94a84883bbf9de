//! Roles and the static role to rights table.
//!
//! Every authenticated user carries exactly one `Role`. Route handlers ask the
//! `AuthGuard` for one or more `Right`s, and access is granted when the caller's
//! role lists all of them.

use std::fmt;
use std::str::FromStr;

/// Role assigned to a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    Admin,
    Cook,
    /// Default role for self-registered accounts.
    #[default]
    Participant,
}

/// Named permission granted by a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Right {
    GetUsers,
    ManageUsers,
    ManageDishes,
    ManageIngredients,
    ManageEvents,
}

const ADMIN_RIGHTS: &[Right] = &[
    Right::GetUsers,
    Right::ManageUsers,
    Right::ManageIngredients,
    Right::ManageEvents,
];

const COOK_RIGHTS: &[Right] = &[
    Right::ManageDishes,
    Right::ManageIngredients,
    Right::ManageEvents,
];

const PARTICIPANT_RIGHTS: &[Right] = &[];

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Cook, Role::Participant];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Cook => "cook",
            Role::Participant => "participant",
        }
    }

    /// Rights granted to this role.
    ///
    /// Admins do not get `manageDishes`.
    pub fn rights(&self) -> &'static [Right] {
        match self {
            Role::Admin => ADMIN_RIGHTS,
            Role::Cook => COOK_RIGHTS,
            Role::Participant => PARTICIPANT_RIGHTS,
        }
    }

    pub fn has_right(&self, right: Right) -> bool {
        self.rights().contains(&right)
    }

    /// Returns true when the role grants every right in `rights`.
    ///
    /// An empty slice is always satisfied.
    pub fn has_rights(&self, rights: &[Right]) -> bool {
        rights.iter().all(|right| self.has_right(*right))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| format!("Unknown role '{}'", s))
    }
}

impl Right {
    pub fn as_str(&self) -> &'static str {
        match self {
            Right::GetUsers => "getUsers",
            Right::ManageUsers => "manageUsers",
            Right::ManageDishes => "manageDishes",
            Right::ManageIngredients => "manageIngredients",
            Right::ManageEvents => "manageEvents",
        }
    }
}

impl fmt::Display for Right {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_manages_users_but_not_dishes() {
        assert!(Role::Admin.has_right(Right::GetUsers));
        assert!(Role::Admin.has_right(Right::ManageUsers));
        assert!(Role::Admin.has_right(Right::ManageIngredients));
        assert!(!Role::Admin.has_right(Right::ManageDishes));
    }

    #[test]
    fn cook_manages_recipes_but_not_users() {
        assert!(Role::Cook.has_rights(&[Right::ManageDishes, Right::ManageIngredients]));
        assert!(!Role::Cook.has_right(Right::GetUsers));
    }

    #[test]
    fn participant_has_no_rights() {
        assert!(Role::Participant.rights().is_empty());
        assert!(Role::Participant.has_rights(&[]));
        assert!(!Role::Participant.has_rights(&[Right::ManageEvents]));
    }

    #[test]
    fn parses_role_names() {
        assert_eq!("cook".parse::<Role>(), Ok(Role::Cook));
        assert_eq!(Role::Admin.to_string(), "admin");
        assert!("chef".parse::<Role>().is_err());
    }
}
