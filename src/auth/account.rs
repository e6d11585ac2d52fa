//! Account model for the forum.
//!
//! This module defines the Account struct and Role enum.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Account role for permission management.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular registered user.
    #[default]
    User,
    /// Forum administrator.
    Admin,
}

impl Role {
    /// Convert role to its string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    /// Message key of the localized role name.
    pub fn message_key(&self) -> &'static str {
        match self {
            Role::User => "role.user",
            Role::Admin => "role.admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("unknown role: {s}")),
        }
    }
}

/// A registered forum account.
///
/// Accounts never change after registration and are never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    /// Unique account ID.
    pub id: i64,
    /// Display and login name, unique ignoring case.
    pub username: String,
    /// Account role.
    pub role: Role,
    /// Registration date label (`dd.mm.yyyy`).
    pub registered_at: String,
}

impl Account {
    /// Check if this account is an administrator.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Case-insensitive username comparison.
    pub fn matches_username(&self, username: &str) -> bool {
        self.username.to_lowercase() == username.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(username: &str, role: Role) -> Account {
        Account {
            id: 1,
            username: username.to_string(),
            role,
            registered_at: "17.02.2026".to_string(),
        }
    }

    #[test]
    fn test_role_as_str_roundtrip() {
        for role in [Role::User, Role::Admin] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
        assert!("moderator".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_default_and_order() {
        assert_eq!(Role::default(), Role::User);
        assert!(Role::Admin > Role::User);
        assert_eq!(Role::Admin.to_string(), "admin");
    }

    #[test]
    fn test_role_message_keys_resolve() {
        let i18n = crate::i18n::I18n::builtin("en").unwrap();
        assert_eq!(Role::User.message_key(), "role.user");
        assert_eq!(i18n.t(Role::Admin.message_key()), "Administrator");
    }

    #[test]
    fn test_is_admin() {
        assert!(account("Admin", Role::Admin).is_admin());
        assert!(!account("Hero", Role::User).is_admin());
    }

    #[test]
    fn test_matches_username_ignores_case() {
        let hero = account("Hero", Role::User);
        assert!(hero.matches_username("hero"));
        assert!(hero.matches_username("  HERO "));
        assert!(!hero.matches_username("Heroine"));
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&Role::Admin).unwrap();
        assert_eq!(json, "\"admin\"");
    }
}
