//! Session state for the forum.
//!
//! A session holds at most one authenticated identity and an admin-mode
//! flag that is tracked separately from the identity's role.

use tracing::{debug, info};

use crate::auth::account::Account;
use crate::auth::error::AuthError;

/// Who may toggle admin mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminModePolicy {
    /// Any caller may flip admin mode, authenticated or not.
    #[default]
    Open,
    /// Only an authenticated administrator may flip admin mode.
    Strict,
}

impl AdminModePolicy {
    /// Build the policy from the `strict_admin_mode` config switch.
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            AdminModePolicy::Strict
        } else {
            AdminModePolicy::Open
        }
    }
}

/// Tracks the current identity and the admin-mode flag.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    identity: Option<Account>,
    admin_mode: bool,
    policy: AdminModePolicy,
}

impl SessionManager {
    /// Create an anonymous session with the open admin-mode policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an anonymous session with the given admin-mode policy.
    pub fn with_policy(policy: AdminModePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Set the current identity.
    ///
    /// Authenticating an administrator switches admin mode on. Authenticating
    /// a regular user leaves admin mode as it was.
    pub fn authenticate(&mut self, account: Account) {
        if account.is_admin() {
            self.admin_mode = true;
        }

        info!(
            username = %account.username,
            user_id = account.id,
            role = %account.role,
            admin_mode = self.admin_mode,
            "User authenticated"
        );

        self.identity = Some(account);
    }

    /// Flip admin mode and return the new value.
    ///
    /// Under [`AdminModePolicy::Strict`] the caller must be an authenticated
    /// administrator; otherwise the flag is left untouched.
    pub fn toggle_admin_mode(&mut self) -> Result<bool, AuthError> {
        if self.policy == AdminModePolicy::Strict
            && !self.identity.as_ref().is_some_and(Account::is_admin)
        {
            debug!("Admin mode toggle rejected: administrator identity required");
            return Err(AuthError::AdminRequired);
        }

        self.admin_mode = !self.admin_mode;
        info!(admin_mode = self.admin_mode, "Admin mode toggled");
        Ok(self.admin_mode)
    }

    /// Clear the identity and switch admin mode off.
    pub fn logout(&mut self) {
        if let Some(account) = self.identity.take() {
            info!(username = %account.username, user_id = account.id, "User logged out");
        }
        self.admin_mode = false;
    }

    /// The currently authenticated account, if any.
    pub fn current_identity(&self) -> Option<&Account> {
        self.identity.as_ref()
    }

    /// Check if someone is authenticated.
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Check if admin mode is on.
    pub fn is_admin_mode_enabled(&self) -> bool {
        self.admin_mode
    }

    /// The admin-mode policy in effect.
    pub fn policy(&self) -> AdminModePolicy {
        self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::account::Role;

    fn account(id: i64, username: &str, role: Role) -> Account {
        Account {
            id,
            username: username.to_string(),
            role,
            registered_at: "01.01.2026".to_string(),
        }
    }

    #[test]
    fn test_new_session_is_anonymous() {
        let session = SessionManager::new();
        assert!(session.current_identity().is_none());
        assert!(!session.is_authenticated());
        assert!(!session.is_admin_mode_enabled());
        assert_eq!(session.policy(), AdminModePolicy::Open);
    }

    #[test]
    fn test_authenticate_admin_enables_admin_mode() {
        let mut session = SessionManager::new();
        session.authenticate(account(1, "Admin", Role::Admin));
        assert!(session.is_admin_mode_enabled());
        assert_eq!(session.current_identity().unwrap().username, "Admin");
    }

    #[test]
    fn test_authenticate_user_keeps_admin_mode() {
        let mut session = SessionManager::new();
        session.authenticate(account(1, "Admin", Role::Admin));
        session.authenticate(account(2, "Hero", Role::User));

        assert!(session.is_admin_mode_enabled());
        assert_eq!(session.current_identity().unwrap().username, "Hero");
    }

    #[test]
    fn test_authenticate_user_does_not_enable_admin_mode() {
        let mut session = SessionManager::new();
        session.authenticate(account(2, "Hero", Role::User));
        assert!(!session.is_admin_mode_enabled());
    }

    #[test]
    fn test_open_toggle_by_anonymous() {
        let mut session = SessionManager::new();
        assert_eq!(session.toggle_admin_mode(), Ok(true));
        assert_eq!(session.toggle_admin_mode(), Ok(false));
    }

    #[test]
    fn test_logout_clears_everything() {
        let mut session = SessionManager::new();
        session.authenticate(account(1, "Admin", Role::Admin));
        session.logout();

        assert!(session.current_identity().is_none());
        assert!(!session.is_admin_mode_enabled());
    }

    #[test]
    fn test_logout_anonymous_clears_admin_mode() {
        let mut session = SessionManager::new();
        session.toggle_admin_mode().unwrap();
        session.logout();
        assert!(!session.is_admin_mode_enabled());
    }

    #[test]
    fn test_strict_toggle_rejects_non_admin() {
        let mut session = SessionManager::with_policy(AdminModePolicy::Strict);
        assert_eq!(session.toggle_admin_mode(), Err(AuthError::AdminRequired));

        session.authenticate(account(2, "Hero", Role::User));
        assert_eq!(session.toggle_admin_mode(), Err(AuthError::AdminRequired));
        assert!(!session.is_admin_mode_enabled());
    }

    #[test]
    fn test_strict_toggle_allows_admin() {
        let mut session = SessionManager::with_policy(AdminModePolicy::Strict);
        session.authenticate(account(1, "Admin", Role::Admin));
        assert_eq!(session.toggle_admin_mode(), Ok(false));
        assert_eq!(session.toggle_admin_mode(), Ok(true));
    }

    #[test]
    fn test_policy_from_strict() {
        assert_eq!(AdminModePolicy::from_strict(true), AdminModePolicy::Strict);
        assert_eq!(AdminModePolicy::from_strict(false), AdminModePolicy::Open);
    }
}
