//! Registered accounts.
//!
//! The directory answers login lookups and registration uniqueness checks.
//! Usernames are compared ignoring case.

use tracing::{debug, info};

use crate::auth::account::{Account, Role};
use crate::auth::error::AuthError;
use crate::auth::validation::{validate_login, validate_registration};
use crate::datetime::{self, IdSequence};

/// In-memory directory of registered accounts.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    accounts: Vec<Account>,
    ids: IdSequence,
    timezone: String,
}

impl UserDirectory {
    /// Create a directory seeded with a single administrator account.
    ///
    /// # Arguments
    ///
    /// * `admin_username` - Username of the seeded administrator
    /// * `timezone` - Timezone used for registration date labels
    pub fn new(admin_username: &str, timezone: &str) -> Self {
        let mut directory = Self {
            accounts: Vec::new(),
            ids: IdSequence::new(),
            timezone: timezone.to_string(),
        };
        directory.insert(admin_username.trim(), Role::Admin);
        directory
    }

    fn insert(&mut self, username: &str, role: Role) -> Account {
        let account = Account {
            id: self.ids.next_id(),
            username: username.to_string(),
            role,
            registered_at: datetime::today_label(&self.timezone),
        };
        self.accounts.push(account.clone());
        account
    }

    /// Register a new account with role `User`.
    ///
    /// This function:
    /// 1. Validates the input (first failure wins)
    /// 2. Checks the username is not taken, ignoring case
    /// 3. Appends the account
    ///
    /// The password is validated but not stored.
    pub fn register(
        &mut self,
        username: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<Account, AuthError> {
        validate_registration(username, password, confirm_password)?;

        let username = username.trim();
        if self.username_exists(username) {
            debug!(username = %username, "Registration rejected: username taken");
            return Err(AuthError::UsernameTaken);
        }

        let account = self.insert(username, Role::User);

        info!(
            username = %account.username,
            user_id = account.id,
            "New user registered"
        );

        Ok(account)
    }

    /// Look up an account for login.
    ///
    /// Only the username is checked; the password must merely be non-empty.
    pub fn login(&self, username: &str, password: &str) -> Result<Account, AuthError> {
        validate_login(username, password)?;

        match self.find_by_username(username) {
            Some(account) => Ok(account.clone()),
            None => {
                debug!(username = %username.trim(), "Login rejected: user not found");
                Err(AuthError::UserNotFound)
            }
        }
    }

    /// Find an account by username, ignoring case and surrounding whitespace.
    pub fn find_by_username(&self, username: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.matches_username(username))
    }

    /// Check if a username is already registered.
    pub fn username_exists(&self, username: &str) -> bool {
        self.find_by_username(username).is_some()
    }

    /// Get an account by ID.
    pub fn get(&self, id: i64) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    /// All accounts in registration order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Number of registered accounts.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Check if the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
