//! Authentication module for the forum.
//!
//! This module provides the account directory, session state with the
//! admin-mode flag, and input validation for login and registration.

mod account;
mod directory;
mod error;
mod session;
pub mod validation;

pub use account::{Account, Role};
pub use directory::UserDirectory;
pub use error::AuthError;
pub use session::{AdminModePolicy, SessionManager};
pub use validation::ValidationError;
