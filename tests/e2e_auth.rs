//! E2E authentication tests.
//!
//! Tests registration, login, logout and the admin-mode flag.

mod common;

use common::{strict_forum, test_forum, ADMIN_USERNAME};
use gameforum::{AuthError, ErrorKind, ForumError, Role, ValidationError};

#[test]
fn test_seeded_admin_login_with_any_password() {
    let mut forum = test_forum();

    for password in ["x", "wrong", "correct horse"] {
        let account = forum.login(ADMIN_USERNAME, password).unwrap();
        assert_eq!(account.role, Role::Admin);
        forum.logout();
    }
}

#[test]
fn test_login_case_insensitive() {
    let mut forum = test_forum();
    let account = forum.login("admin_seed", "x").unwrap();
    assert_eq!(account.username, ADMIN_USERNAME);
}

#[test]
fn test_login_unknown_user() {
    let mut forum = test_forum();
    let err = forum.login("nonexistent", "x").unwrap_err();
    assert!(matches!(err, ForumError::Auth(AuthError::UserNotFound)));
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(forum.session().current_identity().is_none());
}

#[test]
fn test_login_missing_fields() {
    let mut forum = test_forum();
    let err = forum.login(ADMIN_USERNAME, "   ").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn test_register_duplicate_leaves_directory_unchanged() {
    let mut forum = test_forum();
    forum.register("Hero", "1234", "1234").unwrap();
    let before = forum.directory().accounts().to_vec();

    for name in ["Hero", "hero", "HERO", " hErO "] {
        let err = forum.register(name, "abcd", "abcd").unwrap_err();
        assert!(matches!(err, ForumError::Auth(AuthError::UsernameTaken)));
        assert_eq!(err.kind(), ErrorKind::Conflict);
    }

    assert_eq!(forum.directory().accounts(), before.as_slice());
}

#[test]
fn test_register_validation_order() {
    let mut forum = test_forum();

    let cases = [
        (("", "1234", "1234"), ValidationError::MissingFields),
        (("Hero", "1234", "123"), ValidationError::PasswordMismatch),
        (("He", "1234", "1234"), ValidationError::UsernameTooShort),
        (("Hero", "123", "123"), ValidationError::PasswordTooShort),
    ];

    for ((username, password, confirm), expected) in cases {
        let err = forum.register(username, password, confirm).unwrap_err();
        assert!(
            matches!(err, ForumError::Auth(AuthError::Validation(v)) if v == expected),
            "expected {expected:?} for {username:?}"
        );
    }
    assert_eq!(forum.directory().len(), 1);
}

#[test]
fn test_register_creates_user_role() {
    let mut forum = test_forum();
    let account = forum.register("Hero", "1234", "1234").unwrap();
    assert_eq!(account.role, Role::User);
    assert_eq!(forum.session().current_identity(), Some(&account));
    assert!(!forum.session().is_admin_mode_enabled());
}

#[test]
fn test_admin_login_then_logout() {
    let mut forum = test_forum();
    forum.login(ADMIN_USERNAME, "x").unwrap();
    assert!(forum.session().is_admin_mode_enabled());

    forum.logout();
    assert!(forum.session().current_identity().is_none());
    assert!(!forum.session().is_admin_mode_enabled());
}

#[test]
fn test_user_login_keeps_admin_mode() {
    let mut forum = test_forum();
    forum.register("Hero", "1234", "1234").unwrap();
    forum.logout();

    forum.login(ADMIN_USERNAME, "x").unwrap();
    forum.login("Hero", "x").unwrap();
    assert!(forum.session().is_admin_mode_enabled());
}

#[test]
fn test_anonymous_may_toggle_admin_mode() {
    let mut forum = test_forum();
    assert!(forum.toggle_admin_mode().unwrap());
    assert!(forum.is_admin_view());
    assert!(!forum.toggle_admin_mode().unwrap());
}

#[test]
fn test_strict_policy_gates_toggle() {
    let mut forum = strict_forum();
    let err = forum.toggle_admin_mode().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Permission);

    forum.register("Hero", "1234", "1234").unwrap();
    assert!(forum.toggle_admin_mode().is_err());
    assert!(!forum.is_admin_view());

    forum.login(ADMIN_USERNAME, "x").unwrap();
    assert!(forum.is_admin_view());
    assert!(!forum.toggle_admin_mode().unwrap());
}
