use super::*;

#[test]
fn email_needs_text_around_at() {
    assert!(validate_email("viewer@example.com").is_ok());
    assert!(validate_email("  viewer@example.com ").is_ok());
    assert_eq!(validate_email(""), Err("Enter your email address."));
    for bad in ["viewer", "@example.com", "viewer@", "   "] {
        assert!(validate_email(bad).is_err(), "{bad}");
    }
}

#[test]
fn password_minimum_counts_characters() {
    assert!(validate_password("12345678").is_ok());
    assert!(validate_password("1234567").is_err());
    assert!(validate_password("ééééééé").is_err());
}

#[test]
fn login_requires_password_but_not_length() {
    assert!(validate_login_input("a@b", "x").is_ok());
    assert_eq!(validate_login_input("a@b", ""), Err("Enter your password."));
    assert!(validate_login_input("nope", "secret").is_err());
}

#[test]
fn registration_checks_each_field_in_order() {
    assert!(validate_registration("a@b", "longenough", "longenough").is_ok());
    assert_eq!(validate_registration("bad", "short", "other"), Err("Enter a valid email address."));
    assert_eq!(validate_registration("a@b", "short", "short"), Err("Password must be at least 8 characters."));
    assert_eq!(validate_registration("a@b", "longenough", "longenougg"), Err("Passwords do not match."));
}

#[test]
fn new_password_must_match() {
    assert!(validate_new_password("correct horse", "correct horse").is_ok());
    assert_eq!(validate_new_password("correct horse", "correct house"), Err("Passwords do not match."));
}
