//! Client-side form validation.
//!
//! Errors are static strings rendered inline under the form; a form that
//! fails here never reaches the network.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

pub const MIN_PASSWORD_LEN: usize = 8;

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter your email address.");
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err("Enter a valid email address."),
    }
}

pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    Ok(())
}

pub fn validate_login_input(email: &str, password: &str) -> Result<(), &'static str> {
    validate_email(email)?;
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok(())
}

pub fn validate_registration(email: &str, password: &str, confirmed: &str) -> Result<(), &'static str> {
    validate_email(email)?;
    validate_new_password(password, confirmed)
}

pub fn validate_new_password(password: &str, confirmed: &str) -> Result<(), &'static str> {
    validate_password(password)?;
    if password != confirmed {
        return Err("Passwords do not match.");
    }
    Ok(())
}
