use super::*;

// =============================================================
// validate_credentials
// =============================================================

#[test]
fn validate_credentials_trims_email() {
    assert_eq!(
        validate_credentials("  user@example.com  ", "hunter22"),
        Ok(("user@example.com".to_owned(), "hunter22".to_owned()))
    );
}

#[test]
fn validate_credentials_requires_email() {
    assert_eq!(validate_credentials("   ", "hunter22"), Err("Enter your email."));
}

#[test]
fn validate_credentials_rejects_malformed_email() {
    for bad in [
        "user",
        "@example.com",
        "user@example",
        "user@example.",
        "a@.com",
        "a@b@c.com",
        "a@b..com",
        "a b@c.com",
    ] {
        assert_eq!(validate_credentials(bad, "hunter22"), Err("Enter a valid email address."), "{bad}");
    }
}

#[test]
fn validate_credentials_accepts_subdomains() {
    assert!(validate_credentials("first.last@mail.example.co.uk", "hunter22").is_ok());
}

#[test]
fn validate_credentials_password_length() {
    assert_eq!(validate_credentials("a@b.co", "12345"), Err("Password must be at least 6 characters."));
    assert!(validate_credentials("a@b.co", "123456").is_ok());
}

#[test]
fn validate_credentials_keeps_password_whitespace() {
    assert_eq!(validate_credentials("a@b.co", " pass word "), Ok(("a@b.co".to_owned(), " pass word ".to_owned())));
}

// =============================================================
// AuthMode
// =============================================================

#[test]
fn auth_mode_switches_back_and_forth() {
    assert_eq!(AuthMode::default(), AuthMode::SignIn);
    assert_eq!(AuthMode::SignIn.other(), AuthMode::SignUp);
    assert_eq!(AuthMode::SignUp.other(), AuthMode::SignIn);
}

#[test]
fn auth_mode_labels() {
    assert_eq!(AuthMode::SignIn.submit_label(), "Sign in");
    assert_eq!(AuthMode::SignUp.submit_label(), "Create account");
    assert!(AuthMode::SignIn.switch_prompt().contains("Sign up"));
}
