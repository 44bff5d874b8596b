use super::*;

#[test]
fn paths_match_backend_routes() {
    assert_eq!(Endpoint::Register.path(), "/register/");
    assert_eq!(Endpoint::Login.path(), "/login/");
    assert_eq!(Endpoint::Logout.path(), "/logout/");
    assert_eq!(Endpoint::TokenRefresh.path(), "/token/refresh/");
    assert_eq!(Endpoint::PasswordReset.path(), "/password_reset/");
    assert_eq!(Endpoint::SetPassword.path(), "/set_password/");
    assert_eq!(Endpoint::Videos.path(), "/video/");
}

#[test]
fn password_confirm_embeds_uid_and_token() {
    let endpoint = Endpoint::PasswordConfirm { uid: "MQ", token: "c4x-9f2" };
    assert_eq!(endpoint.path(), "/password_confirm/MQ/c4x-9f2/");
}

#[test]
fn only_catalog_is_get() {
    assert_eq!(Endpoint::Videos.method(), Method::Get);
    assert_eq!(Endpoint::Login.method(), Method::Post);
    assert_eq!(Endpoint::TokenRefresh.method(), Method::Post);
}

#[test]
fn session_endpoints_never_recover() {
    for endpoint in [
        Endpoint::Register,
        Endpoint::Login,
        Endpoint::Logout,
        Endpoint::TokenRefresh,
        Endpoint::PasswordReset,
        Endpoint::PasswordConfirm { uid: "u", token: "t" },
    ] {
        assert!(!endpoint.request().recover_on_unauthorized, "{endpoint:?}");
    }
}

#[test]
fn protected_endpoints_recover() {
    assert!(Endpoint::Videos.request().recover_on_unauthorized);
    assert!(Endpoint::SetPassword.request().recover_on_unauthorized);
}
