use super::*;
use crate::net::testing::FakeTransport;
use crate::state::session::SessionWatch;
use crate::util::session_hint::MemoryHint;
use futures::FutureExt as _;
use futures::StreamExt as _;
use futures::executor::block_on;

const LOGIN: &str = "/login/";
const LOGOUT: &str = "/logout/";
const REFRESH: &str = "/token/refresh/";
const VIDEOS: &str = "/video/";

type TestClient = ApiClient<FakeTransport, Rc<MemoryHint>>;

fn setup(hint: bool) -> (TestClient, FakeTransport, Rc<MemoryHint>) {
    let transport = FakeTransport::new();
    let hints = Rc::new(MemoryHint::new(hint));
    let client = ApiClient::new(transport.clone(), Rc::clone(&hints));
    (client, transport, hints)
}

/// Client past startup with no session.
fn started() -> (TestClient, FakeTransport, Rc<MemoryHint>) {
    let (client, transport, hints) = setup(false);
    block_on(client.start());
    (client, transport, hints)
}

fn drain(watch: &mut SessionWatch) -> Vec<bool> {
    let mut seen = Vec::new();
    while let Some(Some(value)) = watch.next().now_or_never() {
        seen.push(value);
    }
    seen
}

fn credentials() -> Credentials {
    Credentials { email: "viewer@example.com".to_owned(), password: "hunter22!".to_owned() }
}

// =============================================================
// Startup
// =============================================================

#[test]
fn start_without_hint_completes_logged_out_without_network() {
    let (client, transport, _) = setup(false);
    block_on(client.start());

    assert!(client.session().is_initial_check_complete());
    assert!(!client.session().is_logged_in());
    assert_eq!(transport.total_calls(), 0);
}

#[test]
fn start_with_hint_and_valid_refresh_logs_in() {
    let (client, transport, hints) = setup(true);
    transport.respond(REFRESH, 200, "{}");
    let mut check = client.session().observe_initial_check_complete();
    let mut login = client.session().observe_login_state();

    block_on(client.start());

    assert_eq!(drain(&mut check), vec![true]);
    assert_eq!(drain(&mut login), vec![true]);
    assert_eq!(transport.calls(REFRESH), 1);
    assert!(hints.was_logged_in());
}

#[test]
fn start_with_stale_hint_ends_logged_out_and_clears_hint() {
    let (client, transport, hints) = setup(true);
    transport.respond(REFRESH, 401, r#"{"detail":"Token is invalid or expired"}"#);

    block_on(client.start());

    assert!(client.session().is_initial_check_complete());
    assert!(!client.session().is_logged_in());
    assert!(!hints.was_logged_in());
}

#[test]
fn start_twice_checks_once() {
    let (client, transport, _) = setup(true);
    transport.always(REFRESH, 200, "{}");
    block_on(client.start());
    block_on(client.start());
    assert_eq!(transport.calls(REFRESH), 1);
}

// =============================================================
// Login / logout
// =============================================================

#[test]
fn login_success_emits_true_once_and_sets_hint() {
    let (client, transport, hints) = started();
    transport.respond(LOGIN, 200, r#"{"detail":"Login successful"}"#);
    let mut login = client.session().observe_login_state();
    assert_eq!(drain(&mut login), vec![false]);

    block_on(client.login(&credentials())).unwrap();

    assert_eq!(drain(&mut login), vec![true]);
    assert!(hints.was_logged_in());
    let sent = transport.last_request(LOGIN).unwrap();
    assert_eq!(sent.body, Some(serde_json::json!({"email": "viewer@example.com", "password": "hunter22!"})));
}

#[test]
fn login_rejection_returns_payload_and_keeps_state() {
    let (client, transport, hints) = started();
    transport.respond(LOGIN, 400, r#"{"detail":"Please check your input and try again."}"#);

    let err = block_on(client.login(&credentials())).unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert_eq!(err.user_message(), "Please check your input and try again.");
    assert!(!client.session().is_logged_in());
    assert!(!hints.was_logged_in());
}

#[test]
fn login_401_does_not_trigger_refresh() {
    let (client, transport, _) = started();
    transport.respond(LOGIN, 401, "{}");
    assert!(block_on(client.login(&credentials())).is_err());
    assert_eq!(transport.calls(REFRESH), 0);
}

#[test]
fn logout_success_clears_state_and_hint() {
    let (client, transport, hints) = started();
    transport.respond(LOGIN, 200, "{}").respond(LOGOUT, 200, "{}");
    block_on(client.login(&credentials())).unwrap();
    let mut login = client.session().observe_login_state();
    drain(&mut login);

    block_on(client.logout());

    assert_eq!(drain(&mut login), vec![false]);
    assert!(!hints.was_logged_in());
}

#[test]
fn logout_network_failure_still_logs_out() {
    let (client, transport, hints) = started();
    transport.respond(LOGIN, 200, "{}").fail(LOGOUT);
    block_on(client.login(&credentials())).unwrap();

    block_on(client.logout());

    assert!(!client.session().is_logged_in());
    assert!(!hints.was_logged_in());
}

#[test]
fn logout_server_error_still_logs_out() {
    let (client, transport, hints) = started();
    transport.respond(LOGIN, 200, "{}").respond(LOGOUT, 500, "");
    block_on(client.login(&credentials())).unwrap();

    block_on(client.logout());

    assert!(!client.session().is_logged_in());
    assert!(!hints.was_logged_in());
}

#[test]
fn login_during_startup_refresh_survives_stale_rejection() {
    let (client, transport, hints) = setup(true);
    transport.respond(REFRESH, 401, r#"{"detail":"Token is invalid or expired"}"#);
    transport.respond(LOGIN, 200, "{}");
    let release = transport.gate(REFRESH);
    let mut login = client.session().observe_login_state();

    let ((), result) = block_on(async {
        futures::join!(client.start(), async {
            let result = client.login(&credentials()).await;
            let _ = release.send(());
            result
        })
    });

    result.unwrap();
    assert!(client.session().is_initial_check_complete());
    assert!(client.session().is_logged_in());
    assert!(hints.was_logged_in());
    assert_eq!(drain(&mut login), vec![true]);
}

#[test]
fn logout_during_refresh_is_not_undone_by_late_success() {
    let (client, transport, hints) = started();
    transport.respond(LOGIN, 200, "{}").respond(LOGOUT, 200, "{}");
    block_on(client.login(&credentials())).unwrap();
    transport.respond(REFRESH, 200, "{}");
    let release = transport.gate(REFRESH);

    let (renewed, ()) = block_on(async {
        futures::join!(client.refresh(), async {
            client.logout().await;
            let _ = release.send(());
        })
    });

    assert!(!renewed);
    assert!(!client.session().is_logged_in());
    assert!(!hints.was_logged_in());
}

// =============================================================
// Refresh
// =============================================================

#[test]
fn refresh_failure_is_not_an_error() {
    let (client, transport, _) = started();
    transport.fail(REFRESH);
    assert!(!block_on(client.refresh()));
    assert!(!client.session().is_logged_in());
    assert!(!client.is_refreshing());
}

#[test]
fn concurrent_refresh_calls_share_one_request() {
    let (client, transport, _) = started();
    transport.always(REFRESH, 200, "{}");
    let release = transport.gate(REFRESH);

    let (a, b, ()) = block_on(async {
        futures::join!(client.refresh(), client.refresh(), async {
            let _ = release.send(());
        })
    });

    assert!(a && b);
    assert_eq!(transport.calls(REFRESH), 1);
}

// =============================================================
// 401 recovery
// =============================================================

#[test]
fn expired_token_is_refreshed_and_request_replayed() {
    let (client, transport, _) = started();
    transport.respond(VIDEOS, 401, "{}").respond(VIDEOS, 200, "[]");
    transport.respond(REFRESH, 200, "{}");

    let response = block_on(client.send(Endpoint::Videos.request())).unwrap();

    assert_eq!(response.body, "[]");
    assert_eq!(transport.calls(VIDEOS), 2);
    assert_eq!(transport.calls(REFRESH), 1);
    assert!(client.session().is_logged_in());
}

#[test]
fn replay_is_not_intercepted_again() {
    let (client, transport, _) = started();
    transport.always(VIDEOS, 401, "{}");
    transport.always(REFRESH, 200, "{}");

    let err = block_on(client.send(Endpoint::Videos.request())).unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(transport.calls(VIDEOS), 2);
    assert_eq!(transport.calls(REFRESH), 1);
}

#[test]
fn failed_refresh_forces_logout_and_returns_original_error() {
    let (client, transport, hints) = started();
    transport.respond(LOGIN, 200, "{}");
    block_on(client.login(&credentials())).unwrap();
    transport.respond(VIDEOS, 401, r#"{"detail":"Authentication credentials were not provided."}"#);
    transport.respond(REFRESH, 401, "{}");
    transport.respond(LOGOUT, 200, "{}");

    let err = block_on(client.send(Endpoint::Videos.request())).unwrap_err();

    assert_eq!(err.user_message(), "Authentication credentials were not provided.");
    assert_eq!(transport.calls(LOGOUT), 1);
    assert_eq!(transport.calls(VIDEOS), 1);
    assert!(!client.session().is_logged_in());
    assert!(!hints.was_logged_in());
}

#[test]
fn unrecoverable_request_401_propagates_immediately() {
    let (client, transport, _) = started();
    transport.respond(VIDEOS, 401, "{}");

    let err = block_on(client.send(Endpoint::Videos.request().without_recovery())).unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(transport.calls(REFRESH), 0);
}

#[test]
fn other_errors_are_not_intercepted() {
    let (client, transport, _) = started();
    transport.respond(VIDEOS, 403, r#"{"detail":"Forbidden"}"#);

    let err = block_on(client.send(Endpoint::Videos.request())).unwrap_err();

    assert_eq!(err.status(), Some(403));
    assert_eq!(transport.calls(REFRESH), 0);
}

#[test]
fn simultaneous_401s_issue_one_refresh() {
    let (client, transport, _) = started();
    transport.respond(VIDEOS, 401, "{}").respond(VIDEOS, 401, "{}");
    transport.always(VIDEOS, 200, "[]");
    transport.respond(REFRESH, 200, "{}");
    let release = transport.gate(REFRESH);

    let (a, b, ()) = block_on(async {
        futures::join!(
            client.send(Endpoint::Videos.request()),
            client.send(Endpoint::Videos.request()),
            async {
                let _ = release.send(());
            }
        )
    });

    assert!(a.is_ok() && b.is_ok());
    assert_eq!(transport.calls(REFRESH), 1);
    assert_eq!(transport.calls(VIDEOS), 4);
}

#[test]
fn simultaneous_401s_with_failed_refresh_log_out_once() {
    let (client, transport, _) = started();
    transport.respond(VIDEOS, 401, "{}").respond(VIDEOS, 401, "{}");
    transport.respond(REFRESH, 401, "{}");
    transport.always(LOGOUT, 200, "{}");
    let release = transport.gate(REFRESH);

    let (a, b, ()) = block_on(async {
        futures::join!(
            client.send(Endpoint::Videos.request()),
            client.send(Endpoint::Videos.request()),
            async {
                let _ = release.send(());
            }
        )
    });

    assert!(a.unwrap_err().is_unauthorized());
    assert!(b.unwrap_err().is_unauthorized());
    assert_eq!(transport.calls(REFRESH), 1);
    assert_eq!(transport.calls(LOGOUT), 1);
    assert!(!client.session().is_logged_in());
}
