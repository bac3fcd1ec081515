//! Integration tests for client construction and session configuration.
//!
//! These tests verify that constructing a client is a purely local
//! operation, that session options round-trip unmodified, and that
//! resource accessors stay bound to the client that created them.

use std::time::Duration;

use moip::{
    build_user_agent, AccessToken, ApiKey, ApiToken, BasicAuth, Endpoint, Moip, OAuth, OsInfo,
};

fn basic_auth() -> BasicAuth {
    BasicAuth::new(
        ApiToken::new("01010101010101010101010101010101").unwrap(),
        ApiKey::new("ABABABABABABABABABABABABABABABABABABABAB").unwrap(),
    )
}

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_construction_is_local_only() {
    // No server exists at this endpoint; construction must still succeed
    // because it performs no network call.
    let moip = Moip::with_endpoint(basic_auth(), Endpoint::custom("http://127.0.0.1:1"));

    assert_eq!(moip.endpoint().host(), "http://127.0.0.1:1");
}

#[test]
fn test_new_defaults_to_production() {
    let moip = Moip::new(basic_auth());

    assert_eq!(moip.endpoint(), &Endpoint::Production);
    assert_eq!(moip.endpoint().host(), "api.moip.com.br");
}

#[test]
fn test_sandbox_endpoint_reports_sandbox_host() {
    let moip = Moip::with_endpoint(basic_auth(), Endpoint::Sandbox);

    assert_eq!(moip.endpoint().host(), "sandbox.moip.com.br");
}

#[test]
fn test_oauth_client_constructs() {
    let moip = Moip::new(OAuth::new(AccessToken::new("76q2z0g").unwrap()));

    assert_eq!(moip.endpoint(), &Endpoint::Production);
}

#[test]
fn test_client_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Moip>();
}

// ============================================================================
// Session Configuration Tests
// ============================================================================

#[test]
fn test_initial_session_uses_thirty_second_defaults() {
    let moip = Moip::new(basic_auth());

    assert_eq!(moip.session().options().timeout, Duration::from_secs(30));
    assert_eq!(
        moip.session().options().connect_timeout,
        Duration::from_secs(30)
    );
}

#[test]
fn test_create_new_session_round_trips_timeouts() {
    let mut moip = Moip::new(basic_auth());

    for (timeout, connect_timeout) in [
        (Duration::ZERO, Duration::ZERO),
        (Duration::from_millis(10), Duration::from_millis(250)),
        (Duration::from_secs(90), Duration::from_secs(5)),
    ] {
        moip.create_new_session(timeout, connect_timeout);

        assert_eq!(moip.session().options().timeout, timeout);
        assert_eq!(moip.session().options().connect_timeout, connect_timeout);
    }
}

#[test]
fn test_session_user_agent_contains_identity_tokens() {
    let moip = Moip::new(basic_auth());
    let user_agent = &moip.session().options().user_agent;

    assert!(user_agent.contains("MoipRustSDK/"));
    assert!(user_agent.contains("Rust/"));
    assert!(user_agent.starts_with("Mozilla/4.0 (compatible; "));
}

#[test]
fn test_user_agent_tokens_survive_degraded_form() {
    let os = OsInfo {
        sysname: "linux".to_string(),
        machine: "x86_64".to_string(),
    };

    let full = build_user_agent("MoipRustSDK/0.1.0", "1.70", Some(&os), "en_US.UTF-8");
    let degraded = build_user_agent("MoipRustSDK/0.1.0", "1.70", None, "en_US.UTF-8");

    for ua in [&full, &degraded] {
        assert!(ua.contains("MoipRustSDK/0.1.0"));
        assert!(ua.contains("Rust/1.70"));
    }
    assert!(full.contains("x86_64"));
    assert!(!degraded.contains("x86_64"));
}

// ============================================================================
// Resource Factory Tests
// ============================================================================

#[test]
fn test_factories_bind_to_the_creating_client() {
    let moip = Moip::with_endpoint(basic_auth(), Endpoint::Sandbox);

    assert!(std::ptr::eq(moip.customers().client(), &moip));
    assert!(std::ptr::eq(moip.orders().client(), &moip));
    assert!(std::ptr::eq(moip.payments().client(), &moip));
    assert!(std::ptr::eq(moip.multiorders().client(), &moip));
    assert!(std::ptr::eq(moip.entries().client(), &moip));
}

#[test]
fn test_factories_return_fresh_instances() {
    let moip = Moip::new(basic_auth());

    // Accessors are ephemeral values; two calls give independent copies
    // bound to the same client.
    let a = moip.customers();
    let b = moip.customers();

    assert!(std::ptr::eq(a.client(), b.client()));
}
