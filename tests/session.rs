//! Session token decoding.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};

use marketboard::error::DashboardError;
use marketboard::session::Session;

fn jwt(claims: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims);
    format!("{header}.{payload}.c2lnbmF0dXJl")
}

fn ts(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap()
}

#[test]
fn decodes_identity_claims() {
    let token = jwt(r#"{"name":"Jordan Lee","sub":"jordan@example.com","exp":1767225600,"iat":1767139200}"#);
    let session = Session::from_token(token.clone()).unwrap();

    assert_eq!(session.token(), token);
    assert_eq!(session.user().name, "Jordan Lee");
    assert_eq!(session.user().sub, "jordan@example.com");
    assert_eq!(session.expires_at(), Some(ts(1_767_225_600)));
}

#[test]
fn missing_name_defaults_to_empty() {
    let session = Session::from_token(jwt(r#"{"sub":"a@b.c"}"#)).unwrap();
    assert_eq!(session.user().name, "");
    assert_eq!(session.expires_at(), None);
    assert!(!session.is_expired(ts(i64::from(i32::MAX))));
}

#[test]
fn expiry_is_inclusive() {
    let session = Session::from_token(jwt(r#"{"sub":"a@b.c","exp":1000}"#)).unwrap();
    assert!(!session.is_expired(ts(999)));
    assert!(session.is_expired(ts(1000)));
    assert!(session.is_expired(ts(1001)));
}

#[test]
fn padded_payload_is_accepted() {
    let header = URL_SAFE_NO_PAD.encode("{}");
    let payload = format!("{}==", URL_SAFE_NO_PAD.encode(r#"{"sub":"x"}"#));
    let session = Session::from_token(format!("{header}.{payload}.sig")).unwrap();
    assert_eq!(session.user().sub, "x");
}

#[test]
fn rejects_malformed_tokens() {
    let bad = [
        String::new(),
        "not-a-jwt".to_owned(),
        "a.b".to_owned(),
        "a..c".to_owned(),
        "a.b.c.d".to_owned(),
        "a.!!!.c".to_owned(),
        jwt("not json"),
        jwt(r#"{"name":"no subject"}"#),
    ];
    for token in bad {
        let err = Session::from_token(token.clone()).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidToken(_)), "{token}: {err}");
    }
}

#[test]
fn bearer_header_is_sensitive() {
    let token = jwt(r#"{"sub":"a@b.c"}"#);
    let session = Session::from_token(token.clone()).unwrap();
    let header = session.bearer_header().unwrap();

    assert!(header.is_sensitive());
    assert_eq!(header.to_str().unwrap(), format!("Bearer {token}"));
}

#[test]
fn debug_output_redacts_token() {
    let token = jwt(r#"{"sub":"a@b.c"}"#);
    let session = Session::from_token(token.clone()).unwrap();
    let debug = format!("{session:?}");

    assert!(!debug.contains(&token));
    assert!(debug.contains("<redacted>"));
    assert!(debug.contains("a@b.c"));
}
