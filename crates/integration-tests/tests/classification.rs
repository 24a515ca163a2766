mod harness;

use harness::upstream_failures;
use http::StatusCode;
use strum::IntoEnumIterator;
use yggdrasil_core::{ErrorKind, RawErrorBody, classify, is_internal};
use yggdrasil_display::{Locale, resolve};
use yggdrasil_response::AuthResponse;

#[test]
fn every_fixture_classifies_as_expected() {
    for fixture in upstream_failures() {
        let response = AuthResponse::<()>::from_error_body(fixture.status, &fixture.body_bytes());

        assert_eq!(
            response.error_kind(),
            Some(fixture.expected),
            "body {} misclassified",
            fixture.body
        );
        assert_eq!(response.is_internal(), Some(is_internal(fixture.expected)));
        assert_eq!(response.http_status(), Some(fixture.status));
    }
}

#[test]
fn fixtures_cover_every_classifiable_kind() {
    let fixtures = upstream_failures();

    for kind in ErrorKind::iter() {
        let covered = fixtures.iter().any(|f| f.expected == kind);
        let caller_only = matches!(kind, ErrorKind::NotPaid | ErrorKind::Unreachable);

        assert_eq!(covered, !caller_only, "{kind}");
    }
}

#[test]
fn cause_beats_message() {
    let body = br#"{"error":"ForbiddenOperationException","cause":"UserMigratedException","errorMessage":"anything"}"#;
    let response = AuthResponse::<()>::from_error_body(StatusCode::FORBIDDEN, body);

    assert_eq!(response.error_kind(), Some(ErrorKind::UserMigrated));
}

#[test]
fn unknown_error_degrades_to_generic_message() {
    let response = AuthResponse::<()>::from_error_body(
        StatusCode::INTERNAL_SERVER_ERROR,
        br#"{"error":"SomethingNeverSeenBefore"}"#,
    );

    assert_eq!(response.error_kind(), Some(ErrorKind::Unknown));
    assert_eq!(response.is_internal(), Some(false));

    let message = response.display_in(Locale::En).unwrap().unwrap();
    assert_eq!(message, resolve(ErrorKind::Unknown).unwrap());
    assert!(!message.description.contains("SomethingNeverSeenBefore"));
}

#[test]
fn not_found_is_internal() {
    let kind = classify(&RawErrorBody::new("Not Found", ""));

    assert_eq!(kind, ErrorKind::NotFound);
    assert!(is_internal(kind));
}

#[test]
fn resolve_after_classify_is_stable() {
    for fixture in upstream_failures() {
        let body: RawErrorBody = serde_json::from_value(fixture.body.clone()).unwrap();

        let first = resolve(classify(&body)).unwrap();
        let second = resolve(classify(&body)).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn classification_is_deterministic_for_every_fixture() {
    for fixture in upstream_failures() {
        let body: RawErrorBody = serde_json::from_value(fixture.body.clone()).unwrap();
        let first = classify(&body);

        assert_eq!(first, fixture.expected, "body {}", fixture.body);
        assert!(!matches!(first, ErrorKind::NotPaid | ErrorKind::Unreachable));

        for _ in 0..3 {
            assert_eq!(classify(&body), first);
            let response = AuthResponse::<()>::from_error_body(fixture.status, &fixture.body_bytes());
            assert_eq!(response.error_kind(), Some(first));
        }
    }
}

#[test]
fn array_bodies_are_not_read_by_position() {
    let response = AuthResponse::<()>::from_error_body(StatusCode::NOT_FOUND, br#"["Not Found"]"#);

    assert_eq!(response.error_kind(), Some(ErrorKind::Unknown));
    assert_eq!(response.is_internal(), Some(false));
    assert!(response.error_body().is_none());
}

#[test]
fn null_message_still_flags_internal_not_found() {
    let response =
        AuthResponse::<()>::from_error_body(StatusCode::NOT_FOUND, br#"{"error":"Not Found","errorMessage":null}"#);

    assert_eq!(response.error_kind(), Some(ErrorKind::NotFound));
    assert_eq!(response.is_internal(), Some(true));
}

#[test]
fn every_classified_failure_has_a_message_in_every_locale() {
    for fixture in upstream_failures() {
        let response = AuthResponse::<()>::from_error_body(fixture.status, &fixture.body_bytes());

        for locale in Locale::iter() {
            let message = response.display_in(locale).unwrap().unwrap();
            assert!(!message.title.is_empty());
            assert!(!message.description.is_empty());
        }
    }
}
