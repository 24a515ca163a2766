use http::StatusCode;
use yggdrasil_core::ErrorKind;

/// Failed response as the authentication service sends it
pub struct Fixture {
    pub status: StatusCode,
    pub body: serde_json::Value,
    pub expected: ErrorKind,
}

impl Fixture {
    pub fn body_bytes(&self) -> Vec<u8> {
        serde_json::to_vec(&self.body).unwrap()
    }
}

/// One failed response per classifiable kind, shaped like real service output
pub fn upstream_failures() -> Vec<Fixture> {
    vec![
        Fixture {
            status: StatusCode::METHOD_NOT_ALLOWED,
            body: serde_json::json!({
                "error": "Method Not Allowed",
                "errorMessage": "The method specified in the request is not allowed for the resource identified by the request URI"
            }),
            expected: ErrorKind::MethodNotAllowed,
        },
        Fixture {
            status: StatusCode::NOT_FOUND,
            body: serde_json::json!({
                "error": "Not Found",
                "errorMessage": "The server has not found anything matching the request URI"
            }),
            expected: ErrorKind::NotFound,
        },
        Fixture {
            status: StatusCode::UNSUPPORTED_MEDIA_TYPE,
            body: serde_json::json!({
                "error": "Unsupported Media Type",
                "errorMessage": "The server is refusing to service the request because the entity of the request is in a format not supported"
            }),
            expected: ErrorKind::UnsupportedMediaType,
        },
        Fixture {
            status: StatusCode::GONE,
            body: serde_json::json!({
                "error": "ForbiddenOperationException",
                "errorMessage": "Invalid credentials. Account migrated, use email as username.",
                "cause": "UserMigratedException"
            }),
            expected: ErrorKind::UserMigrated,
        },
        Fixture {
            status: StatusCode::FORBIDDEN,
            body: serde_json::json!({
                "error": "ForbiddenOperationException",
                "errorMessage": "Invalid credentials. Invalid username or password."
            }),
            expected: ErrorKind::InvalidCredentials,
        },
        Fixture {
            status: StatusCode::FORBIDDEN,
            body: serde_json::json!({
                "error": "ForbiddenOperationException",
                "errorMessage": "Invalid credentials."
            }),
            expected: ErrorKind::RateLimited,
        },
        Fixture {
            status: StatusCode::FORBIDDEN,
            body: serde_json::json!({
                "error": "ForbiddenOperationException",
                "errorMessage": "Invalid token."
            }),
            expected: ErrorKind::InvalidToken,
        },
        Fixture {
            status: StatusCode::FORBIDDEN,
            body: serde_json::json!({
                "error": "ForbiddenOperationException",
                "errorMessage": "Forbidden"
            }),
            expected: ErrorKind::CredentialsMissing,
        },
        Fixture {
            status: StatusCode::BAD_REQUEST,
            body: serde_json::json!({
                "error": "IllegalArgumentException",
                "errorMessage": "Access token already has a profile assigned."
            }),
            expected: ErrorKind::AccessTokenHasProfile,
        },
        Fixture {
            status: StatusCode::BAD_REQUEST,
            body: serde_json::json!({
                "error": "IllegalArgumentException",
                "errorMessage": "Invalid salt version"
            }),
            expected: ErrorKind::InvalidSaltVersion,
        },
        Fixture {
            status: StatusCode::GONE,
            body: serde_json::json!({
                "error": "GoneException",
                "errorMessage": "Migrated"
            }),
            expected: ErrorKind::Gone,
        },
        Fixture {
            status: StatusCode::GONE,
            body: serde_json::json!({ "error": "ResourceException" }),
            expected: ErrorKind::Gone,
        },
        Fixture {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: serde_json::json!({
                "error": "SomethingNeverSeenBefore",
                "errorMessage": "???"
            }),
            expected: ErrorKind::Unknown,
        },
    ]
}
