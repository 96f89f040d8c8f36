use super::*;
use crate::net::api::API_BASE;
use crate::resources::{ADD_GOAL, CLAIMS, LOGIN, PROGRESS};
use crate::util::validate::{EMPTY_CLAIM_MESSAGE, GoalForm, INVALID_DATE_MESSAGE};
use serde_json::json;

fn logged_in() -> Session {
    Session::from_token(Some("jwt.abc".to_owned()))
}

// =============================================================
// prepare
// =============================================================

#[test]
fn prepare_builds_encoded_query_for_claims() {
    let request = prepare(&CLAIMS, &Session::default(), &"vaccines cause autism".to_owned()).unwrap();
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.url, format!("{API_BASE}/check_claim?query=vaccines%20cause%20autism"));
    assert!(request.authorization.is_none());
    assert!(request.body.is_none());
}

#[test]
fn prepare_rejects_blank_query_without_request() {
    let err = prepare(&CLAIMS, &Session::default(), &"   ".to_owned()).unwrap_err();
    assert_eq!(err, ResourceError::Validation(EMPTY_CLAIM_MESSAGE.to_owned()));
}

#[test]
fn prepare_protected_resource_without_token_is_unauthorized() {
    let err = prepare(&PROGRESS, &Session::default(), &()).unwrap_err();
    assert_eq!(err, ResourceError::Unauthorized(UNAUTHORIZED_MESSAGE.to_owned()));
}

#[test]
fn prepare_protected_resource_attaches_bearer() {
    let request = prepare(&PROGRESS, &logged_in(), &()).unwrap();
    assert_eq!(request.authorization.as_deref(), Some("Bearer jwt.abc"));
    assert_eq!(request.url, format!("{API_BASE}/progress"));
}

#[test]
fn prepare_checks_authorization_before_validation() {
    let form = GoalForm::default();
    let err = prepare(&ADD_GOAL, &Session::default(), &form).unwrap_err();
    assert_eq!(err.kind(), "unauthorized");
}

#[test]
fn prepare_goal_validates_date_when_logged_in() {
    let form = GoalForm { goal: "Launch".to_owned(), target_date: "someday".to_owned() };
    let err = prepare(&ADD_GOAL, &logged_in(), &form).unwrap_err();
    assert_eq!(err, ResourceError::Validation(INVALID_DATE_MESSAGE.to_owned()));
}

#[test]
fn prepare_goal_serializes_json_body() {
    let form = GoalForm { goal: "Launch".to_owned(), target_date: "2026-12-01".to_owned() };
    let request = prepare(&ADD_GOAL, &logged_in(), &form).unwrap();
    assert_eq!(request.method, Method::Post);
    let body: Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({ "goal": "Launch", "target_date": "2026-12-01" }));
}

// =============================================================
// interpret
// =============================================================

#[test]
fn interpret_success_extracts_field() {
    let claims = interpret(&CLAIMS, 200, r#"{"claims":[{"text":"x"}]}"#).unwrap();
    assert_eq!(claims.len(), 1);
}

#[test]
fn interpret_empty_list_is_success() {
    let claims = interpret(&CLAIMS, 200, r#"{"claims":[]}"#).unwrap();
    assert!(claims.is_empty());
}

#[test]
fn interpret_non_array_field_is_schema_error() {
    let err = interpret(&CLAIMS, 200, r#"{"claims":"nope"}"#).unwrap_err();
    assert_eq!(err.kind(), "schema");
}

#[test]
fn interpret_missing_field_is_schema_error() {
    let err = interpret(&CLAIMS, 200, r#"{"cached_result":{"claims":[]}}"#).unwrap_err();
    assert_eq!(err.kind(), "schema");
}

#[test]
fn interpret_non_object_body_is_schema_error() {
    for body in ["[1,2,3]", "\"claims\"", "42", "null"] {
        let err = interpret(&CLAIMS, 200, body).unwrap_err();
        assert_eq!(err.kind(), "schema", "body {body:?} should be a schema error");
    }
}

#[test]
fn interpret_invalid_json_is_schema_error() {
    let err = interpret(&CLAIMS, 200, "<html>oops</html>").unwrap_err();
    assert_eq!(err.kind(), "schema");
}

#[test]
fn interpret_error_status_prefers_body_error() {
    let err = interpret(&CLAIMS, 500, r#"{"error":"Failed to fetch data from the API: quota"}"#).unwrap_err();
    assert_eq!(err, ResourceError::Transport("Failed to fetch data from the API: quota".to_owned()));
}

#[test]
fn interpret_error_status_without_body_uses_generic_message() {
    let err = interpret(&CLAIMS, 503, "").unwrap_err();
    assert_eq!(err, ResourceError::Transport("Request failed (HTTP 503).".to_owned()));
}

#[test]
fn interpret_error_object_uses_nested_message() {
    let err = interpret(&CLAIMS, 400, r#"{"error":{"message":"bad key"}}"#).unwrap_err();
    assert_eq!(err.message(), "bad key");
}

#[test]
fn interpret_ok_status_with_error_field_is_transport_error() {
    let err = interpret(&CLAIMS, 200, r#"{"error":"No query provided."}"#).unwrap_err();
    assert_eq!(err, ResourceError::Transport("No query provided.".to_owned()));
}

#[test]
fn interpret_401_on_protected_resource_is_unauthorized() {
    let err = interpret(&PROGRESS, 401, r#"{"msg":"Token has expired"}"#).unwrap_err();
    assert_eq!(err, ResourceError::Unauthorized(SESSION_EXPIRED_MESSAGE.to_owned()));
}

#[test]
fn interpret_401_on_login_is_transport_with_server_message() {
    let err = interpret(&LOGIN, 401, r#"{"error":"Invalid username or password"}"#).unwrap_err();
    assert_eq!(err, ResourceError::Transport("Invalid username or password".to_owned()));
}

#[test]
fn error_field_ignores_blank_and_non_text_values() {
    assert_eq!(error_field(&json!({ "error": "" })), None);
    assert_eq!(error_field(&json!({ "error": 5 })), None);
    assert_eq!(error_field(&json!({ "other": "x" })), None);
}

#[test]
fn method_names_match_http_verbs() {
    assert_eq!(Method::Get.as_str(), "GET");
    assert_eq!(Method::Post.as_str(), "POST");
}
