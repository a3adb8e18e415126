//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server or
//! database is needed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use ppd_api::error::AppError;
use ppd_core::error::CoreError;
use ppd_core::prediction_codec::CodecError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::not_found("Prediction", 42));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Prediction '42' not found");
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("bad level".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "bad level");
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("user_id must be positive, got 0".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn internal_error_hides_details() {
    let err = AppError::InternalError("pool exhausted at 10.0.0.3".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

// ---------------------------------------------------------------------------
// Codec errors: each failure kind keeps a distinct code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn authentication_failure_returns_integrity_code() {
    let (status, json) = error_to_response(AppError::Codec(CodecError::Authentication)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "PREDICTION_INTEGRITY_ERROR");
}

#[tokio::test]
async fn malformed_token_returns_malformed_code() {
    let err = AppError::Codec(CodecError::MalformedInput(
        "token is 12 bytes, an envelope needs at least 37".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "PREDICTION_MALFORMED");
    assert!(!json["error"].as_str().unwrap().contains("12 bytes"));
}

#[tokio::test]
async fn unreadable_plaintext_returns_unreadable_code() {
    let err = AppError::Codec(CodecError::Deserialization("Eof error".into()));

    let (_, json) = error_to_response(err).await;

    assert_eq!(json["code"], "PREDICTION_UNREADABLE");
}

#[tokio::test]
async fn serialization_failure_returns_unserializable_code() {
    let err = AppError::Codec(CodecError::Serialization("Data error".into()));

    let (_, json) = error_to_response(err).await;

    assert_eq!(json["code"], "PREDICTION_UNSERIALIZABLE");
}

#[tokio::test]
async fn configuration_failure_is_generic_internal_error() {
    let err = AppError::Codec(CodecError::Configuration("ENCRYPTION_KEY is not set".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}
