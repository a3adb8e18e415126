use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ppd_core::error::CoreError;
use ppd_core::prediction_codec::CodecError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`CodecError`] for prediction
/// encryption failures, and adds HTTP-specific variants. Implements
/// [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `ppd_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A prediction could not be encrypted or decrypted.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, key } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} '{key}' not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        INTERNAL_MESSAGE.to_string(),
                    )
                }
            },

            // --- Prediction codec errors ---
            AppError::Codec(err) => classify_codec_error(err),

            // --- Database errors ---
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    INTERNAL_MESSAGE.to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    INTERNAL_MESSAGE.to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a codec error into an HTTP status, error code, and message.
///
/// Every codec failure is a server-side fault: the stored data is corrupt, the
/// configured key does not match, or the record could not be encoded. The
/// response names the failure kind but carries no ciphertext.
fn classify_codec_error(err: &CodecError) -> (StatusCode, &'static str, String) {
    let (code, message) = match err {
        CodecError::Authentication => (
            "PREDICTION_INTEGRITY_ERROR",
            "Stored prediction failed its integrity check",
        ),
        CodecError::MalformedInput(_) => {
            ("PREDICTION_MALFORMED", "Stored prediction is not a valid token")
        }
        CodecError::Deserialization(_) => {
            ("PREDICTION_UNREADABLE", "Stored prediction could not be read")
        }
        CodecError::Serialization(_) => (
            "PREDICTION_UNSERIALIZABLE",
            "Prediction could not be serialized",
        ),
        CodecError::Configuration(_) => ("INTERNAL_ERROR", INTERNAL_MESSAGE),
    };

    tracing::error!(error = %err, code, "Prediction codec failure");
    (StatusCode::INTERNAL_SERVER_ERROR, code, message.to_string())
}
