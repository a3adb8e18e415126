//! The AES-256 key protecting prediction records at rest.
//!
//! The key is loaded once at start-up and handed to
//! [`PredictionCodec::new`](crate::prediction_codec::PredictionCodec::new).
//! There is deliberately no default key: an absent or malformed value is a
//! [`CodecError::Configuration`] and the server must not start.

use std::env::VarError;
use std::fmt;

use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine;
use rand::RngCore;

use crate::prediction_codec::CodecError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Environment variable holding the base64-encoded key.
pub const ENCRYPTION_KEY_ENV: &str = "ENCRYPTION_KEY";

/// Raw key length in bytes (AES-256).
pub const KEY_LEN: usize = 32;

// ---------------------------------------------------------------------------
// EncryptionKey
// ---------------------------------------------------------------------------

/// A 256-bit symmetric key.
///
/// The textual form is base64 of the 32 raw bytes. Both the URL-safe and the
/// standard alphabet are accepted, padded or not, so keys generated for the
/// previous Fernet-based deployment parse unchanged.
#[derive(Clone)]
pub struct EncryptionKey([u8; KEY_LEN]);

impl EncryptionKey {
    /// Wrap raw key bytes.
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Generate a fresh random key from the thread-local CSPRNG.
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_LEN];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Parse a base64-encoded key.
    ///
    /// Surrounding whitespace is ignored. The error never echoes the input.
    pub fn parse(encoded: &str) -> Result<Self, CodecError> {
        let encoded = encoded.trim();
        if encoded.is_empty() {
            return Err(CodecError::Configuration("encryption key is empty".into()));
        }

        let raw = [URL_SAFE, URL_SAFE_NO_PAD, STANDARD, STANDARD_NO_PAD]
            .iter()
            .find_map(|engine| engine.decode(encoded).ok())
            .ok_or_else(|| CodecError::Configuration("encryption key is not valid base64".into()))?;

        let bytes: [u8; KEY_LEN] = raw.as_slice().try_into().map_err(|_| {
            CodecError::Configuration(format!(
                "encryption key must decode to {KEY_LEN} bytes, got {}",
                raw.len()
            ))
        })?;

        Ok(Self(bytes))
    }

    /// Load the key from [`ENCRYPTION_KEY_ENV`].
    pub fn from_env() -> Result<Self, CodecError> {
        Self::from_env_var(ENCRYPTION_KEY_ENV)
    }

    /// Load the key from the named environment variable.
    pub fn from_env_var(name: &str) -> Result<Self, CodecError> {
        let value = std::env::var(name).map_err(|e| match e {
            VarError::NotPresent => CodecError::Configuration(format!("{name} is not set")),
            VarError::NotUnicode(_) => {
                CodecError::Configuration(format!("{name} is not valid unicode"))
            }
        })?;

        Self::parse(&value).map_err(|e| match e {
            CodecError::Configuration(msg) => CodecError::Configuration(format!("{name}: {msg}")),
            other => other,
        })
    }

    /// Render the key as URL-safe, padded base64 (the `ENCRYPTION_KEY` format).
    pub fn to_base64(&self) -> String {
        URL_SAFE.encode(self.0)
    }

    pub(crate) fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl fmt::Debug for EncryptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EncryptionKey(<redacted>)")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
