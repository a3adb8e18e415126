//! Authenticated encryption of prediction records for storage (AES-256-GCM).
//!
//! A prediction is serialized to compact JSON, sealed under the process key,
//! and packed into a versioned envelope:
//!
//! ```text
//! version (1) || sealed_len (4) || !sealed_len (4) || nonce (12) || ciphertext || tag (16)
//! ```
//!
//! `sealed_len` is the big-endian length of `ciphertext || tag`, followed by
//! its bitwise complement. The whole header is bound to the ciphertext as
//! associated data. A token whose sealed part no longer matches the declared
//! length was cut short or padded out and is malformed. Any altered header
//! byte breaks the complement pair or the tag and fails authentication.
//!
//! The envelope is rendered as unpadded URL-safe base64 so it fits a `TEXT`
//! column.
//!
//! Error messages never contain plaintext, key material, or ciphertext.

use std::fmt;

use aes_gcm::aead::{Aead, AeadCore, OsRng, Payload};
use aes_gcm::{Aes256Gcm, Key, KeyInit, Nonce};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::encryption_key::EncryptionKey;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Envelope version 1: AES-256-GCM, 96-bit nonce, 128-bit tag.
pub const ENVELOPE_VERSION: u8 = 1;

/// Nonce length in bytes.
pub const NONCE_LEN: usize = 12;

/// Authentication tag length in bytes.
pub const TAG_LEN: usize = 16;

/// Version byte plus the sealed length and its complement.
const HEADER_LEN: usize = 1 + 4 + 4;

/// Smallest decodable envelope (empty ciphertext).
pub const MIN_TOKEN_LEN: usize = HEADER_LEN + NONCE_LEN + TAG_LEN;

/// A prediction as produced by the ML component: a JSON object whose key
/// order is preserved.
pub type PredictionRecord = serde_json::Map<String, serde_json::Value>;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure kinds of the prediction codec.
///
/// Callers distinguish "data corrupted or wrong key" ([`Authentication`]) from
/// "not a token at all" ([`MalformedInput`]) and "token fine, content
/// unreadable" ([`Deserialization`]).
///
/// [`Authentication`]: CodecError::Authentication
/// [`MalformedInput`]: CodecError::MalformedInput
/// [`Deserialization`]: CodecError::Deserialization
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Missing or invalid key. Fatal at start-up.
    #[error("Encryption is misconfigured: {0}")]
    Configuration(String),

    /// The value could not be rendered as JSON.
    #[error("Prediction could not be serialized: {0}")]
    Serialization(String),

    /// Tag verification failed: the token was altered or the key is wrong.
    #[error("Prediction failed its integrity check")]
    Authentication,

    /// The input is not a structurally valid envelope.
    #[error("Encrypted prediction is malformed: {0}")]
    MalformedInput(String),

    /// The token authenticated but its plaintext is not the expected JSON.
    #[error("Decrypted prediction is unreadable: {0}")]
    Deserialization(String),
}

/// Describe a serde_json error by category and position only.
///
/// serde_json messages can quote the offending input, which here would be
/// decrypted plaintext.
fn describe_json_error(err: &serde_json::Error) -> String {
    if err.line() == 0 {
        format!("{:?} error", err.classify())
    } else {
        format!(
            "{:?} error at line {} column {}",
            err.classify(),
            err.line(),
            err.column()
        )
    }
}

// ---------------------------------------------------------------------------
// PredictionCodec
// ---------------------------------------------------------------------------

/// Encrypts and decrypts prediction records under one key.
///
/// Immutable after construction; clone it or share it behind an `Arc` across
/// request handlers. Every call draws its own nonce from the OS RNG.
#[derive(Clone)]
pub struct PredictionCodec {
    cipher: Aes256Gcm,
}

impl PredictionCodec {
    pub fn new(key: &EncryptionKey) -> Self {
        let key = Key::<Aes256Gcm>::from_slice(key.as_bytes());
        Self {
            cipher: Aes256Gcm::new(key),
        }
    }

    /// Build a codec from the `ENCRYPTION_KEY` environment variable.
    pub fn from_env() -> Result<Self, CodecError> {
        Ok(Self::new(&EncryptionKey::from_env()?))
    }

    /// Encrypt a prediction record into a storable token.
    pub fn encode(&self, record: &PredictionRecord) -> Result<String, CodecError> {
        self.encrypt(record)
    }

    /// Decrypt a token produced by [`encode`](Self::encode).
    pub fn decode(&self, token: &str) -> Result<PredictionRecord, CodecError> {
        self.decrypt(token)
    }

    /// Encrypt any serializable value.
    pub fn encrypt<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, CodecError> {
        let plaintext = serde_json::to_vec(value)
            .map_err(|e| CodecError::Serialization(describe_json_error(&e)))?;

        let sealed_len = u32::try_from(plaintext.len() + TAG_LEN).map_err(|_| {
            CodecError::Serialization("plaintext exceeds the envelope size limit".into())
        })?;
        let header = envelope_header(sealed_len);

        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
        let sealed = self
            .cipher
            .encrypt(
                &nonce,
                Payload {
                    msg: &plaintext,
                    aad: &header,
                },
            )
            .map_err(|_| {
                CodecError::Serialization("plaintext exceeds the AES-GCM message limit".into())
            })?;

        let mut token = Vec::with_capacity(HEADER_LEN + NONCE_LEN + sealed.len());
        token.extend_from_slice(&header);
        token.extend_from_slice(&nonce);
        token.extend_from_slice(&sealed);

        Ok(URL_SAFE_NO_PAD.encode(token))
    }

    /// Decrypt a token into any deserializable value.
    pub fn decrypt<T: DeserializeOwned>(&self, token: &str) -> Result<T, CodecError> {
        let raw = URL_SAFE_NO_PAD
            .decode(token)
            .map_err(|_| CodecError::MalformedInput("token is not URL-safe base64".into()))?;

        if raw.len() < MIN_TOKEN_LEN {
            return Err(CodecError::MalformedInput(format!(
                "token is {} bytes, an envelope needs at least {MIN_TOKEN_LEN}",
                raw.len()
            )));
        }

        let (header, rest) = raw.split_at(HEADER_LEN);
        let declared = read_u32(&header[1..5]);
        if header[0] != ENVELOPE_VERSION || declared != !read_u32(&header[5..9]) {
            return Err(CodecError::Authentication);
        }

        let (nonce, sealed) = rest.split_at(NONCE_LEN);
        if sealed.len() != declared as usize {
            return Err(CodecError::MalformedInput(format!(
                "sealed payload is {} bytes, the header declares {declared}",
                sealed.len()
            )));
        }

        let plaintext = self
            .cipher
            .decrypt(
                Nonce::from_slice(nonce),
                Payload {
                    msg: sealed,
                    aad: header,
                },
            )
            .map_err(|_| CodecError::Authentication)?;

        serde_json::from_slice(&plaintext)
            .map_err(|e| CodecError::Deserialization(describe_json_error(&e)))
    }
}

fn envelope_header(sealed_len: u32) -> [u8; HEADER_LEN] {
    let mut header = [0u8; HEADER_LEN];
    header[0] = ENVELOPE_VERSION;
    header[1..5].copy_from_slice(&sealed_len.to_be_bytes());
    header[5..9].copy_from_slice(&(!sealed_len).to_be_bytes());
    header
}

fn read_u32(bytes: &[u8]) -> u32 {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

impl fmt::Debug for PredictionCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredictionCodec").finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
