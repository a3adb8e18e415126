//! Domain core for the PPD screening backend.
//!
//! Holds the prediction encryption codec, EPDS depression levels, and the
//! shared error and id types. Nothing here performs I/O beyond reading the
//! encryption key from the environment.

pub mod encryption_key;
pub mod epds;
pub mod error;
pub mod prediction_codec;
pub mod predictions;
pub mod types;
