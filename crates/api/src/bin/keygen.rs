//! Print a freshly generated encryption key in `.env` format.
//!
//! ```text
//! $ cargo run --bin ppd-keygen >> .env
//! ```

use ppd_core::encryption_key::{EncryptionKey, ENCRYPTION_KEY_ENV};

fn main() {
    let key = EncryptionKey::generate();
    println!("{ENCRYPTION_KEY_ENV}={}", key.to_base64());
}
