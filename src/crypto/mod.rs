//! Cryptographic primitives used to check the master keys file.
//!
//! Provides PBKDF2 key derivation and HMAC-SHA256 tag computation.

pub mod kdf;
pub mod mac;

pub use kdf::{DerivedKey, derive_key};
pub use mac::{TagHasher, hmac_sha256, tags_match};

/// Length of the file header (25 bytes "ARQ_ENCRYPTED_MASTER_KEYS").
pub const HEADER_LEN: usize = 25;
/// Length of the PBKDF2 salt (8 bytes).
pub const SALT_LEN: usize = 8;
/// Length of the HMAC-SHA256 tag (32 bytes).
pub const TAG_LEN: usize = 32;
/// Length of the payload IV (16 bytes).
pub const IV_LEN: usize = 16;
/// Length of the derived key (64 bytes, two halves).
pub const DERIVED_KEY_LEN: usize = 64;
/// Length of each derived key half (32 bytes / 256 bits).
pub const KEY_LEN: usize = 32;
/// PBKDF2-HMAC-SHA1 iteration count fixed by the file format.
pub const PBKDF2_ROUNDS: u32 = 200_000;
