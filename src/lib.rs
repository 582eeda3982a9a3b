//! Password and integrity check for Arq Cloud Backup
//! `encrypted_master_keys.dat` files.
//!
//! The file is split into its documented fields, a key is derived from the
//! password with PBKDF2-HMAC-SHA1 and the stored HMAC-SHA256 is compared
//! against two candidate byte ranges. Nothing is decrypted.

pub mod crypto;
mod error;
pub mod format;
pub mod report;
pub mod verify;

#[cfg(test)]
mod fixtures;

use std::path::Path;

use anyhow::{Context, Result};

pub use crate::error::FormatError;
pub use crate::format::{MasterKeysFile, parse};
pub use crate::report::Report;
pub use crate::verify::{Candidate, CandidateCheck, Verdict, Verification, verify};

/// Reads a master keys file into memory.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn read_master_keys(path: &Path) -> Result<Vec<u8>> {
    let data = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    tracing::info!(path = %path.display(), len = data.len(), "read master keys file");
    Ok(data)
}
