//! File layout of `encrypted_master_keys.dat`.
//!
//! Layout:
//! ```text
//! HEADER (25) | SALT (8) | HMAC-SHA256 (32) | IV (16) | ENCRYPTED KEY SET (rest)
//! ```
//!
//! The documented file is 193 bytes long, but files written by current
//! clients are 209 bytes. Parsing never rejects a length other than 193; it
//! only records the deviation so it can be reported.

use crate::crypto::{HEADER_LEN, IV_LEN, SALT_LEN, TAG_LEN};
use crate::error::FormatError;

/// Magic bytes expected in the header.
pub const MAGIC: &[u8; HEADER_LEN] = b"ARQ_ENCRYPTED_MASTER_KEYS";

pub const SALT_OFFSET: usize = HEADER_LEN;
pub const TAG_OFFSET: usize = SALT_OFFSET + SALT_LEN;
pub const IV_OFFSET: usize = TAG_OFFSET + TAG_LEN;
pub const KEY_SET_OFFSET: usize = IV_OFFSET + IV_LEN;

/// Length of the trailing range authenticated by the second candidate.
pub const TRAILER_LEN: usize = 128;
/// Shortest file for which every field and the trailing range exist.
pub const MIN_FILE_LEN: usize = if KEY_SET_OFFSET > TRAILER_LEN {
    KEY_SET_OFFSET
} else {
    TRAILER_LEN
};
/// File length given by the format documentation.
pub const DOCUMENTED_FILE_LEN: usize = 193;

/// A file whose length differs from the documented one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthAnomaly {
    pub expected: usize,
    pub actual: usize,
}

/// Borrowed view of a master keys file, split into its fields.
#[derive(Debug, Clone, Copy)]
pub struct MasterKeysFile<'a> {
    raw: &'a [u8],
    header: &'a [u8; HEADER_LEN],
    salt: &'a [u8; SALT_LEN],
    stored_tag: &'a [u8; TAG_LEN],
    iv: &'a [u8; IV_LEN],
    encrypted_key_set: &'a [u8],
}

impl<'a> MasterKeysFile<'a> {
    /// The whole file.
    pub fn raw(&self) -> &'a [u8] {
        self.raw
    }

    pub fn header(&self) -> &'a [u8; HEADER_LEN] {
        self.header
    }

    pub fn salt(&self) -> &'a [u8; SALT_LEN] {
        self.salt
    }

    /// The HMAC-SHA256 stored in the file.
    pub fn stored_tag(&self) -> &'a [u8; TAG_LEN] {
        self.stored_tag
    }

    pub fn iv(&self) -> &'a [u8; IV_LEN] {
        self.iv
    }

    pub fn encrypted_key_set(&self) -> &'a [u8] {
        self.encrypted_key_set
    }

    /// The final 128 bytes of the file.
    pub fn last_128(&self) -> &'a [u8] {
        &self.raw[self.raw.len() - TRAILER_LEN..]
    }

    /// Returns `true` if the header carries the expected magic.
    pub fn has_known_header(&self) -> bool {
        self.header == MAGIC
    }

    /// Returns the deviation from the documented length, if any.
    pub fn length_anomaly(&self) -> Option<LengthAnomaly> {
        (self.raw.len() != DOCUMENTED_FILE_LEN).then_some(LengthAnomaly {
            expected: DOCUMENTED_FILE_LEN,
            actual: self.raw.len(),
        })
    }
}

/// Splits a master keys file into its fields.
///
/// # Errors
///
/// Returns [`FormatError::TooShort`] if the file has fewer than
/// [`MIN_FILE_LEN`] bytes.
pub fn parse(data: &[u8]) -> Result<MasterKeysFile<'_>, FormatError> {
    let too_short = FormatError::TooShort {
        len: data.len(),
        required: MIN_FILE_LEN,
    };
    if data.len() < MIN_FILE_LEN {
        return Err(too_short);
    }

    let (header, rest) = data.split_first_chunk::<HEADER_LEN>().ok_or(too_short)?;
    let (salt, rest) = rest.split_first_chunk::<SALT_LEN>().ok_or(too_short)?;
    let (stored_tag, rest) = rest.split_first_chunk::<TAG_LEN>().ok_or(too_short)?;
    let (iv, encrypted_key_set) = rest.split_first_chunk::<IV_LEN>().ok_or(too_short)?;

    let file = MasterKeysFile {
        raw: data,
        header,
        salt,
        stored_tag,
        iv,
        encrypted_key_set,
    };

    if !file.has_known_header() {
        tracing::warn!("unrecognized master keys header");
    }
    if let Some(anomaly) = file.length_anomaly() {
        tracing::warn!(
            expected = anomaly.expected,
            actual = anomaly.actual,
            "file length differs from documented format"
        );
    }

    Ok(file)
}
