//! Password check against the stored HMAC.
//!
//! The documentation says the tag covers IV and encrypted key set, but real
//! files are longer than documented. Two byte ranges are therefore checked
//! and both results are kept:
//!
//! - IV followed by the encrypted key set
//! - the last 128 bytes of the file
//!
//! The password is accepted when either range reproduces the stored tag.

use std::fmt;

use anyhow::{Context, Result};

use crate::crypto::{self, DerivedKey, TAG_LEN, TagHasher};
use crate::format::MasterKeysFile;

/// Byte range a candidate tag is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate {
    IvAndKeySet,
    Last128Bytes,
}

impl Candidate {
    pub fn label(self) -> &'static str {
        match self {
            Candidate::IvAndKeySet => "IV & encrypted key set",
            Candidate::Last128Bytes => "last 128 bytes of file",
        }
    }

    fn compute(self, file: &MasterKeysFile<'_>, mac_key: &[u8]) -> Result<[u8; TAG_LEN]> {
        match self {
            Candidate::IvAndKeySet => Ok(TagHasher::new(mac_key)?
                .update(file.iv())
                .update(file.encrypted_key_set())
                .finalize()),
            Candidate::Last128Bytes => crypto::hmac_sha256(mac_key, file.last_128()),
        }
    }
}

/// Result of checking one candidate range.
#[derive(Debug, Clone, Copy)]
pub struct CandidateCheck {
    candidate: Candidate,
    tag: [u8; TAG_LEN],
    matches: bool,
}

impl CandidateCheck {
    pub fn candidate(&self) -> Candidate {
        self.candidate
    }

    /// The HMAC computed over the candidate range.
    pub fn tag(&self) -> &[u8; TAG_LEN] {
        &self.tag
    }

    pub fn matches(&self) -> bool {
        self.matches
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Match,
    NoMatch,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Match => f.write_str("*****  Match!!!!!!  *****"),
            Verdict::NoMatch => f.write_str("No match"),
        }
    }
}

/// Outcome of a password check with every intermediate value.
#[derive(Debug)]
pub struct Verification {
    key: DerivedKey,
    checks: [CandidateCheck; 2],
}

impl Verification {
    pub fn derived_key(&self) -> &DerivedKey {
        &self.key
    }

    pub fn checks(&self) -> &[CandidateCheck; 2] {
        &self.checks
    }

    pub fn matches_iv_and_key_set(&self) -> bool {
        self.checks[0].matches
    }

    pub fn matches_last_128(&self) -> bool {
        self.checks[1].matches
    }

    /// `Match` if at least one candidate reproduces the stored tag.
    pub fn verdict(&self) -> Verdict {
        if self.checks.iter().any(CandidateCheck::matches) {
            Verdict::Match
        } else {
            Verdict::NoMatch
        }
    }
}

/// Derive the key for `password` and check both candidate ranges.
pub fn verify(file: &MasterKeysFile<'_>, password: &[u8]) -> Result<Verification> {
    let key = crypto::derive_key(password, file.salt());

    let check = |candidate: Candidate| -> Result<CandidateCheck> {
        let tag = candidate
            .compute(file, key.mac_key())
            .with_context(|| format!("failed to compute HMAC of {}", candidate.label()))?;
        let matches = crypto::tags_match(file.stored_tag(), &tag);
        tracing::debug!(candidate = candidate.label(), matches, "checked candidate tag");
        Ok(CandidateCheck {
            candidate,
            tag,
            matches,
        })
    };

    let checks = [check(Candidate::IvAndKeySet)?, check(Candidate::Last128Bytes)?];

    Ok(Verification { key, checks })
}
