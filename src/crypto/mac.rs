use anyhow::{Result, anyhow};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::TAG_LEN;

type HmacSha256 = Hmac<Sha256>;

/// Incremental HMAC-SHA256 over one or more byte ranges.
pub struct TagHasher {
    mac: HmacSha256,
}

impl TagHasher {
    pub fn new(key: &[u8]) -> Result<Self> {
        let mac = <HmacSha256 as Mac>::new_from_slice(key)
            .map_err(|e| anyhow!("hmac creation failed: {e}"))?;
        Ok(Self { mac })
    }

    pub fn update(mut self, data: &[u8]) -> Self {
        self.mac.update(data);
        self
    }

    pub fn finalize(self) -> [u8; TAG_LEN] {
        let mut tag = [0u8; TAG_LEN];
        tag.copy_from_slice(&self.mac.finalize().into_bytes());
        tag
    }
}

/// HMAC-SHA256 of `message` under `key`.
pub fn hmac_sha256(key: &[u8], message: &[u8]) -> Result<[u8; TAG_LEN]> {
    Ok(TagHasher::new(key)?.update(message).finalize())
}

/// Compare two tags in constant time.
///
/// Tags of different length never match.
pub fn tags_match(expected: &[u8], computed: &[u8]) -> bool {
    bool::from(expected.ct_eq(computed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hmac_matches_rfc4231_case_2() {
        let tag = hmac_sha256(b"Jefe", b"what do ya want for nothing?").unwrap();

        assert_eq!(
            hex::encode(tag),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn split_updates_equal_single_message() {
        let key = [9u8; 32];

        let whole = hmac_sha256(&key, b"iv-bytes|key-set-bytes").unwrap();
        let split = TagHasher::new(&key)
            .unwrap()
            .update(b"iv-bytes|")
            .update(b"key-set-bytes")
            .finalize();

        assert_eq!(whole, split);
    }

    #[test]
    fn tags_match_compares_contents() {
        let a = [1u8; TAG_LEN];
        let mut b = a;

        assert!(tags_match(&a, &b));

        b[TAG_LEN - 1] ^= 1;
        assert!(!tags_match(&a, &b));
    }

    #[test]
    fn tags_of_different_length_never_match() {
        assert!(!tags_match(&[0u8; TAG_LEN], &[0u8; TAG_LEN - 1]));
    }
}
