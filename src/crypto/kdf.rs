use pbkdf2::pbkdf2_hmac;
use sha1::Sha1;
use zeroize::Zeroizing;

use super::{DERIVED_KEY_LEN, KEY_LEN, PBKDF2_ROUNDS};

/// Key material derived from the password.
///
/// The first half is the encryption key for the key set, the second half
/// the HMAC key. Wiped on drop.
pub struct DerivedKey {
    bytes: Zeroizing<[u8; DERIVED_KEY_LEN]>,
}

impl DerivedKey {
    pub fn as_bytes(&self) -> &[u8; DERIVED_KEY_LEN] {
        &self.bytes
    }

    pub fn encryption_key(&self) -> &[u8] {
        &self.bytes[..KEY_LEN]
    }

    pub fn mac_key(&self) -> &[u8] {
        &self.bytes[KEY_LEN..]
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DerivedKey(..)")
    }
}

/// Derive the 64-byte key with PBKDF2-HMAC-SHA1 and the format's fixed
/// iteration count.
pub fn derive_key(password: &[u8], salt: &[u8]) -> DerivedKey {
    let mut bytes = Zeroizing::new([0u8; DERIVED_KEY_LEN]);
    pbkdf2_hmac::<Sha1>(password, salt, PBKDF2_ROUNDS, &mut bytes[..]);

    tracing::debug!(rounds = PBKDF2_ROUNDS, "derived key from password");

    DerivedKey { bytes }
}
