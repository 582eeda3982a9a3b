//! Sample master keys files with tags computed by an independent
//! PBKDF2/HMAC implementation.
//!
//! Shared by the unit tests and `tests/cli.rs`, which includes this file by
//! path, so it only depends on `hex`.
#![allow(dead_code)]

pub const MAGIC: &[u8; 25] = b"ARQ_ENCRYPTED_MASTER_KEYS";

pub const PASSWORD: &[u8] = b"correct horse battery staple";

/// Password that is not valid UTF-8 ("café" in Latin-1).
pub const LATIN1_PASSWORD: &[u8] = b"caf\xe9";

pub const DERIVED_KEY: &str = "1d8bc9c221aec6e564ac44c721bf0aea84860b43718dda7affb1541958c980d4\
                               921c4afa6c2d6ffbf83e3a11e187df60ab17ec9d0318a34ea1c9fd41654ab6f8";

/// Tag over IV and key set of the 193-byte file. At that length the last
/// 128 bytes are the same range.
pub const TAG_193: &str = "e87e9025f7fddbb417a7142fcb24a7fe1013014dc48168ef9157eba97118353c";

/// Same layout as [`TAG_193`], keyed from [`LATIN1_PASSWORD`].
pub const TAG_193_LATIN1: &str =
    "198a5fbac94726c18d8720ae0c2538beecd52783d4ad5540f0204c8ec0f423c3";

/// Tag over the last 128 bytes of the 209-byte file.
pub const TAG_209_LAST_128: &str =
    "58bd8af603d36124cc2b16828e36f107921f39d5fc7907b0e4cab822cd348230";

/// Tag over IV and key set of the 209-byte file.
pub const TAG_209_IV_AND_KEY_SET: &str =
    "601b1c8c7cc39e0b8f5e4d804e9b50e60eb72fba17c2c42d3353888a6a2e0675";

pub fn master_keys_file(key_set_len: usize, tag_hex: &str) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(MAGIC);
    data.extend(0x11..=0x18u8);
    data.extend(hex::decode(tag_hex).unwrap());
    data.extend(0xa0..=0xafu8);
    data.extend((0..key_set_len).map(|i| (i * 7 % 256) as u8));
    data
}

/// Documented 193-byte file, tagged over IV and key set.
pub fn documented_file() -> Vec<u8> {
    master_keys_file(112, TAG_193)
}

/// 193-byte file whose password is [`LATIN1_PASSWORD`].
pub fn latin1_file() -> Vec<u8> {
    master_keys_file(112, TAG_193_LATIN1)
}

/// 209-byte file, tagged over its last 128 bytes.
pub fn observed_file() -> Vec<u8> {
    master_keys_file(128, TAG_209_LAST_128)
}
