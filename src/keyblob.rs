//! Decrypted key-blob layout validation.
//!
//! On success the plaintext is exactly 117 bytes:
//! ```text
//! HEADER (16) | SECRET KEY (64) | DIVIDER (5) | PUBLIC KEY (32)
//! ```
//! Header and divider are public format markers, compared byte for byte.

use crate::error::ImportError;

/// PKCS#8-style prefix the extension writes in front of the secret key.
pub const HEADER: [u8; 16] = [
    0x30, 0x53, 0x02, 0x01, 0x01, 0x30, 0x05, 0x06, 0x03, 0x2B, 0x65, 0x70, 0x04, 0x22, 0x04,
    0x20,
];
/// Separator between secret and public key fields.
pub const DIVIDER: [u8; 5] = [0xA1, 0x23, 0x03, 0x21, 0x00];

pub const SECRET_KEY_LEN: usize = 64;
pub const PUBLIC_KEY_LEN: usize = 32;
/// Header + secret key + divider + public key.
pub const BLOB_LEN: usize = HEADER.len() + SECRET_KEY_LEN + DIVIDER.len() + PUBLIC_KEY_LEN;

/// Checks the blob layout and extracts the key fields.
///
/// A wrong length or header means the plaintext is not key material at
/// all (distinct from the earlier tag-check failure, which already
/// covers wrong passphrases). A wrong divider means the legacy layout
/// that stores a bare seed; that layout is deliberately not supported
/// and must not be mistaken for corruption.
pub fn parse(plaintext: &[u8]) -> Result<([u8; SECRET_KEY_LEN], [u8; PUBLIC_KEY_LEN]), ImportError> {
    if plaintext.len() != BLOB_LEN {
        return Err(ImportError::UnrecognizedKeyLayout);
    }

    let mut pos = HEADER.len();
    if plaintext[..pos] != HEADER {
        return Err(ImportError::UnrecognizedKeyLayout);
    }

    let secret: [u8; SECRET_KEY_LEN] = plaintext[pos..pos + SECRET_KEY_LEN]
        .try_into()
        .map_err(|_| ImportError::UnrecognizedKeyLayout)?;
    pos += SECRET_KEY_LEN;

    if plaintext[pos..pos + DIVIDER.len()] != DIVIDER {
        return Err(ImportError::LegacySeedFormat);
    }
    pos += DIVIDER.len();

    let public: [u8; PUBLIC_KEY_LEN] = plaintext[pos..pos + PUBLIC_KEY_LEN]
        .try_into()
        .map_err(|_| ImportError::UnrecognizedKeyLayout)?;

    Ok((secret, public))
}
