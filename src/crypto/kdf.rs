use scrypt::Params;

use super::KEY_LEN;
use crate::error::ImportError;

/// scrypt cost the extension always exports with: N = 2^15 = 32768.
pub const SCRYPT_LOG_N: u8 = 15;
pub const SCRYPT_N: u32 = 1 << SCRYPT_LOG_N;
pub const SCRYPT_P: u32 = 1;
pub const SCRYPT_R: u32 = 8;

/// Derives the 32-byte secretbox key from the passphrase and envelope
/// salt, with the fixed cost set. p = 1, so derivation is inherently
/// single-threaded; the derived key depends on it staying that way.
pub fn derive_key(passphrase: &[u8], salt: &[u8]) -> Result<[u8; KEY_LEN], ImportError> {
    let params = Params::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, KEY_LEN)
        .map_err(|_| ImportError::KeyDerivationFailed)?;

    let mut key = [0u8; KEY_LEN];
    scrypt::scrypt(passphrase, salt, &params, &mut key)
        .map_err(|_| ImportError::KeyDerivationFailed)?;

    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kdf_is_deterministic() {
        let salt = [42u8; 32];

        let k1 = derive_key(b"passphrase", &salt).unwrap();
        let k2 = derive_key(b"passphrase", &salt).unwrap();

        assert_eq!(k1, k2);
    }

    #[test]
    fn salt_affects_output() {
        let k1 = derive_key(b"passphrase", &[1u8; 32]).unwrap();
        let k2 = derive_key(b"passphrase", &[2u8; 32]).unwrap();

        assert_ne!(k1, k2);
    }

    #[test]
    fn passphrase_affects_output() {
        let salt = [7u8; 32];

        let k1 = derive_key(b"sobashochu", &salt).unwrap();
        let k2 = derive_key(b"imojochu", &salt).unwrap();

        assert_ne!(k1, k2);
    }
}
