use crypto_secretbox::{
    Key, Nonce, XSalsa20Poly1305,
    aead::{Aead, KeyInit},
};
use zeroize::Zeroizing;

use crate::error::ImportError;

/// Opens the secretbox. A failed tag check means wrong passphrase or a
/// tampered envelope; the primitive does not distinguish, and neither
/// do we.
pub fn decrypt(
    key: &[u8],
    nonce: &[u8],
    ciphertext: &[u8],
) -> Result<Zeroizing<Vec<u8>>, ImportError> {
    let cipher = XSalsa20Poly1305::new(Key::from_slice(key));

    let plaintext = cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| ImportError::AuthenticationFailed)?;
    Ok(Zeroizing::new(plaintext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{KEY_LEN, NONCE_LEN};

    fn seal(key: &[u8], nonce: &[u8], plaintext: &[u8]) -> Vec<u8> {
        let cipher = XSalsa20Poly1305::new(Key::from_slice(key));
        cipher.encrypt(Nonce::from_slice(nonce), plaintext).unwrap()
    }

    #[test]
    fn decrypt_roundtrip() {
        let key = [9u8; KEY_LEN];
        let nonce = [3u8; NONCE_LEN];
        let sealed = seal(&key, &nonce, b"key material");

        let opened = decrypt(&key, &nonce, &sealed).unwrap();
        assert_eq!(&*opened, b"key material");
    }

    #[test]
    fn wrong_key_is_authentication_failure() {
        let nonce = [3u8; NONCE_LEN];
        let sealed = seal(&[9u8; KEY_LEN], &nonce, b"key material");

        let err = decrypt(&[8u8; KEY_LEN], &nonce, &sealed).unwrap_err();
        assert_eq!(err, ImportError::AuthenticationFailed);
    }

    #[test]
    fn flipped_ciphertext_bit_is_authentication_failure() {
        let key = [9u8; KEY_LEN];
        let nonce = [3u8; NONCE_LEN];
        let mut sealed = seal(&key, &nonce, b"key material");
        sealed[0] ^= 1;

        let err = decrypt(&key, &nonce, &sealed).unwrap_err();
        assert_eq!(err, ImportError::AuthenticationFailed);
    }
}
