//! Importer for encrypted polkadot{.js} extension account exports.
//!
//! One pass, no state: parse the export JSON, check the declared
//! encoding, dig salt and cost parameters out of the base64 envelope,
//! derive the secretbox key with scrypt, open the box, validate the
//! key-blob layout, and convert the stored ed25519-form secret key into
//! the sr25519 scalar the account actually signs with.

mod crypto;
mod envelope;
mod error;
mod export;
mod keyblob;
mod scalar;

pub use crate::envelope::{CipherEnvelope, KdfParams, MIN_ENVELOPE_LEN};
pub use crate::error::ImportError;
pub use crate::export::{AccountEncoding, AccountMetadata, ExportedAccount};
pub use crate::keyblob::{BLOB_LEN, DIVIDER, HEADER, PUBLIC_KEY_LEN, SECRET_KEY_LEN};

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use zeroize::{Zeroize, Zeroizing};

/// A decrypted account, ready to sign with sr25519. The secret key is
/// zeroized on drop; the struct is the only owner of it.
#[derive(Debug)]
pub struct ImportedAccount {
    address: String,
    meta: AccountMetadata,
    public_key: [u8; PUBLIC_KEY_LEN],
    private_key: [u8; SECRET_KEY_LEN],
}

impl Drop for ImportedAccount {
    fn drop(&mut self) {
        self.private_key.zeroize();
    }
}

impl ImportedAccount {
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn meta(&self) -> &AccountMetadata {
        &self.meta
    }

    /// sr25519 public key, exactly as stored in the export.
    pub fn public_key(&self) -> &[u8; PUBLIC_KEY_LEN] {
        &self.public_key
    }

    /// sr25519 secret key: converted 32-byte scalar followed by the
    /// 32-byte signing nonce.
    pub fn private_key(&self) -> &[u8; SECRET_KEY_LEN] {
        &self.private_key
    }
}

/// Decrypts an exported account file with the given passphrase.
///
/// `raw` is the JSON document as written by the extension's
/// "Export account" action. Fails fast on the first stage that rejects;
/// see [`ImportError`] for the distinctions the caller can rely on
/// (notably [`ImportError::AuthenticationFailed`] for a wrong
/// passphrase versus the structural errors).
pub fn try_import(raw: &[u8], passphrase: &[u8]) -> Result<ImportedAccount, ImportError> {
    let account: ExportedAccount = serde_json::from_slice(raw)
        .map_err(|e| ImportError::MalformedExport(e.to_string()))?;

    if !account.encoding.is_supported() {
        return Err(ImportError::UnsupportedEncoding);
    }

    let decoded = BASE64
        .decode(&account.encoded)
        .map_err(|_| ImportError::MalformedEnvelope)?;
    let (kdf, cipher) = envelope::parse(&decoded)?;

    let key = Zeroizing::new(crypto::derive_key(passphrase, &kdf.salt)?);
    let plaintext = crypto::decrypt(&*key, &cipher.nonce, &cipher.ciphertext)?;

    let (mut private_key, public_key) = keyblob::parse(&plaintext)?;
    scalar::ed25519_to_sr25519(&mut private_key)?;

    Ok(ImportedAccount {
        address: account.address,
        meta: account.meta,
        public_key,
        private_key,
    })
}
