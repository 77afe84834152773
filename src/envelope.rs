//! Binary envelope parsing.
//!
//! Layout of the base64-decoded `encoded` field, all integers
//! little-endian:
//! ```text
//! SALT (32) | N (4) | P (4) | R (4) | NONCE (24) | CIPHERTEXT
//! ```

use crate::crypto::kdf::{SCRYPT_N, SCRYPT_P, SCRYPT_R};
use crate::crypto::{NONCE_LEN, SALT_LEN};
use crate::error::ImportError;

const COST_LEN: usize = 4;

/// Bytes before the ciphertext starts.
pub const MIN_ENVELOPE_LEN: usize = SALT_LEN + 3 * COST_LEN + NONCE_LEN;

/// Key-derivation inputs dug out of the envelope. The cost parameters
/// are kept only for reporting; derivation always runs with the fixed
/// set they were checked against.
#[derive(Debug)]
pub struct KdfParams {
    pub salt: [u8; SALT_LEN],
    pub n: u32,
    pub p: u32,
    pub r: u32,
}

/// Nonce and ciphertext, ready for the secretbox.
#[derive(Debug)]
pub struct CipherEnvelope {
    pub nonce: [u8; NONCE_LEN],
    pub ciphertext: Vec<u8>,
}

/// Bounds-checked cursor over the envelope bytes. Every read is
/// fixed-width; running past the end is `MalformedEnvelope`, never a
/// slice panic.
struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], ImportError> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|end| *end <= self.data.len())
            .ok_or(ImportError::MalformedEnvelope)?;
        let bytes = &self.data[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    fn read_u32_le(&mut self) -> Result<u32, ImportError> {
        let bytes = self.take(COST_LEN)?;
        Ok(u32::from_le_bytes(
            bytes.try_into().map_err(|_| ImportError::MalformedEnvelope)?,
        ))
    }

    fn rest(self) -> &'a [u8] {
        &self.data[self.pos..]
    }
}

/// Splits the decoded envelope into KDF inputs and cipher material.
///
/// Total length is validated before any field read, and the cost
/// parameters are compared against the fixed reference set before
/// anything is derived from them. A file carrying other costs was not
/// written by the extension, and deriving with file-supplied costs
/// would hand the file control over memory and CPU spent.
pub fn parse(data: &[u8]) -> Result<(KdfParams, CipherEnvelope), ImportError> {
    if data.len() < MIN_ENVELOPE_LEN {
        return Err(ImportError::MalformedEnvelope);
    }

    let mut reader = Reader::new(data);

    let salt: [u8; SALT_LEN] = reader
        .take(SALT_LEN)?
        .try_into()
        .map_err(|_| ImportError::MalformedEnvelope)?;

    let n = reader.read_u32_le()?;
    let p = reader.read_u32_le()?;
    let r = reader.read_u32_le()?;
    if n != SCRYPT_N || p != SCRYPT_P || r != SCRYPT_R {
        return Err(ImportError::UnexpectedKdfParameters { n, p, r });
    }

    let nonce: [u8; NONCE_LEN] = reader
        .take(NONCE_LEN)?
        .try_into()
        .map_err(|_| ImportError::MalformedEnvelope)?;

    let ciphertext = reader.rest().to_vec();

    Ok((
        KdfParams { salt, n, p, r },
        CipherEnvelope { nonce, ciphertext },
    ))
}
