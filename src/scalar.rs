//! Conversion of the stored ed25519-form secret key into an sr25519
//! signing scalar.
//!
//! The extension serializes sr25519 secret keys multiplied by the curve
//! cofactor (the ed25519 convention). Signing needs the scalar back:
//! divide the 32-byte scalar half by 8 and clear the top bit so it lands
//! in the canonical range. The nonce half (trailing 32 bytes) is shared
//! between both conventions and passes through untouched.

use crate::error::ImportError;

pub const SCALAR_LEN: usize = 32;
pub const SECRET_KEY_LEN: usize = 64;

/// Rewrites a 64-byte ed25519-form secret key into sr25519 form, in
/// place. The caller must hold the only alias; the buffer contains key
/// material throughout.
pub fn ed25519_to_sr25519(secret: &mut [u8]) -> Result<(), ImportError> {
    if secret.len() != SECRET_KEY_LEN {
        return Err(ImportError::InvalidScalarLength(secret.len()));
    }

    divide_by_cofactor(&mut secret[..SCALAR_LEN])
}

/// Divides the scalar by the cofactor 8 and clears the most significant
/// bit.
///
/// The bytes are one little-endian 256-bit integer, so this is a shift
/// right by 3 across byte boundaries: walking from the most significant
/// byte down, the 3 low bits shifted out of each byte become the 3 high
/// bits of the next lower one. Not idempotent; apply exactly once per
/// import.
pub fn divide_by_cofactor(scalar: &mut [u8]) -> Result<(), ImportError> {
    if scalar.len() != SCALAR_LEN {
        return Err(ImportError::InvalidScalarLength(scalar.len()));
    }

    let mut low = 0u8;
    for byte in scalar.iter_mut().rev() {
        let r = *byte & 0b0000_0111;
        *byte >>= 3;
        *byte += low;
        low = r << 5;
    }

    // Canonical range for the target scheme.
    scalar[SCALAR_LEN - 1] &= 0b0111_1111;

    Ok(())
}
