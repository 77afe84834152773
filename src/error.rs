use std::fmt;

/// Why an import failed. None of these are fatal to the process and none
/// carry key material or passphrase bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// The input is not a parseable exported-account JSON document.
    MalformedExport(String),
    /// The declared encoding is not the one supported configuration
    /// (version 3, pkcs8 + sr25519, scrypt + xsalsa20-poly1305).
    UnsupportedEncoding,
    /// The base64 envelope does not decode, or is too short to hold
    /// salt, cost parameters and nonce.
    MalformedEnvelope,
    /// N/p/r in the envelope differ from the fixed set the extension
    /// writes. The file was not produced by the expected exporter.
    UnexpectedKdfParameters { n: u32, p: u32, r: u32 },
    /// scrypt rejected the derivation parameters.
    KeyDerivationFailed,
    /// AEAD tag check failed. Most likely a wrong passphrase.
    AuthenticationFailed,
    /// Decryption succeeded but the plaintext is not the expected
    /// PKCS#8-style key blob.
    UnrecognizedKeyLayout,
    /// The blob stores a raw seed instead of an expanded key. Old
    /// exports only; re-export from the extension is required.
    LegacySeedFormat,
    /// Scalar conversion was handed a buffer of the wrong length.
    InvalidScalarLength(usize),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::MalformedExport(e) => write!(f, "not an exported account file: {e}"),
            ImportError::UnsupportedEncoding => {
                write!(f, "exported account encoding is not supported")
            }
            ImportError::MalformedEnvelope => write!(f, "encoded envelope is malformed"),
            ImportError::UnexpectedKdfParameters { n, p, r } => write!(
                f,
                "unexpected KDF cost parameters (N={n}, p={p}, r={r}); \
                 not exported by the polkadot{{.js}} extension"
            ),
            ImportError::KeyDerivationFailed => write!(f, "passphrase key derivation failed"),
            ImportError::AuthenticationFailed => {
                write!(f, "decryption failed; wrong passphrase or corrupted data")
            }
            ImportError::UnrecognizedKeyLayout => {
                write!(f, "decrypted data is not recognizable key material")
            }
            ImportError::LegacySeedFormat => {
                write!(f, "seed found instead of expanded key; re-export is needed")
            }
            ImportError::InvalidScalarLength(len) => {
                write!(f, "invalid key length for scalar conversion: {len}")
            }
        }
    }
}

impl std::error::Error for ImportError {}
