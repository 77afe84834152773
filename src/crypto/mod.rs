//! Cryptographic adapters for the import pipeline.
//!
//! Thin wrappers over the external scrypt and XSalsa20-Poly1305
//! primitives; all algorithmic content lives in the crates.

pub mod aead;
pub mod kdf;

pub use aead::decrypt;
pub use kdf::derive_key;

/// Length of the envelope salt (32 bytes).
pub const SALT_LEN: usize = 32;
/// Length of the secretbox nonce (24 bytes for XSalsa20-Poly1305).
pub const NONCE_LEN: usize = 24;
/// Length of the derived encryption key (32 bytes / 256 bits).
pub const KEY_LEN: usize = 32;
