//! Data model for the exported-account JSON document.
//!
//! Field names follow the wire format written by the polkadot{.js}
//! extension; nothing here is persisted back.

use serde::Deserialize;

/// Encoding version this crate supports.
pub const SUPPORTED_VERSION: &str = "3";
/// Required `content` tags: key container format and curve.
pub const CONTENT_TAGS: [&str; 2] = ["pkcs8", "sr25519"];
/// Required `type` tags: KDF and cipher.
pub const TYPE_TAGS: [&str; 2] = ["scrypt", "xsalsa20-poly1305"];

/// One account as written by the extension's "Export account" action.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportedAccount {
    /// Base64 envelope: salt, scrypt cost parameters, nonce, ciphertext.
    pub encoded: String,
    pub encoding: AccountEncoding,
    /// SS58 address. Opaque here; carried through for display.
    pub address: String,
    #[serde(default)]
    pub meta: AccountMetadata,
}

/// Declared encoding scheme of an export.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountEncoding {
    pub content: Vec<String>,
    #[serde(rename = "type")]
    pub type_: Vec<String>,
    pub version: String,
}

impl AccountEncoding {
    /// Whether this is the one scheme the pipeline implements. Any
    /// missing tag rejects; attempting to decode an unsupported scheme
    /// would yield garbage key material instead of a clear error.
    pub fn is_supported(&self) -> bool {
        self.version == SUPPORTED_VERSION
            && CONTENT_TAGS.iter().all(|t| has_tag(&self.content, t))
            && TYPE_TAGS.iter().all(|t| has_tag(&self.type_, t))
    }
}

/// Whole-string tag membership. Near-miss strings ("sr25519-ext",
/// "scrypt2") must not pass.
fn has_tag(tags: &[String], tag: &str) -> bool {
    tags.iter().any(|t| t == tag)
}

/// Display-only account metadata, carried through unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountMetadata {
    #[serde(default)]
    pub genesis_hash: String,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub name: String,
    /// Creation time in milliseconds since the Unix epoch.
    #[serde(default)]
    pub when_created: u64,
}
