//! Forges bit-valid extension exports for tests by running the export
//! pipeline in reverse: multiply the scalar back into ed25519 form,
//! assemble the PKCS#8-style blob, seal it, and frame the envelope.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use crypto_secretbox::{
    Key, Nonce, XSalsa20Poly1305,
    aead::{Aead, KeyInit},
};
use schnorrkel::{ExpansionMode, Keypair, MiniSecretKey};
use scrypt::Params;

/// Passphrase used by the recorded reference export.
pub const PASSPHRASE: &str = "sobashochu";
pub const ADDRESS: &str = "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY";

const SALT: [u8; 32] = [0x5C; 32];
const NONCE: [u8; 24] = [0x24; 24];

pub fn keypair_from_seed(seed: [u8; 32]) -> Keypair {
    MiniSecretKey::from_bytes(&seed)
        .unwrap()
        .expand_to_keypair(ExpansionMode::Ed25519)
}

/// Builds a complete exported-account JSON document for `keypair`,
/// sealed under `passphrase`.
pub fn forge_export(keypair: &Keypair, passphrase: &str) -> Vec<u8> {
    let mut blob = Vec::with_capacity(keyport::BLOB_LEN);
    blob.extend_from_slice(&keyport::HEADER);
    blob.extend_from_slice(&keypair.secret.to_ed25519_bytes());
    blob.extend_from_slice(&keyport::DIVIDER);
    blob.extend_from_slice(&keypair.public.to_bytes());
    assert_eq!(blob.len(), keyport::BLOB_LEN);

    let params = Params::new(15, 8, 1, 32).unwrap();
    let mut key = [0u8; 32];
    scrypt::scrypt(passphrase.as_bytes(), &SALT, &params, &mut key).unwrap();

    let cipher = XSalsa20Poly1305::new(Key::from_slice(&key));
    let sealed = cipher
        .encrypt(Nonce::from_slice(&NONCE), blob.as_slice())
        .unwrap();

    let mut envelope = Vec::new();
    envelope.extend_from_slice(&SALT);
    envelope.extend_from_slice(&32768u32.to_le_bytes());
    envelope.extend_from_slice(&1u32.to_le_bytes());
    envelope.extend_from_slice(&8u32.to_le_bytes());
    envelope.extend_from_slice(&NONCE);
    envelope.extend_from_slice(&sealed);

    let document = serde_json::json!({
        "encoded": BASE64.encode(&envelope),
        "encoding": {
            "content": ["pkcs8", "sr25519"],
            "type": ["scrypt", "xsalsa20-poly1305"],
            "version": "3"
        },
        "address": ADDRESS,
        "meta": {
            "genesisHash": "0x91b171bb158e2d3848fa23a9f1c25182fb8e20313b2c1eb49219da7a70ce90c3",
            "isHidden": false,
            "name": "test account",
            "whenCreated": 1658774453793u64
        }
    });

    serde_json::to_vec_pretty(&document).unwrap()
}
