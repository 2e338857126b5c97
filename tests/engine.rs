//! End-to-end tests over the public API

use rc6_pcbc::{CipherConfig, Error, Rc6PcbcCipher};

const KEY: &str = "0123456789ABCDEF";
const IV: &str = "ABCDEFGHIJKLMNOP";

fn engine() -> Rc6PcbcCipher {
    Rc6PcbcCipher::new(CipherConfig::parse("20", "16").unwrap())
}

#[test]
fn round_trip_across_block_counts() {
    let engine = engine();

    // Messages spanning zero, one, two, and many blocks once padded
    let messages = [
        String::new(),
        "a".to_string(),
        "exactly 16 bytes".to_string(),
        "just over one block!".to_string(),
        "x".repeat(31),
        "y".repeat(32),
        "long message ".repeat(50),
    ];

    for message in &messages {
        let ciphertext = engine.encrypt(message, KEY, IV).unwrap();
        let plaintext = engine.decrypt(&ciphertext, KEY, IV).unwrap();
        assert_eq!(&plaintext, message, "failed for {} bytes", message.len());
    }
}

#[test]
fn round_trip_multibyte_text() {
    let engine = engine();
    let message = "grüße, 世界 — ∑ of UTF-8";

    let ciphertext = engine.encrypt(message, KEY, IV).unwrap();
    assert_eq!(engine.decrypt(&ciphertext, KEY, IV).unwrap(), message);
}

#[test]
fn round_trip_other_key_sizes() {
    let engine = engine();

    for key in ["0123456789ABCDEF01234567", "0123456789ABCDEF0123456789ABCDEF"] {
        let ciphertext = engine.encrypt("HelloWorld", key, IV).unwrap();
        assert_eq!(engine.decrypt(&ciphertext, key, IV).unwrap(), "HelloWorld");
    }
}

#[test]
fn round_trip_alternate_round_counts() {
    for rounds in ["1", "12", "24"] {
        let engine = Rc6PcbcCipher::new(CipherConfig::parse(rounds, "16").unwrap());
        let ciphertext = engine.encrypt("HelloWorld", KEY, IV).unwrap();
        assert_eq!(engine.decrypt(&ciphertext, KEY, IV).unwrap(), "HelloWorld");
    }
}

#[test]
fn ciphertext_is_base64() {
    let engine = engine();
    let ciphertext = engine.encrypt("HelloWorld", KEY, IV).unwrap();

    assert!(ciphertext
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '='));
}

#[test]
fn diffusion_reaches_end_of_message() {
    let engine = engine();
    let message: Vec<u8> = (0..160).map(|i| (i % 251) as u8).collect();

    let mut ciphertext = engine
        .encrypt_bytes(&message, KEY.as_bytes(), IV.as_bytes())
        .unwrap();

    // Flip one bit in the third ciphertext block; every later decrypted
    // block changes, so either the trailer no longer validates or the
    // recovered message differs from the original.
    ciphertext[2 * 16] ^= 0x80;

    match engine.decrypt_bytes(&ciphertext, KEY.as_bytes(), IV.as_bytes()) {
        Err(Error::Padding { .. }) => {}
        Ok(recovered) => assert_ne!(recovered, message),
        Err(other) => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn wrong_iv_does_not_round_trip() {
    let engine = engine();
    let ciphertext = engine.encrypt("HelloWorld", KEY, IV).unwrap();

    match engine.decrypt(&ciphertext, KEY, "PONMLKJIHGFEDCBA") {
        Ok(plaintext) => assert_ne!(plaintext, "HelloWorld"),
        Err(_) => {}
    }
}

#[test]
fn config_errors_surface_from_parse() {
    assert!(matches!(
        CipherConfig::parse("many", "16"),
        Err(Error::Parameter { .. })
    ));
    assert!(matches!(
        CipherConfig::parse("20", "10"),
        Err(Error::Parameter { .. })
    ));
}
