// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! ForeFlight container encryption.
//!
//! AES-128-CBC with PKCS#7 padding. The key is fixed by the vendor and
//! shipped in every client, so it protects nothing; the random IV is
//! written in front of the ciphertext.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use crate::{CodecError, Result};

type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;
type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;

/// Vendor key, the ASCII bytes of a fixed 16-character string.
const KEY: &[u8; 16] = b"81e06e41a93f3848";

/// AES block and IV length.
pub const IV_LEN: usize = 16;

/// Encrypt `plaintext`, returning `IV || ciphertext`.
pub fn encrypt(plaintext: &[u8]) -> Result<Vec<u8>> {
    let mut iv = [0u8; IV_LEN];
    getrandom::getrandom(&mut iv)
        .map_err(|e| CodecError::Other(format!("failed to generate IV: {e}")))?;
    Ok(encrypt_with_iv(plaintext, &iv))
}

fn encrypt_with_iv(plaintext: &[u8], iv: &[u8; IV_LEN]) -> Vec<u8> {
    let ciphertext =
        Aes128CbcEnc::new(KEY.into(), iv.into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext);
    let mut out = Vec::with_capacity(IV_LEN + ciphertext.len());
    out.extend_from_slice(iv);
    out.extend_from_slice(&ciphertext);
    out
}

/// Decrypt an `IV || ciphertext` buffer.
pub fn decrypt(data: &[u8]) -> Result<Vec<u8>> {
    if data.len() < IV_LEN {
        return Err(CodecError::truncated(IV_LEN, data.len(), 0));
    }
    let (iv, ciphertext) = data.split_at(IV_LEN);
    if ciphertext.is_empty() || ciphertext.len() % IV_LEN != 0 {
        return Err(CodecError::decryption(format!(
            "ciphertext length {} is not a positive multiple of {IV_LEN}",
            ciphertext.len()
        )));
    }
    let decryptor = Aes128CbcDec::new_from_slices(KEY, iv)
        .map_err(|e| CodecError::decryption(e.to_string()))?;
    decryptor
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CodecError::decryption("invalid padding, wrong key or corrupt data"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let plain = br#"{"type":"checklist","payload":{}}"#;
        let encrypted = encrypt(plain).unwrap();
        assert_eq!(decrypt(&encrypted).unwrap(), plain.to_vec());
    }

    #[test]
    fn test_length_is_iv_plus_padded_plaintext() {
        for len in [0usize, 1, 15, 16, 17, 100] {
            let plain = vec![b'x'; len];
            let encrypted = encrypt(&plain).unwrap();
            let padded = (len / 16 + 1) * 16;
            assert_eq!(encrypted.len(), IV_LEN + padded, "plaintext length {len}");
        }
    }

    #[test]
    fn test_iv_is_random() {
        let a = encrypt(b"same").unwrap();
        let b = encrypt(b"same").unwrap();
        assert_ne!(a[..IV_LEN], b[..IV_LEN]);
    }

    #[test]
    fn test_known_iv_is_deterministic() {
        let iv = [7u8; IV_LEN];
        assert_eq!(encrypt_with_iv(b"abc", &iv), encrypt_with_iv(b"abc", &iv));
    }

    #[test]
    fn test_short_input_is_truncated() {
        assert!(matches!(
            decrypt(&[0u8; 8]),
            Err(CodecError::TruncatedInput { .. })
        ));
    }

    #[test]
    fn test_partial_block_fails() {
        assert!(matches!(
            decrypt(&[0u8; IV_LEN]),
            Err(CodecError::DecryptionFailure { .. })
        ));
        assert!(matches!(
            decrypt(&[0u8; 20]),
            Err(CodecError::DecryptionFailure { .. })
        ));
    }
}
