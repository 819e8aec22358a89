//! HMAC-SHA256 signing for forged tokens.
//!
//! Based on the [hmac](https://crates.io/crates/hmac) crate.

use std::path::Path;

use hmac::{Mac, SimpleHmac};
use sha2::Sha256;

use crate::base64data;
use crate::error::{Error, Result};

/// A key used to seed an HMAC signature.
///
/// Signing keys are arbitrary bytes. For the key-confusion attack they are the
/// verbatim contents of an RSA public key file, PEM armor included.
#[derive(Debug, Clone, PartialEq, Eq, zeroize::Zeroize, zeroize::ZeroizeOnDrop, Default)]
pub struct HmacKey {
    key: Vec<u8>,
}

impl HmacKey {
    /// Read key material from a file.
    ///
    /// Fails with [`Error::KeyFileNotFound`] when the path does not exist, so
    /// the caller can distinguish a missing key file from other read errors.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::KeyFileNotFound(path.to_owned()));
        }
        let key = std::fs::read(path)?;
        tracing::debug!(path = %path.display(), len = key.len(), "loaded HMAC key");
        Ok(Self { key })
    }

    /// Length of the HMAC key.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.key.len()
    }
}

impl<T> From<T> for HmacKey
where
    T: Into<Vec<u8>>,
{
    fn from(key: T) -> Self {
        Self { key: key.into() }
    }
}

impl AsRef<[u8]> for HmacKey {
    fn as_ref(&self) -> &[u8] {
        &self.key
    }
}

/// Sign the base64url-encoded `header.payload` string with HMAC-SHA256.
///
/// Returns the signature segment: the raw digest, base64url-encoded with
/// padding stripped. HMAC accepts keys of any length, so this cannot fail.
pub fn sign_hs256(key: &HmacKey, signing_input: &str) -> String {
    let mut digest: SimpleHmac<Sha256> =
        SimpleHmac::new_from_slice(key.as_ref()).expect("HMAC accepts any key length");
    digest.update(signing_input.as_bytes());
    base64data::encode(digest.finalize().into_bytes())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn well_known_hs256_vector() {
        // The jwt.io default token: key "your-256-bit-secret" over its
        // header.payload.
        let key = HmacKey::from("your-256-bit-secret");
        let signing_input = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
            eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIiwiaWF0IjoxNTE2MjM5MDIyfQ";
        assert_eq!(
            sign_hs256(&key, signing_input),
            "SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c"
        );

        // A different key must not reproduce that signature.
        assert_eq!(
            sign_hs256(&HmacKey::from("secret"), signing_input),
            "XbPfbIHMI6arZ3Y922BhjWgQzWXcXNrz0ogtVhfEd2o"
        );
    }

    #[test]
    fn missing_key_file() {
        let err = HmacKey::from_file("/nonexistent/key.pem").unwrap_err();
        assert!(matches!(err, Error::KeyFileNotFound(_)));
        assert_eq!(err.to_string(), "File not found");
    }

    #[test]
    fn key_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("public.pem");
        std::fs::write(&path, b"-----BEGIN PUBLIC KEY-----\n").unwrap();

        let key = HmacKey::from_file(&path).unwrap();
        assert_eq!(key.as_ref(), b"-----BEGIN PUBLIC KEY-----\n");
        assert_eq!(key.len(), 27);
    }
}
