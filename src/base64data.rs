//! Base64 data tools for the compact JWT serialization.
//!
//! JWT segments use the URL-safe base64 alphabet with padding stripped
//! ([RFC 7515, appendix C][rfc7515-c]). Tokens found in the wild sometimes
//! retain some or all of their `=` padding, so decoding tolerates both forms.
//!
//! [rfc7515-c]: https://tools.ietf.org/html/rfc7515#appendix-C

use base64ct::{Base64UrlUnpadded, Encoding};

use crate::error::{Error, Result};

/// Encode bytes as unpadded base64url, the form used in compact tokens.
pub fn encode(data: impl AsRef<[u8]>) -> String {
    Base64UrlUnpadded::encode_string(data.as_ref())
}

/// Decode a single token segment.
///
/// Trailing `=` padding is stripped before decoding, so a segment missing
/// one, two or three padding characters decodes identically to its fully
/// padded form. `segment` names the segment in the error message.
pub fn decode(segment: &'static str, data: &str) -> Result<Vec<u8>> {
    Base64UrlUnpadded::decode_vec(data.trim_end_matches('='))
        .map_err(|source| Error::InvalidBase64 { segment, source })
}
