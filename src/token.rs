//! Compact JWT parsing and re-encoding.
//!
//! A [`Token`] is the decoded form of the `header.payload.signature` compact
//! serialization. Header and payload are kept as insertion-ordered JSON maps
//! (serde_json's `preserve_order` feature) so that re-serializing them
//! reproduces the exact bytes the original signature was computed over.

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::base64data;
use crate::error::{Error, Result};

/// A decoded JWT, mutable in place before being re-encoded or re-signed.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The JOSE header, as an ordered JSON object.
    pub header: Map<String, Value>,
    /// The claims set, as an ordered JSON object.
    pub payload: Map<String, Value>,
    /// The signature segment, kept as raw base64url text.
    pub signature: String,
}

impl Token {
    /// Parse the compact serialization of a JWT.
    ///
    /// The input must contain at least three dot-separated segments; anything
    /// after the third is ignored. Header and payload are base64url-decoded
    /// (tolerating present or absent `=` padding) and parsed as JSON objects.
    /// The signature segment is not decoded.
    pub fn parse(raw: &str) -> Result<Self> {
        let segments: Vec<&str> = raw.split('.').collect();
        if segments.len() < 3 {
            return Err(Error::MalformedToken {
                segments: segments.len(),
            });
        }

        let header = decode_object("header", segments[0])?;
        let payload = decode_object("payload", segments[1])?;
        tracing::debug!(alg = ?header.get("alg"), "parsed token");

        Ok(Token {
            header,
            payload,
            signature: segments[2].to_owned(),
        })
    }

    /// Re-encode the header and payload as `base64url(header).base64url(payload)`.
    ///
    /// Both segments are serialized as compact JSON (no whitespace) with key
    /// order preserved. This string is also the JWS signing input.
    pub fn signing_input(&self) -> Result<String> {
        let header = serde_json::to_vec(&self.header)?;
        let payload = serde_json::to_vec(&self.payload)?;
        Ok(format!(
            "{}.{}",
            base64data::encode(header),
            base64data::encode(payload)
        ))
    }

    /// Set the header `alg` field. Pure mutation, no re-encoding.
    pub fn set_algorithm(&mut self, alg: &str) {
        self.header
            .insert("alg".to_owned(), Value::String(alg.to_owned()));
    }

    /// Replace the claims set wholesale.
    ///
    /// `raw` must parse as a JSON object; anything else (including valid JSON
    /// scalars and arrays) is rejected, since a JWT claims set is an object.
    pub fn replace_payload(&mut self, raw: &str) -> Result<()> {
        let payload = match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => map,
            Ok(other) => {
                return Err(Error::InvalidPayloadJson(format!(
                    "expected a JSON object, got {other}"
                )))
            }
            Err(err) => return Err(Error::InvalidPayloadJson(err.to_string())),
        };
        self.payload = payload;
        Ok(())
    }
}

impl FromStr for Token {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        Token::parse(raw)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let input = self.signing_input().map_err(|_| fmt::Error)?;
        write!(f, "{}.{}", input, self.signature)
    }
}

fn decode_object(segment: &'static str, data: &str) -> Result<Map<String, Value>> {
    let bytes = base64data::decode(segment, data)?;
    serde_json::from_slice(&bytes).map_err(|source| Error::InvalidJson { segment, source })
}

#[cfg(test)]
mod test {
    use super::*;

    // https://jwt.io example token, HS256 with key "your-256-bit-secret".
    const JWT_IO: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
        eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIiwiaWF0IjoxNTE2MjM5MDIyfQ.\
        SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c";

    #[test]
    fn parse_splits_segments() {
        let token = Token::parse(JWT_IO).unwrap();
        assert_eq!(token.header["alg"], "HS256");
        assert_eq!(token.header["typ"], "JWT");
        assert_eq!(token.payload["name"], "John Doe");
        assert_eq!(token.payload["iat"], 1516239022);
        assert_eq!(
            token.signature,
            "SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c"
        );
    }

    #[test]
    fn round_trip_preserves_signed_bytes() {
        let token = Token::parse(JWT_IO).unwrap();
        let (header_and_payload, _) = JWT_IO.rsplit_once('.').unwrap();
        assert_eq!(token.signing_input().unwrap(), header_and_payload);
    }

    #[test]
    fn parse_rejects_two_segments() {
        let err = Token::parse("eyJhbGciOiJub25lIn0.eyJmb28iOiJiYXIifQ").unwrap_err();
        assert!(matches!(err, Error::MalformedToken { segments: 2 }));
    }

    #[test]
    fn parse_rejects_non_json_payload() {
        // "aGVsbG8" is valid base64url for "hello", which is not JSON.
        let err = Token::parse("eyJhbGciOiJub25lIn0.aGVsbG8.sig").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidJson {
                segment: "payload",
                ..
            }
        ));
    }

    #[test]
    fn parse_accepts_padded_segments() {
        // Same payload segment with and without its single padding character.
        let padded = Token::parse("eyJhbGciOiJub25lIn0=.eyJmb28iOiJiYXIifQ==.").unwrap();
        let stripped = Token::parse("eyJhbGciOiJub25lIn0.eyJmb28iOiJiYXIifQ.").unwrap();
        assert_eq!(padded, stripped);
    }

    #[test]
    fn set_algorithm_overwrites_alg() {
        let mut token = Token::parse(JWT_IO).unwrap();
        token.set_algorithm("none");
        assert_eq!(token.header["alg"], "none");
        assert_eq!(token.header["typ"], "JWT");
    }

    #[test]
    fn replace_payload_requires_object() {
        let mut token = Token::parse(JWT_IO).unwrap();
        assert!(matches!(
            token.replace_payload("[1,2,3]").unwrap_err(),
            Error::InvalidPayloadJson(_)
        ));
        assert!(matches!(
            token.replace_payload("{not json").unwrap_err(),
            Error::InvalidPayloadJson(_)
        ));
        // Failed replacement leaves the payload untouched.
        assert_eq!(token.payload["sub"], "1234567890");

        token.replace_payload(r#"{"sub":"0","admin":true}"#).unwrap();
        assert_eq!(token.payload["admin"], true);
    }
}
