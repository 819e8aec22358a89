//! # jwt-forge: decode, mutate and re-sign JWTs
//!
//! A small toolkit for demonstrating two classic JWT verifier bugs during
//! authorized security testing:
//!
//! - the `alg: none` bypass, where a verifier accepts an unsigned token, and
//! - the RS256-to-HS256 key-confusion attack, where a verifier is tricked into
//!   checking an HMAC signature keyed with its own RSA public key.
//!
//! The crate deliberately does **not** verify tokens or validate claims; it
//! only parses the compact serialization, mutates header and payload, and
//! re-signs with HMAC-SHA256, built on the [RustCrypto][] ecosystem.
//!
//! ```rust
//! use jwt_forge::{attacks, Token};
//!
//! let token = Token::parse(
//!     "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
//!      eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIiwiaWF0IjoxNTE2MjM5MDIyfQ.\
//!      SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c",
//! )?;
//! let forged = attacks::none_token(token)?;
//! assert!(forged.ends_with('.'));
//! # Ok::<(), jwt_forge::Error>(())
//! ```
//!
//! [RustCrypto]: https://github.com/RustCrypto

#![deny(unsafe_code)]
#![deny(missing_docs)]

pub mod attacks;
pub mod base64data;
mod error;
pub mod hmac;
pub mod token;

pub use error::{Error, Result};
pub use hmac::HmacKey;
pub use token::Token;
