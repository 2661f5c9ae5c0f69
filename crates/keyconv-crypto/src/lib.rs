//! Cryptographic primitives for keyconv.
//!
//! Provides the single-shot hashes of the derivation chain (SHA-256,
//! double SHA-256, RIPEMD-160, HASH160) and secp256k1 public-key derivation
//! with compressed/uncompressed point serialization.
//!
//! All crypto operations wrap established libraries; there is no custom cryptography.

pub mod ec;
pub mod error;
pub mod hasher;

pub use ec::{derive_public_key, validate_point, validate_scalar};
pub use error::{CryptoError, CryptoResult};
pub use hasher::{checksum, double_sha256, hash160, ripemd160, sha256};
