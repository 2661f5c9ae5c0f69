//! Foundation types for keyconv.
//!
//! This crate provides the data model of the key/address derivation chain.
//! Every other keyconv crate depends on `keyconv-types`.
//!
//! # Key Types
//!
//! - [`ArtifactKind`] : One link of the chain (private key through address)
//! - [`DataFormat`] : External serialization (raw, hex, Base58, Base58Check)
//! - [`PrivateKey`] : 32-byte scalar with an optional compression preference
//! - [`PublicKey`] : SEC1 point, 33 bytes compressed or 65 bytes uncompressed
//! - [`Sha256Digest`], [`Ripemd160Digest`] : Fixed-length hash outputs
//! - [`Address`] : Version byte plus HASH160 of the public key
//! - [`ErrorKind`] : Stable failure tags shared by all crates

pub mod address;
pub mod digest;
pub mod error;
pub mod keys;
pub mod kind;
pub mod network;

pub use address::Address;
pub use digest::{Ripemd160Digest, Sha256Digest};
pub use error::{ErrorKind, TypeError};
pub use keys::{PrivateKey, PublicKey};
pub use kind::{ArtifactKind, Compression, DataFormat, OutputSelection};
