//! Codecs for keyconv.
//!
//! Converts between raw artifact bytes and their external text forms:
//!
//! - [`Hex`] : lower-case hexadecimal, case-insensitive on decode
//! - [`Base58`] : Bitcoin alphabet, leading zero bytes preserved as `1`s
//! - [`Base58Check`] : Base58 of `payload ∥ checksum`, checksum verified on decode
//! - [`wif`] : Wallet Import Format framing of a private key
//!
//! Every codec enforces [`CodecLimits`], the fixed bounds standing in for
//! the tool's buffers.

pub mod base16;
pub mod base58;
pub mod check;
pub mod error;
pub mod format;
pub mod wif;

pub use base16::Hex;
pub use base58::Base58;
pub use check::Base58Check;
pub use error::{CodecError, CodecResult};
pub use format::{codec_for, decode_input, encode_output, CodecLimits, TextCodec};
