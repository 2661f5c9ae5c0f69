//! Mainnet constants and exact byte sizes of every artifact.

/// Version byte of a pay-to-pubkey-hash address.
pub const ADDRESS_VERSION_PUBKEY_HASH: u8 = 0x00;

/// Version byte prepended to a private key in Wallet Import Format.
pub const WIF_VERSION: u8 = 0x80;

/// Trailing WIF byte marking a key whose public key is compressed.
pub const WIF_COMPRESSED_FLAG: u8 = 0x01;

pub const PRIVATE_KEY_SIZE: usize = 32;
pub const PUBLIC_KEY_COMPRESSED_SIZE: usize = 33;
pub const PUBLIC_KEY_UNCOMPRESSED_SIZE: usize = 65;
pub const SHA256_SIZE: usize = 32;
pub const RIPEMD160_SIZE: usize = 20;
pub const ADDRESS_VERSION_SIZE: usize = 1;
pub const ADDRESS_SIZE: usize = ADDRESS_VERSION_SIZE + RIPEMD160_SIZE;

/// Length of the Base58Check checksum (truncated double SHA-256).
pub const CHECKSUM_SIZE: usize = 4;

/// WIF payload without compression flag: version + key.
pub const WIF_PAYLOAD_UNCOMPRESSED_SIZE: usize = 1 + PRIVATE_KEY_SIZE;
/// WIF payload with compression flag: version + key + flag.
pub const WIF_PAYLOAD_COMPRESSED_SIZE: usize = WIF_PAYLOAD_UNCOMPRESSED_SIZE + 1;
/// WIF payload followed by its checksum, as found inside the Base58 text.
pub const WIF_CHECKED_UNCOMPRESSED_SIZE: usize = WIF_PAYLOAD_UNCOMPRESSED_SIZE + CHECKSUM_SIZE;
pub const WIF_CHECKED_COMPRESSED_SIZE: usize = WIF_PAYLOAD_COMPRESSED_SIZE + CHECKSUM_SIZE;

/// SEC1 prefix of an uncompressed point.
pub const POINT_UNCOMPRESSED_PREFIX: u8 = 0x04;
/// SEC1 prefix of a compressed point with even `y`.
pub const POINT_EVEN_PREFIX: u8 = 0x02;
/// SEC1 prefix of a compressed point with odd `y`.
pub const POINT_ODD_PREFIX: u8 = 0x03;
