use keyconv_types::network::{CHECKSUM_SIZE, RIPEMD160_SIZE, SHA256_SIZE};
use keyconv_types::{Ripemd160Digest, Sha256Digest};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Single SHA-256 over `data`.
pub fn sha256(data: &[u8]) -> Sha256Digest {
    let mut out = [0u8; SHA256_SIZE];
    out.copy_from_slice(&Sha256::digest(data));
    Sha256Digest::from(out)
}

/// SHA-256 applied twice, as used by Base58Check.
pub fn double_sha256(data: &[u8]) -> [u8; SHA256_SIZE] {
    let mut out = [0u8; SHA256_SIZE];
    out.copy_from_slice(&Sha256::digest(Sha256::digest(data)));
    out
}

/// Single RIPEMD-160 over `data`.
pub fn ripemd160(data: &[u8]) -> Ripemd160Digest {
    let mut out = [0u8; RIPEMD160_SIZE];
    out.copy_from_slice(&Ripemd160::digest(data));
    Ripemd160Digest::from(out)
}

/// RIPEMD-160(SHA-256(data)).
pub fn hash160(data: &[u8]) -> Ripemd160Digest {
    ripemd160(sha256(data).as_bytes())
}

/// Base58Check checksum: the first four bytes of double SHA-256.
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_SIZE] {
    let digest = double_sha256(payload);
    let mut out = [0u8; CHECKSUM_SIZE];
    out.copy_from_slice(&digest[..CHECKSUM_SIZE]);
    out
}
