//! Ordering of the derivation chain.
//!
//! Reachability is decided by rank alone: a kind can be produced from any
//! kind of equal or lower rank.

use keyconv_types::ArtifactKind;

use crate::error::{ConvertError, ConvertResult};

/// Whether `to` can be derived from `from`.
pub fn is_reachable(from: ArtifactKind, to: ArtifactKind) -> bool {
    to.rank() >= from.rank()
}

/// Every kind reachable from `from`, in chain order.
pub fn reachable_from(from: ArtifactKind) -> Vec<ArtifactKind> {
    ArtifactKind::ALL
        .into_iter()
        .filter(|to| is_reachable(from, *to))
        .collect()
}

/// The kinds visited when deriving `to` from `from`, both ends included.
///
/// The private key and its WIF framing are interchangeable, so a path that
/// starts from WIF and leaves rank 0 passes through the bare private key,
/// and a path that ends at WIF passes through it too.
pub fn path(from: ArtifactKind, to: ArtifactKind) -> ConvertResult<Vec<ArtifactKind>> {
    if !is_reachable(from, to) {
        return Err(ConvertError::ImpossibleConversion { from, to });
    }
    let mut steps = vec![from];
    if from == to {
        return Ok(steps);
    }
    if from == ArtifactKind::PrivateKeyWif || to == ArtifactKind::PrivateKeyWif {
        if from != ArtifactKind::PrivateKey {
            steps.push(ArtifactKind::PrivateKey);
        }
        if to == ArtifactKind::PrivateKeyWif {
            steps.push(to);
            return Ok(steps);
        }
    }
    steps.extend(
        ArtifactKind::ALL
            .into_iter()
            .filter(|kind| kind.rank() > from.rank() && kind.rank() <= to.rank()),
    );
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ArtifactKind::*;

    #[test]
    fn forward_is_reachable() {
        assert!(is_reachable(PrivateKey, Address));
        assert!(is_reachable(PublicKey, PublicKeySha256));
        assert!(is_reachable(Address, Address));
    }

    #[test]
    fn private_forms_reach_each_other() {
        assert!(is_reachable(PrivateKey, PrivateKeyWif));
        assert!(is_reachable(PrivateKeyWif, PrivateKey));
    }

    #[test]
    fn backward_is_unreachable() {
        assert!(!is_reachable(PublicKey, PrivateKey));
        assert!(!is_reachable(Address, PublicKeyRipemd160));
        assert!(!is_reachable(PublicKeySha256, PublicKey));
    }

    #[test]
    fn reachable_from_public_key() {
        assert_eq!(
            reachable_from(PublicKey),
            vec![PublicKey, PublicKeySha256, PublicKeyRipemd160, Address]
        );
        assert_eq!(reachable_from(PrivateKey), ArtifactKind::ALL.to_vec());
        assert_eq!(reachable_from(Address), vec![Address]);
    }

    #[test]
    fn path_from_wif_to_address() {
        assert_eq!(
            path(PrivateKeyWif, Address).unwrap(),
            vec![PrivateKeyWif, PrivateKey, PublicKey, PublicKeySha256, PublicKeyRipemd160, Address]
        );
    }

    #[test]
    fn path_between_private_forms() {
        assert_eq!(path(PrivateKey, PrivateKeyWif).unwrap(), vec![PrivateKey, PrivateKeyWif]);
        assert_eq!(path(PrivateKeyWif, PrivateKey).unwrap(), vec![PrivateKeyWif, PrivateKey]);
        assert_eq!(path(PrivateKeyWif, PrivateKeyWif).unwrap(), vec![PrivateKeyWif]);
    }

    #[test]
    fn path_within_the_public_part() {
        assert_eq!(
            path(PublicKeySha256, Address).unwrap(),
            vec![PublicKeySha256, PublicKeyRipemd160, Address]
        );
        assert_eq!(path(PrivateKey, PublicKey).unwrap(), vec![PrivateKey, PublicKey]);
    }

    #[test]
    fn backward_path_is_impossible() {
        let err = path(PublicKeyRipemd160, PublicKeySha256).unwrap_err();
        assert_eq!(
            err,
            ConvertError::ImpossibleConversion { from: PublicKeyRipemd160, to: PublicKeySha256 }
        );
    }
}
