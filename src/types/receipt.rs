//! Round receipt summarizing one materialized round.
//!
//! The receipt carries a SHA-256 root over the SSZ encoding of the round's
//! pairings in table order. Two runs over the same participant snapshot must
//! produce the same root.

use ssz_rs::prelude::*;
use sha2::{Sha256, Digest};
use thiserror::Error;

use crate::types::Pairing;

/// Errors raised while building a receipt
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReceiptError {
    #[error("failed to encode pairing at table {table_number}: {reason}")]
    Encoding { table_number: u64, reason: String },
}

/// Receipt summarizing the pairings produced for one round.
///
/// ## Example
///
/// ```
/// use reciprocal_matcher::types::{Category, Pairing, Participant, RoundReceipt};
///
/// let a = Participant::new(1, Category::TopA, 0);
/// let b = Participant::new(2, Category::TopB, 0);
/// let pairings = vec![Pairing::new(1, &a, &b)];
///
/// let receipt = RoundReceipt::from_pairings(42, 2, &pairings).unwrap();
/// assert_eq!(receipt.pairings_created, 1);
/// assert_eq!(receipt.pairings_root_hex().len(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct RoundReceipt {
    /// Round identifier
    pub round_id: u64,

    /// Number of eligible participants handed to the engine
    pub participants_considered: u64,

    /// Number of pairings created
    pub pairings_created: u64,

    /// SHA-256 over the SSZ encoding of every pairing, in table order
    pub pairings_root: [u8; 32],
}

impl RoundReceipt {
    pub fn new(
        round_id: u64,
        participants_considered: u64,
        pairings_created: u64,
        pairings_root: [u8; 32],
    ) -> Self {
        Self {
            round_id,
            participants_considered,
            pairings_created,
            pairings_root,
        }
    }

    /// Build a receipt with the root computed from `pairings`
    pub fn from_pairings(
        round_id: u64,
        participants_considered: u64,
        pairings: &[Pairing],
    ) -> Result<Self, ReceiptError> {
        let root = Self::compute_root(pairings)?;
        Ok(Self::new(
            round_id,
            participants_considered,
            pairings.len() as u64,
            root,
        ))
    }

    /// Hash the SSZ encoding of each pairing in order.
    pub fn compute_root(pairings: &[Pairing]) -> Result<[u8; 32], ReceiptError> {
        let mut hasher = Sha256::new();
        for pairing in pairings {
            let bytes = ssz_rs::serialize(pairing).map_err(|e| ReceiptError::Encoding {
                table_number: pairing.table_number,
                reason: format!("{e:?}"),
            })?;
            hasher.update(&bytes);
        }
        let result = hasher.finalize();

        let mut hash = [0u8; 32];
        hash.copy_from_slice(&result);
        Ok(hash)
    }

    pub fn pairings_root_hex(&self) -> String {
        hex::encode(self.pairings_root)
    }

    pub fn is_empty(&self) -> bool {
        self.pairings_created == 0
    }

    /// Number of participants left without a table
    pub fn unpaired(&self) -> u64 {
        self.participants_considered
            .saturating_sub(self.pairings_created * 2)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Participant};

    fn pairings() -> Vec<Pairing> {
        let a = Participant::new(1, Category::TopA, 0);
        let b = Participant::new(2, Category::TopB, 0);
        let c = Participant::new(3, Category::BottomA, 0);
        let d = Participant::new(4, Category::BottomB, 0);
        vec![Pairing::new(1, &a, &b), Pairing::new(2, &c, &d)]
    }

    #[test]
    fn test_receipt_from_pairings() {
        let receipt = RoundReceipt::from_pairings(9, 5, &pairings()).unwrap();
        assert_eq!(receipt.round_id, 9);
        assert_eq!(receipt.participants_considered, 5);
        assert_eq!(receipt.pairings_created, 2);
        assert_eq!(receipt.unpaired(), 1);
        assert!(!receipt.is_empty());
    }

    #[test]
    fn test_root_is_deterministic() {
        let root1 = RoundReceipt::compute_root(&pairings()).unwrap();
        let root2 = RoundReceipt::compute_root(&pairings()).unwrap();
        assert_eq!(root1, root2);
    }

    #[test]
    fn test_root_depends_on_order() {
        let mut reversed = pairings();
        reversed.reverse();
        assert_ne!(
            RoundReceipt::compute_root(&pairings()).unwrap(),
            RoundReceipt::compute_root(&reversed).unwrap()
        );
    }

    #[test]
    fn test_empty_round_receipt() {
        let receipt = RoundReceipt::from_pairings(1, 3, &[]).unwrap();
        assert!(receipt.is_empty());
        assert_eq!(receipt.unpaired(), 3);
        // SHA-256 of the empty string
        assert_eq!(
            receipt.pairings_root_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_receipt_ssz_size() {
        let receipt = RoundReceipt::new(1, 0, 0, [0u8; 32]);
        let bytes = ssz_rs::serialize(&receipt).expect("Failed to serialize");
        // 8 + 8 + 8 + 32
        assert_eq!(bytes.len(), 56, "RoundReceipt should serialize to 56 bytes");
    }
}
