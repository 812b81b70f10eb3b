//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a catalog product.
///
/// Rendered as plain decimal text wherever it is displayed or searched.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<ProductId> for u64 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = u64::from_str(s)
            .map_err(|e| DomainError::validation(format!("ProductId: {e}")))?;
        Ok(Self(value))
    }
}

/// Monotonic id allocator.
///
/// Ids are handed out in ascending order starting at 1 and are never reused,
/// so a removed record's id cannot be reassigned to a later insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Allocate the next id.
    pub fn next_id(&mut self) -> ProductId {
        let id = ProductId::new(self.next);
        self.next += 1;
        id
    }

    /// Ensure future allocations land strictly after `id`.
    ///
    /// Used when a store is seeded with pre-existing records.
    pub fn bump_past(&mut self, id: ProductId) {
        if id.as_u64() >= self.next {
            self.next = id.as_u64() + 1;
        }
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_allocated_from_one() {
        let mut seq = IdSequence::new();
        assert_eq!(seq.next_id(), ProductId::new(1));
        assert_eq!(seq.next_id(), ProductId::new(2));
        assert_eq!(seq.next_id(), ProductId::new(3));
    }

    #[test]
    fn bump_past_skips_seeded_ids() {
        let mut seq = IdSequence::new();
        seq.bump_past(ProductId::new(7));
        assert_eq!(seq.next_id(), ProductId::new(8));
    }

    #[test]
    fn bump_past_is_a_no_op_for_already_spent_ids() {
        let mut seq = IdSequence::new();
        let first = seq.next_id();
        seq.bump_past(first);
        assert_eq!(seq.next_id(), ProductId::new(2));
    }

    #[test]
    fn product_id_parses_from_decimal_text() {
        assert_eq!("42".parse::<ProductId>().unwrap(), ProductId::new(42));
        assert!("x1".parse::<ProductId>().is_err());
    }

    #[test]
    fn product_id_displays_as_decimal_text() {
        assert_eq!(ProductId::new(12).to_string(), "12");
    }
}
