//! Purchaser account identifiers.

use crate::error::InvalidPurchase;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of the purchasing account.
///
/// Always strictly positive. Issuance happens elsewhere; this type only
/// guards the invariant and passes the value through to collaborators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u64")]
pub struct AccountId(u64);

impl AccountId {
    /// The smallest valid account id
    pub const MIN: Self = Self(1);

    /// Creates an `AccountId`, rejecting zero and negative values.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPurchase::InvalidAccountId`] if `raw <= 0`.
    pub fn new(raw: i64) -> Result<Self, InvalidPurchase> {
        match u64::try_from(raw) {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(InvalidPurchase::InvalidAccountId),
        }
    }

    /// Get the inner value
    #[must_use]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for AccountId {
    type Error = InvalidPurchase;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<AccountId> for u64 {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

/// Parses a decimal integer. Fractional (`"1.5"`) and non-numeric input is
/// rejected just like a non-positive value.
impl FromStr for AccountId {
    type Err = InvalidPurchase;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: i64 = s
            .trim()
            .parse()
            .map_err(|_| InvalidPurchase::InvalidAccountId)?;
        Self::new(raw)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_ids_accepted() {
        assert_eq!(AccountId::new(1).unwrap().as_u64(), 1);
        assert_eq!(AccountId::new(i64::MAX).unwrap().as_u64(), i64::MAX as u64);
    }

    #[test]
    fn test_non_positive_ids_rejected() {
        for raw in [0, -1, i64::MIN] {
            assert_eq!(AccountId::new(raw), Err(InvalidPurchase::InvalidAccountId));
        }
    }

    #[test]
    fn test_parse_rejects_non_integers() {
        assert_eq!("42".parse::<AccountId>().unwrap().as_u64(), 42);
        assert_eq!(" 7 ".parse::<AccountId>().unwrap().as_u64(), 7);
        for input in ["1.5", "abc", "", "0", "-3", "1e3"] {
            assert_eq!(
                input.parse::<AccountId>(),
                Err(InvalidPurchase::InvalidAccountId),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_deserialize_validates() {
        let id: AccountId = serde_json::from_str("5").unwrap();
        assert_eq!(id.as_u64(), 5);
        assert!(serde_json::from_str::<AccountId>("0").is_err());
        assert!(serde_json::from_str::<AccountId>("2.5").is_err());
        assert_eq!(serde_json::to_string(&id).unwrap(), "5");
    }
}
