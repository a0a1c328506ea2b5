//! Confirmation of a fulfilled purchase.

use crate::account::AccountId;
use crate::money::Money;
use crate::summary::CategoryCountSummary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a fulfilled purchase
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PurchaseId(Uuid);

impl PurchaseId {
    /// Creates a new random `PurchaseId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PurchaseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PurchaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What was charged and reserved for a successful purchase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseReceipt {
    /// Identifier of this purchase
    pub purchase_id: PurchaseId,
    /// Account charged and reserved for
    pub account_id: AccountId,
    /// Tickets per category
    pub summary: CategoryCountSummary,
    /// Amount passed to the payment charger
    pub total_amount: Money,
    /// Seat count passed to the seat allocator
    pub total_seats: u32,
    /// When the purchase was fulfilled
    pub purchased_at: DateTime<Utc>,
}
