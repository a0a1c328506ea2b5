//! Per-category totals for one purchase.

use crate::error::InvalidPurchase;
use crate::money::Money;
use crate::ticket::{TicketType, TicketTypeRequest};
use serde::{Deserialize, Serialize};

/// Total requested tickets per category.
///
/// Every category is always present; unseen categories count as zero. The
/// amount to charge and the seats to reserve are derived from this alone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCountSummary {
    adult: u32,
    child: u32,
    infant: u32,
}

impl CategoryCountSummary {
    /// Sums `requests` per category.
    ///
    /// Line items are visited in order and the first negative count stops the
    /// tally.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPurchase::NegativeTicketCount`] for a negative count.
    pub fn tally(requests: &[TicketTypeRequest]) -> Result<Self, InvalidPurchase> {
        requests.iter().try_fold(Self::default(), |mut summary, request| {
            let count = u32::try_from(request.count()).map_err(|_| {
                InvalidPurchase::NegativeTicketCount {
                    ticket_type: request.ticket_type(),
                    count: request.count(),
                }
            })?;
            let slot = summary.slot_mut(request.ticket_type());
            *slot = slot.saturating_add(count);
            Ok(summary)
        })
    }

    /// Tickets requested for `ticket_type`
    #[must_use]
    pub const fn count(&self, ticket_type: TicketType) -> u32 {
        match ticket_type {
            TicketType::Adult => self.adult,
            TicketType::Child => self.child,
            TicketType::Infant => self.infant,
        }
    }

    /// Adult tickets
    #[must_use]
    pub const fn adults(&self) -> u32 {
        self.adult
    }

    /// Child tickets
    #[must_use]
    pub const fn children(&self) -> u32 {
        self.child
    }

    /// Infant tickets
    #[must_use]
    pub const fn infants(&self) -> u32 {
        self.infant
    }

    /// Amount payable at the fixed unit prices
    #[must_use]
    pub fn total_amount(&self) -> Money {
        self.iter().fold(Money::ZERO, |total, (ticket_type, count)| {
            total.saturating_add(ticket_type.unit_price().saturating_multiply(count))
        })
    }

    /// Seats to reserve. Infants sit on an adult's lap and take none.
    #[must_use]
    pub fn total_seats(&self) -> u32 {
        self.iter()
            .filter(|(ticket_type, _)| ticket_type.occupies_seat())
            .fold(0_u32, |seats, (_, count)| seats.saturating_add(count))
    }

    /// `(category, count)` for every category, zero counts included
    pub fn iter(&self) -> impl Iterator<Item = (TicketType, u32)> + '_ {
        TicketType::ALL.into_iter().map(move |t| (t, self.count(t)))
    }

    fn slot_mut(&mut self, ticket_type: TicketType) -> &mut u32 {
        match ticket_type {
            TicketType::Adult => &mut self.adult,
            TicketType::Child => &mut self.child,
            TicketType::Infant => &mut self.infant,
        }
    }
}
