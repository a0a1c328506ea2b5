//! Ticket purchase service.
//!
//! Validates a purchase, derives what to charge and how many seats to
//! reserve, then calls the payment charger and the seat allocator once each.
//!
//! Rules run in a fixed order and the first failure wins:
//!
//! ```text
//! 1. request list non-empty            → NoTicketsRequested
//! 2. account id positive               → InvalidAccountId
//! 3. 0 < sum(counts) <= 25             → NoTicketsRequested / TooManyTickets
//! 4. every count non-negative          → NegativeTicketCount
//! 5. at least one adult                → MissingAdult
//! 6. infants <= adults                 → TooManyInfants
//! ```
//!
//! Nothing is dispatched unless every rule passes. Once dispatch starts there
//! is no compensation: if seat reservation fails after the charge, the error
//! is returned and the charge stands.

use cinema_tickets_core::environment::{Clock, PaymentCharger, SeatAllocator};
use cinema_tickets_core::{
    AccountId, CategoryCountSummary, InvalidPurchase, MAX_TICKETS_PER_PURCHASE, PurchaseError,
    PurchaseId, PurchaseReceipt, TicketTypeRequest,
};
use tracing::{debug, error, info, warn};

/// Injected collaborators for the purchase service.
#[derive(Debug, Clone)]
pub struct TicketEnvironment<P, S, C> {
    /// Takes payment
    pub payment: P,
    /// Reserves seats
    pub seats: S,
    /// Timestamps receipts
    pub clock: C,
}

impl<P, S, C> TicketEnvironment<P, S, C> {
    /// Create a new environment
    #[must_use]
    pub const fn new(payment: P, seats: S, clock: C) -> Self {
        Self { payment, seats, clock }
    }
}

/// Validates purchases and dispatches them to the injected collaborators.
///
/// Holds no state between calls. Calling twice with the same input charges
/// and reserves twice.
#[derive(Debug, Clone)]
pub struct TicketService<P, S, C> {
    env: TicketEnvironment<P, S, C>,
}

impl<P, S, C> TicketService<P, S, C>
where
    P: PaymentCharger,
    S: SeatAllocator,
    C: Clock,
{
    /// Create a service over the given environment
    #[must_use]
    pub const fn new(env: TicketEnvironment<P, S, C>) -> Self {
        Self { env }
    }

    /// Purchase `requests` for `account_id`.
    ///
    /// On success the payment charger has been called with the total amount,
    /// then the seat allocator with the total seat count.
    ///
    /// # Errors
    ///
    /// - [`PurchaseError::Invalid`] if any purchase rule fails; no
    ///   collaborator was called.
    /// - [`PurchaseError::Payment`] if the charger faults; no seats were
    ///   reserved.
    /// - [`PurchaseError::SeatReservation`] if the allocator faults after the
    ///   charge went through.
    pub fn purchase_tickets(
        &self,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseReceipt, PurchaseError> {
        let (account_id, summary) = validate(account_id, requests).inspect_err(|reason| {
            warn!(account_id, lines = requests.len(), %reason, "Purchase rejected");
        })?;

        let total_amount = summary.total_amount();
        let total_seats = summary.total_seats();
        debug!(
            %account_id,
            adults = summary.adults(),
            children = summary.children(),
            infants = summary.infants(),
            amount = total_amount.units(),
            seats = total_seats,
            "Purchase validated"
        );

        self.env
            .payment
            .charge(account_id, total_amount)
            .map_err(|source| {
                warn!(%account_id, amount = total_amount.units(), error = %source, "Payment failed");
                PurchaseError::Payment { account_id, amount: total_amount, source }
            })?;

        self.env
            .seats
            .reserve(account_id, total_seats)
            .map_err(|source| {
                error!(
                    %account_id,
                    amount = total_amount.units(),
                    seats = total_seats,
                    error = %source,
                    "Seat reservation failed after payment was taken"
                );
                PurchaseError::SeatReservation { account_id, seats: total_seats, source }
            })?;

        let receipt = PurchaseReceipt {
            purchase_id: PurchaseId::new(),
            account_id,
            summary,
            total_amount,
            total_seats,
            purchased_at: self.env.clock.now(),
        };
        info!(
            purchase_id = %receipt.purchase_id,
            %account_id,
            amount = total_amount.units(),
            seats = total_seats,
            "Purchase fulfilled"
        );
        Ok(receipt)
    }
}

fn validate(
    account_id: i64,
    requests: &[TicketTypeRequest],
) -> Result<(AccountId, CategoryCountSummary), InvalidPurchase> {
    if requests.is_empty() {
        return Err(InvalidPurchase::NoTicketsRequested);
    }
    let account_id = AccountId::new(account_id)?;
    check_total(requests)?;
    let summary = CategoryCountSummary::tally(requests)?;
    check_composition(&summary)?;
    Ok((account_id, summary))
}

/// Runs on the raw counts, before any category split or sign check.
fn check_total(requests: &[TicketTypeRequest]) -> Result<(), InvalidPurchase> {
    let requested = requests
        .iter()
        .fold(0_i64, |sum, r| sum.saturating_add(i64::from(r.count())));

    if requested == 0 {
        return Err(InvalidPurchase::NoTicketsRequested);
    }
    if requested > i64::from(MAX_TICKETS_PER_PURCHASE) {
        return Err(InvalidPurchase::TooManyTickets {
            requested,
            max: MAX_TICKETS_PER_PURCHASE,
        });
    }
    Ok(())
}

fn check_composition(summary: &CategoryCountSummary) -> Result<(), InvalidPurchase> {
    if summary.adults() == 0 {
        return Err(InvalidPurchase::MissingAdult);
    }
    if summary.infants() > summary.adults() {
        return Err(InvalidPurchase::TooManyInfants {
            infants: summary.infants(),
            adults: summary.adults(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use cinema_tickets_core::TicketType::{Adult, Child, Infant};
    use cinema_tickets_core::{Money, TicketType};

    fn req(ticket_type: TicketType, count: i32) -> TicketTypeRequest {
        TicketTypeRequest::new(ticket_type, count)
    }

    #[test]
    fn test_validate_returns_summary() {
        let (account, summary) =
            validate(7, &[req(Adult, 2), req(Child, 1), req(Infant, 1)]).unwrap();
        assert_eq!(account.as_u64(), 7);
        assert_eq!(summary.total_amount(), Money::from_units(65));
        assert_eq!(summary.total_seats(), 3);
    }

    #[test]
    fn test_empty_list_wins_over_bad_account() {
        assert_eq!(validate(0, &[]), Err(InvalidPurchase::NoTicketsRequested));
    }

    #[test]
    fn test_bad_account_wins_over_bad_counts() {
        assert_eq!(validate(-5, &[req(Adult, 99)]), Err(InvalidPurchase::InvalidAccountId));
        assert_eq!(validate(0, &[req(Child, 1)]), Err(InvalidPurchase::InvalidAccountId));
    }

    #[test]
    fn test_total_is_checked_before_signs() {
        // Counts cancel out to zero before the negative line is inspected.
        assert_eq!(
            validate(1, &[req(Adult, 3), req(Child, -3)]),
            Err(InvalidPurchase::NoTicketsRequested)
        );
        assert_eq!(
            validate(1, &[req(Adult, 30), req(Infant, -1)]),
            Err(InvalidPurchase::TooManyTickets { requested: 29, max: 25 })
        );
    }

    #[test]
    fn test_negative_count_when_total_in_range() {
        assert_eq!(
            validate(1, &[req(Adult, 5), req(Child, -2)]),
            Err(InvalidPurchase::NegativeTicketCount { ticket_type: Child, count: -2 })
        );
        assert_eq!(
            validate(1, &[req(Adult, -1)]),
            Err(InvalidPurchase::NegativeTicketCount { ticket_type: Adult, count: -1 })
        );
    }

    #[test]
    fn test_total_limit_is_inclusive() {
        assert!(validate(1, &[req(Adult, 25)]).is_ok());
        assert!(validate(1, &[req(Adult, 20), req(Child, 5)]).is_ok());
        assert_eq!(
            validate(1, &[req(Adult, 20), req(Child, 5), req(Infant, 1)]),
            Err(InvalidPurchase::TooManyTickets { requested: 26, max: 25 })
        );
    }

    #[test]
    fn test_too_many_tickets_wins_over_composition() {
        assert_eq!(
            validate(1, &[req(Child, 26)]),
            Err(InvalidPurchase::TooManyTickets { requested: 26, max: 25 })
        );
        assert_eq!(
            validate(1, &[req(Adult, 1), req(Infant, 25)]),
            Err(InvalidPurchase::TooManyTickets { requested: 26, max: 25 })
        );
    }

    #[test]
    fn test_missing_adult_wins_over_infant_ratio() {
        assert_eq!(validate(1, &[req(Infant, 2)]), Err(InvalidPurchase::MissingAdult));
        assert_eq!(
            validate(1, &[req(Adult, 0), req(Child, 1)]),
            Err(InvalidPurchase::MissingAdult)
        );
    }

    #[test]
    fn test_infants_may_equal_adults() {
        assert!(validate(1, &[req(Adult, 2), req(Infant, 2)]).is_ok());
        assert_eq!(
            validate(1, &[req(Adult, 2), req(Infant, 3)]),
            Err(InvalidPurchase::TooManyInfants { infants: 3, adults: 2 })
        );
    }
}
