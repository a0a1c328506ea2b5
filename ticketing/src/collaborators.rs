//! In-process payment and seat collaborators for development.
//!
//! Both always succeed and only log the call. In production they are
//! replaced with clients for the real payment and seat booking services.

use cinema_tickets_core::environment::{PaymentCharger, SeatAllocator};
use cinema_tickets_core::{AccountId, CollaboratorError, Money};

/// Payment charger that logs and accepts every charge
#[derive(Clone, Debug, Default)]
pub struct LoggingPaymentCharger;

impl LoggingPaymentCharger {
    /// Creates a new logging charger
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PaymentCharger for LoggingPaymentCharger {
    fn charge(&self, account_id: AccountId, amount: Money) -> Result<(), CollaboratorError> {
        tracing::info!(%account_id, amount = amount.units(), "Payment taken");
        Ok(())
    }
}

/// Seat allocator that logs and accepts every reservation
#[derive(Clone, Debug, Default)]
pub struct LoggingSeatAllocator;

impl LoggingSeatAllocator {
    /// Creates a new logging allocator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SeatAllocator for LoggingSeatAllocator {
    fn reserve(&self, account_id: AccountId, seats: u32) -> Result<(), CollaboratorError> {
        tracing::info!(%account_id, seats, "Seats reserved");
        Ok(())
    }
}
