//! # Cinema Tickets Core
//!
//! Domain types and collaborator traits for cinema ticket purchasing.
//!
//! A purchase is an account id plus an ordered list of [`TicketTypeRequest`]s.
//! The purchase rules reduce it to a [`CategoryCountSummary`], from which the
//! amount to charge and the seats to reserve are derived. Payment and seat
//! allocation are external services, abstracted behind the traits in
//! [`environment`] and injected by the caller.
//!
//! ## Core Concepts
//!
//! - **Ticket type**: ADULT, CHILD or INFANT, each with a fixed unit price
//! - **Request**: one `(ticket type, count)` line item
//! - **Summary**: per-category totals, every category present
//! - **Environment**: the payment charger, seat allocator and clock
//!
//! ## Example
//!
//! ```
//! use cinema_tickets_core::{CategoryCountSummary, Money, TicketType, TicketTypeRequest};
//!
//! let requests = [
//!     TicketTypeRequest::new(TicketType::Adult, 2),
//!     TicketTypeRequest::new(TicketType::Child, 1),
//!     TicketTypeRequest::new(TicketType::Infant, 1),
//! ];
//! let summary = CategoryCountSummary::tally(&requests)?;
//! assert_eq!(summary.total_amount(), Money::from_units(65));
//! assert_eq!(summary.total_seats(), 3);
//! # Ok::<(), cinema_tickets_core::InvalidPurchase>(())
//! ```

pub mod account;
pub mod error;
pub mod money;
pub mod receipt;
pub mod summary;
pub mod ticket;

pub use account::AccountId;
pub use error::{CollaboratorError, InvalidPurchase, PurchaseError};
pub use money::Money;
pub use receipt::{PurchaseId, PurchaseReceipt};
pub use summary::CategoryCountSummary;
pub use ticket::{
    MAX_TICKETS_PER_PURCHASE, PRICE_TABLE, ParseTicketRequestError, ParseTicketTypeError,
    TicketType, TicketTypeRequest,
};

/// Environment module - Dependency injection traits
///
/// The purchase core never constructs its collaborators. Production code
/// injects real service clients, tests inject recording doubles from
/// `cinema-tickets-testing`.
pub mod environment {
    use crate::account::AccountId;
    use crate::error::CollaboratorError;
    use crate::money::Money;
    use chrono::{DateTime, Utc};
    use std::sync::Arc;

    /// Takes payment for a purchase.
    ///
    /// Called at most once per purchase, after every rule has passed and
    /// before any seats are reserved.
    pub trait PaymentCharger: Send + Sync {
        /// Charge `amount` to `account_id`
        ///
        /// # Errors
        ///
        /// Returns an error if the payment service faults.
        fn charge(&self, account_id: AccountId, amount: Money) -> Result<(), CollaboratorError>;
    }

    /// Reserves seats for a purchase.
    ///
    /// Called at most once per purchase, after the payment was taken.
    pub trait SeatAllocator: Send + Sync {
        /// Reserve `seats` seats for `account_id`
        ///
        /// # Errors
        ///
        /// Returns an error if the reservation service faults.
        fn reserve(&self, account_id: AccountId, seats: u32) -> Result<(), CollaboratorError>;
    }

    /// Clock trait - abstracts time operations for testability
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Wall-clock time
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }

    impl<T: PaymentCharger + ?Sized> PaymentCharger for Arc<T> {
        fn charge(&self, account_id: AccountId, amount: Money) -> Result<(), CollaboratorError> {
            (**self).charge(account_id, amount)
        }
    }

    impl<T: SeatAllocator + ?Sized> SeatAllocator for Arc<T> {
        fn reserve(&self, account_id: AccountId, seats: u32) -> Result<(), CollaboratorError> {
            (**self).reserve(account_id, seats)
        }
    }

    impl<T: Clock + ?Sized> Clock for Arc<T> {
        fn now(&self) -> DateTime<Utc> {
            (**self).now()
        }
    }
}
