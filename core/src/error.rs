//! Errors for ticket purchasing.
//!
//! [`InvalidPurchase`] is the validation taxonomy: one variant per business
//! rule, so callers always get a named reason for a rejected purchase.
//! [`PurchaseError`] wraps it together with faults raised by the payment and
//! seat collaborators once dispatch has begun.

use crate::account::AccountId;
use crate::money::Money;
use crate::ticket::TicketType;
use thiserror::Error;

/// A purchase rejected by validation before any collaborator was invoked.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidPurchase {
    /// The submission was empty or its counts summed to zero.
    #[error("No tickets requested")]
    NoTicketsRequested,

    /// The account id was zero, negative or not an integer.
    #[error("Invalid account ID")]
    InvalidAccountId,

    /// The submission asked for more tickets than one purchase may hold.
    #[error("Cannot purchase more than {max} tickets at a time (requested {requested})")]
    TooManyTickets {
        /// Sum of all requested counts
        requested: i64,
        /// Per-purchase limit
        max: u32,
    },

    /// A line item carried a negative count.
    #[error("Ticket count for {ticket_type} cannot be negative (got {count})")]
    NegativeTicketCount {
        /// Category of the offending line item
        ticket_type: TicketType,
        /// The negative count
        count: i32,
    },

    /// No adult ticket was requested.
    #[error("Child and infant tickets require at least one adult ticket")]
    MissingAdult,

    /// More infants than adults; every infant sits on an adult's lap.
    #[error("Infant tickets ({infants}) cannot exceed adult tickets ({adults})")]
    TooManyInfants {
        /// Requested infant tickets
        infants: u32,
        /// Requested adult tickets
        adults: u32,
    },
}

/// Fault raised by an external collaborator (payment or seat allocation).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollaboratorError {
    /// The service could not be reached
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// The service refused the request
    #[error("Request rejected: {reason}")]
    Rejected {
        /// Reason given by the service
        reason: String,
    },

    /// The service did not answer in time
    #[error("Timed out")]
    Timeout,
}

/// Errors returned by a purchase attempt.
#[derive(Error, Debug)]
pub enum PurchaseError {
    /// The submission broke a purchase rule. Nothing was charged or reserved.
    #[error(transparent)]
    Invalid(#[from] InvalidPurchase),

    /// The payment charger failed. No seats were reserved.
    #[error("Payment of {amount} for account {account_id} failed: {source}")]
    Payment {
        /// Account that was being charged
        account_id: AccountId,
        /// Amount that was being charged
        amount: Money,
        /// Underlying collaborator fault
        #[source]
        source: CollaboratorError,
    },

    /// The seat allocator failed after the payment had already been taken.
    ///
    /// The charge is not rolled back.
    #[error("Reserving {seats} seats for account {account_id} failed after payment: {source}")]
    SeatReservation {
        /// Account the seats were for
        account_id: AccountId,
        /// Seats that were being reserved
        seats: u32,
        /// Underlying collaborator fault
        #[source]
        source: CollaboratorError,
    },
}

impl PurchaseError {
    /// Returns the validation reason if this purchase was rejected by a rule.
    #[must_use]
    pub const fn invalid_reason(&self) -> Option<&InvalidPurchase> {
        match self {
            Self::Invalid(reason) => Some(reason),
            Self::Payment { .. } | Self::SeatReservation { .. } => None,
        }
    }
}
