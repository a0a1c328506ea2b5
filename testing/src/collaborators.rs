//! Recording payment and seat collaborators
//!
//! Provides deterministic doubles for the purchase environment:
//! - [`DispatchLog`]: ordered record of every collaborator call
//! - [`RecordingPaymentCharger`]: records charges, optionally fails
//! - [`RecordingSeatAllocator`]: records reservations, optionally fails
//!
//! Both doubles write into one shared log so tests can assert on call order
//! as well as arguments.

#![allow(clippy::unwrap_used)] // Test infrastructure uses unwrap for simplicity
#![allow(clippy::missing_panics_doc)] // Lock poisoning only follows a panicking test

use cinema_tickets_core::environment::{PaymentCharger, SeatAllocator};
use cinema_tickets_core::{AccountId, CollaboratorError, Money};
use std::sync::{Arc, RwLock};

/// One call made to a collaborator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// `PaymentCharger::charge` was called
    Charge {
        /// Account charged
        account_id: AccountId,
        /// Amount charged
        amount: Money,
    },
    /// `SeatAllocator::reserve` was called
    Reserve {
        /// Account reserved for
        account_id: AccountId,
        /// Seats reserved
        seats: u32,
    },
}

/// Shared, ordered record of collaborator calls.
///
/// # Example
///
/// ```
/// use cinema_tickets_testing::{recording_collaborators, Dispatch};
/// use cinema_tickets_core::environment::PaymentCharger;
/// use cinema_tickets_core::{AccountId, Money};
///
/// let (charger, _allocator, log) = recording_collaborators();
/// charger.charge(AccountId::MIN, Money::from_units(25)).unwrap();
///
/// assert_eq!(log.charges(), vec![(AccountId::MIN, Money::from_units(25))]);
/// assert!(log.reservations().is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct DispatchLog {
    entries: Arc<RwLock<Vec<Dispatch>>>,
}

impl DispatchLog {
    /// Create a new empty log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a call
    pub fn record(&self, dispatch: Dispatch) {
        self.entries.write().unwrap().push(dispatch);
    }

    /// All calls in the order they were made
    #[must_use]
    pub fn entries(&self) -> Vec<Dispatch> {
        self.entries.read().unwrap().clone()
    }

    /// `(account, amount)` of every charge, in order
    #[must_use]
    pub fn charges(&self) -> Vec<(AccountId, Money)> {
        self.entries
            .read()
            .unwrap()
            .iter()
            .filter_map(|d| match d {
                Dispatch::Charge { account_id, amount } => Some((*account_id, *amount)),
                Dispatch::Reserve { .. } => None,
            })
            .collect()
    }

    /// `(account, seats)` of every reservation, in order
    #[must_use]
    pub fn reservations(&self) -> Vec<(AccountId, u32)> {
        self.entries
            .read()
            .unwrap()
            .iter()
            .filter_map(|d| match d {
                Dispatch::Reserve { account_id, seats } => Some((*account_id, *seats)),
                Dispatch::Charge { .. } => None,
            })
            .collect()
    }

    /// Number of calls recorded
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// Check if no collaborator was called
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }

    /// Forget all recorded calls
    pub fn clear(&self) {
        self.entries.write().unwrap().clear();
    }
}

/// Payment charger that records each call.
///
/// A failing charger still records the attempt before returning its error.
#[derive(Clone, Debug)]
pub struct RecordingPaymentCharger {
    log: DispatchLog,
    failure: Option<CollaboratorError>,
}

impl RecordingPaymentCharger {
    /// Charger that always succeeds
    #[must_use]
    pub const fn new(log: DispatchLog) -> Self {
        Self { log, failure: None }
    }

    /// Charger that always fails with `error`
    #[must_use]
    pub const fn failing(log: DispatchLog, error: CollaboratorError) -> Self {
        Self { log, failure: Some(error) }
    }

    /// The log this charger writes to
    #[must_use]
    pub const fn log(&self) -> &DispatchLog {
        &self.log
    }
}

impl PaymentCharger for RecordingPaymentCharger {
    fn charge(&self, account_id: AccountId, amount: Money) -> Result<(), CollaboratorError> {
        self.log.record(Dispatch::Charge { account_id, amount });
        self.failure.clone().map_or(Ok(()), Err)
    }
}

/// Seat allocator that records each call.
///
/// A failing allocator still records the attempt before returning its error.
#[derive(Clone, Debug)]
pub struct RecordingSeatAllocator {
    log: DispatchLog,
    failure: Option<CollaboratorError>,
}

impl RecordingSeatAllocator {
    /// Allocator that always succeeds
    #[must_use]
    pub const fn new(log: DispatchLog) -> Self {
        Self { log, failure: None }
    }

    /// Allocator that always fails with `error`
    #[must_use]
    pub const fn failing(log: DispatchLog, error: CollaboratorError) -> Self {
        Self { log, failure: Some(error) }
    }

    /// The log this allocator writes to
    #[must_use]
    pub const fn log(&self) -> &DispatchLog {
        &self.log
    }
}

impl SeatAllocator for RecordingSeatAllocator {
    fn reserve(&self, account_id: AccountId, seats: u32) -> Result<(), CollaboratorError> {
        self.log.record(Dispatch::Reserve { account_id, seats });
        self.failure.clone().map_or(Ok(()), Err)
    }
}

/// A succeeding charger and allocator sharing one fresh [`DispatchLog`]
#[must_use]
pub fn recording_collaborators() -> (RecordingPaymentCharger, RecordingSeatAllocator, DispatchLog) {
    let log = DispatchLog::new();
    (
        RecordingPaymentCharger::new(log.clone()),
        RecordingSeatAllocator::new(log.clone()),
        log,
    )
}
