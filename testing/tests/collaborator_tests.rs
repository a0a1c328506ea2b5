//! Tests for the recording collaborators

#![allow(clippy::unwrap_used)] // Tests can unwrap

use cinema_tickets_core::environment::{PaymentCharger, SeatAllocator};
use cinema_tickets_core::{AccountId, CollaboratorError, Money};
use cinema_tickets_testing::{
    Dispatch, DispatchLog, RecordingPaymentCharger, RecordingSeatAllocator,
    recording_collaborators,
};
use std::sync::Arc;

#[test]
fn test_shared_log_keeps_call_order() {
    let (charger, allocator, log) = recording_collaborators();
    let account = AccountId::new(9).unwrap();

    allocator.reserve(account, 4).unwrap();
    charger.charge(account, Money::from_units(100)).unwrap();

    assert_eq!(
        log.entries(),
        vec![
            Dispatch::Reserve { account_id: account, seats: 4 },
            Dispatch::Charge { account_id: account, amount: Money::from_units(100) },
        ]
    );
    assert_eq!(log.len(), 2);
}

#[test]
fn test_failing_doubles_record_the_attempt() {
    let log = DispatchLog::new();
    let charger = RecordingPaymentCharger::failing(
        log.clone(),
        CollaboratorError::Rejected { reason: "card declined".to_string() },
    );
    let allocator = RecordingSeatAllocator::failing(log.clone(), CollaboratorError::Timeout);

    let charge = charger.charge(AccountId::MIN, Money::from_units(25));
    let reserve = allocator.reserve(AccountId::MIN, 1);

    assert_eq!(
        charge,
        Err(CollaboratorError::Rejected { reason: "card declined".to_string() })
    );
    assert_eq!(reserve, Err(CollaboratorError::Timeout));
    assert_eq!(log.charges(), vec![(AccountId::MIN, Money::from_units(25))]);
    assert_eq!(log.reservations(), vec![(AccountId::MIN, 1)]);
}

#[test]
fn test_clones_share_the_log() {
    let (charger, _allocator, log) = recording_collaborators();
    let clone = charger.clone();

    clone.charge(AccountId::MIN, Money::from_units(15)).unwrap();

    assert_eq!(charger.log().len(), 1);
    assert_eq!(log.charges().len(), 1);

    log.clear();
    assert!(charger.log().is_empty());
}

#[test]
fn test_arc_wrapped_doubles_are_collaborators() {
    let (charger, allocator, log) = recording_collaborators();
    let charger: Arc<dyn PaymentCharger> = Arc::new(charger);
    let allocator: Arc<dyn SeatAllocator> = Arc::new(allocator);

    charger.charge(AccountId::MIN, Money::ZERO).unwrap();
    allocator.reserve(AccountId::MIN, 0).unwrap();

    assert_eq!(log.len(), 2);
}
