//! # Cinema Tickets Testing
//!
//! Testing utilities for the cinema ticket purchasing core.
//!
//! This crate provides:
//! - Recording doubles for the payment charger and seat allocator
//! - A fixed clock for deterministic receipts
//! - proptest strategies for ticket requests and valid purchases
//!
//! ## Example
//!
//! ```ignore
//! use cinema_tickets::{TicketEnvironment, TicketService};
//! use cinema_tickets_testing::{recording_collaborators, test_clock};
//!
//! let (charger, allocator, log) = recording_collaborators();
//! let service = TicketService::new(TicketEnvironment::new(charger, allocator, test_clock()));
//!
//! service.purchase_tickets(1, &[TicketTypeRequest::new(TicketType::Adult, 1)])?;
//! assert_eq!(log.len(), 2);
//! ```

use chrono::{DateTime, Utc};
use cinema_tickets_core::environment::Clock;

pub mod collaborators;

/// Clock stand-ins for purchase tests
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Clock pinned to one instant.
    ///
    /// Every receipt issued through it carries the same `purchased_at`, so
    /// tests can compare whole receipts apart from the random purchase id.
    ///
    /// ```
    /// use cinema_tickets_testing::mocks::FixedClock;
    /// use cinema_tickets_core::environment::Clock;
    /// use chrono::{TimeZone, Utc};
    ///
    /// let opening_night = Utc.with_ymd_and_hms(2025, 3, 14, 19, 30, 0).unwrap();
    /// let clock = FixedClock::new(opening_night);
    /// assert_eq!(clock.now(), opening_night);
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Pins the clock at `time`
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Clock used by the purchase tests, pinned at midnight UTC on 2025-01-01.
    #[must_use]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(DateTime::from_timestamp(1_735_689_600, 0).unwrap_or_default())
    }
}

/// Property-based testing utilities using proptest.
pub mod properties {
    use cinema_tickets_core::{MAX_TICKETS_PER_PURCHASE, TicketType, TicketTypeRequest};
    use proptest::prelude::*;

    /// Any ticket category
    pub fn ticket_type() -> impl Strategy<Value = TicketType> {
        prop_oneof![
            Just(TicketType::Adult),
            Just(TicketType::Child),
            Just(TicketType::Infant),
        ]
    }

    /// A request of any category with a count in `counts`
    pub fn ticket_request(
        counts: std::ops::RangeInclusive<i32>,
    ) -> impl Strategy<Value = TicketTypeRequest> {
        (ticket_type(), counts).prop_map(|(t, n)| TicketTypeRequest::new(t, n))
    }

    /// Up to `max_lines` line items with non-negative counts no larger than `max_count`
    pub fn ticket_requests(
        max_lines: usize,
        max_count: i32,
    ) -> impl Strategy<Value = Vec<TicketTypeRequest>> {
        prop::collection::vec(ticket_request(0..=max_count), 0..=max_lines)
    }

    /// `(adults, children, infants)` satisfying every purchase rule
    pub fn valid_counts() -> impl Strategy<Value = (u32, u32, u32)> {
        (1..=MAX_TICKETS_PER_PURCHASE)
            .prop_flat_map(|adults| {
                let infant_cap = adults.min(MAX_TICKETS_PER_PURCHASE - adults);
                (Just(adults), 0..=infant_cap)
            })
            .prop_flat_map(|(adults, infants)| {
                (Just(adults), 0..=MAX_TICKETS_PER_PURCHASE - adults - infants, Just(infants))
            })
    }

    /// Line items for a valid purchase, one per category, shuffled
    pub fn valid_purchase() -> impl Strategy<Value = Vec<TicketTypeRequest>> {
        valid_counts()
            .prop_map(|(adults, children, infants)| {
                vec![
                    request(TicketType::Adult, adults),
                    request(TicketType::Child, children),
                    request(TicketType::Infant, infants),
                ]
            })
            .prop_shuffle()
    }

    fn request(ticket_type: TicketType, count: u32) -> TicketTypeRequest {
        // Counts come from `valid_counts`, bounded by the purchase limit.
        TicketTypeRequest::new(ticket_type, i32::try_from(count).unwrap_or(i32::MAX))
    }
}

// Re-export commonly used items
pub use collaborators::{
    Dispatch, DispatchLog, RecordingPaymentCharger, RecordingSeatAllocator,
    recording_collaborators,
};
pub use mocks::{FixedClock, test_clock};
