//! Cinema Tickets - purchase validation and fulfillment
//!
//! Accepts a purchaser account and a list of ticket requests, checks them
//! against the purchase rules, and only then takes payment and reserves
//! seats through injected collaborators.
//!
//! # Architecture
//!
//! ```text
//! account id + [TicketTypeRequest]
//!                │
//!                ▼
//!        ┌───────────────┐   InvalidPurchase
//!        │ TicketService │ ─────────────────► caller
//!        └───────────────┘
//!           │         │
//!   charge(amount)  reserve(seats)
//!           ▼         ▼
//!  PaymentCharger   SeatAllocator
//! ```
//!
//! # Pricing
//!
//! | Type   | Price | Seat |
//! |--------|-------|------|
//! | ADULT  | 25    | yes  |
//! | CHILD  | 15    | yes  |
//! | INFANT | 0     | no   |
//!
//! # Example
//!
//! ```
//! use cinema_tickets::{LoggingPaymentCharger, LoggingSeatAllocator, TicketEnvironment, TicketService};
//! use cinema_tickets::domain::{Money, TicketType, TicketTypeRequest, environment::SystemClock};
//!
//! let service = TicketService::new(TicketEnvironment::new(
//!     LoggingPaymentCharger::new(),
//!     LoggingSeatAllocator::new(),
//!     SystemClock,
//! ));
//!
//! let receipt = service.purchase_tickets(
//!     1,
//!     &[
//!         TicketTypeRequest::new(TicketType::Adult, 2),
//!         TicketTypeRequest::new(TicketType::Infant, 2),
//!     ],
//! )?;
//! assert_eq!(receipt.total_amount, Money::from_units(50));
//! assert_eq!(receipt.total_seats, 2);
//! # Ok::<(), cinema_tickets::domain::PurchaseError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod collaborators;
pub mod config;
pub mod service;

pub use cinema_tickets_core as domain;

pub use cli::{ArgsError, PurchaseArgs, parse_args};
pub use collaborators::{LoggingPaymentCharger, LoggingSeatAllocator};
pub use config::Config;
pub use service::{TicketEnvironment, TicketService};
