//! Ticket categories, the fixed price table and per-category requests.

use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Maximum number of tickets a single purchase may contain.
pub const MAX_TICKETS_PER_PURCHASE: u32 = 25;

/// Unit price of each ticket category.
pub const PRICE_TABLE: [(TicketType, Money); 3] = [
    (TicketType::Adult, TicketType::Adult.unit_price()),
    (TicketType::Child, TicketType::Child.unit_price()),
    (TicketType::Infant, TicketType::Infant.unit_price()),
];

/// Ticket category
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketType {
    /// Adult admission
    Adult,
    /// Child admission
    Child,
    /// Infant admission; sits on an adult's lap
    Infant,
}

impl TicketType {
    /// Every category, in display order
    pub const ALL: [Self; 3] = [Self::Adult, Self::Child, Self::Infant];

    /// Price of one ticket of this category
    #[must_use]
    pub const fn unit_price(self) -> Money {
        match self {
            Self::Adult => Money::from_units(25),
            Self::Child => Money::from_units(15),
            Self::Infant => Money::ZERO,
        }
    }

    /// Whether a ticket of this category takes up a seat
    #[must_use]
    pub const fn occupies_seat(self) -> bool {
        match self {
            Self::Adult | Self::Child => true,
            Self::Infant => false,
        }
    }

    /// Canonical upper-case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Adult => "ADULT",
            Self::Child => "CHILD",
            Self::Infant => "INFANT",
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a [`TicketType`] from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown ticket type '{0}' (expected ADULT, CHILD or INFANT)")]
pub struct ParseTicketTypeError(pub String);

impl FromStr for TicketType {
    type Err = ParseTicketTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseTicketTypeError(name.to_string()))
    }
}

/// One line item of a purchase: a category and how many tickets of it.
///
/// The count is signed so that a negative count can reach validation and be
/// rejected with a named reason instead of failing to construct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    count: i32,
}

impl TicketTypeRequest {
    /// Creates a request for `count` tickets of `ticket_type`
    #[must_use]
    pub const fn new(ticket_type: TicketType, count: i32) -> Self {
        Self { ticket_type, count }
    }

    /// Category requested
    #[must_use]
    pub const fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    /// Number of tickets requested
    #[must_use]
    pub const fn count(&self) -> i32 {
        self.count
    }
}

impl fmt::Display for TicketTypeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.ticket_type, self.count)
    }
}

/// Error parsing a [`TicketTypeRequest`] from `TYPE=COUNT` text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseTicketRequestError {
    /// Missing `=` separator
    #[error("Expected TYPE=COUNT, got '{0}'")]
    MissingSeparator(String),

    /// Category was not recognised
    #[error(transparent)]
    TicketType(#[from] ParseTicketTypeError),

    /// Count was not an integer
    #[error("Invalid ticket count '{0}'")]
    InvalidCount(String),
}

impl FromStr for TicketTypeRequest {
    type Err = ParseTicketRequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (ticket_type, count) = s
            .split_once('=')
            .ok_or_else(|| ParseTicketRequestError::MissingSeparator(s.to_string()))?;
        let ticket_type: TicketType = ticket_type.parse()?;
        let count = count.trim();
        let count: i32 = count
            .parse()
            .map_err(|_| ParseTicketRequestError::InvalidCount(count.to_string()))?;
        Ok(Self::new(ticket_type, count))
    }
}
