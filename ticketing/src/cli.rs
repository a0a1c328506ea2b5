//! Command line arguments for the `ticketing` binary.
//!
//! `ticketing [ACCOUNT_ID] TYPE=COUNT...`
//!
//! The leading account id is optional. An argument is taken as the account id
//! only when it comes first, has no `=` and is not a ticket category name, so
//! a bare `ADULT` is reported as a malformed ticket rather than an account.

use cinema_tickets_core::{AccountId, ParseTicketRequestError, TicketType, TicketTypeRequest};
use thiserror::Error;

/// Account id handed to the service when the account argument is not a
/// positive integer. The service rejects it with `InvalidAccountId` after its
/// earlier checks, so an empty request list still reports first.
pub const UNPARSABLE_ACCOUNT_ID: i64 = 0;

/// A purchase as given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseArgs {
    /// Account to purchase for
    pub account_id: i64,
    /// Requested line items, in argument order
    pub requests: Vec<TicketTypeRequest>,
}

/// Command line errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    /// A ticket argument was not `TYPE=COUNT`
    #[error("Invalid ticket argument '{arg}': {source}")]
    Ticket {
        /// The argument as given
        arg: String,
        /// Why it did not parse
        #[source]
        source: ParseTicketRequestError,
    },
}

/// Parses `args` (program name excluded).
///
/// `default_account_id` is used when no account argument is given.
///
/// # Errors
///
/// Returns [`ArgsError::Ticket`] for the first argument that is not a valid
/// `TYPE=COUNT` request.
pub fn parse_args<I>(args: I, default_account_id: i64) -> Result<PurchaseArgs, ArgsError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter().peekable();

    let account_id = match args.next_if(|arg| is_account_argument(arg)) {
        Some(raw) => raw_account_id(&raw),
        None => default_account_id,
    };

    let requests = args
        .map(|arg| {
            arg.parse::<TicketTypeRequest>()
                .map_err(|source| ArgsError::Ticket { arg, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PurchaseArgs { account_id, requests })
}

fn is_account_argument(arg: &str) -> bool {
    !arg.contains('=') && arg.parse::<TicketType>().is_err()
}

fn raw_account_id(arg: &str) -> i64 {
    arg.parse::<AccountId>()
        .ok()
        .and_then(|id| i64::try_from(id.as_u64()).ok())
        .unwrap_or(UNPARSABLE_ACCOUNT_ID)
}
