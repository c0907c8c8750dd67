//! Purchase Validation Module
//!
//! Aggregates the ticket requests of an order and checks them against the
//! business rules before anything is charged or reserved:
//! - at least one adult ticket
//! - no more infants than adults
//! - at most 20 tickets in total

mod tally;
mod validator;


pub use tally::TicketTally;
pub use validator::PurchaseValidator;
