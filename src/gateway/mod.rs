//! External Gateway Module
//!
//! Contracts for the third-party services a purchase talks to:
//! - Payment: charges the account for the order
//! - Seat reservation: books seats for the order
//!
//! The default implementations stand in for the real providers and only log.

mod payment;
mod seat_reservation;

#[cfg(test)]
pub(crate) mod recording;

pub use payment::{TicketPaymentService, ThirdPartyPaymentGateway};
pub use seat_reservation::{SeatReservationService, ThirdPartySeatReservation};
