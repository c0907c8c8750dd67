//! Test doubles that remember every call they receive

use super::{SeatReservationService, TicketPaymentService};
use crate::{AccountId, GatewayError};
use std::sync::{Arc, Mutex};

/// Call log shared between both fakes so tests can assert on ordering
pub type CallLog = Arc<Mutex<Vec<GatewayCall>>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    Payment { account_id: u64, amount: u32 },
    Reservation { account_id: u64, seats: u32 },
}

pub struct RecordingPayment {
    pub calls: CallLog,
    pub fail_with: Option<String>,
}

impl TicketPaymentService for RecordingPayment {
    fn make_payment(&self, account_id: AccountId, total_amount: u32) -> Result<(), GatewayError> {
        self.calls.lock().unwrap().push(GatewayCall::Payment {
            account_id: account_id.get(),
            amount: total_amount,
        });
        match &self.fail_with {
            Some(reason) => Err(GatewayError::new("payment", reason.clone())),
            None => Ok(()),
        }
    }
}

pub struct RecordingReservation {
    pub calls: CallLog,
    pub fail_with: Option<String>,
}

impl SeatReservationService for RecordingReservation {
    fn reserve_seat(&self, account_id: AccountId, total_seats: u32) -> Result<(), GatewayError> {
        self.calls.lock().unwrap().push(GatewayCall::Reservation {
            account_id: account_id.get(),
            seats: total_seats,
        });
        match &self.fail_with {
            Some(reason) => Err(GatewayError::new("seat reservation", reason.clone())),
            None => Ok(()),
        }
    }
}
