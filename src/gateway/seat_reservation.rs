use crate::{AccountId, GatewayError};
use tracing::info;

/// Reserves seats for an account
pub trait SeatReservationService: Send + Sync {
    fn reserve_seat(&self, account_id: AccountId, total_seats: u32) -> Result<(), GatewayError>;
}

/// Default seat booking provider; accepts every reservation
#[derive(Debug, Clone, Default)]
pub struct ThirdPartySeatReservation;

impl SeatReservationService for ThirdPartySeatReservation {
    fn reserve_seat(&self, account_id: AccountId, total_seats: u32) -> Result<(), GatewayError> {
        info!(%account_id, total_seats, "Seats reserved");
        Ok(())
    }
}
