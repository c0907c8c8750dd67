use crate::{
    gateway::{SeatReservationService, TicketPaymentService, ThirdPartyPaymentGateway, ThirdPartySeatReservation},
    pricing::{PRICE_TABLE, PriceTable},
    validation::PurchaseValidator,
    AccountId, Confirmation, PurchaseError, PurchaseOrder, TicketTypeRequest, SUCCESS_MESSAGE,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

/// Handles ticket purchases
///
/// Holds no per-purchase state, so one instance can serve any number of
/// calls and be shared across threads.
#[derive(Clone)]
pub struct TicketService {
    validator: PurchaseValidator,
    prices: PriceTable,
    payment: Arc<dyn TicketPaymentService>,
    reservation: Arc<dyn SeatReservationService>,
}

impl TicketService {
    /// Creates a service talking to the given gateways
    pub fn new(
        payment: Arc<dyn TicketPaymentService>,
        reservation: Arc<dyn SeatReservationService>,
    ) -> Self {
        Self {
            validator: PurchaseValidator::new(),
            prices: PRICE_TABLE,
            payment,
            reservation,
        }
    }

    /// Creates a service backed by the default third-party gateways
    pub fn with_default_gateways() -> Self {
        Self::new(
            Arc::new(ThirdPartyPaymentGateway),
            Arc::new(ThirdPartySeatReservation),
        )
    }

    /// Purchase tickets for a validated order
    ///
    /// # Flow
    /// 1. Validate (minimum adults, infant ratio, ticket cap)
    /// 2. Compute the charge and the number of seats
    /// 3. Take payment
    /// 4. Reserve seats
    ///
    /// Nothing is charged or reserved unless validation passes, and seats
    /// are only reserved once payment went through. Gateway errors are
    /// returned as they were raised.
    pub fn purchase_tickets(&self, order: &PurchaseOrder) -> Result<Confirmation, PurchaseError> {
        let account_id = order.account_id();

        // Step 1: validate; the first broken rule ends the purchase here
        let tally = self.validator.validate(order).inspect_err(|e| {
            warn!(%account_id, "Purchase rejected: {}", e);
        })?;

        // Step 2: price and seat the aggregated counts
        let total_amount = tally.total_amount(&self.prices);
        let seats = tally.seats();

        // Step 3: take payment before touching seats
        self.payment.make_payment(account_id, total_amount)?;
        // Step 4: reserve seats for the paid order
        self.reservation.reserve_seat(account_id, seats)?;

        info!(%account_id, total_amount, seats, "Purchase completed");
        Ok(Confirmation {
            account_id,
            total_amount,
            seats_reserved: seats,
            message: SUCCESS_MESSAGE.to_string(),
        })
    }

    /// Convenience wrapper that builds the order first
    pub fn purchase(
        &self,
        account_id: AccountId,
        requests: Vec<TicketTypeRequest>,
    ) -> Result<Confirmation, PurchaseError> {
        let order = PurchaseOrder::new(account_id, requests)?;
        self.purchase_tickets(&order)
    }

    /// Purchase from the JSON wire format
    ///
    /// Shape errors (bad account id, unknown ticket type) come back as
    /// `PurchaseError::Contract` before any rule is checked.
    pub fn purchase_json(&self, value: &Value) -> Result<Confirmation, PurchaseError> {
        let order = PurchaseOrder::from_json(value)?;
        self.purchase_tickets(&order)
    }
}
