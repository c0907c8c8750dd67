use crate::{AccountId, GatewayError};
use tracing::info;

/// Charges an account for a ticket purchase
///
/// Implementations either take the whole payment or return an error; the
/// caller never sees a partial charge.
pub trait TicketPaymentService: Send + Sync {
    fn make_payment(&self, account_id: AccountId, total_amount: u32) -> Result<(), GatewayError>;
}

/// Default payment provider
///
/// Accepts every charge. Swap in a real provider behind the same trait.
#[derive(Debug, Clone, Default)]
pub struct ThirdPartyPaymentGateway;

impl TicketPaymentService for ThirdPartyPaymentGateway {
    fn make_payment(&self, account_id: AccountId, total_amount: u32) -> Result<(), GatewayError> {
        info!(%account_id, total_amount, "Payment taken");
        Ok(())
    }
}
