use crate::{
    PurchaseOrder, ValidationError,
    pricing::{MAX_TICKETS_PER_PURCHASE, MIN_ADULT_TICKETS},
};
use super::TicketTally;
use tracing::{debug, warn};

/// Checks an order against the purchase rules
///
/// Stateless: every call looks only at the order it is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct PurchaseValidator;

impl PurchaseValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate a purchase order
    ///
    /// Rules run in a fixed order and the first one broken is returned:
    /// 1. minimum adults
    /// 2. infant ratio
    /// 3. ticket cap
    ///
    /// On success returns the aggregated counts used for pricing and seating.
    pub fn validate(&self, order: &PurchaseOrder) -> Result<TicketTally, ValidationError> {
        let tally = TicketTally::from_requests(order.requests());
        debug!(account_id = %order.account_id(), ?tally, "Validating purchase order");

        self.check_minimum_adults(&tally)?;
        self.check_infant_ratio(&tally)?;
        self.check_ticket_cap(&tally)?;

        debug!(account_id = %order.account_id(), "Purchase order validation successful");
        Ok(tally)
    }

    fn check_minimum_adults(&self, tally: &TicketTally) -> Result<(), ValidationError> {
        if tally.adults < MIN_ADULT_TICKETS {
            warn!("Rejected purchase without an adult ticket");
            return Err(ValidationError::NoAdult);
        }
        Ok(())
    }

    fn check_infant_ratio(&self, tally: &TicketTally) -> Result<(), ValidationError> {
        if tally.infants > tally.adults {
            warn!(
                "Infant check failed: {} infants for {} adults",
                tally.infants, tally.adults
            );
            return Err(ValidationError::TooManyInfants {
                infants: tally.infants,
                adults: tally.adults,
            });
        }
        Ok(())
    }

    fn check_ticket_cap(&self, tally: &TicketTally) -> Result<(), ValidationError> {
        let requested = tally.total_tickets();
        if requested > MAX_TICKETS_PER_PURCHASE {
            warn!(
                "Ticket cap exceeded: requested {}, max {}",
                requested, MAX_TICKETS_PER_PURCHASE
            );
            return Err(ValidationError::TooManyTickets {
                requested,
                max: MAX_TICKETS_PER_PURCHASE,
            });
        }
        Ok(())
    }
}
