use crate::{TicketType, TicketTypeRequest, pricing::PriceTable};

/// Ticket counts per type for one order
///
/// Requests of the same type are summed, so `[ADULT 2, ADULT 3]` counts as
/// five adults. Sums saturate instead of wrapping; a saturated tally always
/// fails the ticket cap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicketTally {
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
}

impl TicketTally {
    pub fn from_requests(requests: &[TicketTypeRequest]) -> Self {
        requests.iter().fold(Self::default(), |mut tally, request| {
            let slot = match request.ticket_type() {
                TicketType::Adult => &mut tally.adults,
                TicketType::Child => &mut tally.children,
                TicketType::Infant => &mut tally.infants,
            };
            *slot = slot.saturating_add(request.count());
            tally
        })
    }

    pub fn count(&self, ticket_type: TicketType) -> u32 {
        match ticket_type {
            TicketType::Adult => self.adults,
            TicketType::Child => self.children,
            TicketType::Infant => self.infants,
        }
    }

    pub fn total_tickets(&self) -> u32 {
        self.adults
            .saturating_add(self.children)
            .saturating_add(self.infants)
    }

    /// Seats to reserve; infants are not given one
    pub fn seats(&self) -> u32 {
        TicketType::ALL
            .iter()
            .filter(|t| t.occupies_seat())
            .fold(0u32, |acc, t| acc.saturating_add(self.count(*t)))
    }

    pub fn total_amount(&self, prices: &PriceTable) -> u32 {
        TicketType::ALL.iter().fold(0u32, |acc, t| {
            acc.saturating_add(self.count(*t).saturating_mul(prices.price_of(*t)))
        })
    }
}
