//! Ticket Pricing Module
//!
//! Fixed prices and purchase limits. These never change at runtime.

use crate::TicketType;

/// Most tickets a single purchase may contain, across all types
pub const MAX_TICKETS_PER_PURCHASE: u32 = 20;

/// Every purchase needs at least this many adult tickets
pub const MIN_ADULT_TICKETS: u32 = 1;

/// Price per ticket type, in whole pounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceTable {
    pub adult: u32,
    pub child: u32,
    pub infant: u32,
}

pub const PRICE_TABLE: PriceTable = PriceTable {
    adult: 20,
    child: 5,
    infant: 0,
};

impl PriceTable {
    pub fn price_of(&self, ticket_type: TicketType) -> u32 {
        match ticket_type {
            TicketType::Adult => self.adult,
            TicketType::Child => self.child,
            TicketType::Infant => self.infant,
        }
    }
}
