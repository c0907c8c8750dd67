//! Ticket Service Module
//!
//! Entry point for a purchase. Validates the order, prices it, then calls the
//! payment and seat reservation gateways in that order.

mod ticket_service;


pub use ticket_service::TicketService;
