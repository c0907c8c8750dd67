//! Cinema ticket purchasing.
//!
//! Validates a purchase request against the box office rules, prices it,
//! then asks the payment and seat reservation gateways to charge and seat it.

pub mod types; // Tickets, orders, confirmations and the error kinds.
pub mod pricing; // Fixed ticket prices and purchase limits.
pub mod validation; // Purchase rules: minimum adults, infant ratio, ticket cap.
pub mod gateway; // Payment and seat reservation contracts.
pub mod service; // Purchase flow tying validation and gateways together.
pub mod api; // JSON-RPC endpoint.
pub mod config; // Runtime configuration.

pub use types::*;
pub use config::Config;
pub use service::TicketService;
