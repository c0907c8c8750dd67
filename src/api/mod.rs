//! API Module
//!
//! JSON-RPC endpoint that lets clients submit ticket purchases over HTTP.

mod server;
pub use server::{Server, router};
