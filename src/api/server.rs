//! API Server Module
//!
//! This module implements a JSON-RPC server for ticket purchases.
//! It exposes a single HTTP endpoint; the `purchaseTickets` method hands the
//! params to the `TicketService` and reports the outcome.

use crate::{config::ApiConfig, service::TicketService, Confirmation, PurchaseError};
use axum::{Router, routing::post, Json, extract::State};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn, error};

/// Standard JSON-RPC code for an unknown method
const METHOD_NOT_FOUND: i32 = -32601;
/// Standard JSON-RPC code for params that break the request contract
const INVALID_PARAMS: i32 = -32602;
/// Standard JSON-RPC code for a failure inside the server
const INTERNAL_ERROR: i32 = -32603;
/// Application code for a purchase rejected by a business rule
const PURCHASE_REJECTED: i32 = -32000;

/// Shared application state handed to every request handler
#[derive(Clone)]
struct AppState {
    service: Arc<TicketService>,
}

/// The API server
pub struct Server {
    config: ApiConfig,
    service: TicketService,
}

impl Server {
    pub fn new(config: ApiConfig, service: TicketService) -> Self {
        Self { config, service }
    }

    /// Binds to the configured address and serves until the process stops
    pub async fn start(self) -> anyhow::Result<()> {
        let app = router(self.service);

        let addr = format!("{}:{}", self.config.host, self.config.port);
        info!("API server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// Router with the JSON-RPC endpoint mounted at "/"
pub fn router(service: TicketService) -> Router {
    Router::new()
        .route("/", post(handle_rpc))
        .with_state(AppState { service: Arc::new(service) })
}

/// JSON-RPC 2.0 request
#[derive(Debug, Deserialize)]
struct JsonRpcRequest {
    #[allow(dead_code)]
    jsonrpc: String,
    method: String,
    #[serde(default)]
    params: Value,
    id: Value,
}

/// JSON-RPC 2.0 response; exactly one of `result` and `error` is set
#[derive(Debug, Serialize)]
struct JsonRpcResponse {
    jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonRpcError>,
    id: Value,
}

#[derive(Debug, Serialize)]
struct JsonRpcError {
    code: i32,
    message: String,
}

impl JsonRpcResponse {
    fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            result: Some(result),
            error: None,
            id,
        }
    }

    fn failure(id: Value, code: i32, message: String) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(JsonRpcError { code, message }),
            id,
        }
    }
}

async fn handle_rpc(
    State(state): State<AppState>,
    Json(request): Json<JsonRpcRequest>,
) -> Json<JsonRpcResponse> {
    info!("Received RPC request: {}", request.method);

    match request.method.as_str() {
        "purchaseTickets" => handle_purchase_tickets(state, request),
        _ => Json(JsonRpcResponse::failure(
            request.id,
            METHOD_NOT_FOUND,
            "Method not found".to_string(),
        )),
    }
}

/// Result payload of a confirmed purchase
///
/// Carries the confirmation fields (`accountId`, `totalAmount`,
/// `seatsReserved`, `message`) plus a status and the time it was confirmed.
#[derive(Debug, Serialize)]
struct PurchaseReceipt {
    status: &'static str,
    #[serde(flatten)]
    confirmation: Confirmation,
    timestamp: i64,
}

/// Handles the "purchaseTickets" RPC method
///
/// This function:
/// 1. Parses the params into a purchase order
/// 2. Validates and prices the order
/// 3. Charges the account and reserves the seats
/// 4. Maps the outcome onto a JSON-RPC result or error
///
/// # Arguments
/// * `state` - Shared application state
/// * `request` - The JSON-RPC request; params use the order wire format
///   `{ "accountId": 1, "ticketTypeRequests": [{ "type": "ADULT", "noOfTickets": 2 }] }`
///
/// # Returns
/// A JSON-RPC response holding a `PurchaseReceipt` on success
///
/// # Error codes
/// - `-32602`: account id, ticket type or count is malformed
/// - `-32000`: a purchase rule was broken; the message names the rule
/// - `-32603`: payment or seat reservation failed
fn handle_purchase_tickets(state: AppState, request: JsonRpcRequest) -> Json<JsonRpcResponse> {
    // Steps 1-3: parsing, validation, payment and reservation all happen in the service
    let outcome = state.service.purchase_json(&request.params);

    // Step 4: map the outcome onto the JSON-RPC envelope
    match outcome {
        Ok(confirmation) => {
            info!(
                "Purchase confirmed for account {}: {} charged, {} seats",
                confirmation.account_id, confirmation.total_amount, confirmation.seats_reserved
            );
            let receipt = PurchaseReceipt {
                status: "Confirmed",
                confirmation,
                timestamp: chrono::Utc::now().timestamp(),
            };
            match serde_json::to_value(receipt) {
                Ok(result) => Json(JsonRpcResponse::success(request.id, result)),
                Err(e) => {
                    // The money has moved at this point; only the reply is lost
                    error!("Failed to serialize purchase receipt: {}", e);
                    Json(JsonRpcResponse::failure(request.id, INTERNAL_ERROR, e.to_string()))
                }
            }
        }
        // Shape errors: bad account id, unknown ticket type, bad count
        Err(PurchaseError::Contract(e)) => {
            warn!("Invalid purchase params: {}", e);
            Json(JsonRpcResponse::failure(
                request.id,
                INVALID_PARAMS,
                format!("Invalid params: {}", e),
            ))
        }
        // Business rule broken; nothing was charged
        Err(PurchaseError::Validation(e)) => {
            warn!("Purchase rejected: {}", e);
            Json(JsonRpcResponse::failure(request.id, PURCHASE_REJECTED, e.to_string()))
        }
        Err(PurchaseError::Gateway(e)) => {
            error!("Purchase failed at gateway: {}", e);
            Json(JsonRpcResponse::failure(request.id, INTERNAL_ERROR, e.to_string()))
        }
    }
}
