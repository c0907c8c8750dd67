use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Message returned to the caller once payment and seat reservation both went through
pub const SUCCESS_MESSAGE: &str = "Cinema tickets purchased and seats reservation is successful";

/// Ticket category; decides the price and whether a seat is taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketType {
    Adult,
    Child,
    Infant,
}

impl TicketType {
    pub const ALL: [TicketType; 3] = [TicketType::Adult, TicketType::Child, TicketType::Infant];

    /// Infants sit on an adult's lap
    pub fn occupies_seat(self) -> bool {
        !matches!(self, TicketType::Infant)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TicketType::Adult => "ADULT",
            TicketType::Child => "CHILD",
            TicketType::Infant => "INFANT",
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketType {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADULT" => Ok(TicketType::Adult),
            "CHILD" => Ok(TicketType::Child),
            "INFANT" => Ok(TicketType::Infant),
            other => Err(ContractError::UnknownTicketType(other.to_string())),
        }
    }
}

/// Ticket request as it arrives on the wire: `{ "type": "ADULT", "noOfTickets": 5 }`
///
/// The count stays a raw JSON value so negative and fractional counts can be
/// told apart from a missing field.
#[derive(Debug, Deserialize)]
pub struct TicketTypeRequestWire {
    #[serde(rename = "type")]
    pub ticket_type: String,
    #[serde(rename = "noOfTickets")]
    pub count: Value,
}

/// Purchase order as it arrives on the wire
///
/// ```json
/// { "accountId": 1,
///   "ticketTypeRequests": [ { "type": "ADULT", "noOfTickets": 5 } ] }
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderWire {
    pub account_id: Value,
    pub ticket_type_requests: Vec<TicketTypeRequestWire>,
}

/// Request for `count` tickets of one type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    count: u32,
}

impl TicketTypeRequest {
    pub fn new(ticket_type: TicketType, count: u32) -> Self {
        Self { ticket_type, count }
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

impl TryFrom<TicketTypeRequestWire> for TicketTypeRequest {
    type Error = ContractError;

    /// Any non-negative integer is a valid count. Counts past `u32::MAX`
    /// are clamped; they are far over the ticket cap either way.
    fn try_from(wire: TicketTypeRequestWire) -> Result<Self, Self::Error> {
        let ticket_type = wire.ticket_type.parse::<TicketType>()?;
        let count = wire
            .count
            .as_u64()
            .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
            .ok_or_else(|| ContractError::InvalidTicketCount(wire.count.to_string()))?;

        Ok(Self::new(ticket_type, count))
    }
}

/// Purchasing account; always strictly positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AccountId(u64);

impl AccountId {
    pub fn new(id: i64) -> Result<Self, ContractError> {
        if id > 0 {
            Ok(Self(id as u64))
        } else {
            Err(ContractError::InvalidAccountId(id.to_string()))
        }
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// Only JSON integers greater than zero are accepted; `"1"` and `1.0` are not
    pub fn from_json(value: &Value) -> Result<Self, ContractError> {
        match value.as_u64() {
            Some(id) if id > 0 => Ok(Self(id)),
            _ => Err(ContractError::InvalidAccountId(value.to_string())),
        }
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single purchase: who pays and what they asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseOrder {
    account_id: AccountId,
    ticket_type_requests: Vec<TicketTypeRequest>,
}

impl PurchaseOrder {
    pub fn new(
        account_id: AccountId,
        ticket_type_requests: Vec<TicketTypeRequest>,
    ) -> Result<Self, ContractError> {
        if ticket_type_requests.is_empty() {
            return Err(ContractError::NoTicketRequests);
        }
        Ok(Self { account_id, ticket_type_requests })
    }

    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    pub fn requests(&self) -> &[TicketTypeRequest] {
        &self.ticket_type_requests
    }

    /// Build an order from JSON params
    ///
    /// Missing fields or wrong JSON shapes are `MalformedRequest`; after that
    /// the account id is checked first, then every request in order, so the
    /// first bad field decides the error.
    pub fn from_json(value: &Value) -> Result<Self, ContractError> {
        let wire = PurchaseOrderWire::deserialize(value)
            .map_err(|e| ContractError::MalformedRequest(e.to_string()))?;
        Self::try_from(wire)
    }
}

impl TryFrom<PurchaseOrderWire> for PurchaseOrder {
    type Error = ContractError;

    fn try_from(wire: PurchaseOrderWire) -> Result<Self, Self::Error> {
        let account_id = AccountId::from_json(&wire.account_id)?;
        let requests = wire
            .ticket_type_requests
            .into_iter()
            .map(TicketTypeRequest::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(account_id, requests)
    }
}

/// Returned once the order has been charged and seated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Confirmation {
    pub account_id: AccountId,
    pub total_amount: u32,
    pub seats_reserved: u32,
    pub message: String,
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Input that breaks the shape of the purchase contract
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    #[error("invalid account id {0}: must be a positive integer")]
    InvalidAccountId(String),
    #[error("unknown ticket type {0:?}: expected ADULT, CHILD or INFANT")]
    UnknownTicketType(String),
    #[error("invalid ticket count {0}: must be a non-negative integer")]
    InvalidTicketCount(String),
    #[error("a purchase needs at least one ticket request")]
    NoTicketRequests,
    #[error("malformed purchase request: {0}")]
    MalformedRequest(String),
}

/// Business rule violations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("You have to purchase at least one adult ticket")]
    NoAdult,
    #[error("Number of Infant tickets cannot be greater than the Number of Adult tickets.")]
    TooManyInfants { infants: u32, adults: u32 },
    #[error("Only a maximum of {max} tickets can be purchased at a time")]
    TooManyTickets { requested: u32, max: u32 },
}

/// Failure reported by a payment or seat reservation collaborator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{service} failed: {reason}")]
pub struct GatewayError {
    pub service: &'static str,
    pub reason: String,
}

impl GatewayError {
    pub fn new(service: &'static str, reason: impl Into<String>) -> Self {
        Self { service, reason: reason.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    #[error(transparent)]
    Contract(#[from] ContractError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
