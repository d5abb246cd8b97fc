// Request and response envelopes for the place-order confirm endpoint.
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::model::context::{ConfirmContext, RequestContext, ResponseContext};
use crate::domain::model::order::{Fulfillment, Order, Provider};

/// Item reference in a confirm request (id only; the provider platform
/// resolves the rest from the preceding quote)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemRef {
    pub id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
}

/// Billing fragment supplied by the caller when confirming
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BillingDetails {
    pub name: String,
    pub address: String,
    pub state: Region,
    pub city: Region,
    pub email: String,
    pub phone: String,
}

/// The caller-supplied order fragments, carried verbatim inside the envelope
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderPayload {
    pub provider: Provider,
    pub items: Vec<ItemRef>,
    pub fulfillments: Vec<Fulfillment>,
    pub billing: BillingDetails,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfirmRequestMessage {
    pub order: OrderPayload,
}

/// One confirm request envelope: protocol context + order fragments
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfirmRequest {
    pub context: RequestContext,
    pub message: ConfirmRequestMessage,
}

/// Outer body POSTed to the confirm endpoint: a single-element array of
/// envelopes plus the auxiliary user id
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfirmRequestBody {
    #[serde(rename = "confirmRequestDto")]
    pub confirm_request_dto: Vec<ConfirmRequest>,

    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Per-call identifiers stamped into the request context.
///
/// Injected into the envelope builder rather than baked in as literals, so a
/// fresh transaction id, message id and timestamp go out with every call
/// while tests can pin them to fixed values.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestStamp {
    pub transaction_id: String,
    pub message_id: String,
    pub timestamp: String,
}

impl RequestStamp {
    /// Generate a stamp for an outgoing call: v4 UUIDs and the current UTC
    /// time in RFC 3339 with millisecond precision
    pub fn generate() -> Self {
        Self {
            transaction_id: Uuid::new_v4().to_string(),
            message_id: Uuid::new_v4().to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

// Response tree, outermost to innermost:
// ConfirmResponse -> responses[] -> message.order

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderMessage {
    pub order: Order,
}

/// One provider platform's answer inside a confirm response
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProviderResponse {
    pub context: ResponseContext,
    pub message: OrderMessage,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfirmResponseMessage {
    pub context: ConfirmContext,
    pub responses: Vec<ProviderResponse>,
}

/// Top-level record of the confirm response body (the endpoint returns an
/// array of these)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfirmResponse {
    pub context: ConfirmContext,
    pub message: ConfirmResponseMessage,
}
