// Client for the place-order confirm endpoint.
use log::debug;

use crate::config_loader::ApiConfig;
use crate::domain::constants;
use crate::domain::model::confirm::{
    BillingDetails, ConfirmRequest, ConfirmRequestBody, ConfirmRequestMessage, ConfirmResponse,
    ItemRef, OrderPayload, RequestStamp,
};
use crate::domain::model::context::{Location, RequestContext};
use crate::domain::model::order::{Fulfillment, Provider};
use crate::infrastructure::http::{HttpError, HttpService};

/// Build the confirm request body from the caller's order fragments.
///
/// Pure merge, no validation: the four fragments land in `message.order`
/// exactly as given, next to the fixed protocol context and the per-call
/// identifiers from `stamp`. The endpoint expects an array of exactly one
/// envelope.
pub fn build_confirm_request(
    provider: Provider,
    items: Vec<ItemRef>,
    billing: BillingDetails,
    fulfillments: Vec<Fulfillment>,
    stamp: &RequestStamp,
    user_id: &str,
) -> ConfirmRequestBody {
    let context = RequestContext {
        domain: constants::DOMAIN.to_string(),
        location: Location::fixed(),
        action: constants::ACTION_CONFIRM.to_string(),
        version: constants::CORE_VERSION.to_string(),
        transaction_id: stamp.transaction_id.clone(),
        message_id: stamp.message_id.clone(),
        timestamp: stamp.timestamp.clone(),
        bap_id: constants::BAP_ID.to_string(),
        bap_uri: constants::BAP_URI.to_string(),
        bpp_id: constants::BPP_ID.to_string(),
        bpp_uri: constants::BPP_URI.to_string(),
    };

    ConfirmRequestBody {
        confirm_request_dto: vec![ConfirmRequest {
            context,
            message: ConfirmRequestMessage {
                order: OrderPayload {
                    provider,
                    items,
                    fulfillments,
                    billing,
                },
            },
        }],
        user_id: user_id.to_string(),
    }
}

/// Structured input for [`ConfirmClient::confirm_order`]
#[derive(Clone, Debug)]
pub struct ConfirmOrderInput {
    pub provider: Provider,
    pub items: Vec<ItemRef>,
    pub billing: BillingDetails,
    pub fulfillments: Vec<Fulfillment>,
}

/// Typed wrapper around the confirm endpoint.
///
/// One outbound POST per call; no retries, no caching. Transport errors are
/// returned exactly as the HTTP service raised them.
pub struct ConfirmClient {
    http: HttpService,
    confirm_path: String,
    user_id: String,
}

impl ConfirmClient {
    pub fn new(http: HttpService, config: &ApiConfig) -> Self {
        Self {
            http,
            confirm_path: config.confirm_path.clone(),
            user_id: config.user_id.clone(),
        }
    }

    /// Confirm an order from its fragments and return the parsed responses
    pub async fn confirm(
        &self,
        provider: Provider,
        items: Vec<ItemRef>,
        billing: BillingDetails,
        fulfillments: Vec<Fulfillment>,
    ) -> Result<Vec<ConfirmResponse>, HttpError> {
        let stamp = RequestStamp::generate();
        debug!(
            "confirming order, transaction_id={} message_id={}",
            stamp.transaction_id, stamp.message_id
        );

        let body =
            build_confirm_request(provider, items, billing, fulfillments, &stamp, &self.user_id);

        self.http.post(&self.confirm_path, &body).await
    }

    /// Single-input form of [`confirm`](Self::confirm) for callers that carry
    /// the fragments as one value
    pub async fn confirm_order(
        &self,
        input: ConfirmOrderInput,
    ) -> Result<Vec<ConfirmResponse>, HttpError> {
        self.confirm(input.provider, input.items, input.billing, input.fulfillments)
            .await
    }
}
