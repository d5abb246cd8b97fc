// Domain model for confirmed orders as returned by the marketplace.
// Field names follow the wire format; ONDC extension keys and the camelCase
// keys are mapped with serde renames.
use serde::{Deserialize, Serialize};

/// A confirmed order as the provider platform reports it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,

    /// Lifecycle state label (e.g. "Created")
    pub state: String,

    pub provider: Provider,
    pub items: Vec<Item>,
    pub billing: Billing,
    pub fulfillments: Vec<Fulfillment>,
    pub quote: Quote,
    pub payment: Payment,

    pub created_at: String,
    pub updated_at: String,

    #[serde(rename = "type")]
    pub order_type: String,

    #[serde(rename = "displayId")]
    pub display_id: String,
}

/// Provider reference (id only)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub id: String,
}

/// An ordered item with its descriptor, price and quantity
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub descriptor: Descriptor,
    pub price: Price,
    pub category_id: String,
    pub quantity: Quantity,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Descriptor {
    pub name: String,
}

/// Monetary amount; the wire keeps the value as a string
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub currency: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub count: u32,
    pub measure: Measure,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    pub unit: String,
    pub value: f64,
}

/// Billing record echoed on the response side
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Billing {
    pub tax_number: String,
    pub phone: String,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Fulfillment records have no published schema yet; the upstream examples
/// show none, so this stays a permissive JSON record until the shape lands.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fulfillment(pub serde_json::Value);

/// Quoted total with an itemized breakup
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub ttl: String,
    pub price: Price,
    pub breakup: Vec<Breakup>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Breakup {
    pub item: Option<BreakupItem>,
    pub price: Price,
    pub title: String,

    #[serde(rename = "@ondc/org/item_id")]
    pub item_id: String,

    #[serde(rename = "@ondc/org/title_type")]
    pub title_type: String,

    #[serde(rename = "@ondc/org/item_quantity")]
    pub item_quantity: Option<ItemQuantity>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BreakupItem {
    pub price: Price,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemQuantity {
    pub count: u32,
}

/// Payment reconciliation metadata
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    #[serde(rename = "@ondc/org/settlement_details")]
    pub settlement_details: Vec<SettlementDetail>,

    #[serde(rename = "@ondc/org/buyer_app_finder_fee_type")]
    pub buyer_app_finder_fee_type: String,

    #[serde(rename = "@ondc/org/buyer_app_finder_fee_amount")]
    pub buyer_app_finder_fee_amount: String,
}

/// Banking information for settlement
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SettlementDetail {
    pub bank_name: String,
    pub branch_name: String,
    pub settlement_type: String,
    pub beneficiary_name: String,
    pub settlement_phase: String,
    pub settlement_ifsc_code: String,
    pub settlement_counterparty: String,
    pub settlement_bank_account_no: String,
}
