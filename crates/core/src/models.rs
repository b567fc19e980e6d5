use serde::{Deserialize, Serialize};
use std::fmt;

/// Order identifier as supplied by the dashboard. The commerce platform
/// sends numbers, manually entered orders arrive as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderNumber {
    Number(i64),
    Text(String),
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderNumber::Number(n) => write!(f, "{n}"),
            OrderNumber::Text(s) => write!(f, "{s}"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShippingAddress {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub address1: Option<String>,
    #[serde(default)]
    pub address2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaymentMode {
    #[default]
    Prepaid,
    #[serde(rename = "COD")]
    Cod,
}

/// A single label-generation request as posted by the dashboard.
///
/// Every field is optional at the serde layer so the validator, not the
/// deserializer, reports which part of the request is incomplete.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LabelRequest {
    #[serde(default)]
    pub order_number: Option<OrderNumber>,
    #[serde(default)]
    pub shipping_address: Option<ShippingAddress>,
    #[serde(default)]
    pub customer: Option<Customer>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub order_items: Option<Vec<OrderItem>>,
    #[serde(default)]
    pub payment_mode: Option<PaymentMode>,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub length: Option<f64>,
    #[serde(default)]
    pub breadth: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub invoice_number: Option<String>,
    #[serde(default)]
    pub invoice_value: Option<f64>,
}

/// Shipment-creation payload in the carrier's schema. Serialized to JSON and
/// sent as the `data` field of the form-encoded request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipmentPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_location: Option<String>,
    pub shipments: Vec<ShipmentEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipmentEntry {
    pub order: String,
    /// Always empty: the carrier assigns the waybill itself.
    pub waybill: String,
    pub consignee: String,
    pub consignee_address: String,
    pub consignee_city: String,
    pub consignee_pincode: String,
    pub consignee_state: String,
    pub consignee_phone: String,
    pub payment_mode: PaymentMode,
    pub total_amount: f64,
    pub cod_amount: f64,
    pub weight: f64,
    pub length: f64,
    pub breadth: f64,
    pub height: f64,
    /// Always 1; multi-parcel orders are not supported.
    pub pieces: u32,
    pub product_details: String,
    pub invoice_number: String,
    pub invoice_value: f64,
}
