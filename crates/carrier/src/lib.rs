use async_trait::async_trait;
use serde::Deserialize;
use shipdesk_core::models::ShipmentPayload;

mod error;
pub mod delhivery;
pub mod mock;

pub use error::CarrierError;

/// One created package out of a carrier response.
///
/// The pipeline only ever consumes the first package of a response; the
/// label is either a ready URL or an inline base64 data URI, and some
/// carrier deployments omit it entirely.
#[derive(Debug, Clone, Deserialize)]
pub struct CarrierPackage {
    #[serde(default)]
    pub waybill: String,
    #[serde(default)]
    pub label: Option<String>,
}

/// Outbound shipment creation. One attempt per call; retrying is the
/// caller's business (in practice the merchant just resubmits from the UI).
#[async_trait]
pub trait CarrierClient: Send + Sync {
    async fn create_shipment(
        &self,
        payload: &ShipmentPayload,
    ) -> Result<CarrierPackage, CarrierError>;
}
