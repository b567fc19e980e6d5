use shipdesk_carrier::CarrierClient;
use shipdesk_config::CarrierConfig;
use shipdesk_labels::LabelStore;
use std::sync::Arc;

/// Shared state available to all handlers; cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Outbound shipment creation (real Delhivery gateway or the mock).
    pub carrier: Arc<dyn CarrierClient>,
    /// Carrier settings; the payload builder needs the pickup location.
    pub carrier_config: Arc<CarrierConfig>,
    /// Label persistence and public-path mapping.
    pub labels: Arc<LabelStore>,
}
