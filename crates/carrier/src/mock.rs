use super::{CarrierClient, CarrierError, CarrierPackage};
use async_trait::async_trait;
use rand::{distributions::Alphanumeric, Rng};
use serde_json::Value;
use shipdesk_core::models::ShipmentPayload;
use std::sync::Arc;
use tokio::time::{sleep, Duration};

/// In-process stand-in for the carrier API, used for local development and
/// in the server's integration tests.
#[derive(Clone, Default)]
pub struct MockCarrier {
    outcome: Option<MockOutcome>,
}

#[derive(Clone)]
pub enum MockOutcome {
    Package {
        waybill: String,
        label: Option<String>,
    },
    Rejected {
        reason: String,
        response: Value,
    },
}

impl MockCarrier {
    /// A mock that invents a waybill per call and returns no label.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A mock that always returns the given package.
    pub fn package(waybill: &str, label: Option<&str>) -> Arc<Self> {
        Arc::new(Self {
            outcome: Some(MockOutcome::Package {
                waybill: waybill.to_string(),
                label: label.map(str::to_string),
            }),
        })
    }

    /// A mock that always rejects with the given reason and raw response.
    pub fn rejected(reason: &str, response: Value) -> Arc<Self> {
        Arc::new(Self {
            outcome: Some(MockOutcome::Rejected {
                reason: reason.to_string(),
                response,
            }),
        })
    }
}

#[async_trait]
impl CarrierClient for MockCarrier {
    async fn create_shipment(
        &self,
        _payload: &ShipmentPayload,
    ) -> Result<CarrierPackage, CarrierError> {
        // simulate network latency
        sleep(Duration::from_millis(50)).await;

        match &self.outcome {
            None => Ok(CarrierPackage {
                waybill: random_waybill(),
                label: None,
            }),
            Some(MockOutcome::Package { waybill, label }) => Ok(CarrierPackage {
                waybill: waybill.clone(),
                label: label.clone(),
            }),
            Some(MockOutcome::Rejected { reason, response }) => Err(CarrierError::Rejected {
                reason: reason.clone(),
                response: response.clone(),
            }),
        }
    }
}

fn random_waybill() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(12)
        .map(char::from)
        .collect()
}
