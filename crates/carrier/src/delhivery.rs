use super::{CarrierClient, CarrierError, CarrierPackage};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use shipdesk_config::CarrierConfig;
use shipdesk_core::models::ShipmentPayload;
use std::sync::Arc;
use std::time::Duration;

/// HTTP gateway to the Delhivery shipment-creation API.
///
/// The API has an unusual envelope: the request body is form-encoded
/// (`format=json&data=<JSON payload>`) and authentication is a static token
/// in the `Authorization` header. The response is plain JSON with a
/// `success` flag and a `packages` array.
#[derive(Clone)]
pub struct DelhiveryClient {
    config: CarrierConfig,
    http_client: reqwest::Client,
}

impl DelhiveryClient {
    pub fn new(config: CarrierConfig) -> Result<Arc<Self>> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Arc::new(Self {
            config,
            http_client,
        }))
    }
}

#[async_trait]
impl CarrierClient for DelhiveryClient {
    async fn create_shipment(
        &self,
        payload: &ShipmentPayload,
    ) -> Result<CarrierPackage, CarrierError> {
        // Configuration is validated here, at call time, so the rest of the
        // dashboard keeps working on a deployment without carrier settings.
        let url = self
            .config
            .api_url
            .as_deref()
            .ok_or(CarrierError::NotConfigured)?;
        let token = self.config.api_token.as_deref().unwrap_or_default();

        let data = serde_json::to_string(payload)?;

        let response = self
            .http_client
            .post(url)
            .header("Authorization", format!("Token {token}"))
            .form(&[("format", "json"), ("data", data.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(CarrierError::Upstream { status, body });
        }

        let raw: Value = response.json().await?;
        let package = first_package(raw)?;

        tracing::info!(waybill = %package.waybill, "shipment created with Delhivery");
        Ok(package)
    }
}

/// Interpret a parsed carrier response body.
///
/// A falsy `success` flag is a rejection; a truthy one without a package is
/// the empty-shipment variant. Only `packages[0]` is consumed.
pub fn first_package(raw: Value) -> Result<CarrierPackage, CarrierError> {
    let success = raw
        .get("success")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !success {
        let reason = rejection_reason(&raw);
        return Err(CarrierError::Rejected {
            reason,
            response: raw,
        });
    }

    match raw.pointer("/packages/0") {
        Some(package) => Ok(serde_json::from_value(package.clone())?),
        None => Err(CarrierError::NoShipment { response: raw }),
    }
}

/// Pick the most specific rejection reason the carrier offered: the
/// top-level `error` field, then the first package's remarks (the live API
/// returns remarks both as a string and as an array), then a generic
/// fallback.
fn rejection_reason(raw: &Value) -> String {
    if let Some(error) = raw.get("error") {
        match error {
            Value::String(s) if !s.is_empty() => return s.clone(),
            Value::Null | Value::String(_) => {}
            other => return other.to_string(),
        }
    }

    if let Some(remarks) = raw.pointer("/packages/0/remarks") {
        match remarks {
            Value::String(s) if !s.is_empty() => return s.clone(),
            Value::Array(items) => {
                if let Some(first) = items.first().and_then(Value::as_str) {
                    if !first.is_empty() {
                        return first.to_string();
                    }
                }
            }
            _ => {}
        }
    }

    "Delhivery API error".to_string()
}
