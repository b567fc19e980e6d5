use axum::extract::State;
use axum::{routing::post, Json, Router};
use serde::Serialize;

use shipdesk_core::models::LabelRequest;
use shipdesk_core::{payload, validation};
use shipdesk_labels::audit::{write_audit_event, AuditEvent};

use crate::error::AppResult;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/label", post(create_label))
}

#[derive(Debug, Serialize)]
pub struct LabelResponse {
    pub success: bool,
    pub tracking_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_url: Option<String>,
}

/// The label pipeline: validate, build the carrier payload, create the
/// shipment, persist the label. Runs once per request with no retries at
/// any stage; a failed request is resubmitted from the dashboard.
async fn create_label(
    State(state): State<AppState>,
    Json(request): Json<LabelRequest>,
) -> AppResult<Json<LabelResponse>> {
    let order_number = request
        .order_number
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();

    if let Err(reason) = validation::validate(&request) {
        tracing::warn!(order = %order_number, %reason, "label request rejected");
        let _ = write_audit_event(
            &AuditEvent::new("label_request_invalid", &order_number)
                .with_error(reason.to_string()),
        );
        return Err(reason.into());
    }

    let payload = payload::build_shipment_payload(
        &request,
        state.carrier_config.pickup_location.as_deref(),
    );

    let package = match state.carrier.create_shipment(&payload).await {
        Ok(package) => package,
        Err(err) => {
            let _ = write_audit_event(
                &AuditEvent::new("shipment_failed", &order_number).with_error(err.to_string()),
            );
            return Err(err.into());
        }
    };

    tracing::info!(order = %order_number, waybill = %package.waybill, "shipment created");

    let artifact = match state
        .labels
        .store(&order_number, &package.waybill, package.label.as_deref())
    {
        Ok(artifact) => artifact,
        Err(err) => {
            let _ = write_audit_event(
                &AuditEvent::new("label_store_failed", &order_number)
                    .with_waybill(package.waybill.clone())
                    .with_error(err.to_string()),
            );
            return Err(err.into());
        }
    };

    let _ = write_audit_event(
        &AuditEvent::new("label_generated", &order_number)
            .with_waybill(artifact.tracking_number.clone())
            .with_label_url(artifact.label_url.clone()),
    );

    Ok(Json(LabelResponse {
        success: true,
        tracking_number: artifact.tracking_number,
        label_url: artifact.label_url,
    }))
}
