use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{json, Value};
use shipdesk_carrier::CarrierError;
use shipdesk_core::validation::ValidationError;
use shipdesk_labels::StoreError;

/// Pipeline-level error type for the label handlers.
///
/// Every stage failure is converted into exactly one JSON envelope here;
/// only the classified reason is user-visible, full context goes to the
/// server log.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Carrier(#[from] CarrierError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                json!({ "success": false, "error": err.to_string() }),
            ),

            AppError::Carrier(err) => carrier_error_response(err),

            AppError::Store(err) => {
                tracing::error!(error = %err, "label persistence failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "success": false, "error": "Failed to store shipping label" }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Map a carrier failure to a status and envelope.
///
/// Explicit rejections are the client's problem (bad pincode, unregistered
/// warehouse) and come back as 400 with the carrier's own words plus the
/// raw response for triage. Configuration and transport failures are ours
/// and come back as 500.
fn carrier_error_response(err: CarrierError) -> (StatusCode, Value) {
    match err {
        CarrierError::Rejected { reason, response } => {
            tracing::error!(response = %response, "Delhivery rejected the shipment");
            (
                StatusCode::BAD_REQUEST,
                json!({
                    "success": false,
                    "error": reason,
                    "delhivery_response": response,
                }),
            )
        }

        CarrierError::NoShipment { response } => {
            tracing::error!(response = %response, "Delhivery reported success without a package");
            (
                StatusCode::BAD_REQUEST,
                json!({ "success": false, "error": "No shipment created" }),
            )
        }

        CarrierError::Upstream { status, body } => {
            tracing::error!(%status, %body, "Delhivery returned an error response");
            // The upstream body is often a JSON object; forward it verbatim
            // either way so the operator sees what the carrier said.
            let detail = if body.trim().is_empty() {
                Value::String("Delhivery API integration failed".to_string())
            } else {
                serde_json::from_str(&body).unwrap_or(Value::String(body))
            };
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "success": false, "error": detail }),
            )
        }

        CarrierError::NotConfigured => {
            tracing::error!("carrier API URL missing from environment");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "success": false, "error": "Delhivery API integration failed" }),
            )
        }

        other => {
            tracing::error!(error = %other, "carrier call failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "success": false, "error": "Delhivery API integration failed" }),
            )
        }
    }
}
