use serde_json::Value;
use thiserror::Error;

/// Everything that can go wrong between a built payload and a usable
/// package. `Rejected` and `NoShipment` carry the full raw response so the
/// operator can see exactly what the carrier said.
#[derive(Debug, Error)]
pub enum CarrierError {
    /// The carrier endpoint URL is missing from the environment. Raised
    /// before any network attempt.
    #[error("carrier API URL is not configured")]
    NotConfigured,

    /// The payload could not be encoded, or a package element could not be
    /// decoded from an otherwise successful response.
    #[error("invalid carrier payload: {0}")]
    Codec(#[from] serde_json::Error),

    /// The HTTP call itself failed (DNS, connect, timeout, malformed body).
    #[error("failed to reach carrier API: {0}")]
    Transport(#[from] reqwest::Error),

    /// The carrier answered with a non-2xx transport response. The body is
    /// kept verbatim for the error surface.
    #[error("carrier API error (status {status}): {body}")]
    Upstream { status: u16, body: String },

    /// The carrier understood the request and declined it.
    #[error("{reason}")]
    Rejected { reason: String, response: Value },

    /// The carrier reported success but returned no package.
    #[error("No shipment created")]
    NoShipment { response: Value },
}
