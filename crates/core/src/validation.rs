use crate::models::LabelRequest;
use thiserror::Error;

/// Why a label request was refused before anything was sent to the carrier.
///
/// The display strings are the exact messages the dashboard shows, so they
/// are part of the API contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing order or address info")]
    MissingOrderInfo,
    #[error("Missing package dimensions or weight")]
    MissingDimensions,
    #[error("Incomplete shipping address")]
    IncompleteAddress,
    #[error("Invoice number and value are required")]
    MissingInvoice,
}

/// Check that a request carries everything the carrier physically needs.
///
/// Checks run in a fixed order and the first failure wins, so the reported
/// reason is deterministic for a given request. No I/O happens here.
pub fn validate(request: &LabelRequest) -> Result<(), ValidationError> {
    let address = match (
        &request.order_number,
        &request.shipping_address,
        &request.customer,
    ) {
        (Some(_), Some(address), Some(_)) => address,
        _ => return Err(ValidationError::MissingOrderInfo),
    };

    if !(positive(request.weight)
        && positive(request.length)
        && positive(request.breadth)
        && positive(request.height))
    {
        return Err(ValidationError::MissingDimensions);
    }

    if !(present(&address.city)
        && present(&address.zip)
        && present(&address.province)
        && present(&address.address1))
    {
        return Err(ValidationError::IncompleteAddress);
    }

    if !present(&request.invoice_number) || !positive(request.invoice_value) {
        return Err(ValidationError::MissingInvoice);
    }

    Ok(())
}

fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.trim().is_empty())
}

fn positive(value: Option<f64>) -> bool {
    value.is_some_and(|n| n > 0.0)
}
