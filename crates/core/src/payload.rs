use crate::models::{LabelRequest, PaymentMode, ShipmentEntry, ShipmentPayload};

/// Map a validated [`LabelRequest`] into the carrier's shipment schema.
///
/// Pure transform: no coercion failures are possible here because the
/// validator has already established field presence, and re-running it on
/// the same input yields an identical payload.
pub fn build_shipment_payload(
    request: &LabelRequest,
    pickup_location: Option<&str>,
) -> ShipmentPayload {
    let address = request.shipping_address.clone().unwrap_or_default();
    let customer = request.customer.clone().unwrap_or_default();

    let order = request
        .order_number
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();

    let consignee = format!(
        "{} {}",
        customer.first_name.as_deref().unwrap_or(""),
        customer.last_name.as_deref().unwrap_or("")
    );

    let mut consignee_address = address.address1.clone().unwrap_or_default();
    if let Some(address2) = address.address2.as_deref().filter(|s| !s.is_empty()) {
        consignee_address.push(' ');
        consignee_address.push_str(address2);
    }

    let payment_mode = request.payment_mode.unwrap_or_default();
    let total_amount = request.total_amount.unwrap_or(0.0);
    let cod_amount = match payment_mode {
        PaymentMode::Cod => total_amount,
        PaymentMode::Prepaid => 0.0,
    };

    let product_details = match request.order_items.as_deref() {
        Some(items) if !items.is_empty() => items
            .iter()
            .map(|item| item.name.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        _ => "General".to_string(),
    };

    ShipmentPayload {
        pickup_location: pickup_location.map(str::to_string),
        shipments: vec![ShipmentEntry {
            order,
            waybill: String::new(),
            consignee,
            consignee_address,
            consignee_city: address.city.unwrap_or_default(),
            consignee_pincode: address.zip.unwrap_or_default(),
            consignee_state: address.province.unwrap_or_default(),
            consignee_phone: address.phone.unwrap_or_default(),
            payment_mode,
            total_amount,
            cod_amount,
            weight: request.weight.unwrap_or(0.0),
            length: request.length.unwrap_or(0.0),
            breadth: request.breadth.unwrap_or(0.0),
            height: request.height.unwrap_or(0.0),
            pieces: 1,
            product_details,
            invoice_number: request.invoice_number.clone().unwrap_or_default(),
            invoice_value: request.invoice_value.unwrap_or(0.0),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Customer, OrderItem, OrderNumber, ShippingAddress};

    fn request() -> LabelRequest {
        LabelRequest {
            order_number: Some(OrderNumber::Number(5001)),
            shipping_address: Some(ShippingAddress {
                address1: Some("12 MG Road".into()),
                city: Some("Pune".into()),
                province: Some("MH".into()),
                zip: Some("411001".into()),
                phone: Some("9999999999".into()),
                ..Default::default()
            }),
            customer: Some(Customer {
                first_name: Some("Asha".into()),
                last_name: Some("Bhat".into()),
            }),
            weight: Some(1.2),
            length: Some(10.0),
            breadth: Some(12.0),
            height: Some(8.0),
            total_amount: Some(999.0),
            invoice_number: Some("INV1".into()),
            invoice_value: Some(500.0),
            ..Default::default()
        }
    }

    #[test]
    fn cod_amount_equals_total_for_cod_orders() {
        let mut req = request();
        req.payment_mode = Some(PaymentMode::Cod);
        let payload = build_shipment_payload(&req, None);
        assert_eq!(payload.shipments[0].cod_amount, 999.0);
        assert_eq!(payload.shipments[0].payment_mode, PaymentMode::Cod);
    }

    #[test]
    fn cod_amount_is_zero_for_prepaid_orders() {
        let mut req = request();
        req.payment_mode = Some(PaymentMode::Prepaid);
        let payload = build_shipment_payload(&req, None);
        assert_eq!(payload.shipments[0].cod_amount, 0.0);
    }

    #[test]
    fn payment_mode_defaults_to_prepaid() {
        let payload = build_shipment_payload(&request(), None);
        assert_eq!(payload.shipments[0].payment_mode, PaymentMode::Prepaid);
        assert_eq!(payload.shipments[0].cod_amount, 0.0);
    }

    #[test]
    fn consignee_joins_first_and_last_name() {
        let payload = build_shipment_payload(&request(), None);
        assert_eq!(payload.shipments[0].consignee, "Asha Bhat");
    }

    #[test]
    fn address2_is_appended_when_present() {
        let mut req = request();
        req.shipping_address.as_mut().unwrap().address2 = Some("Flat 4".into());
        let payload = build_shipment_payload(&req, None);
        assert_eq!(payload.shipments[0].consignee_address, "12 MG Road Flat 4");
    }

    #[test]
    fn empty_address2_is_ignored() {
        let mut req = request();
        req.shipping_address.as_mut().unwrap().address2 = Some(String::new());
        let payload = build_shipment_payload(&req, None);
        assert_eq!(payload.shipments[0].consignee_address, "12 MG Road");
    }

    #[test]
    fn product_details_joins_item_names() {
        let mut req = request();
        req.order_items = Some(vec![
            OrderItem { name: "Wheat Flour".into() },
            OrderItem { name: "Jaggery".into() },
        ]);
        let payload = build_shipment_payload(&req, None);
        assert_eq!(
            payload.shipments[0].product_details,
            "Wheat Flour, Jaggery"
        );
    }

    #[test]
    fn product_details_falls_back_to_general() {
        let mut req = request();
        req.order_items = Some(Vec::new());
        let payload = build_shipment_payload(&req, None);
        assert_eq!(payload.shipments[0].product_details, "General");

        req.order_items = None;
        let payload = build_shipment_payload(&req, None);
        assert_eq!(payload.shipments[0].product_details, "General");
    }

    #[test]
    fn waybill_is_empty_and_pieces_is_one() {
        let payload = build_shipment_payload(&request(), Some("WH-PUNE"));
        assert_eq!(payload.shipments[0].waybill, "");
        assert_eq!(payload.shipments[0].pieces, 1);
        assert_eq!(payload.pickup_location.as_deref(), Some("WH-PUNE"));
    }

    #[test]
    fn string_order_numbers_pass_through() {
        let mut req = request();
        req.order_number = Some(OrderNumber::Text("GG-1042".into()));
        let payload = build_shipment_payload(&req, None);
        assert_eq!(payload.shipments[0].order, "GG-1042");
    }

    #[test]
    fn transform_is_idempotent() {
        let req = request();
        let first = serde_json::to_string(&build_shipment_payload(&req, Some("WH-PUNE"))).unwrap();
        let second = serde_json::to_string(&build_shipment_payload(&req, Some("WH-PUNE"))).unwrap();
        assert_eq!(first, second);
    }
}
