use quote_compose::*;

fn listing_json() -> &'static str {
    r#"{
        "car_id": "366683071",
        "car_price": "23650",
        "car_specifications": [["Mileage", "45.000 km"], ["Fuel", "Petrol"]],
        "car_features": ["LED headlights", "Rear camera", "MBUX"],
        "car_images": ["images/img-0.jpg", "images/img-main.jpg", "images/img-1.jpg"]
    }"#
}

#[test]
fn test_reference_quotation_scenario() {
    let vehicle: VehicleData = serde_json::from_str(listing_json()).unwrap();
    let inputs: CommercialInputs = serde_json::from_str("{}").unwrap();

    let price = vehicle.car_price.as_f64().unwrap();
    let totals = breakdown(
        price,
        inputs.shipping_fees,
        inputs.customs,
        inputs.logistics_fees,
        inputs.company_fees,
    );
    assert_eq!(totals.subtotal, 23650.0);
    assert_eq!(totals.company_fee, 1655.5);
    assert_eq!(totals.grand_total, 25305.5);

    let gallery = vehicle.gallery_images();
    assert_eq!(gallery.len(), 2);

    let flow = build_flow(&vehicle, &inputs, price, &totals, gallery.len());
    let rendered = format!("{flow:?}");
    assert!(rendered.contains("\u{20ac}23,650"));
    assert!(rendered.contains("\u{20ac}1,655.5"));
    assert!(rendered.contains("\u{20ac}25,305.5"));
    assert!(rendered.contains("G&O fees (%7)"));
}

#[test]
fn test_flow_is_deterministic() {
    let vehicle: VehicleData = serde_json::from_str(listing_json()).unwrap();
    let inputs = CommercialInputs::default();
    let totals = breakdown(23650.0, 0.0, 0.0, 0.0, 7.0);
    let again = breakdown(23650.0, 0.0, 0.0, 0.0, 7.0);
    assert_eq!(totals, again);

    let first = build_flow(&vehicle, &inputs, 23650.0, &totals, 2);
    let second = build_flow(&vehicle, &inputs, 23650.0, &again, 2);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_missing_assets_abort_without_output() {
    let asset_dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();

    let vehicle: VehicleData =
        serde_json::from_str(r#"{"car_id": "no-assets", "car_price": 1000}"#).unwrap();
    let inputs = CommercialInputs::default();
    let config = BuildConfig {
        asset_dir: asset_dir.path().to_path_buf(),
        output_dir: out_dir.path().to_path_buf(),
    };

    let err = build_quotation(&vehicle, &inputs, &config).await.unwrap_err();
    assert!(matches!(err, QuoteError::AssetMissing(_)));
    assert!(!out_dir.path().join("no-assets.pdf").exists());
}

#[test]
fn test_custom_fee_percentage_shows_in_label() {
    let vehicle: VehicleData = serde_json::from_str(listing_json()).unwrap();
    let inputs: CommercialInputs = serde_json::from_str(r#"{"company_fees": 8.5}"#).unwrap();
    let totals = breakdown(23650.0, 0.0, 0.0, 0.0, inputs.company_fees);
    let flow = build_flow(&vehicle, &inputs, 23650.0, &totals, 0);
    assert!(format!("{flow:?}").contains("G&O fees (%8.5)"));
}
