use builder_recipe::builder::Builder;
use builder_recipe::model::{Part, PartKind, Product};

/// Parts are listed in exactly the order the build calls were issued.
#[test]
fn test_listing_follows_call_order() {
    let mut builder = Builder::new();
    builder
        .build_part_c()
        .build_part_a()
        .build_part_b()
        .build_part_a();

    let product = builder.extract_and_reset();
    assert_eq!(
        product.list_parts(),
        "Product parts: PartC1, PartA1, PartB1, PartA1"
    );
    assert_eq!(
        product.parts(),
        &[
            Part::from(PartKind::C),
            Part::from(PartKind::A),
            Part::from(PartKind::B),
            Part::from(PartKind::A),
        ]
    );
}

/// A fresh builder yields an empty product.
#[test]
fn test_new_builder_extracts_empty_product() {
    let mut builder = Builder::new();
    let product = builder.extract_and_reset();

    assert!(product.is_empty());
    assert_eq!(product.list_parts(), "Product parts: ");
}

/// Extracting twice with nothing built in between gives an empty second product.
#[test]
fn test_second_extraction_is_empty() {
    let mut builder = Builder::new();
    builder.build_part_a().build_part_b();

    let first = builder.extract_and_reset();
    let second = builder.extract_and_reset();

    assert_eq!(first.len(), 2);
    assert!(second.is_empty());
    assert_ne!(first, second);
}

/// Building after extraction never leaks into the product already handed out.
#[test]
fn test_extracted_product_is_isolated_from_later_builds() {
    let mut builder = Builder::new();
    builder.build_part_a();
    let extracted = builder.extract_and_reset();
    let snapshot = extracted.list_parts();

    builder.build_part_b().build_part_c();

    assert_eq!(extracted.list_parts(), snapshot);
    assert_eq!(builder.product().list_parts(), "Product parts: PartB1, PartC1");
}

/// Manual construction skipping part B.
#[test]
fn test_custom_product_without_director() {
    let mut builder = Builder::new();
    builder.build_part_a();
    builder.build_part_c();

    let product = builder.extract_and_reset();
    assert_eq!(product.list_parts(), "Product parts: PartA1, PartC1");
}

/// Peeking at the in-progress product does not reset it.
#[test]
fn test_product_view_does_not_reset() {
    let mut builder = Builder::new();
    builder.build_part_b();

    assert_eq!(builder.product().len(), 1);
    assert_eq!(builder.product().len(), 1);
    assert_eq!(builder.extract_and_reset().list_parts(), "Product parts: PartB1");
}

/// Products serialize as a plain list of part labels.
#[test]
fn test_product_serializes_as_part_labels() {
    let mut builder = Builder::new();
    builder.build_part_a().build_part("custom");
    let product = builder.extract_and_reset();

    let json = serde_json::to_value(&product).expect("Failed to serialize product");
    assert_eq!(json, serde_json::json!({ "parts": ["PartA1", "custom"] }));

    let back: Product = serde_json::from_value(json).expect("Failed to deserialize product");
    assert_eq!(back, product);
}
