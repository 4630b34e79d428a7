use chrono::{TimeZone, Utc};
use product_catalog::{LaptopDetails, MobileDetails, Product, ProductKind};

#[test]
fn catalog_entries_report_their_variant() {
    let date = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();

    let entries = vec![
        Product::new("Cable".to_string(), "Generic".to_string(), date, 5),
        Product::laptop(
            "Legion 5".to_string(),
            "Lenovo".to_string(),
            date,
            1500,
            Some(LaptopDetails {
                model: "Legion 5 Pro".to_string(),
                gpu_type: "RTX 4060".to_string(),
            }),
        ),
        Product::mobile(
            "G22".to_string(),
            "Nokia".to_string(),
            date,
            300,
            Some(MobileDetails {
                model: "G22".to_string(),
                camera_count: 3,
            }),
        ),
    ];

    let labels: Vec<&str> = entries.iter().map(|p| p.type_label()).collect();
    assert_eq!(
        labels,
        vec!["The use didn't specify the Type", "laptop", "mobile"]
    );

    let details: Vec<String> = entries.iter().map(|p| p.extra_info()).collect();
    assert_eq!(details, vec!["", "GPU Type:RTX 4060", "Number Of Camera:3"]);
}

#[test]
fn external_layer_can_assign_id_and_discriminator() {
    let date = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
    let mut product = Product::laptop("X1".to_string(), "Lenovo".to_string(), date, 1500, None);

    // Freshly constructed entries carry the placeholder values
    assert_eq!(product.id, 0);
    assert!(product.discriminator.is_none());

    // A persistence mapper fills them in after the fact
    product.id = 42;
    product.discriminator = Some(product.kind().to_string());

    assert_eq!(product.id, 42);
    assert_eq!(product.discriminator.as_deref(), Some("laptop"));
    assert_eq!(
        product.discriminator.unwrap().parse::<ProductKind>().unwrap(),
        ProductKind::Laptop
    );
}

#[test]
fn serialized_form_survives_a_round_trip() {
    let date = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
    let product = Product::mobile(
        "Pixel 8".to_string(),
        "Google".to_string(),
        date,
        700,
        Some(MobileDetails {
            model: "Pixel 8".to_string(),
            camera_count: 2,
        }),
    );

    let json = serde_json::to_string(&product).unwrap();
    let restored: Product = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, product);
    assert_eq!(restored.add_date(), product.add_date());
}
