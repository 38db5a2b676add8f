use std::path::Path;

use rust_decimal_macros::dec;

use travelgenie_web::catalog::{read_catalog_file, AddOnKind};
use travelgenie_web::config::Config;
use travelgenie_web::pricing::{compute_breakdown, Selection};

#[test]
fn test_sample_catalog_prices_like_builtin() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/products.json");
    let catalog = read_catalog_file(&path, &Config::default().product_defaults()).unwrap();
    assert_eq!(catalog.len(), 2);

    let package = catalog.find("singapore-f1-grand-prix").unwrap();
    assert_eq!(package.nights, 2);

    let selection = Selection::new(3)
        .with_add_on(AddOnKind::Flights)
        .with_add_on(AddOnKind::Insurance);
    let breakdown = compute_breakdown(&package, &selection);
    assert_eq!(breakdown.amount_for(AddOnKind::Flights), dec!(36000));
    assert_eq!(breakdown.amount_for(AddOnKind::Insurance), dec!(1200));
    assert_eq!(breakdown.total, dec!(112200));
}
