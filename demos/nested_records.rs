//! Nested Record Validation
//!
//! This demo validates an order whose customer and address are nested
//! records, each with its own declared constraints.
//!
//! Key concepts:
//! - Declaring metadata with `record_constraints!`
//! - Registering metadata per record type
//! - Collecting ALL violations across the record graph
//!
//! Run with: cargo run --example nested_records

use fieldcheck::core::{Record, Value};
use fieldcheck::metadata::MetadataRegistry;
use fieldcheck::{record_constraints, ConstraintError, Validator};
use rust_decimal::Decimal;

fn main() {
    println!("=== Nested Record Validation ===\n");

    let registry = MetadataRegistry::new()
        .with(
            "Order",
            record_constraints! {
                quantity: Int { minValue: 1, maxValue: 100 },
                discount: Number { minValue: 0, maxValueExclusive: 1 },
            },
        )
        .with(
            "Customer",
            record_constraints! {
                name: String { minLength: 2, maxLength: 40 },
            },
        )
        .with(
            "Address",
            record_constraints! {
                country: String { length: 2 },
            },
        );

    let validator = Validator::new(registry);

    // Example 1: a valid order
    let order = Value::from(
        Record::new("Order")
            .with("quantity", 3)
            .with("discount", Decimal::new(15, 2))
            .with(
                "customer",
                Record::new("Customer")
                    .with("name", "Grace")
                    .with("address", Record::new("Address").with("country", "NO")),
            ),
    );
    report("Valid order", validator.validate(&order));

    // Example 2: violations at three different depths
    let order = Value::from(
        Record::new("Order")
            .with("quantity", 0)
            .with("discount", 1.0)
            .with(
                "customer",
                Record::new("Customer")
                    .with("name", "G")
                    .with("address", Record::new("Address").with("country", "NOR")),
            ),
    );
    report("Invalid order", validator.validate(&order));

    println!("\n=== Demo Complete ===");
}

fn report(label: &str, result: Result<(), ConstraintError>) {
    match result {
        Ok(()) => println!("{}: valid", label),
        Err(err) => {
            println!("{}: {}", label, err);
            for name in err.failed().iter() {
                println!("  - {}", name);
            }
        }
    }
}
