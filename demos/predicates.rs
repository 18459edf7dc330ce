//! Predicate Builders Example
//!
//! This example demonstrates how to build predicates for loosely typed JSON
//! values and read the diagnostics they produce.
//!
//! Run with: cargo run --example predicates

use serde_json::json;
use weir::prelude::*;

fn main() {
    println!("=== Predicate Builders Example ===\n");

    kind_builders();
    shapes();
    alternatives();
    entry_points();
    real_world_example();
}

/// Demonstrates the per-kind builders
fn kind_builders() {
    println!("--- Kind Builders ---\n");

    let name = string().min_length(3).max_length(10);
    println!("string().min_length(3).max_length(10):");
    println!("  \"ab\": {:?}", report_validation(&json!("ab"), &name)); // too short
    println!("  \"alice\": {:?}", report_validation(&json!("alice"), &name)); // None

    let port = number().integer().in_range(1, 65535);
    println!("\nnumber().integer().in_range(1, 65535):");
    println!("  8080: {}", is_valid(&json!(8080), &port)); // true
    println!("  0: {:?}", report_validation(&json!(0), &port));
    println!("  80.5: {:?}", report_validation(&json!(80.5), &port));

    let tags = array().non_empty().of(string().one_of(["a", "b"]));
    println!("\narray().non_empty().of(string().one_of([\"a\", \"b\"])):");
    println!("  []: {:?}", report_validation(&json!([]), &tags));
    println!("  [\"a\", \"c\"]: {:?}", report_validation(&json!(["a", "c"]), &tags)); // path `1`

    // Builders never change the predicate they start from
    let base = string();
    let short = base.max_length(2);
    println!("\nbase accepts \"long\": {}", is_valid(&json!("long"), &base)); // true
    println!("short accepts \"long\": {}", is_valid(&json!("long"), &short)); // false

    println!();
}

/// Demonstrates partial and exact object shapes
fn shapes() {
    println!("--- Shapes ---\n");

    let message = Shape::new().field("message", string());
    let value = json!({ "message": "hi", "extra": 456 });

    println!("partial: {:?}", report_validation(&value, &shape(message.clone()))); // None
    println!("exact:   {:?}", report_validation(&value, &exact_shape(message.clone()))); // `extra`

    let nested = object().shape(Shape::new().field("data", shape(message)));
    println!(
        "nested:  {:?}",
        report_validation(&json!({ "data": { "message": 123 } }), &nested)
    ); // `data.message`

    println!();
}

/// Demonstrates OR composition
fn alternatives() {
    println!("--- Alternatives ---\n");

    let id = any!(string().non_empty(), number().integer().positive());
    println!("\"abc\": {}", is_valid(&json!("abc"), &id)); // true
    println!("42: {}", is_valid(&json!(42), &id)); // true

    if let Some(report) = report_validation(&json!(-1), &id) {
        println!("-1:\n{}", report);
    }

    let nested = any!(any!(string().equals("a"), string().equals("b")), string().equals("c"));
    if let Some(report) = report_validation(&json!("d"), &nested) {
        println!("\nnested, \"d\":\n{}", report);
    }

    println!();
}

/// Demonstrates the three entry points
fn entry_points() {
    println!("--- Entry Points ---\n");

    let p = number().positive();
    let value = json!(-3);

    println!("is_valid: {}", is_valid(&value, &p));
    println!("report_validation: {:?}", report_validation(&value, &p));
    match validate(&value, &p) {
        Ok(()) => println!("validate: ok"),
        Err(err) => {
            println!("validate: {} (at {})", err, err.location());
            println!("is_argument_error: {}", is_argument_error(&err));
        }
    }

    println!();
}

/// A request payload checked at an API boundary
fn real_world_example() {
    println!("--- Real World: Request Payload ---\n");

    let request = object().exact_shape(
        Shape::new()
            .field("user", string().non_empty().max_length(32))
            .field("email", string().includes("@"))
            .field("retries", number().uint8())
            .field("labels", object().values_of(string())),
    );

    let good = json!({
        "user": "alice",
        "email": "alice@example.com",
        "retries": 3,
        "labels": { "team": "core" }
    });
    let bad = json!({
        "user": "alice",
        "email": "alice@example.com",
        "retries": 3,
        "labels": { "team": 7 }
    });

    for (name, payload) in [("good", good), ("bad", bad)] {
        match validate(&payload, &request) {
            Ok(()) => println!("{}: accepted", name),
            Err(err) => println!("{}: rejected: {}", name, err),
        }
    }
}
