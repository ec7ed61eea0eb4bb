//! Calculator
//!
//! This demo exercises the evaluator, the chaining calculator, the array
//! and statistics helpers, and pipe/compose.
//!
//! Run with: cargo run --example calculator

use kata::core::{
    average, filter_and_sum, median, mode, multiplier, multiply_all, range, sum_all,
    transform_and_sum,
};
use kata::eval::{calculate, diagnose, evaluate};
use kata::{compose, pipe, Calculator};
use stillwater::validation::Validation;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("kata=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() {
    init_logger();

    println!("=== Calculator ===\n");

    println!("--- Basic operations ---");
    let cases = [
        ("+", 5.0, 3.0),
        ("-", 5.0, 3.0),
        ("*", 5.0, 3.0),
        ("/", 6.0, 2.0),
        ("/", 5.0, 0.0),
    ];
    for (op, a, b) in cases {
        match calculate(op, a, b) {
            Ok(value) => println!("{a} {op} {b} = {value}"),
            Err(e) => println!("{a} {op} {b}: Error: {e}"),
        }
    }

    println!("\n--- Chaining ---");
    let chained = Calculator::new(10.0)
        .add(5.0)
        .multiply(2.0)
        .subtract(10.0)
        .divide(2.0);
    match chained.value() {
        Ok(value) => println!("10 + 5, * 2, - 10, / 2 = {value}"),
        Err(e) => println!("Error: {e}"),
    }
    if let Err(e) = Calculator::new(1.0).divide(0.0).add(1.0).value() {
        println!("1 / 0, + 1: Error: {e}");
    }

    println!("\n--- Arrays ---");
    let numbers = [1.0, 2.0, 3.0, 4.0, 5.0];
    println!("sumAll: {}", sum_all(&numbers));
    println!("multiplyAll: {}", multiply_all(&numbers));
    println!("filterAndSum(x > 2): {}", filter_and_sum(&numbers, |x| x > 2.0));
    println!("transform(x * 2): {}", transform_and_sum(&numbers, |x| x * 2.0));

    println!("\n--- Statistics ---");
    let data = [1.0, 2.0, 2.0, 3.0, 4.0, 5.0];
    let stats = [
        ("average", average(&data)),
        ("median", median(&data)),
        ("mode", mode(&data)),
        ("range", range(&data)),
    ];
    for (name, result) in stats {
        match result {
            Ok(value) => println!("{name}: {value:.3}"),
            Err(e) => println!("{name}: Error: {e}"),
        }
    }

    println!("\n--- Expressions ---");
    let expressions = [
        "10 + 5",
        "20 - 8",
        "4 * 3",
        "15 / 3",
        "5 / 0",
        "5 % 2",
        "five plus two",
    ];
    for expression in expressions {
        match evaluate(expression) {
            Ok(value) => println!("{expression} => {value}"),
            Err(e) => println!("{expression} => Error: {e}"),
        }
    }

    println!("\n--- Every problem at once ---");
    match diagnose("x % 0") {
        Validation::Success(_) => println!("x % 0 is valid"),
        Validation::Failure(errors) => {
            for e in errors.iter() {
                println!("x % 0: {e}");
            }
        }
    }

    println!("\n--- Composition ---");
    let add5 = |x: f64| x + 5.0;
    let double = multiplier(2.0);
    let subtract3 = |x: f64| x - 3.0;
    let piped = pipe![add5, double, subtract3];
    let composed = compose![subtract3, double, add5];
    println!("pipe(add5, double, subtract3)(10) = {}", piped.apply(10.0));
    println!("compose(subtract3, double, add5)(10) = {}", composed.apply(10.0));

    println!("\n=== Demo Complete ===");
}
