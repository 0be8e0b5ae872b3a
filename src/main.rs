//! Demo script for checked calls.
//!
//! Builds two checked functions and exercises them with literal argument
//! sets, logging each outcome. The first propagated error ends the run the
//! way any unhandled error would.

use contract_gate::prelude::*;
use tracing::info;

/// Add two numbers. The first must be an `Int`; the second may be anything,
/// and any `Float` operand promotes the result to `Float`.
fn add_two_numbers(args: &[Value]) -> FaultResult {
    match args {
        [Value::Int(a), Value::Int(b)] => a
            .checked_add(*b)
            .map(Value::Int)
            .ok_or_else(|| Fault::overflow("integer addition overflowed")),
        [Value::Int(a), Value::Float(b)] => Ok(Value::Float(*a as f64 + b)),
        [Value::Float(a), Value::Int(b)] => Ok(Value::Float(a + *b as f64)),
        [Value::Float(a), Value::Float(b)] => Ok(Value::Float(a + b)),
        _ => Err(Fault::invalid_operand("add_two_numbers takes two numbers")),
    }
}

/// Divide two integers as floats.
fn div(args: &[Value]) -> FaultResult {
    match args {
        [Value::Int(_), Value::Int(0)] => Err(Fault::division_by_zero()),
        [Value::Int(a), Value::Int(b)] => Ok(Value::Float(*a as f64 / *b as f64)),
        _ => Err(Fault::invalid_operand("div takes two integers")),
    }
}

fn main() -> Result<(), CallError> {
    tracing_subscriber::fmt().with_target(false).init();

    let add = Contract::new()
        .arg_types([TypeSpec::Exact(ValueType::Int), TypeSpec::Any])
        .wrap(add_two_numbers);

    let checked_div = Contract::new()
        .arg_types([ValueType::Int, ValueType::Int])
        .returns(ValueType::Float)
        .raises([FaultKind::DivisionByZero])
        .wrap(div);

    let sum = add.call(&[Value::Int(1), Value::Int(2)])?;
    info!(%sum, "add_two_numbers(1, 2)");

    let sum = add.call(&[Value::Int(1), Value::Float(3.4)])?;
    info!(%sum, "add_two_numbers(1, 3.4)");
    // add.call(&[Value::Float(2.1), Value::Int(1)]) trips the first slot check

    let quotient = checked_div.call(&[Value::Int(1), Value::Int(2)])?;
    info!(%quotient, "div(1, 2)");

    // Division by zero is a permitted fault: it passes through the gate
    // unchanged and ends the script here.
    checked_div.call(&[Value::Int(1), Value::Int(0)])?;

    // Not reached: Null in an Int slot is rejected before div runs.
    checked_div.call(&[Value::Int(1), Value::Null])?;

    Ok(())
}
