//! End-to-end scenarios for checked calls.
//!
//! Exercises the full gate on the two demo-style functions: argument tag
//! checks before invocation, fault filtering through the permitted set, and
//! return tag checks on the success path.

use contract_gate::prelude::*;
use std::cell::Cell;
use std::error::Error as _;

fn add_two_numbers(args: &[Value]) -> FaultResult {
    match args {
        [Value::Int(a), Value::Int(b)] => Ok(Value::Int(a + b)),
        [Value::Int(a), Value::Float(b)] => Ok(Value::Float(*a as f64 + b)),
        [Value::Float(a), Value::Int(b)] => Ok(Value::Float(a + *b as f64)),
        [Value::Float(a), Value::Float(b)] => Ok(Value::Float(a + b)),
        _ => Err(Fault::invalid_operand("add_two_numbers takes two numbers")),
    }
}

fn div(args: &[Value]) -> FaultResult {
    match args {
        [Value::Int(_), Value::Int(0)] => Err(Fault::division_by_zero()),
        [Value::Int(a), Value::Int(b)] => Ok(Value::Float(*a as f64 / *b as f64)),
        _ => Err(Fault::invalid_operand("div takes two integers")),
    }
}

fn checked_adder() -> Checked<fn(&[Value]) -> FaultResult> {
    Contract::new()
        .arg_types([TypeSpec::Exact(ValueType::Int), TypeSpec::Any])
        .wrap(add_two_numbers as fn(&[Value]) -> FaultResult)
}

fn checked_div() -> Checked<fn(&[Value]) -> FaultResult> {
    Contract::new()
        .arg_types([ValueType::Int, ValueType::Int])
        .returns(ValueType::Float)
        .raises([FaultKind::DivisionByZero])
        .wrap(div as fn(&[Value]) -> FaultResult)
}

#[test]
fn adder_accepts_int_int() {
    let add = checked_adder();
    assert_eq!(
        add.call(&[Value::Int(1), Value::Int(2)]).unwrap(),
        Value::Int(3)
    );
}

#[test]
fn adder_accepts_anything_in_wildcard_slot() {
    let add = checked_adder();
    let sum = add.call(&[Value::Int(1), Value::Float(3.4)]).unwrap();
    let x = sum.as_float().expect("float operand promotes the result");
    assert!((x - 4.4).abs() < 1e-9);
}

#[test]
fn adder_rejects_float_in_int_slot() {
    let add = checked_adder();
    let err = add.call(&[Value::Float(2.1), Value::Int(1)]).unwrap_err();

    match err {
        CallError::Violation(violation) => {
            assert_eq!(
                violation.breach,
                Breach::Argument {
                    position: 0,
                    expected: TypeSpec::Exact(ValueType::Int),
                    found: ValueType::Float,
                }
            );
            assert!(violation.source.is_none());
        }
        other => panic!("expected a violation, got: {}", other),
    }
}

#[test]
fn argument_check_runs_before_the_function_body() {
    let invoked = Cell::new(false);
    let checked = Contract::new()
        .arg_types([ValueType::Int])
        .wrap(|_args: &[Value]| {
            invoked.set(true);
            Ok(Value::Null)
        });

    let err = checked.call(&[Value::Str("not an int".into())]).unwrap_err();
    assert!(err.is_violation());
    assert!(!invoked.get(), "function body must never run");
}

#[test]
fn div_returns_float_for_valid_arguments() {
    let div = checked_div();
    assert_eq!(
        div.call(&[Value::Int(1), Value::Int(2)]).unwrap(),
        Value::Float(0.5)
    );
}

#[test]
fn permitted_fault_passes_through_unchanged() {
    let div = checked_div();
    let err = div.call(&[Value::Int(1), Value::Int(0)]).unwrap_err();

    match err {
        CallError::Fault(fault) => {
            assert_eq!(fault.kind, FaultKind::DivisionByZero);
            assert_eq!(fault.message, "division by zero");
        }
        other => panic!("expected the original fault, got: {}", other),
    }
}

#[test]
fn div_rejects_null_before_invocation() {
    let div = checked_div();
    let err = div.call(&[Value::Int(1), Value::Null]).unwrap_err();

    match err {
        CallError::Violation(violation) => {
            assert_eq!(
                violation.breach,
                Breach::Argument {
                    position: 1,
                    expected: TypeSpec::Exact(ValueType::Int),
                    found: ValueType::Null,
                }
            );
        }
        other => panic!("expected a violation, got: {}", other),
    }
}

#[test]
fn unset_raises_wraps_every_fault() {
    let checked = Contract::new().wrap(|_args: &[Value]| Err(Fault::division_by_zero()));
    let err = checked.call(&[]).unwrap_err();

    match err {
        CallError::Violation(violation) => {
            assert_eq!(
                violation.breach,
                Breach::Fault {
                    kind: FaultKind::DivisionByZero
                }
            );

            // The original fault stays reachable through the error chain.
            let source = violation.source().expect("cause must be recorded");
            let fault = source.downcast_ref::<Fault>().unwrap();
            assert_eq!(fault.kind, FaultKind::DivisionByZero);
            assert_eq!(fault.message, "division by zero");
        }
        other => panic!("expected a violation, got: {}", other),
    }
}

#[test]
fn fault_outside_the_permitted_set_is_wrapped() {
    let checked = Contract::new()
        .raises([FaultKind::DivisionByZero])
        .wrap(|_args: &[Value]| Err(Fault::overflow("too big")));
    let err = checked.call(&[]).unwrap_err();

    match err {
        CallError::Violation(violation) => {
            assert_eq!(
                violation.breach,
                Breach::Fault {
                    kind: FaultKind::Overflow
                }
            );
            assert_eq!(violation.source, Some(Fault::overflow("too big")));
        }
        other => panic!("expected a violation, got: {}", other),
    }
}

#[test]
fn wildcard_in_raises_permits_every_fault() {
    let checked = Contract::new()
        .raises([FaultSpec::Any])
        .wrap(|_args: &[Value]| Err(Fault::unsupported("nope")));
    let err = checked.call(&[]).unwrap_err();

    match err {
        CallError::Fault(fault) => assert_eq!(fault.kind, FaultKind::Unsupported),
        other => panic!("expected the original fault, got: {}", other),
    }
}

#[test]
fn return_tag_mismatch_is_a_violation() {
    let checked = Contract::new()
        .returns(ValueType::Float)
        .wrap(|_args: &[Value]| Ok(Value::Int(1)));
    let err = checked.call(&[]).unwrap_err();

    match err {
        CallError::Violation(violation) => {
            assert_eq!(
                violation.breach,
                Breach::ReturnValue {
                    expected: TypeSpec::Exact(ValueType::Float),
                    found: ValueType::Int,
                }
            );
        }
        other => panic!("expected a violation, got: {}", other),
    }
}

#[test]
fn return_check_does_not_run_on_the_fault_path() {
    // The function exits through a permitted fault, so the (unsatisfiable)
    // return contract is never consulted.
    let checked = Contract::new()
        .returns(ValueType::Float)
        .raises([FaultKind::Unsupported])
        .wrap(|_args: &[Value]| Err(Fault::unsupported("always")));
    let err = checked.call(&[]).unwrap_err();
    assert!(err.is_fault());
}

#[test]
fn wildcard_return_spec_admits_any_tag() {
    let checked = Contract::new()
        .returns(TypeSpec::Any)
        .wrap(|_args: &[Value]| Ok(Value::Str("anything".into())));
    assert_eq!(
        checked.call(&[]).unwrap(),
        Value::Str("anything".into())
    );
}

#[test]
fn successful_call_returns_the_value_unchanged() {
    let div = checked_div();
    let quotient = div.call(&[Value::Int(9), Value::Int(3)]).unwrap();
    assert_eq!(quotient, Value::Float(3.0));
}
