//! # Contract Gate
//!
//! Runtime contract checking for dynamically typed call boundaries.
//!
//! A [`Contract`] declares what a function expects and what it may signal:
//!
//! - **arg_types**: expected runtime tags per positional argument
//! - **return_type**: expected runtime tag of the return value
//! - **raises**: fault kinds permitted to propagate unchanged
//!
//! Wrapping a function produces a [`Checked`] value that enforces the
//! contract on every call. Any broken condition surfaces as a single
//! [`ContractViolation`]; a permitted fault passes through the gate with
//! its kind and message untouched.
//!
//! Checks compare runtime tags by identity; an `Int` never satisfies a
//! declared `Float` and there is no nested or generic matching. The wildcard
//! slot ([`TypeSpec::Any`] / [`FaultSpec::Any`]) accepts anything in its
//! position.
//!
//! ## Usage
//!
//! ```rust
//! use contract_gate::prelude::*;
//!
//! let div = Contract::new()
//!     .arg_types([ValueType::Int, ValueType::Int])
//!     .returns(ValueType::Float)
//!     .raises([FaultKind::DivisionByZero])
//!     .wrap(|args: &[Value]| match args {
//!         [Value::Int(_), Value::Int(0)] => Err(Fault::division_by_zero()),
//!         [Value::Int(a), Value::Int(b)] => Ok(Value::Float(*a as f64 / *b as f64)),
//!         _ => Err(Fault::invalid_operand("div takes two integers")),
//!     });
//!
//! assert_eq!(div.call(&[Value::Int(1), Value::Int(2)]).unwrap(), Value::Float(0.5));
//! assert!(div.call(&[Value::Int(1), Value::Null]).is_err());
//! ```

pub mod contract;
pub mod errors;
pub mod fault;
pub mod value;

// Re-export everything in prelude for convenience
pub mod prelude {
    pub use crate::contract::*;
    pub use crate::errors::*;
    pub use crate::fault::*;
    pub use crate::value::*;
}

// Also re-export at crate root
pub use prelude::*;
