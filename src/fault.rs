//! Faults returned by wrapped function bodies.
//!
//! A fault is what a function signals instead of a value: a [`FaultKind`]
//! tag saying what went wrong, plus a message. The contract decides whether
//! that kind may pass through the gate unchanged. Kinds compare by identity
//! only, same as value tags.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned by a wrapped function body.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("[{kind}] {message}")]
pub struct Fault {
    /// Fault kind (machine-readable tag).
    pub kind: FaultKind,

    /// Human-readable message.
    pub message: String,
}

impl Fault {
    /// Create a new fault.
    pub fn new(kind: FaultKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Division by zero.
    pub fn division_by_zero() -> Self {
        Self::new(FaultKind::DivisionByZero, "division by zero")
    }

    /// Arithmetic overflow.
    pub fn overflow(message: impl Into<String>) -> Self {
        Self::new(FaultKind::Overflow, message)
    }

    /// An operand the function cannot work with.
    pub fn invalid_operand(message: impl Into<String>) -> Self {
        Self::new(FaultKind::InvalidOperand, message)
    }

    /// An operation the function does not support.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::new(FaultKind::Unsupported, message)
    }
}

/// Fault kinds a wrapped function may signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FaultKind {
    /// Division by zero.
    DivisionByZero,

    /// Arithmetic overflow.
    Overflow,

    /// Operand of the wrong shape or range.
    InvalidOperand,

    /// Operation not supported by this function.
    Unsupported,
}

impl std::fmt::Display for FaultKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::Overflow => "OVERFLOW",
            Self::InvalidOperand => "INVALID_OPERAND",
            Self::Unsupported => "UNSUPPORTED",
        };
        write!(f, "{}", s)
    }
}
