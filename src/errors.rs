//! Contract-violation error and the checked-call error layer.
//!
//! Two error layers:
//!
//! 1. **ContractViolation** — the gate rejected the call: an argument tag
//!    mismatch, a disallowed fault kind, or a return tag mismatch. One error
//!    kind for all three, with a structured [`Breach`] saying which check
//!    failed.
//!
//! 2. **Fault** — the wrapped function's own error, passed through unchanged
//!    when the contract permits its kind.
//!
//! # Propagation Rule
//!
//! A violation always surfaces to the caller; the gate never recovers
//! internally and never retries. When a violation was triggered by an
//! underlying fault, that fault is kept as the error source.

use crate::contract::TypeSpec;
use crate::fault::{Fault, FaultKind};
use crate::value::{Value, ValueType};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which contract condition was broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "check", rename_all = "snake_case")]
pub enum Breach {
    /// A positional argument's runtime tag did not satisfy its slot.
    Argument {
        /// 0-indexed argument position.
        position: usize,
        /// What the slot declared.
        expected: TypeSpec,
        /// What the call supplied.
        found: ValueType,
    },

    /// The function signalled a fault kind the contract does not permit.
    Fault {
        /// The disallowed kind.
        kind: FaultKind,
    },

    /// The return value's runtime tag did not satisfy the declared type.
    ReturnValue {
        /// What the contract declared.
        expected: TypeSpec,
        /// What the function returned.
        found: ValueType,
    },
}

impl std::fmt::Display for Breach {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Argument {
                position,
                expected,
                found,
            } => write!(
                f,
                "argument {}: expected {}, found {}",
                position, expected, found
            ),
            Self::Fault { kind } => write!(f, "disallowed fault {}", kind),
            Self::ReturnValue { expected, found } => {
                write!(f, "return value: expected {}, found {}", expected, found)
            }
        }
    }
}

/// The single error kind raised when any contract condition is broken.
///
/// Carries the original fault as its source when the breach is a
/// disallowed fault, so the cause stays visible in error chains.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("contract violation: {breach}")]
pub struct ContractViolation {
    /// Which check failed.
    pub breach: Breach,

    /// Original fault, set exactly when the breach is a disallowed fault.
    #[source]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Fault>,
}

impl ContractViolation {
    /// Violation for an argument whose tag does not satisfy its slot.
    pub fn argument(position: usize, expected: TypeSpec, found: ValueType) -> Self {
        Self {
            breach: Breach::Argument {
                position,
                expected,
                found,
            },
            source: None,
        }
    }

    /// Violation for a fault kind the contract does not permit.
    ///
    /// The fault itself becomes the error source.
    pub fn disallowed_fault(fault: Fault) -> Self {
        Self {
            breach: Breach::Fault { kind: fault.kind },
            source: Some(fault),
        }
    }

    /// Violation for a return value whose tag does not satisfy the contract.
    pub fn return_value(expected: TypeSpec, found: ValueType) -> Self {
        Self {
            breach: Breach::ReturnValue { expected, found },
            source: None,
        }
    }
}

/// Error surfaced by a checked call.
#[derive(Debug, Clone, Error)]
pub enum CallError {
    /// A fault the contract permits to pass through unchanged.
    #[error(transparent)]
    Fault(#[from] Fault),

    /// The contract was broken.
    #[error(transparent)]
    Violation(#[from] ContractViolation),
}

impl CallError {
    /// Check if this is a passed-through fault.
    pub fn is_fault(&self) -> bool {
        matches!(self, Self::Fault(_))
    }

    /// Check if this is a contract violation.
    pub fn is_violation(&self) -> bool {
        matches!(self, Self::Violation(_))
    }
}

/// Result type alias for wrapped function bodies.
pub type FaultResult = Result<Value, Fault>;

/// Result type alias for checked calls.
pub type CallResult = Result<Value, CallError>;
