//! Contract configuration and the checked wrapper.
//!
//! A [`Contract`] is the immutable triple captured when a function is
//! wrapped: expected argument types (positional), expected return type, and
//! the fault kinds permitted to pass through unchanged. [`Checked`] owns the
//! function plus its contract and exposes one operation: invoke with
//! validated arguments. No state survives between calls.

use crate::errors::{CallError, CallResult, ContractViolation};
use crate::fault::{Fault, FaultKind};
use crate::value::{Value, ValueType};
use serde::{Deserialize, Serialize};

/// Expected type for one positional slot, or for the return value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeSpec {
    /// Accept any value in this slot.
    Any,

    /// Accept only values whose runtime tag is exactly this type.
    Exact(ValueType),
}

impl TypeSpec {
    /// Check whether a value satisfies this slot.
    ///
    /// Exact tag identity only: an `Int` never satisfies a declared
    /// `Float`, and vice versa.
    pub fn admits(&self, value: &Value) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(expected) => value.value_type() == *expected,
        }
    }
}

impl From<ValueType> for TypeSpec {
    fn from(value_type: ValueType) -> Self {
        Self::Exact(value_type)
    }
}

impl std::fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Any => write!(f, "any"),
            Self::Exact(value_type) => write!(f, "{}", value_type),
        }
    }
}

/// One entry of the permitted-fault list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultSpec {
    /// Permit every fault kind.
    Any,

    /// Permit exactly this fault kind.
    Kind(FaultKind),
}

impl FaultSpec {
    /// Check whether a fault of this kind may pass through unchanged.
    pub fn permits(&self, kind: FaultKind) -> bool {
        match self {
            Self::Any => true,
            Self::Kind(permitted) => *permitted == kind,
        }
    }
}

impl From<FaultKind> for FaultSpec {
    fn from(kind: FaultKind) -> Self {
        Self::Kind(kind)
    }
}

/// Immutable contract configuration captured at wrap time.
///
/// Every field is optional. An unset field disables that check, except
/// `raises`, where unset means *no* fault may pass through unwrapped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    /// Expected argument types, positionally aligned with call arguments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arg_types: Option<Vec<TypeSpec>>,

    /// Expected return type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type: Option<TypeSpec>,

    /// Fault kinds permitted to propagate as-is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raises: Option<Vec<FaultSpec>>,
}

impl Contract {
    /// Create an empty contract (nothing checked, no fault permitted).
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare expected argument types, positionally aligned with calls.
    pub fn arg_types<I, T>(mut self, specs: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeSpec>,
    {
        self.arg_types = Some(specs.into_iter().map(Into::into).collect());
        self
    }

    /// Declare the expected return type.
    pub fn returns(mut self, spec: impl Into<TypeSpec>) -> Self {
        self.return_type = Some(spec.into());
        self
    }

    /// Declare the fault kinds permitted to pass through unchanged.
    pub fn raises<I, T>(mut self, specs: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<FaultSpec>,
    {
        self.raises = Some(specs.into_iter().map(Into::into).collect());
        self
    }

    /// Whether a fault of this kind may pass through unchanged.
    ///
    /// Unset `raises` permits nothing.
    pub fn permits(&self, kind: FaultKind) -> bool {
        match &self.raises {
            None => false,
            Some(specs) => specs.iter().any(|spec| spec.permits(kind)),
        }
    }

    /// Attach this contract to a function.
    pub fn wrap<F>(self, function: F) -> Checked<F>
    where
        F: Fn(&[Value]) -> Result<Value, Fault>,
    {
        Checked {
            function,
            contract: self,
        }
    }
}

/// A function bound to its contract.
///
/// Owns the original function and the configuration; the configuration is
/// fixed for the lifetime of the wrapper and no state is shared between
/// invocations.
pub struct Checked<F> {
    function: F,
    contract: Contract,
}

impl<F> Checked<F>
where
    F: Fn(&[Value]) -> Result<Value, Fault>,
{
    /// The configuration this wrapper enforces.
    pub fn contract(&self) -> &Contract {
        &self.contract
    }

    /// Invoke the function with validated arguments.
    ///
    /// Argument tags are checked before the function body runs; the function
    /// is invoked exactly once; a fault is filtered through the permitted
    /// set; the return tag is checked only on the success path, so a call
    /// that exits through a permitted fault never reaches it.
    pub fn call(&self, args: &[Value]) -> CallResult {
        if let Some(specs) = &self.contract.arg_types {
            for (position, arg) in args.iter().enumerate() {
                // Arguments past the end of the declared list are not
                // checked (see the known-limitations note in DESIGN.md).
                if let Some(spec) = specs.get(position) {
                    if !spec.admits(arg) {
                        return Err(ContractViolation::argument(
                            position,
                            *spec,
                            arg.value_type(),
                        )
                        .into());
                    }
                }
            }
        }

        let value = match (self.function)(args) {
            Ok(value) => value,
            Err(fault) => {
                return if self.contract.permits(fault.kind) {
                    Err(CallError::Fault(fault))
                } else {
                    Err(ContractViolation::disallowed_fault(fault).into())
                };
            }
        };

        if let Some(spec) = &self.contract.return_type {
            if !spec.admits(&value) {
                return Err(ContractViolation::return_value(*spec, value.value_type()).into());
            }
        }

        Ok(value)
    }
}
