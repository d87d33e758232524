//! Arithmetic operation set and its failure modes.

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};
use thiserror::Error;

/// Failure raised while performing or reconstructing a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationError {
    /// The named operation is not one of the supported six.
    #[error("unknown operation '{0}'")]
    UnknownOperation(String),
    /// Division with a zero divisor.
    #[error("division by zero is not allowed")]
    DivisionByZero,
    /// Root with a zero degree.
    #[error("zeroth root is undefined")]
    ZerothRoot,
    /// Root of a negative radicand.
    #[error("cannot take the root of a negative number")]
    RootOfNegative,
    /// Zero raised to a negative power.
    #[error("zero cannot be raised to a negative power")]
    ZeroToNegativePower,
    /// Overflow, or a value with no exact decimal form.
    #[error("result cannot be represented as a decimal")]
    Unrepresentable,
    /// A serialized field failed to parse.
    #[error("invalid '{key}' field: {detail}")]
    InvalidField {
        /// Mapping key whose value was rejected.
        key: &'static str,
        /// Parser-provided detail.
        detail: String,
    },
    /// A stored result disagrees with the re-derived one.
    #[error("stored result {stored} does not match recomputed {recomputed}")]
    ResultMismatch {
        /// Result text found in the mapping.
        stored: Decimal,
        /// Result recomputed from the operands.
        recomputed: Decimal,
    },
}

/// Closed set of supported binary operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticOp {
    /// operand1 + operand2.
    Addition,
    /// operand1 - operand2.
    Subtraction,
    /// operand1 * operand2.
    Multiplication,
    /// operand1 / operand2.
    Division,
    /// operand1 raised to operand2.
    Power,
    /// operand2-th root of operand1.
    Root,
}

impl ArithmeticOp {
    /// Every operation, in the order listed by the REPL help.
    pub const ALL: [ArithmeticOp; 6] = [
        ArithmeticOp::Addition,
        ArithmeticOp::Subtraction,
        ArithmeticOp::Multiplication,
        ArithmeticOp::Division,
        ArithmeticOp::Power,
        ArithmeticOp::Root,
    ];

    /// Canonical name used in serialized mappings and display output.
    pub fn name(self) -> &'static str {
        match self {
            ArithmeticOp::Addition => "Addition",
            ArithmeticOp::Subtraction => "Subtraction",
            ArithmeticOp::Multiplication => "Multiplication",
            ArithmeticOp::Division => "Division",
            ArithmeticOp::Power => "Power",
            ArithmeticOp::Root => "Root",
        }
    }

    /// Short command alias accepted at the REPL.
    pub fn alias(self) -> &'static str {
        match self {
            ArithmeticOp::Addition => "add",
            ArithmeticOp::Subtraction => "subtract",
            ArithmeticOp::Multiplication => "multiply",
            ArithmeticOp::Division => "divide",
            ArithmeticOp::Power => "power",
            ArithmeticOp::Root => "root",
        }
    }

    /// Applies the operation to two operands with checked decimal arithmetic.
    pub fn apply(self, operand1: Decimal, operand2: Decimal) -> Result<Decimal, OperationError> {
        match self {
            ArithmeticOp::Addition => operand1
                .checked_add(operand2)
                .ok_or(OperationError::Unrepresentable),
            ArithmeticOp::Subtraction => operand1
                .checked_sub(operand2)
                .ok_or(OperationError::Unrepresentable),
            ArithmeticOp::Multiplication => operand1
                .checked_mul(operand2)
                .ok_or(OperationError::Unrepresentable),
            ArithmeticOp::Division => {
                if operand2.is_zero() {
                    return Err(OperationError::DivisionByZero);
                }
                operand1
                    .checked_div(operand2)
                    .ok_or(OperationError::Unrepresentable)
            }
            ArithmeticOp::Power => power(operand1, operand2),
            ArithmeticOp::Root => root(operand1, operand2),
        }
    }
}

impl fmt::Display for ArithmeticOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ArithmeticOp {
    type Err = OperationError;

    /// Accepts canonical names and REPL aliases, case-insensitively.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.to_ascii_lowercase().as_str() {
            "add" | "addition" => Ok(ArithmeticOp::Addition),
            "subtract" | "subtraction" => Ok(ArithmeticOp::Subtraction),
            "multiply" | "multiplication" => Ok(ArithmeticOp::Multiplication),
            "divide" | "division" => Ok(ArithmeticOp::Division),
            "power" => Ok(ArithmeticOp::Power),
            "root" => Ok(ArithmeticOp::Root),
            _ => Err(OperationError::UnknownOperation(text.to_string())),
        }
    }
}

/// Integral exponents go through exact checked exponentiation; fractional
/// exponents need a non-negative base.
fn power(base: Decimal, exponent: Decimal) -> Result<Decimal, OperationError> {
    if base.is_zero() && exponent.is_sign_negative() && !exponent.is_zero() {
        return Err(OperationError::ZeroToNegativePower);
    }
    if exponent.fract().is_zero() {
        let exp = exponent.to_i64().ok_or(OperationError::Unrepresentable)?;
        return base
            .checked_powi(exp)
            .map(|value| value.normalize())
            .ok_or(OperationError::Unrepresentable);
    }
    if base.is_sign_negative() {
        return Err(OperationError::Unrepresentable);
    }
    base.checked_powd(exponent)
        .map(|value| value.normalize())
        .ok_or(OperationError::Unrepresentable)
}

/// The n-th root is computed as `radicand^(1/n)`.
fn root(radicand: Decimal, degree: Decimal) -> Result<Decimal, OperationError> {
    if degree.is_zero() {
        return Err(OperationError::ZerothRoot);
    }
    if radicand.is_sign_negative() {
        return Err(OperationError::RootOfNegative);
    }
    // A negative degree inverts to a negative exponent, so a zero radicand
    // is the zero-to-negative-power case.
    if radicand.is_zero() && degree.is_sign_negative() {
        return Err(OperationError::ZeroToNegativePower);
    }
    let inverse = Decimal::ONE
        .checked_div(degree)
        .ok_or(OperationError::Unrepresentable)?;
    radicand
        .checked_powd(inverse)
        .map(|value| value.normalize())
        .ok_or(OperationError::Unrepresentable)
}
