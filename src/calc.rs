//! Calculation records and their flat string-mapping codec.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::ops::{ArithmeticOp, OperationError};

/// Decode failure for serialized calculations and mementos.
///
/// Structurally absent keys surface as [`MappingError::MissingKey`]; a
/// mapping whose keys are present but whose payload cannot be rebuilt
/// surfaces as [`MappingError::Operation`]. Callers rely on the split to
/// tell envelope damage apart from payload damage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// A required key is absent from the mapping.
    #[error("missing required key '{0}'")]
    MissingKey(&'static str),
    /// The mapping is structurally complete but its payload is invalid.
    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Immutable record of one performed arithmetic operation.
///
/// The result is computed once at construction; a record never holds a
/// result that disagrees with its operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculation {
    operation: ArithmeticOp,
    operand1: Decimal,
    operand2: Decimal,
    result: Decimal,
    timestamp: DateTime<Utc>,
}

impl Calculation {
    /// Performs `operation` over the operands and records the result.
    pub fn new(
        operation: ArithmeticOp,
        operand1: Decimal,
        operand2: Decimal,
    ) -> Result<Self, OperationError> {
        let result = operation.apply(operand1, operand2)?;
        Ok(Self {
            operation,
            operand1,
            operand2,
            result,
            timestamp: Utc::now(),
        })
    }

    /// Operation that produced this record.
    pub fn operation(&self) -> ArithmeticOp {
        self.operation
    }

    /// First operand.
    pub fn operand1(&self) -> Decimal {
        self.operand1
    }

    /// Second operand.
    pub fn operand2(&self) -> Decimal {
        self.operand2
    }

    /// Computed result.
    pub fn result(&self) -> Decimal {
        self.result
    }

    /// Creation time of the record.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Serializes to a flat mapping with string keys and string values.
    pub fn to_mapping(&self) -> Map<String, Value> {
        let mut mapping = Map::new();
        mapping.insert(
            "operation".to_string(),
            Value::String(self.operation.to_string()),
        );
        mapping.insert(
            "operand1".to_string(),
            Value::String(self.operand1.to_string()),
        );
        mapping.insert(
            "operand2".to_string(),
            Value::String(self.operand2.to_string()),
        );
        mapping.insert("result".to_string(), Value::String(self.result.to_string()));
        mapping.insert(
            "timestamp".to_string(),
            Value::String(self.timestamp.to_rfc3339()),
        );
        mapping
    }

    /// Reconstructs a record from a mapping produced by [`Self::to_mapping`].
    ///
    /// The result is re-derived from the decoded operands; a stored result
    /// that disagrees fails with [`OperationError::ResultMismatch`], and an
    /// operation that no longer succeeds (a stored division by zero, say)
    /// fails with the underlying [`OperationError`].
    pub fn from_mapping(mapping: &Map<String, Value>) -> Result<Self, MappingError> {
        let operation: ArithmeticOp = require_str(mapping, "operation")?
            .parse()
            .map_err(MappingError::Operation)?;
        let operand1 = parse_decimal(mapping, "operand1")?;
        let operand2 = parse_decimal(mapping, "operand2")?;
        let recomputed = operation
            .apply(operand1, operand2)
            .map_err(MappingError::Operation)?;
        let stored = parse_decimal(mapping, "result")?;
        if stored != recomputed {
            return Err(OperationError::ResultMismatch { stored, recomputed }.into());
        }
        let timestamp = parse_timestamp(mapping, "timestamp")?;
        Ok(Self {
            operation,
            operand1,
            operand2,
            result: recomputed,
            timestamp,
        })
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}, {}) = {}",
            self.operation, self.operand1, self.operand2, self.result
        )
    }
}

/// Looks a key up, reporting absence as [`MappingError::MissingKey`].
pub(crate) fn require<'a>(
    mapping: &'a Map<String, Value>,
    key: &'static str,
) -> Result<&'a Value, MappingError> {
    mapping.get(key).ok_or(MappingError::MissingKey(key))
}

pub(crate) fn require_str<'a>(
    mapping: &'a Map<String, Value>,
    key: &'static str,
) -> Result<&'a str, MappingError> {
    require(mapping, key)?.as_str().ok_or_else(|| {
        MappingError::Operation(OperationError::InvalidField {
            key,
            detail: "not a string".to_string(),
        })
    })
}

fn parse_decimal(mapping: &Map<String, Value>, key: &'static str) -> Result<Decimal, MappingError> {
    require_str(mapping, key)?.parse().map_err(|err: rust_decimal::Error| {
        MappingError::Operation(OperationError::InvalidField {
            key,
            detail: err.to_string(),
        })
    })
}

/// Parses an RFC 3339 timestamp value, normalized to UTC.
pub(crate) fn parse_timestamp(
    mapping: &Map<String, Value>,
    key: &'static str,
) -> Result<DateTime<Utc>, MappingError> {
    let text = require_str(mapping, key)?;
    DateTime::parse_from_rfc3339(text)
        .map(|stamp| stamp.with_timezone(&Utc))
        .map_err(|err| {
            MappingError::Operation(OperationError::InvalidField {
                key,
                detail: err.to_string(),
            })
        })
}
