//! Operand validation at the prompt boundary.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::config::CalcConfig;

/// Rejection of raw operand text before any calculation happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The text is not a decimal number.
    #[error("invalid number format: '{0}'")]
    InvalidNumber(String),
    /// The number is larger than the configured input cap.
    #[error("value {value} exceeds the maximum allowed magnitude {max}")]
    ExceedsMaximum {
        /// Offending value.
        value: Decimal,
        /// Configured cap.
        max: Decimal,
    },
}

/// Parses raw operand text into a decimal, honoring the input cap.
///
/// Accepts plain (`12.5`) and scientific (`1.25e1`) notation.
pub fn parse_operand(raw: &str, config: &CalcConfig) -> Result<Decimal, ValidationError> {
    let text = raw.trim();
    let value = text
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| ValidationError::InvalidNumber(text.to_string()))?;
    if let Some(max) = config.max_input_magnitude {
        if value.abs() > max {
            return Err(ValidationError::ExceedsMaximum { value, max });
        }
    }
    Ok(value)
}
