//! Check pipeline: validate a raw number, classify it and record the check.

use log::error;
use serde_json::Value;
use std::num::IntErrorKind;

use super::error::{FieldError, ServiceResult};
use crate::api::{Parity, ParityResult};
use crate::db::HistoryRepository;

pub const NOT_AN_INTEGER: &str = "Number must be an integer";
pub const OUT_OF_RANGE: &str = "Number is out of range";

/// Interpret `raw` as an `i64`.
///
/// JSON integers, integral floats (`42.0`) and base-10 integer strings are
/// accepted. Fractional numbers, non-numeric strings, booleans, arrays and
/// objects are rejected, as are integers outside the `i64` range.
pub fn parse_number(field: &str, raw: &Value) -> Result<i64, FieldError> {
    let reject = |message: &str| FieldError::new(field, message, raw.clone());

    match raw {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else if n.is_u64() {
                Err(reject(OUT_OF_RANGE))
            } else {
                let f = n.as_f64().ok_or_else(|| reject(NOT_AN_INTEGER))?;
                if !f.is_finite() || f.fract() != 0.0 {
                    Err(reject(NOT_AN_INTEGER))
                } else if f < i64::MIN as f64 || f >= i64::MAX as f64 {
                    Err(reject(OUT_OF_RANGE))
                } else {
                    Ok(f as i64)
                }
            }
        }
        Value::String(s) => s.parse::<i64>().map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => reject(OUT_OF_RANGE),
            _ => reject(NOT_AN_INTEGER),
        }),
        _ => Err(reject(NOT_AN_INTEGER)),
    }
}

/// Validate `raw`, evaluate its parity and append exactly one record.
///
/// Nothing is stored when validation fails.
pub async fn check_parity(
    repository: &dyn HistoryRepository,
    raw: &Value,
) -> ServiceResult<ParityResult> {
    let number = parse_number("number", raw)?;
    check_number(repository, number).await
}

/// Evaluate and record an already validated integer.
pub async fn check_number(
    repository: &dyn HistoryRepository,
    number: i64,
) -> ServiceResult<ParityResult> {
    let parity = Parity::of(number);
    let record = repository.append(number, parity).await.map_err(|e| {
        error!("Error in check_parity: {}", e);
        e
    })?;

    Ok(ParityResult::from(record))
}
