use crate::error::ApiError;
use crate::models::SumResponse;

/// Parses one path segment as a signed integer.
fn parse_operand(name: &'static str, raw: &str) -> Result<i64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::InvalidPathParameter { name })
}

/// Adds the two path segments.
///
/// Segments are parsed strictly: anything `i64::from_str` rejects (`"5abc"`, `"1.5"`,
/// `""`) is an [`ApiError::InvalidPathParameter`], and a sum outside `i64` is
/// [`ApiError::SumOverflow`].
pub fn sum(raw_a: &str, raw_b: &str) -> Result<SumResponse, ApiError> {
    let a = parse_operand("a", raw_a)?;
    let b = parse_operand("b", raw_b)?;
    let sum = a.checked_add(b).ok_or(ApiError::SumOverflow)?;
    Ok(SumResponse { a, b, sum })
}
