use crate::error::AppError;

/// Lenient coercion for the live total price field.
///
/// Skips leading whitespace and reads the longest decimal prefix, so `"125kr"`
/// is 125. Anything without a numeric prefix, or a non-finite result, is 0.
pub fn parse_number(text: &str) -> f64 {
  let prefix = numeric_prefix(text.trim_start());
  match prefix.parse::<f64>() {
    Ok(value) if value.is_finite() => value,
    _ => 0.0,
  }
}

/// Strict parsing for the reference values read at initialization.
pub fn parse_required_number(name: &str, text: Option<&str>) -> Result<f64, AppError> {
  let raw = text
    .map(str::trim)
    .filter(|value| !value.is_empty())
    .ok_or_else(|| AppError::new("MISSING_ATTRIBUTE", format!("data-{name} is missing or empty")))?;

  match raw.parse::<f64>() {
    Ok(value) if value.is_finite() => Ok(value),
    _ => Err(AppError::new(
      "INVALID_ATTRIBUTE",
      format!("data-{name} is not a valid number: {raw}"),
    )),
  }
}

pub fn ensure_vat_rate(rate: f64) -> Result<(), AppError> {
  if !(0.0..100.0).contains(&rate) {
    Err(AppError::new("INVALID_VAT", "VAT rate must be between 0 and 100"))
  } else {
    Ok(())
  }
}

fn numeric_prefix(text: &str) -> &str {
  let bytes = text.as_bytes();
  let mut end = 0;

  if matches!(bytes.first().copied(), Some(b'+') | Some(b'-')) {
    end += 1;
  }

  let int_start = end;
  while end < bytes.len() && bytes[end].is_ascii_digit() {
    end += 1;
  }
  let mut digits = end - int_start;

  if end < bytes.len() && bytes[end] == b'.' {
    let frac_start = end + 1;
    let mut frac_end = frac_start;
    while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
      frac_end += 1;
    }
    digits += frac_end - frac_start;
    if digits > 0 {
      end = frac_end;
    }
  }

  if digits == 0 {
    return "";
  }

  if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
    let mut exp_end = end + 1;
    if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
      exp_end += 1;
    }
    let exp_digits_start = exp_end;
    while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
      exp_end += 1;
    }
    if exp_end > exp_digits_start {
      end = exp_end;
    }
  }

  &text[..end]
}
