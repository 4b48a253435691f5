use crate::models::{CoverageFallback, NumberStyle};

pub const MONEY_DECIMALS: usize = 2;
pub const COVERAGE_DECIMALS: usize = 1;

pub fn format_fixed(value: f64, decimals: usize, style: NumberStyle) -> String {
  // -0.0 + 0.0 is +0.0, so a zero never prints with a sign
  let plain = format!("{:.*}", decimals, value + 0.0);
  match style {
    NumberStyle::Plain => plain,
    NumberStyle::Danish => to_danish(&plain),
  }
}

pub fn format_money(value: f64, style: NumberStyle) -> String {
  format_fixed(value, MONEY_DECIMALS, style)
}

pub fn format_coverage(value: Option<f64>, fallback: CoverageFallback, style: NumberStyle) -> String {
  match (value, fallback) {
    (Some(value), _) => format_fixed(value, COVERAGE_DECIMALS, style),
    (None, CoverageFallback::Zero) => format_fixed(0.0, COVERAGE_DECIMALS, style),
    (None, CoverageFallback::Nan) => "NaN".to_string(),
  }
}

fn to_danish(plain: &str) -> String {
  let (sign, unsigned) = match plain.strip_prefix('-') {
    Some(rest) => ("-", rest),
    None => ("", plain),
  };
  let (int_part, frac_part) = match unsigned.split_once('.') {
    Some((int_part, frac_part)) => (int_part, Some(frac_part)),
    None => (unsigned, None),
  };

  let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
  for (idx, ch) in int_part.chars().enumerate() {
    if idx > 0 && (int_part.len() - idx) % 3 == 0 {
      grouped.push('.');
    }
    grouped.push(ch);
  }

  match frac_part {
    Some(frac) => format!("{sign}{grouped},{frac}"),
    None => format!("{sign}{grouped}"),
  }
}
