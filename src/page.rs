use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::warn;

use crate::domain::validation::parse_required_number;
use crate::error::AppError;
use crate::models::{PageData, PricingInputs};

pub const ATTR_COST_PRICE: &str = "costprice";
pub const ATTR_ORIGINAL: &str = "original";

/// Reads the reference values from the total price input's data attributes.
pub fn pricing_inputs(dataset: &HashMap<String, String>) -> Result<PricingInputs, AppError> {
  Ok(PricingInputs {
    cost_price: attribute(dataset, ATTR_COST_PRICE)?,
    original_total: attribute(dataset, ATTR_ORIGINAL)?,
  })
}

fn attribute(dataset: &HashMap<String, String>, name: &str) -> Result<f64, AppError> {
  parse_required_number(name, dataset.get(name).map(String::as_str)).map_err(|err| {
    warn!(attribute = name, code = %err.code, "rejected data attribute: {}", err.message);
    err
  })
}

pub fn load_page(path: &Path) -> Result<PageData, AppError> {
  let raw = fs::read_to_string(path)?;
  Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn dataset(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
  }

  #[test]
  fn reads_both_attributes() {
    let inputs = pricing_inputs(&dataset(&[("costprice", "80"), ("original", "100.5")])).unwrap();
    assert_eq!(inputs.cost_price, 80.0);
    assert_eq!(inputs.original_total, 100.5);
  }

  #[test]
  fn missing_attribute_fails() {
    let err = pricing_inputs(&dataset(&[("costprice", "80")])).unwrap_err();
    assert_eq!(err.code, "MISSING_ATTRIBUTE");
    assert!(err.message.contains("data-original"));
  }

  #[test]
  fn invalid_attribute_fails() {
    let err = pricing_inputs(&dataset(&[("costprice", "eighty"), ("original", "100")])).unwrap_err();
    assert_eq!(err.code, "INVALID_ATTRIBUTE");
    assert!(err.message.contains("data-costprice"));
  }

  #[test]
  fn loads_page_fixture() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.json");
    fs::write(
      &path,
      r#"{ "total_price": "125", "dataset": { "costprice": "80", "original": "100" } }"#,
    )
    .unwrap();

    let page = load_page(&path).unwrap();
    assert_eq!(page.total_price, "125");
    assert_eq!(pricing_inputs(&page.dataset).unwrap().original_total, 100.0);
  }
}
