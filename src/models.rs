use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub const DEFAULT_VAT_RATE: f64 = 25.0;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NumberStyle {
  #[default]
  Plain,
  Danish,
}

/// What to show for coverage while the net price is zero.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CoverageFallback {
  #[default]
  Zero,
  Nan,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
  pub vat_rate: f64,
  pub number_style: NumberStyle,
  pub coverage_fallback: CoverageFallback,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      vat_rate: DEFAULT_VAT_RATE,
      number_style: NumberStyle::Plain,
      coverage_fallback: CoverageFallback::Zero,
    }
  }
}

/// Reference values attached to the total price input when the page renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingInputs {
  pub cost_price: f64,
  pub original_total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedPrices {
  pub total: f64,
  pub price_without_vat: f64,
  pub price_with_vat: f64,
  /// `None` while the net price is zero.
  pub coverage_percent: Option<f64>,
  pub difference: f64,
  pub profit: f64,
}

/// Formatted output of one recompute. The net price fills two display slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceDisplay {
  pub price_without_vat: String,
  pub cost_price: String,
  pub coverage: String,
  pub price_with_vat: String,
  pub difference: String,
  pub coverage_input: String,
  pub cost_price_input: String,
}

/// Read-only text targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplaySlot {
  PriceWithoutVat,
  CostPrice,
  Coverage,
  PriceWithoutVatSecond,
  PriceWithVat,
  Difference,
}

impl DisplaySlot {
  pub const ALL: [DisplaySlot; 6] = [
    DisplaySlot::PriceWithoutVat,
    DisplaySlot::CostPrice,
    DisplaySlot::Coverage,
    DisplaySlot::PriceWithoutVatSecond,
    DisplaySlot::PriceWithVat,
    DisplaySlot::Difference,
  ];

  pub fn element_id(self) -> &'static str {
    match self {
      DisplaySlot::PriceWithoutVat => "priceWithOutVatDisplay",
      DisplaySlot::CostPrice => "costPriceDisplay",
      DisplaySlot::Coverage => "coverageDisplay",
      DisplaySlot::PriceWithoutVatSecond => "priceWithoutVatDisplay2",
      DisplaySlot::PriceWithVat => "priceWithVatDisplay",
      DisplaySlot::Difference => "differenceDisplay",
    }
  }
}

/// Editable inputs whose value is set programmatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldSlot {
  Coverage,
  CostPrice,
}

impl FieldSlot {
  pub const ALL: [FieldSlot; 2] = [FieldSlot::Coverage, FieldSlot::CostPrice];

  pub fn element_id(self) -> &'static str {
    match self {
      FieldSlot::Coverage => "coverageInput",
      FieldSlot::CostPrice => "costPriceInput",
    }
  }
}

pub const TOTAL_PRICE_INPUT_ID: &str = "totalPriceInput";

/// Page fixture: initial text of the total price input and its data attributes.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct PageData {
  #[serde(default)]
  pub total_price: String,
  #[serde(default)]
  pub dataset: HashMap<String, String>,
}
