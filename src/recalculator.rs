use std::collections::HashMap;

use tracing::debug;

use crate::domain::validation::{ensure_vat_rate, parse_number};
use crate::domain::vat;
use crate::error::AppError;
use crate::format::{format_coverage, format_money};
use crate::models::{DerivedPrices, DisplaySlot, FieldSlot, NumberStyle, PriceDisplay, PricingInputs, Settings};
use crate::page;
use crate::sink::PriceSink;

/// Recomputes the offer figures from the total price field.
///
/// The reference values and settings are fixed for the lifetime of the
/// recalculator, so every output is a function of the field text alone.
#[derive(Debug, Clone)]
pub struct PriceRecalculator {
  inputs: PricingInputs,
  settings: Settings,
}

impl PriceRecalculator {
  pub fn new(inputs: PricingInputs, settings: Settings) -> Result<Self, AppError> {
    ensure_vat_rate(settings.vat_rate)?;
    Ok(Self { inputs, settings })
  }

  pub fn from_dataset(dataset: &HashMap<String, String>, settings: Settings) -> Result<Self, AppError> {
    Self::new(page::pricing_inputs(dataset)?, settings)
  }

  pub fn inputs(&self) -> PricingInputs {
    self.inputs
  }

  pub fn derive(&self, total: f64) -> DerivedPrices {
    let price_without_vat = vat::net_from_gross(total, self.settings.vat_rate);
    DerivedPrices {
      total,
      price_without_vat,
      price_with_vat: total,
      coverage_percent: vat::coverage_percent(price_without_vat, self.inputs.cost_price),
      difference: vat::difference(total, self.inputs.original_total),
      profit: vat::profit(price_without_vat, self.inputs.cost_price),
    }
  }

  pub fn render(&self, derived: &DerivedPrices) -> PriceDisplay {
    let style = self.settings.number_style;
    let fallback = self.settings.coverage_fallback;
    PriceDisplay {
      price_without_vat: format_money(derived.price_without_vat, style),
      cost_price: format_money(self.inputs.cost_price, style),
      coverage: format_coverage(derived.coverage_percent, fallback, style),
      price_with_vat: format_money(derived.price_with_vat, style),
      difference: format_money(derived.difference, style),
      // posted back with the offer, so always machine readable
      coverage_input: format_coverage(derived.coverage_percent, fallback, NumberStyle::Plain),
      cost_price_input: format_money(self.inputs.cost_price, NumberStyle::Plain),
    }
  }

  pub fn recompute<S: PriceSink + ?Sized>(&self, text: &str, sink: &mut S) {
    let total = parse_number(text);
    let derived = self.derive(total);
    debug!(
      raw = text,
      total,
      net = derived.price_without_vat,
      coverage = ?derived.coverage_percent,
      difference = derived.difference,
      "recomputed prices"
    );

    let display = self.render(&derived);
    sink.set_text(DisplaySlot::PriceWithoutVat, &display.price_without_vat);
    sink.set_text(DisplaySlot::CostPrice, &display.cost_price);
    sink.set_text(DisplaySlot::Coverage, &display.coverage);
    sink.set_text(DisplaySlot::PriceWithoutVatSecond, &display.price_without_vat);
    sink.set_text(DisplaySlot::PriceWithVat, &display.price_with_vat);
    sink.set_text(DisplaySlot::Difference, &display.difference);
    sink.set_value(FieldSlot::Coverage, &display.coverage_input);
    sink.set_value(FieldSlot::CostPrice, &display.cost_price_input);
  }

  /// Total price that yields `coverage` percent on this session's cost price.
  pub fn total_for_coverage(&self, coverage: f64) -> Option<f64> {
    vat::price_from_coverage(self.inputs.cost_price, coverage, self.settings.vat_rate)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::CoverageFallback;
  use crate::sink::MemorySink;

  fn recalculator(cost_price: f64, original_total: f64) -> PriceRecalculator {
    PriceRecalculator::new(
      PricingInputs {
        cost_price,
        original_total,
      },
      Settings::default(),
    )
    .unwrap()
  }

  #[test]
  fn derives_reference_offer() {
    let derived = recalculator(80.0, 100.0).derive(125.0);
    assert!((derived.price_without_vat - 100.0).abs() < 1e-9);
    assert_eq!(derived.price_with_vat, 125.0);
    assert!((derived.coverage_percent.unwrap() - 20.0).abs() < 1e-9);
    assert_eq!(derived.difference, 25.0);
    assert!((derived.profit - 20.0).abs() < 1e-9);
  }

  #[test]
  fn writes_all_eight_targets() {
    let mut sink = MemorySink::new();
    recalculator(80.0, 100.0).recompute("125", &mut sink);

    assert_eq!(sink.writes, 8);
    assert_eq!(sink.text(DisplaySlot::PriceWithoutVat), Some("100.00"));
    assert_eq!(sink.text(DisplaySlot::PriceWithoutVatSecond), Some("100.00"));
    assert_eq!(sink.text(DisplaySlot::CostPrice), Some("80.00"));
    assert_eq!(sink.text(DisplaySlot::Coverage), Some("20.0"));
    assert_eq!(sink.text(DisplaySlot::PriceWithVat), Some("125.00"));
    assert_eq!(sink.text(DisplaySlot::Difference), Some("25.00"));
    assert_eq!(sink.value(FieldSlot::Coverage), Some("20.0"));
    assert_eq!(sink.value(FieldSlot::CostPrice), Some("80.00"));
  }

  #[test]
  fn danish_display_keeps_fields_plain() {
    let settings = Settings {
      number_style: NumberStyle::Danish,
      ..Settings::default()
    };
    let calc = PriceRecalculator::new(
      PricingInputs {
        cost_price: 9800.0,
        original_total: 15000.0,
      },
      settings,
    )
    .unwrap();

    let mut sink = MemorySink::new();
    calc.recompute("15625", &mut sink);
    assert_eq!(sink.text(DisplaySlot::PriceWithoutVat), Some("12.500,00"));
    assert_eq!(sink.text(DisplaySlot::Coverage), Some("21,6"));
    assert_eq!(sink.value(FieldSlot::Coverage), Some("21.6"));
    assert_eq!(sink.value(FieldSlot::CostPrice), Some("9800.00"));
  }

  #[test]
  fn zero_total_uses_fallback() {
    let mut sink = MemorySink::new();
    recalculator(50.0, 100.0).recompute("0", &mut sink);
    assert_eq!(sink.text(DisplaySlot::Coverage), Some("0.0"));

    let calc = PriceRecalculator::new(
      PricingInputs {
        cost_price: 50.0,
        original_total: 100.0,
      },
      Settings {
        coverage_fallback: CoverageFallback::Nan,
        ..Settings::default()
      },
    )
    .unwrap();
    calc.recompute("0", &mut sink);
    assert_eq!(sink.text(DisplaySlot::Coverage), Some("NaN"));
    assert_eq!(sink.value(FieldSlot::Coverage), Some("NaN"));
  }

  #[test]
  fn rejects_invalid_vat_rate() {
    let err = PriceRecalculator::new(
      PricingInputs {
        cost_price: 1.0,
        original_total: 1.0,
      },
      Settings {
        vat_rate: -5.0,
        ..Settings::default()
      },
    )
    .unwrap_err();
    assert_eq!(err.code, "INVALID_VAT");
  }

  #[test]
  fn total_for_coverage_round_trips_through_recompute() {
    let calc = recalculator(80.0, 100.0);
    let total = calc.total_for_coverage(20.0).unwrap();
    assert!((total - 125.0).abs() < 1e-9);
    assert_eq!(calc.total_for_coverage(100.0), None);
    assert_eq!(calc.total_for_coverage(f64::NAN), None);
    assert_eq!(calc.total_for_coverage(f64::NEG_INFINITY), None);
  }

  #[test]
  fn tiny_total_still_has_coverage() {
    let derived = recalculator(50.0, 100.0).derive(1e-300);
    assert!(derived.coverage_percent.is_some());
  }
}
