pub fn multiplier(rate: f64) -> f64 {
  1.0 + rate / 100.0
}

pub fn net_from_gross(gross: f64, rate: f64) -> f64 {
  gross / multiplier(rate)
}

pub fn difference(total: f64, original_total: f64) -> f64 {
  total - original_total
}

pub fn profit(net: f64, cost_price: f64) -> f64 {
  net - cost_price
}

/// Margin of `net` over `cost_price` in percent, `None` when `net` is zero.
pub fn coverage_percent(net: f64, cost_price: f64) -> Option<f64> {
  if net == 0.0 {
    None
  } else {
    Some(profit(net, cost_price) / net * 100.0)
  }
}

/// Gross price at which `coverage_percent(net, cost_price)` equals `coverage`.
pub fn price_from_coverage(cost_price: f64, coverage: f64, rate: f64) -> Option<f64> {
  if !coverage.is_finite() {
    return None;
  }
  let share = 1.0 - coverage / 100.0;
  if share <= f64::EPSILON {
    return None;
  }
  let total = cost_price / share * multiplier(rate);
  total.is_finite().then_some(total)
}
