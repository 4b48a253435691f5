use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

use crate::models::TOTAL_PRICE_INPUT_ID;
use crate::recalculator::PriceRecalculator;
use crate::sink::PriceSink;

type Listener = Box<dyn FnMut(&str)>;

/// The watched total price input.
///
/// Listeners run synchronously in registration order every time the value
/// changes. Nothing here is `Send`; all updates happen on one thread.
#[derive(Default)]
pub struct TotalPriceField {
  value: String,
  listeners: Vec<Listener>,
}

impl TotalPriceField {
  pub fn new(initial: impl Into<String>) -> Self {
    Self {
      value: initial.into(),
      listeners: Vec::new(),
    }
  }

  pub fn value(&self) -> &str {
    &self.value
  }

  pub fn subscribe(&mut self, listener: impl FnMut(&str) + 'static) {
    self.listeners.push(Box::new(listener));
  }

  pub fn set_value(&mut self, value: impl Into<String>) {
    self.value = value.into();
    trace!(id = TOTAL_PRICE_INPUT_ID, value = %self.value, listeners = self.listeners.len(), "input changed");
    for listener in self.listeners.iter_mut() {
      listener(&self.value);
    }
  }
}

/// Populates the sink from the current field value, then keeps it in sync
/// with every later change.
pub fn bind_recalculator<S>(field: &mut TotalPriceField, recalculator: PriceRecalculator, sink: Rc<RefCell<S>>)
where
  S: PriceSink + 'static,
{
  recalculator.recompute(field.value(), &mut *sink.borrow_mut());
  field.subscribe(move |text| recalculator.recompute(text, &mut *sink.borrow_mut()));
}
