use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{DisplaySlot, FieldSlot};

/// Named output targets a recompute writes into.
pub trait PriceSink {
  fn set_text(&mut self, slot: DisplaySlot, text: &str);
  fn set_value(&mut self, slot: FieldSlot, value: &str);
}

/// Keeps the latest string per element id.
#[derive(Debug, Default, Clone, Serialize)]
pub struct MemorySink {
  pub texts: BTreeMap<&'static str, String>,
  pub values: BTreeMap<&'static str, String>,
  #[serde(skip)]
  pub writes: usize,
}

impl MemorySink {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn text(&self, slot: DisplaySlot) -> Option<&str> {
    self.texts.get(slot.element_id()).map(String::as_str)
  }

  pub fn value(&self, slot: FieldSlot) -> Option<&str> {
    self.values.get(slot.element_id()).map(String::as_str)
  }

  /// `id=value` lines, display slots first, in page order.
  pub fn lines(&self) -> Vec<String> {
    let displays = DisplaySlot::ALL
      .iter()
      .filter_map(|slot| self.text(*slot).map(|text| format!("{}={}", slot.element_id(), text)));
    let fields = FieldSlot::ALL
      .iter()
      .filter_map(|slot| self.value(*slot).map(|value| format!("{}={}", slot.element_id(), value)));
    displays.chain(fields).collect()
  }
}

impl PriceSink for MemorySink {
  fn set_text(&mut self, slot: DisplaySlot, text: &str) {
    self.texts.insert(slot.element_id(), text.to_string());
    self.writes += 1;
  }

  fn set_value(&mut self, slot: FieldSlot, value: &str) {
    self.values.insert(slot.element_id(), value.to_string());
    self.writes += 1;
  }
}
