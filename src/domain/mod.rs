pub mod validation;
pub mod vat;
