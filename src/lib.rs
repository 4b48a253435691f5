pub mod domain;
pub mod error;
pub mod form;
pub mod format;
pub mod logging;
pub mod models;
pub mod page;
pub mod recalculator;
pub mod settings;
pub mod sink;

pub use error::AppError;
pub use form::{bind_recalculator, TotalPriceField};
pub use recalculator::PriceRecalculator;
pub use sink::{MemorySink, PriceSink};
