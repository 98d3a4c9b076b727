pub mod amount;
pub mod decimal_count;
pub mod display_value;

pub use amount::{RawAmount, ScaledAmount};
pub use decimal_count::DecimalCount;
pub use display_value::DisplayValue;
