use rust_decimal::Decimal;
use crate::core::domain::Identifiable;

pub mod document;
pub mod model;

// Book is the read-side view shared by persisted records and transfer objects
pub(crate) trait Book: Identifiable {
    fn title(&self) -> &str;
    fn language(&self) -> &str;
    fn authors(&self) -> &[String];
    fn category(&self) -> &str;
    fn year(&self) -> i32;
    fn price(&self) -> Decimal;
}
