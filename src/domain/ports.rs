use crate::core::messages::Locale;
use crate::domain::date::Date;

/// Source of the settings a `VaccinationSystem` is built from.
pub trait ConfigProvider {
    fn locale(&self) -> Locale;
    fn start_date(&self) -> Date;
    /// `None` means the batch store grows without limit.
    fn max_batches(&self) -> Option<usize>;
}
