// Domain layer: dates, batches, inoculation records and the config port. No I/O.

pub mod date;
pub mod model;
pub mod ports;

pub use date::{Date, DateError};
pub use model::{InoculationRecord, VaccineBatch};
pub use ports::ConfigProvider;
