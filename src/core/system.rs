use crate::core::batch_store::BatchStore;
use crate::core::inoculation_log::InoculationLog;
use crate::domain::{ConfigProvider, Date};

/// Everything one session mutates: batches, inoculations and the simulated clock.
#[derive(Debug, Clone, Default)]
pub struct VaccinationSystem {
    pub batches: BatchStore,
    pub inoculations: InoculationLog,
    current_date: Date,
}

impl VaccinationSystem {
    pub fn new(start_date: Date, max_batches: Option<usize>) -> Self {
        Self {
            batches: BatchStore::new(max_batches),
            inoculations: InoculationLog::new(),
            current_date: start_date,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.start_date(), config.max_batches())
    }

    pub fn current_date(&self) -> Date {
        self.current_date
    }

    /// Moves the clock to `date`. The clock never runs backwards, so an
    /// earlier date is refused and the current date is kept.
    pub fn advance_date(&mut self, date: Date) -> bool {
        if !date.is_not_before(&self.current_date) {
            return false;
        }
        self.current_date = date;
        true
    }

    /// Releases every batch and inoculation record.
    pub fn shutdown(&mut self) -> (usize, usize) {
        let released = (self.batches.len(), self.inoculations.len());
        self.inoculations.clear();
        self.batches.clear();
        released
    }
}
