use super::date::Date;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaccineBatch {
    pub batch_id: String,
    pub vaccine_name: String,
    pub expiration: Date,
    pub available_doses: u32,
    pub applied_doses: u32,
}

impl VaccineBatch {
    pub fn new(batch_id: String, vaccine_name: String, expiration: Date, doses: u32) -> Self {
        Self {
            batch_id,
            vaccine_name,
            expiration,
            available_doses: doses,
            applied_doses: 0,
        }
    }

    /// Usable for a new dose on `today`: stocked and not yet expired.
    pub fn is_usable_on(&self, today: &Date) -> bool {
        self.available_doses > 0 && self.expiration.is_not_before(today)
    }

    pub fn apply_dose(&mut self) {
        self.available_doses -= 1;
        self.applied_doses += 1;
    }
}

/// Listing format: `name batch DD-MM-YYYY available applied`.
impl fmt::Display for VaccineBatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.vaccine_name,
            self.batch_id,
            self.expiration,
            self.available_doses,
            self.applied_doses
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InoculationRecord {
    pub patient_name: String,
    pub batch_id: String,
    pub vaccine_name: String,
    pub application_date: Date,
}

/// Listing format: `patient batch DD-MM-YYYY`.
impl fmt::Display for InoculationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.patient_name, self.batch_id, self.application_date
        )
    }
}
