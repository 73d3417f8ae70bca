use crate::domain::{Date, InoculationRecord};

/// Optional filters of the delete-record command. `None` matches anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub date: Option<Date>,
    pub batch_id: Option<String>,
}

impl RecordFilter {
    pub fn matches(&self, record: &InoculationRecord) -> bool {
        self.date.is_none_or(|d| record.application_date == d)
            && self
                .batch_id
                .as_deref()
                .is_none_or(|b| record.batch_id == b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Removal {
    pub removed: usize,
    /// Whether the patient had any record at all before filtering.
    pub patient_known: bool,
}

/// Inoculation records ordered by application date. Within one day the most
/// recently inserted record comes first.
#[derive(Debug, Clone, Default)]
pub struct InoculationLog {
    records: Vec<InoculationRecord>,
}

impl InoculationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InoculationRecord> {
        self.records.iter()
    }

    pub fn insert_sorted(&mut self, record: InoculationRecord) -> usize {
        let pos = self
            .records
            .partition_point(|r| r.application_date < record.application_date);
        self.records.insert(pos, record);
        pos
    }

    pub fn find_all_for_patient<'a>(
        &'a self,
        patient_name: &'a str,
    ) -> impl Iterator<Item = &'a InoculationRecord> {
        self.records
            .iter()
            .filter(move |r| r.patient_name == patient_name)
    }

    pub fn has_patient(&self, patient_name: &str) -> bool {
        self.find_all_for_patient(patient_name).next().is_some()
    }

    pub fn is_already_vaccinated(&self, patient_name: &str, vaccine_name: &str, on: &Date) -> bool {
        self.find_all_for_patient(patient_name)
            .any(|r| r.vaccine_name == vaccine_name && r.application_date == *on)
    }

    pub fn remove_matching(&mut self, patient_name: &str, filter: &RecordFilter) -> Removal {
        let patient_known = self.has_patient(patient_name);
        let before = self.records.len();
        self.records
            .retain(|r| !(r.patient_name == patient_name && filter.matches(r)));

        Removal {
            removed: before - self.records.len(),
            patient_known,
        }
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
