use crate::domain::{Date, VaccineBatch};
use crate::utils::error::{RegistryError, Result};

/// Batches kept sorted by (expiration, batch id).
#[derive(Debug, Clone, Default)]
pub struct BatchStore {
    batches: Vec<VaccineBatch>,
    capacity: Option<usize>,
}

impl BatchStore {
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            batches: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.capacity.is_some_and(|cap| self.batches.len() >= cap)
    }

    pub fn find_by_id(&self, batch_id: &str) -> Option<usize> {
        self.batches.iter().position(|b| b.batch_id == batch_id)
    }

    pub fn exists(&self, batch_id: &str) -> bool {
        self.find_by_id(batch_id).is_some()
    }

    pub fn get(&self, index: usize) -> Option<&VaccineBatch> {
        self.batches.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut VaccineBatch> {
        self.batches.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &VaccineBatch> {
        self.batches.iter()
    }

    pub fn named<'a>(&'a self, vaccine_name: &'a str) -> impl Iterator<Item = &'a VaccineBatch> {
        self.batches
            .iter()
            .filter(move |b| b.vaccine_name == vaccine_name)
    }

    /// Inserts `batch` at its sorted position and returns that position.
    pub fn insert_sorted(&mut self, batch: VaccineBatch) -> Result<usize> {
        if let Some(capacity) = self.capacity.filter(|_| self.is_full()) {
            return Err(RegistryError::CapacityExceeded { capacity });
        }

        let key = (batch.expiration, batch.batch_id.as_str());
        let pos = self
            .batches
            .partition_point(|b| (b.expiration, b.batch_id.as_str()) <= key);
        self.batches.insert(pos, batch);
        Ok(pos)
    }

    pub fn remove_at(&mut self, index: usize) -> Option<VaccineBatch> {
        (index < self.batches.len()).then(|| self.batches.remove(index))
    }

    /// Takes a batch out of service and returns its applied dose count.
    /// An unused batch is dropped from the store; a used one keeps its place
    /// with no available doses left.
    pub fn retire(&mut self, batch_id: &str) -> Option<u32> {
        let index = self.find_by_id(batch_id)?;
        let applied = self.batches[index].applied_doses;
        if applied == 0 {
            self.remove_at(index);
        } else {
            self.batches[index].available_doses = 0;
        }
        Some(applied)
    }

    /// Earliest-expiring batch of `vaccine_name` that still has doses and has
    /// not expired by `as_of`. Equal expirations resolve to storage order.
    pub fn find_earliest_valid(&self, vaccine_name: &str, as_of: &Date) -> Option<usize> {
        self.batches
            .iter()
            .enumerate()
            .filter(|(_, b)| b.vaccine_name == vaccine_name && b.is_usable_on(as_of))
            .min_by_key(|(_, b)| b.expiration)
            .map(|(i, _)| i)
    }

    pub fn clear(&mut self) {
        self.batches.clear();
    }
}
