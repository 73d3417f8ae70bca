//! One handler per protocol command. Each handler validates its arguments in
//! a fixed order, prints exactly one rejection on the first failure and leaves
//! the system untouched in that case.

pub mod batches;
pub mod clock;
pub mod doses;
pub mod records;

use crate::core::reporter::{Rejection, Reporter};
use crate::core::system::VaccinationSystem;
use crate::utils::error::Result;
use std::io::Write;

pub(crate) type Outcome<T> = std::result::Result<T, Rejection>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    AddBatch,
    ListBatches,
    ApplyDose,
    RetireBatch,
    DeleteRecords,
    ListRecords,
    AdvanceDate,
    Quit,
}

impl CommandKind {
    pub fn from_char(c: char) -> Option<Self> {
        let kind = match c {
            'c' => CommandKind::AddBatch,
            'l' => CommandKind::ListBatches,
            'a' => CommandKind::ApplyDose,
            'r' => CommandKind::RetireBatch,
            'd' => CommandKind::DeleteRecords,
            'u' => CommandKind::ListRecords,
            't' => CommandKind::AdvanceDate,
            'q' => CommandKind::Quit,
            _ => return None,
        };
        Some(kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn execute<W: Write>(
    kind: CommandKind,
    system: &mut VaccinationSystem,
    args: &str,
    reporter: &mut Reporter<W>,
) -> Result<Flow> {
    match kind {
        CommandKind::AddBatch => batches::add_batch(system, args, reporter)?,
        CommandKind::ListBatches => batches::list_batches(system, args, reporter)?,
        CommandKind::ApplyDose => doses::apply_dose(system, args, reporter)?,
        CommandKind::RetireBatch => batches::retire_batch(system, args, reporter)?,
        CommandKind::DeleteRecords => records::delete_records(system, args, reporter)?,
        CommandKind::ListRecords => records::list_records(system, args, reporter)?,
        CommandKind::AdvanceDate => clock::advance_date(system, args, reporter)?,
        CommandKind::Quit => {
            let (batches, records) = system.shutdown();
            tracing::debug!("Released {} batches and {} inoculation records", batches, records);
            return Ok(Flow::Quit);
        }
    }
    Ok(Flow::Continue)
}

/// Prints `result` on success, or its rejection.
pub(crate) fn report<W: Write, T: std::fmt::Display>(
    reporter: &mut Reporter<W>,
    command: &str,
    result: Outcome<T>,
) -> Result<()> {
    match result {
        Ok(value) => reporter.line(value),
        Err(rejection) => {
            tracing::debug!("{} rejected: {:?}", command, rejection);
            reporter.reject(&rejection)
        }
    }
}
