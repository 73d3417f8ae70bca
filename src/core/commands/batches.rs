use super::{report, Outcome};
use crate::core::messages::MessageKind;
use crate::core::reporter::{Rejection, Reporter};
use crate::core::system::VaccinationSystem;
use crate::core::tokenizer::Tokenizer;
use crate::domain::{Date, VaccineBatch};
use crate::utils::error::Result;
use crate::utils::validation::{is_valid_batch_id, is_valid_vaccine_name};
use std::io::Write;

/// `c <batch> <D-M-Y> <doses> <name>`
pub fn add_batch<W: Write>(
    system: &mut VaccinationSystem,
    args: &str,
    reporter: &mut Reporter<W>,
) -> Result<()> {
    let result = register_batch(system, args);
    if let Ok(batch_id) = &result {
        tracing::debug!("Batch {} added ({} in store)", batch_id, system.batches.len());
    }
    report(reporter, "add batch", result)
}

fn register_batch(system: &mut VaccinationSystem, args: &str) -> Outcome<String> {
    if system.batches.is_full() {
        return Err(MessageKind::TooManyVaccines.into());
    }

    let mut tokens = Tokenizer::new(args);
    let batch_id = tokens.next_word().ok_or(MessageKind::InvalidInput)?;
    if system.batches.exists(batch_id) {
        return Err(MessageKind::DuplicateBatch.into());
    }

    let (Some(date), Some(doses)) = (tokens.next_word(), tokens.next_word()) else {
        return Err(MessageKind::InvalidInput.into());
    };
    // The name runs to the end of the line so stray spaces fail name validation.
    let name = tokens.remainder();
    if name.is_empty() {
        return Err(MessageKind::InvalidInput.into());
    }

    if !is_valid_batch_id(batch_id) {
        return Err(MessageKind::InvalidBatch.into());
    }
    if !is_valid_vaccine_name(name) {
        return Err(MessageKind::InvalidName.into());
    }

    let expiration: Date = date.parse().map_err(|_| MessageKind::InvalidDate)?;
    if !expiration.is_not_before(&system.current_date()) {
        return Err(MessageKind::InvalidDate.into());
    }

    let doses = doses
        .parse::<i64>()
        .ok()
        .filter(|&n| n > 0)
        .and_then(|n| u32::try_from(n).ok())
        .ok_or(MessageKind::InvalidQuantity)?;

    let batch = VaccineBatch::new(batch_id.to_string(), name.to_string(), expiration, doses);
    system
        .batches
        .insert_sorted(batch)
        .map_err(|_| MessageKind::TooManyVaccines)?;

    Ok(batch_id.to_string())
}

/// `l [name ...]`
pub fn list_batches<W: Write>(
    system: &VaccinationSystem,
    args: &str,
    reporter: &mut Reporter<W>,
) -> Result<()> {
    let names: Vec<&str> = Tokenizer::new(args).collect();

    if names.is_empty() {
        tracing::debug!("Listing all {} batches", system.batches.len());
        for batch in system.batches.iter() {
            reporter.line(batch)?;
        }
        return Ok(());
    }

    for name in names {
        let mut found = false;
        for batch in system.batches.named(name) {
            reporter.line(batch)?;
            found = true;
        }
        if !found {
            reporter.reject(&Rejection::about(name, MessageKind::NoSuchVaccine))?;
        }
    }
    Ok(())
}

/// `r <batch>`
pub fn retire_batch<W: Write>(
    system: &mut VaccinationSystem,
    args: &str,
    reporter: &mut Reporter<W>,
) -> Result<()> {
    let result = retire(system, args);
    report(reporter, "retire batch", result)
}

fn retire(system: &mut VaccinationSystem, args: &str) -> Outcome<u32> {
    let mut tokens = Tokenizer::new(args);
    let batch_id = tokens.next_word().ok_or(MessageKind::InvalidInput)?;
    if !tokens.is_empty() {
        return Err(MessageKind::InvalidInput.into());
    }

    let applied = system
        .batches
        .retire(batch_id)
        .ok_or_else(|| Rejection::about(batch_id, MessageKind::NoSuchBatch))?;

    if applied == 0 {
        tracing::debug!("Batch {} unused, removed", batch_id);
    } else {
        tracing::debug!("Batch {} has {} applied doses, stock cleared", batch_id, applied);
    }
    Ok(applied)
}
