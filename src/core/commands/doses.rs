use super::{report, Outcome};
use crate::core::messages::MessageKind;
use crate::core::reporter::Reporter;
use crate::core::system::VaccinationSystem;
use crate::core::tokenizer::Tokenizer;
use crate::domain::InoculationRecord;
use crate::utils::error::Result;
use std::io::Write;

/// `a <patient|"patient name"> <vaccine>`
pub fn apply_dose<W: Write>(
    system: &mut VaccinationSystem,
    args: &str,
    reporter: &mut Reporter<W>,
) -> Result<()> {
    let result = administer(system, args);
    report(reporter, "apply dose", result)
}

fn administer(system: &mut VaccinationSystem, args: &str) -> Outcome<String> {
    let mut tokens = Tokenizer::new(args);
    let patient = tokens
        .next_name()
        .map_err(|_| MessageKind::InvalidInput)?
        .ok_or(MessageKind::InvalidInput)?;
    let vaccine = tokens.next_word().ok_or(MessageKind::InvalidInput)?;
    if !tokens.is_empty() {
        return Err(MessageKind::InvalidInput.into());
    }

    let today = system.current_date();
    if system
        .inoculations
        .is_already_vaccinated(patient, vaccine, &today)
    {
        return Err(MessageKind::AlreadyVaccinated.into());
    }

    let batch = system
        .batches
        .find_earliest_valid(vaccine, &today)
        .and_then(|index| system.batches.get_mut(index))
        .ok_or(MessageKind::NoStock)?;
    batch.apply_dose();
    let batch_id = batch.batch_id.clone();

    system.inoculations.insert_sorted(InoculationRecord {
        patient_name: patient.to_string(),
        batch_id: batch_id.clone(),
        vaccine_name: vaccine.to_string(),
        application_date: today,
    });
    tracing::debug!("{} received {} from batch {} on {}", patient, vaccine, batch_id, today);

    Ok(batch_id)
}
