use super::Outcome;
use crate::core::inoculation_log::{RecordFilter, Removal};
use crate::core::messages::MessageKind;
use crate::core::reporter::{Rejection, Reporter};
use crate::core::system::VaccinationSystem;
use crate::core::tokenizer::Tokenizer;
use crate::utils::error::Result;
use std::io::Write;

/// `d <patient|"patient name"> [D-M-Y [batch]]`
pub fn delete_records<W: Write>(
    system: &mut VaccinationSystem,
    args: &str,
    reporter: &mut Reporter<W>,
) -> Result<()> {
    match delete(system, args) {
        Ok((patient, removal)) => {
            tracing::debug!("Removed {} records of {}", removal.removed, patient);
            reporter.line(removal.removed)?;
            if !removal.patient_known {
                reporter.reject(&Rejection::about(patient, MessageKind::NoSuchUser))?;
            }
            Ok(())
        }
        Err(rejection) => {
            tracing::debug!("delete records rejected: {:?}", rejection);
            reporter.reject(&rejection)
        }
    }
}

fn delete<'a>(system: &mut VaccinationSystem, args: &'a str) -> Outcome<(&'a str, Removal)> {
    let mut tokens = Tokenizer::new(args);
    let patient = tokens
        .next_name()
        .map_err(|_| MessageKind::InvalidInput)?
        .ok_or(MessageKind::InvalidInput)?;
    // A batch filter is only reachable after a date filter.
    let date = tokens.next_word();
    let batch_id = tokens.next_word();
    if !tokens.is_empty() {
        return Err(MessageKind::InvalidInput.into());
    }

    let mut filter = RecordFilter::default();
    if let Some(date) = date {
        filter.date = Some(date.parse().map_err(|_| MessageKind::InvalidDate)?);
    }
    if let Some(batch_id) = batch_id {
        if !system.batches.exists(batch_id) {
            return Err(Rejection::about(batch_id, MessageKind::NoSuchBatch));
        }
        filter.batch_id = Some(batch_id.to_string());
    }

    Ok((patient, system.inoculations.remove_matching(patient, &filter)))
}

/// `u [patient|"patient name"]`
pub fn list_records<W: Write>(
    system: &VaccinationSystem,
    args: &str,
    reporter: &mut Reporter<W>,
) -> Result<()> {
    let mut tokens = Tokenizer::new(args);
    let patient = match tokens.next_name() {
        Ok(patient) if tokens.is_empty() => patient,
        _ => return reporter.reject(&MessageKind::InvalidInput.into()),
    };

    let Some(patient) = patient else {
        tracing::debug!("Listing all {} inoculation records", system.inoculations.len());
        for record in system.inoculations.iter() {
            reporter.line(record)?;
        }
        return Ok(());
    };

    let mut found = false;
    for record in system.inoculations.find_all_for_patient(patient) {
        reporter.line(record)?;
        found = true;
    }
    if !found {
        reporter.reject(&Rejection::about(patient, MessageKind::NoSuchUser))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::messages::Messages;
    use crate::domain::{Date, InoculationRecord, VaccineBatch};

    fn seeded() -> VaccinationSystem {
        let mut system = VaccinationSystem::default();
        for id in ["A1", "B2"] {
            let batch = VaccineBatch::new(
                id.to_string(),
                "BCG".to_string(),
                Date::new(1, 1, 2026).unwrap(),
                10,
            );
            system.batches.insert_sorted(batch).unwrap();
        }
        let entries = [
            ("Ana", "A1", 1),
            ("Ana", "B2", 2),
            ("Ana Rita", "A1", 2),
            ("Rui", "B2", 1),
        ];
        for (patient, batch, day) in entries {
            system.inoculations.insert_sorted(InoculationRecord {
                patient_name: patient.to_string(),
                batch_id: batch.to_string(),
                vaccine_name: "BCG".to_string(),
                application_date: Date::new(day, 1, 2025).unwrap(),
            });
        }
        system
    }

    fn delete_out(system: &mut VaccinationSystem, args: &str) -> String {
        let mut reporter = Reporter::new(Vec::new(), Messages::default());
        delete_records(system, args, &mut reporter).unwrap();
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    fn list_out(system: &VaccinationSystem, args: &str) -> String {
        let mut reporter = Reporter::new(Vec::new(), Messages::default());
        list_records(system, args, &mut reporter).unwrap();
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_list_all_and_by_patient() {
        let system = seeded();
        assert_eq!(
            list_out(&system, ""),
            "Rui B2 01-01-2025\nAna A1 01-01-2025\nAna Rita A1 02-01-2025\nAna B2 02-01-2025\n"
        );
        assert_eq!(list_out(&system, " Ana"), "Ana A1 01-01-2025\nAna B2 02-01-2025\n");
        assert_eq!(list_out(&system, r#" "Ana Rita""#), "Ana Rita A1 02-01-2025\n");
        assert_eq!(list_out(&system, " Eva"), "Eva: no such user\n");
        assert_eq!(list_out(&system, r#" "Ana"#), "invalid input\n");
    }

    #[test]
    fn test_delete_with_date_and_batch() {
        let mut system = seeded();
        assert_eq!(delete_out(&mut system, " Ana 02-01-2025 A1"), "0\n");
        assert_eq!(delete_out(&mut system, " Ana 2-1-2025 B2"), "1\n");
        assert_eq!(delete_out(&mut system, " Ana"), "1\n");
        assert_eq!(delete_out(&mut system, " Ana"), "0\nAna: no such user\n");
        assert_eq!(system.inoculations.len(), 2);
    }

    #[test]
    fn test_delete_rejections_leave_log_untouched() {
        let mut system = seeded();
        assert_eq!(delete_out(&mut system, " Ana 31-02-2025"), "invalid date\n");
        assert_eq!(delete_out(&mut system, " Ana A1"), "invalid date\n");
        assert_eq!(delete_out(&mut system, " Ana 01-01-2025 FF"), "FF: no such batch\n");
        assert_eq!(delete_out(&mut system, " Ana 01-01-2025 A1 B2"), "invalid input\n");
        assert_eq!(delete_out(&mut system, ""), "invalid input\n");
        assert_eq!(delete_out(&mut system, r#" "Ana 01-01-2025"#), "invalid input\n");
        assert_eq!(system.inoculations.len(), 4);
    }

    #[test]
    fn test_delete_unknown_patient_still_validates_filters() {
        let mut system = seeded();
        assert_eq!(delete_out(&mut system, " Eva 01-01-2025"), "0\nEva: no such user\n");
    }
}
