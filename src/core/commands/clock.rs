use super::{report, Outcome};
use crate::core::messages::MessageKind;
use crate::core::reporter::Reporter;
use crate::core::system::VaccinationSystem;
use crate::core::tokenizer::Tokenizer;
use crate::domain::Date;
use crate::utils::error::Result;
use std::io::Write;

/// `t [D-M-Y]`
pub fn advance_date<W: Write>(
    system: &mut VaccinationSystem,
    args: &str,
    reporter: &mut Reporter<W>,
) -> Result<()> {
    let result = advance(system, args);
    report(reporter, "advance date", result)
}

fn advance(system: &mut VaccinationSystem, args: &str) -> Outcome<Date> {
    let mut tokens = Tokenizer::new(args);
    if let Some(token) = tokens.next_word() {
        if !tokens.is_empty() {
            return Err(MessageKind::InvalidInput.into());
        }
        let date: Date = token.parse().map_err(|_| MessageKind::InvalidDate)?;
        if !system.advance_date(date) {
            return Err(MessageKind::InvalidDate.into());
        }
        tracing::debug!("System date set to {}", date);
    }
    Ok(system.current_date())
}
