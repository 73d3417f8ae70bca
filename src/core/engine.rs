use crate::core::commands::{self, CommandKind, Flow};
use crate::core::messages::Messages;
use crate::core::reporter::Reporter;
use crate::core::system::VaccinationSystem;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub commands: usize,
    pub ignored: usize,
    pub quit: bool,
}

/// Reads one command per line and dispatches on its first character.
pub struct CommandEngine<W: Write> {
    system: VaccinationSystem,
    reporter: Reporter<W>,
}

impl<W: Write> CommandEngine<W> {
    pub fn new(system: VaccinationSystem, messages: Messages, out: W) -> Self {
        Self {
            system,
            reporter: Reporter::new(out, messages),
        }
    }

    pub fn system(&self) -> &VaccinationSystem {
        &self.system
    }

    /// Processes lines until `q` or end of input.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> Result<SessionSummary> {
        tracing::info!(
            "Vaccine registry ready (date {}, locale {:?})",
            self.system.current_date(),
            self.reporter.messages().locale()
        );

        let mut summary = SessionSummary::default();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                tracing::info!("End of input reached");
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            match self.execute_line(&line)? {
                Some(Flow::Quit) => {
                    summary.commands += 1;
                    summary.quit = true;
                    break;
                }
                Some(Flow::Continue) => summary.commands += 1,
                None => summary.ignored += 1,
            }
        }

        tracing::info!(
            "Session finished: {} commands, {} ignored lines",
            summary.commands,
            summary.ignored
        );
        Ok(summary)
    }

    /// Runs one protocol line. Returns `None` for lines with no known command.
    pub fn execute_line(&mut self, line: &str) -> Result<Option<Flow>> {
        let line = line.trim_end_matches(['\n', '\r']);
        let mut chars = line.chars();
        let Some(kind) = chars.next().and_then(CommandKind::from_char) else {
            if !line.is_empty() {
                tracing::debug!("Ignoring line: {:?}", line);
            }
            return Ok(None);
        };

        tracing::debug!("Command {:?}: {:?}", kind, chars.as_str());
        let flow = commands::execute(kind, &mut self.system, chars.as_str(), &mut self.reporter)?;
        self.reporter.flush()?;
        Ok(Some(flow))
    }

    pub fn into_output(self) -> W {
        self.reporter.into_inner()
    }
}
