use crate::core::messages::{MessageKind, Messages};
use crate::utils::error::Result;
use std::fmt::Display;
use std::io::Write;

/// A refused command: the message to print and, for lookups, what was looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub kind: MessageKind,
    pub subject: Option<String>,
}

impl Rejection {
    pub fn new(kind: MessageKind) -> Self {
        Self {
            kind,
            subject: None,
        }
    }

    /// Rendered as `subject: message`.
    pub fn about(subject: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            kind,
            subject: Some(subject.into()),
        }
    }
}

impl From<MessageKind> for Rejection {
    fn from(kind: MessageKind) -> Self {
        Rejection::new(kind)
    }
}

/// Writes response lines, rendering rejections through the message catalogue.
pub struct Reporter<W: Write> {
    out: W,
    messages: Messages,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, messages: Messages) -> Self {
        Self { out, messages }
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn line(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    pub fn reject(&mut self, rejection: &Rejection) -> Result<()> {
        let text = self.messages.text(rejection.kind);
        match &rejection.subject {
            Some(subject) => writeln!(self.out, "{}: {}", subject, text)?,
            None => writeln!(self.out, "{}", text)?,
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
