use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Pt,
}

impl Locale {
    /// Maps the positional language argument. Only `pt` switches language.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "pt" {
            Locale::Pt
        } else {
            Locale::En
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    InvalidInput,
    TooManyVaccines,
    InvalidBatch,
    DuplicateBatch,
    InvalidName,
    InvalidQuantity,
    InvalidDate,
    NoSuchVaccine,
    NoStock,
    AlreadyVaccinated,
    NoSuchBatch,
    NoSuchUser,
}

impl MessageKind {
    pub const ALL: [MessageKind; 12] = [
        MessageKind::InvalidInput,
        MessageKind::TooManyVaccines,
        MessageKind::InvalidBatch,
        MessageKind::DuplicateBatch,
        MessageKind::InvalidName,
        MessageKind::InvalidQuantity,
        MessageKind::InvalidDate,
        MessageKind::NoSuchVaccine,
        MessageKind::NoStock,
        MessageKind::AlreadyVaccinated,
        MessageKind::NoSuchBatch,
        MessageKind::NoSuchUser,
    ];
}

/// Message catalogue for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn text(&self, kind: MessageKind) -> &'static str {
        use MessageKind::*;
        match (kind, self.locale) {
            (InvalidInput, Locale::En) => "invalid input",
            (InvalidInput, Locale::Pt) => "entrada inválida",
            (TooManyVaccines, Locale::En) => "too many vaccines",
            (TooManyVaccines, Locale::Pt) => "demasiadas vacinas",
            (InvalidBatch, Locale::En) => "invalid batch",
            (InvalidBatch, Locale::Pt) => "lote inválido",
            (DuplicateBatch, Locale::En) => "duplicate batch number",
            (DuplicateBatch, Locale::Pt) => "número de lote duplicado",
            (InvalidName, Locale::En) => "invalid name",
            (InvalidName, Locale::Pt) => "nome inválido",
            (InvalidQuantity, Locale::En) => "invalid quantity",
            (InvalidQuantity, Locale::Pt) => "quantidade inválida",
            (InvalidDate, Locale::En) => "invalid date",
            (InvalidDate, Locale::Pt) => "data inválida",
            (NoSuchVaccine, Locale::En) => "no such vaccine",
            (NoSuchVaccine, Locale::Pt) => "vacina inexistente",
            (NoStock, Locale::En) => "no stock",
            (NoStock, Locale::Pt) => "esgotado",
            (AlreadyVaccinated, Locale::En) => "already vaccinated",
            (AlreadyVaccinated, Locale::Pt) => "já vacinado",
            (NoSuchBatch, Locale::En) => "no such batch",
            (NoSuchBatch, Locale::Pt) => "lote inexistente",
            (NoSuchUser, Locale::En) => "no such user",
            (NoSuchUser, Locale::Pt) => "utente inexistente",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_arg_only_pt_switches() {
        assert_eq!(Locale::from_arg("pt"), Locale::Pt);
        assert_eq!(Locale::from_arg("en"), Locale::En);
        assert_eq!(Locale::from_arg("PT"), Locale::En);
    }

    #[test]
    fn test_every_kind_differs_between_locales() {
        let en = Messages::new(Locale::En);
        let pt = Messages::new(Locale::Pt);
        for kind in MessageKind::ALL {
            assert_ne!(en.text(kind), pt.text(kind), "{:?}", kind);
        }
    }

    #[test]
    fn test_catalogue_entries() {
        assert_eq!(Messages::default().text(MessageKind::NoStock), "no stock");
        assert_eq!(
            Messages::new(Locale::Pt).text(MessageKind::NoSuchUser),
            "utente inexistente"
        );
    }
}
