use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    UnterminatedQuote,
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::UnterminatedQuote => write!(f, "missing closing quote"),
        }
    }
}

impl std::error::Error for TokenError {}

/// Splits a command's argument text into whitespace-separated words, where a
/// name argument may instead be a `"quoted span"` containing spaces.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    rest: &'a str,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            rest: input.trim_start(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rest.is_empty()
    }

    /// Unconsumed text with surrounding whitespace removed.
    pub fn remainder(&self) -> &'a str {
        self.rest.trim_end()
    }

    pub fn next_word(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let end = self.rest.find(char::is_whitespace).unwrap_or(self.rest.len());
        let (word, rest) = self.rest.split_at(end);
        self.rest = rest.trim_start();
        Some(word)
    }

    /// Reads a name that is either a quoted span or a single word. Quotes are
    /// stripped from the returned text.
    pub fn next_name(&mut self) -> Result<Option<&'a str>, TokenError> {
        match self.rest.strip_prefix('"') {
            Some(quoted) => {
                let close = quoted.find('"').ok_or(TokenError::UnterminatedQuote)?;
                let name = &quoted[..close];
                self.rest = quoted[close + 1..].trim_start();
                Ok(Some(name))
            }
            None => Ok(self.next_word()),
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_word()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words() {
        let words: Vec<_> = Tokenizer::new("  BCG  FLU\tMMR ").collect();
        assert_eq!(words, vec!["BCG", "FLU", "MMR"]);
        assert_eq!(Tokenizer::new("   ").next_word(), None);
    }

    #[test]
    fn test_quoted_name_keeps_spaces() {
        let mut tok = Tokenizer::new(r#" "Maria da Silva" BCG"#);
        let name = tok.next_name().unwrap().unwrap();
        assert_eq!(name, "Maria da Silva");
        assert_eq!(tok.next_word(), Some("BCG"));
        assert!(tok.is_empty());
    }

    #[test]
    fn test_bare_name_stops_at_whitespace() {
        let mut tok = Tokenizer::new("Joao BCG");
        assert_eq!(tok.next_name().unwrap(), Some("Joao"));
        assert_eq!(tok.remainder(), "BCG");
    }

    #[test]
    fn test_unterminated_quote() {
        let mut tok = Tokenizer::new(r#""Maria BCG"#);
        assert_eq!(tok.next_name(), Err(TokenError::UnterminatedQuote));
    }

    #[test]
    fn test_empty_quotes_and_missing_name() {
        let mut tok = Tokenizer::new(r#""" BCG"#);
        assert_eq!(tok.next_name().unwrap(), Some(""));
        assert_eq!(Tokenizer::new("").next_name(), Ok(None));
    }

    #[test]
    fn test_remainder_is_trimmed() {
        let mut tok = Tokenizer::new("A1 1-1-2026 10  Vacina da gripe  ");
        tok.next_word();
        tok.next_word();
        tok.next_word();
        assert_eq!(tok.remainder(), "Vacina da gripe");
    }
}
