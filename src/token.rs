use crate::command::{ASSIGN, LONG, SHORT};
use std::borrow::Cow;

/// How a raw argument reads, with the leading dashes stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// `--name` or `--name=value`.
    Long(&'a str),
    /// `-abc`, one or more short commands.
    Short(&'a str),
    Positional(&'a str),
}

impl<'a> Token<'a> {
    pub fn classify(argument: &'a str) -> Self {
        if argument.len() > LONG.len() && argument.starts_with(LONG) {
            Token::Long(&argument[LONG.len()..])
        } else if argument.len() > SHORT.len()
            && argument.starts_with(SHORT)
            && !argument.starts_with(LONG)
        {
            Token::Short(&argument[SHORT.len()..])
        } else {
            Token::Positional(argument)
        }
    }

    pub const fn is_command(&self) -> bool {
        !matches!(self, Token::Positional(_))
    }

    /// Splits `name=value` at the first `=`.
    pub fn split(long: &'a str) -> (&'a str, Option<&'a str>) {
        match long.split_once(ASSIGN) {
            Some((name, value)) => (name, Some(value)),
            None => (long, None),
        }
    }
}

/// Walks the arguments left to right. Options that take a value pull it through the same
/// cursor, so the scan never revisits a consumed argument.
pub struct Cursor<'a> {
    arguments: &'a [Cow<'static, str>],
    index: usize,
}

impl<'a> Cursor<'a> {
    pub const fn new(arguments: &'a [Cow<'static, str>]) -> Self {
        Self {
            arguments,
            index: 0,
        }
    }

    pub fn peek(&self) -> Option<&'a str> {
        self.arguments.get(self.index).map(|argument| &**argument)
    }

    /// Consumes the next argument if it can serve as a value, that is, if it does not itself
    /// read as a command.
    pub fn value(&mut self) -> Option<&'a str> {
        let argument = self.peek()?;
        if Token::classify(argument).is_command() {
            return None;
        }
        self.index += 1;
        Some(argument)
    }

    pub const fn position(&self) -> usize {
        self.index
    }
}

impl<'a> Iterator for Cursor<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let argument = self.peek()?;
        self.index += 1;
        Some(argument)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies() {
        assert_eq!(Token::classify("--out"), Token::Long("out"));
        assert_eq!(Token::classify("--out=x"), Token::Long("out=x"));
        assert_eq!(Token::classify("---x"), Token::Long("-x"));
        assert_eq!(Token::classify("-v"), Token::Short("v"));
        assert_eq!(Token::classify("-abc"), Token::Short("abc"));
        assert_eq!(Token::classify("--"), Token::Positional("--"));
        assert_eq!(Token::classify("-"), Token::Positional("-"));
        assert_eq!(Token::classify(""), Token::Positional(""));
        assert_eq!(Token::classify("file.txt"), Token::Positional("file.txt"));
    }

    #[test]
    fn splits_at_first_assign() {
        assert_eq!(Token::split("out"), ("out", None));
        assert_eq!(Token::split("out="), ("out", Some("")));
        assert_eq!(Token::split("out=a=b"), ("out", Some("a=b")));
    }

    #[test]
    fn cursor_refuses_commands_as_values() {
        let arguments = ["-o", "-v", "file", "--x"].map(Cow::Borrowed);
        let mut cursor = Cursor::new(&arguments);
        assert_eq!(cursor.next(), Some("-o"));
        assert_eq!(cursor.value(), None);
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.next(), Some("-v"));
        assert_eq!(cursor.value(), Some("file"));
        assert_eq!(cursor.value(), None);
        assert_eq!(cursor.next(), Some("--x"));
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.value(), None);
    }
}
