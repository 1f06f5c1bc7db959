use core::fmt;
use std::borrow::Cow;

pub const SHORT: &str = "-";
pub const LONG: &str = "--";
pub const ASSIGN: char = '=';

/// A single command an option answers to, either `-c` or `--name`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Command {
    Short(char),
    Long(Cow<'static, str>),
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Short(short) => write!(f, "{SHORT}{short}"),
            Command::Long(long) => write!(f, "{LONG}{long}"),
        }
    }
}

impl From<char> for Command {
    fn from(short: char) -> Self {
        Command::Short(short)
    }
}

impl From<&'static str> for Command {
    fn from(long: &'static str) -> Self {
        Command::Long(Cow::Borrowed(long))
    }
}

impl From<String> for Command {
    fn from(long: String) -> Self {
        Command::Long(Cow::Owned(long))
    }
}

impl From<Cow<'static, str>> for Command {
    fn from(long: Cow<'static, str>) -> Self {
        Command::Long(long)
    }
}

/// Printable ascii, excluding space, `-` and delete.
pub(crate) fn is_valid_short(short: char) -> bool {
    short.is_ascii_graphic() && short != '-'
}

pub(crate) fn is_valid_long(long: &str) -> bool {
    !long.is_empty() && !long.starts_with('-') && !long.contains(ASSIGN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_validation() {
        assert!(is_valid_short('v'));
        assert!(is_valid_short('?'));
        assert!(is_valid_short('!'));
        assert!(!is_valid_short('-'));
        assert!(!is_valid_short(' '));
        assert!(!is_valid_short('\t'));
        assert!(!is_valid_short('\u{7f}'));
        assert!(!is_valid_short('é'));
    }

    #[test]
    fn long_validation() {
        assert!(is_valid_long("verbose"));
        assert!(is_valid_long("dry-run"));
        assert!(!is_valid_long("-verbose"));
        assert!(!is_valid_long("out=file"));
        assert!(!is_valid_long(""));
    }

    #[test]
    fn display() {
        assert_eq!(Command::from('v').to_string(), "-v");
        assert_eq!(Command::from("out").to_string(), "--out");
    }
}
