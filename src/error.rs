use crate::command::{Command, SHORT};
use core::fmt;
use std::error;

/// The first usage error met while parsing. Each variant carries the command as it was typed.
#[derive(Clone, PartialEq, Eq)]
pub enum Error {
    InvalidOption(Command),
    UnexpectedValue(Command),
    MissingValue(Command),
    ClusteredValue(char),
}

/// Outcome of the most recent parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    ParseSuccessful,
    InvalidOption,
    ValuePassedToOptionThatDoesNotTakeValue,
    NoValueWasPassedToOption,
    OptionsThatTakesValueNeedsToBeSetSeparately,
}

impl Error {
    pub const fn status(&self) -> Status {
        match self {
            Error::InvalidOption(_) => Status::InvalidOption,
            Error::UnexpectedValue(_) => Status::ValuePassedToOptionThatDoesNotTakeValue,
            Error::MissingValue(_) => Status::NoValueWasPassedToOption,
            Error::ClusteredValue(_) => Status::OptionsThatTakesValueNeedsToBeSetSeparately,
        }
    }

    pub fn command(&self) -> Command {
        match self {
            Error::InvalidOption(command)
            | Error::UnexpectedValue(command)
            | Error::MissingValue(command) => command.clone(),
            Error::ClusteredValue(short) => Command::Short(*short),
        }
    }
}

impl Status {
    pub const fn is_success(self) -> bool {
        matches!(self, Status::ParseSuccessful)
    }
}

impl<T> From<&Result<T, Error>> for Status {
    fn from(result: &Result<T, Error>) -> Self {
        match result {
            Ok(_) => Status::ParseSuccessful,
            Err(error) => error.status(),
        }
    }
}

impl error::Error for Error {}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidOption(command) => write!(f, "Option {command} is invalid"),
            Error::UnexpectedValue(command) => {
                write!(f, "Option {command} received a value but it doesn't take any")
            }
            Error::MissingValue(command) => {
                write!(f, "Option {command} takes a value but none was passed.")
            }
            Error::ClusteredValue(short) => write!(
                f,
                "Options that takes a value needs to be set separately. Error with option: {SHORT}{short}"
            ),
        }
    }
}
