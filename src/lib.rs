#![doc = include_str!("../README.md")]

mod command;
mod descriptor;
mod error;
mod help;
mod parse;
mod registry;
pub mod style;
mod token;

pub use crate::{
    command::Command,
    descriptor::{Descriptor, Id, Kind},
    error::{Error, Status},
    parse::Parser,
    registry::{Handle, Positional, Registry},
    style::Style,
    token::{Cursor, Token},
};

/*
    TODO:
    - Wrap long descriptions at the terminal width (`termion::terminal_size`).
    - Accept `--` as the end of options; today it is collected as a positional argument.
*/

/// Fills the application name, version and description from the calling crate's manifest.
///
/// ```
/// let parser = argus::Parser::new(["tool"]).pipe(argus::cargo!());
/// assert_eq!(parser.version_text(), format!("argus {}", env!("CARGO_PKG_VERSION")));
/// ```
#[macro_export]
macro_rules! cargo {
    () => {
        |parser: $crate::Parser| {
            parser
                .name(env!("CARGO_PKG_NAME").trim())
                .version(env!("CARGO_PKG_VERSION").trim())
                .description(env!("CARGO_PKG_DESCRIPTION").trim())
        }
    };
}
