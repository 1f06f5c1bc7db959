use std::fmt::{self, Write};
use termion::{
    color::{Fg, LightCyan, LightYellow},
    style::{Bold, Faint, Reset, Underline},
};

pub struct Plain;
pub struct Color;

/// The parts of the help text a style may decorate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Item {
    Usage,
    Head,
    Command,
    Value,
    Argument,
    Description,
}

/// Decorates help text. Decorations must not take up visible width; alignment is computed on
/// the undecorated text.
pub trait Style {
    fn begin(&self, item: Item, buffer: &mut String) -> fmt::Result;
    fn end(&self, item: Item, buffer: &mut String) -> fmt::Result;
}

impl Style for Plain {
    #[inline]
    fn begin(&self, _: Item, _: &mut String) -> fmt::Result {
        Ok(())
    }

    #[inline]
    fn end(&self, _: Item, _: &mut String) -> fmt::Result {
        Ok(())
    }
}

impl Style for Color {
    fn begin(&self, item: Item, buffer: &mut String) -> fmt::Result {
        match item {
            Item::Usage => write!(buffer, "{Underline}"),
            Item::Head => write!(buffer, "{Bold}"),
            Item::Command => write!(buffer, "{}", Fg(LightCyan)),
            Item::Value => write!(buffer, "{Faint}{}", Fg(LightCyan)),
            Item::Argument => write!(buffer, "{}", Fg(LightYellow)),
            Item::Description => Ok(()),
        }
    }

    fn end(&self, item: Item, buffer: &mut String) -> fmt::Result {
        match item {
            Item::Description => Ok(()),
            _ => write!(buffer, "{Reset}"),
        }
    }
}

impl<S: Style + ?Sized> Style for &S {
    #[inline]
    fn begin(&self, item: Item, buffer: &mut String) -> fmt::Result {
        S::begin(self, item, buffer)
    }

    #[inline]
    fn end(&self, item: Item, buffer: &mut String) -> fmt::Result {
        S::end(self, item, buffer)
    }
}

impl<S: Style + ?Sized> Style for Box<S> {
    #[inline]
    fn begin(&self, item: Item, buffer: &mut String) -> fmt::Result {
        S::begin(self, item, buffer)
    }

    #[inline]
    fn end(&self, item: Item, buffer: &mut String) -> fmt::Result {
        S::end(self, item, buffer)
    }
}

/// [`Color`] when standard output is a terminal, [`Plain`] otherwise.
pub fn detect() -> Box<dyn Style> {
    if termion::is_tty(&std::io::stdout()) {
        Box::new(Color)
    } else {
        Box::new(Plain)
    }
}
