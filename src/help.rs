use crate::{
    command::{LONG, SHORT},
    descriptor::Descriptor,
    registry::Registry,
    style::{Item, Style},
};
use std::{
    fmt::{self, Write},
    mem::{replace, take},
};

const INDENT: &str = "   ";
const GAP: &str = "  ";
const VALUE: &str = "<value>";
const USAGE: &str = "Usage: ";
const OPTIONS: &str = " [options]";
const ARGUMENTS: &str = "Arguments:";
const HELP: &str = "Getting help:";
const NORMAL: &str = "Options:";

struct Helper<'a> {
    buffer: &'a mut String,
    style: &'a dyn Style,
}

impl Helper<'_> {
    fn space(&mut self, width: usize) -> fmt::Result {
        for _ in 0..width {
            write!(self.buffer, " ")?;
        }
        Ok(())
    }

    fn styled(&mut self, item: Item, value: impl fmt::Display) -> fmt::Result {
        self.style.begin(item, self.buffer)?;
        write!(self.buffer, "{value}")?;
        self.style.end(item, self.buffer)
    }

    fn head(&mut self, head: &str) -> fmt::Result {
        writeln!(self.buffer)?;
        self.styled(Item::Head, head)?;
        writeln!(self.buffer)
    }

    fn usage(&mut self, executable: &str, registry: &Registry) -> fmt::Result {
        self.style.begin(Item::Usage, self.buffer)?;
        write!(self.buffer, "{USAGE}{executable}")?;
        if !registry.is_empty() {
            write!(self.buffer, "{OPTIONS}")?;
        }
        for positional in registry.positionals() {
            write!(self.buffer, " {}", positional.syntax())?;
        }
        self.style.end(Item::Usage, self.buffer)?;
        writeln!(self.buffer)
    }

    fn description(&mut self, description: &str) -> fmt::Result {
        if description.is_empty() {
            return Ok(());
        }
        writeln!(self.buffer)?;
        self.styled(Item::Description, description)?;
        writeln!(self.buffer)
    }

    fn positionals(&mut self, registry: &Registry) -> fmt::Result {
        let positionals = registry.positionals();
        if positionals.is_empty() {
            return Ok(());
        }
        let width = positionals
            .iter()
            .map(|positional| positional.syntax().chars().count())
            .max()
            .unwrap_or(0);
        self.head(ARGUMENTS)?;
        for positional in positionals {
            let syntax = positional.syntax();
            write!(self.buffer, "{INDENT}")?;
            self.styled(Item::Argument, &syntax)?;
            self.space(width.saturating_sub(syntax.chars().count()))?;
            write!(self.buffer, "{GAP}")?;
            self.styled(Item::Description, &positional.description)?;
            writeln!(self.buffer)?;
        }
        Ok(())
    }

    fn options(&mut self, registry: &Registry) -> fmt::Result {
        let (help, normal): (Vec<_>, Vec<_>) = registry
            .descriptors()
            .partition(|descriptor| descriptor.kind().is_help());
        self.group(HELP, &help)?;
        self.group(NORMAL, &normal)
    }

    /// Lines are sorted on their undecorated text so that every style lists options in the
    /// same order.
    fn group(&mut self, head: &str, descriptors: &[&Descriptor]) -> fmt::Result {
        if descriptors.is_empty() {
            return Ok(());
        }
        let width = descriptors
            .iter()
            .map(|descriptor| commands(descriptor).chars().count())
            .max()
            .unwrap_or(0);
        let mut lines = Vec::with_capacity(descriptors.len());
        for descriptor in descriptors {
            let plain = commands(descriptor);
            let key = format!(
                "{INDENT}{plain:<width$}{GAP}{}",
                descriptor.get_description()
            );
            let line = self.scope(|helper| helper.option(descriptor, width))?;
            lines.push((key, line));
        }
        lines.sort();

        self.head(head)?;
        for (_, line) in lines {
            writeln!(self.buffer, "{line}")?;
        }
        Ok(())
    }

    fn option(&mut self, descriptor: &Descriptor, width: usize) -> fmt::Result {
        write!(self.buffer, "{INDENT}")?;
        for short in descriptor.shorts() {
            self.styled(Item::Command, format_args!("{SHORT}{short}"))?;
            write!(self.buffer, " ")?;
        }
        for long in descriptor.longs() {
            self.styled(Item::Command, format_args!("{LONG}{long}"))?;
            write!(self.buffer, " ")?;
        }
        if descriptor.kind().takes_value() {
            self.styled(Item::Value, VALUE)?;
            write!(self.buffer, " ")?;
        }
        self.space(width.saturating_sub(commands(descriptor).chars().count()))?;
        write!(self.buffer, "{GAP}")?;
        self.styled(Item::Description, descriptor.get_description())
    }

    fn scope(
        &mut self,
        scope: impl FnOnce(&mut Helper) -> fmt::Result,
    ) -> Result<String, fmt::Error> {
        let outer = take(self.buffer);
        let result = scope(self);
        let inner = replace(self.buffer, outer);
        result.map(|_| inner)
    }
}

/// The undecorated command column of an option, e.g. `-o --out <value> `.
fn commands(descriptor: &Descriptor) -> String {
    let mut buffer = String::new();
    for short in descriptor.shorts() {
        buffer.push_str(SHORT);
        buffer.push(*short);
        buffer.push(' ');
    }
    for long in descriptor.longs() {
        buffer.push_str(LONG);
        buffer.push_str(long);
        buffer.push(' ');
    }
    if descriptor.kind().takes_value() {
        buffer.push_str(VALUE);
        buffer.push(' ');
    }
    buffer
}

pub(crate) fn help(
    executable: &str,
    description: &str,
    registry: &Registry,
    style: &dyn Style,
) -> Result<String, fmt::Error> {
    let mut buffer = String::new();
    let mut helper = Helper {
        buffer: &mut buffer,
        style,
    };
    helper.usage(executable, registry)?;
    helper.description(description)?;
    helper.positionals(registry)?;
    helper.options(registry)?;
    Ok(buffer)
}

pub(crate) fn version(name: &str, version: &str) -> String {
    format!("{name} {version}")
}
