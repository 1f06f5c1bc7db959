use crate::{
    command::Command,
    descriptor::Descriptor,
    error::{Error, Status},
    help,
    registry::{Handle, Registry},
    style::{Plain, Style},
    token::{Cursor, Token},
};
use std::borrow::Cow;
use tracing::{debug, trace};

/// Owns the argument vector, the registry and the outcome of the last parse.
#[derive(Debug)]
pub struct Parser {
    arguments: Vec<Cow<'static, str>>,
    executable: String,
    name: Cow<'static, str>,
    version: Cow<'static, str>,
    description: Cow<'static, str>,
    registry: Registry,
    positionals: Vec<String>,
    error: Option<Error>,
    text: String,
}

impl Parser {
    /// The first argument is the executable path, as in [`std::env::args`].
    pub fn new<A: Into<Cow<'static, str>>>(arguments: impl IntoIterator<Item = A>) -> Self {
        let mut parser = Self {
            arguments: Vec::new(),
            executable: String::new(),
            name: Cow::Borrowed(""),
            version: Cow::Borrowed(""),
            description: Cow::Borrowed(""),
            registry: Registry::new(),
            positionals: Vec::new(),
            error: None,
            text: String::new(),
        };
        parser.set_arguments(arguments);
        parser
    }

    pub fn from_env() -> Self {
        Self::new(std::env::args())
    }

    pub fn name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.set_name(name);
        self
    }

    pub fn version(mut self, version: impl Into<Cow<'static, str>>) -> Self {
        self.set_version(version);
        self
    }

    pub fn description(mut self, description: impl Into<Cow<'static, str>>) -> Self {
        self.set_description(description);
        self
    }

    pub fn pipe<F: FnOnce(Self) -> Self>(self, pipe: F) -> Self {
        pipe(self)
    }

    pub fn set_info(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        version: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
    ) {
        self.set_name(name);
        self.set_version(version);
        self.set_description(description);
    }

    pub fn set_name(&mut self, name: impl Into<Cow<'static, str>>) {
        self.name = name.into();
    }

    pub fn set_version(&mut self, version: impl Into<Cow<'static, str>>) {
        self.version = version.into();
    }

    pub fn set_description(&mut self, description: impl Into<Cow<'static, str>>) {
        self.description = description.into();
    }

    /// Replaces the argument vector. The executable name is derived again from the first item.
    pub fn set_arguments<A: Into<Cow<'static, str>>>(
        &mut self,
        arguments: impl IntoIterator<Item = A>,
    ) {
        self.arguments = arguments.into_iter().map(Into::into).collect();
        self.executable = self
            .arguments
            .first()
            .map(|path| executable(path).to_owned())
            .unwrap_or_default();
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }

    pub fn arguments(&self) -> &[Cow<'static, str>] {
        &self.arguments
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// See [`Registry::add`].
    pub fn add(&mut self, descriptor: Descriptor) -> Result<Handle, Descriptor> {
        self.registry.add(descriptor)
    }

    /// See [`Registry::add_all`].
    pub fn add_all(
        &mut self,
        descriptors: impl IntoIterator<Item = Descriptor>,
    ) -> Result<Vec<Handle>, Vec<Descriptor>> {
        self.registry.add_all(descriptors)
    }

    pub fn remove(&mut self, handle: Handle) -> Option<Descriptor> {
        self.registry.remove(handle)
    }

    pub fn clear(&mut self) {
        self.registry.clear();
    }

    /// Positional arguments only document the command line; parsing does not check against them.
    pub fn add_positional(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
        syntax: Option<Cow<'static, str>>,
    ) {
        self.registry.add_positional(name, description, syntax);
    }

    pub fn clear_positionals(&mut self) {
        self.registry.clear_positionals();
    }

    pub fn get(&self, handle: Handle) -> Option<&Descriptor> {
        self.registry.get(handle)
    }

    /// How many times the last parse matched the option answering to `command`, `0` if none does.
    pub fn was_set(&self, command: impl Into<Command>) -> usize {
        self.registry
            .find(&command.into())
            .map_or(0, Descriptor::was_set)
    }

    pub fn value(&self, command: impl Into<Command>) -> Option<&str> {
        self.registry
            .find(&command.into())
            .filter(|descriptor| descriptor.kind().takes_value() && descriptor.was_set() > 0)
            .map(Descriptor::get_value)
    }

    /// Arguments of the last parse that were neither commands nor values, in order.
    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }

    pub fn status(&self) -> Status {
        self.error.as_ref().map_or(Status::ParseSuccessful, Error::status)
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Empty when the last parse succeeded.
    pub fn error_text(&self) -> &str {
        &self.text
    }

    pub fn version_text(&self) -> String {
        help::version(&self.name, &self.version)
    }

    pub fn help_text(&self) -> String {
        self.help_text_with(&Plain)
    }

    /// Empty if the style fails to write.
    pub fn help_text_with(&self, style: &dyn Style) -> String {
        help::help(&self.executable, &self.description, &self.registry, style).unwrap_or_else(
            |error| {
                debug!(%error, "Failed to render help");
                String::new()
            },
        )
    }

    /// Parses the stored arguments against the registered options.
    ///
    /// All state from a previous parse is cleared first. Parsing stops at the first error;
    /// options matched before it keep what they captured.
    pub fn parse(&mut self) -> Result<(), Error> {
        self.reset();
        let result = scan(
            &mut self.registry,
            &mut self.positionals,
            Cursor::new(self.arguments.get(1..).unwrap_or_default()),
        );
        match &result {
            Ok(()) => debug!(positionals = self.positionals.len(), "Parsed arguments"),
            Err(error) => {
                debug!(status = ?error.status(), %error, "Failed to parse arguments");
                self.text = error.to_string();
                self.error = Some(error.clone());
            }
        }
        result
    }

    /// Replaces the argument vector and parses it.
    pub fn parse_from<A: Into<Cow<'static, str>>>(
        &mut self,
        arguments: impl IntoIterator<Item = A>,
    ) -> Result<(), Error> {
        self.set_arguments(arguments);
        self.parse()
    }

    fn reset(&mut self) {
        self.positionals.clear();
        self.error = None;
        self.text.clear();
        self.registry.descriptors_mut().for_each(Descriptor::reset);
    }
}

fn scan(
    registry: &mut Registry,
    positionals: &mut Vec<String>,
    mut cursor: Cursor,
) -> Result<(), Error> {
    while let Some(argument) = cursor.next() {
        let token = Token::classify(argument);
        trace!(position = cursor.position(), ?token, "Classified argument");
        match token {
            Token::Long(long) => parse_long(registry, long, &mut cursor)?,
            Token::Short(shorts) => parse_short(registry, shorts, &mut cursor)?,
            Token::Positional(positional) => positionals.push(positional.to_owned()),
        }
    }
    Ok(())
}

fn parse_long(registry: &mut Registry, long: &str, cursor: &mut Cursor) -> Result<(), Error> {
    let (name, value) = Token::split(long);
    let command = || Command::Long(Cow::Owned(name.to_owned()));
    let Some(descriptor) = registry.find_long_mut(name) else {
        return Err(Error::InvalidOption(command()));
    };

    if descriptor.kind().takes_value() {
        let value = match value {
            Some(value) if !value.is_empty() => value,
            Some(_) => return Err(Error::MissingValue(command())),
            None => cursor.value().ok_or_else(|| Error::MissingValue(command()))?,
        };
        descriptor.value = value.to_owned();
    } else if value.is_some() {
        return Err(Error::UnexpectedValue(command()));
    }
    descriptor.set += 1;
    Ok(())
}

/// Each character of a cluster is matched on its own. `-vv` counts `v` twice.
fn parse_short(registry: &mut Registry, shorts: &str, cursor: &mut Cursor) -> Result<(), Error> {
    let single = shorts.chars().nth(1).is_none();
    for short in shorts.chars() {
        let Some(descriptor) = registry.find_short_mut(short) else {
            return Err(Error::InvalidOption(Command::Short(short)));
        };
        if descriptor.kind().takes_value() {
            if !single {
                return Err(Error::ClusteredValue(short));
            }
            let value = cursor
                .value()
                .ok_or(Error::MissingValue(Command::Short(short)))?;
            descriptor.value = value.to_owned();
        }
        descriptor.set += 1;
    }
    Ok(())
}

/// The part of a path after its last separator.
fn executable(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
