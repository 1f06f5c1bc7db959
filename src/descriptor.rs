use crate::command::{is_valid_long, is_valid_short, Command};
use core::sync::atomic::{AtomicU64, Ordering};
use std::{borrow::Cow, collections::BTreeSet};

static NEXT: AtomicU64 = AtomicU64::new(0);

/// Identity of a descriptor. Clones share it; it is never used to match commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id(u64);

impl Id {
    fn next() -> Self {
        Id(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Kind {
    #[default]
    Normal,
    Value,
    Help,
    Version,
}

impl Kind {
    pub const fn takes_value(self) -> bool {
        matches!(self, Kind::Value)
    }

    /// Help and version options are listed under their own heading.
    pub const fn is_help(self) -> bool {
        matches!(self, Kind::Help | Kind::Version)
    }
}

/// An option: the commands it answers to, how it is documented and what the last parse saw.
#[derive(Debug, Clone)]
pub struct Descriptor {
    id: Id,
    kind: Kind,
    shorts: BTreeSet<char>,
    longs: BTreeSet<Cow<'static, str>>,
    description: Cow<'static, str>,
    pub(crate) set: usize,
    pub(crate) value: String,
}

impl Default for Descriptor {
    fn default() -> Self {
        Self::new(Kind::Normal)
    }
}

impl Descriptor {
    pub fn new(kind: Kind) -> Self {
        Self {
            id: Id::next(),
            kind,
            shorts: BTreeSet::new(),
            longs: BTreeSet::new(),
            description: Cow::Borrowed(""),
            set: 0,
            value: String::new(),
        }
    }

    pub fn normal() -> Self {
        Self::new(Kind::Normal)
    }

    pub fn value() -> Self {
        Self::new(Kind::Value)
    }

    pub fn help() -> Self {
        Self::new(Kind::Help)
    }

    pub fn version() -> Self {
        Self::new(Kind::Version)
    }

    /// Invalid characters are skipped; see [`Descriptor::add_short`].
    pub fn short(mut self, short: char) -> Self {
        self.add_short(short);
        self
    }

    /// Invalid names are skipped; see [`Descriptor::add_long`].
    pub fn long(mut self, long: impl Into<Cow<'static, str>>) -> Self {
        self.add_long(long);
        self
    }

    pub fn description(mut self, description: impl Into<Cow<'static, str>>) -> Self {
        self.set_description(description);
        self
    }

    /// Returns `true` if the character was added. Space, control characters, `-`, delete and
    /// non-ascii characters are refused, as is a character already present.
    pub fn add_short(&mut self, short: char) -> bool {
        is_valid_short(short) && self.shorts.insert(short)
    }

    /// Adds all characters or none of them. Characters already present are not an error.
    pub fn add_shorts(&mut self, shorts: impl IntoIterator<Item = char>) -> bool {
        let shorts = shorts.into_iter().collect::<Vec<_>>();
        if !shorts.iter().copied().all(is_valid_short) {
            return false;
        }
        self.shorts.extend(shorts);
        true
    }

    /// Returns `true` if the name was added. Names that are empty, start with `-` or contain `=`
    /// are refused, as is a name already present.
    pub fn add_long(&mut self, long: impl Into<Cow<'static, str>>) -> bool {
        let long = long.into();
        is_valid_long(&long) && self.longs.insert(long)
    }

    /// Adds all names or none of them. Names already present are not an error.
    pub fn add_longs<L: Into<Cow<'static, str>>>(
        &mut self,
        longs: impl IntoIterator<Item = L>,
    ) -> bool {
        let longs = longs.into_iter().map(Into::into).collect::<Vec<_>>();
        if !longs.iter().all(|long| is_valid_long(long)) {
            return false;
        }
        self.longs.extend(longs);
        true
    }

    pub fn clear_shorts(&mut self) {
        self.shorts.clear();
    }

    pub fn clear_longs(&mut self) {
        self.longs.clear();
    }

    pub fn set_description(&mut self, description: impl Into<Cow<'static, str>>) {
        self.description = description.into();
    }

    pub fn set_kind(&mut self, kind: Kind) {
        self.kind = kind;
    }

    pub const fn id(&self) -> Id {
        self.id
    }

    pub const fn kind(&self) -> Kind {
        self.kind
    }

    pub const fn shorts(&self) -> &BTreeSet<char> {
        &self.shorts
    }

    pub const fn longs(&self) -> &BTreeSet<Cow<'static, str>> {
        &self.longs
    }

    pub fn get_description(&self) -> &str {
        &self.description
    }

    /// How many times the last parse matched this option.
    pub const fn was_set(&self) -> usize {
        self.set
    }

    /// The value captured by the last parse. Empty unless the option takes a value.
    pub fn get_value(&self) -> &str {
        &self.value
    }

    pub fn has_commands(&self) -> bool {
        !self.shorts.is_empty() || !self.longs.is_empty()
    }

    pub fn commands(&self) -> impl Iterator<Item = Command> + '_ {
        self.shorts
            .iter()
            .copied()
            .map(Command::Short)
            .chain(self.longs.iter().cloned().map(Command::Long))
    }

    pub fn answers(&self, command: &Command) -> bool {
        match command {
            Command::Short(short) => self.shorts.contains(short),
            Command::Long(long) => self.longs.contains(&**long),
        }
    }

    pub(crate) fn answers_short(&self, short: char) -> bool {
        self.shorts.contains(&short)
    }

    pub(crate) fn answers_long(&self, long: &str) -> bool {
        self.longs.contains(long)
    }

    /// `true` if both descriptors answer to at least one common command.
    pub fn collides(&self, other: &Descriptor) -> bool {
        !self.shorts.is_disjoint(&other.shorts) || !self.longs.is_disjoint(&other.longs)
    }

    pub(crate) fn reset(&mut self) {
        self.set = 0;
        self.value.clear();
    }
}
