use crate::{command::Command, descriptor::Descriptor};
use std::borrow::Cow;
use tracing::debug;

/// Stable reference to a registered descriptor. Handles are never reused, even after removal.
///
/// Removed descriptors leave an empty slot behind, so the arena only grows until the registry
/// is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Handle(usize);

/// A positional argument as documented in the help text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Positional {
    pub name: Cow<'static, str>,
    pub description: Cow<'static, str>,
    pub syntax: Option<Cow<'static, str>>,
}

impl Positional {
    /// The custom syntax if there is one, `[name]` otherwise.
    pub fn syntax(&self) -> Cow<'_, str> {
        match &self.syntax {
            Some(syntax) => Cow::Borrowed(&**syntax),
            None => Cow::Owned(format!("[{}]", self.name)),
        }
    }
}

/// Owns the registered descriptors and the documented positional arguments.
///
/// No two registered descriptors ever answer to the same short or long command.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    slots: Vec<Option<Descriptor>>,
    positionals: Vec<Positional>,
}

impl Registry {
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            positionals: Vec::new(),
        }
    }

    /// `false` if the candidate has no command or shares a command with a registered descriptor.
    ///
    /// The registry owns its descriptors, so a candidate is never already a member; clones of a
    /// registered descriptor are only refused when their commands collide.
    pub fn is_unique(&self, candidate: &Descriptor) -> bool {
        candidate.has_commands()
            && self
                .descriptors()
                .all(|descriptor| !descriptor.collides(candidate))
    }

    /// Registers the descriptor, or hands it back untouched if it is not unique.
    pub fn add(&mut self, descriptor: Descriptor) -> Result<Handle, Descriptor> {
        if !self.is_unique(&descriptor) {
            debug!(id = ?descriptor.id(), "Rejected option");
            return Err(descriptor);
        }
        Ok(self.insert(descriptor))
    }

    /// Registers every descriptor or none of them. The batch must be unique against the
    /// registry and within itself.
    pub fn add_all(
        &mut self,
        descriptors: impl IntoIterator<Item = Descriptor>,
    ) -> Result<Vec<Handle>, Vec<Descriptor>> {
        let descriptors = descriptors.into_iter().collect::<Vec<_>>();
        for (i, left) in descriptors.iter().enumerate() {
            let unique = self.is_unique(left)
                && descriptors[i + 1..]
                    .iter()
                    .all(|right| !left.collides(right));
            if !unique {
                debug!(id = ?left.id(), count = descriptors.len(), "Rejected option batch");
                return Err(descriptors);
            }
        }
        Ok(descriptors
            .into_iter()
            .map(|descriptor| self.insert(descriptor))
            .collect())
    }

    fn insert(&mut self, descriptor: Descriptor) -> Handle {
        let handle = Handle(self.slots.len());
        self.slots.push(Some(descriptor));
        handle
    }

    pub fn remove(&mut self, handle: Handle) -> Option<Descriptor> {
        self.slots.get_mut(handle.0)?.take()
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    pub fn get(&self, handle: Handle) -> Option<&Descriptor> {
        self.slots.get(handle.0)?.as_ref()
    }

    pub fn find(&self, command: &Command) -> Option<&Descriptor> {
        self.descriptors().find(|descriptor| descriptor.answers(command))
    }

    pub(crate) fn find_short_mut(&mut self, short: char) -> Option<&mut Descriptor> {
        self.descriptors_mut()
            .find(|descriptor| descriptor.answers_short(short))
    }

    pub(crate) fn find_long_mut(&mut self, long: &str) -> Option<&mut Descriptor> {
        self.descriptors_mut()
            .find(|descriptor| descriptor.answers_long(long))
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &Descriptor> {
        self.slots.iter().flatten()
    }

    pub(crate) fn descriptors_mut(&mut self) -> impl Iterator<Item = &mut Descriptor> {
        self.slots.iter_mut().flatten()
    }

    pub fn handles(&self) -> impl Iterator<Item = Handle> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(index, _)| Handle(index))
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors().next().is_none()
    }

    pub fn add_positional(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
        syntax: Option<Cow<'static, str>>,
    ) {
        self.positionals.push(Positional {
            name: name.into(),
            description: description.into(),
            syntax: syntax.filter(|syntax| !syntax.is_empty()),
        });
    }

    pub fn clear_positionals(&mut self) {
        self.positionals.clear();
    }

    pub fn positionals(&self) -> &[Positional] {
        &self.positionals
    }
}
