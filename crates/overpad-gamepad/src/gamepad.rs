use std::slice;

use ahash::AHashMap;
use smallvec::SmallVec;

use overpad_surface::Surface;

use crate::builder::BuildError;
use crate::button::Button;

/// Button capacity of a pad created with [`Gamepad::new`].
pub const DEFAULT_MAX_BUTTONS: usize = 16;

/// Longest accepted button name, in bytes.
pub const MAX_NAME_LEN: usize = 32;

/// An ordered collection of named buttons.
///
/// Buttons keep the order their sections first appeared in and are also
/// reachable by name. The capacity is fixed at construction; a definition
/// that names more buttons than fit fails to load instead of growing the
/// pad past it.
#[derive(Debug)]
pub struct Gamepad<S: Surface> {
    buttons: SmallVec<[Button<S>; DEFAULT_MAX_BUTTONS]>,
    index: AHashMap<Box<str>, usize>,
    capacity: usize,
}

impl<S: Surface> Gamepad<S> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_BUTTONS)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buttons: SmallVec::new(),
            index: AHashMap::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the button registered under `name`, creating it on first
    /// mention. Names are case sensitive.
    pub fn find_or_create(&mut self, name: &str) -> Result<&mut Button<S>, BuildError> {
        if let Some(&at) = self.index.get(name) {
            return Ok(&mut self.buttons[at]);
        }
        if self.buttons.len() == self.capacity {
            return Err(BuildError::TooManyButtons);
        }
        if name.len() > MAX_NAME_LEN {
            return Err(BuildError::NameTooLong);
        }
        let at = self.buttons.len();
        self.buttons.push(Button::new(name.into()));
        self.index.insert(name.into(), at);
        Ok(&mut self.buttons[at])
    }

    pub fn get(&self, name: &str) -> Option<&Button<S>> {
        self.index.get(name).map(|&at| &self.buttons[at])
    }

    /// Buttons in first-appearance order.
    pub fn iter(&self) -> slice::Iter<'_, Button<S>> {
        self.buttons.iter()
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops every button, releasing their bitmaps. The capacity is kept.
    pub fn clear(&mut self) {
        self.buttons.clear();
        self.index.clear();
    }
}

impl<S: Surface> Default for Gamepad<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, S: Surface> IntoIterator for &'a Gamepad<S> {
    type Item = &'a Button<S>;
    type IntoIter = slice::Iter<'a, Button<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
