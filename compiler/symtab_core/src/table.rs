//! Fixed-capacity hash table owned by a single scope.

use crate::probe::{probe, ProbeMode};
use crate::{Ident, Value};

/// A name-to-value binding stored in a scope table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    name: Ident,
    value: Value,
    /// Cleared on a vacated slot, which the probe treats as a tombstone.
    occupied: bool,
}

impl Binding {
    #[inline]
    pub fn name(&self) -> &Ident {
        &self.name
    }

    #[inline]
    pub fn value(&self) -> Value {
        self.value
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.occupied
    }
}

/// Insertion failed: no candidate slot was empty, vacated, or matching.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("symbol table full")]
pub struct TableFull;

/// Where an assignment landed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    /// Slot index in the scope's table.
    pub slot: usize,
    /// The overwritten value, if the name was already bound in this scope.
    pub previous: Option<Value>,
}

/// One scope's bindings.
///
/// The slot array is allocated once at full capacity and never resized.
#[derive(Clone, Debug)]
pub struct ScopeTable {
    slots: Box<[Option<Binding>]>,
    /// Number of occupied slots.
    len: usize,
}

impl ScopeTable {
    /// Create an empty table with `capacity` slots.
    pub fn new(capacity: usize) -> Self {
        ScopeTable {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
            len: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of live bindings.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bind `name` to `value`, creating the binding or overwriting its value.
    ///
    /// On [`TableFull`] the table is left untouched.
    pub fn insert(&mut self, name: &Ident, value: Value) -> Result<Assignment, TableFull> {
        let slot = probe(&self.slots, name.as_str(), ProbeMode::Insert)
            .ok_or(TableFull)?
            .index();
        let previous = match &mut self.slots[slot] {
            Some(binding) if binding.occupied && binding.name == *name => {
                Some(std::mem::replace(&mut binding.value, value))
            }
            entry => {
                *entry = Some(Binding {
                    name: name.clone(),
                    value,
                    occupied: true,
                });
                self.len += 1;
                None
            }
        };
        Ok(Assignment { slot, previous })
    }

    /// Find the live binding for `name` in this table only.
    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.find(name).map(|(_, binding)| binding)
    }

    /// Like [`get`](Self::get), also returning the slot index.
    pub fn find(&self, name: &str) -> Option<(usize, &Binding)> {
        let slot = probe(&self.slots, name, ProbeMode::Lookup)?.index();
        self.slots[slot]
            .as_ref()
            .filter(|binding| binding.occupied && binding.name == *name)
            .map(|binding| (slot, binding))
    }

    /// Live bindings in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Binding)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, entry)| entry.as_ref().map(|binding| (slot, binding)))
            .filter(|(_, binding)| binding.occupied)
    }

    /// Raw slot contents, including never-used and vacated slots.
    pub fn slots(&self) -> &[Option<Binding>] {
        &self.slots
    }

    /// Mark a live binding as vacated, leaving a tombstone behind.
    #[cfg(test)]
    pub(crate) fn vacate(&mut self, name: &str) -> bool {
        let Some((slot, _)) = self.find(name) else {
            return false;
        };
        if let Some(binding) = &mut self.slots[slot] {
            binding.occupied = false;
            self.len -= 1;
        }
        true
    }
}
