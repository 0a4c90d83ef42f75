//! Quadratic probe sequence over a scope table's slots.
//!
//! Candidate `i` is `(home + i * i) % capacity` for `i` in `0..capacity`,
//! where `home` is [`hash_name`]. Probing stops at the *first* candidate
//! that resolves the query; it never scans past a hit.
//!
//! # Resolution rule
//!
//! | Slot state                   | Insert         | Lookup           |
//! |------------------------------|----------------|------------------|
//! | never used                   | `Empty`        | `Empty` (miss)   |
//! | vacated binding (tombstone)  | `Tombstone`    | keep probing     |
//! | binding with the same name   | `Match`        | `Match`          |
//! | binding with another name    | keep probing   | keep probing     |
//!
//! Note that a prime capacity only reaches the quadratic residues of the
//! home index, roughly half the table. A query can come back exhausted
//! while unreached slots are still free.

use crate::hash_name;
use crate::table::Binding;

/// What the probe is looking for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ProbeMode {
    /// A slot to create or update a binding in.
    Insert,
    /// The slot holding an existing binding.
    Lookup,
}

/// The first candidate slot that resolved a probe.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ProbeHit {
    /// A never-used slot.
    Empty(usize),
    /// A vacated slot, reusable for insertion.
    Tombstone(usize),
    /// A slot whose binding carries the queried name.
    Match(usize),
}

impl ProbeHit {
    /// Slot index of the hit.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            ProbeHit::Empty(i) | ProbeHit::Tombstone(i) | ProbeHit::Match(i) => i,
        }
    }
}

/// Candidate slot indices for one name, in probe order.
#[derive(Clone, Debug)]
pub struct ProbeSequence {
    home: usize,
    capacity: usize,
    step: usize,
}

impl ProbeSequence {
    pub fn new(name: &str, capacity: usize) -> Self {
        ProbeSequence {
            home: hash_name(name, capacity),
            capacity,
            step: 0,
        }
    }
}

impl Iterator for ProbeSequence {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.step >= self.capacity {
            return None;
        }
        let i = self.step;
        self.step += 1;
        Some((self.home + (i * i) % self.capacity) % self.capacity)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.capacity - self.step;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ProbeSequence {}

/// Resolve `name` against `slots`.
///
/// Returns `None` when all `slots.len()` candidates were tried without a
/// hit: the table is full for `Insert`, or the name is absent for `Lookup`.
pub fn probe(slots: &[Option<Binding>], name: &str, mode: ProbeMode) -> Option<ProbeHit> {
    if slots.is_empty() {
        return None;
    }
    for (step, index) in ProbeSequence::new(name, slots.len()).enumerate() {
        let hit = match &slots[index] {
            None => Some(ProbeHit::Empty(index)),
            Some(binding) if mode == ProbeMode::Insert && !binding.is_occupied() => {
                Some(ProbeHit::Tombstone(index))
            }
            Some(binding) if *binding.name() == *name => Some(ProbeHit::Match(index)),
            Some(_) => None,
        };
        if let Some(hit) = hit {
            tracing::trace!(name, ?mode, step, ?hit, "probe resolved");
            return Some(hit);
        }
    }
    tracing::trace!(name, ?mode, probes = slots.len(), "probe exhausted");
    None
}
