use alloc::vec::Vec;
use core::fmt;

use crate::FieldError;

// -----------------------------------------------------------------------------
// FieldOutcome

/// What happened to one property during a deserialization walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    /// The keyed field was present and converted successfully.
    Applied,
    /// The keyed field was absent; the property kept its prior value.
    Absent,
    /// The keyed field was present but did not convert; the property kept its
    /// prior value.
    Malformed(FieldError),
}

// -----------------------------------------------------------------------------
// Report

/// Per-property outcomes of one deserialization walk, in walk order.
///
/// Deserialization is best-effort by default: the report is how callers who
/// care can tell "absent" from "malformed" after the fact, and callers who
/// don't can simply drop it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    entries: Vec<(&'static str, FieldOutcome)>,
}

impl Report {
    #[inline]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, name: &'static str, outcome: FieldOutcome) {
        self.entries.push((name, outcome));
    }

    /// Whether no property was malformed (absent properties are fine).
    pub fn is_clean(&self) -> bool {
        !self
            .entries
            .iter()
            .any(|(_, outcome)| matches!(outcome, FieldOutcome::Malformed(_)))
    }

    /// The outcome recorded for `name`, if the walked type declares it.
    pub fn outcome_of(&self, name: &str) -> Option<&FieldOutcome> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, outcome)| outcome)
    }

    /// Iterates every `(property, outcome)` pair in walk order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&'static str, &FieldOutcome)> {
        self.entries.iter().map(|(name, outcome)| (*name, outcome))
    }

    /// Iterates the malformed properties and their errors.
    pub fn malformed(&self) -> impl Iterator<Item = (&'static str, &FieldError)> {
        self.entries.iter().filter_map(|(name, outcome)| match outcome {
            FieldOutcome::Malformed(err) => Some((*name, err)),
            _ => None,
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let applied = self
            .iter()
            .filter(|(_, o)| matches!(o, FieldOutcome::Applied))
            .count();
        write!(f, "{applied}/{} properties applied", self.entries.len())?;
        for (name, err) in self.malformed() {
            write!(f, "; `{name}` malformed: {err}")?;
        }
        Ok(())
    }
}
