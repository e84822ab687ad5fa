use crate::utils::error::{Result, RosterError};
use indexmap::map::Entry;
use indexmap::IndexMap;
use std::cell::RefCell;
use std::rc::Rc;

/// A name sequence with shared ownership. Every clone of the handle refers
/// to the same underlying storage, so a push through one handle is visible
/// through all of them.
pub type SharedNames = Rc<RefCell<Vec<String>>>;

pub fn shared_names<I, S>(names: I) -> SharedNames
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Rc::new(RefCell::new(names.into_iter().map(Into::into).collect()))
}

/// Mapping from hair-color label to a shared, mutable sequence of student
/// names. Iteration follows insertion order, and inserting an existing
/// color is rejected rather than overwriting.
#[derive(Debug, Default)]
pub struct HairColorRoster {
    entries: IndexMap<String, SharedNames>,
}

impl HairColorRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert-if-absent: a duplicate color fails with `DuplicateColor` and
    /// leaves the existing entry untouched.
    pub fn insert(&mut self, color: &str, names: SharedNames) -> Result<()> {
        match self.entries.entry(color.to_string()) {
            Entry::Occupied(_) => Err(RosterError::DuplicateColor {
                color: color.to_string(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(names);
                Ok(())
            }
        }
    }

    /// Returns the shared handle for a color. Callers can compare it for
    /// identity with `Rc::ptr_eq` or mutate the sequence through it.
    pub fn get(&self, color: &str) -> Option<&SharedNames> {
        self.entries.get(color)
    }

    /// `(color, names)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SharedNames)> {
        self.entries.iter().map(|(color, names)| (color.as_str(), names))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
