//! Flat line-format record.

use hashbrown::HashMap;

use crate::field::Field;

/// One contact as a flat field-name → string mapping.
///
/// Names are case-insensitive and stored upper-case. Iteration follows
/// insertion order so a serializer reproduces fields in the order they were
/// set. Equality ignores order.
#[derive(Debug, Clone, Default)]
pub struct Record {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fields present.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no fields are present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a field by name, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        let pos = match self.index.get(name) {
            Some(pos) => *pos,
            None => *self.index.get(name.to_ascii_uppercase().as_str())?,
        };
        Some(self.entries[pos].1.as_str())
    }

    /// Value of a known field, or `""` when absent.
    pub fn field(&self, field: Field) -> &str {
        self.get(field.tag()).unwrap_or_default()
    }

    /// Returns true when `name` is present.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Sets `name` to `value`, replacing any previous value in place.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let key = name.to_ascii_uppercase();
        let value = value.into();
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    /// Sets a known field.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.set(field.tag(), value);
    }

    /// Iterates `(NAME, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterates fields carrying the [`APP_PREFIX`](crate::field::APP_PREFIX).
    pub fn app_defined(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter(|(k, _)| Field::is_app_defined(k))
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl Eq for Record {}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (k, v) in iter {
            record.set(k.as_ref(), v);
        }
        record
    }
}
