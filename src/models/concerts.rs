use std::collections::HashMap;

/// Per-artist list of strings keyed by artist id. Used for venues, dates and
/// formatted relations alike.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntrySet {
    entries: HashMap<i64, Vec<String>>,
}

pub type LocationSet = EntrySet;
pub type DateSet = EntrySet;
pub type RelationSet = EntrySet;

impl EntrySet {
    /// Never fails: unknown ids map to an empty slice.
    pub fn entries_for(&self, id: i64) -> &[String] {
        self.entries.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl FromIterator<(i64, Vec<String>)> for EntrySet {
    fn from_iter<I: IntoIterator<Item = (i64, Vec<String>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

pub fn format_relation(date: &str, location: &str) -> String {
    format!("{date} → {location}")
}
