use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

/// Per-row page data, looked up by a result row's `data-index`
///
/// The page may embed the table either as a JSON array indexed by row
/// position or as an object keyed by the decimal row index. `null` rows are
/// treated as absent.
#[derive(Debug, Clone, PartialEq)]
pub struct RowTable<T>(IndexMap<String, T>);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTable<T> {
    Rows(Vec<Option<T>>),
    Keyed(IndexMap<String, Option<T>>),
}

impl<T> From<RawTable<T>> for RowTable<T> {
    fn from(raw: RawTable<T>) -> Self {
        let rows = match raw {
            RawTable::Rows(rows) => rows
                .into_iter()
                .enumerate()
                .filter_map(|(i, row)| row.map(|row| (i.to_string(), row)))
                .collect(),
            RawTable::Keyed(rows) => rows
                .into_iter()
                .filter_map(|(key, row)| row.map(|row| (key, row)))
                .collect(),
        };
        Self(rows)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for RowTable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawTable::<T>::deserialize(deserializer).map(Self::from)
    }
}

impl<T> Default for RowTable<T> {
    fn default() -> Self {
        Self(IndexMap::new())
    }
}

impl<T> RowTable<T> {
    #[must_use]
    pub fn get(&self, row: &str) -> Option<&T> {
        self.0.get(row)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T> FromIterator<(String, T)> for RowTable<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
