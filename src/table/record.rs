use crate::spreadsheet::Value;
use std::collections::HashMap;

/// One data row keyed by field name.
///
/// `row_id` is the 1-based sheet row the record came from, counted from the top of
/// the whole grid (header rows included). Records built from a bare row carry no
/// row id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    row_id: Option<usize>,
    values: HashMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_row_id(mut self, row_id: usize) -> Self {
        self.row_id = Some(row_id);
        self
    }

    pub fn row_id(&self) -> Option<usize> {
        self.row_id
    }

    pub fn set_row_id(&mut self, row_id: usize) {
        self.row_id = Some(row_id);
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    /// Sets a field, returning the previous value if there was one.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(field.into(), value.into())
    }

    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.values.remove(field)
    }

    /// Number of fields, the row id not included.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.values.iter().map(|(field, value)| (field.as_str(), value))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Record {
            row_id: None,
            values: iter
                .into_iter()
                .map(|(field, value)| (field.into(), value.into()))
                .collect(),
        }
    }
}
