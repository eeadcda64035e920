use serde::{ser::SerializeMap, Serialize};

pub type RecordTag = (String, String);

/// Sorted name/value pairs a record can be queried by.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordTags {
    inner: Vec<RecordTag>,
}

impl Serialize for RecordTags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.inner.len()))?;
        for tag in self.inner.iter() {
            map.serialize_entry(&tag.0, &tag.1)?
        }
        map.end()
    }
}

impl RecordTags {
    pub fn new(inner: Vec<RecordTag>) -> Self {
        let mut items = inner;
        items.sort();

        Self { inner: items }
    }

    /// Sets `name` to `value`, replacing any previous value of that tag.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.inner.retain(|(existing, _)| *existing != name);
        self.inner.push((name, value.into()));
        self.inner.sort();
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecordTag> {
        self.inner.iter()
    }
}

impl IntoIterator for RecordTags {
    type Item = RecordTag;

    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl FromIterator<RecordTag> for RecordTags {
    fn from_iter<T: IntoIterator<Item = RecordTag>>(iter: T) -> Self {
        let mut tags = Self::default();

        for (name, value) in iter {
            tags.add(name, value);
        }
        tags
    }
}
