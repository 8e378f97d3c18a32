use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// An account identifier and the name of the person owning it.
///
/// Field order is the serialized key order, so `id` must stay first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub id: String,
    pub name: String,
}

impl Owner {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Ordered collection of owners, serialized as a plain JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Owners(Vec<Owner>);

impl Owners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Owner> {
        self.0.iter()
    }

    /// All account IDs, in list order
    pub fn all_ids(&self) -> Vec<String> {
        self.0.iter().map(|o| o.id.clone()).collect()
    }

    /// Map from owner name to account ID
    pub fn name_to_id(&self) -> HashMap<String, String> {
        self.0
            .iter()
            .map(|o| (o.name.clone(), o.id.clone()))
            .collect()
    }

    /// Map from account ID to owner name
    pub fn id_to_name(&self) -> HashMap<String, String> {
        self.0
            .iter()
            .map(|o| (o.id.clone(), o.name.clone()))
            .collect()
    }
}

impl FromIterator<Owner> for Owners {
    fn from_iter<I: IntoIterator<Item = Owner>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Owners {
    type Item = Owner;
    type IntoIter = std::vec::IntoIter<Owner>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Owners {
    type Item = &'a Owner;
    type IntoIter = std::slice::Iter<'a, Owner>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
