use std::collections::{BTreeMap, HashMap};

/// Lookup of the sortable flag of index fields.
///
/// Field names which are not known to the schema are not sortable.
pub trait SortableFields {
    fn is_sortable(&self, name: &str) -> bool;
}

impl<T: SortableFields + ?Sized> SortableFields for &T {
    fn is_sortable(&self, name: &str) -> bool {
        (**self).is_sortable(name)
    }
}

/// Metadata of a single field of an index pattern.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    pub name: String,
    #[serde(default, rename = "type", skip_serializing_if = "String::is_empty")]
    pub r#type: String,
    #[serde(default)]
    pub sortable: bool,
    #[serde(default)]
    pub searchable: bool,
    #[serde(default)]
    pub aggregatable: bool,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }
}

/// The queryable fields of a set of indices.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexPattern {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_field_name: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

impl IndexPattern {
    /// Get a field by its name. In case of duplicates, the first one wins.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

impl SortableFields for IndexPattern {
    fn is_sortable(&self, name: &str) -> bool {
        self.field(name).map(|f| f.sortable).unwrap_or_default()
    }
}

impl SortableFields for HashMap<String, FieldSpec> {
    fn is_sortable(&self, name: &str) -> bool {
        self.get(name).map(|f| f.sortable).unwrap_or_default()
    }
}

impl SortableFields for BTreeMap<String, FieldSpec> {
    fn is_sortable(&self, name: &str) -> bool {
        self.get(name).map(|f| f.sortable).unwrap_or_default()
    }
}
