use crate::SortDirection;
use std::ops::{Deref, DerefMut};

/// A list of field names, which can be provided as comma separated values.
///
/// Entries are trimmed and empty entries are dropped.
#[derive(Clone, Debug, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(from = "FieldListValue")]
pub struct FieldList(pub Vec<String>);

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum FieldListValue {
    List(Vec<String>),
    Csv(String),
}

impl From<FieldListValue> for FieldList {
    fn from(value: FieldListValue) -> Self {
        match value {
            FieldListValue::List(values) => values.into(),
            FieldListValue::Csv(value) => value.into(),
        }
    }
}

impl Deref for FieldList {
    type Target = Vec<String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for FieldList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<String>> for FieldList {
    fn from(values: Vec<String>) -> Self {
        Self(
            values
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        )
    }
}

impl From<String> for FieldList {
    fn from(value: String) -> Self {
        value.split(',').map(ToString::to_string).collect::<Vec<_>>().into()
    }
}

/// Settings of the surrounding documents view.
#[derive(Clone, Debug, PartialEq, Eq, clap::Args, serde::Deserialize)]
#[command(next_help_heading = "Context view")]
#[serde(rename_all = "camelCase")]
pub struct ContextConfig {
    /// Fields to break ties between documents with the same time value, the first sortable one is used
    #[arg(
        long = "context-tie-breaker-fields",
        env = "CONTEXT_TIE_BREAKER_FIELDS",
        default_value = "_doc"
    )]
    #[serde(default = "default_tie_breaker_fields")]
    pub tie_breaker_fields: FieldList,

    /// Sort order used when none was requested
    #[arg(long = "default-sort-order", env = "DEFAULT_SORT_ORDER", default_value = "desc")]
    #[serde(default = "default_sort_order")]
    pub default_sort_order: SortDirection,
}

fn default_tie_breaker_fields() -> FieldList {
    FieldList(vec!["_doc".to_string()])
}

fn default_sort_order() -> SortDirection {
    SortDirection::Desc
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            tie_breaker_fields: default_tie_breaker_fields(),
            default_sort_order: default_sort_order(),
        }
    }
}
