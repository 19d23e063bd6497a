//! Sorting helpers of the search results view.
//!
//! Picking a field which can be sorted by, and turning a sort directive around. The latter is
//! needed when fetching the documents preceding an anchor document: the query runs in the
//! opposite direction and the hits get reversed afterwards.

pub mod config;
pub mod context;

pub use discover_model::prelude::*;

use log::{debug, trace};

/// Fields which aren't part of the schema, but can always be sorted by.
pub const META_FIELD_NAMES: [&str; 3] = ["_seq_no", "_doc", "_uid"];

/// The pseudo field of the relevance score. Sorting by it defaults to descending.
pub const SCORE_FIELD: &str = "_score";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no sortable tie-breaker field in {candidates:?}")]
    NoSortableTieBreaker { candidates: Vec<String> },
}

pub fn is_meta_field(name: &str) -> bool {
    META_FIELD_NAMES.contains(&name)
}

/// Find the first of the field names which can be sorted by.
///
/// Meta fields are always sortable, all other fields must be flagged as sortable by the schema.
pub fn first_sortable_field<'a, S, I, T>(schema: &S, field_names: I) -> Option<&'a str>
where
    S: SortableFields + ?Sized,
    I: IntoIterator<Item = &'a T>,
    T: AsRef<str> + ?Sized + 'a,
{
    let found = field_names
        .into_iter()
        .map(|name| name.as_ref())
        .find(|name| is_meta_field(name) || schema.is_sortable(name));

    if found.is_none() {
        debug!("None of the candidates is sortable");
    }

    found
}

/// Reverse the direction of a sort directive.
///
/// A plain field name gets expanded into the map form. As the score is sorted descending by
/// default, reversing it results in ascending order. Directives which are neither a field name
/// nor a map are returned unchanged.
pub fn reverse_sort_directive(directive: &SortDirective) -> SortDirective {
    match directive {
        SortDirective::Field(field) => {
            let direction = match field.as_str() {
                SCORE_FIELD => SortDirection::Asc,
                _ => SortDirection::Desc,
            };
            SortDirective::ordered(field.clone(), direction)
        }
        SortDirective::FieldMap(fields) => SortDirective::FieldMap(
            fields
                .iter()
                .map(|(field, order)| (field.clone(), reverse_sort_direction(order)))
                .collect(),
        ),
        SortDirective::Other(value) => {
            trace!("Not reversing sort directive: {value}");
            directive.clone()
        }
    }
}

/// Reverse a single sort value.
///
/// Everything which isn't `asc` reverses to `asc`, this includes unknown tokens and a missing
/// `order` of the options form. Options other than `order` are kept.
pub fn reverse_sort_direction(order: &SortOrder) -> SortOrder {
    match order {
        SortOrder::Direction(direction) => SortOrder::Direction(direction.reverse()),
        SortOrder::Options { order, extra } => SortOrder::Options {
            order: Some(Box::new(
                order
                    .as_deref()
                    .map(reverse_sort_direction)
                    .unwrap_or(SortOrder::Direction(SortDirection::Asc)),
            )),
            extra: extra.clone(),
        },
        SortOrder::Unknown(value) => {
            trace!("Unknown sort direction, falling back to ascending: {value}");
            SortOrder::Direction(SortDirection::Asc)
        }
    }
}
