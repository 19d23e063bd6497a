use serde_json::{Map, Value};
use sikula::mir::Direction;
use std::{collections::BTreeMap, fmt::Display, str::FromStr};

/// The key carrying the direction in the expanded form of a sort value.
pub const ORDER_KEY: &str = "order";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: '{value}'")]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseError {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn reverse(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(ParseError::new("sort direction", s)),
        }
    }
}

/// Map a direction of the query language (`sort:field` / `-sort:field`)
impl From<Direction> for SortDirection {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Ascending => Self::Asc,
            Direction::Descending => Self::Desc,
        }
    }
}

/// The value of a single field in the map form of a [`SortDirective`].
///
/// Anything which is neither a direction token nor an options object is kept as-is in
/// [`SortOrder::Unknown`], so that converting back to JSON doesn't lose information.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum SortOrder {
    /// `"asc"` or `"desc"`
    Direction(SortDirection),
    /// `{ "order": "asc", "mode": "min", ... }`
    Options {
        order: Option<Box<SortOrder>>,
        /// All other keys, except `order`
        extra: Map<String, Value>,
    },
    Unknown(Value),
}

impl SortOrder {
    /// The effective direction, if there is one.
    pub fn direction(&self) -> Option<SortDirection> {
        match self {
            Self::Direction(direction) => Some(*direction),
            Self::Options { order: Some(order), .. } => order.direction(),
            Self::Options { order: None, .. } | Self::Unknown(_) => None,
        }
    }
}

impl From<SortDirection> for SortOrder {
    fn from(direction: SortDirection) -> Self {
        Self::Direction(direction)
    }
}

impl From<Value> for SortOrder {
    fn from(value: Value) -> Self {
        match value {
            Value::String(token) => match token.parse() {
                Ok(direction) => Self::Direction(direction),
                Err(_) => Self::Unknown(Value::String(token)),
            },
            Value::Object(mut extra) => {
                let order = extra.remove(ORDER_KEY).map(|order| Box::new(Self::from(order)));
                Self::Options { order, extra }
            }
            other => Self::Unknown(other),
        }
    }
}

impl From<SortOrder> for Value {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Direction(direction) => Value::String(direction.to_string()),
            SortOrder::Options { order, mut extra } => {
                if let Some(order) = order {
                    extra.insert(ORDER_KEY.to_string(), Value::from(*order));
                }
                Value::Object(extra)
            }
            SortOrder::Unknown(value) => value,
        }
    }
}

/// A directive on how to sort search results.
///
/// The shape is decided once, when converting from JSON:
///
/// * `"field"` becomes [`SortDirective::Field`]
/// * `{ "field": "desc" }` or `{ "field": { "order": "desc" } }` becomes [`SortDirective::FieldMap`]
/// * everything else is kept in [`SortDirective::Other`]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum SortDirective {
    Field(String),
    FieldMap(BTreeMap<String, SortOrder>),
    Other(Value),
}

impl SortDirective {
    /// Create a directive sorting by a single field, in the given order.
    pub fn ordered(field: impl Into<String>, order: impl Into<SortOrder>) -> Self {
        Self::FieldMap(BTreeMap::from([(field.into(), order.into())]))
    }
}

impl From<&str> for SortDirective {
    fn from(field: &str) -> Self {
        Self::Field(field.to_string())
    }
}

impl From<Value> for SortDirective {
    fn from(value: Value) -> Self {
        match value {
            Value::String(field) => Self::Field(field),
            Value::Object(fields) => Self::FieldMap(
                fields
                    .into_iter()
                    .map(|(field, order)| (field, SortOrder::from(order)))
                    .collect(),
            ),
            other => Self::Other(other),
        }
    }
}

impl From<SortDirective> for Value {
    fn from(directive: SortDirective) -> Self {
        match directive {
            SortDirective::Field(field) => Value::String(field),
            SortDirective::FieldMap(fields) => Value::Object(
                fields
                    .into_iter()
                    .map(|(field, order)| (field, Value::from(order)))
                    .collect(),
            ),
            SortDirective::Other(value) => value,
        }
    }
}
