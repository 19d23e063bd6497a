//! Sorting of the documents surrounding an anchor document.

use crate::{
    config::ContextConfig, first_sortable_field, Error, IndexPattern, ParseError, SortDirection, SortDirective,
    SortableFields, SCORE_FIELD,
};
use std::{fmt::Display, str::FromStr};

/// Which side of the anchor document to fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurroundingDocsType {
    Predecessors,
    Successors,
}

impl SurroundingDocsType {
    /// The direction the query must use, given the direction of the view.
    ///
    /// Predecessors are found by querying in the opposite direction.
    pub fn sort_direction(self, anchor_direction: SortDirection) -> SortDirection {
        match self {
            Self::Successors => anchor_direction,
            Self::Predecessors => anchor_direction.reverse(),
        }
    }
}

impl Display for SurroundingDocsType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Predecessors => f.write_str("predecessors"),
            Self::Successors => f.write_str("successors"),
        }
    }
}

impl FromStr for SurroundingDocsType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "predecessors" => Ok(Self::Predecessors),
            "successors" => Ok(Self::Successors),
            _ => Err(ParseError::new("surrounding docs type", s)),
        }
    }
}

/// The sort clause of anchor and surrounding document queries.
pub fn es_query_sort(time_field: &str, tie_breaker_field: &str, direction: SortDirection) -> Vec<SortDirective> {
    vec![
        SortDirective::ordered(time_field, direction),
        SortDirective::ordered(tie_breaker_field, direction),
    ]
}

/// Pick the tie-breaker field from the configured candidates.
pub fn tie_breaker_field<'a, S>(schema: &S, config: &'a ContextConfig) -> Result<&'a str, Error>
where
    S: SortableFields + ?Sized,
{
    first_sortable_field(schema, config.tie_breaker_fields.iter()).ok_or_else(|| Error::NoSortableTieBreaker {
        candidates: config.tie_breaker_fields.to_vec(),
    })
}

/// The sort of a view without an explicit sort: by time if possible, by score otherwise.
pub fn default_sort(pattern: &IndexPattern, direction: SortDirection) -> SortDirective {
    let field = first_sortable_field(pattern, pattern.time_field_name.iter()).unwrap_or(SCORE_FIELD);
    SortDirective::ordered(field, direction)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{config::FieldList, reverse_sort_directive, FieldSpec};
    use serde_json::{json, Value};

    fn pattern(time_field_name: Option<&str>) -> IndexPattern {
        IndexPattern {
            title: "logs-*".into(),
            time_field_name: time_field_name.map(ToString::to_string),
            fields: vec![
                FieldSpec::new("@timestamp").sortable(true),
                FieldSpec::new("created"),
                FieldSpec::new("tiebreaker").sortable(true),
            ],
        }
    }

    #[test]
    fn test_sort_direction() {
        use SortDirection::*;
        use SurroundingDocsType::*;

        assert_eq!(Successors.sort_direction(Desc), Desc);
        assert_eq!(Successors.sort_direction(Asc), Asc);
        assert_eq!(Predecessors.sort_direction(Desc), Asc);
        assert_eq!(Predecessors.sort_direction(Asc), Desc);
    }

    #[test]
    fn test_parse_type() {
        assert_eq!("predecessors".parse::<SurroundingDocsType>(), Ok(SurroundingDocsType::Predecessors));
        assert_eq!(SurroundingDocsType::Successors.to_string(), "successors");
        assert!("before".parse::<SurroundingDocsType>().is_err());
        assert_eq!(
            serde_json::from_value::<SurroundingDocsType>(json!("successors")).unwrap(),
            SurroundingDocsType::Successors
        );
    }

    #[test]
    fn test_es_query_sort() {
        let sort = es_query_sort("@timestamp", "_doc", SortDirection::Asc);
        assert_eq!(
            serde_json::to_value(&sort).unwrap(),
            json!([{"@timestamp": "asc"}, {"_doc": "asc"}])
        );

        let reversed = sort.iter().map(reverse_sort_directive).map(Value::from).collect::<Vec<_>>();
        assert_eq!(reversed, vec![json!({"@timestamp": "desc"}), json!({"_doc": "desc"})]);
    }

    #[test]
    fn test_tie_breaker_default() {
        let config = ContextConfig::default();
        assert_eq!(tie_breaker_field(&pattern(None), &config).unwrap(), "_doc");
    }

    #[test]
    fn test_tie_breaker_configured() {
        let config = ContextConfig {
            tie_breaker_fields: FieldList::from("created,tiebreaker,_doc".to_string()),
            ..Default::default()
        };
        assert_eq!(tie_breaker_field(&pattern(None), &config).unwrap(), "tiebreaker");
    }

    #[test]
    fn test_tie_breaker_missing() {
        let config = ContextConfig {
            tie_breaker_fields: FieldList::from("created,unknown".to_string()),
            ..Default::default()
        };
        match tie_breaker_field(&pattern(None), &config) {
            Err(Error::NoSortableTieBreaker { candidates }) => assert_eq!(candidates, vec!["created", "unknown"]),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_default_sort() {
        assert_eq!(
            default_sort(&pattern(Some("@timestamp")), SortDirection::Desc),
            SortDirective::ordered("@timestamp", SortDirection::Desc)
        );
        assert_eq!(
            default_sort(&pattern(Some("created")), SortDirection::Desc),
            SortDirective::ordered("_score", SortDirection::Desc)
        );
        assert_eq!(
            default_sort(&pattern(None), SortDirection::Asc),
            SortDirective::ordered("_score", SortDirection::Asc)
        );
    }
}
