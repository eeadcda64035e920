use std::fmt;

use super::record_tags::RecordTags;

/// Query over [`RecordTags`], modelled on the wallet query language.
#[derive(Clone, Debug, PartialEq)]
pub enum TagQuery {
    Eq(String, String),
    And(Vec<TagQuery>),
    Or(Vec<TagQuery>),
    Not(Box<TagQuery>),
}

impl TagQuery {
    pub fn eq(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Eq(name.into(), value.into())
    }

    /// Matches every record.
    pub fn all() -> Self {
        Self::And(vec![])
    }

    pub fn and(self, other: TagQuery) -> Self {
        match self {
            Self::And(mut queries) => {
                queries.push(other);
                Self::And(queries)
            }
            query => Self::And(vec![query, other]),
        }
    }

    pub fn or(self, other: TagQuery) -> Self {
        match self {
            Self::Or(mut queries) => {
                queries.push(other);
                Self::Or(queries)
            }
            query => Self::Or(vec![query, other]),
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Self::Not(Box::new(self))
    }

    pub fn matches(&self, tags: &RecordTags) -> bool {
        match self {
            Self::Eq(name, value) => tags.get(name) == Some(value.as_str()),
            Self::And(queries) => queries.iter().all(|q| q.matches(tags)),
            Self::Or(queries) => queries.iter().any(|q| q.matches(tags)),
            Self::Not(query) => !query.matches(tags),
        }
    }
}

impl fmt::Display for TagQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join(f: &mut fmt::Formatter<'_>, op: &str, queries: &[TagQuery]) -> fmt::Result {
            write!(f, "{op}(")?;
            for (i, query) in queries.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{query}")?;
            }
            write!(f, ")")
        }

        match self {
            Self::Eq(name, value) => write!(f, "{name}={value}"),
            Self::And(queries) => join(f, "and", queries),
            Self::Or(queries) => join(f, "or", queries),
            Self::Not(query) => write!(f, "not({query})"),
        }
    }
}
