//! Predicate trees over stored variant documents.
//!
//! A [`Predicate`] is a backend-neutral description of a document filter. It
//! renders to a MongoDB filter document with [`Predicate::to_document`] and can
//! be evaluated directly against a JSON document with [`Predicate::matches`],
//! using the same dotted-path and array semantics a document store applies.

use std::cmp::Ordering;

use serde_json::{Map, Number, Value, json};

/// A literal value a field is compared against.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A string literal.
    Text(String),
    /// An integer literal.
    Integer(i64),
    /// A floating-point literal.
    Float(f64),
}

impl Operand {
    /// Renders the operand as a JSON value.
    pub fn to_json(&self) -> Value {
        match self {
            Operand::Text(s) => Value::String(s.clone()),
            Operand::Integer(i) => Value::Number(Number::from(*i)),
            Operand::Float(f) => json!(f),
        }
    }

    /// Compares a stored value against this operand.
    ///
    /// Strings compare with strings, numbers with numbers. Any other pairing is
    /// incomparable and never satisfies a predicate.
    fn compare_stored(&self, stored: &Value) -> Option<Ordering> {
        match (stored, self) {
            (Value::String(s), Operand::Text(t)) => Some(s.as_str().cmp(t.as_str())),
            (Value::Number(n), Operand::Integer(i)) => match n.as_i64() {
                Some(stored) => Some(stored.cmp(i)),
                None => n.as_f64()?.partial_cmp(&(*i as f64)),
            },
            (Value::Number(n), Operand::Float(f)) => n.as_f64()?.partial_cmp(f),
            _ => None,
        }
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::Text(value.to_string())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Operand::Text(value)
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Integer(value)
    }
}

impl From<u32> for Operand {
    fn from(value: u32) -> Self {
        Operand::Integer(i64::from(value))
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Float(value)
    }
}

/// An equality or range comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// `==`
    Eq,
    /// `>`
    Gt,
    /// `>=`
    Gte,
    /// `<`
    Lt,
    /// `<=`
    Lte,
}

impl Comparison {
    /// Returns the MongoDB query operator for this comparison.
    pub fn operator(&self) -> &'static str {
        match self {
            Comparison::Eq => "$eq",
            Comparison::Gt => "$gt",
            Comparison::Gte => "$gte",
            Comparison::Lt => "$lt",
            Comparison::Lte => "$lte",
        }
    }

    /// Returns true if `stored <op> operand` holds for the given ordering of
    /// stored value relative to operand.
    fn holds(&self, ordering: Ordering) -> bool {
        match self {
            Comparison::Eq => ordering == Ordering::Equal,
            Comparison::Gt => ordering == Ordering::Greater,
            Comparison::Gte => ordering != Ordering::Less,
            Comparison::Lt => ordering == Ordering::Less,
            Comparison::Lte => ordering != Ordering::Greater,
        }
    }
}

/// A filter over stored variant documents.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// `field <comparison> value`
    Compare {
        /// Dotted field path.
        field: String,
        /// The comparison to apply.
        comparison: Comparison,
        /// The literal compared against.
        value: Operand,
    },
    /// `field` equals any of `values`.
    In {
        /// Dotted field path.
        field: String,
        /// Accepted values.
        values: Vec<Operand>,
    },
    /// All children match.
    And(Vec<Predicate>),
    /// At least one child matches.
    Or(Vec<Predicate>),
}

impl Predicate {
    /// Builds a comparison predicate.
    pub fn compare(
        field: impl Into<String>,
        comparison: Comparison,
        value: impl Into<Operand>,
    ) -> Self {
        Predicate::Compare {
            field: field.into(),
            comparison,
            value: value.into(),
        }
    }

    /// `field == value`
    pub fn eq(field: impl Into<String>, value: impl Into<Operand>) -> Self {
        Self::compare(field, Comparison::Eq, value)
    }

    /// `field > value`
    pub fn gt(field: impl Into<String>, value: impl Into<Operand>) -> Self {
        Self::compare(field, Comparison::Gt, value)
    }

    /// `field >= value`
    pub fn gte(field: impl Into<String>, value: impl Into<Operand>) -> Self {
        Self::compare(field, Comparison::Gte, value)
    }

    /// `field < value`
    pub fn lt(field: impl Into<String>, value: impl Into<Operand>) -> Self {
        Self::compare(field, Comparison::Lt, value)
    }

    /// `field <= value`
    pub fn lte(field: impl Into<String>, value: impl Into<Operand>) -> Self {
        Self::compare(field, Comparison::Lte, value)
    }

    /// `field` is one of `values`.
    pub fn is_in<I, V>(field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Operand>,
    {
        Predicate::In {
            field: field.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Renders the predicate as a MongoDB filter document.
    ///
    /// An empty `And` renders as `{}`, which matches every document.
    pub fn to_document(&self) -> Value {
        match self {
            Predicate::Compare {
                field,
                comparison: Comparison::Eq,
                value,
            } => single_field(field, value.to_json()),
            Predicate::Compare {
                field,
                comparison,
                value,
            } => single_field(field, single_field(comparison.operator(), value.to_json())),
            Predicate::In { field, values } => single_field(
                field,
                json!({ "$in": values.iter().map(Operand::to_json).collect::<Vec<_>>() }),
            ),
            Predicate::And(children) if children.is_empty() => json!({}),
            Predicate::And(children) => json!({
                "$and": children.iter().map(Predicate::to_document).collect::<Vec<_>>()
            }),
            Predicate::Or(children) => json!({
                "$or": children.iter().map(Predicate::to_document).collect::<Vec<_>>()
            }),
        }
    }

    /// Evaluates the predicate against a stored document.
    ///
    /// A field path that traverses arrays matches when any reached value
    /// matches, and an array-valued field matches when any element matches.
    pub fn matches(&self, document: &Value) -> bool {
        match self {
            Predicate::Compare {
                field,
                comparison,
                value,
            } => resolve_path(document, field).into_iter().any(|stored| {
                value
                    .compare_stored(stored)
                    .is_some_and(|ordering| comparison.holds(ordering))
            }),
            Predicate::In { field, values } => {
                resolve_path(document, field).into_iter().any(|stored| {
                    values
                        .iter()
                        .any(|v| v.compare_stored(stored) == Some(Ordering::Equal))
                })
            }
            Predicate::And(children) => children.iter().all(|c| c.matches(document)),
            Predicate::Or(children) => children.iter().any(|c| c.matches(document)),
        }
    }
}

fn single_field(key: &str, value: Value) -> Value {
    let mut map = Map::new();
    map.insert(key.to_string(), value);
    Value::Object(map)
}

/// Collects every value reachable through a dotted path, descending into
/// arrays at each step and flattening arrays at the leaf.
pub(crate) fn resolve_path<'a>(document: &'a Value, path: &str) -> Vec<&'a Value> {
    let mut current = vec![document];
    for segment in path.split('.') {
        let mut next = Vec::new();
        for value in current {
            collect_field(value, segment, &mut next);
        }
        current = next;
    }

    let mut leaves = Vec::with_capacity(current.len());
    for value in current {
        match value {
            Value::Array(items) => leaves.extend(items.iter()),
            other => leaves.push(other),
        }
    }
    leaves
}

fn collect_field<'a>(value: &'a Value, segment: &str, out: &mut Vec<&'a Value>) {
    match value {
        Value::Object(map) => {
            if let Some(v) = map.get(segment) {
                out.push(v);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_field(item, segment, out);
            }
        }
        _ => {}
    }
}
