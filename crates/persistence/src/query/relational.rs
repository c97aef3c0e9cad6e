//! Relational predicates on numeric score fields.

use crate::error::{QueryError, QueryResult};
use crate::types::RelationalOperator;

use super::predicate::{Comparison, Predicate};

/// Maps a relational operator to its comparison.
///
/// [`RelationalOperator::None`] has no comparison and yields `None`.
pub fn comparison_for(operator: RelationalOperator) -> Option<Comparison> {
    match operator {
        RelationalOperator::Eq => Some(Comparison::Eq),
        RelationalOperator::Gt => Some(Comparison::Gt),
        RelationalOperator::Lt => Some(Comparison::Lt),
        RelationalOperator::Gte => Some(Comparison::Gte),
        RelationalOperator::Lte => Some(Comparison::Lte),
        RelationalOperator::None => None,
    }
}

/// Builds `field <operator> value`.
///
/// Calling this with [`RelationalOperator::None`] is a contract violation and
/// fails with `IllegalOperator`.
pub fn build_relational_predicate(
    field: &str,
    operator: RelationalOperator,
    value: f64,
) -> QueryResult<Predicate> {
    let comparison = comparison_for(operator).ok_or_else(|| QueryError::IllegalOperator {
        field: field.to_string(),
    })?;
    Ok(Predicate::compare(field, comparison, value))
}
