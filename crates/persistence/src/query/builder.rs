//! Query assembly pipeline.
//!
//! [`VariantQueryBuilder::build`] combines, in order:
//!
//! 1. the base clause: identifier equality or the region OR-group,
//! 2. consequence-type codes (`annot.ct.so IN {codes}`),
//! 3. the MAF, PolyPhen and SIFT thresholds,
//! 4. study membership (`files.sid IN {studies}`),
//!
//! then attaches the fixed coordinate sort and the requested page. Assembly
//! is all-or-nothing: the first failing step aborts with its error and no
//! query is produced.

use crate::error::{QueryError, QueryResult};
use crate::types::{
    DEFAULT_PAGE_SIZE, FilterSpecification, Pagination, RelationalOperator, SearchTarget,
    VariantFilters, fields,
};

use super::VariantQuery;
use super::predicate::Predicate;
use super::region::build_overlap_predicate;
use super::relational::build_relational_predicate;

/// Builds [`VariantQuery`] values from filter specifications.
#[derive(Debug, Clone, Copy)]
pub struct VariantQueryBuilder {
    default_page_size: u32,
}

impl Default for VariantQueryBuilder {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl VariantQueryBuilder {
    /// Creates a builder with the default page size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the page size used when a specification requests no page.
    pub fn with_default_page_size(mut self, size: u32) -> Self {
        self.default_page_size = size;
        self
    }

    /// Assembles the query for a filter specification.
    pub fn build(&self, spec: &FilterSpecification) -> QueryResult<VariantQuery> {
        let mut clauses = vec![base_predicate(&spec.target)?];
        clauses.extend(filter_clauses(&spec.filters)?);

        let pagination = spec
            .pagination
            .unwrap_or_else(|| Pagination::first(self.default_page_size));
        if pagination.size() == 0 {
            return Err(QueryError::invalid_argument("page size must be positive"));
        }

        tracing::debug!(
            clauses = clauses.len(),
            page = pagination.page(),
            size = pagination.size(),
            "Assembled variant query"
        );

        Ok(VariantQuery::new(clauses, pagination))
    }
}

fn base_predicate(target: &SearchTarget) -> QueryResult<Predicate> {
    match target {
        SearchTarget::ById(id) => Ok(Predicate::eq(fields::IDS, id.as_str())),
        SearchTarget::ByRegions(regions) => build_overlap_predicate(regions),
    }
}

/// Builds the optional clauses of a filter set, in application order.
pub fn filter_clauses(filters: &VariantFilters) -> QueryResult<Vec<Predicate>> {
    let mut clauses = Vec::new();

    if !filters.consequence_types.is_empty() {
        let codes = filters
            .consequence_types
            .iter()
            .map(String::as_str)
            .map(decode_consequence_type)
            .collect::<QueryResult<Vec<u32>>>()?;
        clauses.push(Predicate::is_in(fields::CONSEQUENCE_TYPE_SO, codes));
    }

    for (score, filter) in filters.score_filters() {
        let Some(value) = filter.value else {
            continue;
        };
        if !value.is_finite() {
            return Err(QueryError::invalid_argument(format!(
                "threshold for '{}' must be a finite number, got {}",
                score.field_name(),
                value
            )));
        }
        if filter.operator == RelationalOperator::None {
            return Err(QueryError::IllegalOperator {
                field: score.field_name().to_string(),
            });
        }
        clauses.push(build_relational_predicate(
            score.field_name(),
            filter.operator,
            value,
        )?);
    }

    if !filters.studies.is_empty() {
        clauses.push(Predicate::is_in(
            fields::STUDY_ID,
            filters.studies.iter().map(String::as_str),
        ));
    }

    Ok(clauses)
}

/// Extracts the Sequence Ontology code embedded in a consequence-type label.
///
/// Every non-digit character is dropped and the remaining digits are read as
/// one number, so `SO:0001583` decodes to `1583`.
pub fn decode_consequence_type(label: &str) -> QueryResult<u32> {
    let digits: String = label.chars().filter(char::is_ascii_digit).collect();
    digits.parse().map_err(|_| QueryError::ParseError {
        label: label.to_string(),
    })
}
