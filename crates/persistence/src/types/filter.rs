//! Filter specification types for variant search.
//!
//! A [`FilterSpecification`] is the complete, immutable description of one
//! search request: what to look for ([`SearchTarget`]), which optional
//! filters narrow the result ([`VariantFilters`]), and which page to return.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QueryError;

use super::pagination::Pagination;
use super::region::Region;
use super::variant::fields;

/// Relational operator attached to a score filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RelationalOperator {
    /// No comparison. Only valid when the filter carries no value.
    #[default]
    None,
    /// `field == value`
    Eq,
    /// `field > value`
    Gt,
    /// `field < value`
    Lt,
    /// `field >= value`
    Gte,
    /// `field <= value`
    Lte,
}

impl fmt::Display for RelationalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RelationalOperator::None => "NONE",
            RelationalOperator::Eq => "EQ",
            RelationalOperator::Gt => "GT",
            RelationalOperator::Lt => "LT",
            RelationalOperator::Gte => "GTE",
            RelationalOperator::Lte => "LTE",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for RelationalOperator {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NONE" | "" => Ok(RelationalOperator::None),
            "EQ" | "=" | "==" => Ok(RelationalOperator::Eq),
            "GT" | ">" => Ok(RelationalOperator::Gt),
            "LT" | "<" => Ok(RelationalOperator::Lt),
            "GTE" | ">=" => Ok(RelationalOperator::Gte),
            "LTE" | "<=" => Ok(RelationalOperator::Lte),
            other => Err(QueryError::invalid_argument(format!(
                "unknown relational operator '{}'",
                other
            ))),
        }
    }
}

/// The score a [`ScoreFilter`] applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreField {
    /// Minor allele frequency from population statistics.
    AlleleFrequency,
    /// PolyPhen impact score from the consequence-type annotation.
    PolyphenScore,
    /// SIFT impact score from the consequence-type annotation.
    SiftScore,
}

impl ScoreField {
    /// Returns the stored document field the score lives in.
    pub fn field_name(&self) -> &'static str {
        match self {
            ScoreField::AlleleFrequency => fields::MAF,
            ScoreField::PolyphenScore => fields::POLYPHEN_SCORE,
            ScoreField::SiftScore => fields::SIFT_SCORE,
        }
    }
}

/// An optional threshold on one numeric score.
///
/// A filter without a value is not applied. A filter with a value must carry
/// an operator other than [`RelationalOperator::None`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreFilter {
    /// The comparison to apply.
    pub operator: RelationalOperator,
    /// The threshold, or `None` when the filter is absent.
    pub value: Option<f64>,
}

impl ScoreFilter {
    /// Creates a filter comparing the score against `value`.
    pub fn new(operator: RelationalOperator, value: f64) -> Self {
        Self {
            operator,
            value: Some(value),
        }
    }

    /// A filter that is not applied.
    pub fn absent() -> Self {
        Self::default()
    }

    /// Returns true if this filter has a value and must be applied.
    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }
}

/// Optional filters shared by every search target.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VariantFilters {
    /// Study identifiers; a variant must appear in at least one.
    pub studies: Vec<String>,
    /// Consequence-type labels such as `SO:0001583`.
    pub consequence_types: Vec<String>,
    /// Minor allele frequency threshold.
    pub maf: ScoreFilter,
    /// PolyPhen score threshold.
    pub polyphen_score: ScoreFilter,
    /// SIFT score threshold.
    pub sift_score: ScoreFilter,
}

impl VariantFilters {
    /// Creates an empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts results to the given studies.
    pub fn with_studies<I, S>(mut self, studies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.studies = studies.into_iter().map(Into::into).collect();
        self
    }

    /// Restricts results to the given consequence-type labels.
    pub fn with_consequence_types<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.consequence_types = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the minor allele frequency filter.
    pub fn with_maf(mut self, filter: ScoreFilter) -> Self {
        self.maf = filter;
        self
    }

    /// Sets the PolyPhen score filter.
    pub fn with_polyphen_score(mut self, filter: ScoreFilter) -> Self {
        self.polyphen_score = filter;
        self
    }

    /// Sets the SIFT score filter.
    pub fn with_sift_score(mut self, filter: ScoreFilter) -> Self {
        self.sift_score = filter;
        self
    }

    /// Returns the three score filters in application order.
    pub fn score_filters(&self) -> [(ScoreField, &ScoreFilter); 3] {
        [
            (ScoreField::AlleleFrequency, &self.maf),
            (ScoreField::PolyphenScore, &self.polyphen_score),
            (ScoreField::SiftScore, &self.sift_score),
        ]
    }
}

/// What a search looks for.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchTarget {
    /// Variants carrying this exact identifier.
    ById(String),
    /// Variants overlapping any of these regions.
    ByRegions(Vec<Region>),
}

/// The complete input of one variant search.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpecification {
    /// The search target.
    pub target: SearchTarget,
    /// Optional narrowing filters.
    pub filters: VariantFilters,
    /// Requested page; `None` means the first page of the default size.
    pub pagination: Option<Pagination>,
}

impl FilterSpecification {
    /// Creates a specification searching by identifier.
    pub fn by_id(id: impl Into<String>) -> Self {
        Self::new(SearchTarget::ById(id.into()))
    }

    /// Creates a specification searching by regions.
    pub fn by_regions(regions: Vec<Region>) -> Self {
        Self::new(SearchTarget::ByRegions(regions))
    }

    /// Creates a specification for the given target with no filters.
    pub fn new(target: SearchTarget) -> Self {
        Self {
            target,
            filters: VariantFilters::default(),
            pagination: None,
        }
    }

    /// Sets the narrowing filters.
    pub fn with_filters(mut self, filters: VariantFilters) -> Self {
        self.filters = filters;
        self
    }

    /// Sets the requested page.
    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }
}
