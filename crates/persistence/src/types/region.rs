//! Genomic regions used as search windows.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{QueryError, QueryResult};

/// `chr` or `chr:start-end`.
static REGION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^:,\s]+)(?::(\d+)-(\d+))?$").expect("region pattern is valid")
});

/// A genomic window on one chromosome.
///
/// Coordinates are 1-based and both ends are inclusive. The constructor
/// enforces `start <= end`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Region {
    chromosome: String,
    start: i64,
    end: i64,
}

impl Region {
    /// Creates a region, rejecting windows whose start lies after their end.
    pub fn new(chromosome: impl Into<String>, start: i64, end: i64) -> QueryResult<Self> {
        let chromosome = chromosome.into();
        if chromosome.is_empty() {
            return Err(QueryError::invalid_argument("region chromosome is empty"));
        }
        if start > end {
            return Err(QueryError::invalid_argument(format!(
                "region {}:{}-{} starts after it ends",
                chromosome, start, end
            )));
        }
        Ok(Self {
            chromosome,
            start,
            end,
        })
    }

    /// Creates a region spanning a whole chromosome.
    pub fn whole_chromosome(chromosome: impl Into<String>) -> QueryResult<Self> {
        Self::new(chromosome, 1, i64::MAX)
    }

    /// Returns the chromosome name.
    pub fn chromosome(&self) -> &str {
        &self.chromosome
    }

    /// Returns the inclusive start coordinate.
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Returns the inclusive end coordinate.
    pub fn end(&self) -> i64 {
        self.end
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == 1 && self.end == i64::MAX {
            write!(f, "{}", self.chromosome)
        } else {
            write!(f, "{}:{}-{}", self.chromosome, self.start, self.end)
        }
    }
}

impl FromStr for Region {
    type Err = QueryError;

    /// Parses `chr:start-end` or a bare chromosome name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = REGION_PATTERN
            .captures(s.trim())
            .ok_or_else(|| QueryError::invalid_argument(format!("malformed region '{}'", s)))?;

        let chromosome = &caps[1];
        match (caps.get(2), caps.get(3)) {
            (Some(start), Some(end)) => {
                let start = parse_coordinate(start.as_str(), s)?;
                let end = parse_coordinate(end.as_str(), s)?;
                Self::new(chromosome, start, end)
            }
            _ => Self::whole_chromosome(chromosome),
        }
    }
}

fn parse_coordinate(raw: &str, region: &str) -> QueryResult<i64> {
    raw.parse()
        .map_err(|_| QueryError::invalid_argument(format!("malformed region '{}'", region)))
}

/// Parses a comma-separated list of regions such as `1:100-200,X:5-10`.
pub fn parse_regions(list: &str) -> QueryResult<Vec<Region>> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Region::from_str)
        .collect()
}
