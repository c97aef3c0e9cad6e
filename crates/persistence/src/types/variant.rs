//! Stored variant documents.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field names of the stored variant documents.
///
/// Nested fields use dotted paths, resolved through arrays the way a document
/// store resolves them.
pub mod fields {
    /// Identifier list (rs ids and similar).
    pub const IDS: &str = "ids";
    /// Chromosome name.
    pub const CHROMOSOME: &str = "chr";
    /// Start coordinate.
    pub const START: &str = "start";
    /// End coordinate.
    pub const END: &str = "end";
    /// Sequence Ontology code of each consequence type.
    pub const CONSEQUENCE_TYPE_SO: &str = "annot.ct.so";
    /// Minor allele frequency.
    pub const MAF: &str = "st.maf";
    /// PolyPhen score.
    pub const POLYPHEN_SCORE: &str = "annot.ct.polyphen.sc";
    /// SIFT score.
    pub const SIFT_SCORE: &str = "annot.ct.sift.sc";
    /// Study identifier of each source file.
    pub const STUDY_ID: &str = "files.sid";
}

/// A variant document as returned by a storage executor.
///
/// The document is opaque to query assembly; the accessors exist for callers
/// and executors that need the coordinate fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantRecord {
    document: Value,
}

impl VariantRecord {
    /// Wraps a stored document.
    pub fn new(document: Value) -> Self {
        Self { document }
    }

    /// Returns the raw document.
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Consumes the record, returning the raw document.
    pub fn into_document(self) -> Value {
        self.document
    }

    /// Returns the chromosome, if present.
    pub fn chromosome(&self) -> Option<&str> {
        self.document.get(fields::CHROMOSOME)?.as_str()
    }

    /// Returns the start coordinate, if present.
    pub fn start(&self) -> Option<i64> {
        self.document.get(fields::START)?.as_i64()
    }

    /// Returns the end coordinate, if present.
    pub fn end(&self) -> Option<i64> {
        self.document.get(fields::END)?.as_i64()
    }

    /// Returns the variant identifiers.
    pub fn ids(&self) -> Vec<&str> {
        match self.document.get(fields::IDS) {
            Some(Value::Array(ids)) => ids.iter().filter_map(Value::as_str).collect(),
            Some(Value::String(id)) => vec![id.as_str()],
            _ => Vec::new(),
        }
    }
}

impl From<Value> for VariantRecord {
    fn from(document: Value) -> Self {
        Self::new(document)
    }
}
