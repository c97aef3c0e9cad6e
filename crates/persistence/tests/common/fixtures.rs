//! Test fixtures for variant search testing.
//!
//! Builds variant documents in the stored layout: identifiers under `ids`,
//! study entries under `files`, statistics under `st` and consequence
//! annotations under `annot.ct`.

use std::sync::Arc;

use serde_json::{Value, json};

use variant_persistence::backends::memory::MemoryExecutor;

/// A stored variant for testing.
#[derive(Debug, Clone)]
pub struct VariantFixture {
    /// Variant identifiers.
    pub ids: Vec<String>,
    /// Chromosome name.
    pub chromosome: String,
    /// Start coordinate.
    pub start: i64,
    /// End coordinate.
    pub end: i64,
    /// Studies the variant was seen in.
    pub studies: Vec<String>,
    /// Sequence Ontology codes of the consequence annotations.
    pub consequence_codes: Vec<u32>,
    /// Minor allele frequency.
    pub maf: Option<f64>,
    /// PolyPhen score.
    pub polyphen: Option<f64>,
    /// SIFT score.
    pub sift: Option<f64>,
}

impl VariantFixture {
    /// Creates a single-base variant.
    pub fn new(chromosome: &str, start: i64) -> Self {
        Self::spanning(chromosome, start, start)
    }

    /// Creates a variant covering `[start, end]`.
    pub fn spanning(chromosome: &str, start: i64, end: i64) -> Self {
        Self {
            ids: vec![format!("{}_{}", chromosome, start)],
            chromosome: chromosome.to_string(),
            start,
            end,
            studies: vec![],
            consequence_codes: vec![],
            maf: None,
            polyphen: None,
            sift: None,
        }
    }

    /// Sets the identifiers.
    pub fn with_ids(mut self, ids: &[&str]) -> Self {
        self.ids = ids.iter().map(|id| id.to_string()).collect();
        self
    }

    /// Sets the studies.
    pub fn with_studies(mut self, studies: &[&str]) -> Self {
        self.studies = studies.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Sets the consequence codes.
    pub fn with_consequences(mut self, codes: &[u32]) -> Self {
        self.consequence_codes = codes.to_vec();
        self
    }

    /// Sets the minor allele frequency.
    pub fn with_maf(mut self, maf: f64) -> Self {
        self.maf = Some(maf);
        self
    }

    /// Sets the PolyPhen score.
    pub fn with_polyphen(mut self, score: f64) -> Self {
        self.polyphen = Some(score);
        self
    }

    /// Sets the SIFT score.
    pub fn with_sift(mut self, score: f64) -> Self {
        self.sift = Some(score);
        self
    }

    /// Converts to the stored document layout.
    pub fn to_json(&self) -> Value {
        let mut annotation = json!({ "so": self.consequence_codes });
        if let Some(score) = self.polyphen {
            annotation["polyphen"] = json!({ "sc": score });
        }
        if let Some(score) = self.sift {
            annotation["sift"] = json!({ "sc": score });
        }

        let mut document = json!({
            "ids": self.ids,
            "chr": self.chromosome,
            "start": self.start,
            "end": self.end,
            "files": self.studies.iter().map(|sid| json!({ "sid": sid, "fid": "file1" })).collect::<Vec<_>>(),
            "annot": { "ct": [annotation] }
        });
        if let Some(maf) = self.maf {
            document["st"] = json!([{ "maf": maf }]);
        }
        document
    }
}

/// Creates an in-memory executor holding the given variants.
pub fn executor_with(variants: &[VariantFixture]) -> Arc<MemoryExecutor> {
    let executor = MemoryExecutor::with_documents(variants.iter().map(VariantFixture::to_json))
        .expect("Failed to load fixtures");
    Arc::new(executor)
}

/// Creates `count` consecutive single-base variants on chromosome 1,
/// starting at `first_start`.
pub fn consecutive_variants(count: i64, first_start: i64) -> Vec<VariantFixture> {
    (0..count)
        .map(|i| VariantFixture::new("1", first_start + i))
        .collect()
}
