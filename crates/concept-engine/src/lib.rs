//! Concept frequency analysis for markdown documents
//!
//! This crate provides the pure analysis core: markdown-to-plain-text
//! normalization (`normalize`) and whole-word concept counting
//! (`count_concepts`), composed by `ConceptEngine` into per-document and
//! per-run results. File discovery, flag parsing and rendering live in the
//! CLI crate.

pub mod count;
pub mod error;
pub mod normalize;
pub mod types;

pub use count::{count_concepts, whole_word_matcher};
pub use error::EngineError;
pub use normalize::normalize;
pub use types::{AnalysisReport, DocumentAnalysis, MarkdownDocument};

use std::collections::HashMap;

/// Analysis entry point. Holds the single piece of configuration (case
/// sensitivity); everything else is a pure function of the inputs.
pub struct ConceptEngine {
    case_sensitive: bool,
}

impl ConceptEngine {
    pub fn new(case_sensitive: bool) -> Self {
        Self { case_sensitive }
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Count concepts in already-plain text (for testing).
    pub fn analyze_text(
        &self,
        text: &str,
        concepts: &[String],
    ) -> Result<HashMap<String, usize>, EngineError> {
        count_concepts(text, concepts, self.case_sensitive)
    }

    /// Normalize one document and count every concept in it.
    pub fn analyze_document(
        &self,
        document: &MarkdownDocument,
        concepts: &[String],
    ) -> Result<DocumentAnalysis, EngineError> {
        let text = normalize(&document.content);
        let counts = count_concepts(&text, concepts, self.case_sensitive)?;
        Ok(DocumentAnalysis {
            path: document.path.clone(),
            counts,
        })
    }

    /// Analyze a batch of documents, preserving input order. An empty batch
    /// yields an empty report, not an error.
    pub fn analyze_documents(
        &self,
        documents: &[MarkdownDocument],
        concepts: &[String],
    ) -> Result<AnalysisReport, EngineError> {
        let mut analyses = Vec::with_capacity(documents.len());
        for document in documents {
            analyses.push(self.analyze_document(document, concepts)?);
        }

        Ok(AnalysisReport {
            concepts: concepts.to_vec(),
            documents: analyses,
            generated_at: chrono::Utc::now().timestamp() as u64,
        })
    }
}

impl Default for ConceptEngine {
    fn default() -> Self {
        Self::new(false)
    }
}
