use std::collections::HashMap;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct MarkdownDocument {
    pub path: String,
    pub content: String,
}

impl MarkdownDocument {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Per-concept counts for a single document, keyed by the concept text
/// exactly as supplied.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DocumentAnalysis {
    pub path: String,
    pub counts: HashMap<String, usize>,
}

impl DocumentAnalysis {
    pub fn count_for(&self, concept: &str) -> usize {
        self.counts.get(concept).copied().unwrap_or(0)
    }
}

/// Result of one analysis run. Documents keep discovery order, concepts
/// keep input order; aggregate totals are derived, not stored.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AnalysisReport {
    pub concepts: Vec<String>,
    pub documents: Vec<DocumentAnalysis>,
    pub generated_at: u64,
}

impl AnalysisReport {
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Total occurrences of one concept across all documents.
    pub fn total_for(&self, concept: &str) -> usize {
        self.documents.iter().map(|d| d.count_for(concept)).sum()
    }

    /// Aggregate totals in concept input order.
    pub fn totals(&self) -> Vec<(String, usize)> {
        self.concepts
            .iter()
            .map(|c| (c.clone(), self.total_for(c)))
            .collect()
    }
}
