use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Failed to build matcher for concept '{concept}': {source}")]
    InvalidConcept {
        concept: String,
        #[source]
        source: regex::Error,
    },
}
