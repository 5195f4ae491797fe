//! CLI plumbing for the concept analyzer: document discovery, concept list
//! assembly and report rendering. The analysis itself lives in
//! `concept-engine`.

pub mod concepts;
pub mod report;
pub mod scan;
