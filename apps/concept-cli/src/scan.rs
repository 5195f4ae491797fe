//! Markdown document discovery and loading
//!
//! A path argument is either one markdown file or a directory to walk
//! recursively. Traversal is sorted by file name so results are stable
//! across runs. Unreadable files are logged and skipped, never fatal.

use anyhow::Result;
use concept_engine::MarkdownDocument;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// File extensions treated as markdown (compared case-insensitively).
pub const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| MARKDOWN_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Load markdown documents from a file or directory, in discovery order.
pub fn load_documents(path: &Path) -> Result<Vec<MarkdownDocument>> {
    let mut documents = Vec::new();

    if path.is_file() {
        if is_markdown(path) {
            load_into(&mut documents, path);
        }
        return Ok(documents);
    }

    for entry in WalkDir::new(path)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if entry.file_type().is_file() && is_markdown(entry.path()) {
            load_into(&mut documents, entry.path());
        }
    }

    Ok(documents)
}

fn load_into(documents: &mut Vec<MarkdownDocument>, path: &Path) {
    match fs::read_to_string(path) {
        Ok(content) => {
            tracing::debug!("loaded {}", path.display());
            documents.push(MarkdownDocument::new(path.display().to_string(), content));
        }
        Err(err) => {
            tracing::warn!("skipping {}: {}", path.display(), err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_single_markdown_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("note.md");
        fs::write(&file, "# hello").unwrap();

        let docs = load_documents(&file).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].content, "# hello");
    }

    #[test]
    fn test_single_non_markdown_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("note.txt");
        fs::write(&file, "not markdown").unwrap();

        let docs = load_documents(&file).unwrap();
        assert!(docs.is_empty());
    }

    #[test]
    fn test_directory_walk_is_recursive_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.md"), "b").unwrap();
        fs::write(dir.path().join("skip.txt"), "skip").unwrap();
        let nested = dir.path().join("sub");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("a.markdown"), "a").unwrap();

        let docs = load_documents(dir.path()).unwrap();
        let contents: Vec<&str> = docs.iter().map(|d| d.content.as_str()).collect();
        assert_eq!(docs.len(), 2);
        assert!(contents.contains(&"a"));
        assert!(contents.contains(&"b"));
    }

    #[test]
    fn test_directory_walk_order_is_stable() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("z.md"), "z").unwrap();
        fs::write(dir.path().join("a.md"), "a").unwrap();
        fs::write(dir.path().join("m.md"), "m").unwrap();

        let first = load_documents(dir.path()).unwrap();
        let second = load_documents(dir.path()).unwrap();
        let order: Vec<&str> = first.iter().map(|d| d.content.as_str()).collect();

        assert_eq!(order, vec!["a", "m", "z"]);
        assert_eq!(first.len(), second.len());
        for (x, y) in first.iter().zip(second.iter()) {
            assert_eq!(x.path, y.path);
        }
    }

    #[test]
    fn test_empty_directory_is_empty_result() {
        let dir = tempfile::tempdir().unwrap();
        let docs = load_documents(dir.path()).unwrap();
        assert!(docs.is_empty());
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("NOTES.MD"), "shouting").unwrap();

        let docs = load_documents(dir.path()).unwrap();
        assert_eq!(docs.len(), 1);
    }
}
