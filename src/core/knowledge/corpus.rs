//! Knowledge Corpus Loading
//!
//! Enumerates a directory of plain-text documents into `KnowledgeDocument`s.
//! The corpus is read once at startup; a reload replaces the whole set,
//! never mutating documents in place.

use std::path::Path;

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

/// A single source document from the knowledge base directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeDocument {
    pub id: u32,
    /// Provenance label returned with guardian answers ("phishing.txt" loads
    /// as "phishing").
    pub source_label: String,
    pub raw_text: String,
}

/// Load all `.txt` documents directly under `dir`, sorted by file name.
///
/// A missing directory or unreadable file is skipped with a warning; an
/// empty result is the caller's concern (the index build reports it).
pub fn load_corpus(dir: &Path) -> Vec<KnowledgeDocument> {
    let mut docs = Vec::new();

    if !dir.is_dir() {
        tracing::warn!("Knowledge base directory {} does not exist", dir.display());
        return docs;
    }

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("txt") {
            continue;
        }
        let source_label = match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => stem.to_string(),
            None => continue,
        };

        match std::fs::read_to_string(path) {
            Ok(raw_text) => {
                docs.push(KnowledgeDocument {
                    id: docs.len() as u32,
                    source_label,
                    raw_text,
                });
            }
            Err(e) => {
                tracing::warn!("Skipping unreadable corpus file {}: {}", path.display(), e);
            }
        }
    }

    tracing::info!("Loaded {} documents from {}", docs.len(), dir.display());
    docs
}
