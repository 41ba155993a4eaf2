//! Knowledge base boundary: the store trait agents retrieve from, the tenant-scoped
//! retrieval filter, and the rules uploaded documents must pass.

use crate::config::ProfileCategory;
use crate::context;
use crate::error::KnowledgeError;
use async_trait::async_trait;
use serde::Serialize;
use std::path::Path;
use tokio::sync::RwLock;

/// Extensions the ingestion readers understand.
pub const ALLOWED_EXTENSIONS: &[&str] = &[".pdf", ".docx", ".md", ".txt", ".csv"];
pub const MAX_FILE_SIZE_BYTES: usize = 15 * 1024 * 1024;
pub const MAX_FILES: usize = 5;

/// Restricts retrieval to an allowed set of document ids. `None` means unrestricted (simple mode).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct KnowledgeFilter {
    pub allowed_doc_ids: Option<Vec<String>>,
}

impl KnowledgeFilter {
    pub fn unrestricted() -> Self {
        KnowledgeFilter::default()
    }

    /// Filter for the current request: the bound tenant's general + category ids,
    /// or unrestricted when no tenant is bound.
    pub fn for_category(category: ProfileCategory) -> Self {
        KnowledgeFilter {
            allowed_doc_ids: context::get().map(|org| org.resolve_document_ids(Some(category))),
        }
    }

    pub fn allows(&self, doc_id: &str) -> bool {
        match &self.allowed_doc_ids {
            None => true,
            Some(ids) => ids.iter().any(|id| id == doc_id),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct KnowledgeHit {
    pub doc_id: String,
    pub name: String,
    pub snippet: String,
}

/// A validated upload ready for ingestion.
#[derive(Clone, Debug)]
pub struct UploadedDocument {
    pub filename: String,
    pub content: Vec<u8>,
}

/// Vector/knowledge store used by agents. Chunking, embedding and persistence live behind it.
#[async_trait]
pub trait KnowledgeStore: Send + Sync {
    /// Ingest a document and return its id.
    async fn insert(&self, doc: UploadedDocument) -> Result<String, KnowledgeError>;

    async fn search(&self, query: &str, filter: &KnowledgeFilter, limit: usize) -> Result<Vec<KnowledgeHit>, KnowledgeError>;
}

/// Check an upload against the allowed extensions and size limit.
pub fn validate_upload(filename: &str, size: usize) -> Result<(), KnowledgeError> {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
        .unwrap_or_default();
    if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        return Err(KnowledgeError::Rejected(format!(
            "file type not allowed; use: {}",
            ALLOWED_EXTENSIONS.join(", ")
        )));
    }
    if size > MAX_FILE_SIZE_BYTES {
        return Err(KnowledgeError::Rejected(format!(
            "file larger than {} MB",
            MAX_FILE_SIZE_BYTES / (1024 * 1024)
        )));
    }
    Ok(())
}

/// In-process store doing case-insensitive substring search over document text.
/// Used by the server when no external store is wired in, and by tests.
#[derive(Default)]
pub struct MemoryKnowledgeStore {
    docs: RwLock<Vec<StoredDocument>>,
}

struct StoredDocument {
    id: String,
    name: String,
    text: String,
}

impl MemoryKnowledgeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a document under a fixed id (tenants reference ids in `important_doc_ids`).
    pub async fn insert_with_id(&self, id: &str, name: &str, text: &str) {
        self.docs.write().await.push(StoredDocument {
            id: id.to_string(),
            name: name.to_string(),
            text: text.to_string(),
        });
    }

    pub async fn len(&self) -> usize {
        self.docs.read().await.len()
    }
}

#[async_trait]
impl KnowledgeStore for MemoryKnowledgeStore {
    async fn insert(&self, doc: UploadedDocument) -> Result<String, KnowledgeError> {
        let text = String::from_utf8_lossy(&doc.content).into_owned();
        let mut docs = self.docs.write().await;
        let id = format!("doc-{}", docs.len() + 1);
        docs.push(StoredDocument {
            id: id.clone(),
            name: doc.filename,
            text,
        });
        Ok(id)
    }

    async fn search(&self, query: &str, filter: &KnowledgeFilter, limit: usize) -> Result<Vec<KnowledgeHit>, KnowledgeError> {
        let needle = query.to_lowercase();
        let docs = self.docs.read().await;
        Ok(docs
            .iter()
            .filter(|d| filter.allows(&d.id))
            .filter(|d| d.text.to_lowercase().contains(&needle))
            .take(limit)
            .map(|d| KnowledgeHit {
                doc_id: d.id.clone(),
                name: d.name.clone(),
                snippet: d.text.chars().take(200).collect(),
            })
            .collect())
    }
}
