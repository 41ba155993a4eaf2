//! Knowledge base: multipart upload and tenant-scoped search.

use crate::config::ProfileCategory;
use crate::error::AppError;
use crate::knowledge::{validate_upload, KnowledgeFilter, UploadedDocument, MAX_FILES};
use crate::profile::create_profile_by_name;
use crate::response::{data_body, list_body};
use crate::state::AppState;
use axum::extract::{rejection::QueryRejection, Multipart, Query, State};
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

const DEFAULT_SEARCH_LIMIT: usize = 10;
const MAX_SEARCH_LIMIT: usize = 50;

#[derive(Serialize)]
pub struct DocumentStatus {
    pub filename: String,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Serialize)]
pub struct UploadResult {
    pub ingested: usize,
    pub documents: Vec<DocumentStatus>,
}

/// POST /api/v1/knowledge/upload: multipart form, one or more file fields.
/// Rejected files are reported per document; the request only fails when no file or too many files arrive.
pub async fn upload_documents(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut files = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        if files.len() == MAX_FILES {
            return Err(AppError::BadRequest(format!("at most {} files per request", MAX_FILES)));
        }
        let data = field.bytes().await.map_err(|e| AppError::BadRequest(e.to_string()))?;
        files.push(UploadedDocument {
            filename: if filename.is_empty() { "unnamed".into() } else { filename },
            content: data.to_vec(),
        });
    }
    if files.is_empty() {
        return Err(AppError::BadRequest("no files uploaded".into()));
    }

    let mut ingested = 0;
    let mut documents = Vec::with_capacity(files.len());
    for doc in files {
        let filename = doc.filename.clone();
        if let Err(e) = validate_upload(&doc.filename, doc.content.len()) {
            documents.push(DocumentStatus {
                filename,
                status: "error",
                doc_id: None,
                message: Some(e.to_string()),
            });
            continue;
        }
        match state.knowledge.insert(doc).await {
            Ok(id) => {
                ingested += 1;
                tracing::info!(filename = %filename, doc_id = %id, "document ingested");
                documents.push(DocumentStatus {
                    filename,
                    status: "ok",
                    doc_id: Some(id),
                    message: None,
                });
            }
            Err(e) => {
                tracing::warn!(filename = %filename, error = %e, "document ingestion failed");
                documents.push(DocumentStatus {
                    filename,
                    status: "error",
                    doc_id: None,
                    message: Some(e.to_string()),
                });
            }
        }
    }
    Ok(data_body(UploadResult { ingested, documents }))
}

#[derive(Deserialize)]
pub struct SearchQuery {
    pub q: String,
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// GET /api/v1/knowledge/search?q=...&profile=...
/// Restricted to the tenant's important documents when a tenant is bound.
pub async fn search_knowledge(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let category = match query.profile.as_deref() {
        Some(name) => create_profile_by_name(name)?.document_category(),
        None => ProfileCategory::General,
    };
    let filter = KnowledgeFilter::for_category(category);
    let limit = query.limit.unwrap_or(DEFAULT_SEARCH_LIMIT).min(MAX_SEARCH_LIMIT);
    let hits = state.knowledge.search(&query.q, &filter, limit).await?;
    Ok(list_body(hits))
}
