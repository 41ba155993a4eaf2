//! Which tenant the request runs as. Never exposes credentials.

use crate::config::DocumentIdSet;
use crate::extractors::{CurrentOrganization, TenantId};
use crate::response::data_body;
use axum::response::IntoResponse;
use serde::Serialize;

#[derive(Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum OrganizationView {
    Tenant {
        name: String,
        llm_endpoint: String,
        deployment: String,
        embedding_deployment: String,
        search_endpoint: String,
        index_name: String,
        doc_ids: DocumentIdSet,
    },
    Simple {
        /// Set when the client named a tenant that is not configured.
        #[serde(skip_serializing_if = "Option::is_none")]
        requested_tenant: Option<String>,
    },
}

/// GET /api/v1/organization
pub async fn current_organization(
    CurrentOrganization(org): CurrentOrganization,
    TenantId(requested): TenantId,
) -> impl IntoResponse {
    let view = match org {
        Some(org) => OrganizationView::Tenant {
            name: org.name.clone(),
            llm_endpoint: org.llm.endpoint.clone(),
            deployment: org.llm.deployment.clone(),
            embedding_deployment: org.llm.embedding_deployment.clone(),
            search_endpoint: org.search.endpoint.clone(),
            index_name: org.search.index_name.clone(),
            doc_ids: org.doc_ids.clone(),
        },
        None => OrganizationView::Simple {
            requested_tenant: requested,
        },
    };
    data_body(view)
}
