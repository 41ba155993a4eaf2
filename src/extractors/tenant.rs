//! Extract tenant id from request headers (`X-Tenant`, legacy `X-Organization`).

use crate::config::OrganizationSettings;
use crate::context;
use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};
use std::sync::Arc;

/// Primary header naming the tenant.
pub const TENANT_HEADER: &str = "X-Tenant";
/// Legacy header still sent by older clients; read only when `X-Tenant` is absent or blank.
pub const ORGANIZATION_HEADER_FALLBACK: &str = "X-Organization";

/// Tenant id from `X-Tenant`, falling back to `X-Organization`. Trimmed; blank or non-UTF-8 is `None`.
pub fn tenant_id_from_headers(headers: &HeaderMap) -> Option<String> {
    header_value(headers, TENANT_HEADER).or_else(|| header_value(headers, ORGANIZATION_HEADER_FALLBACK))
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Extractor for the tenant id the client asked for (whether or not it is configured).
#[derive(Clone, Debug)]
pub struct TenantId(pub Option<String>);

#[async_trait]
impl<S> FromRequestParts<S> for TenantId
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(TenantId(tenant_id_from_headers(&parts.headers)))
    }
}

/// Extractor for the organization bound by the tenant middleware; `None` in simple mode.
#[derive(Clone, Debug)]
pub struct CurrentOrganization(pub Option<Arc<OrganizationSettings>>);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentOrganization
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(_parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(CurrentOrganization(context::get()))
    }
}
