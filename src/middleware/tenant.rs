//! Tenant resolution middleware
//!
//! Reads the tenant id from `X-Tenant` (or legacy `X-Organization`), looks it up in
//! the [`ConfigStore`] and binds the result into the request context for the whole
//! downstream call. Unknown or missing tenants are not errors: the request runs in
//! simple mode with environment-level provider settings.
//!
//! The context is cleared when the downstream future finishes, fails, panics or is
//! dropped by a cancelled connection.
//!
//! # Usage
//!
//! ```rust,no_run
//! use agent_os::middleware::tenant_resolution_middleware;
//! use agent_os::ConfigStore;
//! use axum::{middleware, routing::get, Router};
//! use std::sync::Arc;
//!
//! # async fn handler() -> &'static str { "" }
//! let store = Arc::new(ConfigStore::load());
//! let app: Router = Router::new()
//!     .route("/", get(handler))
//!     .layer(middleware::from_fn_with_state(store, tenant_resolution_middleware));
//! ```

use crate::config::OrganizationSettings;
use crate::context::{self, ClearOnDrop};
use crate::extractors::tenant_id_from_headers;
use crate::tenant::ConfigStore;
use tracing::Instrument;
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Why a request runs without a tenant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimpleModeReason {
    /// Neither header was supplied (or both were blank).
    NoTenantHeader,
    /// A tenant id was supplied but is not configured.
    UnknownTenant(String),
}

/// Outcome of resolving the tenant for one request. Also inserted into request extensions.
#[derive(Clone, Debug)]
pub enum TenantResolution {
    Bound(Arc<OrganizationSettings>),
    SimpleMode(SimpleModeReason),
}

impl TenantResolution {
    pub fn organization(&self) -> Option<Arc<OrganizationSettings>> {
        match self {
            TenantResolution::Bound(org) => Some(org.clone()),
            TenantResolution::SimpleMode(_) => None,
        }
    }

    pub fn is_bound(&self) -> bool {
        matches!(self, TenantResolution::Bound(_))
    }
}

/// Resolve the tenant for a request from its headers. Pure lookup, no side effects.
pub fn resolve_tenant(store: &ConfigStore, headers: &HeaderMap) -> TenantResolution {
    let Some(tenant_id) = tenant_id_from_headers(headers) else {
        return TenantResolution::SimpleMode(SimpleModeReason::NoTenantHeader);
    };
    match store.get(&tenant_id) {
        Some(org) => TenantResolution::Bound(org),
        None => TenantResolution::SimpleMode(SimpleModeReason::UnknownTenant(tenant_id)),
    }
}

/// Axum middleware binding the request's organization into [`context`].
///
/// The downstream call runs inside a `request` span whose `tenant` field holds the bound tenant.
///
/// Use with `axum::middleware::from_fn_with_state(Arc<ConfigStore>, tenant_resolution_middleware)`.
pub async fn tenant_resolution_middleware(
    State(store): State<Arc<ConfigStore>>,
    mut req: Request,
    next: Next,
) -> Response {
    let span = tracing::info_span!(
        "request",
        method = %req.method(),
        path = %req.uri().path(),
        tenant = tracing::field::Empty,
    );
    let resolution = resolve_tenant(&store, req.headers());
    match &resolution {
        TenantResolution::Bound(org) => {
            span.record("tenant", org.name.as_str());
            tracing::debug!(parent: &span, tenant = %org.name, "tenant bound");
        }
        TenantResolution::SimpleMode(SimpleModeReason::UnknownTenant(id)) => {
            tracing::warn!(parent: &span, tenant = %id, "tenant not configured, using simple mode");
        }
        TenantResolution::SimpleMode(SimpleModeReason::NoTenantHeader) => {
            tracing::trace!(parent: &span, "no tenant header, using simple mode");
        }
    }
    let org = resolution.organization();
    req.extensions_mut().insert(resolution);

    context::scope(async move {
        let _clear = ClearOnDrop::new();
        context::set(org);
        next.run(req).await
    })
    .instrument(span)
    .await
}
