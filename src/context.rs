//! Organization bound to the current request.
//!
//! Backed by a tokio task-local, so each request future carries its own slot:
//! a tenant set while handling one request is never visible to another, even when
//! both are polled on the same worker thread. Code anywhere below the tenant
//! middleware reads it with [`get`] without threading a parameter through.
//!
//! `tokio::spawn` does not inherit task-locals; wrap spawned futures with [`inherit`].

use crate::config::OrganizationSettings;
use std::cell::RefCell;
use std::future::Future;
use std::sync::Arc;

tokio::task_local! {
    static CURRENT_ORGANIZATION: RefCell<Option<Arc<OrganizationSettings>>>;
}

/// Run `fut` with a fresh, empty organization slot.
pub async fn scope<F>(fut: F) -> F::Output
where
    F: Future,
{
    CURRENT_ORGANIZATION.scope(RefCell::new(None), fut).await
}

/// Run `fut` in a new slot pre-bound to the caller's current organization.
pub fn inherit<F>(fut: F) -> impl Future<Output = F::Output>
where
    F: Future,
{
    let current = get();
    CURRENT_ORGANIZATION.scope(RefCell::new(current), fut)
}

/// Bind (or unbind with `None`) the organization for the current request.
/// Returns `false` when called outside a [`scope`]; nothing is stored in that case.
pub fn set(org: Option<Arc<OrganizationSettings>>) -> bool {
    CURRENT_ORGANIZATION
        .try_with(|slot| {
            *slot.borrow_mut() = org;
        })
        .is_ok()
}

/// Organization bound to the current request, or `None` in simple mode / outside a scope.
pub fn get() -> Option<Arc<OrganizationSettings>> {
    CURRENT_ORGANIZATION
        .try_with(|slot| slot.borrow().clone())
        .ok()
        .flatten()
}

/// Unbind. Idempotent; a no-op outside a scope.
pub fn clear() {
    let _ = CURRENT_ORGANIZATION.try_with(|slot| slot.borrow_mut().take());
}

/// Clears the slot when dropped: on normal return, early return, panic unwind or
/// when the owning future is cancelled.
#[derive(Debug)]
pub struct ClearOnDrop(());

impl ClearOnDrop {
    pub fn new() -> Self {
        ClearOnDrop(())
    }
}

impl Default for ClearOnDrop {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ClearOnDrop {
    fn drop(&mut self) {
        clear();
    }
}
