//! The tenant middleware opens a `request` span and records the bound tenant on it.

mod common;

use agent_os::app;
use std::fmt;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::Subscriber;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

#[derive(Clone, Default)]
struct TenantFields {
    spans: Arc<Mutex<Vec<String>>>,
    tenants: Arc<Mutex<Vec<String>>>,
}

struct TenantVisitor<'a>(&'a Mutex<Vec<String>>);

impl Visit for TenantVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "tenant" {
            self.0.lock().unwrap().push(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "tenant" {
            self.0.lock().unwrap().push(format!("{:?}", value));
        }
    }
}

impl<S: Subscriber> Layer<S> for TenantFields {
    fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, _ctx: Context<'_, S>) {
        self.spans.lock().unwrap().push(attrs.metadata().name().to_string());
        attrs.record(&mut TenantVisitor(&self.tenants));
    }

    fn on_record(&self, _id: &Id, values: &Record<'_>, _ctx: Context<'_, S>) {
        values.record(&mut TenantVisitor(&self.tenants));
    }
}

#[tokio::test(flavor = "current_thread")]
async fn bound_tenant_is_recorded_on_the_request_span() {
    let fields = TenantFields::default();
    let subscriber = tracing_subscriber::registry().with(fields.clone());
    let _guard = tracing::subscriber::set_default(subscriber);

    let resp = app(common::state())
        .oneshot(common::get("/api/v1/organization", Some("acme")))
        .await
        .unwrap();
    assert!(resp.status().is_success());

    assert!(fields.spans.lock().unwrap().iter().any(|s| s == "request"));
    assert_eq!(*fields.tenants.lock().unwrap(), vec!["acme".to_string()]);
}

#[tokio::test(flavor = "current_thread")]
async fn simple_mode_leaves_the_tenant_field_empty() {
    let fields = TenantFields::default();
    let subscriber = tracing_subscriber::registry().with(fields.clone());
    let _guard = tracing::subscriber::set_default(subscriber);

    let _ = app(common::state())
        .oneshot(common::get("/api/v1/organization", Some("ghost")))
        .await
        .unwrap();

    assert!(fields.spans.lock().unwrap().iter().any(|s| s == "request"));
    assert!(fields.tenants.lock().unwrap().is_empty());
}
