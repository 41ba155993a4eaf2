//! Agent OS core: multi-tenant configuration, request-scoped tenant context and
//! profile-driven agent composition behind an axum router.

pub mod agent;
pub mod config;
pub mod context;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod knowledge;
pub mod middleware;
pub mod model;
pub mod profile;
pub mod response;
pub mod routes;
pub mod state;
pub mod team;
pub mod tenant;

pub use agent::{AgentBlueprint, Orchestrator};
pub use config::{parse_organization, ConfigSource, OrganizationSettings, ProfileCategory, ProviderDefaults};
pub use error::{AppError, ConfigError, KnowledgeError};
pub use knowledge::{KnowledgeFilter, KnowledgeStore, MemoryKnowledgeStore};
pub use middleware::{resolve_tenant, tenant_resolution_middleware, TenantResolution};
pub use profile::{create_profile, Profile, ProfileType};
pub use routes::app;
pub use state::AppState;
pub use team::{TeamBlueprint, TeamType};
pub use tenant::ConfigStore;
