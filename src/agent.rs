//! Agent composition for the current request: profile instructions, model, knowledge scope and tools.
//!
//! The blueprint is handed to an external orchestration engine through [`Orchestrator`];
//! running the tool-use loop is that engine's job.

use crate::config::{ProfileCategory, ProviderDefaults};
use crate::context;
use crate::knowledge::KnowledgeFilter;
use crate::model::{resolve_chat_model, resolve_embedder, EmbedderSpec, ModelSpec};
use crate::profile::{create_profile, ProfileType};
use crate::team::TeamBlueprint;
use async_trait::async_trait;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    WebSearch,
    KnowledgeSearch,
}

/// Everything the orchestration engine needs to instantiate one agent run.
#[derive(Clone, Debug, Serialize)]
pub struct AgentBlueprint {
    pub id: String,
    pub name: String,
    pub profile: ProfileType,
    /// Tenant name when bound, `None` in simple mode.
    pub tenant: Option<String>,
    pub instructions: String,
    pub model: ModelSpec,
    /// Embedder the knowledge base searches with.
    pub embedder: EmbedderSpec,
    pub document_category: ProfileCategory,
    pub knowledge: KnowledgeFilter,
    pub tools: Vec<ToolKind>,
    pub num_history_runs: u32,
    pub markdown: bool,
}

impl AgentBlueprint {
    /// Compose the agent for `profile_type` under whatever tenant the request context holds.
    pub fn for_profile(profile_type: ProfileType, defaults: &ProviderDefaults) -> Self {
        let profile = create_profile(profile_type);
        let category = profile.document_category();
        let (id, name, tools) = match profile_type {
            ProfileType::Assist => ("assist-agent", "Assist", vec![ToolKind::WebSearch]),
            ProfileType::ContentCreator => (
                "content-creator-agent",
                "Content Creator",
                vec![ToolKind::KnowledgeSearch, ToolKind::WebSearch],
            ),
            ProfileType::Humanizer => ("humanizer-agent", "Humanizer", vec![ToolKind::KnowledgeSearch]),
        };
        AgentBlueprint {
            id: id.to_string(),
            name: name.to_string(),
            profile: profile_type,
            tenant: context::get().map(|org| org.name.clone()),
            instructions: profile.instructions().trim().to_string(),
            model: resolve_chat_model(defaults),
            embedder: resolve_embedder(defaults),
            document_category: category,
            knowledge: KnowledgeFilter::for_category(category),
            tools,
            num_history_runs: 5,
            markdown: true,
        }
    }
}

/// External engine that drives a bounded tool-use loop for a blueprint.
#[async_trait]
pub trait Orchestrator: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn run(&self, agent: &AgentBlueprint, message: &str) -> Result<String, Self::Error>;

    /// Run a team: the leader delegates to its members and synthesizes their replies.
    async fn run_team(&self, team: &TeamBlueprint, message: &str) -> Result<String, Self::Error>;
}
