//! Teams: a leader with its own instructions that delegates to member agents.
//!
//! Members are composed with [`AgentBlueprint::for_profile`], so the whole team
//! sees the tenant bound to the current request.

use crate::agent::AgentBlueprint;
use crate::config::ProviderDefaults;
use crate::context;
use crate::error::AppError;
use crate::model::{resolve_chat_model, ModelSpec};
use crate::profile::ProfileType;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamType {
    ContentCreatorHumanizer,
}

impl TeamType {
    pub const ALL: [TeamType; 1] = [TeamType::ContentCreatorHumanizer];

    pub fn as_str(&self) -> &'static str {
        match self {
            TeamType::ContentCreatorHumanizer => "content_creator_humanizer",
        }
    }

    /// Member profiles, in the order the leader delegates to them.
    pub fn members(&self) -> &'static [ProfileType] {
        match self {
            TeamType::ContentCreatorHumanizer => &[ProfileType::ContentCreator, ProfileType::Humanizer],
        }
    }
}

impl FromStr for TeamType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "content_creator_humanizer" => Ok(TeamType::ContentCreatorHumanizer),
            _ => Err(AppError::NotFound(format!("team '{}'", s))),
        }
    }
}

impl fmt::Display for TeamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct TeamBlueprint {
    pub id: String,
    pub name: String,
    pub team: TeamType,
    pub tenant: Option<String>,
    /// Leader instructions.
    pub instructions: String,
    /// Leader model.
    pub model: ModelSpec,
    pub members: Vec<AgentBlueprint>,
    pub num_history_runs: u32,
    pub markdown: bool,
}

impl TeamBlueprint {
    pub fn for_team(team: TeamType, defaults: &ProviderDefaults) -> Self {
        let (id, name, instructions) = match team {
            TeamType::ContentCreatorHumanizer => (
                "content-creator-humanizer-team",
                "Content Creator + Humanizer",
                CONTENT_CREATOR_HUMANIZER_INSTRUCTIONS,
            ),
        };
        TeamBlueprint {
            id: id.to_string(),
            name: name.to_string(),
            team,
            tenant: context::get().map(|org| org.name.clone()),
            instructions: instructions.trim().to_string(),
            model: resolve_chat_model(defaults),
            members: team
                .members()
                .iter()
                .map(|p| AgentBlueprint::for_profile(*p, defaults))
                .collect(),
            num_history_runs: 5,
            markdown: true,
        }
    }
}

const CONTENT_CREATOR_HUMANIZER_INSTRUCTIONS: &str = r#"
You lead the **Content Creator + Humanizer** team.

**Members**
- **Content Creator**: writes blog posts, social posts and docs with SEO, brand voice and structure.
- **Humanizer**: revises text to strip machine-written patterns and make it read naturally.

**Routing**
1. New content: delegate to the Content Creator. If the user also wants a more natural pass, send the result to the Humanizer.
2. Only humanizing existing text: delegate straight to the Humanizer.
3. Create and humanize: Content Creator first, then the Humanizer with its output.

Keep delegation short and give the user one clear answer built from the members' replies.
"#;
