//! Agent profiles: a closed set of instruction templates, one per profile type.
//!
//! Each profile also names the document category its knowledge lookups are scoped
//! to; the tenant's important document ids for that category come from
//! [`OrganizationSettings::resolve_document_ids`](crate::config::OrganizationSettings::resolve_document_ids).

mod assist;
mod content_creator;
mod humanizer;

pub use assist::AssistProfile;
pub use content_creator::ContentCreatorProfile;
pub use humanizer::HumanizerProfile;

use crate::config::ProfileCategory;
use crate::error::AppError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileType {
    Assist,
    ContentCreator,
    Humanizer,
}

impl ProfileType {
    pub const ALL: [ProfileType; 3] = [ProfileType::Assist, ProfileType::ContentCreator, ProfileType::Humanizer];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileType::Assist => "assist",
            ProfileType::ContentCreator => "content_creator",
            ProfileType::Humanizer => "humanizer",
        }
    }
}

impl FromStr for ProfileType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "assist" => Ok(ProfileType::Assist),
            "content_creator" => Ok(ProfileType::ContentCreator),
            "humanizer" => Ok(ProfileType::Humanizer),
            _ => Err(AppError::ProfileNotImplemented(s.to_string())),
        }
    }
}

impl fmt::Display for ProfileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contract every profile implements.
pub trait Profile: Send + Sync {
    fn profile_type(&self) -> ProfileType;

    /// Full system prompt for the agent.
    fn instructions(&self) -> &'static str;

    /// Category used to pick the tenant's important documents.
    fn document_category(&self) -> ProfileCategory;
}

pub fn create_profile(profile_type: ProfileType) -> Box<dyn Profile> {
    match profile_type {
        ProfileType::Assist => Box::new(AssistProfile),
        ProfileType::ContentCreator => Box::new(ContentCreatorProfile),
        ProfileType::Humanizer => Box::new(HumanizerProfile),
    }
}

/// Parse a profile name from a caller and build it. Unknown names fail with `ProfileNotImplemented`.
pub fn create_profile_by_name(name: &str) -> Result<Box<dyn Profile>, AppError> {
    Ok(create_profile(name.parse()?))
}
