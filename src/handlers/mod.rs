//! HTTP handlers for the current organization, profiles, teams and the knowledge base.

pub mod knowledge;
pub mod organization;
pub mod profile;
pub mod team;
pub use knowledge::*;
pub use organization::*;
pub use profile::*;
pub use team::*;
