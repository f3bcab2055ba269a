//! Portfolio content slice: fixed profile records served read-only.
//!
//! Every call builds fresh records with new identifiers; nothing is persisted.

pub mod content;
#[cfg(feature = "server")]
pub mod handlers;
pub mod model;

pub use content::{API_GREETING, about, api_info, experience, personal_info, projects, skills};
pub use model::{
    AboutInfo, AboutStats, ApiInfo, Experience, Metric, PersonalInfo, Project, SkillCategory,
};
