use serde::{Deserialize, Serialize};

use super::entities::{
    Achievement, CodingPlatform, Internship, Profile, Project, SkillGroup, SocialLink,
};

/// In-memory application state for every content collection.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioState {
    pub projects: Vec<Project>,
    pub skills: Vec<SkillGroup>,
    pub achievements: Vec<Achievement>,
    pub internships: Vec<Internship>,
    pub coding_platforms: Vec<CodingPlatform>,
    pub social_links: Vec<SocialLink>,
    pub profile: Profile,
}
