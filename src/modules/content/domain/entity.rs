use serde::de::DeserializeOwned;
use serde::Serialize;

use super::entities::{
    Achievement, CodingPlatform, Internship, Project, SkillGroup, SocialLink,
};
use super::identity::RecordMeta;
use super::patch::{
    AchievementPatch, CodingPlatformPatch, InternshipPatch, ProjectPatch, SkillGroupPatch,
    SocialLinkPatch,
};
use super::resource::Resource;
use super::state::PortfolioState;
use super::validation::{require_items, require_text, ValidationError};

/// A record kept in one of the list-shaped collections.
pub trait ContentEntity:
    Serialize + DeserializeOwned + Clone + Send + Sync + std::fmt::Debug + 'static
{
    type Patch: Serialize + Clone + Send + Sync + std::fmt::Debug;

    const RESOURCE: Resource;

    fn meta(&self) -> &RecordMeta;
    fn meta_mut(&mut self) -> &mut RecordMeta;

    /// Shallow merge: fields left unset in `patch` keep their value.
    fn apply_patch(&mut self, patch: &Self::Patch);

    /// Required-field checks performed by the editor before submitting.
    fn validate(&self) -> Result<(), ValidationError>;

    fn collection(state: &PortfolioState) -> &Vec<Self>;
    fn collection_mut(state: &mut PortfolioState) -> &mut Vec<Self>;
}

impl ContentEntity for Project {
    type Patch = ProjectPatch;
    const RESOURCE: Resource = Resource::Projects;

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }
    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }
    fn apply_patch(&mut self, patch: &ProjectPatch) {
        patch.apply(self);
    }
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title)?;
        require_text("description", &self.description)
    }
    fn collection(state: &PortfolioState) -> &Vec<Self> {
        &state.projects
    }
    fn collection_mut(state: &mut PortfolioState) -> &mut Vec<Self> {
        &mut state.projects
    }
}

impl ContentEntity for SkillGroup {
    type Patch = SkillGroupPatch;
    const RESOURCE: Resource = Resource::Skills;

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }
    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }
    fn apply_patch(&mut self, patch: &SkillGroupPatch) {
        patch.apply(self);
    }
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("category", &self.category)?;
        require_items("skills", &self.skills)
    }
    fn collection(state: &PortfolioState) -> &Vec<Self> {
        &state.skills
    }
    fn collection_mut(state: &mut PortfolioState) -> &mut Vec<Self> {
        &mut state.skills
    }
}

impl ContentEntity for Achievement {
    type Patch = AchievementPatch;
    const RESOURCE: Resource = Resource::Achievements;

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }
    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }
    fn apply_patch(&mut self, patch: &AchievementPatch) {
        patch.apply(self);
    }
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title)?;
        require_text("description", &self.description)
    }
    fn collection(state: &PortfolioState) -> &Vec<Self> {
        &state.achievements
    }
    fn collection_mut(state: &mut PortfolioState) -> &mut Vec<Self> {
        &mut state.achievements
    }
}

impl ContentEntity for Internship {
    type Patch = InternshipPatch;
    const RESOURCE: Resource = Resource::Internships;

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }
    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }
    fn apply_patch(&mut self, patch: &InternshipPatch) {
        patch.apply(self);
    }
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("companyName", &self.company_name)?;
        require_text("role", &self.role)?;
        require_text("duration", &self.duration)
    }
    fn collection(state: &PortfolioState) -> &Vec<Self> {
        &state.internships
    }
    fn collection_mut(state: &mut PortfolioState) -> &mut Vec<Self> {
        &mut state.internships
    }
}

impl ContentEntity for CodingPlatform {
    type Patch = CodingPlatformPatch;
    const RESOURCE: Resource = Resource::Platforms;

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }
    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }
    fn apply_patch(&mut self, patch: &CodingPlatformPatch) {
        patch.apply(self);
    }
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", self.name.as_str())?;
        if self.count == 0 {
            return Err(ValidationError::MissingField("count"));
        }
        Ok(())
    }
    fn collection(state: &PortfolioState) -> &Vec<Self> {
        &state.coding_platforms
    }
    fn collection_mut(state: &mut PortfolioState) -> &mut Vec<Self> {
        &mut state.coding_platforms
    }
}

impl ContentEntity for SocialLink {
    type Patch = SocialLinkPatch;
    const RESOURCE: Resource = Resource::SocialLinks;

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }
    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }
    fn apply_patch(&mut self, patch: &SocialLinkPatch) {
        patch.apply(self);
    }
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("platform", self.platform.as_str())?;
        require_text("link", &self.link)
    }
    fn collection(state: &PortfolioState) -> &Vec<Self> {
        &state.social_links
    }
    fn collection_mut(state: &mut PortfolioState) -> &mut Vec<Self> {
        &mut state.social_links
    }
}
