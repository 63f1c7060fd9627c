pub mod entities;
pub mod entity;
pub mod identity;
pub mod patch;
pub mod resource;
pub mod state;
pub mod validation;

pub use entities::{
    Achievement, CodingPlatform, Internship, PlatformKind, Profile, Project, SkillGroup,
    SocialLink, SocialPlatform,
};
pub use entity::ContentEntity;
pub use identity::{RecordKey, RecordMeta};
pub use patch::{
    AchievementPatch, CodingPlatformPatch, InternshipPatch, PatchField, ProjectPatch,
    SkillGroupPatch, SocialLinkPatch,
};
pub use resource::{Resource, AUTH_MIRROR_KEY, RESUME_MIRROR_KEY};
pub use state::PortfolioState;
pub use validation::{parse_list, ValidationError};
