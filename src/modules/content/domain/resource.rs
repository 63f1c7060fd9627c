use std::fmt;

use serde::Serialize;

/// Mirror key holding the resume as a raw, unencoded string.
pub const RESUME_MIRROR_KEY: &str = "resume";

/// Mirror key holding the persisted admin session.
pub const AUTH_MIRROR_KEY: &str = "auth";

/// One content collection exposed by the Resource API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Resource {
    Projects,
    Skills,
    Achievements,
    Internships,
    Platforms,
    SocialLinks,
    Profile,
}

impl Resource {
    /// Path segment under `/api`.
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Projects => "projects",
            Resource::Skills => "skills",
            Resource::Achievements => "achievements",
            Resource::Internships => "internships",
            Resource::Platforms => "platforms",
            Resource::SocialLinks => "social-links",
            Resource::Profile => "profile",
        }
    }

    /// Local mirror key for this collection's JSON-encoded state.
    pub fn mirror_key(&self) -> &'static str {
        match self {
            Resource::Projects => "projects",
            Resource::Skills => "skills",
            Resource::Achievements => "achievements",
            Resource::Internships => "internships",
            Resource::Platforms => "codingPlatforms",
            Resource::SocialLinks => "socialLinks",
            Resource::Profile => "profile",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
