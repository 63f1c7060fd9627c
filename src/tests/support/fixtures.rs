use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::modules::content::adapter::outgoing::InMemoryMirrorStore;
use crate::modules::content::application::ports::outgoing::MirrorStore;
use crate::modules::content::application::services::PortfolioSync;
use crate::modules::content::domain::{
    Achievement, CodingPlatform, Internship, PlatformKind, Project, SkillGroup, SocialLink,
    SocialPlatform,
};
use crate::tests::support::fake_api::FakeResourceApi;

pub struct Harness {
    pub sync: PortfolioSync,
    pub api: Arc<FakeResourceApi>,
    pub mirror: InMemoryMirrorStore,
}

impl Harness {
    pub fn new(api: FakeResourceApi) -> Self {
        Self::with_mirror(api, InMemoryMirrorStore::new())
    }

    pub fn with_mirror(api: FakeResourceApi, mirror: InMemoryMirrorStore) -> Self {
        let api = Arc::new(api);
        let sync = PortfolioSync::new(api.clone(), Arc::new(mirror.clone()));
        Self { sync, api, mirror }
    }

    /// Decodes one mirror entry; panics when it is missing.
    pub fn mirrored<V: DeserializeOwned>(&self, key: &str) -> V {
        let raw = self
            .mirror
            .read(key)
            .unwrap()
            .unwrap_or_else(|| panic!("mirror entry '{}' missing", key));
        serde_json::from_str(&raw).unwrap()
    }
}

pub fn project(title: &str) -> Project {
    Project {
        title: title.to_string(),
        description: format!("{} description", title),
        tech: vec!["Rust".to_string()],
        ..Project::default()
    }
}

pub fn skill_group(category: &str, skills: &[&str]) -> SkillGroup {
    SkillGroup {
        category: category.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        ..SkillGroup::default()
    }
}

pub fn achievement(title: &str) -> Achievement {
    Achievement {
        title: title.to_string(),
        description: "Won".to_string(),
        date: "2024-03-01".to_string(),
        ..Achievement::default()
    }
}

pub fn internship(company: &str) -> Internship {
    Internship {
        company_name: company.to_string(),
        role: "Backend intern".to_string(),
        duration: "3 months".to_string(),
        technologies: vec!["Rust".to_string()],
        ..Internship::default()
    }
}

pub fn coding_platform(name: PlatformKind, count: u64) -> CodingPlatform {
    CodingPlatform {
        link: format!("https://{}.com/me", name.as_str()),
        name,
        count,
        ..CodingPlatform::default()
    }
}

pub fn social_link(platform: SocialPlatform, link: &str) -> SocialLink {
    SocialLink {
        platform,
        link: link.to_string(),
        ..SocialLink::default()
    }
}
