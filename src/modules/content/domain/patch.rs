use serde::{Deserialize, Serialize};

use super::entities::{
    Achievement, CodingPlatform, Internship, PlatformKind, Project, SkillGroup, SocialLink,
    SocialPlatform,
};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// Meaning:
// - Unset: field not provided => keep current value
// - Null: explicitly null => clear the field (only for optional fields)
// - Value(v): replace with v
//
// Serde behavior:
// - omitted field => Unset (because of #[serde(default)])
// - null => Null
// - value => Value(value)
// - Unset fields are skipped when serializing a patch body
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }
}

impl<T: Clone> PatchField<T> {
    /// Applies this patch to a required field. `Null` has no meaning there
    /// and leaves the value unchanged.
    pub fn apply_to(&self, target: &mut T) {
        if let PatchField::Value(v) = self {
            *target = v.clone();
        }
    }

    /// Applies this patch to an optional field.
    pub fn apply_to_option(&self, target: &mut Option<T>) {
        match self {
            PatchField::Unset => {}
            PatchField::Null => *target = None,
            PatchField::Value(v) => *target = Some(v.clone()),
        }
    }
}

impl<T> From<T> for PatchField<T> {
    fn from(value: T) -> Self {
        PatchField::Value(value)
    }
}

//
// ──────────────────────────────────────────────────────────
// Per-entity partial records
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub title: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub description: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub tech: PatchField<Vec<String>>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub github: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub demo: PatchField<String>,
}

impl ProjectPatch {
    pub fn apply(&self, project: &mut Project) {
        self.title.apply_to(&mut project.title);
        self.description.apply_to(&mut project.description);
        self.tech.apply_to(&mut project.tech);
        self.github.apply_to_option(&mut project.github);
        self.demo.apply_to_option(&mut project.demo);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGroupPatch {
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub category: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub skills: PatchField<Vec<String>>,
}

impl SkillGroupPatch {
    pub fn apply(&self, group: &mut SkillGroup) {
        self.category.apply_to(&mut group.category);
        self.skills.apply_to(&mut group.skills);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementPatch {
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub title: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub description: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub date: PatchField<String>,
}

impl AchievementPatch {
    pub fn apply(&self, achievement: &mut Achievement) {
        self.title.apply_to(&mut achievement.title);
        self.description.apply_to(&mut achievement.description);
        self.date.apply_to(&mut achievement.date);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternshipPatch {
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub company_name: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub role: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub duration: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub description: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub technologies: PatchField<Vec<String>>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub certificate_url: PatchField<String>,
}

impl InternshipPatch {
    pub fn apply(&self, internship: &mut Internship) {
        self.company_name.apply_to(&mut internship.company_name);
        self.role.apply_to(&mut internship.role);
        self.duration.apply_to(&mut internship.duration);
        self.description.apply_to(&mut internship.description);
        self.technologies.apply_to(&mut internship.technologies);
        self.certificate_url
            .apply_to_option(&mut internship.certificate_url);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodingPlatformPatch {
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub name: PatchField<PlatformKind>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub count: PatchField<u64>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub link: PatchField<String>,
}

impl CodingPlatformPatch {
    pub fn apply(&self, platform: &mut CodingPlatform) {
        self.name.apply_to(&mut platform.name);
        self.count.apply_to(&mut platform.count);
        self.link.apply_to(&mut platform.link);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinkPatch {
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub platform: PatchField<SocialPlatform>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub link: PatchField<String>,
}

impl SocialLinkPatch {
    pub fn apply(&self, link: &mut SocialLink) {
        self.platform.apply_to(&mut link.platform);
        self.link.apply_to(&mut link.link);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::domain::identity::RecordMeta;
    use serde_json::json;

    fn sample_project() -> Project {
        Project {
            meta: RecordMeta::fallback(1),
            title: "Old".to_string(),
            description: "Keep me".to_string(),
            tech: vec!["Rust".to_string()],
            github: Some("https://github.com/me/old".to_string()),
            demo: Some("https://demo".to_string()),
            ..Project::default()
        }
    }

    #[test]
    fn test_apply_is_a_shallow_merge() {
        let mut project = sample_project();
        let patch = ProjectPatch {
            title: "New".to_string().into(),
            demo: PatchField::Null,
            ..ProjectPatch::default()
        };

        patch.apply(&mut project);

        assert_eq!(project.title, "New");
        assert_eq!(project.description, "Keep me");
        assert_eq!(project.tech, vec!["Rust"]);
        assert_eq!(project.github.as_deref(), Some("https://github.com/me/old"));
        assert_eq!(project.demo, None);
        assert_eq!(project.meta, RecordMeta::fallback(1));
    }

    #[test]
    fn test_patch_body_omits_unset_fields() {
        let patch = ProjectPatch {
            title: "New".to_string().into(),
            github: PatchField::Null,
            ..ProjectPatch::default()
        };

        let body = serde_json::to_value(&patch).unwrap();

        assert_eq!(body, json!({ "title": "New", "github": null }));
    }

    #[test]
    fn test_patch_deserializes_omitted_as_unset() {
        let patch: InternshipPatch =
            serde_json::from_value(json!({ "role": "Lead", "certificateUrl": null })).unwrap();

        assert_eq!(patch.role.as_value().map(String::as_str), Some("Lead"));
        assert!(patch.company_name.is_unset());
        assert_eq!(patch.certificate_url, PatchField::Null);
    }

    #[test]
    fn test_null_on_required_field_keeps_value() {
        let mut group = SkillGroup {
            category: "Backend".to_string(),
            skills: vec!["Rust".to_string()],
            ..SkillGroup::default()
        };
        let patch = SkillGroupPatch {
            category: PatchField::Null,
            skills: vec!["Rust".to_string(), "Go".to_string()].into(),
        };

        patch.apply(&mut group);

        assert_eq!(group.category, "Backend");
        assert_eq!(group.skills, vec!["Rust", "Go"]);
    }
}
