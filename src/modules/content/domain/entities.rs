use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::identity::RecordMeta;
use crate::shared::data_uri::{DataUriError, Document};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
    /// Fields this client does not model; kept so records round-trip intact.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillGroup {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub category: String,
    pub skills: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Achievement {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub title: String,
    pub description: String,
    /// ISO date (`YYYY-MM-DD`) as entered in the editor.
    pub date: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Achievement {
    /// Fills an empty date with today's date, as the editor does on submit.
    pub fn dated_today(mut self) -> Self {
        if self.date.trim().is_empty() {
            self.date = Utc::now().date_naive().format("%Y-%m-%d").to_string();
        }
        self
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Internship {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub company_name: String,
    pub role: String,
    pub duration: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CodingPlatform {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub name: PlatformKind,
    pub count: u64,
    pub link: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLink {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub platform: SocialPlatform,
    pub link: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

//
// ──────────────────────────────────────────────────────────
// Enum-like platform names
// ──────────────────────────────────────────────────────────
// Stored as lowercase strings. Unknown names are kept verbatim so a
// record written by another client never fails to decode.
//

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum PlatformKind {
    #[default]
    Github,
    Leetcode,
    Hackerrank,
    Codechef,
    Skillrack,
    Other(String),
}

impl PlatformKind {
    pub fn as_str(&self) -> &str {
        match self {
            PlatformKind::Github => "github",
            PlatformKind::Leetcode => "leetcode",
            PlatformKind::Hackerrank => "hackerrank",
            PlatformKind::Codechef => "codechef",
            PlatformKind::Skillrack => "skillrack",
            PlatformKind::Other(name) => name,
        }
    }
}

impl From<String> for PlatformKind {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "github" => PlatformKind::Github,
            "leetcode" => PlatformKind::Leetcode,
            "hackerrank" => PlatformKind::Hackerrank,
            "codechef" => PlatformKind::Codechef,
            "skillrack" => PlatformKind::Skillrack,
            _ => PlatformKind::Other(value),
        }
    }
}

impl From<PlatformKind> for String {
    fn from(value: PlatformKind) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum SocialPlatform {
    #[default]
    Github,
    Linkedin,
    Twitter,
    Instagram,
    Youtube,
    Other(String),
}

impl SocialPlatform {
    pub fn as_str(&self) -> &str {
        match self {
            SocialPlatform::Github => "github",
            SocialPlatform::Linkedin => "linkedin",
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::Youtube => "youtube",
            SocialPlatform::Other(name) => name,
        }
    }
}

impl From<String> for SocialPlatform {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "github" => SocialPlatform::Github,
            "linkedin" => SocialPlatform::Linkedin,
            "twitter" => SocialPlatform::Twitter,
            "instagram" => SocialPlatform::Instagram,
            "youtube" => SocialPlatform::Youtube,
            _ => SocialPlatform::Other(value),
        }
    }
}

impl From<SocialPlatform> for String {
    fn from(value: SocialPlatform) -> Self {
        value.as_str().to_string()
    }
}

//
// ──────────────────────────────────────────────────────────
// Profile (singleton)
// ──────────────────────────────────────────────────────────
//

pub const DEFAULT_PROFILE_NAME: &str = "Portfolio Owner";
pub const DEFAULT_PROFILE_DESCRIPTION: &str = "Full Stack Developer | Open Source Contributor";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    /// Data URI or URL.
    pub photo: String,
    /// Data URI or URL; empty when no resume has been uploaded.
    pub resume: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            id: None,
            name: DEFAULT_PROFILE_NAME.to_string(),
            description: DEFAULT_PROFILE_DESCRIPTION.to_string(),
            photo: String::new(),
            resume: String::new(),
            email: None,
            phone: None,
            location: None,
            bio: None,
            created_at: None,
            updated_at: None,
            extra: Map::new(),
        }
    }
}

impl Profile {
    pub fn resume_document(&self) -> Result<Option<Document>, DataUriError> {
        Document::from_field(&self.resume)
    }
}
