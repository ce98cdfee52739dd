use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

use crate::config::SiteConfig;

pub static PROJECTS: LazyLock<Vec<Project>> = LazyLock::new(|| load_or_default("projects.json"));
pub static SKILLS: LazyLock<Vec<Skill>> = LazyLock::new(|| load_or_default("skills.json"));
pub static SITE: LazyLock<SiteFile> = LazyLock::new(|| load_or_default("site.json"));

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub tech: Vec<String>,
    pub demo_url: String,
    pub github_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Phosphor icon class, e.g. `ph-atom`.
    pub icon: String,
    /// Tailwind text color class.
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub icon: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub initials: String,
    pub role: String,
    pub tagline: String,
    pub bio: Vec<String>,
    pub portrait: String,
    pub hero_scene: String,
    pub socials: Vec<SocialLink>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Portfolio".to_string(),
            initials: "P".to_string(),
            role: String::new(),
            tagline: String::new(),
            bio: Vec::new(),
            portrait: String::new(),
            hero_scene: String::new(),
            socials: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteFile {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub settings: SiteConfig,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    NotFound(String),
    #[error("couldn't parse {file}: {reason}")]
    ParseError { file: String, reason: String },
}

pub fn load<T: DeserializeOwned>(file: &str) -> Result<T, ContentError> {
    let content = Assets::get(file).ok_or_else(|| ContentError::NotFound(file.to_string()))?;
    serde_json::from_slice(&content.data).map_err(|e| ContentError::ParseError {
        file: file.to_string(),
        reason: e.to_string(),
    })
}

fn load_or_default<T: DeserializeOwned + Default>(file: &str) -> T {
    load(file).unwrap_or_else(|e| {
        log::error!("{e}");
        T::default()
    })
}

pub fn projects() -> &'static [Project] {
    &PROJECTS
}

pub fn skills() -> &'static [Skill] {
    &SKILLS
}

pub fn profile() -> &'static Profile {
    &SITE.profile
}

pub fn settings() -> &'static SiteConfig {
    &SITE.settings
}
