use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

use crate::carousel::{ConfigError, CyclicIndex, RotationConfig, Slide};
use crate::motion::{SplitBy, Stagger};

static PORTFOLIO_FILE: &str = "portfolio.json";

pub static GLOBAL_PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> =
    LazyLock::new(|| Portfolio::load(PORTFOLIO_FILE));

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse {file}: {reason}")]
    ParseError { file: String, reason: String },
    #[error("Invalid rotation for {section}: {source}")]
    InvalidRotation {
        section: &'static str,
        #[source]
        source: ConfigError,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    pub name: String,
    pub role: String,
    pub hero_title: String,
    pub hero_image: String,
    pub mobile_image: String,
    pub email: String,
    pub about: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Social {
    pub label: String,
    pub href: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotatingItem {
    pub text: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextRotation {
    #[serde(default)]
    pub heading: Option<String>,
    pub items: Vec<RotatingItem>,
    #[serde(default)]
    pub rotation: RotationConfig,
    #[serde(default)]
    pub split_by: SplitBy,
    #[serde(default)]
    pub stagger: Stagger,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub image: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub github_url: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
}

impl Slide for Project {
    fn images(&self) -> &[String] {
        if self.images.is_empty() {
            std::slice::from_ref(&self.image)
        } else {
            &self.images
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRotation {
    pub items: Vec<Project>,
    #[serde(default)]
    pub rotation: RotationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Footer {
    pub text: String,
    pub link_label: String,
    pub link_href: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub owner: Owner,
    #[serde(default)]
    pub socials: Vec<Social>,
    pub messages: TextRotation,
    pub skills: TextRotation,
    pub projects: ProjectRotation,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub footer: Footer,
}

impl Portfolio {
    pub fn load(name: &str) -> Result<Self, ContentError> {
        let file =
            ContentAssets::get(name).ok_or_else(|| ContentError::NotFound(name.to_string()))?;
        let portfolio = Self::parse(name, &file.data)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    pub fn parse(name: &str, data: &[u8]) -> Result<Self, ContentError> {
        serde_json::from_slice(data).map_err(|e| ContentError::ParseError {
            file: name.to_string(),
            reason: e.to_string(),
        })
    }

    /// Every rotation must build a controller over its own list.
    pub fn validate(&self) -> Result<(), ContentError> {
        let checks = [
            ("messages", self.messages.items.len(), &self.messages.rotation),
            ("skills", self.skills.items.len(), &self.skills.rotation),
            ("projects", self.projects.items.len(), &self.projects.rotation),
        ];
        for (section, len, rotation) in checks {
            CyclicIndex::new(len, rotation)
                .map_err(|source| ContentError::InvalidRotation { section, source })?;
        }
        Ok(())
    }
}

/// The embedded portfolio, parsed once.
pub fn portfolio() -> Result<&'static Portfolio, ContentError> {
    GLOBAL_PORTFOLIO.as_ref().map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_portfolio_is_valid() {
        let portfolio = portfolio().expect("embedded content should load");
        assert_eq!(portfolio.skills.items.len(), 8);
        assert_eq!(portfolio.skills.split_by, SplitBy::Characters);
        assert_eq!(portfolio.messages.items.len(), 4);
        assert!(portfolio.messages.rotation.auto_advance);
        assert_eq!(portfolio.keywords, vec!["Design", "Optimize", "Inspire"]);

        let projects = &portfolio.projects.items;
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].images().len(), 4);
        assert_eq!(projects[1].images().len(), 3);
    }

    #[test]
    fn test_referenced_images_are_served() {
        let portfolio = portfolio().expect("embedded content should load");
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        let owner = [&portfolio.owner.hero_image, &portfolio.owner.mobile_image];
        let socials = portfolio.socials.iter().map(|s| &s.icon);
        let projects = portfolio
            .projects
            .items
            .iter()
            .flat_map(|p| std::iter::once(&p.image).chain(p.images.iter()));
        for path in owner.into_iter().chain(socials).chain(projects) {
            let relative = path.strip_prefix('/').expect("site-absolute path");
            assert!(public.join(relative).is_file(), "{path} is not in public/");
        }
    }

    #[test]
    fn test_missing_file() {
        assert_eq!(
            Portfolio::load("nope.json").unwrap_err(),
            ContentError::NotFound("nope.json".to_string())
        );
    }

    #[test]
    fn test_malformed_json() {
        let err = Portfolio::parse("broken.json", b"{ \"owner\": ").unwrap_err();
        assert!(matches!(err, ContentError::ParseError { ref file, .. } if file == "broken.json"));
    }

    #[test]
    fn test_project_falls_back_to_cover_image() {
        let project: Project = serde_json::from_str(
            r#"{
                "id": "solo",
                "title": "Solo",
                "image": "/cover.png",
                "github_url": "https://example.com",
                "description": "one image"
            }"#,
        )
        .expect("valid project");
        assert_eq!(project.images(), ["/cover.png".to_string()]);
        assert!(project.features.is_empty());
    }

    #[test]
    fn test_validate_rejects_bad_rotation() {
        let mut portfolio = portfolio().expect("embedded content should load").clone();
        portfolio.skills.rotation.interval_ms = -5;
        assert_eq!(
            portfolio.validate().unwrap_err(),
            ContentError::InvalidRotation {
                section: "skills",
                source: ConfigError::NegativeInterval(-5),
            }
        );

        let mut portfolio = portfolio.clone();
        portfolio.skills.rotation.interval_ms = 2000;
        portfolio.projects.items.clear();
        assert!(matches!(
            portfolio.validate(),
            Err(ContentError::InvalidRotation {
                section: "projects",
                source: ConfigError::EmptyAutoAdvance,
            })
        ));
    }
}
