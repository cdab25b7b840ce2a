// src/modules/portfolio/application/domain/sections.rs
//
// Singleton portfolio sections. "Singleton" is a convention only: the store
// keeps these as ordinary documents keyed by a caller-supplied id, and an
// upsert against a new id creates a second document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::storage::new_document_id;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroSection {
    #[serde(default = "new_document_id")]
    pub id: String,
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    #[serde(default)]
    pub resume_url: Option<String>,
    pub social_links: SocialLinks,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutSection {
    #[serde(default = "new_document_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub highlights: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillsSection {
    #[serde(default = "new_document_id")]
    pub id: String,
    pub title: String,
    pub categories: Vec<SkillCategory>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default = "new_document_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub social_links: SocialLinks,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn hero_body_without_id_gets_a_generated_one() {
        let hero: HeroSection = serde_json::from_value(json!({
            "name": "Ada",
            "title": "Engineer",
            "subtitle": "Systems",
            "description": "Builds things.",
            "social_links": { "github": "https://github.com/ada" }
        }))
        .unwrap();

        assert!(!hero.id.is_empty());
        assert_eq!(hero.social_links.github.as_deref(), Some("https://github.com/ada"));
        assert_eq!(hero.social_links.linkedin, None);
        assert_eq!(hero.resume_url, None);
    }

    #[test]
    fn hero_body_with_id_keeps_it() {
        let hero: HeroSection = serde_json::from_value(json!({
            "id": "hero-1",
            "name": "Ada",
            "title": "Engineer",
            "subtitle": "Systems",
            "description": "Builds things.",
            "social_links": {}
        }))
        .unwrap();

        assert_eq!(hero.id, "hero-1");
    }
}
