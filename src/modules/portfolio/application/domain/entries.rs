// src/modules/portfolio/application/domain/entries.rs
//
// Collection-backed entries (projects, education, experience, achievements)
// and the aggregate payload served by GET /api/portfolio. Each entity has a
// create-DTO without the server-assigned id and timestamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::sections::{AboutSection, ContactInfo, HeroSection, SkillsSection};
use crate::shared::storage::new_document_id;

//
// ──────────────────────────────────────────────────────────
// Project
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectCreate {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl Project {
    pub fn new(data: ProjectCreate) -> Self {
        Self::with_id(new_document_id(), data)
    }

    /// Full replacement under an existing id; `created_at` is reset, as a
    /// replace carries no fields over from the stored document.
    pub fn with_id(id: String, data: ProjectCreate) -> Self {
        Self {
            id,
            title: data.title,
            description: data.description,
            technologies: data.technologies,
            github_url: data.github_url,
            live_url: data.live_url,
            image_url: data.image_url,
            featured: data.featured,
            created_at: Utc::now(),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Education / Experience / Achievement
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: String,
    pub degree: String,
    pub field: String,
    pub institution: String,
    pub location: String,
    pub duration: String,
    #[serde(default)]
    pub cgpa: Option<String>,
    #[serde(default)]
    pub percentage: Option<String>,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationCreate {
    pub degree: String,
    pub field: String,
    pub institution: String,
    pub location: String,
    pub duration: String,
    #[serde(default)]
    pub cgpa: Option<String>,
    #[serde(default)]
    pub percentage: Option<String>,
    pub description: String,
}

impl Education {
    pub fn new(data: EducationCreate) -> Self {
        Self {
            id: new_document_id(),
            degree: data.degree,
            field: data.field,
            institution: data.institution,
            location: data.location,
            duration: data.duration,
            cgpa: data.cgpa,
            percentage: data.percentage,
            description: data.description,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub position: String,
    pub company: String,
    pub location: String,
    pub duration: String,
    /// Internship, Full-time, Leadership, ...
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    #[serde(default)]
    pub achievements: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceCreate {
    pub position: String,
    pub company: String,
    pub location: String,
    pub duration: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    #[serde(default)]
    pub achievements: Option<Vec<String>>,
}

impl Experience {
    pub fn new(data: ExperienceCreate) -> Self {
        Self {
            id: new_document_id(),
            position: data.position,
            company: data.company,
            location: data.location,
            duration: data.duration,
            kind: data.kind,
            description: data.description,
            achievements: data.achievements,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    /// Competition, Academic, Certification, ...
    #[serde(rename = "type")]
    pub kind: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementCreate {
    pub title: String,
    pub description: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Achievement {
    pub fn new(data: AchievementCreate) -> Self {
        Self {
            id: new_document_id(),
            title: data.title,
            description: data.description,
            date: data.date,
            kind: data.kind,
            created_at: Utc::now(),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Aggregate payload
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioData {
    pub hero: HeroSection,
    pub about: AboutSection,
    pub skills: SkillsSection,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub achievements: Vec<Achievement>,
    pub contact: ContactInfo,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn experience_kind_serializes_as_type() {
        let exp = Experience::new(ExperienceCreate {
            position: "Intern".to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            duration: "2024".to_string(),
            kind: "Internship".to_string(),
            description: "Did things.".to_string(),
            achievements: None,
        });

        let value = serde_json::to_value(&exp).unwrap();
        assert_eq!(value["type"], "Internship");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn project_create_defaults_featured_to_false() {
        let data: ProjectCreate = serde_json::from_value(json!({
            "title": "Site",
            "description": "A site.",
            "technologies": ["Rust"]
        }))
        .unwrap();

        let project = Project::new(data);
        assert!(!project.featured);
        assert!(!project.id.is_empty());
    }

    #[test]
    fn with_id_keeps_the_given_id() {
        let data: ProjectCreate = serde_json::from_value(json!({
            "title": "Site",
            "description": "A site.",
            "technologies": ["Rust"],
            "featured": true
        }))
        .unwrap();

        let project = Project::with_id("proj-1".to_string(), data);
        assert_eq!(project.id, "proj-1");
        assert!(project.featured);
    }
}
