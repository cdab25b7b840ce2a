// src/modules/portfolio/application/ports/outgoing/portfolio_store.rs
use async_trait::async_trait;

use crate::modules::portfolio::application::domain::entries::{
    Achievement, Education, Experience, Project,
};
use crate::modules::portfolio::application::domain::sections::{
    AboutSection, ContactInfo, HeroSection, SkillsSection,
};
use crate::shared::storage::StoreError;

//
// ──────────────────────────────────────────────────────────
// Port (portfolio collections)
// ──────────────────────────────────────────────────────────
//

/// One seam over all portfolio collections. Singleton sections are found
/// without a filter and upserted by their caller-supplied id; entry
/// collections get plain insert/list plus full project CRUD.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PortfolioStore: Send + Sync {
    // Singleton sections
    async fn find_hero(&self) -> Result<Option<HeroSection>, StoreError>;
    async fn upsert_hero(&self, section: &HeroSection) -> Result<(), StoreError>;

    async fn find_about(&self) -> Result<Option<AboutSection>, StoreError>;
    async fn upsert_about(&self, section: &AboutSection) -> Result<(), StoreError>;

    async fn find_skills(&self) -> Result<Option<SkillsSection>, StoreError>;
    async fn upsert_skills(&self, section: &SkillsSection) -> Result<(), StoreError>;

    async fn find_contact_info(&self) -> Result<Option<ContactInfo>, StoreError>;
    async fn upsert_contact_info(&self, section: &ContactInfo) -> Result<(), StoreError>;

    // Projects
    async fn insert_project(&self, project: &Project) -> Result<(), StoreError>;
    async fn list_projects(&self, limit: i64) -> Result<Vec<Project>, StoreError>;
    /// Unsorted, filter `featured=true`, capped at `limit`.
    async fn featured_projects(&self, limit: i64) -> Result<Vec<Project>, StoreError>;
    async fn find_project(&self, id: &str) -> Result<Option<Project>, StoreError>;
    /// Full replace by the project's id. No upsert.
    async fn replace_project(&self, project: &Project) -> Result<(), StoreError>;
    /// Returns the deleted count; 0 means no such project.
    async fn delete_project(&self, id: &str) -> Result<u64, StoreError>;

    // Education / experience / achievements: create and list only
    async fn insert_education(&self, entry: &Education) -> Result<(), StoreError>;
    async fn list_education(&self, limit: i64) -> Result<Vec<Education>, StoreError>;

    async fn insert_experience(&self, entry: &Experience) -> Result<(), StoreError>;
    async fn list_experience(&self, limit: i64) -> Result<Vec<Experience>, StoreError>;

    async fn insert_achievement(&self, entry: &Achievement) -> Result<(), StoreError>;
    async fn list_achievements(&self, limit: i64) -> Result<Vec<Achievement>, StoreError>;
}
