// src/modules/portfolio/adapter/outgoing/portfolio_store_mongo.rs
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Collection, Database};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::modules::portfolio::application::domain::entries::{
    Achievement, Education, Experience, Project,
};
use crate::modules::portfolio::application::domain::sections::{
    AboutSection, ContactInfo, HeroSection, SkillsSection,
};
use crate::modules::portfolio::application::ports::outgoing::PortfolioStore;
use crate::shared::storage::StoreError;

const HERO: &str = "hero";
const ABOUT: &str = "about";
const SKILLS: &str = "skills";
const CONTACT: &str = "contact";
const PROJECTS: &str = "projects";
const EDUCATION: &str = "education";
const EXPERIENCE: &str = "experience";
const ACHIEVEMENTS: &str = "achievements";

// ============================================================================
// Store Implementation
// ============================================================================

#[derive(Clone)]
pub struct MongoPortfolioStore {
    db: Database,
}

impl MongoPortfolioStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection::<T>(name)
    }

    /// Singleton read: whichever document the collection holds first.
    async fn find_section<T>(&self, name: &str) -> Result<Option<T>, StoreError>
    where
        T: DeserializeOwned + Send + Sync,
    {
        Ok(self.collection::<T>(name).find_one(doc! {}).await?)
    }

    /// Replace-by-id with upsert. The id comes from the caller, so a new id
    /// silently creates a second document. A write matching nothing and
    /// upserting nothing was not acknowledged.
    async fn upsert_section<T>(&self, name: &str, id: &str, record: &T) -> Result<(), StoreError>
    where
        T: Serialize + Send + Sync,
    {
        let result = self
            .collection::<T>(name)
            .replace_one(doc! { "id": id }, record)
            .upsert(true)
            .await?;

        if result.matched_count == 0 && result.upserted_id.is_none() {
            return Err(StoreError::Unacknowledged);
        }

        Ok(())
    }

    async fn insert_entry<T>(&self, name: &str, entry: &T) -> Result<(), StoreError>
    where
        T: Serialize + Send + Sync,
    {
        self.collection::<T>(name).insert_one(entry).await?;
        Ok(())
    }

    async fn list_recent<T>(&self, name: &str, limit: i64) -> Result<Vec<T>, StoreError>
    where
        T: DeserializeOwned + Send + Sync,
    {
        let cursor = self
            .collection::<T>(name)
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .limit(limit)
            .await?;

        Ok(cursor.try_collect().await?)
    }
}

#[async_trait]
impl PortfolioStore for MongoPortfolioStore {
    async fn find_hero(&self) -> Result<Option<HeroSection>, StoreError> {
        self.find_section(HERO).await
    }

    async fn upsert_hero(&self, section: &HeroSection) -> Result<(), StoreError> {
        self.upsert_section(HERO, &section.id, section).await
    }

    async fn find_about(&self) -> Result<Option<AboutSection>, StoreError> {
        self.find_section(ABOUT).await
    }

    async fn upsert_about(&self, section: &AboutSection) -> Result<(), StoreError> {
        self.upsert_section(ABOUT, &section.id, section).await
    }

    async fn find_skills(&self) -> Result<Option<SkillsSection>, StoreError> {
        self.find_section(SKILLS).await
    }

    async fn upsert_skills(&self, section: &SkillsSection) -> Result<(), StoreError> {
        self.upsert_section(SKILLS, &section.id, section).await
    }

    async fn find_contact_info(&self) -> Result<Option<ContactInfo>, StoreError> {
        self.find_section(CONTACT).await
    }

    async fn upsert_contact_info(&self, section: &ContactInfo) -> Result<(), StoreError> {
        self.upsert_section(CONTACT, &section.id, section).await
    }

    async fn insert_project(&self, project: &Project) -> Result<(), StoreError> {
        self.insert_entry(PROJECTS, project).await
    }

    async fn list_projects(&self, limit: i64) -> Result<Vec<Project>, StoreError> {
        self.list_recent(PROJECTS, limit).await
    }

    async fn featured_projects(&self, limit: i64) -> Result<Vec<Project>, StoreError> {
        let cursor = self
            .collection::<Project>(PROJECTS)
            .find(doc! { "featured": true })
            .limit(limit)
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn find_project(&self, id: &str) -> Result<Option<Project>, StoreError> {
        Ok(self
            .collection::<Project>(PROJECTS)
            .find_one(doc! { "id": id })
            .await?)
    }

    async fn replace_project(&self, project: &Project) -> Result<(), StoreError> {
        self.collection::<Project>(PROJECTS)
            .replace_one(doc! { "id": &project.id }, project)
            .await?;

        Ok(())
    }

    async fn delete_project(&self, id: &str) -> Result<u64, StoreError> {
        let result = self
            .collection::<Project>(PROJECTS)
            .delete_one(doc! { "id": id })
            .await?;

        Ok(result.deleted_count)
    }

    async fn insert_education(&self, entry: &Education) -> Result<(), StoreError> {
        self.insert_entry(EDUCATION, entry).await
    }

    async fn list_education(&self, limit: i64) -> Result<Vec<Education>, StoreError> {
        self.list_recent(EDUCATION, limit).await
    }

    async fn insert_experience(&self, entry: &Experience) -> Result<(), StoreError> {
        self.insert_entry(EXPERIENCE, entry).await
    }

    async fn list_experience(&self, limit: i64) -> Result<Vec<Experience>, StoreError> {
        self.list_recent(EXPERIENCE, limit).await
    }

    async fn insert_achievement(&self, entry: &Achievement) -> Result<(), StoreError> {
        self.insert_entry(ACHIEVEMENTS, entry).await
    }

    async fn list_achievements(&self, limit: i64) -> Result<Vec<Achievement>, StoreError> {
        self.list_recent(ACHIEVEMENTS, limit).await
    }
}
