// src/modules/portfolio/application/aggregate.rs
//
// Assembly of the full-portfolio payload. Pure with respect to HTTP: takes
// the store port, applies the singleton defaults, and never writes anything.

use super::domain::defaults::{
    about_or_default, contact_or_default, hero_or_default, skills_or_default,
};
use super::domain::entries::PortfolioData;
use super::ports::outgoing::PortfolioStore;
use crate::shared::storage::StoreError;

/// Caps for the aggregate's sub-lists.
pub const FEATURED_PROJECT_LIMIT: i64 = 10;
pub const RECENT_ENTRY_LIMIT: i64 = 10;

pub async fn assemble_portfolio(store: &dyn PortfolioStore) -> Result<PortfolioData, StoreError> {
    let hero = hero_or_default(store.find_hero().await?);
    let about = about_or_default(store.find_about().await?);
    let skills = skills_or_default(store.find_skills().await?);
    let contact = contact_or_default(store.find_contact_info().await?);

    let projects = store.featured_projects(FEATURED_PROJECT_LIMIT).await?;
    let education = store.list_education(RECENT_ENTRY_LIMIT).await?;
    let experience = store.list_experience(RECENT_ENTRY_LIMIT).await?;
    let achievements = store.list_achievements(RECENT_ENTRY_LIMIT).await?;

    Ok(PortfolioData {
        hero,
        about,
        skills,
        projects,
        education,
        experience,
        achievements,
        contact,
    })
}
