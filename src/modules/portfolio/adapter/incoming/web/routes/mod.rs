pub mod achievements;
pub mod create_project;
pub mod delete_project;
pub mod education;
pub mod experience;
pub mod get_portfolio;
pub mod get_projects;
pub mod update_about;
pub mod update_contact_info;
pub mod update_hero;
pub mod update_project;
pub mod update_skills;

pub use achievements::{create_achievement_handler, get_achievements_handler};
pub use create_project::create_project_handler;
pub use delete_project::delete_project_handler;
pub use education::{create_education_handler, get_education_handler};
pub use experience::{create_experience_handler, get_experience_handler};
pub use get_portfolio::get_portfolio_handler;
pub use get_projects::get_projects_handler;
pub use update_about::update_about_handler;
pub use update_contact_info::update_contact_info_handler;
pub use update_hero::update_hero_handler;
pub use update_project::update_project_handler;
pub use update_skills::update_skills_handler;
