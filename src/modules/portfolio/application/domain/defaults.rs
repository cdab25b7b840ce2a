// src/modules/portfolio/application/domain/defaults.rs
//
// Placeholder payloads for the aggregate read. When a singleton section has
// never been written, the portfolio endpoint substitutes these in-process so
// a freshly provisioned store still renders a page. Nothing here is ever
// persisted; the placeholders get a throwaway id per read.

use chrono::Utc;

use super::sections::{
    AboutSection, ContactInfo, HeroSection, SkillCategory, SkillsSection, SocialLinks,
};
use crate::shared::storage::new_document_id;

pub fn hero_or_default(stored: Option<HeroSection>) -> HeroSection {
    stored.unwrap_or_else(|| HeroSection {
        id: new_document_id(),
        name: "Your Name Here".to_string(),
        title: "Computer Science Engineering Student".to_string(),
        subtitle: "Full Stack Developer | AI Enthusiast | Problem Solver".to_string(),
        description: "Passionate about creating innovative solutions through code.".to_string(),
        resume_url: Some("#".to_string()),
        social_links: SocialLinks {
            github: Some("https://github.com/yourusername".to_string()),
            linkedin: Some("https://linkedin.com/in/yourusername".to_string()),
            twitter: Some("https://twitter.com/yourusername".to_string()),
            instagram: None,
            email: Some("your.email@example.com".to_string()),
        },
        updated_at: Utc::now(),
    })
}

pub fn about_or_default(stored: Option<AboutSection>) -> AboutSection {
    stored.unwrap_or_else(|| AboutSection {
        id: new_document_id(),
        title: "About Me".to_string(),
        description: "I'm a passionate Computer Science Engineering student with a strong \
                      foundation in software development."
            .to_string(),
        highlights: vec![
            "🎓 Currently pursuing B.Tech in Computer Science Engineering".to_string(),
            "💻 3+ years of programming experience".to_string(),
            "🚀 Built 10+ projects using modern technologies".to_string(),
        ],
        image_url: Some(
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop&crop=face"
                .to_string(),
        ),
        updated_at: Utc::now(),
    })
}

pub fn skills_or_default(stored: Option<SkillsSection>) -> SkillsSection {
    stored.unwrap_or_else(|| SkillsSection {
        id: new_document_id(),
        title: "Technical Skills".to_string(),
        categories: vec![
            SkillCategory {
                name: "Programming Languages".to_string(),
                skills: vec![
                    "JavaScript".to_string(),
                    "Python".to_string(),
                    "Java".to_string(),
                    "C++".to_string(),
                    "TypeScript".to_string(),
                    "SQL".to_string(),
                ],
            },
            SkillCategory {
                name: "Frontend Development".to_string(),
                skills: vec![
                    "React".to_string(),
                    "HTML5".to_string(),
                    "CSS3".to_string(),
                    "Tailwind CSS".to_string(),
                    "Bootstrap".to_string(),
                ],
            },
        ],
        updated_at: Utc::now(),
    })
}

pub fn contact_or_default(stored: Option<ContactInfo>) -> ContactInfo {
    stored.unwrap_or_else(|| ContactInfo {
        id: new_document_id(),
        title: "Get In Touch".to_string(),
        description: "I'm always open to discussing new opportunities.".to_string(),
        email: "your.email@example.com".to_string(),
        phone: "+91 XXXXX XXXXX".to_string(),
        location: "City, State, India".to_string(),
        social_links: SocialLinks {
            github: Some("https://github.com/yourusername".to_string()),
            linkedin: Some("https://linkedin.com/in/yourusername".to_string()),
            twitter: Some("https://twitter.com/yourusername".to_string()),
            instagram: Some("https://instagram.com/yourusername".to_string()),
            email: None,
        },
        updated_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_sections_get_the_placeholder_payload() {
        let hero = hero_or_default(None);
        assert_eq!(hero.name, "Your Name Here");
        assert_eq!(hero.resume_url.as_deref(), Some("#"));

        let about = about_or_default(None);
        assert_eq!(about.title, "About Me");
        assert_eq!(about.highlights.len(), 3);

        let skills = skills_or_default(None);
        assert_eq!(skills.title, "Technical Skills");
        assert_eq!(skills.categories[0].name, "Programming Languages");

        let contact = contact_or_default(None);
        assert_eq!(contact.title, "Get In Touch");
        assert_eq!(
            contact.social_links.instagram.as_deref(),
            Some("https://instagram.com/yourusername")
        );
    }

    #[test]
    fn stored_sections_pass_through_untouched() {
        let mut stored = hero_or_default(None);
        stored.id = "hero-1".to_string();
        stored.name = "Ada".to_string();

        let resolved = hero_or_default(Some(stored.clone()));
        assert_eq!(resolved, stored);
    }

    #[test]
    fn placeholder_ids_are_throwaway() {
        // Two reads of an absent section must not look like the same document.
        let a = hero_or_default(None);
        let b = hero_or_default(None);
        assert_ne!(a.id, b.id);
    }
}
