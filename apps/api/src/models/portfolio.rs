use serde::{Deserialize, Serialize};

/// A showcased project. Shared by the portfolio view and the resume aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Ordered, no duplicate values within one project.
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_code: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Frontend,
    Backend,
    // accepted on the wire; keyword tagging never produces these
    #[allow(dead_code)]
    Mobile,
    Tools,
    #[allow(dead_code)]
    Other,
}

impl SkillCategory {
    /// Tags a source category title: "frontend" and "backend" are matched
    /// case-insensitively as substrings, everything else is `Tools`.
    pub fn from_category_title(title: &str) -> Self {
        let title = title.to_lowercase();
        if title.contains("frontend") {
            SkillCategory::Frontend
        } else if title.contains("backend") {
            SkillCategory::Backend
        } else {
            SkillCategory::Tools
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: SkillCategory,
}

/// Read-only profile aggregate. Derived once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioData {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub profile_image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
}
