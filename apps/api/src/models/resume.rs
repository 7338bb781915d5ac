use serde::{Deserialize, Serialize};

use crate::models::portfolio::Project;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub duration: String,
    pub description: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub title: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Field-level overrides for [`PersonalInfo`]. Absent fields keep their value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfoPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    /// A blank website clears the field.
    pub website: Option<String>,
}

impl PersonalInfo {
    /// Returns a new value with the patch's fields replaced.
    pub fn patched(&self, patch: PersonalInfoPatch) -> PersonalInfo {
        let website = match patch.website {
            Some(w) if w.trim().is_empty() => None,
            Some(w) => Some(w),
            None => self.website.clone(),
        };
        PersonalInfo {
            name: patch.name.unwrap_or_else(|| self.name.clone()),
            email: patch.email.unwrap_or_else(|| self.email.clone()),
            phone: patch.phone.unwrap_or_else(|| self.phone.clone()),
            location: patch.location.unwrap_or_else(|| self.location.clone()),
            title: patch.title.unwrap_or_else(|| self.title.clone()),
            summary: patch.summary.unwrap_or_else(|| self.summary.clone()),
            website,
        }
    }
}

/// The editable resume aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Project>>,
    pub skills: Vec<String>,
}

impl ResumeData {
    /// Projects as a slice; an absent list reads as empty.
    pub fn projects(&self) -> &[Project] {
        self.projects.as_deref().unwrap_or(&[])
    }
}
