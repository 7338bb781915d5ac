//! Raw shape of the bundled profile document (`basic_info.json`).
//!
//! Required keys are plain fields so a missing key fails deserialization;
//! only the genuinely optional ones are `Option` / `#[serde(default)]`.

use std::fmt;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSource {
    pub personal_info: RawPersonalInfo,
    pub experience: Vec<RawExperience>,
    pub education: Vec<RawEducation>,
    pub projects: Vec<RawProject>,
    pub skills: RawSkills,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPersonalInfo {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub profile_image: String,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawExperience {
    pub title: String,
    pub company: String,
    pub years: String,
    pub description: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawEducation {
    pub school: String,
    pub degree: String,
    pub years: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProject {
    pub id: RawId,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image: Option<String>,
    pub link: Option<String>,
    pub source_code: Option<String>,
}

/// Project ids appear as numbers or strings in the source.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(u64),
    Text(String),
}

impl fmt::Display for RawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawId::Number(n) => write!(f, "{n}"),
            RawId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSkills {
    pub categories: Vec<RawSkillCategory>,
    pub other_skills: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSkillCategory {
    pub title: String,
    pub skills: Vec<RawSkillName>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSkillName {
    pub name: String,
}
