//! Maps the raw profile document onto the two canonical aggregates.

use crate::data::source::{RawProject, RawSource};
use crate::editor::tags;
use crate::models::portfolio::{PortfolioData, Project, Skill, SkillCategory};
use crate::models::resume::{Education, Experience, PersonalInfo, ResumeData};

/// Only the first few projects make it onto the one-page resume.
pub const RESUME_PROJECT_LIMIT: usize = 3;

pub fn to_portfolio(source: &RawSource) -> PortfolioData {
    let info = &source.personal_info;
    PortfolioData {
        name: info.name.clone(),
        title: info.title.clone(),
        bio: info.bio.clone(),
        email: info.email.clone(),
        phone: info.phone.clone(),
        location: info.location.clone(),
        profile_image: info.profile_image.clone(),
        github: info.github.clone(),
        linkedin: info.linkedin.clone(),
        website: info.website.clone(),
        projects: source.projects.iter().map(portfolio_project).collect(),
        skills: categorized_skills(source),
    }
}

pub fn to_resume(source: &RawSource) -> ResumeData {
    let info = &source.personal_info;
    ResumeData {
        personal_info: PersonalInfo {
            name: info.name.clone(),
            email: info.email.clone(),
            phone: info.phone.clone(),
            location: info.location.clone(),
            title: info.title.clone(),
            summary: info.bio.clone(),
            website: info.website.clone(),
        },
        experience: source
            .experience
            .iter()
            .enumerate()
            .map(|(i, exp)| Experience {
                id: (i + 1).to_string(),
                company: exp.company.clone(),
                position: exp.title.clone(),
                duration: exp.years.clone(),
                description: exp.description.clone(),
                achievements: exp.responsibilities.clone(),
            })
            .collect(),
        education: source
            .education
            .iter()
            .enumerate()
            .map(|(i, edu)| Education {
                id: (i + 1).to_string(),
                institution: edu.school.clone(),
                degree: edu.degree.clone(),
                // not present in the source document
                field: String::new(),
                year: edu.years.clone(),
            })
            .collect(),
        projects: Some(
            source
                .projects
                .iter()
                .take(RESUME_PROJECT_LIMIT)
                .map(resume_project)
                .collect(),
        ),
        // editable tag list: no blanks or repeats, or every later skill edit is refused
        skills: tags::distinct(
            categorized_skills(source)
                .iter()
                .map(|skill| skill.name.as_str()),
        ),
    }
}

/// Category order, then skill order within a category, then the free-form
/// "other skills" tagged as tools.
fn categorized_skills(source: &RawSource) -> Vec<Skill> {
    source
        .skills
        .categories
        .iter()
        .flat_map(|category| {
            let tag = SkillCategory::from_category_title(&category.title);
            category.skills.iter().map(move |skill| Skill {
                name: skill.name.clone(),
                category: tag,
            })
        })
        .chain(source.skills.other_skills.iter().map(|name| Skill {
            name: name.clone(),
            category: SkillCategory::Tools,
        }))
        .collect()
}

fn portfolio_project(raw: &RawProject) -> Project {
    Project {
        id: raw.id.to_string(),
        title: raw.title.clone(),
        description: raw.description.clone(),
        technologies: tags::distinct(raw.technologies.iter().map(String::as_str)),
        image_url: raw.image.clone(),
        link: raw.link.clone(),
        source_code: raw.source_code.clone(),
    }
}

fn resume_project(raw: &RawProject) -> Project {
    Project {
        id: raw.id.to_string(),
        title: raw.title.clone(),
        description: raw.description.clone(),
        technologies: tags::distinct(raw.technologies.iter().map(String::as_str)),
        image_url: raw.image.clone(),
        link: None,
        source_code: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(json: serde_json::Value) -> RawSource {
        serde_json::from_value(json).unwrap()
    }

    fn sample() -> RawSource {
        source(serde_json::json!({
            "personalInfo": {
                "name": "Alex Morgan",
                "title": "Full Stack Developer",
                "bio": "Ships web and mobile apps.",
                "email": "alex@example.com",
                "phone": "+1 555 0100",
                "location": "Austin, TX",
                "profileImage": "profile.png",
                "github": "https://github.com/alexm"
            },
            "experience": [
                {"title": "Engineer", "company": "Acme", "years": "2020-2022", "description": "", "responsibilities": []},
                {"title": "Intern", "company": "Initech", "years": "2019", "description": "Support tooling"}
            ],
            "education": [
                {"school": "State University", "degree": "B.S. Computer Science", "years": "2015-2019"}
            ],
            "projects": [
                {"id": 1, "title": "One", "description": "d1", "technologies": ["Rust"], "image": "one.png", "link": "https://one.dev", "sourceCode": "https://git/one"},
                {"id": "2", "title": "Two", "description": "d2", "technologies": []},
                {"id": 3, "title": "Three", "description": "d3", "technologies": ["Go"]},
                {"id": 4, "title": "Four", "description": "d4", "technologies": ["C"]}
            ],
            "skills": {
                "categories": [
                    {"title": "Frontend", "skills": [{"name": "React"}, {"name": "CSS"}]},
                    {"title": "Backend Development", "skills": [{"name": "Rust"}]},
                    {"title": "DevOps", "skills": [{"name": "Docker"}]}
                ],
                "otherSkills": ["Figma", "Jira"]
            }
        }))
    }

    #[test]
    fn test_experience_scenario_mapping() {
        let resume = to_resume(&sample());
        assert_eq!(
            resume.experience[0],
            Experience {
                id: "1".to_string(),
                company: "Acme".to_string(),
                position: "Engineer".to_string(),
                duration: "2020-2022".to_string(),
                description: String::new(),
                achievements: vec![],
            }
        );
        assert_eq!(resume.experience[1].id, "2");
        assert!(resume.experience[1].achievements.is_empty());
    }

    #[test]
    fn test_lengths_match_source() {
        let raw = sample();
        let resume = to_resume(&raw);
        assert_eq!(resume.experience.len(), raw.experience.len());
        assert_eq!(resume.education.len(), raw.education.len());
        // 4 categorized + 2 other
        assert_eq!(resume.skills.len(), 6);
    }

    #[test]
    fn test_resume_skills_order() {
        let resume = to_resume(&sample());
        assert_eq!(
            resume.skills,
            vec!["React", "CSS", "Rust", "Docker", "Figma", "Jira"]
        );
    }

    #[test]
    fn test_portfolio_skill_categories() {
        let portfolio = to_portfolio(&sample());
        let categories: Vec<_> = portfolio.skills.iter().map(|s| s.category).collect();
        assert_eq!(
            categories,
            vec![
                SkillCategory::Frontend,
                SkillCategory::Frontend,
                SkillCategory::Backend,
                SkillCategory::Tools,
                SkillCategory::Tools,
                SkillCategory::Tools,
            ]
        );
        assert_eq!(portfolio.skills[4].name, "Figma");
    }

    #[test]
    fn test_resume_takes_first_three_projects() {
        let resume = to_resume(&sample());
        let ids: Vec<_> = resume.projects().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(resume.projects()[0].link, None);
        assert_eq!(resume.projects()[0].image_url.as_deref(), Some("one.png"));
    }

    #[test]
    fn test_portfolio_keeps_all_projects() {
        let portfolio = to_portfolio(&sample());
        assert_eq!(portfolio.projects.len(), 4);
        assert_eq!(
            portfolio.projects[0].source_code.as_deref(),
            Some("https://git/one")
        );
        assert_eq!(portfolio.projects[1].id, "2");
    }

    #[test]
    fn test_education_field_defaults_empty() {
        let resume = to_resume(&sample());
        assert_eq!(resume.education[0].id, "1");
        assert_eq!(resume.education[0].institution, "State University");
        assert_eq!(resume.education[0].field, "");
        assert_eq!(resume.education[0].year, "2015-2019");
    }

    #[test]
    fn test_summary_comes_from_bio() {
        let resume = to_resume(&sample());
        assert_eq!(resume.personal_info.summary, "Ships web and mobile apps.");
        assert_eq!(resume.personal_info.website, None);
    }

    #[test]
    fn test_repeated_names_collapse_in_editable_lists() {
        let mut raw = sample();
        raw.skills.other_skills.push("React".to_string());
        raw.skills.other_skills.push(" CSS ".to_string());
        raw.projects[0].technologies = vec!["Rust".into(), "Go".into(), "Rust".into()];

        let resume = to_resume(&raw);
        assert_eq!(
            resume.skills,
            vec!["React", "CSS", "Rust", "Docker", "Figma", "Jira"]
        );
        assert_eq!(resume.projects()[0].technologies, vec!["Rust", "Go"]);
        assert_eq!(to_portfolio(&raw).projects[0].technologies, vec!["Rust", "Go"]);
    }

    #[test]
    fn test_mapping_is_deterministic() {
        let raw = sample();
        assert_eq!(to_resume(&raw), to_resume(&raw));
        assert_eq!(to_portfolio(&raw), to_portfolio(&raw));
    }
}
