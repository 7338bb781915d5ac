//! Renders `ResumeData` as a standalone HTML page for PDF conversion.
//!
//! Section order is fixed: header, summary, experience, education, projects,
//! skills. Only "Key Projects" is omitted when its list is empty; every
//! other heading is always present.

use crate::models::portfolio::Project;
use crate::models::resume::{Education, Experience, PersonalInfo, ResumeData};
use crate::render::markup::Markup;
use crate::render::styles::RESUME_CSS;

pub const EXPERIENCE_HEADING: &str = "Professional Experience";
pub const EDUCATION_HEADING: &str = "Education";
pub const PROJECTS_HEADING: &str = "Key Projects";
pub const SKILLS_HEADING: &str = "Technical Skills";

/// Renders the resume. Pure: identical input gives identical output.
pub fn render_resume(resume: &ResumeData) -> String {
    let mut m = Markup::new();

    m.raw("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n")
        .open("title", "")
        .raw("Resume - ")
        .text(&resume.personal_info.name)
        .close("title")
        .raw("<style>")
        .raw(RESUME_CSS)
        .raw("</style>\n</head>\n<body>\n");

    header(&mut m, &resume.personal_info);
    m.element("div", "summary", &resume.personal_info.summary);

    m.element("h2", "", EXPERIENCE_HEADING);
    for exp in &resume.experience {
        experience(&mut m, exp);
    }

    m.element("h2", "", EDUCATION_HEADING);
    for edu in &resume.education {
        education(&mut m, edu);
    }

    let projects = resume.projects();
    if !projects.is_empty() {
        m.element("h2", "", PROJECTS_HEADING);
        for project in projects {
            self::project(&mut m, project);
        }
    }

    m.element("h2", "", SKILLS_HEADING);
    tag_row(&mut m, &resume.skills);

    m.raw("</body>\n</html>\n");
    m.into_string()
}

fn header(m: &mut Markup, info: &PersonalInfo) {
    m.element("h1", "", &info.name.to_uppercase())
        .element("div", "title", &info.title);

    m.open("div", "contact")
        .element("span", "", &format!("\u{2709} {}", info.email))
        .element("span", "", &format!("\u{260E} {}", info.phone))
        .close("div");

    m.open("div", "contact")
        .element("span", "", &format!("\u{2302} {}", info.location));
    if let Some(website) = info.website.as_deref().filter(|w| !w.trim().is_empty()) {
        m.open("span", "")
            .raw("\u{1F310} ")
            .link(website, website)
            .close("span");
    }
    m.close("div");
}

fn experience(m: &mut Markup, exp: &Experience) {
    m.open("div", "section-spacing")
        .element("div", "job-title", &exp.position)
        .element(
            "div",
            "company",
            &format!("{} | {}", exp.company, exp.duration),
        );
    if !exp.description.is_empty() {
        m.element("div", "description", &exp.description);
    }
    if !exp.achievements.is_empty() {
        m.open("ul", "achievements-list");
        for achievement in &exp.achievements {
            m.element("li", "achievement", achievement);
        }
        m.close("ul");
    }
    m.close("div");
}

fn education(m: &mut Markup, edu: &Education) {
    let degree = if edu.field.is_empty() {
        format!("{} | {}", edu.degree, edu.year)
    } else {
        format!("{} in {} | {}", edu.degree, edu.field, edu.year)
    };
    m.open("div", "section-spacing")
        .element("div", "degree", &degree)
        .element("div", "institution", &edu.institution)
        .close("div");
}

fn project(m: &mut Markup, project: &Project) {
    m.open("div", "section-spacing")
        .element("div", "job-title", &project.title)
        .element("div", "description", &project.description);
    if !project.technologies.is_empty() {
        tag_row(m, &project.technologies);
    }
    m.close("div");
}

fn tag_row(m: &mut Markup, tags: &[String]) {
    m.open("div", "skills-container");
    for tag in tags {
        m.open("span", "skill").text(tag).close_inline("span");
    }
    m.close("div");
}

/// Suggested file stem for the exported document, e.g. `Resume_Alex_Morgan`.
pub fn document_title(resume: &ResumeData) -> String {
    let name: String = resume
        .personal_info
        .name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    let safe: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-')
        .collect();
    if safe.is_empty() {
        "Resume".to_string()
    } else {
        format!("Resume_{safe}")
    }
}
